use serde::Deserialize;
use std::fs;
use std::path::Path;

const ENV_CONFIG_PATH: &str = "TRUST_LENS_CONFIG_PATH";
const DEFAULT_CONFIG_PATH: &str = "config.yaml";

const ENV_GEMINI_API_KEY: &str = "GEMINI_API_KEY";
const ENV_SCRAPE_API_KEY: &str = "SCRAPE_DO_API_KEY";

const DEFAULT_SCRAPE_BASE_URL: &str = "http://api.scrape.do";
const DEFAULT_ENHANCEMENT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
const DEFAULT_ENHANCEMENT_MODEL: &str = "gemini-1.5-flash";

/// Scrape collaborator settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ScrapeConfig {
    /// Never read from the config file
    #[serde(skip)]
    pub api_key: Option<String>,
    pub base_url: String,
    pub timeout_secs: u64,
}

impl Default for ScrapeConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_SCRAPE_BASE_URL.to_string(),
            timeout_secs: 30,
        }
    }
}

/// Summary enhancement collaborator settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct EnhancementConfig {
    /// Never read from the config file
    #[serde(skip)]
    pub api_key: Option<String>,
    pub base_url: String,
    pub model: String,
    pub timeout_secs: u64,
    pub temperature: f32,
    pub max_output_tokens: u32,
}

impl Default for EnhancementConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_ENHANCEMENT_BASE_URL.to_string(),
            model: DEFAULT_ENHANCEMENT_MODEL.to_string(),
            timeout_secs: 15,
            temperature: 0.2,
            max_output_tokens: 150,
        }
    }
}

/// YAML configuration file structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub scrape: ScrapeConfig,
    #[serde(default)]
    pub enhancement: EnhancementConfig,
}

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub scrape: ScrapeConfig,
    pub enhancement: EnhancementConfig,
    pub port: u16,
    pub host: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            scrape: ScrapeConfig::default(),
            enhancement: EnhancementConfig::default(),
            port: 8000,
            host: "0.0.0.0".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from environment and config file
    pub fn from_env() -> Self {
        let port = std::env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(8000);

        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());

        let config_path = std::env::var(ENV_CONFIG_PATH)
            .unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());

        let file = Self::load_config_file(&config_path).unwrap_or_default();

        let mut scrape = file.scrape;
        scrape.api_key = non_empty_env(ENV_SCRAPE_API_KEY);

        let mut enhancement = file.enhancement;
        enhancement.api_key = non_empty_env(ENV_GEMINI_API_KEY);

        if scrape.api_key.is_none() {
            tracing::info!("{} not set, website scraping disabled", ENV_SCRAPE_API_KEY);
        }
        if enhancement.api_key.is_none() {
            tracing::info!("{} not set, summary enhancement disabled", ENV_GEMINI_API_KEY);
        }

        Self {
            scrape,
            enhancement,
            port,
            host,
        }
    }

    /// Load configuration from YAML file
    fn load_config_file(path: &str) -> Option<ConfigFile> {
        let path = Path::new(path);

        if !path.exists() {
            tracing::debug!(path = %path.display(), "Config file not found, using defaults");
            return None;
        }

        match fs::read_to_string(path) {
            Ok(contents) => parse_config_file(&contents).or_else(|| {
                tracing::warn!(path = %path.display(), "Failed to parse config file, using defaults");
                None
            }),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Failed to read config file, using defaults");
                None
            }
        }
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Parse YAML contents; an empty document yields the defaults
fn parse_config_file(contents: &str) -> Option<ConfigFile> {
    let contents = contents.trim();
    if contents.is_empty() {
        return Some(ConfigFile::default());
    }

    match serde_yaml::from_str(contents) {
        Ok(config) => Some(config),
        Err(e) => {
            tracing::debug!(error = %e, "Invalid YAML configuration");
            None
        }
    }
}

fn non_empty_env(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
