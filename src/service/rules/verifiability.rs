use regex::Regex;

use super::SignalRule;
use crate::model::{DocumentContext, Signal, SignalLevel};

pub const ZERO_VERIFIABLE_IDENTITY: &str = "Zero Verifiable Identity";
pub const LIMITED_VERIFIABILITY: &str = "Limited Verifiability";

const TOTAL_CUES: usize = 4;

/// Checks that a business sender can be independently verified
pub struct VerifiabilityRule {
    website: Regex,
    linkedin: Regex,
    domain_email: Regex,
    company_suffix: Regex,
}

impl VerifiabilityRule {
    pub const NAME: &'static str = "Identity Verification";

    pub fn new() -> Self {
        Self {
            website: Regex::new(r"https?://[^\s]+").expect("website pattern is a valid regex"),
            linkedin: Regex::new(r"linkedin\.com").expect("linkedin pattern is a valid regex"),
            domain_email: Regex::new(r"@[\w]+\.(com|io|ai|co|org|net)")
                .expect("email pattern is a valid regex"),
            company_suffix: Regex::new(r"\b(Inc\.?|LLC|Ltd\.?|Corp\.?|Company)\b")
                .expect("company pattern is a valid regex"),
        }
    }

    /// Number of verifiability cues present, out of four
    pub fn count_cues(&self, content: &str) -> usize {
        let lower = content.to_lowercase();

        [
            self.website.is_match(content),
            self.linkedin.is_match(&lower),
            self.domain_email.is_match(content),
            self.company_suffix.is_match(content),
        ]
        .into_iter()
        .filter(|present| *present)
        .count()
    }
}

impl Default for VerifiabilityRule {
    fn default() -> Self {
        Self::new()
    }
}

impl SignalRule for VerifiabilityRule {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn evaluate(&self, content: &str, _content_type: &str, context: DocumentContext) -> Vec<Signal> {
        if !context.is_business() {
            return Vec::new();
        }

        match self.count_cues(content) {
            0 => vec![Signal::new(
                ZERO_VERIFIABLE_IDENTITY,
                SignalLevel::Red,
                "No company website, LinkedIn, corporate email, or legal name provided. Cannot verify legitimacy.",
                0.9,
            )],
            count @ 1..=2 => vec![Signal::new(
                LIMITED_VERIFIABILITY,
                SignalLevel::Yellow,
                format!(
                    "Only {}/{} verification elements present. Request additional proof of legitimacy.",
                    count, TOTAL_CUES
                ),
                0.75,
            )],
            _ => Vec::new(),
        }
    }
}
