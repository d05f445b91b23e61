pub mod config;
mod analysis;
mod context;
mod scrape;
mod severity;
mod signal;

pub use analysis::*;
pub use config::Config;
pub use context::DocumentContext;
pub use scrape::{ScrapeOutcome, SiteSummary};
pub use severity::SeverityTier;
pub use signal::{Signal, SignalLevel};
