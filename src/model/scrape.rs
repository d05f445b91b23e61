/// Structural summary of a scraped web page
#[derive(Debug, Clone, PartialEq)]
pub struct SiteSummary {
    pub title: String,
    pub description: String,
    pub has_contact: bool,
    pub has_about: bool,
    /// Social network hosts referenced by the page
    pub social_links: Vec<String>,
    pub domain: String,
}

/// Result of asking the scrape collaborator about a URL
#[derive(Debug, Clone, PartialEq)]
pub enum ScrapeOutcome {
    Success(SiteSummary),
    Failure { error: String },
}

impl ScrapeOutcome {
    pub fn failure(error: impl Into<String>) -> Self {
        ScrapeOutcome::Failure {
            error: error.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, ScrapeOutcome::Success(_))
    }

    pub fn summary(&self) -> Option<&SiteSummary> {
        match self {
            ScrapeOutcome::Success(summary) => Some(summary),
            ScrapeOutcome::Failure { .. } => None,
        }
    }
}
