use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{DocumentContext, ScrapeOutcome, SeverityTier, Signal};

fn default_content_type() -> String {
    "text".to_string()
}

/// Body of `POST /analyze`
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct AnalysisRequest {
    pub content: String,
    /// Input-type tag, e.g. `text` or `email`
    #[serde(default = "default_content_type")]
    pub content_type: String,
}

/// Complete verdict for one analyzed text
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct AnalysisResult {
    pub overall_score: u8,
    pub overall_level: String,
    pub signals: Vec<Signal>,
    pub external_checks: Vec<ExternalCheck>,
    pub summary: String,
    #[serde(rename = "whatYouMightMiss")]
    pub what_you_might_miss: String,
    #[serde(rename = "recommendedActions")]
    pub recommended_actions: Vec<String>,
    #[serde(rename = "businessPriority")]
    pub business_priority: Option<BusinessPriorityAssessment>,
    #[serde(rename = "companyAssessment")]
    pub company_assessment: Option<CompanyAssessment>,
    #[serde(rename = "detectedContext")]
    pub detected_context: DocumentContext,
    #[serde(rename = "concernCount")]
    pub concern_count: usize,
    #[serde(rename = "severityLevel")]
    pub severity_level: SeverityTier,
}

/// Record of one collaborator lookup made during analysis
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct ExternalCheck {
    pub check: String,
    pub target: String,
    pub success: bool,
    pub domain: Option<String>,
    pub error: Option<String>,
}

impl ExternalCheck {
    pub fn website_scrape(url: &str, outcome: &ScrapeOutcome) -> Self {
        let (domain, error) = match outcome {
            ScrapeOutcome::Success(summary) => (Some(summary.domain.clone()), None),
            ScrapeOutcome::Failure { error } => (None, Some(error.clone())),
        };

        Self {
            check: "website_scrape".to_string(),
            target: url.to_string(),
            success: outcome.is_success(),
            domain,
            error,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum StrategicImportance {
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum AttentionWorthiness {
    Engage,
    Monitor,
    Ignore,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum RiskRewardBalance {
    Favorable,
    Neutral,
    Unfavorable,
}

/// Strategic-priority verdict for business contexts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BusinessPriorityAssessment {
    pub strategic_importance: StrategicImportance,
    pub attention_worthiness: AttentionWorthiness,
    pub risk_to_reward_balance: RiskRewardBalance,
    pub time_recommendation: String,
    pub confidence_factors: Vec<String>,
    pub concerns: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum Visibility {
    Moderate,
    Limited,
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum TrackRecord {
    Claimed,
    Unverified,
    Unknown,
}

/// Company-credibility verdict for business contexts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CompanyAssessment {
    pub visibility: Visibility,
    pub track_record: TrackRecord,
    pub flags: Vec<String>,
    pub confidence_factors: Vec<String>,
}
