//! Business-context verdicts: strategic priority and company credibility

use regex::Regex;

use crate::model::{
    AttentionWorthiness, BusinessPriorityAssessment, CompanyAssessment, DocumentContext,
    RiskRewardBalance, ScrapeOutcome, SeverityTier, Signal, SignalLevel, StrategicImportance,
    TrackRecord, Visibility,
};

/// Free mail providers that do not count as a corporate domain
const PERSONAL_EMAIL_DOMAINS: &[&str] = &["gmail.com", "yahoo.com", "hotmail.com", "outlook.com"];

const NO_CONFIDENCE_FACTORS: &str = "Limited positive indicators";
const NO_CONCERNS: &str = "No specific concerns flagged";

/// Both business verdicts for one analysis
#[derive(Debug, Clone, PartialEq)]
pub struct BusinessAssessment {
    pub priority: BusinessPriorityAssessment,
    pub company: CompanyAssessment,
}

/// Derives strategic priority and company credibility for business contexts
pub struct BusinessAssessor {
    corporate_email: Regex,
    company_name: Regex,
}

impl BusinessAssessor {
    pub fn new() -> Self {
        Self {
            corporate_email: Regex::new(r"[\w.]+@([\w]+\.(com|io|ai|co|org|net))")
                .expect("email pattern is a valid regex"),
            company_name: Regex::new(
                r"(?:at|from|of)\s+([A-Z][\w\s]+(?:Inc|LLC|Ltd|Corp|Company|Solutions|Technologies|AI|Labs))",
            )
            .expect("company name pattern is a valid regex"),
        }
    }

    /// Both verdicts, or `None` outside partnership, client and vendor contexts
    pub fn assess(
        &self,
        context: DocumentContext,
        content: &str,
        signals: &[Signal],
        severity: SeverityTier,
        scraped: Option<&ScrapeOutcome>,
    ) -> Option<BusinessAssessment> {
        if !context.is_business() {
            return None;
        }

        Some(BusinessAssessment {
            priority: assess_business_priority(signals, severity),
            company: self.assess_company(content, scraped),
        })
    }

    /// Company credibility from the raw text and an optional scrape
    pub fn assess_company(&self, content: &str, scraped: Option<&ScrapeOutcome>) -> CompanyAssessment {
        let mut flags = Vec::new();
        let mut confidence_factors = Vec::new();

        let email_domain = self
            .corporate_email
            .captures(content)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().to_lowercase());

        let track_record = match email_domain {
            Some(domain) if PERSONAL_EMAIL_DOMAINS.contains(&domain.as_str()) => {
                flags.push("Using personal email provider".to_string());
                TrackRecord::Unverified
            }
            Some(_) => {
                confidence_factors.push("Corporate email domain".to_string());
                TrackRecord::Claimed
            }
            None => {
                flags.push("No corporate email provided".to_string());
                TrackRecord::Unknown
            }
        };

        if self.company_name.is_match(content) {
            confidence_factors.push("Company name provided".to_string());
        } else {
            flags.push("Limited public visibility".to_string());
        }

        let visibility = match scraped.and_then(ScrapeOutcome::summary) {
            Some(site) if !site.social_links.is_empty() => {
                confidence_factors.push("Active social media presence".to_string());
                Visibility::Moderate
            }
            Some(_) => {
                flags.push("Limited online presence".to_string());
                Visibility::Limited
            }
            None => Visibility::Unknown,
        };

        CompanyAssessment {
            visibility,
            track_record,
            flags,
            confidence_factors,
        }
    }
}

impl Default for BusinessAssessor {
    fn default() -> Self {
        Self::new()
    }
}

/// Strategic priority from the signal mix, overridden by elevated severity
pub fn assess_business_priority(
    signals: &[Signal],
    severity: SeverityTier,
) -> BusinessPriorityAssessment {
    let red_count = signals.iter().filter(|s| s.level == SignalLevel::Red).count();
    let green_count = signals
        .iter()
        .filter(|s| s.level == SignalLevel::Green)
        .count();

    let (strategic_importance, attention_worthiness, risk_to_reward_balance, time_recommendation) =
        if severity.is_elevated() {
            (
                StrategicImportance::Low,
                AttentionWorthiness::Ignore,
                RiskRewardBalance::Unfavorable,
                "Deprioritize—high risk indicators present",
            )
        } else if green_count >= 2 && red_count == 0 {
            (
                StrategicImportance::High,
                AttentionWorthiness::Engage,
                RiskRewardBalance::Favorable,
                "Warrants prompt attention",
            )
        } else if green_count >= 1 && red_count <= 1 {
            (
                StrategicImportance::Medium,
                AttentionWorthiness::Monitor,
                RiskRewardBalance::Neutral,
                "Evaluate alongside other opportunities",
            )
        } else {
            (
                StrategicImportance::Low,
                AttentionWorthiness::Ignore,
                RiskRewardBalance::Unfavorable,
                "Does not merit significant time investment",
            )
        };

    let confidence_factors = names_or(signals, |l| l == SignalLevel::Green, NO_CONFIDENCE_FACTORS);
    let concerns = names_or(
        signals,
        |l| matches!(l, SignalLevel::Red | SignalLevel::Yellow),
        NO_CONCERNS,
    );

    BusinessPriorityAssessment {
        strategic_importance,
        attention_worthiness,
        risk_to_reward_balance,
        time_recommendation: time_recommendation.to_string(),
        confidence_factors,
        concerns,
    }
}

/// Names of signals whose level passes `keep`, or a single placeholder
fn names_or(signals: &[Signal], keep: impl Fn(SignalLevel) -> bool, placeholder: &str) -> Vec<String> {
    let names: Vec<String> = signals
        .iter()
        .filter(|s| keep(s.level))
        .map(|s| s.name.clone())
        .collect();

    if names.is_empty() {
        vec![placeholder.to_string()]
    } else {
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::SiteSummary;

    fn signal(name: &str, level: SignalLevel) -> Signal {
        Signal::new(name, level, "", 0.8)
    }

    fn site(social_links: &[&str]) -> ScrapeOutcome {
        ScrapeOutcome::Success(SiteSummary {
            title: "Acme".to_string(),
            description: String::new(),
            has_contact: true,
            has_about: true,
            social_links: social_links.iter().map(|s| s.to_string()).collect(),
            domain: "acme.io".to_string(),
        })
    }

    #[test]
    fn test_elevated_severity_forces_low_priority() {
        let signals = vec![
            signal("Verified Domain", SignalLevel::Green),
            signal("Known Partner", SignalLevel::Green),
        ];

        for severity in [SeverityTier::High, SeverityTier::Critical] {
            let priority = assess_business_priority(&signals, severity);
            assert_eq!(priority.strategic_importance, StrategicImportance::Low);
            assert_eq!(priority.attention_worthiness, AttentionWorthiness::Ignore);
            assert_eq!(priority.risk_to_reward_balance, RiskRewardBalance::Unfavorable);
        }
    }

    #[test]
    fn test_two_greens_no_reds_is_high_priority() {
        let signals = vec![
            signal("Verified Domain", SignalLevel::Green),
            signal("Known Partner", SignalLevel::Green),
            signal("Limited Verifiability", SignalLevel::Yellow),
        ];
        let priority = assess_business_priority(&signals, SeverityTier::Low);

        assert_eq!(priority.strategic_importance, StrategicImportance::High);
        assert_eq!(priority.attention_worthiness, AttentionWorthiness::Engage);
        assert_eq!(priority.risk_to_reward_balance, RiskRewardBalance::Favorable);
        assert_eq!(priority.confidence_factors, vec!["Verified Domain", "Known Partner"]);
        assert_eq!(priority.concerns, vec!["Limited Verifiability"]);
    }

    #[test]
    fn test_one_green_one_red_is_medium_priority() {
        let signals = vec![
            signal("Verified Domain", SignalLevel::Green),
            signal("High-Pressure Tactics", SignalLevel::Red),
        ];
        let priority = assess_business_priority(&signals, SeverityTier::Moderate);

        assert_eq!(priority.strategic_importance, StrategicImportance::Medium);
        assert_eq!(priority.attention_worthiness, AttentionWorthiness::Monitor);
        assert_eq!(priority.risk_to_reward_balance, RiskRewardBalance::Neutral);
    }

    #[test]
    fn test_zero_verifiable_identity_defaults_to_low() {
        let signals = vec![signal("Zero Verifiable Identity", SignalLevel::Red)];
        let priority = assess_business_priority(&signals, SeverityTier::Moderate);

        assert_eq!(priority.strategic_importance, StrategicImportance::Low);
        assert_eq!(priority.attention_worthiness, AttentionWorthiness::Ignore);
        assert_eq!(priority.risk_to_reward_balance, RiskRewardBalance::Unfavorable);
        assert_eq!(priority.confidence_factors, vec![NO_CONFIDENCE_FACTORS]);
        assert_eq!(priority.concerns, vec!["Zero Verifiable Identity"]);
    }

    #[test]
    fn test_no_signals_uses_placeholders() {
        let priority = assess_business_priority(&[], SeverityTier::Low);
        assert_eq!(priority.confidence_factors, vec![NO_CONFIDENCE_FACTORS]);
        assert_eq!(priority.concerns, vec![NO_CONCERNS]);
    }

    #[test]
    fn test_corporate_email_and_company_name() {
        let assessor = BusinessAssessor::new();
        let content = "Hi, I'm Dana from Brightwave Technologies. Reach me at dana@brightwave.io.";

        let company = assessor.assess_company(content, None);

        assert_eq!(company.track_record, TrackRecord::Claimed);
        assert_eq!(company.visibility, Visibility::Unknown);
        assert_eq!(
            company.confidence_factors,
            vec!["Corporate email domain", "Company name provided"]
        );
        assert!(company.flags.is_empty());
    }

    #[test]
    fn test_personal_email_is_flagged() {
        let assessor = BusinessAssessor::new();
        let company = assessor.assess_company("write to bigdeals@gmail.com", None);

        assert_eq!(company.track_record, TrackRecord::Unverified);
        assert_eq!(
            company.flags,
            vec!["Using personal email provider", "Limited public visibility"]
        );
    }

    #[test]
    fn test_missing_email_is_unknown_track_record() {
        let assessor = BusinessAssessor::new();
        let company = assessor.assess_company("let's work together", None);

        assert_eq!(company.track_record, TrackRecord::Unknown);
        assert!(company.flags.contains(&"No corporate email provided".to_string()));
    }

    #[test]
    fn test_visibility_follows_scrape_result() {
        let assessor = BusinessAssessor::new();

        let with_social = site(&["linkedin.com"]);
        let company = assessor.assess_company("hello", Some(&with_social));
        assert_eq!(company.visibility, Visibility::Moderate);
        assert!(company
            .confidence_factors
            .contains(&"Active social media presence".to_string()));

        let without_social = site(&[]);
        let company = assessor.assess_company("hello", Some(&without_social));
        assert_eq!(company.visibility, Visibility::Limited);
        assert!(company.flags.contains(&"Limited online presence".to_string()));

        let failed = ScrapeOutcome::failure("timeout");
        let company = assessor.assess_company("hello", Some(&failed));
        assert_eq!(company.visibility, Visibility::Unknown);
    }

    #[test]
    fn test_assessment_gated_by_context() {
        let assessor = BusinessAssessor::new();

        for ctx in DocumentContext::ALL {
            let result = assessor.assess(ctx, "hello", &[], SeverityTier::Low, None);
            assert_eq!(result.is_some(), ctx.is_business(), "context {}", ctx);
        }
    }
}
