//! Fixed narrative bank
//!
//! Every lookup is an exhaustive match over (family, tier), so a missing
//! combination fails to compile instead of falling through at runtime.

use crate::model::{DocumentContext, SeverityTier};

/// Context grouping used by the "what you might miss" bank
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExplanationFamily {
    Legal,
    Business,
    Consumer,
}

impl From<DocumentContext> for ExplanationFamily {
    fn from(context: DocumentContext) -> Self {
        match context {
            DocumentContext::LegalAgreement => ExplanationFamily::Legal,
            DocumentContext::PartnershipOffer
            | DocumentContext::VendorProposal
            | DocumentContext::ClientInquiry => ExplanationFamily::Business,
            DocumentContext::ConsumerMessage => ExplanationFamily::Consumer,
        }
    }
}

/// Context grouping used by the action bank.
///
/// Client inquiries are unsolicited inbound contact, so they get the consumer
/// playbook rather than the partnership one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionFamily {
    Legal,
    Business,
    Consumer,
}

impl From<DocumentContext> for ActionFamily {
    fn from(context: DocumentContext) -> Self {
        match context {
            DocumentContext::LegalAgreement => ActionFamily::Legal,
            DocumentContext::PartnershipOffer | DocumentContext::VendorProposal => {
                ActionFamily::Business
            }
            DocumentContext::ClientInquiry | DocumentContext::ConsumerMessage => {
                ActionFamily::Consumer
            }
        }
    }
}

const CRITICAL_SUMMARY: &str = "The combined presence of multiple high-impact clauses creates a systemic power imbalance. Individually, each provision might appear in standard contracts, but together they form a structure that: (1) eliminates your ability to dispute or seek remedy, (2) grants the other party unilateral control over terms and access, and (3) extends obligations beyond reasonable limits. This is not a balanced agreement.";

const HIGH_SUMMARY: &str = "Several concerning provisions work together to shift significant control away from you. While not every clause is problematic on its own, their combination creates substantial risk exposure—particularly around dispute resolution, data rights, and unilateral changes. The structure favors the drafting party heavily.";

const LOW_SUMMARY: &str =
    "No significant risk patterns detected. Standard verification practices apply.";

/// How many concern titles the moderate summary names
const MODERATE_SUMMARY_TITLES: usize = 2;

/// Summary paragraph for a tier; `concerns` are red-signal titles in order
pub fn summary(tier: SeverityTier, concerns: &[String]) -> String {
    match tier {
        SeverityTier::Critical => CRITICAL_SUMMARY.to_string(),
        SeverityTier::High => HIGH_SUMMARY.to_string(),
        SeverityTier::Moderate => {
            let plural = if concerns.len() == 1 { "" } else { "s" };
            let named = concerns
                .iter()
                .take(MODERATE_SUMMARY_TITLES)
                .map(String::as_str)
                .collect::<Vec<_>>()
                .join(", ");
            format!(
                "Detected {} area{} of concern: {}. These provisions warrant careful review before proceeding.",
                concerns.len(),
                plural,
                named
            )
        }
        SeverityTier::Low => LOW_SUMMARY.to_string(),
    }
}

/// Consequence-focused explanation for a context family and tier
pub fn what_you_might_miss(family: ExplanationFamily, tier: SeverityTier) -> &'static str {
    use SeverityTier::*;

    match (family, tier) {
        (ExplanationFamily::Legal, Critical | High) => {
            "What you might miss: These clauses don't just limit your current rights—they systematically remove your ability to challenge problems later. The binding arbitration clause means you cannot sue in court, even for serious harm. The unilateral change provision allows them to alter terms after you've committed, leaving you with no recourse. The data license grant is perpetual and irrevocable, extending beyond account closure. Combined, these create a legal structure where you bear all risk while they retain all control."
        }
        (ExplanationFamily::Legal, Moderate | Low) => {
            "No major red flags detected, but always verify: (1) Can you exit easily? (2) What happens to your data? (3) Can terms change without notice? Standard agreements should allow dispute resolution in court and limit data use to service provision."
        }
        (ExplanationFamily::Business, Critical | High) => {
            "What you might miss: The urgency pressure combined with limited verifiability is a classic pattern. Legitimate opportunities don't require immediate decisions without due diligence. The lack of corporate infrastructure (no verifiable domain, no LinkedIn presence) means you're taking on partnership risk without validation. If this were credible, they would provide references and allow time for verification."
        }
        (ExplanationFamily::Business, Moderate | Low) => {
            "Key verification steps: Confirm company registration, check for active social presence, request references from past partners. Credible businesses provide this information proactively."
        }
        (ExplanationFamily::Consumer, Critical | High) => {
            "What you might miss: Urgency + personal info requests + unknown sender = classic social engineering. The pressure to act fast is specifically designed to bypass your critical thinking. Legitimate entities don't operate this way—they provide time, verifiable contact information, and don't demand sensitive data via unsolicited messages."
        }
        (ExplanationFamily::Consumer, Moderate | Low) => {
            "Verify sender identity through official channels (not reply links). Check for pressure tactics. When in doubt, pause and verify independently."
        }
    }
}

const LEGAL_CRITICAL_ACTIONS: &[&str] = &[
    "🛑 DO NOT ACCEPT without attorney review—this agreement contains systemic risk",
    "📋 Specifically challenge: binding arbitration clause, unilateral change rights, broad data license",
    "⚖️ Compare against industry-standard terms (e.g., major platform ToS)",
    "✋ Consider opting out—few services are worth surrendering these rights",
    "📄 Request modified terms removing arbitration and limiting data use",
];

const LEGAL_HIGH_ACTIONS: &[&str] = &[
    "⚠️ Do not accept without understanding each flagged clause",
    "📋 Mark specific sections for legal review (arbitration, liability, data rights)",
    "🔍 Compare data handling and dispute terms against 2-3 similar services",
    "📧 Request clarification on: unilateral changes, termination, data retention",
    "✋ If protections are absent, consider alternative providers",
];

const LEGAL_STANDARD_ACTIONS: &[&str] = &[
    "✓ Review standard sections (liability, data use, termination)",
    "📋 Ensure you can delete account and data",
    "🔍 Verify dispute resolution is in court, not just arbitration",
];

const BUSINESS_ELEVATED_ACTIONS: &[&str] = &[
    "🛑 Do not proceed without verification—high-pressure + low-verifiability is a warning pattern",
    "📋 Request: Company registration, LinkedIn profiles, 2-3 references",
    "⏰ Insist on time for due diligence—legitimate partners allow this",
    "🔍 Search company name + 'scam' or 'complaint'",
    "✋ If they resist verification, disengage immediately",
];

const BUSINESS_STANDARD_ACTIONS: &[&str] = &[
    "📋 Request company website and LinkedIn verification",
    "📞 Schedule call after confirming company exists",
    "🔍 Check references before sharing proprietary information",
];

const CONSUMER_ELEVATED_ACTIONS: &[&str] = &[
    "🛑 DO NOT CLICK links or respond—this shows classic manipulation patterns",
    "🗑️ Delete message and block sender",
    "🔍 Verify independently through official website (not reply links)",
    "💡 Report to platform if applicable",
    "⚠️ If you already clicked, scan device and change passwords",
];

const CONSUMER_STANDARD_ACTIONS: &[&str] = &[
    "⚠️ Verify sender through official channels",
    "⏰ Take time—ignore urgency pressure",
    "🔍 Search message content for known scams",
];

/// Ordered action list for a context family and tier
pub fn actions(family: ActionFamily, tier: SeverityTier) -> &'static [&'static str] {
    use SeverityTier::*;

    match (family, tier) {
        (ActionFamily::Legal, Critical) => LEGAL_CRITICAL_ACTIONS,
        (ActionFamily::Legal, High) => LEGAL_HIGH_ACTIONS,
        (ActionFamily::Legal, Moderate | Low) => LEGAL_STANDARD_ACTIONS,
        (ActionFamily::Business, Critical | High) => BUSINESS_ELEVATED_ACTIONS,
        (ActionFamily::Business, Moderate | Low) => BUSINESS_STANDARD_ACTIONS,
        (ActionFamily::Consumer, Critical) => CONSUMER_ELEVATED_ACTIONS,
        (ActionFamily::Consumer, High) => CONSUMER_ELEVATED_ACTIONS,
        (ActionFamily::Consumer, Moderate | Low) => CONSUMER_STANDARD_ACTIONS,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TIERS: [SeverityTier; 4] = [
        SeverityTier::Low,
        SeverityTier::Moderate,
        SeverityTier::High,
        SeverityTier::Critical,
    ];

    fn titles(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_moderate_summary_singular() {
        let text = summary(SeverityTier::Moderate, &titles(&["Class Action Waiver"]));
        assert_eq!(
            text,
            "Detected 1 area of concern: Class Action Waiver. These provisions warrant careful review before proceeding."
        );
    }

    #[test]
    fn test_moderate_summary_names_first_two_only() {
        let text = summary(
            SeverityTier::Moderate,
            &titles(&["Binding Arbitration & Rights Waiver", "Data Monetization Rights"]),
        );
        assert!(text.starts_with("Detected 2 areas of concern: Binding Arbitration & Rights Waiver, Data Monetization Rights."));

        // Counts beyond two are still reported in full
        let text = summary(SeverityTier::Moderate, &titles(&["A", "B", "C"]));
        assert!(text.starts_with("Detected 3 areas of concern: A, B."));
    }

    #[test]
    fn test_elevated_summaries_ignore_specific_signals() {
        let a = summary(SeverityTier::Critical, &titles(&["X"; 6]));
        let b = summary(SeverityTier::Critical, &titles(&["Y"; 9]));
        assert_eq!(a, b);
        assert_eq!(a, CRITICAL_SUMMARY);
        assert_eq!(summary(SeverityTier::High, &titles(&["Z"; 3])), HIGH_SUMMARY);
        assert_eq!(summary(SeverityTier::Low, &[]), LOW_SUMMARY);
    }

    #[test]
    fn test_action_lists_have_three_to_five_entries() {
        for ctx in DocumentContext::ALL {
            for tier in TIERS {
                let list = actions(ActionFamily::from(ctx), tier);
                assert!((3..=5).contains(&list.len()), "{} {}", ctx, tier);
            }
        }
    }

    #[test]
    fn test_legal_actions_distinguish_critical_from_high() {
        let critical = actions(ActionFamily::Legal, SeverityTier::Critical);
        let high = actions(ActionFamily::Legal, SeverityTier::High);
        assert_ne!(critical, high);
        assert_eq!(
            actions(ActionFamily::Legal, SeverityTier::Moderate),
            actions(ActionFamily::Legal, SeverityTier::Low)
        );
    }

    #[test]
    fn test_business_actions_share_elevated_bucket() {
        assert_eq!(
            actions(ActionFamily::Business, SeverityTier::Critical),
            actions(ActionFamily::Business, SeverityTier::High)
        );
    }

    #[test]
    fn test_family_mapping() {
        assert_eq!(
            ExplanationFamily::from(DocumentContext::ClientInquiry),
            ExplanationFamily::Business
        );
        assert_eq!(
            ActionFamily::from(DocumentContext::ClientInquiry),
            ActionFamily::Consumer
        );
        assert_eq!(
            ActionFamily::from(DocumentContext::VendorProposal),
            ActionFamily::Business
        );
    }

    #[test]
    fn test_what_you_might_miss_splits_on_elevation() {
        for family in [
            ExplanationFamily::Legal,
            ExplanationFamily::Business,
            ExplanationFamily::Consumer,
        ] {
            let elevated = what_you_might_miss(family, SeverityTier::High);
            assert_eq!(elevated, what_you_might_miss(family, SeverityTier::Critical));
            assert!(elevated.starts_with("What you might miss"));
            assert_eq!(
                what_you_might_miss(family, SeverityTier::Low),
                what_you_might_miss(family, SeverityTier::Moderate)
            );
        }
    }
}
