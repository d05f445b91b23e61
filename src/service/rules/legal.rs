use std::fmt;

use regex::Regex;

use super::SignalRule;
use crate::model::{DocumentContext, Signal, SignalLevel};

/// Intrinsic severity of an adversarial clause type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClauseSeverity {
    VeryHigh,
    High,
    Medium,
}

impl ClauseSeverity {
    pub fn level(&self) -> SignalLevel {
        match self {
            ClauseSeverity::VeryHigh | ClauseSeverity::High => SignalLevel::Red,
            ClauseSeverity::Medium => SignalLevel::Yellow,
        }
    }

    pub fn confidence(&self) -> f64 {
        match self {
            ClauseSeverity::VeryHigh => 0.95,
            ClauseSeverity::High => 0.85,
            ClauseSeverity::Medium => 0.75,
        }
    }
}

impl fmt::Display for ClauseSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ClauseSeverity::VeryHigh => "VERY_HIGH",
            ClauseSeverity::High => "HIGH",
            ClauseSeverity::Medium => "MEDIUM",
        })
    }
}

/// (pattern, display name, severity), matched against lower-cased text
const CLAUSE_PATTERNS: &[(&str, &str, ClauseSeverity)] = &[
    (
        r"irrevocably agree|binding arbitration.*waiv.*(court|trial|jury)",
        "Binding Arbitration & Rights Waiver",
        ClauseSeverity::VeryHigh,
    ),
    (
        r"class action.*waiv|waiv.*class action",
        "Class Action Waiver",
        ClauseSeverity::VeryHigh,
    ),
    (
        r"unilateral.*change|modify.*without notice|without notification",
        "Unilateral Modification Rights",
        ClauseSeverity::High,
    ),
    (
        r"sell.*data|monetize.*data|third.parties.*without restriction|transferable.*license.*data",
        "Data Monetization Rights",
        ClauseSeverity::VeryHigh,
    ),
    (
        r"perpetual.*irrevocable.*license|worldwide.*license.*content",
        "Irrevocable Content License",
        ClauseSeverity::High,
    ),
    (
        r"non.refundable.*error|no.*refund.*error|payments.*non.refundable",
        "No-Refund Policy",
        ClauseSeverity::Medium,
    ),
    (
        r"forfeit.*(balance|credits)|void.*(benefits|rewards)|no compensation",
        "Asset Forfeiture on Termination",
        ClauseSeverity::High,
    ),
    (
        r"not liable.*(theft|breach|loss)|waiver.*liability.*negligence",
        "Broad Liability Waiver",
        ClauseSeverity::VeryHigh,
    ),
    (
        r"indemnif.*(our negligence|our errors)|hold harmless.*negligence",
        "Indemnification of Negligence",
        ClauseSeverity::VeryHigh,
    ),
    (
        r"private arbitration|no.*(jury|court|appeal)",
        "Private Arbitration Mandate",
        ClauseSeverity::High,
    ),
    (
        r"intellectual property.*become.*ours|assign.*all rights",
        "IP Assignment Clause",
        ClauseSeverity::High,
    ),
    (
        r"silence.*consent|deemed.*acceptance|failure.*object.*consent",
        "Silence-as-Consent",
        ClauseSeverity::High,
    ),
    (
        r"survive.*termination|survive.*death|perpetual.*obligation",
        "Perpetual Obligation",
        ClauseSeverity::Medium,
    ),
    (
        r"consent.*future.*terms|terms not yet written",
        "Future Terms Consent",
        ClauseSeverity::VeryHigh,
    ),
];

struct ClausePattern {
    pattern: Regex,
    name: &'static str,
    severity: ClauseSeverity,
}

/// Detects adversarial clauses in legal agreements.
///
/// Every clause type is matched independently, so one agreement yields one
/// signal per clause type found. Compound-risk tiers depend on this.
pub struct LegalClauseRule {
    clauses: Vec<ClausePattern>,
}

impl LegalClauseRule {
    pub const NAME: &'static str = "Legal Risk Analysis";

    pub fn new() -> Self {
        let clauses = CLAUSE_PATTERNS
            .iter()
            .map(|(pattern, name, severity)| ClausePattern {
                pattern: Regex::new(pattern).expect("clause pattern is a valid regex"),
                name,
                severity: *severity,
            })
            .collect();

        Self { clauses }
    }
}

impl Default for LegalClauseRule {
    fn default() -> Self {
        Self::new()
    }
}

impl SignalRule for LegalClauseRule {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn evaluate(&self, content: &str, _content_type: &str, context: DocumentContext) -> Vec<Signal> {
        if context != DocumentContext::LegalAgreement {
            return Vec::new();
        }

        let lower = content.to_lowercase();

        self.clauses
            .iter()
            .filter(|clause| clause.pattern.is_match(&lower))
            .map(|clause| {
                Signal::new(
                    clause.name,
                    clause.severity.level(),
                    format!(
                        "{} RISK: {} - This provision significantly affects your rights and recourse options.",
                        clause.severity, clause.name
                    ),
                    clause.severity.confidence(),
                )
            })
            .collect()
    }
}
