use regex::Regex;

use super::SignalRule;
use crate::model::{DocumentContext, Signal, SignalLevel};

pub const PREDATORY_PRESSURE: &str = "Predatory Pressure Pattern";
pub const HIGH_PRESSURE: &str = "High-Pressure Tactics";

/// Detects urgency-driven manipulation in any context.
///
/// Three cues are checked independently: urgency, a demand for action, and a
/// threatened consequence. All three together are predatory; urgency plus a
/// demand is high pressure; anything less is ignored.
pub struct HighPressurePatternRule {
    urgency: Regex,
    action_demand: Regex,
    consequence: Regex,
}

impl HighPressurePatternRule {
    pub const NAME: &'static str = "Manipulation Pattern Detection";

    pub fn new() -> Self {
        Self {
            urgency: Regex::new(r"\b(urgent|asap|immediately|now|today|hurry|rush)\b")
                .expect("urgency pattern is a valid regex"),
            action_demand: Regex::new(r"\b(click|respond|reply|act|confirm)\b")
                .expect("action pattern is a valid regex"),
            consequence: Regex::new(r"\b(expire|lose|miss out|forfeit|limited)\b")
                .expect("consequence pattern is a valid regex"),
        }
    }
}

impl Default for HighPressurePatternRule {
    fn default() -> Self {
        Self::new()
    }
}

impl SignalRule for HighPressurePatternRule {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn evaluate(&self, content: &str, _content_type: &str, _context: DocumentContext) -> Vec<Signal> {
        let lower = content.to_lowercase();

        let urgency = self.urgency.is_match(&lower);
        let action_demand = self.action_demand.is_match(&lower);
        let consequence = self.consequence.is_match(&lower);

        match (urgency, action_demand, consequence) {
            (true, true, true) => vec![Signal::new(
                PREDATORY_PRESSURE,
                SignalLevel::Red,
                "URGENT + ACTION DEMAND + CONSEQUENCE = classic manipulation tactic designed to bypass critical thinking.",
                0.95,
            )],
            (true, true, false) => vec![Signal::new(
                HIGH_PRESSURE,
                SignalLevel::Red,
                "Urgency combined with action demands is a common social engineering pattern.",
                0.85,
            )],
            _ => Vec::new(),
        }
    }
}
