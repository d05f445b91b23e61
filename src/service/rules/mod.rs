//! Independent risk detectors
//!
//! Each rule scans the full input text for one risk pattern and emits zero or
//! more signals. Rules hold only compiled patterns, so they can be evaluated
//! in any order or concurrently.

mod legal;
mod pressure;
mod verifiability;

use crate::model::{DocumentContext, Signal};

pub use legal::LegalClauseRule;
pub use pressure::HighPressurePatternRule;
pub use verifiability::VerifiabilityRule;

/// A detector evaluated against one analysis request
pub trait SignalRule: Send + Sync {
    /// Display name of the detector
    fn name(&self) -> &'static str;

    /// Scan content and return every signal this rule produces
    fn evaluate(&self, content: &str, content_type: &str, context: DocumentContext) -> Vec<Signal>;
}

/// Rules in evaluation order; signal order in the result follows this order
pub fn default_rules() -> Vec<Box<dyn SignalRule>> {
    vec![
        Box::new(LegalClauseRule::new()),
        Box::new(HighPressurePatternRule::new()),
        Box::new(VerifiabilityRule::new()),
    ]
}

/// Evaluate every rule and concatenate their signals
pub fn evaluate_all(
    rules: &[Box<dyn SignalRule>],
    content: &str,
    content_type: &str,
    context: DocumentContext,
) -> Vec<Signal> {
    rules
        .iter()
        .flat_map(|rule| {
            let signals = rule.evaluate(content, content_type, context);
            if !signals.is_empty() {
                tracing::debug!(
                    rule = rule.name(),
                    signal_count = signals.len(),
                    "Rule produced signals"
                );
            }
            signals
        })
        .collect()
}
