//! Prompt for the summary enhancement step

use crate::model::SeverityTier;

/// Maximum number of concern titles included in the prompt
pub const MAX_PROMPT_CONCERNS: usize = 4;

/// Build the rewrite prompt for an elevated-severity summary
pub fn build_enhancement_prompt(
    severity: SeverityTier,
    concerns: &[String],
    base_summary: &str,
) -> String {
    let concern_list = concerns
        .iter()
        .take(MAX_PROMPT_CONCERNS)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        r#"You are a legal risk analyst. Rewrite this summary to be clearer and more impactful.

SEVERITY: {severity}
CONCERNS: {concerns}

CURRENT SUMMARY:
{summary}

REQUIREMENTS:
1. Be direct about the severity—don't soften it
2. Explain how clauses work together to create risk
3. Use clear, serious language
4. Keep it to 2-3 sentences
5. Focus on user protection, not neutrality

IMPROVED SUMMARY:"#,
        severity = severity.as_str().to_uppercase(),
        concerns = concern_list,
        summary = base_summary,
    )
}
