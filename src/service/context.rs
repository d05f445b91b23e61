//! Keyword heuristics that assign a document context
//!
//! Legal markers are counted first; the remaining contexts are tested in a
//! fixed priority order and the first matching rule wins.

use crate::model::DocumentContext;

/// Phrases that indicate a legal document; two or more classify as legal
const LEGAL_MARKERS: &[&str] = &[
    "terms of service",
    "user agreement",
    "privacy policy",
    "legal agreement",
    "contract",
    "terms and conditions",
    "terms of use",
    "binding arbitration",
    "liability waiver",
    "indemnification",
    "intellectual property",
];

/// Markers strong enough to classify a text as legal on their own
const STRONG_LEGAL_MARKERS: &[&str] = &["terms of service", "user agreement"];

const LEGAL_MARKER_THRESHOLD: usize = 2;

/// One keyword rule in the priority list
#[derive(Debug, Clone, Copy)]
pub struct ContextRule {
    pub context: DocumentContext,
    pub keywords: &'static [&'static str],
    /// The rule is skipped when this phrase appears in the text
    pub unless: Option<&'static str>,
}

impl ContextRule {
    fn matches(&self, lower: &str) -> bool {
        if self.unless.is_some_and(|excluded| lower.contains(excluded)) {
            return false;
        }
        self.keywords.iter().any(|kw| lower.contains(kw))
    }
}

/// Non-legal context rules in priority order
pub const CONTEXT_RULES: &[ContextRule] = &[
    ContextRule {
        context: DocumentContext::PartnershipOffer,
        keywords: &["partnership", "collaboration", "synergy", "strategic alliance"],
        unless: None,
    },
    ContextRule {
        context: DocumentContext::ClientInquiry,
        keywords: &[
            "client inquiry",
            "customer inquiry",
            "interested in your services",
        ],
        unless: None,
    },
    ContextRule {
        context: DocumentContext::VendorProposal,
        keywords: &["vendor", "supplier", "quote", "pricing"],
        unless: Some("contract"),
    },
    // Employment offers are treated as consumer messages
    ContextRule {
        context: DocumentContext::ConsumerMessage,
        keywords: &["job offer", "employment", "hiring", "position", "salary"],
        unless: None,
    },
];

/// Number of distinct legal marker phrases present in lower-cased text
pub fn legal_marker_count(lower: &str) -> usize {
    LEGAL_MARKERS
        .iter()
        .filter(|marker| lower.contains(*marker))
        .count()
}

/// Whether lower-cased text reads as a legal agreement
pub fn is_legal_agreement(lower: &str) -> bool {
    legal_marker_count(lower) >= LEGAL_MARKER_THRESHOLD
        || STRONG_LEGAL_MARKERS.iter().any(|m| lower.contains(m))
}

/// First rule in `rules` that matches lower-cased text
pub fn first_matching_rule<'a>(lower: &str, rules: &'a [ContextRule]) -> Option<&'a ContextRule> {
    rules.iter().find(|rule| rule.matches(lower))
}

/// Classify raw text into exactly one context.
///
/// `_content_type` is part of the request contract but does not affect the
/// decision.
pub fn detect_context(content: &str, _content_type: &str) -> DocumentContext {
    let lower = content.to_lowercase();

    if is_legal_agreement(&lower) {
        return DocumentContext::LegalAgreement;
    }

    first_matching_rule(&lower, CONTEXT_RULES)
        .map(|rule| rule.context)
        .unwrap_or(DocumentContext::ConsumerMessage)
}
