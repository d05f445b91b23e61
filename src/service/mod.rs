pub mod business;
pub mod context;
pub mod engine;
pub mod llm;
pub mod narrative;
pub mod rules;
pub mod severity;

pub use engine::TrustLensEngine;
pub use llm::{GeminiClient, SummaryEnhancer};
pub use narrative::{NarrativeGenerator, NarrativeRequest};
