use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Severity colour of a single signal.
///
/// Green marks a positive indicator, yellow a moderate concern and red a
/// severe concern. Only red signals count towards the severity tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum SignalLevel {
    Green,
    Yellow,
    Red,
}

/// One detected concern or positive indicator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Signal {
    /// Stable identifier of the pattern that fired
    pub name: String,
    pub level: SignalLevel,
    /// Human-readable explanation
    pub message: String,
    /// Fixed per pattern, in [0, 1]
    pub confidence: f64,
}

impl Signal {
    pub fn new(
        name: impl Into<String>,
        level: SignalLevel,
        message: impl Into<String>,
        confidence: f64,
    ) -> Self {
        Self {
            name: name.into(),
            level,
            message: message.into(),
            confidence,
        }
    }

    /// Red signals are the concerns that drive severity
    pub fn is_concern(&self) -> bool {
        self.level == SignalLevel::Red
    }
}
