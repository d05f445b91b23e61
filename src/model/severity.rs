use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Coarse ordinal risk classification derived from the concern count
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ToSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum SeverityTier {
    Low,
    Moderate,
    High,
    Critical,
}

/// Minimum concern count for each tier, checked top to bottom
const SEVERITY_THRESHOLDS: [(usize, SeverityTier); 4] = [
    (6, SeverityTier::Critical),
    (3, SeverityTier::High),
    (1, SeverityTier::Moderate),
    (0, SeverityTier::Low),
];

impl SeverityTier {
    /// Step function from red-signal count to tier; first matching threshold wins
    pub fn from_concern_count(concern_count: usize) -> Self {
        SEVERITY_THRESHOLDS
            .iter()
            .find(|(min, _)| concern_count >= *min)
            .map(|(_, tier)| *tier)
            .unwrap_or(SeverityTier::Low)
    }

    /// Trust score reported alongside the tier (higher is safer)
    pub fn score(&self) -> u8 {
        match self {
            SeverityTier::Critical => 15,
            SeverityTier::High => 35,
            SeverityTier::Moderate => 55,
            SeverityTier::Low => 80,
        }
    }

    /// Display label used as the overall level
    pub fn label(&self) -> &'static str {
        match self {
            SeverityTier::Critical => "🔴 CRITICAL RISK",
            SeverityTier::High => "🟠 HIGH CONCERN",
            SeverityTier::Moderate => "🟡 MODERATE RISK",
            SeverityTier::Low => "🟢 LOW RISK",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SeverityTier::Critical => "critical",
            SeverityTier::High => "high",
            SeverityTier::Moderate => "moderate",
            SeverityTier::Low => "low",
        }
    }

    /// Critical and high tiers share overrides in narrative and business priority
    pub fn is_elevated(&self) -> bool {
        *self >= SeverityTier::High
    }
}

impl fmt::Display for SeverityTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_boundaries() {
        let expected = [
            (0, SeverityTier::Low, 80),
            (1, SeverityTier::Moderate, 55),
            (2, SeverityTier::Moderate, 55),
            (3, SeverityTier::High, 35),
            (5, SeverityTier::High, 35),
            (6, SeverityTier::Critical, 15),
            (14, SeverityTier::Critical, 15),
        ];

        for (count, tier, score) in expected {
            let actual = SeverityTier::from_concern_count(count);
            assert_eq!(actual, tier, "count {}", count);
            assert_eq!(actual.score(), score, "count {}", count);
        }
    }

    #[test]
    fn test_tier_is_monotonic_in_concern_count() {
        let tiers: Vec<_> = (0..20).map(SeverityTier::from_concern_count).collect();
        assert!(tiers.windows(2).all(|w| w[0] <= w[1]));

        let scores: Vec<_> = tiers.iter().map(SeverityTier::score).collect();
        assert!(scores.windows(2).all(|w| w[0] >= w[1]));
    }

    #[test]
    fn test_elevated_tiers() {
        assert!(SeverityTier::Critical.is_elevated());
        assert!(SeverityTier::High.is_elevated());
        assert!(!SeverityTier::Moderate.is_elevated());
        assert!(!SeverityTier::Low.is_elevated());
    }
}
