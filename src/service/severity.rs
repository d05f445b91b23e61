//! Converts an emitted signal set into a severity verdict

use crate::model::{SeverityTier, Signal};

/// Aggregate verdict over all signals of one analysis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeverityAssessment {
    /// Number of red signals; yellow and green never count
    pub concern_count: usize,
    pub tier: SeverityTier,
    pub score: u8,
    pub label: &'static str,
}

impl SeverityAssessment {
    pub fn from_concern_count(concern_count: usize) -> Self {
        let tier = SeverityTier::from_concern_count(concern_count);
        Self {
            concern_count,
            tier,
            score: tier.score(),
            label: tier.label(),
        }
    }
}

/// Number of red-level signals
pub fn concern_count(signals: &[Signal]) -> usize {
    signals.iter().filter(|s| s.is_concern()).count()
}

/// Derive tier, score and label from the signal set
pub fn aggregate(signals: &[Signal]) -> SeverityAssessment {
    SeverityAssessment::from_concern_count(concern_count(signals))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::SignalLevel;

    fn signals(red: usize, yellow: usize, green: usize) -> Vec<Signal> {
        let mut out = Vec::new();
        for i in 0..red {
            out.push(Signal::new(format!("red-{}", i), SignalLevel::Red, "", 0.9));
        }
        for i in 0..yellow {
            out.push(Signal::new(format!("yellow-{}", i), SignalLevel::Yellow, "", 0.75));
        }
        for i in 0..green {
            out.push(Signal::new(format!("green-{}", i), SignalLevel::Green, "", 0.8));
        }
        out
    }

    #[test]
    fn test_only_red_signals_count() {
        let assessment = aggregate(&signals(0, 7, 3));
        assert_eq!(assessment.concern_count, 0);
        assert_eq!(assessment.tier, SeverityTier::Low);
        assert_eq!(assessment.score, 80);
        assert_eq!(assessment.label, "🟢 LOW RISK");
    }

    #[test]
    fn test_two_reds_are_moderate() {
        let assessment = aggregate(&signals(2, 1, 0));
        assert_eq!(assessment.concern_count, 2);
        assert_eq!(assessment.tier, SeverityTier::Moderate);
        assert_eq!(assessment.score, 55);
    }

    #[test]
    fn test_three_reds_are_high() {
        let assessment = aggregate(&signals(3, 0, 0));
        assert_eq!(assessment.tier, SeverityTier::High);
        assert_eq!(assessment.score, 35);
        assert_eq!(assessment.label, "🟠 HIGH CONCERN");
    }

    #[test]
    fn test_six_reds_are_critical() {
        let assessment = aggregate(&signals(6, 2, 2));
        assert_eq!(assessment.concern_count, 6);
        assert_eq!(assessment.tier, SeverityTier::Critical);
        assert_eq!(assessment.score, 15);
    }

    #[test]
    fn test_empty_signal_set() {
        assert_eq!(aggregate(&[]), SeverityAssessment::from_concern_count(0));
    }
}
