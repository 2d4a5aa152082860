//! Coarse confidence bands for a prediction's reported score.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConfidenceBand {
    High,
    Medium,
    Low,
}

impl ConfidenceBand {
    pub const HIGH_THRESHOLD: f64 = 70.0;
    pub const MEDIUM_THRESHOLD: f64 = 40.0;

    /// Classify a confidence expressed as a percentage (0–100).
    pub fn from_percent(percent: f64) -> Self {
        if percent >= Self::HIGH_THRESHOLD {
            ConfidenceBand::High
        } else if percent >= Self::MEDIUM_THRESHOLD {
            ConfidenceBand::Medium
        } else {
            ConfidenceBand::Low
        }
    }

    /// Classify a confidence score as reported by the service (0–1).
    pub fn from_score(score: f64) -> Self {
        Self::from_percent(score * 100.0)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ConfidenceBand::High => "High",
            ConfidenceBand::Medium => "Medium",
            ConfidenceBand::Low => "Low",
        }
    }
}

impl fmt::Display for ConfidenceBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
