//! Severity Categories

use serde::{Deserialize, Serialize};
use std::fmt;

/// Scores strictly above this are high severity
pub const HIGH_THRESHOLD: f64 = 80.0;
/// Scores strictly above this (up to the high threshold) are moderate
pub const MODERATE_THRESHOLD: f64 = 40.0;

/// Anomaly severity category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// No anomaly
    None,
    /// Low severity
    Low,
    /// Moderate severity
    Moderate,
    /// High severity
    High,
}

impl Category {
    /// Classify a severity score. Boundaries are half-open: exactly 80 is
    /// moderate, exactly 40 is low, and zero or below is no anomaly.
    pub fn from_score(score: f64) -> Self {
        if score > HIGH_THRESHOLD {
            Category::High
        } else if score > MODERATE_THRESHOLD {
            Category::Moderate
        } else if score > 0.0 {
            Category::Low
        } else {
            Category::None
        }
    }

    /// Get string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::None => "none",
            Category::Low => "low",
            Category::Moderate => "moderate",
            Category::High => "high",
        }
    }

    /// Heading shown above the recommendation
    pub fn label(&self) -> &'static str {
        match self {
            Category::None => "No anomaly detected.",
            Category::Low => "Low Severity",
            Category::Moderate => "Moderate Severity",
            Category::High => "High Severity",
        }
    }

    /// Recommended mitigation
    pub fn message(&self) -> &'static str {
        match self {
            Category::None => "No anomaly detected. No mitigation needed.",
            Category::Low => "Adjust power factor or use capacitors.",
            Category::Moderate => "Balance loads dynamically.",
            Category::High => "Isolate faulty section and redirect load.",
        }
    }
}

/// Mitigation selected for a severity score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Recommendation {
    pub category: Category,
    pub message: &'static str,
}

/// Select the mitigation for a severity score
pub fn recommend(score: f64) -> Recommendation {
    let category = Category::from_score(score);
    Recommendation {
        category,
        message: category.message(),
    }
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.category {
            Category::None => write!(f, "No anomaly detected.\nNo mitigation needed."),
            category => write!(f, "{}:\n{}", category.label(), self.message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thresholds() {
        assert_eq!(Category::from_score(100.0), Category::High);
        assert_eq!(Category::from_score(80.01), Category::High);
        assert_eq!(Category::from_score(80.0), Category::Moderate);
        assert_eq!(Category::from_score(40.01), Category::Moderate);
        assert_eq!(Category::from_score(40.0), Category::Low);
        assert_eq!(Category::from_score(10.0), Category::Low);
        assert_eq!(Category::from_score(0.0), Category::None);
        assert_eq!(Category::from_score(-5.0), Category::None);
    }

    #[test]
    fn test_messages() {
        assert_eq!(recommend(100.0).message, "Isolate faulty section and redirect load.");
        assert_eq!(recommend(80.0).message, "Balance loads dynamically.");
        assert_eq!(recommend(40.0).message, "Adjust power factor or use capacitors.");
        assert_eq!(recommend(0.0).message, "No anomaly detected. No mitigation needed.");
    }

    #[test]
    fn test_display() {
        assert_eq!(
            recommend(90.0).to_string(),
            "High Severity:\nIsolate faulty section and redirect load."
        );
        assert_eq!(
            recommend(0.0).to_string(),
            "No anomaly detected.\nNo mitigation needed."
        );
    }
}
