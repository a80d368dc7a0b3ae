//! Inference Pipeline

use membership::{fuzzify, Fuzzified, Reading};
use mitigation::{recommend, Category, Recommendation};
use rule_base::{fire, FiringStrengths};
use serde::Serialize;
use tracing::trace;

use crate::defuzz::defuzzify;

/// Result of one inference pass
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct InferenceResult {
    /// Reading the result was computed from
    pub reading: Reading,
    /// Degrees of membership in every term
    pub degrees: Fuzzified,
    /// Firing strength of every rule
    pub strengths: FiringStrengths,
    /// Crisp anomaly severity (0-100)
    pub severity: f64,
    /// Selected mitigation
    pub recommendation: Recommendation,
}

impl InferenceResult {
    /// Severity category
    pub fn category(&self) -> Category {
        self.recommendation.category
    }

    /// Recommended mitigation text
    pub fn mitigation(&self) -> &'static str {
        self.recommendation.message
    }

    /// Text block for display: score to two decimals, then the suggestion
    pub fn summary(&self) -> String {
        format!(
            "Severity Score: {:.2}/100\n\nMitigation Suggestion:\n{}",
            self.severity, self.recommendation
        )
    }
}

/// Run the full pipeline on three crisp measurements
pub fn infer(voltage: f64, frequency: f64, load: f64) -> InferenceResult {
    let reading = Reading::new(voltage, frequency, load);
    let degrees = fuzzify(&reading);
    let strengths = fire(&degrees);
    let severity = defuzzify(&strengths);
    let recommendation = recommend(severity);

    trace!(
        "Inferred severity {:.2} ({}) for {:?}",
        severity,
        recommendation.category.as_str(),
        reading
    );

    InferenceResult {
        reading,
        degrees,
        strengths,
        severity,
        recommendation,
    }
}

/// Handle over the inference pipeline for callers that hold an engine.
/// Holds no state; every call is independent.
#[derive(Debug, Clone, Copy, Default)]
pub struct FuzzyEngine;

impl FuzzyEngine {
    /// Create a new engine
    pub fn new() -> Self {
        Self
    }

    /// Assess a segment reading
    pub fn assess(&self, reading: &Reading) -> InferenceResult {
        infer(reading.voltage, reading.frequency, reading.load)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rule_base::RuleId;

    #[test]
    fn test_nominal_reading() {
        let result = infer(0.0, 0.0, 0.0);

        assert_eq!(result.strengths.get(RuleId::R3), 1.0);
        assert_eq!(result.strengths.total(), 1.0);
        assert_eq!(result.severity, 10.0);
        assert_eq!(result.category(), Category::Low);
        assert_eq!(result.mitigation(), "Adjust power factor or use capacitors.");
    }

    #[test]
    fn test_compounded_fault() {
        let result = infer(10.0, 1.0, 40.0);

        assert_eq!(result.strengths.get(RuleId::R1), 1.0);
        assert_eq!(result.strengths.total(), 1.0);
        assert_eq!(result.severity, 100.0);
        assert_eq!(result.category(), Category::High);
        assert_eq!(result.mitigation(), "Isolate faulty section and redirect load.");
    }

    #[test]
    fn test_no_rule_fires() {
        // voltage sits between the low and high ramps, frequency at the
        // unstable foot, load too small to be unbalanced
        let result = infer(5.5, 0.4, 12.0);

        assert_eq!(result.strengths.total(), 0.0);
        assert_eq!(result.severity, 0.0);
        assert_eq!(result.category(), Category::None);
        assert_eq!(result.mitigation(), "No anomaly detected. No mitigation needed.");
    }

    #[test]
    fn test_idempotent() {
        let a = infer(6.3, 0.55, 21.7);
        let b = infer(6.3, 0.55, 21.7);

        assert_eq!(a.severity.to_bits(), b.severity.to_bits());
        assert_eq!(a, b);
    }

    #[test]
    fn test_engine_matches_free_function() {
        let engine = FuzzyEngine::new();
        let reading = Reading::new(8.0, 0.8, 30.0);
        assert_eq!(engine.assess(&reading), infer(8.0, 0.8, 30.0));
    }

    #[test]
    fn test_summary() {
        let result = infer(0.0, 0.0, 0.0);
        assert_eq!(
            result.summary(),
            "Severity Score: 10.00/100\n\nMitigation Suggestion:\nLow Severity:\nAdjust power factor or use capacitors."
        );
    }
}
