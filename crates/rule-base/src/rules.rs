//! Rule Table

use membership::{Fuzzified, Term};
use serde::Serialize;

/// Identifier of a rule in the table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum RuleId {
    R1,
    R2,
    R3,
    R4,
    R5,
    R6,
}

impl RuleId {
    /// Get string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            RuleId::R1 => "R1",
            RuleId::R2 => "R2",
            RuleId::R3 => "R3",
            RuleId::R4 => "R4",
            RuleId::R5 => "R5",
            RuleId::R6 => "R6",
        }
    }
}

/// A fuzzy rule: a conjunction of terms implying a crisp severity
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Rule {
    /// Rule identifier
    pub id: RuleId,
    /// Terms joined by AND
    pub antecedent: &'static [Term],
    /// Crisp consequent severity (0-100)
    pub weight: f64,
}

impl Rule {
    /// Firing strength: the minimum degree over the antecedent terms
    pub fn strength(&self, fuzzified: &Fuzzified) -> f64 {
        self.antecedent
            .iter()
            .map(|term| fuzzified.degree(*term))
            .reduce(f64::min)
            .unwrap_or(0.0)
    }
}

/// The anomaly-severity rules, in evaluation order.
///
/// The set is empirically tuned rather than logically minimal; R4 pairing
/// high voltage with a balanced load is intentional.
pub static RULES: [Rule; 6] = [
    Rule {
        id: RuleId::R1,
        antecedent: &[Term::VoltageHigh, Term::FrequencyUnstable, Term::LoadUnbalanced],
        weight: 100.0,
    },
    Rule {
        id: RuleId::R2,
        antecedent: &[Term::VoltageMedium, Term::FrequencyUnstable],
        weight: 50.0,
    },
    Rule {
        id: RuleId::R3,
        antecedent: &[Term::VoltageLow, Term::FrequencyStable, Term::LoadBalanced],
        weight: 10.0,
    },
    Rule {
        id: RuleId::R4,
        antecedent: &[Term::VoltageHigh, Term::LoadBalanced],
        weight: 50.0,
    },
    Rule {
        id: RuleId::R5,
        antecedent: &[Term::FrequencyStable, Term::LoadUnbalanced],
        weight: 70.0,
    },
    Rule {
        id: RuleId::R6,
        antecedent: &[Term::FrequencyUnstable, Term::LoadBalanced],
        weight: 60.0,
    },
];
