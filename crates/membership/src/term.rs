//! Linguistic Variables and Terms

use serde::{Deserialize, Serialize};

use crate::functions;

/// Measured quantity of a distribution segment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Variable {
    /// Voltage deviation
    Voltage,
    /// Frequency variation
    Frequency,
    /// Load imbalance
    Load,
}

impl Variable {
    /// All variables in input order
    pub const ALL: [Variable; 3] = [Variable::Voltage, Variable::Frequency, Variable::Load];

    /// Get string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Variable::Voltage => "voltage",
            Variable::Frequency => "frequency",
            Variable::Load => "load",
        }
    }

    /// Parse a variable from its string representation
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|v| v.as_str() == name)
    }

    /// Documented input domain (inclusive)
    ///
    /// Values outside the domain are still defined by the membership
    /// functions, but are outside the validated use case.
    pub fn domain(&self) -> (f64, f64) {
        match self {
            Variable::Voltage => (0.0, 10.0),
            Variable::Frequency => (0.0, 1.0),
            Variable::Load => (0.0, 40.0),
        }
    }

    /// Terms defined over this variable
    pub fn terms(&self) -> &'static [Term] {
        match self {
            Variable::Voltage => &[Term::VoltageLow, Term::VoltageMedium, Term::VoltageHigh],
            Variable::Frequency => &[Term::FrequencyStable, Term::FrequencyUnstable],
            Variable::Load => &[Term::LoadBalanced, Term::LoadUnbalanced],
        }
    }
}

/// Linguistic term (fuzzy set) of one variable
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Term {
    #[serde(rename = "voltage.low")]
    VoltageLow,
    #[serde(rename = "voltage.medium")]
    VoltageMedium,
    #[serde(rename = "voltage.high")]
    VoltageHigh,
    #[serde(rename = "frequency.stable")]
    FrequencyStable,
    #[serde(rename = "frequency.unstable")]
    FrequencyUnstable,
    #[serde(rename = "load.balanced")]
    LoadBalanced,
    #[serde(rename = "load.unbalanced")]
    LoadUnbalanced,
}

impl Term {
    /// All seven terms, grouped by variable
    pub const ALL: [Term; 7] = [
        Term::VoltageLow,
        Term::VoltageMedium,
        Term::VoltageHigh,
        Term::FrequencyStable,
        Term::FrequencyUnstable,
        Term::LoadBalanced,
        Term::LoadUnbalanced,
    ];

    /// Variable this term is defined over
    pub fn variable(&self) -> Variable {
        match self {
            Term::VoltageLow | Term::VoltageMedium | Term::VoltageHigh => Variable::Voltage,
            Term::FrequencyStable | Term::FrequencyUnstable => Variable::Frequency,
            Term::LoadBalanced | Term::LoadUnbalanced => Variable::Load,
        }
    }

    /// Get string representation, qualified by variable
    pub fn as_str(&self) -> &'static str {
        match self {
            Term::VoltageLow => "voltage.low",
            Term::VoltageMedium => "voltage.medium",
            Term::VoltageHigh => "voltage.high",
            Term::FrequencyStable => "frequency.stable",
            Term::FrequencyUnstable => "frequency.unstable",
            Term::LoadBalanced => "load.balanced",
            Term::LoadUnbalanced => "load.unbalanced",
        }
    }

    /// Degree of membership of a raw measurement in this term
    pub fn degree(&self, x: f64) -> f64 {
        match self {
            Term::VoltageLow => functions::voltage_low(x),
            Term::VoltageMedium => functions::voltage_medium(x),
            Term::VoltageHigh => functions::voltage_high(x),
            Term::FrequencyStable => functions::frequency_stable(x),
            Term::FrequencyUnstable => functions::frequency_unstable(x),
            Term::LoadBalanced => functions::load_balanced(x),
            Term::LoadUnbalanced => functions::load_unbalanced(x),
        }
    }

    pub(crate) fn index(&self) -> usize {
        *self as usize
    }
}

impl std::fmt::Display for Term {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terms_belong_to_their_variable() {
        for variable in Variable::ALL {
            for term in variable.terms() {
                assert_eq!(term.variable(), variable);
                assert!(term.as_str().starts_with(variable.as_str()));
            }
        }
        let total: usize = Variable::ALL.iter().map(|v| v.terms().len()).sum();
        assert_eq!(total, Term::ALL.len());
    }

    #[test]
    fn test_index_matches_order() {
        for (i, term) in Term::ALL.iter().enumerate() {
            assert_eq!(term.index(), i);
        }
    }

    #[test]
    fn test_variable_from_name() {
        assert_eq!(Variable::from_name("load"), Some(Variable::Load));
        assert_eq!(Variable::from_name("current"), None);
    }

    #[test]
    fn test_degree_dispatch() {
        assert_eq!(Term::VoltageMedium.degree(4.0), 0.5);
        assert_eq!(Term::LoadBalanced.degree(10.0), 1.0);
        assert_eq!(Term::FrequencyUnstable.degree(0.8), 1.0);
    }
}
