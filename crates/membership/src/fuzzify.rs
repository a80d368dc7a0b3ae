//! Fuzzification of Segment Readings

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::term::{Term, Variable};

/// One set of crisp measurements for a distribution segment
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Reading {
    /// Voltage deviation, documented domain [0, 10]
    pub voltage: f64,
    /// Frequency variation, documented domain [0, 1]
    pub frequency: f64,
    /// Load imbalance, documented domain [0, 40]
    pub load: f64,
}

impl Reading {
    /// Create a new reading
    pub fn new(voltage: f64, frequency: f64, load: f64) -> Self {
        Self {
            voltage,
            frequency,
            load,
        }
    }

    /// Get the measurement for a variable
    pub fn value(&self, variable: Variable) -> f64 {
        match variable {
            Variable::Voltage => self.voltage,
            Variable::Frequency => self.frequency,
            Variable::Load => self.load,
        }
    }
}

/// Degrees of membership of one reading in all seven terms
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Fuzzified {
    degrees: [f64; 7],
}

impl Fuzzified {
    /// Degree of membership in a term
    pub fn degree(&self, term: Term) -> f64 {
        self.degrees[term.index()]
    }

    /// Iterate over (term, degree) pairs in term order
    pub fn iter(&self) -> impl Iterator<Item = (Term, f64)> + '_ {
        Term::ALL.iter().copied().zip(self.degrees.iter().copied())
    }
}

/// Convert a crisp reading into degrees of membership
pub fn fuzzify(reading: &Reading) -> Fuzzified {
    let degrees = Term::ALL.map(|term| term.degree(reading.value(term.variable())));
    trace!("Fuzzified {:?} -> {:?}", reading, degrees);
    Fuzzified { degrees }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nominal_reading() {
        let fuzzified = fuzzify(&Reading::new(0.0, 0.0, 0.0));

        assert_eq!(fuzzified.degree(Term::VoltageLow), 1.0);
        assert_eq!(fuzzified.degree(Term::FrequencyStable), 1.0);
        assert_eq!(fuzzified.degree(Term::LoadBalanced), 1.0);
        assert_eq!(fuzzified.degree(Term::VoltageHigh), 0.0);
        assert_eq!(fuzzified.degree(Term::LoadUnbalanced), 0.0);
    }

    #[test]
    fn test_each_term_reads_its_own_variable() {
        let reading = Reading::new(4.0, 0.8, 35.0);
        let fuzzified = fuzzify(&reading);

        for (term, degree) in fuzzified.iter() {
            assert_eq!(degree, term.degree(reading.value(term.variable())));
        }
        assert_eq!(fuzzified.degree(Term::VoltageMedium), 0.5);
        assert_eq!(fuzzified.degree(Term::FrequencyUnstable), 1.0);
        assert_eq!(fuzzified.degree(Term::LoadUnbalanced), 1.0);
    }
}
