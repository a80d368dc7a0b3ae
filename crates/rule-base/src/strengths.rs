//! Rule Firing Strengths

use membership::Fuzzified;
use serde::Serialize;
use tracing::trace;

use crate::rules::{Rule, RuleId, RULES};

/// Firing strength of every rule for one reading, in table order
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FiringStrengths {
    strengths: [f64; 6],
}

impl FiringStrengths {
    /// Build from raw strengths in table order
    pub fn from_array(strengths: [f64; 6]) -> Self {
        Self { strengths }
    }

    /// Strength of a single rule
    pub fn get(&self, id: RuleId) -> f64 {
        self.strengths[id as usize]
    }

    /// Iterate over (rule, strength) pairs in table order
    pub fn iter(&self) -> impl Iterator<Item = (&'static Rule, f64)> + '_ {
        RULES.iter().zip(self.strengths.iter().copied())
    }

    /// Sum of all strengths
    pub fn total(&self) -> f64 {
        self.strengths.iter().sum()
    }

    /// The strongest firing rule, first in table order on ties.
    /// `None` when no rule fires.
    pub fn dominant(&self) -> Option<(&'static Rule, f64)> {
        self.iter()
            .filter(|(_, s)| *s > 0.0)
            .fold(None, |best, (rule, s)| match best {
                Some((_, best_s)) if best_s >= s => best,
                _ => Some((rule, s)),
            })
    }
}

/// Evaluate every rule against a fuzzified reading
pub fn fire(fuzzified: &Fuzzified) -> FiringStrengths {
    let strengths: [f64; 6] = std::array::from_fn(|i| RULES[i].strength(fuzzified));
    trace!("Rule strengths: {:?}", strengths);
    FiringStrengths { strengths }
}

#[cfg(test)]
mod tests {
    use super::*;
    use membership::{fuzzify, Reading};
    use proptest::prelude::*;

    #[test]
    fn test_nominal_fires_r3_only() {
        let strengths = fire(&fuzzify(&Reading::new(0.0, 0.0, 0.0)));

        for (rule, s) in strengths.iter() {
            let expected = if rule.id == RuleId::R3 { 1.0 } else { 0.0 };
            assert_eq!(s, expected, "{}", rule.id.as_str());
        }
        assert_eq!(strengths.total(), 1.0);
    }

    #[test]
    fn test_no_rule_fires() {
        let strengths = fire(&fuzzify(&Reading::new(5.5, 0.4, 12.0)));
        assert_eq!(strengths.total(), 0.0);
        assert!(strengths.dominant().is_none());
    }

    #[test]
    fn test_dominant_prefers_first_on_tie() {
        let strengths = FiringStrengths::from_array([0.0, 0.4, 0.0, 0.4, 0.1, 0.0]);
        let (rule, s) = strengths.dominant().unwrap();
        assert_eq!(rule.id, RuleId::R2);
        assert_eq!(s, 0.4);
    }

    #[test]
    fn test_get_by_id() {
        let strengths = FiringStrengths::from_array([0.1, 0.2, 0.3, 0.4, 0.5, 0.6]);
        assert_eq!(strengths.get(RuleId::R1), 0.1);
        assert_eq!(strengths.get(RuleId::R6), 0.6);
    }

    proptest! {
        #[test]
        fn strengths_in_unit_interval(v in 0.0f64..=10.0, f in 0.0f64..=1.0, l in 0.0f64..=40.0) {
            let strengths = fire(&fuzzify(&Reading::new(v, f, l)));
            for (_, s) in strengths.iter() {
                prop_assert!((0.0..=1.0).contains(&s));
            }
        }
    }
}
