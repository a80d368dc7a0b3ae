//! Membership Curve Sampling
//!
//! Samples the membership functions over a range so a presentation layer
//! can render them. Sampling never feeds back into inference.

use serde::{Deserialize, Serialize};

use crate::term::{Term, Variable};

/// Evenly spaced values over a closed interval, like `numpy.linspace`
pub struct Linspace {
    start: f64,
    end: f64,
    step: f64,
    index: usize,
    len: usize,
}

impl Linspace {
    /// Create `n` points from `min` to `max` inclusive
    pub fn new(min: f64, max: f64, n: usize) -> Self {
        let step = if n > 1 {
            (max - min) / (n - 1) as f64
        } else {
            0.0
        };
        Self {
            start: min,
            end: max,
            step,
            index: 0,
            len: n,
        }
    }
}

impl Iterator for Linspace {
    type Item = f64;

    #[inline]
    fn next(&mut self) -> Option<f64> {
        if self.index >= self.len {
            return None;
        }
        let i = self.index;
        self.index += 1;
        // Last sample is exactly the endpoint
        if i + 1 == self.len && self.len > 1 {
            return Some(self.end);
        }
        Some(self.start + self.step * i as f64)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.len - self.index;
        (n, Some(n))
    }
}

impl ExactSizeIterator for Linspace {}

/// Sampled membership function of one term
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MembershipCurve {
    /// Term the curve belongs to
    pub term: Term,
    /// (x, degree) samples in ascending x
    pub points: Vec<(f64, f64)>,
}

/// Sample a term's membership function at `points` evenly spaced values
pub fn sample_curve(term: Term, range: (f64, f64), points: usize) -> MembershipCurve {
    let points = Linspace::new(range.0, range.1, points)
        .map(|x| (x, term.degree(x)))
        .collect();
    MembershipCurve { term, points }
}

/// Sample every term of a variable over its documented domain
pub fn sample_variable(variable: Variable, points: usize) -> Vec<MembershipCurve> {
    let domain = variable.domain();
    variable
        .terms()
        .iter()
        .map(|term| sample_curve(*term, domain, points))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linspace_endpoints() {
        let xs: Vec<f64> = Linspace::new(0.0, 10.0, 5).collect();
        assert_eq!(xs, vec![0.0, 2.5, 5.0, 7.5, 10.0]);
    }

    #[test]
    fn test_linspace_degenerate() {
        assert_eq!(Linspace::new(0.0, 1.0, 0).count(), 0);
        let single: Vec<f64> = Linspace::new(3.0, 9.0, 1).collect();
        assert_eq!(single, vec![3.0]);
        assert_eq!(Linspace::new(0.0, 1.0, 200).len(), 200);
    }

    #[test]
    fn test_sample_curve() {
        let curve = sample_curve(Term::VoltageMedium, (3.0, 7.0), 5);
        let degrees: Vec<f64> = curve.points.iter().map(|(_, y)| *y).collect();
        assert_eq!(degrees, vec![0.0, 0.5, 1.0, 0.5, 0.0]);
    }

    #[test]
    fn test_sample_variable_covers_all_terms() {
        let curves = sample_variable(Variable::Frequency, 200);
        assert_eq!(curves.len(), 2);
        assert_eq!(curves[0].term, Term::FrequencyStable);
        assert_eq!(curves[1].term, Term::FrequencyUnstable);
        for curve in &curves {
            assert_eq!(curve.points.len(), 200);
            assert_eq!(curve.points.first().map(|p| p.0), Some(0.0));
            assert_eq!(curve.points.last().map(|p| p.0), Some(1.0));
        }
    }
}
