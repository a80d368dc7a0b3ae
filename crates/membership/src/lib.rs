//! Membership Functions
//!
//! Piecewise-linear fuzzy sets for the three segment measurements
//! (voltage deviation, frequency variation, load imbalance), plus
//! fuzzification of a reading and curve sampling for display.

mod curve;
mod functions;
mod fuzzify;
mod term;

pub use curve::{sample_curve, sample_variable, Linspace, MembershipCurve};
pub use functions::{
    frequency_stable, frequency_unstable, load_balanced, load_unbalanced, voltage_high,
    voltage_low, voltage_medium,
};
pub use fuzzify::{fuzzify, Fuzzified, Reading};
pub use term::{Term, Variable};
