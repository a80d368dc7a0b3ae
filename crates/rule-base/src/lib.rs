//! Fuzzy Rule Base
//!
//! The six anomaly-severity rules, kept as an inspectable table, and the
//! evaluation of their firing strengths for a fuzzified reading.

mod rules;
mod strengths;

pub use rules::{Rule, RuleId, RULES};
pub use strengths::{fire, FiringStrengths};
