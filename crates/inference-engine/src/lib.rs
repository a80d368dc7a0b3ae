//! Fuzzy Inference Engine
//!
//! Runs the full pipeline for one segment reading: fuzzification, rule
//! evaluation, weighted-average defuzzification and mitigation selection.
//! Every call is a pure function of its three inputs.

mod defuzz;
mod engine;

pub use defuzz::defuzzify;
pub use engine::{infer, FuzzyEngine, InferenceResult};
