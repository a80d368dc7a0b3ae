//! Mitigation Selection
//!
//! Maps a crisp severity score to a severity category and the mitigation
//! recommended for it.

mod category;

pub use category::{recommend, Category, Recommendation, HIGH_THRESHOLD, MODERATE_THRESHOLD};
