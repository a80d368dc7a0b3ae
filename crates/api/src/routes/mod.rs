//! Route Handlers

pub mod assess;
pub mod membership;
pub mod rules;
