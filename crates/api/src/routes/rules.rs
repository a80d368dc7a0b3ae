//! Rule Table Routes

use axum::Json;
use rule_base::{Rule, RULES};
use serde::Serialize;

/// Response for the rules endpoint
#[derive(Debug, Serialize)]
pub struct RulesResponse {
    pub data: &'static [Rule],
    pub count: usize,
}

/// Get the rule table
pub async fn get_rules() -> Json<RulesResponse> {
    Json(RulesResponse {
        data: &RULES,
        count: RULES.len(),
    })
}
