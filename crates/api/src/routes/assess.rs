//! Assessment Routes

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use data_validator::ReadingForm;
use mitigation::Category;
use rule_base::RuleId;
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, info};

use crate::error::ApiError;
use crate::AppState;

/// Strength of one rule in a response
#[derive(Debug, Serialize)]
pub struct RuleStrength {
    pub rule: RuleId,
    pub weight: f64,
    pub strength: f64,
}

/// Response for the assess endpoint
#[derive(Debug, Serialize)]
pub struct AssessResponse {
    pub severity: f64,
    pub severity_display: String,
    pub category: Category,
    pub label: &'static str,
    pub mitigation: &'static str,
    pub summary: String,
    pub strengths: Vec<RuleStrength>,
}

/// Validate a reading form and assess it
pub async fn post_assess(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<ReadingForm>, JsonRejection>,
) -> Result<Json<AssessResponse>, ApiError> {
    let Json(form) = payload.map_err(|rejection| {
        metrics::counter!("invalid_inputs_total").increment(1);
        debug!("Unreadable reading form: {}", rejection.body_text());
        ApiError::MalformedBody(rejection.body_text())
    })?;

    let reading = state.validator.parse_form(&form).map_err(|result| {
        metrics::counter!("invalid_inputs_total").increment(1);
        debug!("Invalid reading form {:?}: {:?}", form, result.errors);
        ApiError::InvalidInput(result.errors)
    })?;

    let result = state.engine.assess(&reading);
    let category = result.category();
    metrics::counter!("assessments_total", "category" => category.as_str()).increment(1);
    info!(
        "Assessed segment: voltage={} frequency={} load={} -> severity={:.2} ({})",
        reading.voltage,
        reading.frequency,
        reading.load,
        result.severity,
        category.as_str()
    );

    Ok(Json(AssessResponse {
        severity: result.severity,
        severity_display: format!("{:.2}/100", result.severity),
        category,
        label: category.label(),
        mitigation: result.mitigation(),
        summary: result.summary(),
        strengths: result
            .strengths
            .iter()
            .map(|(rule, strength)| RuleStrength {
                rule: rule.id,
                weight: rule.weight,
                strength,
            })
            .collect(),
    }))
}
