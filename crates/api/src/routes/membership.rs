//! Membership Curve Routes

use axum::{
    extract::{Path, Query, State},
    Json,
};
use membership::{sample_variable, MembershipCurve, Variable};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::error::ApiError;
use crate::settings::MAX_CURVE_POINTS;
use crate::AppState;

/// Query parameters for the membership endpoint
#[derive(Debug, Deserialize)]
pub struct CurveQuery {
    /// Samples per curve
    pub points: Option<usize>,
}

/// Response for the membership endpoint
#[derive(Debug, Serialize)]
pub struct CurveResponse {
    pub variable: Variable,
    pub domain: (f64, f64),
    pub curves: Vec<MembershipCurve>,
}

/// Get sampled membership curves for every term of a variable
pub async fn get_curves(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
    Query(params): Query<CurveQuery>,
) -> Result<Json<CurveResponse>, ApiError> {
    let variable = Variable::from_name(&name).ok_or(ApiError::UnknownVariable(name))?;
    let points = params
        .points
        .unwrap_or(state.config.curve_points)
        .min(MAX_CURVE_POINTS);

    Ok(Json(CurveResponse {
        variable,
        domain: variable.domain(),
        curves: sample_variable(variable, points),
    }))
}
