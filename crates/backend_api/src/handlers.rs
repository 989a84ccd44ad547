use axum::{
    extract::{rejection::JsonRejection, State},
    response::IntoResponse,
    Json,
};
use models::FinancialPlan;
use planner::PlanService;
use serde_json::Value;
use std::sync::Arc;

use crate::{error::ApiError, Result};

pub type ServiceState = Arc<PlanService>;

/// POST /api/generate-plan
/// Validates the financial snapshot and returns a generated plan
pub async fn generate_plan(
    State(service): State<ServiceState>,
    payload: std::result::Result<Json<Value>, JsonRejection>,
) -> Result<Json<FinancialPlan>> {
    // Body is taken untyped so missing or non-numeric fields get a field-specific 400
    // instead of axum's generic 422.
    let Json(body) = payload.map_err(|rejection| ApiError::InvalidBody(rejection.body_text()))?;

    let plan = service.generate_plan_from_json(&body).await?;

    Ok(Json(plan))
}

/// GET /
/// Liveness check
pub async fn liveness() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "message": "Financial plan generator is running"
    }))
}
