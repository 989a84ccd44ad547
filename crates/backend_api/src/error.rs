use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use planner::PlanError;
use serde_json::json;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ApiError>;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    #[error(transparent)]
    Plan(#[from] PlanError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            ApiError::InvalidBody(_) => (
                StatusCode::BAD_REQUEST,
                json!({
                    "error": self.to_string(),
                    "code": "VALIDATION_ERROR",
                }),
            ),
            ApiError::Plan(err) => match err {
                PlanError::Validation { field, .. } => (
                    StatusCode::BAD_REQUEST,
                    json!({
                        "error": err.to_string(),
                        "code": err.code(),
                        "field": field,
                    }),
                ),
                PlanError::UpstreamCall(source) => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({
                        "error": "Failed to generate financial plan",
                        "code": err.code(),
                        "details": format!("{source:#}"),
                    }),
                ),
                // The raw upstream text is logged by the planner, not echoed here.
                PlanError::MalformedUpstreamResponse(_) => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({
                        "error": "The plan generator returned an invalid plan",
                        "code": err.code(),
                    }),
                ),
            },
        };

        (status, Json(body)).into_response()
    }
}
