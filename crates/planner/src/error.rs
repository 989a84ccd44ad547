use thiserror::Error;

pub type Result<T> = std::result::Result<T, PlanError>;

#[derive(Debug, Error)]
pub enum PlanError {
    /// Caller input failed a precondition. Never retried.
    #[error("{message}")]
    Validation {
        field: &'static str,
        message: String,
    },

    /// The generative backend could not be reached or answered with an error.
    #[error("Plan generator call failed: {0:#}")]
    UpstreamCall(anyhow::Error),

    /// The backend answered but no valid plan could be read from its text.
    #[error("Plan generator returned an unusable response: {0}")]
    MalformedUpstreamResponse(String),
}

impl PlanError {
    pub fn validation(field: &'static str, message: impl Into<String>) -> Self {
        PlanError::Validation {
            field,
            message: message.into(),
        }
    }

    pub fn malformed(reason: impl Into<String>) -> Self {
        PlanError::MalformedUpstreamResponse(reason.into())
    }

    /// Stable machine-readable code, returned to HTTP callers.
    pub fn code(&self) -> &'static str {
        match self {
            PlanError::Validation { .. } => "VALIDATION_ERROR",
            PlanError::UpstreamCall(_) => "UPSTREAM_CALL_FAILED",
            PlanError::MalformedUpstreamResponse(_) => "MALFORMED_UPSTREAM_RESPONSE",
        }
    }
}
