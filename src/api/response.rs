//! Response types and error mapping for the finance display API.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// Acknowledgement body for deletions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiOk {
    /// Always true on success.
    pub ok: bool,
}

/// Response body for the incoming-pay endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IncomingPayResponse {
    /// The target date the figures were computed for.
    pub date: String,
    /// Earned-but-not-banked pay as of that date, in dollars.
    pub incoming: f64,
    /// Pay attributable to that date alone, in dollars.
    pub daily_earned: f64,
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl ApiErrorResponse {
    fn new(status: StatusCode, code: &str, message: String) -> Self {
        Self {
            status,
            error: ApiError::new(code, message),
        }
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        let message = error.to_string();
        match error {
            EngineError::InvalidDate { .. } => {
                Self::new(StatusCode::BAD_REQUEST, "INVALID_DATE", message)
            }
            EngineError::DayIndexOutOfRange { .. } => {
                Self::new(StatusCode::BAD_REQUEST, "INVALID_DATE", message)
            }
            EngineError::InvalidWorkLog { .. } => {
                Self::new(StatusCode::BAD_REQUEST, "VALIDATION_ERROR", message)
            }
            EngineError::InvalidSnapshot { .. } => {
                Self::new(StatusCode::BAD_REQUEST, "VALIDATION_ERROR", message)
            }
            EngineError::RecordNotFound { .. } => {
                Self::new(StatusCode::NOT_FOUND, "NOT_FOUND", message)
            }
            EngineError::StoreIo { .. } | EngineError::StoreParse { .. } => {
                Self::new(StatusCode::INTERNAL_SERVER_ERROR, "STORE_ERROR", message)
            }
            EngineError::ConfigParse { .. } => {
                Self::new(StatusCode::INTERNAL_SERVER_ERROR, "CONFIG_ERROR", message)
            }
        }
    }
}
