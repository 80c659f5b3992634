//! The uniform response envelope.

use axum::http::StatusCode;
use serde::{Deserialize, Serialize};

/// `{ statusCode, isSuccess, errorMessages, result }`
///
/// `status_code` records the outcome of the operation and can differ from the
/// transport status (villa number delete/update answer 200 with 204 inside).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse<T> {
    pub status_code: u16,
    pub is_success: bool,
    pub error_messages: Vec<String>,
    pub result: Option<T>,
}

impl<T> Default for ApiResponse<T> {
    fn default() -> Self {
        Self {
            status_code: StatusCode::OK.as_u16(),
            is_success: true,
            error_messages: Vec::new(),
            result: None,
        }
    }
}

impl<T> ApiResponse<T> {
    /// Successful envelope carrying a payload.
    pub fn ok(status: StatusCode, result: T) -> Self {
        Self {
            status_code: status.as_u16(),
            result: Some(result),
            ..Self::default()
        }
    }

    /// Successful envelope without a payload.
    pub fn empty(status: StatusCode) -> Self {
        Self {
            status_code: status.as_u16(),
            ..Self::default()
        }
    }

    /// Failed envelope with the error list.
    pub fn failure(status: StatusCode, errors: Vec<String>) -> Self {
        Self {
            status_code: status.as_u16(),
            is_success: false,
            error_messages: errors,
            result: None,
        }
    }
}
