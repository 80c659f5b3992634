//! HTTP mapping for resource errors. Every error body is a failed [`ApiResponse`].

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use super::envelope::ApiResponse;
use crate::villa::VillaError;
use crate::villa_number::VillaNumberError;

impl VillaError {
    pub fn status(&self) -> StatusCode {
        match self {
            VillaError::InvalidId
            | VillaError::InvalidPayload(_)
            | VillaError::Validation(_)
            | VillaError::IdMismatch { .. }
            | VillaError::AlreadyExists(_)
            | VillaError::HasVillaNumbers(_) => StatusCode::BAD_REQUEST,
            VillaError::NotFound(_) | VillaError::MissingPayload => StatusCode::NOT_FOUND,
            VillaError::ClientAssignedId(_) | VillaError::Store(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl VillaNumberError {
    pub fn status(&self) -> StatusCode {
        match self {
            VillaNumberError::InvalidId
            | VillaNumberError::InvalidPayload(_)
            | VillaNumberError::Validation(_)
            | VillaNumberError::IdMismatch { .. }
            | VillaNumberError::AlreadyExists(_)
            | VillaNumberError::InvalidVilla(_) => StatusCode::BAD_REQUEST,
            VillaNumberError::NotFound(_) | VillaNumberError::MissingPayload => {
                StatusCode::NOT_FOUND
            }
            VillaNumberError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for VillaError {
    fn into_response(self) -> Response {
        let status = self.status();
        match &self {
            VillaError::Store(_) => tracing::error!(error = %self, "Villa request failed"),
            _ => tracing::debug!(error = %self, %status, "Villa request rejected"),
        }
        failure(status, self.to_string())
    }
}

impl IntoResponse for VillaNumberError {
    fn into_response(self) -> Response {
        let status = self.status();
        match &self {
            VillaNumberError::Store(_) => {
                tracing::error!(error = %self, "Villa number request failed")
            }
            _ => tracing::debug!(error = %self, %status, "Villa number request rejected"),
        }
        failure(status, self.to_string())
    }
}

fn failure(status: StatusCode, message: String) -> Response {
    let body: ApiResponse<()> = ApiResponse::failure(status, vec![message]);
    (status, Json(body)).into_response()
}
