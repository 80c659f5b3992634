//! Error types for the VillaNumber resource.

use resource_store::StoreError;
use thiserror::Error;

/// Errors that can occur during villa number operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum VillaNumberError {
    /// The zero/unset number was used.
    #[error("Villa number must not be 0")]
    InvalidId,

    /// No villa number with the given number.
    #[error("Villa number not found: {0}")]
    NotFound(i32),

    /// The create request carried no payload.
    #[error("Villa number payload is missing")]
    MissingPayload,

    /// The request body is not a usable villa number payload.
    #[error("Invalid payload: {0}")]
    InvalidPayload(String),

    /// A field-level check failed.
    #[error("{0}")]
    Validation(String),

    /// The path number and the body number disagree.
    #[error("Villa number {body} does not match route id {path}")]
    IdMismatch { path: i32, body: i32 },

    /// The villa number is taken.
    #[error("Villa Number already exists!")]
    AlreadyExists(i32),

    /// The referenced villa does not exist.
    #[error("Villa ID is invalid")]
    InvalidVilla(i32),

    /// The underlying store failed.
    #[error("Villa number store error: {0}")]
    Store(#[from] StoreError),
}
