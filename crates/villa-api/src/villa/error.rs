//! Error types for the Villa resource.

use resource_store::StoreError;
use thiserror::Error;

/// Errors that can occur during villa operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum VillaError {
    /// The zero/unset id was used.
    #[error("Villa id must not be 0")]
    InvalidId,

    /// No villa with the given id.
    #[error("Villa not found: {0}")]
    NotFound(i32),

    /// The create request carried no villa.
    #[error("Villa payload is missing")]
    MissingPayload,

    /// The request body is not a usable villa or patch document.
    #[error("Invalid payload: {0}")]
    InvalidPayload(String),

    /// A field-level check failed.
    #[error("{0}")]
    Validation(String),

    /// The path id and the body id disagree.
    #[error("Villa id {body} does not match route id {path}")]
    IdMismatch { path: i32, body: i32 },

    /// A villa with the same name (ignoring case) exists.
    #[error("Villa already exists!")]
    AlreadyExists(String),

    /// The caller tried to choose the id of a new villa.
    #[error("Villa id is assigned by the server, got {0}")]
    ClientAssignedId(i32),

    /// Villa numbers still reference the villa.
    #[error("Villa has villa numbers assigned")]
    HasVillaNumbers(i32),

    /// The underlying store failed.
    #[error("Villa store error: {0}")]
    Store(#[from] StoreError),
}
