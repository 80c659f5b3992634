//! Optional JSON bodies.
//!
//! Handlers distinguish "no payload" from "bad payload": an empty body or a JSON
//! `null` is `None`; anything that is not valid JSON for `T` is an error.

use axum::body::Bytes;
use serde::de::DeserializeOwned;

pub fn parse_optional<T: DeserializeOwned>(body: &Bytes) -> Result<Option<T>, String> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(None);
    }
    serde_json::from_slice::<Option<T>>(body).map_err(|e| e.to_string())
}
