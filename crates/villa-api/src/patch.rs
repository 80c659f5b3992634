//! # JSON Patch
//!
//! RFC 6902 operations applied to a flat transfer object rendered as a JSON object.
//! Paths address top-level fields only (`/name`, `/occupancy`) and match field names
//! ignoring ASCII case. `remove` resets a field to the empty value of its JSON type,
//! since transfer objects have no optional fields.
//!
//! Operations are applied to a working copy; the target is only replaced when every
//! operation succeeded.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

/// One JSON Patch operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "lowercase")]
pub enum PatchOperation {
    Add { path: String, value: Value },
    Remove { path: String },
    Replace { path: String, value: Value },
    Move { from: String, path: String },
    Copy { from: String, path: String },
    Test { path: String, value: Value },
}

/// A JSON Patch document: operations applied in order.
pub type PatchDocument = Vec<PatchOperation>;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum PatchError {
    #[error("The patch target is not an object")]
    NotAnObject,
    #[error("The path '{0}' is not a top-level field path")]
    InvalidPath(String),
    #[error("The target location specified by path '{0}' was not found")]
    UnknownField(String),
    #[error("The current value at '{0}' is not equal to the test value")]
    TestFailed(String),
}

/// Applies `operations` to `target` atomically.
pub fn apply(target: &mut Value, operations: &[PatchOperation]) -> Result<(), PatchError> {
    let mut working = target.clone();
    let fields = working.as_object_mut().ok_or(PatchError::NotAnObject)?;

    for operation in operations {
        apply_one(fields, operation)?;
    }

    *target = working;
    Ok(())
}

fn apply_one(fields: &mut Map<String, Value>, operation: &PatchOperation) -> Result<(), PatchError> {
    match operation {
        PatchOperation::Add { path, value } | PatchOperation::Replace { path, value } => {
            let key = resolve(fields, path)?;
            fields.insert(key, value.clone());
        }
        PatchOperation::Remove { path } => {
            let key = resolve(fields, path)?;
            if let Some(slot) = fields.get_mut(&key) {
                *slot = empty_like(slot);
            }
        }
        PatchOperation::Move { from, path } => {
            let source = resolve(fields, from)?;
            let dest = resolve(fields, path)?;
            if source != dest {
                let value = fields.get(&source).cloned().unwrap_or(Value::Null);
                if let Some(slot) = fields.get_mut(&source) {
                    *slot = empty_like(slot);
                }
                fields.insert(dest, value);
            }
        }
        PatchOperation::Copy { from, path } => {
            let source = resolve(fields, from)?;
            let dest = resolve(fields, path)?;
            let value = fields.get(&source).cloned().unwrap_or(Value::Null);
            fields.insert(dest, value);
        }
        PatchOperation::Test { path, value } => {
            let key = resolve(fields, path)?;
            if !fields.get(&key).is_some_and(|current| same_value(current, value)) {
                return Err(PatchError::TestFailed(path.clone()));
            }
        }
    }
    Ok(())
}

/// Maps a JSON pointer onto the name of an existing top-level field.
fn resolve(fields: &Map<String, Value>, path: &str) -> Result<String, PatchError> {
    let token = path
        .strip_prefix('/')
        .filter(|token| !token.is_empty() && !token.contains('/'))
        .ok_or_else(|| PatchError::InvalidPath(path.to_string()))?;
    let name = token.replace("~1", "/").replace("~0", "~");

    fields
        .keys()
        .find(|key| key.eq_ignore_ascii_case(&name))
        .cloned()
        .ok_or_else(|| PatchError::UnknownField(path.to_string()))
}

/// JSON equality where numbers compare by value, so `200` equals `200.0`.
fn same_value(left: &Value, right: &Value) -> bool {
    match (left, right) {
        (Value::Number(a), Value::Number(b)) => match (a.as_i64(), b.as_i64()) {
            (Some(a), Some(b)) => a == b,
            _ => match (a.as_u64(), b.as_u64()) {
                (Some(a), Some(b)) => a == b,
                _ => a.as_f64() == b.as_f64(),
            },
        },
        (Value::Array(a), Value::Array(b)) => {
            a.len() == b.len() && a.iter().zip(b).all(|(a, b)| same_value(a, b))
        }
        (Value::Object(a), Value::Object(b)) => {
            a.len() == b.len()
                && a.iter()
                    .all(|(key, a)| b.get(key).is_some_and(|b| same_value(a, b)))
        }
        _ => left == right,
    }
}

fn empty_like(value: &Value) -> Value {
    match value {
        Value::String(_) => Value::String(String::new()),
        Value::Number(_) => Value::from(0),
        Value::Bool(_) => Value::Bool(false),
        Value::Array(_) => Value::Array(Vec::new()),
        Value::Object(_) => Value::Object(Map::new()),
        Value::Null => Value::Null,
    }
}
