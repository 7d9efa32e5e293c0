//! Space visibility - strict tagged decode.
//!
//! Visibility arrives either in the canonical tagged form
//! (`{"type": "public"}`, `{"type": "team", "team_pk": "..."}`) or, from
//! older surfaces, as a bare string (`"public"`). Both are accepted;
//! anything else is a decode error. Unknown shapes never coerce to a
//! default.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Who can see a Space.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Visibility {
    Private,
    Public,
    Team { team_pk: String },
}

/// Rejection of a visibility value that matches no known shape.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unrecognized visibility value: {0}")]
pub struct VisibilityError(pub String);

impl Visibility {
    /// Decode a loosely-typed visibility value, failing closed.
    pub fn parse(value: &serde_json::Value) -> Result<Self, VisibilityError> {
        match value {
            serde_json::Value::String(s) => match s.as_str() {
                "private" => Ok(Visibility::Private),
                "public" => Ok(Visibility::Public),
                other => Err(VisibilityError(other.to_string())),
            },
            serde_json::Value::Object(_) => serde_json::from_value(value.clone())
                .map_err(|_| VisibilityError(value.to_string())),
            other => Err(VisibilityError(other.to_string())),
        }
    }
}
