//! Row identity

use std::fmt;

use serde::Deserialize;
use serde::Serialize;

use super::Value;

/// Unique identifier of a row.
///
/// Identity survives re-sorts and edits: the grid never addresses rows by
/// position, only by `RowId`. Domain data uses either numeric or textual ids,
/// so both are accepted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RowId {
    /// Numeric id (`{"id": 12}`).
    Int(i64),
    /// Textual id (`{"id": "task-12"}`).
    Text(String),
}

impl RowId {
    /// Reads a row id from a cell value.
    ///
    /// Only integers and strings qualify.
    pub fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Int(n) => Some(RowId::Int(*n)),
            Value::String(s) => Some(RowId::Text(s.clone())),
            _ => None,
        }
    }

    /// Reads a row id from a JSON value.
    pub fn from_json(value: &serde_json::Value) -> Option<Self> {
        match value {
            serde_json::Value::Number(n) => n.as_i64().map(RowId::Int),
            serde_json::Value::String(s) => Some(RowId::Text(s.clone())),
            _ => None,
        }
    }
}

impl fmt::Display for RowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RowId::Int(n) => write!(f, "{}", n),
            RowId::Text(s) => f.write_str(s),
        }
    }
}

impl From<i32> for RowId {
    fn from(v: i32) -> Self {
        RowId::Int(i64::from(v))
    }
}

impl From<i64> for RowId {
    fn from(v: i64) -> Self {
        RowId::Int(v)
    }
}

impl From<&str> for RowId {
    fn from(v: &str) -> Self {
        RowId::Text(v.to_string())
    }
}

impl From<String> for RowId {
    fn from(v: String) -> Self {
        RowId::Text(v)
    }
}

impl From<&RowId> for Value {
    fn from(id: &RowId) -> Self {
        match id {
            RowId::Int(n) => Value::Int(*n),
            RowId::Text(s) => Value::String(s.clone()),
        }
    }
}

impl From<RowId> for Value {
    fn from(id: RowId) -> Self {
        Value::from(&id)
    }
}
