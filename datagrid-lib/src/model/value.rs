//! Value enum for dynamic cell values

use std::fmt;

use chrono::DateTime;
use chrono::NaiveDate;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

use super::Row;

/// A dynamic value that can sit in any grid cell.
///
/// Rows store their fields as `Value`s, and every column callback (value
/// getter, renderer, validator) speaks in terms of this enum.
///
/// # Type Mapping
///
/// | JSON / domain shape        | Rust Variant |
/// |----------------------------|--------------|
/// | null, missing field        | `Null`       |
/// | boolean                    | `Bool`       |
/// | integer                    | `Int`        |
/// | fractional number          | `Float`      |
/// | string                     | `String`     |
/// | calendar date              | `Date`       |
/// | timestamp                  | `DateTime`   |
/// | array                      | `List`       |
/// | object with an `id` member | `Record`     |
/// | any other object           | `Json`       |
///
/// # Example
///
/// ```
/// use datagrid_lib::model::Value;
///
/// let title = Value::from("Write API documentation");
/// let points = Value::from(8);
/// let empty = Value::Null;
/// assert!(empty.is_null());
/// assert_eq!(points.to_string(), "8");
/// assert_eq!(title.as_str(), Some("Write API documentation"));
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// Null/empty value.
    #[default]
    Null,
    /// Boolean value.
    Bool(bool),
    /// 64-bit integer.
    Int(i64),
    /// 64-bit floating point.
    Float(f64),
    /// String value.
    String(String),
    /// Calendar date without a time component.
    Date(NaiveDate),
    /// Date and time in UTC.
    DateTime(DateTime<Utc>),
    /// Ordered collection (tags, assignees, ...).
    List(Vec<Value>),
    /// Nested record carrying its own `id`.
    Record(Box<Row>),
    /// Fallback for unrecognized JSON values.
    Json(serde_json::Value),
}

impl Value {
    /// Returns `true` if this is a null value.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns the type name of this value.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::String(_) => "string",
            Value::Date(_) => "date",
            Value::DateTime(_) => "datetime",
            Value::List(_) => "list",
            Value::Record(_) => "record",
            Value::Json(_) => "json",
        }
    }

    /// Returns the string slice if this is a `String`.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the number as `f64` for `Int` and `Float` values.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Int(n) => Some(*n as f64),
            Value::Float(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the items if this is a `List`.
    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }

    /// Returns the nested row if this is a `Record`.
    pub fn as_record(&self) -> Option<&Row> {
        match self {
            Value::Record(row) => Some(row),
            _ => None,
        }
    }
}

/// Generic stringification, used by the default display and editor.
///
/// `Null` renders as the empty string, lists join their items with `", "`.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => Ok(()),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Int(n) => write!(f, "{}", n),
            Value::Float(n) => write!(f, "{}", n),
            Value::String(s) => f.write_str(s),
            Value::Date(d) => write!(f, "{}", d.format("%Y-%m-%d")),
            Value::DateTime(dt) => write!(f, "{}", dt.to_rfc3339()),
            Value::List(items) => {
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                Ok(())
            }
            Value::Record(row) => write!(f, "#{}", row.id()),
            Value::Json(json) => write!(f, "{}", json),
        }
    }
}

// =============================================================================
// From implementations
// =============================================================================

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Int(i64::from(v))
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::String(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(v.to_string())
    }
}

impl From<NaiveDate> for Value {
    fn from(v: NaiveDate) -> Self {
        Value::Date(v)
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(v: DateTime<Utc>) -> Self {
        Value::DateTime(v)
    }
}

impl From<Row> for Value {
    fn from(v: Row) -> Self {
        Value::Record(Box::new(v))
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(v: Vec<T>) -> Self {
        Value::List(v.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map(Into::into).unwrap_or(Value::Null)
    }
}

impl From<serde_json::Value> for Value {
    fn from(v: serde_json::Value) -> Self {
        super::row_serde::json_value_to_value(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_null_is_empty() {
        assert_eq!(Value::Null.to_string(), "");
    }

    #[test]
    fn test_display_list_joins_items() {
        let tags = Value::from(vec!["Frontend", "Security"]);
        assert_eq!(tags.to_string(), "Frontend, Security");
    }

    #[test]
    fn test_display_date() {
        let date = NaiveDate::from_ymd_opt(2023, 12, 15).unwrap();
        assert_eq!(Value::from(date).to_string(), "2023-12-15");
    }

    #[test]
    fn test_from_json_object_with_id_is_record() {
        let json = serde_json::json!({"id": 6, "name": "Jessica Lee"});
        let value = Value::from(json);
        let row = value.as_record().unwrap();
        assert_eq!(row.get_str("name").unwrap(), Some("Jessica Lee"));
    }

    #[test]
    fn test_from_json_object_without_id_is_json() {
        let json = serde_json::json!({"name": "anonymous"});
        assert_eq!(Value::from(json).type_name(), "json");
    }

    #[test]
    fn test_from_option() {
        assert_eq!(Value::from(None::<i64>), Value::Null);
        assert_eq!(Value::from(Some(30)), Value::Int(30));
    }
}
