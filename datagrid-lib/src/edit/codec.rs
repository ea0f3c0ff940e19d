//! Per-type text codec for the default editor.
//!
//! `format` turns a cell value into the draft shown in the input, `parse`
//! turns a draft back into a value of the column's type. For every type,
//! `parse(format(x)) == x` holds for values the type can represent.

use chrono::NaiveDate;

use crate::column::ColumnType;
use crate::error::FormatError;
use crate::model::Value;
use crate::sort::as_timestamp;

/// Default calendar date format (`YYYY-MM-DD`).
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Formats a value as editor text.
///
/// Only date columns can fail: a value that is not a date, and cannot be read
/// as one, has no text form.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use datagrid_lib::column::ColumnType;
/// use datagrid_lib::edit::codec::{self, DATE_FORMAT};
/// use datagrid_lib::model::Value;
///
/// let due = Value::from(NaiveDate::from_ymd_opt(2023, 12, 15).unwrap());
/// assert_eq!(codec::format(ColumnType::Date, &due, DATE_FORMAT).unwrap(), "2023-12-15");
/// assert_eq!(codec::format(ColumnType::Number, &Value::Null, DATE_FORMAT).unwrap(), "");
/// ```
pub fn format(kind: ColumnType, value: &Value, date_format: &str) -> Result<String, FormatError> {
    match kind {
        ColumnType::Number => Ok(format_number(value)),
        ColumnType::Date => format_date(value, date_format),
        ColumnType::String | ColumnType::Default => Ok(value.to_string()),
    }
}

fn format_number(value: &Value) -> String {
    match value {
        // Debug keeps a fractional part ("3.0"), so the text parses back to a float.
        Value::Float(n) => format!("{:?}", n),
        other => other.to_string(),
    }
}

fn format_date(value: &Value, date_format: &str) -> Result<String, FormatError> {
    match value {
        Value::Null => Ok(String::new()),
        Value::Date(date) => Ok(date.format(date_format).to_string()),
        Value::DateTime(dt) => Ok(dt.date_naive().format(date_format).to_string()),
        other => as_timestamp(other)
            .map(|dt| dt.date_naive().format(date_format).to_string())
            .ok_or_else(|| FormatError::new(other.to_string(), ColumnType::Date.name())),
    }
}

/// Parses editor text into a value of the column's type.
///
/// Number and date columns read blank input as [`Value::Null`]. String and
/// default columns keep the text as is.
///
/// # Example
///
/// ```
/// use datagrid_lib::column::ColumnType;
/// use datagrid_lib::edit::codec::{self, DATE_FORMAT};
/// use datagrid_lib::model::Value;
///
/// assert_eq!(codec::parse(ColumnType::Number, "42", DATE_FORMAT).unwrap(), Value::Int(42));
/// assert_eq!(codec::parse(ColumnType::Number, "4.5", DATE_FORMAT).unwrap(), Value::Float(4.5));
/// assert_eq!(codec::parse(ColumnType::Number, "", DATE_FORMAT).unwrap(), Value::Null);
/// assert!(codec::parse(ColumnType::Number, "lots", DATE_FORMAT).is_err());
/// ```
pub fn parse(kind: ColumnType, input: &str, date_format: &str) -> Result<Value, FormatError> {
    match kind {
        ColumnType::Number => parse_number(input),
        ColumnType::Date => parse_date(input, date_format),
        ColumnType::String | ColumnType::Default => Ok(Value::String(input.to_string())),
    }
}

fn parse_number(input: &str) -> Result<Value, FormatError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(Value::Null);
    }
    if let Ok(n) = trimmed.parse::<i64>() {
        return Ok(Value::Int(n));
    }
    match trimmed.parse::<f64>() {
        Ok(n) if n.is_finite() => Ok(Value::Float(n)),
        _ => Err(FormatError::new(input, ColumnType::Number.name())),
    }
}

fn parse_date(input: &str, date_format: &str) -> Result<Value, FormatError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(Value::Null);
    }
    NaiveDate::parse_from_str(trimmed, date_format)
        .map(Value::Date)
        .map_err(|_| FormatError::new(input, ColumnType::Date.name()))
}
