//! Built-in cell displays, one per column type.

use super::Node;
use crate::column::Alignment;
use crate::column::ColumnType;
use crate::edit::codec;
use crate::error::FormatError;
use crate::model::Value;

/// Text display for string columns. `Null` shows nothing.
pub fn string_cell(value: &Value, align: Alignment) -> Node {
    Node::text_aligned(value.to_string(), align)
}

/// Text display for number columns.
pub fn number_cell(value: &Value, align: Alignment) -> Node {
    Node::text_aligned(value.to_string(), align)
}

/// Calendar date display for date columns.
///
/// Fails for values that cannot be read as a date.
pub fn date_cell(value: &Value, align: Alignment, date_format: &str) -> Result<Node, FormatError> {
    let text = codec::format(ColumnType::Date, value, date_format)?;
    Ok(Node::text_aligned(text, align))
}

/// Generic stringification for untyped columns.
pub fn default_cell(value: &Value, align: Alignment) -> Node {
    Node::text_aligned(value.to_string(), align)
}

/// Selects the built-in display for a column type.
pub fn builtin_cell(
    kind: ColumnType,
    value: &Value,
    align: Alignment,
    date_format: &str,
) -> Result<Node, FormatError> {
    match kind {
        ColumnType::String => Ok(string_cell(value, align)),
        ColumnType::Number => Ok(number_cell(value, align)),
        ColumnType::Date => date_cell(value, align, date_format),
        ColumnType::Default => Ok(default_cell(value, align)),
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use chrono::Utc;

    use super::*;

    #[test]
    fn test_date_cell_from_datetime() {
        let created = Value::from(Utc.with_ymd_and_hms(2023, 11, 20, 9, 0, 0).unwrap());
        let node = date_cell(&created, Alignment::Left, codec::DATE_FORMAT).unwrap();
        assert_eq!(node.to_plain_text(), "2023-11-20");
    }

    #[test]
    fn test_number_cell_float() {
        assert_eq!(number_cell(&Value::from(72.5), Alignment::Center).to_plain_text(), "72.5");
        assert_eq!(number_cell(&Value::Null, Alignment::Center).to_plain_text(), "");
    }

    #[test]
    fn test_default_cell_list() {
        let tags = Value::from(vec!["Backend", "Security"]);
        assert_eq!(default_cell(&tags, Alignment::Left).to_plain_text(), "Backend, Security");
    }
}
