//! JSON serialization for Row.
//!
//! ## Format
//!
//! A row is a flat JSON object with a required `id` member (number or
//! string). Every other member becomes a field:
//! - `null`, booleans, numbers and plain strings map to the matching `Value`
//! - RFC 3339 strings become `Value::DateTime`, `YYYY-MM-DD` strings `Value::Date`
//! - arrays become `Value::List`
//! - nested objects with an `id` become `Value::Record`, other objects `Value::Json`

use std::fmt;

use chrono::NaiveDate;
use serde::Deserialize;
use serde::Deserializer;
use serde::Serialize;
use serde::Serializer;
use serde::de::Error as _;
use serde::de::MapAccess;
use serde::de::Visitor;
use serde::ser::SerializeMap;

use super::ID_FIELD;
use super::Row;
use super::RowId;
use super::Value;

// =============================================================================
// Serialization
// =============================================================================

impl Serialize for Row {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.fields.len() + 1))?;
        map.serialize_entry(ID_FIELD, &self.id)?;
        for (key, value) in &self.fields {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

// =============================================================================
// Deserialization
// =============================================================================

impl<'de> Deserialize<'de> for Row {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(RowVisitor)
    }
}

struct RowVisitor;

impl<'de> Visitor<'de> for RowVisitor {
    type Value = Row;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a map representing a grid row with an `id` member")
    }

    fn visit_map<M>(self, mut map: M) -> Result<Row, M::Error>
    where
        M: MapAccess<'de>,
    {
        let mut id: Option<RowId> = None;
        let mut fields = Vec::new();

        while let Some(key) = map.next_key::<String>()? {
            let value: serde_json::Value = map.next_value()?;
            if key == ID_FIELD {
                id = Some(RowId::from_json(&value).ok_or_else(|| {
                    M::Error::custom("row `id` must be an integer or a string")
                })?);
            } else {
                fields.push((key, json_value_to_value(value)));
            }
        }

        let id = id.ok_or_else(|| M::Error::missing_field(ID_FIELD))?;
        let mut row = Row::new(id);
        row.fields.extend(fields);
        Ok(row)
    }
}

impl Row {
    /// Builds a row from a JSON object, or `None` if it has no usable `id`.
    pub fn from_json_map(map: &serde_json::Map<String, serde_json::Value>) -> Option<Row> {
        let id = map.get(ID_FIELD).and_then(RowId::from_json)?;
        let mut row = Row::new(id);
        for (key, value) in map {
            if key != ID_FIELD {
                row.fields.insert(key.clone(), json_value_to_value(value.clone()));
            }
        }
        Some(row)
    }
}

/// Converts a serde_json::Value to our Value enum.
pub(crate) fn json_value_to_value(json: serde_json::Value) -> Value {
    match json {
        serde_json::Value::Null => Value::Null,
        serde_json::Value::Bool(b) => Value::Bool(b),
        serde_json::Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Value::Int(i)
            } else if let Some(f) = n.as_f64() {
                Value::Float(f)
            } else {
                Value::Json(serde_json::Value::Number(n))
            }
        }
        serde_json::Value::String(s) => {
            // Try to parse as DateTime (ISO 8601)
            if let Ok(dt) = chrono::DateTime::parse_from_rfc3339(&s) {
                Value::DateTime(dt.with_timezone(&chrono::Utc))
            }
            // Then as a plain calendar date
            else if let Ok(date) = NaiveDate::parse_from_str(&s, "%Y-%m-%d") {
                Value::Date(date)
            }
            // Otherwise keep as string
            else {
                Value::String(s)
            }
        }
        serde_json::Value::Array(arr) => {
            Value::List(arr.into_iter().map(json_value_to_value).collect())
        }
        serde_json::Value::Object(obj) => match Row::from_json_map(&obj) {
            Some(row) => Value::Record(Box::new(row)),
            None => Value::Json(serde_json::Value::Object(obj)),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialize_simple_fields() {
        let row = Row::new(1).set("title", "Update dependencies").set("storyPoints", 2);

        let json = serde_json::to_string(&row).unwrap();
        assert!(json.contains("\"id\":1"));
        assert!(json.contains("\"title\":\"Update dependencies\""));
        assert!(json.contains("\"storyPoints\":2"));
    }

    #[test]
    fn test_deserialize_simple_fields() {
        let json = r#"{"id": 3, "firstName": "Barry", "age": 11, "firstSeen": null}"#;
        let row: Row = serde_json::from_str(json).unwrap();

        assert_eq!(row.id(), &RowId::Int(3));
        assert_eq!(row.get_str("firstName").unwrap(), Some("Barry"));
        assert_eq!(row.get_int("age").unwrap(), Some(11));
        assert_eq!(row.get("firstSeen"), Some(&Value::Null));
    }

    #[test]
    fn test_deserialize_text_id() {
        let row: Row = serde_json::from_str(r#"{"id": "abc"}"#).unwrap();
        assert_eq!(row.id(), &RowId::Text("abc".into()));
    }

    #[test]
    fn test_deserialize_missing_id_fails() {
        let result: Result<Row, _> = serde_json::from_str(r#"{"name": "nobody"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_deserialize_dates() {
        let json = r#"{"id": 1, "dueDate": "2023-12-15", "createdAt": "2023-11-20T09:00:00Z"}"#;
        let row: Row = serde_json::from_str(json).unwrap();

        assert_eq!(
            row.get_date("dueDate").unwrap(),
            NaiveDate::from_ymd_opt(2023, 12, 15)
        );
        assert!(row.get_datetime("createdAt").unwrap().is_some());
    }

    #[test]
    fn test_deserialize_nested_records() {
        let json = r#"{"id": 1, "assignee": [{"id": 1, "name": "Alex Johnson"}, {"id": 6, "name": "Jessica Lee"}]}"#;
        let row: Row = serde_json::from_str(json).unwrap();

        let assignees = row.get_list("assignee").unwrap().unwrap();
        assert_eq!(assignees.len(), 2);
        let second = assignees[1].as_record().unwrap();
        assert_eq!(second.get_str("name").unwrap(), Some("Jessica Lee"));
    }
}
