//! Serializable column schema.

use serde::Deserialize;
use serde::Serialize;

use super::Alignment;
use super::Column;
use super::ColumnType;

fn default_true() -> bool {
    true
}

/// The static, serializable part of a [`Column`].
///
/// Field names follow the camelCase JSON shape of the column configuration.
///
/// # Example
///
/// ```
/// use datagrid_lib::column::{ColumnSchema, ColumnType};
///
/// let json = r#"{"field": "age", "headerName": "Age", "type": "number", "editable": true}"#;
/// let schema: ColumnSchema = serde_json::from_str(json).unwrap();
/// let column = schema.into_column();
///
/// assert_eq!(column.kind, ColumnType::Number);
/// assert!(column.sortable);
/// assert!(column.editable);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnSchema {
    pub field: String,
    pub header_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_width: Option<u32>,
    #[serde(rename = "type", default)]
    pub kind: ColumnType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub align: Option<Alignment>,
    #[serde(default = "default_true")]
    pub sortable: bool,
    #[serde(default)]
    pub editable: bool,
}

impl ColumnSchema {
    /// Converts the schema into a column without behaviours.
    pub fn into_column(self) -> Column {
        let mut column = Column::new(self.field, self.header_name)
            .kind(self.kind)
            .sortable(self.sortable)
            .editable(self.editable);
        column.width = self.width;
        column.min_width = self.min_width;
        column.align = self.align;
        column
    }
}

impl From<ColumnSchema> for Column {
    fn from(schema: ColumnSchema) -> Self {
        schema.into_column()
    }
}

impl From<&Column> for ColumnSchema {
    fn from(column: &Column) -> Self {
        Self {
            field: column.field.clone(),
            header_name: column.header_name.clone(),
            width: column.width,
            min_width: column.min_width,
            kind: column.kind,
            align: column.align,
            sortable: column.sortable,
            editable: column.editable,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_fields_omitted() {
        let schema: ColumnSchema =
            serde_json::from_str(r#"{"field": "title", "headerName": "Task Title"}"#).unwrap();

        assert_eq!(schema.kind, ColumnType::Default);
        assert!(schema.sortable);
        assert!(!schema.editable);
        assert_eq!(schema.width, None);
    }

    #[test]
    fn test_camel_case_fields() {
        let json = r#"{"field": "dueDate", "headerName": "Due Date", "minWidth": 120, "type": "date", "align": "right", "sortable": false}"#;
        let column = Column::from(serde_json::from_str::<ColumnSchema>(json).unwrap());

        assert_eq!(column.min_width, Some(120));
        assert_eq!(column.kind, ColumnType::Date);
        assert_eq!(column.effective_align(), Alignment::Right);
        assert!(!column.sortable);
    }

    #[test]
    fn test_schema_from_column() {
        let column = Column::new("age", "Age").kind(ColumnType::Number).width(90);
        let json = serde_json::to_value(ColumnSchema::from(&column)).unwrap();

        assert_eq!(json["headerName"], "Age");
        assert_eq!(json["type"], "number");
        assert_eq!(json["width"], 90);
        assert!(json.get("align").is_none());
    }
}
