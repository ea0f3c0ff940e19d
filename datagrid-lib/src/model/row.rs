//! Dynamic grid row

use std::collections::HashMap;

use chrono::DateTime;
use chrono::NaiveDate;
use chrono::Utc;

use super::RowId;
use super::Value;
use crate::error::FieldError;

/// Name of the reserved identity field.
pub const ID_FIELD: &str = "id";

/// One domain record displayed by the grid.
///
/// Rows hold field values as a `HashMap<String, Value>` and carry a unique
/// [`RowId`]. The id is also readable as the `id` field, but it cannot be
/// overwritten through field setters: identity must stay stable across
/// re-sorts and edits.
///
/// # Example
///
/// ```
/// use datagrid_lib::model::Row;
///
/// let row = Row::new(1)
///     .set("title", "Implement user authentication")
///     .set("progress", 60);
///
/// assert_eq!(row.get_str("title").unwrap(), Some("Implement user authentication"));
/// assert_eq!(row.get_int("progress").unwrap(), Some(60));
/// assert_eq!(row.get_int("id").unwrap(), Some(1));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    /// The unique identifier of the row.
    pub(crate) id: RowId,

    /// The id mirrored as a value, so `get("id")` can hand out a reference.
    pub(crate) id_value: Value,

    /// The field values (never contains `id`).
    pub(crate) fields: HashMap<String, Value>,
}

impl Row {
    /// Creates a new empty row with the given id.
    pub fn new(id: impl Into<RowId>) -> Self {
        let id = id.into();
        Self {
            id_value: Value::from(&id),
            id,
            fields: HashMap::new(),
        }
    }

    /// Returns the row id.
    pub fn id(&self) -> &RowId {
        &self.id
    }

    // =========================================================================
    // Raw field access
    // =========================================================================

    /// Returns a reference to the field value, if it exists.
    pub fn get(&self, field: &str) -> Option<&Value> {
        if field == ID_FIELD {
            return Some(&self.id_value);
        }
        self.fields.get(field)
    }

    /// Returns `true` if the row contains the given field.
    pub fn contains(&self, field: &str) -> bool {
        field == ID_FIELD || self.fields.contains_key(field)
    }

    /// Returns a reference to all non-id fields.
    pub fn fields(&self) -> &HashMap<String, Value> {
        &self.fields
    }

    // =========================================================================
    // Setters
    // =========================================================================

    /// Sets a field value (builder pattern).
    ///
    /// The reserved `id` key is ignored; use [`Row::new`] to choose the id.
    pub fn set(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        let field = field.into();
        if field != ID_FIELD {
            self.fields.insert(field, value.into());
        }
        self
    }

    /// Inserts a field value, returning the previous one.
    pub fn insert(
        &mut self,
        field: impl Into<String>,
        value: impl Into<Value>,
    ) -> Result<Option<Value>, FieldError> {
        let field = field.into();
        if field == ID_FIELD {
            return Err(FieldError::read_only(field));
        }
        Ok(self.fields.insert(field, value.into()))
    }

    /// Removes a field and returns its value.
    pub fn remove(&mut self, field: &str) -> Option<Value> {
        self.fields.remove(field)
    }

    // =========================================================================
    // Typed getters
    //
    // Return Err if field is missing or wrong type.
    // Return Ok(None) only if the field exists and is Value::Null.
    // =========================================================================

    /// Gets a string field value.
    pub fn get_str(&self, field: &str) -> Result<Option<&str>, FieldError> {
        match self.get(field) {
            None => Err(FieldError::missing(field)),
            Some(Value::Null) => Ok(None),
            Some(Value::String(s)) => Ok(Some(s.as_str())),
            Some(other) => Err(FieldError::type_mismatch(
                field,
                "string",
                other.type_name(),
            )),
        }
    }

    /// Gets a boolean field value.
    pub fn get_bool(&self, field: &str) -> Result<Option<bool>, FieldError> {
        match self.get(field) {
            None => Err(FieldError::missing(field)),
            Some(Value::Null) => Ok(None),
            Some(Value::Bool(b)) => Ok(Some(*b)),
            Some(other) => Err(FieldError::type_mismatch(field, "bool", other.type_name())),
        }
    }

    /// Gets an integer field value.
    pub fn get_int(&self, field: &str) -> Result<Option<i64>, FieldError> {
        match self.get(field) {
            None => Err(FieldError::missing(field)),
            Some(Value::Null) => Ok(None),
            Some(Value::Int(n)) => Ok(Some(*n)),
            Some(other) => Err(FieldError::type_mismatch(field, "int", other.type_name())),
        }
    }

    /// Gets a floating point field value.
    pub fn get_float(&self, field: &str) -> Result<Option<f64>, FieldError> {
        match self.get(field) {
            None => Err(FieldError::missing(field)),
            Some(Value::Null) => Ok(None),
            Some(Value::Float(n)) => Ok(Some(*n)),
            Some(Value::Int(n)) => Ok(Some(*n as f64)), // Allow widening
            Some(other) => Err(FieldError::type_mismatch(field, "float", other.type_name())),
        }
    }

    /// Gets a calendar date field value.
    pub fn get_date(&self, field: &str) -> Result<Option<NaiveDate>, FieldError> {
        match self.get(field) {
            None => Err(FieldError::missing(field)),
            Some(Value::Null) => Ok(None),
            Some(Value::Date(d)) => Ok(Some(*d)),
            Some(other) => Err(FieldError::type_mismatch(field, "date", other.type_name())),
        }
    }

    /// Gets a DateTime field value.
    pub fn get_datetime(&self, field: &str) -> Result<Option<DateTime<Utc>>, FieldError> {
        match self.get(field) {
            None => Err(FieldError::missing(field)),
            Some(Value::Null) => Ok(None),
            Some(Value::DateTime(dt)) => Ok(Some(*dt)),
            Some(other) => Err(FieldError::type_mismatch(
                field,
                "datetime",
                other.type_name(),
            )),
        }
    }

    /// Gets a list field value.
    pub fn get_list(&self, field: &str) -> Result<Option<&[Value]>, FieldError> {
        match self.get(field) {
            None => Err(FieldError::missing(field)),
            Some(Value::Null) => Ok(None),
            Some(Value::List(items)) => Ok(Some(items)),
            Some(other) => Err(FieldError::type_mismatch(field, "list", other.type_name())),
        }
    }

    /// Gets a nested record field value.
    pub fn get_record(&self, field: &str) -> Result<Option<&Row>, FieldError> {
        match self.get(field) {
            None => Err(FieldError::missing(field)),
            Some(Value::Null) => Ok(None),
            Some(Value::Record(r)) => Ok(Some(r.as_ref())),
            Some(other) => Err(FieldError::type_mismatch(
                field,
                "record",
                other.type_name(),
            )),
        }
    }
}
