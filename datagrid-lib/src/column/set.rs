//! Ordered column collection.

use std::collections::HashSet;

use super::Column;
use crate::error::GridError;

/// An ordered set of columns with unique field ids.
///
/// # Example
///
/// ```
/// use datagrid_lib::column::{Column, ColumnSet};
///
/// let columns = ColumnSet::new(vec![
///     Column::new("firstName", "First name"),
///     Column::new("age", "Age"),
/// ])
/// .unwrap();
///
/// assert_eq!(columns.len(), 2);
/// assert!(columns.get("age").is_some());
/// assert!(ColumnSet::new(vec![Column::new("age", "A"), Column::new("age", "B")]).is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct ColumnSet {
    columns: Vec<Column>,
}

impl ColumnSet {
    /// Creates a column set, rejecting duplicate field ids.
    pub fn new(columns: Vec<Column>) -> Result<Self, GridError> {
        let mut seen = HashSet::new();
        for column in &columns {
            if !seen.insert(column.field.as_str()) {
                return Err(GridError::DuplicateField {
                    field: column.field.clone(),
                });
            }
        }
        Ok(Self { columns })
    }

    /// Returns the column for a field id.
    pub fn get(&self, field: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.field == field)
    }

    /// Returns the column for a field id, or an unknown column error.
    pub fn require(&self, field: &str) -> Result<&Column, GridError> {
        self.get(field).ok_or_else(|| GridError::unknown_column(field))
    }

    /// Iterates the columns in display order.
    pub fn iter(&self) -> std::slice::Iter<'_, Column> {
        self.columns.iter()
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

impl<'a> IntoIterator for &'a ColumnSet {
    type Item = &'a Column;
    type IntoIter = std::slice::Iter<'a, Column>;

    fn into_iter(self) -> Self::IntoIter {
        self.columns.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_field_rejected() {
        let err = ColumnSet::new(vec![
            Column::new("status", "Status"),
            Column::new("title", "Title"),
            Column::new("status", "State"),
        ])
        .unwrap_err();

        assert_eq!(
            err,
            GridError::DuplicateField {
                field: "status".into()
            }
        );
    }

    #[test]
    fn test_preserves_display_order() {
        let columns = ColumnSet::new(vec![Column::new("b", "B"), Column::new("a", "A")]).unwrap();
        let fields: Vec<_> = columns.iter().map(|c| c.field.as_str()).collect();
        assert_eq!(fields, vec!["b", "a"]);
    }

    #[test]
    fn test_require_unknown() {
        let columns = ColumnSet::default();
        assert_eq!(
            columns.require("age").unwrap_err(),
            GridError::unknown_column("age")
        );
    }
}
