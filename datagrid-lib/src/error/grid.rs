//! Grid operation errors

use crate::model::RowId;

/// Errors returned by [`DataGrid`](crate::grid::DataGrid) operations.
///
/// These describe misuse of the grid API (unknown columns, editing a
/// read-only cell, committing with no open edit). Per-cell failures are
/// [`CellError`](super::CellError)s and never surface here.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    /// Two columns share the same field id.
    #[error("Duplicate column field '{field}'")]
    DuplicateField { field: String },

    /// Two rows share the same id.
    #[error("Duplicate row id {row_id}")]
    DuplicateRow { row_id: RowId },

    /// No column with this field id exists.
    #[error("Unknown column '{field}'")]
    UnknownColumn { field: String },

    /// The column does not allow sorting.
    #[error("Column '{field}' is not sortable")]
    NotSortable { field: String },

    /// The column does not allow editing.
    #[error("Column '{field}' is not editable")]
    NotEditable { field: String },

    /// The field cannot be written (row identity).
    #[error("Field '{field}' is read-only")]
    ReadOnlyField { field: String },

    /// No row with this id exists.
    #[error("Unknown row {row_id}")]
    UnknownRow { row_id: RowId },

    /// No cell is being edited.
    #[error("No cell is being edited")]
    NoActiveEdit,

    /// The column's custom editor owns commit; use `save_value`.
    #[error("Column '{field}' uses a custom editor that commits its own values")]
    EditorOwnsCommit { field: String },

    /// The column uses the default editor; use `commit_edit`.
    #[error("Column '{field}' uses the default editor; commit the draft instead")]
    NotDelegated { field: String },
}

impl GridError {
    /// Creates a new unknown column error.
    pub fn unknown_column(field: impl Into<String>) -> Self {
        Self::UnknownColumn {
            field: field.into(),
        }
    }

    /// Creates a new unknown row error.
    pub fn unknown_row(row_id: RowId) -> Self {
        Self::UnknownRow { row_id }
    }
}
