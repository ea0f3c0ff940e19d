//! Row ownership modes.

use std::fmt;

use crate::model::RowId;
use crate::model::Value;

/// Receives commits in controlled mode: `(row_id, field, value)`.
pub type CommitHandler = Box<dyn FnMut(&RowId, &str, Value)>;

/// Who owns the authoritative rows. Fixed when the grid is built.
pub enum GridMode {
    /// The owner holds the rows. Commits go to the handler, and the owner
    /// pushes updated rows back with [`DataGrid::set_rows`](super::DataGrid::set_rows).
    Controlled(CommitHandler),
    /// The grid holds the rows and writes commits into its own copy.
    Uncontrolled,
}

impl GridMode {
    pub fn is_controlled(&self) -> bool {
        matches!(self, GridMode::Controlled(_))
    }
}

impl fmt::Debug for GridMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridMode::Controlled(_) => f.write_str("Controlled"),
            GridMode::Uncontrolled => f.write_str("Uncontrolled"),
        }
    }
}
