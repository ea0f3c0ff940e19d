//! Per-cell error types
//!
//! None of these ever escape a cell's render or edit cycle as a failure of
//! the grid itself: they are either surfaced on the cell (validation) or
//! handed to the [`GridObserver`](crate::observe::GridObserver).

use super::FieldError;
use crate::model::RowId;

/// Failure raised by a user-supplied column callback.
///
/// Value getters and sort comparators return this to signal that they could
/// not produce a result.
///
/// # Example
///
/// ```
/// use datagrid_lib::error::CallbackError;
///
/// let err = CallbackError::new("age is not a number");
/// assert_eq!(err.to_string(), "age is not a number");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct CallbackError {
    message: String,
}

impl CallbackError {
    /// Creates a new callback error with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Returns the error message.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<FieldError> for CallbackError {
    fn from(err: FieldError) -> Self {
        Self::new(err.to_string())
    }
}

/// A value that does not fit a column type's text form.
///
/// Produced by the editor codec, which does not know which cell it works
/// for. [`FormatError::in_field`] attaches the field.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Cannot read '{input}' as {expected}")]
pub struct FormatError {
    pub input: String,
    pub expected: &'static str,
}

impl FormatError {
    /// Creates a new format error.
    pub fn new(input: impl Into<String>, expected: &'static str) -> Self {
        Self {
            input: input.into(),
            expected,
        }
    }

    /// Converts into a cell error for `field`.
    pub fn in_field(self, field: impl Into<String>) -> CellError {
        CellError::Format {
            field: field.into(),
            input: self.input,
            expected: self.expected,
        }
    }
}

/// Errors contained within a single cell.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CellError {
    /// The column's validator rejected a draft. Recoverable: the edit stays open.
    #[error("Value for '{field}' on row {row_id} rejected by validator")]
    Validation { row_id: RowId, field: String },

    /// A value getter or sort comparator failed.
    #[error("Resolving '{field}'{} failed: {source}", row_suffix(.row_id))]
    Resolution {
        row_id: Option<RowId>,
        field: String,
        source: CallbackError,
    },

    /// A value could not be read under the column's type contract.
    #[error("Cannot read '{input}' as {expected} in '{field}'")]
    Format {
        field: String,
        input: String,
        expected: &'static str,
    },
}

fn row_suffix(row_id: &Option<RowId>) -> String {
    row_id
        .as_ref()
        .map(|id| format!(" on row {}", id))
        .unwrap_or_default()
}

impl CellError {
    /// Creates a new validation error.
    pub fn validation(row_id: RowId, field: impl Into<String>) -> Self {
        Self::Validation {
            row_id,
            field: field.into(),
        }
    }

    /// Creates a new resolution error.
    pub fn resolution(row_id: Option<RowId>, field: impl Into<String>, source: CallbackError) -> Self {
        Self::Resolution {
            row_id,
            field: field.into(),
            source,
        }
    }

    /// Creates a new format error.
    pub fn format(field: impl Into<String>, input: impl Into<String>, expected: &'static str) -> Self {
        Self::Format {
            field: field.into(),
            input: input.into(),
            expected,
        }
    }

    /// Returns the field the error belongs to.
    pub fn field(&self) -> &str {
        match self {
            Self::Validation { field, .. }
            | Self::Resolution { field, .. }
            | Self::Format { field, .. } => field,
        }
    }
}
