//! Custom editor delegation.

use crate::column::Column;
use crate::model::Row;
use crate::model::Value;
use crate::render::Node;

/// What a custom editor sees when it is asked for its surface.
#[derive(Debug, Clone, Copy)]
pub struct EditorParams<'a> {
    /// The resolved cell value
    pub value: &'a Value,
    pub row: &'a Row,
    pub column: &'a Column,
}

/// A custom edit surface for a column.
///
/// A column with an editor skips the default format, validate and parse
/// pipeline entirely. The surface reports back through
/// [`DataGrid::save_value`](crate::grid::DataGrid::save_value) and
/// [`DataGrid::cancel_edit`](crate::grid::DataGrid::cancel_edit).
///
/// Closures taking [`EditorParams`] implement this trait.
///
/// # Example
///
/// ```
/// use datagrid_lib::column::Column;
/// use datagrid_lib::edit::EditorParams;
/// use datagrid_lib::render::Node;
///
/// let column = Column::new("status", "Status")
///     .editable(true)
///     .editable_cell(|params: EditorParams<'_>| Node::text(format!("<{}>", params.value)));
/// assert!(column.editable_cell.is_some());
/// ```
pub trait CellEditor: Send + Sync {
    /// Produces the edit surface for the cell.
    fn render(&self, params: EditorParams<'_>) -> Node;
}

impl<F> CellEditor for F
where
    F: Fn(EditorParams<'_>) -> Node + Send + Sync,
{
    fn render(&self, params: EditorParams<'_>) -> Node {
        self(params)
    }
}
