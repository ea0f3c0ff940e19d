//! Column configuration.

use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

use super::Alignment;
use super::ColumnType;
use crate::edit::CellEditor;
use crate::error::CallbackError;
use crate::model::Row;
use crate::model::Value;
use crate::render::Node;

/// Derives a cell value from the whole row.
pub type ValueGetter = Arc<dyn Fn(&Row) -> Result<Value, CallbackError> + Send + Sync>;

/// Produces the display node for a cell: `(value, row, column)`.
pub type CellRenderer = Arc<dyn Fn(&Value, &Row, &Column) -> Node + Send + Sync>;

/// Orders two rows: `(a, b, field, ascending)`.
///
/// The comparator owns the direction: it receives the ascending flag and must
/// apply it itself.
pub type SortComparator =
    Arc<dyn Fn(&Row, &Row, &str, bool) -> Result<Ordering, CallbackError> + Send + Sync>;

/// Accepts or rejects a parsed draft value.
pub type ValueValidator = Arc<dyn Fn(&Value) -> bool + Send + Sync>;

/// Column configuration.
///
/// Columns define one vertical slice of the grid: which field they show,
/// how the header reads, how cells are displayed, sorted and edited.
/// Every `Option` callback, when set, fully replaces the type-based default
/// for its concern.
///
/// # Examples
///
/// ```
/// use datagrid_lib::column::{Alignment, Column, ColumnType};
///
/// let columns = vec![
///     Column::new("id", "ID").kind(ColumnType::Number).min_width(60).align(Alignment::Left),
///     Column::new("title", "Task Title").min_width(250).editable(true),
///     Column::new("progress", "Progress")
///         .kind(ColumnType::Number)
///         .editable(true)
///         .value_validator(|v| v.as_f64().is_some_and(|n| (0.0..=100.0).contains(&n))),
/// ];
/// assert_eq!(columns[0].effective_align(), Alignment::Left);
/// assert_eq!(columns[2].effective_align(), Alignment::Center);
/// ```
#[derive(Clone)]
pub struct Column {
    /// Field id, the key into row data. Unique within a column set.
    pub field: String,
    /// Header label
    pub header_name: String,
    /// Fixed width, `None` for auto
    pub width: Option<u32>,
    /// Minimum width, `None` for the grid default
    pub min_width: Option<u32>,
    /// Declared data type
    pub kind: ColumnType,
    /// Explicit alignment, `None` for the type default
    pub align: Option<Alignment>,
    /// Whether header activation sorts by this column
    pub sortable: bool,
    /// Whether cells of this column can be edited
    pub editable: bool,
    pub value_getter: Option<ValueGetter>,
    pub render_cell: Option<CellRenderer>,
    pub sort_comparator: Option<SortComparator>,
    pub editable_cell: Option<Arc<dyn CellEditor>>,
    pub value_validator: Option<ValueValidator>,
}

impl Column {
    /// Create a new column with default settings.
    ///
    /// New columns are of type [`ColumnType::Default`], sortable and
    /// read-only.
    pub fn new(field: impl Into<String>, header_name: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            header_name: header_name.into(),
            width: None,
            min_width: None,
            kind: ColumnType::Default,
            align: None,
            sortable: true,
            editable: false,
            value_getter: None,
            render_cell: None,
            sort_comparator: None,
            editable_cell: None,
            value_validator: None,
        }
    }

    /// Set a fixed width.
    pub fn width(mut self, width: u32) -> Self {
        self.width = Some(width);
        self
    }

    /// Set the minimum width.
    pub fn min_width(mut self, min_width: u32) -> Self {
        self.min_width = Some(min_width);
        self
    }

    /// Set the column type.
    pub fn kind(mut self, kind: ColumnType) -> Self {
        self.kind = kind;
        self
    }

    /// Set the column alignment.
    pub fn align(mut self, align: Alignment) -> Self {
        self.align = Some(align);
        self
    }

    /// Enable or disable sorting.
    pub fn sortable(mut self, sortable: bool) -> Self {
        self.sortable = sortable;
        self
    }

    /// Enable or disable editing.
    pub fn editable(mut self, editable: bool) -> Self {
        self.editable = editable;
        self
    }

    /// Derive the cell value from the row instead of reading `field`.
    pub fn value_getter<F>(mut self, getter: F) -> Self
    where
        F: Fn(&Row) -> Result<Value, CallbackError> + Send + Sync + 'static,
    {
        self.value_getter = Some(Arc::new(getter));
        self
    }

    /// Render cells with a custom function.
    pub fn render_cell<F>(mut self, renderer: F) -> Self
    where
        F: Fn(&Value, &Row, &Column) -> Node + Send + Sync + 'static,
    {
        self.render_cell = Some(Arc::new(renderer));
        self
    }

    /// Replace the type-based comparator.
    pub fn sort_comparator<F>(mut self, comparator: F) -> Self
    where
        F: Fn(&Row, &Row, &str, bool) -> Result<Ordering, CallbackError> + Send + Sync + 'static,
    {
        self.sort_comparator = Some(Arc::new(comparator));
        self
    }

    /// Replace the whole edit lifecycle with a custom editor.
    pub fn editable_cell(mut self, editor: impl CellEditor + 'static) -> Self {
        self.editable_cell = Some(Arc::new(editor));
        self
    }

    /// Validate parsed drafts before they are committed.
    pub fn value_validator<F>(mut self, validator: F) -> Self
    where
        F: Fn(&Value) -> bool + Send + Sync + 'static,
    {
        self.value_validator = Some(Arc::new(validator));
        self
    }

    /// The alignment actually used: explicit, else the type default.
    pub fn effective_align(&self) -> Alignment {
        self.align.unwrap_or_else(|| self.kind.default_align())
    }

    /// The minimum width, falling back to `default`.
    pub fn min_width_or(&self, default: u32) -> u32 {
        self.min_width.unwrap_or(default)
    }
}

impl fmt::Debug for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Column")
            .field("field", &self.field)
            .field("header_name", &self.header_name)
            .field("width", &self.width)
            .field("min_width", &self.min_width)
            .field("kind", &self.kind)
            .field("align", &self.align)
            .field("sortable", &self.sortable)
            .field("editable", &self.editable)
            .field("value_getter", &self.value_getter.is_some())
            .field("render_cell", &self.render_cell.is_some())
            .field("sort_comparator", &self.sort_comparator.is_some())
            .field("editable_cell", &self.editable_cell.is_some())
            .field("value_validator", &self.value_validator.is_some())
            .finish()
    }
}
