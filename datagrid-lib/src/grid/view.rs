//! Rendered grid snapshot.

use crate::column::Alignment;
use crate::model::RowId;
use crate::render::Node;
use crate::sort::SortDirection;

/// One rendered header cell.
#[derive(Debug, Clone, PartialEq)]
pub struct HeaderCell {
    pub field: String,
    pub node: Node,
    pub align: Alignment,
    /// Fixed width, `None` for auto
    pub width: Option<u32>,
    /// Minimum width, already defaulted from the grid config
    pub min_width: u32,
    pub sortable: bool,
    pub direction: Option<SortDirection>,
}

/// One rendered body cell.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedCell {
    pub field: String,
    pub node: Node,
    /// The cell shows an edit surface
    pub editing: bool,
}

/// One rendered row, cells in column order.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedRow {
    pub id: RowId,
    pub cells: Vec<RenderedCell>,
}

impl RenderedRow {
    /// Returns the cell of a field.
    pub fn cell(&self, field: &str) -> Option<&RenderedCell> {
        self.cells.iter().find(|c| c.field == field)
    }
}

/// Header plus rows in display order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GridView {
    pub header: Vec<HeaderCell>,
    pub rows: Vec<RenderedRow>,
}

impl GridView {
    /// Returns the rendered row with this id.
    pub fn row(&self, id: &RowId) -> Option<&RenderedRow> {
        self.rows.iter().find(|r| &r.id == id)
    }

    /// Row ids in display order.
    pub fn row_ids(&self) -> Vec<RowId> {
        self.rows.iter().map(|r| r.id.clone()).collect()
    }

    /// Returns the cell being edited, if any.
    pub fn editing_cell(&self) -> Option<(&RowId, &RenderedCell)> {
        self.rows
            .iter()
            .find_map(|r| r.cells.iter().find(|c| c.editing).map(|c| (&r.id, c)))
    }
}
