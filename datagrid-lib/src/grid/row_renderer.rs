//! Per-row rendering.

use super::RenderedCell;
use super::RenderedRow;
use crate::column::ColumnSet;
use crate::config::GridConfig;
use crate::edit::EditSession;
use crate::model::Row;
use crate::observe::GridObserver;
use crate::render::render_cell;
use crate::render::render_editor;

/// Renders one row across all columns.
///
/// The single cell matching `session` shows its edit surface, every other
/// cell its display.
pub fn render_row(
    row: &Row,
    columns: &ColumnSet,
    session: Option<&EditSession>,
    config: &GridConfig,
    observer: &dyn GridObserver,
) -> RenderedRow {
    let cells = columns
        .iter()
        .map(|column| {
            let active = session.filter(|s| s.is_for(row.id(), &column.field));
            let node = match active {
                Some(session) => render_editor(session, column, row, config, observer),
                None => render_cell(column, row, config, observer),
            };
            RenderedCell {
                field: column.field.clone(),
                node,
                editing: active.is_some(),
            }
        })
        .collect();

    RenderedRow {
        id: row.id().clone(),
        cells,
    }
}
