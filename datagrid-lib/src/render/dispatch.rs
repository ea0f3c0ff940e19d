//! Cell and header render dispatch.

use super::Icon;
use super::Node;
use super::builtin_cell;
use crate::column::Column;
use crate::config::GridConfig;
use crate::edit::EditSession;
use crate::edit::EditorParams;
use crate::model::Row;
use crate::observe::GridObserver;
use crate::resolve::resolve_or_default;
use crate::sort::SortDirection;

/// Hint on the pencil icon of editable columns.
pub const EDIT_HINT: &str = "Double-click on cells in this column to edit values";
/// Hint on an unsorted column's sort icon.
pub const SORT_HINT: &str = "Click to sort";
/// Hint on an ascending column's sort icon.
pub const SORT_ASC_HINT: &str = "Sorted ascending. Click to sort descending";
/// Hint on a descending column's sort icon.
pub const SORT_DESC_HINT: &str = "Sorted descending. Click to clear sorting";
/// Message shown under an invalid draft.
pub const INVALID_HINT: &str = "Invalid value";

/// Renders the display of a cell.
///
/// A column renderer, when set, gets the resolved value and fully decides
/// the output. Otherwise the column type picks a built-in display aligned by
/// [`Column::effective_align`]. Failures are contained: the cell renders
/// empty and the observer hears about it.
pub fn render_cell(
    column: &Column,
    row: &Row,
    config: &GridConfig,
    observer: &dyn GridObserver,
) -> Node {
    let value = resolve_or_default(row, column, observer);
    if let Some(renderer) = &column.render_cell {
        return renderer(&*value, row, column);
    }

    let align = column.effective_align();
    builtin_cell(column.kind, &value, align, &config.date_format).unwrap_or_else(|err| {
        if config.report_format_errors {
            observer.on_cell_error(&err.in_field(&column.field));
        }
        Node::text_aligned("", align)
    })
}

/// Renders the edit surface of the cell held by `session`.
///
/// Delegated sessions show the column's custom editor. Default sessions show
/// an input with the draft, followed by [`INVALID_HINT`] while invalid.
pub fn render_editor(
    session: &EditSession,
    column: &Column,
    row: &Row,
    config: &GridConfig,
    observer: &dyn GridObserver,
) -> Node {
    if session.is_delegated() {
        let Some(editor) = &column.editable_cell else {
            return render_cell(column, row, config, observer);
        };
        let value = resolve_or_default(row, column, observer);
        return editor.render(EditorParams {
            value: &value,
            row,
            column,
        });
    }

    let align = column.effective_align();
    let input = Node::Input {
        id: session.key().element_id(),
        value: session.draft().to_string(),
        kind: column.kind,
        align,
        invalid: session.is_invalid(),
    };
    if session.is_invalid() {
        Node::column(vec![input, Node::text_aligned(INVALID_HINT, align)])
    } else {
        input
    }
}

/// Renders a column header.
///
/// Editable columns lead with a pencil icon, sortable columns end with a
/// sort icon reflecting `direction`. Both icons carry a hint.
pub fn render_header(column: &Column, direction: Option<SortDirection>) -> Node {
    let mut children = Vec::with_capacity(3);
    if column.editable {
        children.push(Node::tooltip(Node::Icon(Icon::Pencil), EDIT_HINT));
    }
    children.push(Node::text(column.header_name.clone()));
    if column.sortable {
        let (icon, hint) = match direction {
            None => (Icon::SortDefault, SORT_HINT),
            Some(SortDirection::Asc) => (Icon::SortAsc, SORT_ASC_HINT),
            Some(SortDirection::Desc) => (Icon::SortDesc, SORT_DESC_HINT),
        };
        children.push(Node::tooltip(Node::Icon(icon), hint));
    }
    Node::row_aligned(children, column.effective_align())
}
