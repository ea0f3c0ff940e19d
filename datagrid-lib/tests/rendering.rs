//! Header and cell rendering through the grid.

mod common;

use std::cmp::Ordering;
use std::sync::Arc;
use std::sync::atomic::AtomicUsize;
use std::sync::atomic::Ordering as AtomicOrdering;

use common::Recorder;
use common::int_ids;
use datagrid_lib::column::Alignment;
use datagrid_lib::column::Column;
use datagrid_lib::column::ColumnType;
use datagrid_lib::config::GridConfig;
use datagrid_lib::edit::EditorParams;
use datagrid_lib::error::CallbackError;
use datagrid_lib::error::CellError;
use datagrid_lib::grid::DataGrid;
use datagrid_lib::model::Row;
use datagrid_lib::model::RowId;
use datagrid_lib::model::Value;
use datagrid_lib::render::EDIT_HINT;
use datagrid_lib::render::INVALID_HINT;
use datagrid_lib::render::Node;
use datagrid_lib::render::SORT_ASC_HINT;
use datagrid_lib::render::SORT_DESC_HINT;
use datagrid_lib::render::SORT_HINT;

fn people() -> Vec<Row> {
    vec![
        Row::new(1).set("firstName", "Jon").set("lastName", "Snow").set("age", 14),
        Row::new(2).set("firstName", "Cersei").set("lastName", "Lannister").set("age", 31),
        Row::new(3).set("firstName", "Arya").set("lastName", "Stark").set("age", Value::Null),
    ]
}

// =============================================================================
// Header
// =============================================================================

#[test]
fn test_header_follows_sort_cycle() {
    let columns = vec![
        Column::new("firstName", "First name").editable(true),
        Column::new("age", "Age").kind(ColumnType::Number),
    ];
    let mut grid = DataGrid::uncontrolled(columns, people()).unwrap();

    let view = grid.render();
    assert_eq!(view.header[0].node.hints(), vec![EDIT_HINT, SORT_HINT]);
    assert_eq!(view.header[1].node.hints(), vec![SORT_HINT]);

    grid.activate_header("age").unwrap();
    assert_eq!(grid.render().header[1].node.hints(), vec![SORT_ASC_HINT]);
    grid.activate_header("age").unwrap();
    assert_eq!(grid.render().header[1].node.hints(), vec![SORT_DESC_HINT]);
    grid.activate_header("age").unwrap();
    assert_eq!(grid.render().header[1].node.hints(), vec![SORT_HINT]);
}

#[test]
fn test_header_alignment_and_widths() {
    let columns = vec![
        Column::new("id", "ID").kind(ColumnType::Number).min_width(60).align(Alignment::Left),
        Column::new("age", "Age").kind(ColumnType::Number).width(80),
        Column::new("lastName", "Last name").sortable(false),
    ];
    let grid = DataGrid::uncontrolled(columns, people())
        .unwrap()
        .with_config(GridConfig::default().with_default_min_width(120));

    let header = grid.render().header;
    assert_eq!(header[0].align, Alignment::Left);
    assert_eq!(header[0].min_width, 60);
    assert_eq!(header[1].align, Alignment::Center);
    assert_eq!(header[1].node.align(), Alignment::Center);
    assert_eq!(header[1].width, Some(80));
    assert_eq!(header[1].min_width, 120);
    assert!(!header[2].sortable);
    assert_eq!(header[2].node.to_plain_text(), "Last name");
}

// =============================================================================
// Cells
// =============================================================================

#[test]
fn test_cells_follow_column_order() {
    let columns = vec![
        Column::new("lastName", "Last name"),
        Column::new("firstName", "First name"),
    ];
    let grid = DataGrid::uncontrolled(columns, people()).unwrap();

    let view = grid.render();
    let fields: Vec<_> = view.rows[0].cells.iter().map(|c| c.field.as_str()).collect();
    assert_eq!(fields, vec!["lastName", "firstName"]);
    assert_eq!(view.rows[0].cells[0].node.to_plain_text(), "Snow");
}

#[test]
fn test_getter_value_is_displayed() {
    let columns = vec![Column::new("fullName", "Full name").value_getter(|row| {
        Ok(Value::from(format!(
            "{} {}",
            row.get_str("firstName")?.unwrap_or_default(),
            row.get_str("lastName")?.unwrap_or_default()
        )))
    })];
    let grid = DataGrid::uncontrolled(columns, people()).unwrap();

    let view = grid.render();
    let cell = view.row(&RowId::Int(2)).unwrap().cell("fullName").unwrap();
    assert_eq!(cell.node.to_plain_text(), "Cersei Lannister");
}

#[test]
fn test_failing_getter_renders_empty() {
    let recorder = Recorder::new();
    let columns = vec![
        Column::new("broken", "Broken").value_getter(|_| Err(CallbackError::new("nope"))),
        Column::new("firstName", "First name"),
    ];
    let grid = DataGrid::uncontrolled(columns, people())
        .unwrap()
        .with_observer(recorder.clone());

    let view = grid.render();
    assert_eq!(view.rows.len(), 3);
    assert_eq!(view.rows[0].cells[0].node.to_plain_text(), "");
    assert_eq!(view.rows[0].cells[1].node.to_plain_text(), "Jon");
    assert_eq!(recorder.errors().len(), 3);
    assert!(
        recorder
            .errors()
            .iter()
            .all(|e| matches!(e, CellError::Resolution { row_id: Some(_), .. }))
    );
}

#[test]
fn test_unformattable_date_renders_empty() {
    let recorder = Recorder::new();
    let columns = vec![Column::new("due", "Due").kind(ColumnType::Date)];
    let rows = vec![Row::new(1).set("due", "someday"), Row::new(2).set("due", "2024-01-05")];
    let grid = DataGrid::uncontrolled(columns, rows)
        .unwrap()
        .with_observer(recorder.clone());

    let view = grid.render();
    assert_eq!(view.rows[0].cells[0].node.to_plain_text(), "");
    assert_eq!(view.rows[1].cells[0].node.to_plain_text(), "2024-01-05");
    assert!(matches!(&recorder.errors()[..], [CellError::Format { .. }]));
}

#[test]
fn test_invalid_draft_shows_message() {
    let columns = vec![
        Column::new("age", "Age")
            .kind(ColumnType::Number)
            .editable(true)
            .value_validator(|v| v.is_null() || v.as_f64().is_some_and(|n| n >= 0.0)),
    ];
    let mut grid = DataGrid::uncontrolled(columns, people()).unwrap();
    grid.begin_edit(&RowId::Int(1), "age").unwrap();
    grid.set_draft("-3").unwrap();
    grid.commit_edit().unwrap();

    let view = grid.render();
    let (_, cell) = view.editing_cell().unwrap();
    assert_eq!(cell.node.to_plain_text(), format!("[-3]! / {}", INVALID_HINT));
    assert_eq!(cell.node.input_value("1:age"), Some("-3"));
}

// =============================================================================
// Overrides
// =============================================================================

/// A date column whose values the built-in codec cannot read. Every concern
/// is overridden, so nothing should ever try to.
#[test]
fn test_all_overrides_replace_defaults() {
    let recorder = Recorder::new();
    let comparisons = Arc::new(AtomicUsize::new(0));
    let counter = comparisons.clone();

    let column = Column::new("due", "Due")
        .kind(ColumnType::Date)
        .editable(true)
        .value_getter(|row| Ok(Value::from(format!("in {} days", row.get_int("days")?.unwrap_or(0)))))
        .render_cell(|value, _, _| Node::text(format!("<{}>", value)))
        .sort_comparator(move |a, b, _, ascending| {
            counter.fetch_add(1, AtomicOrdering::SeqCst);
            let days = |row: &Row| row.get_int("days").ok().flatten().unwrap_or(0);
            let ordering = days(b).cmp(&days(a));
            Ok(if ascending { ordering } else { ordering.reverse() })
        })
        .editable_cell(|params: EditorParams<'_>| Node::text(format!("editing {}", params.value)));

    let rows = vec![
        Row::new(1).set("days", 3),
        Row::new(2).set("days", 10),
        Row::new(3).set("days", 1),
    ];
    let mut grid = DataGrid::uncontrolled(vec![column], rows)
        .unwrap()
        .with_observer(recorder.clone());

    grid.activate_header("due").unwrap();
    let view = grid.render();
    assert_eq!(int_ids(&view.row_ids()), vec![2, 1, 3]);
    assert!(comparisons.load(AtomicOrdering::SeqCst) > 0);
    assert_eq!(view.rows[0].cells[0].node.to_plain_text(), "<in 10 days>");

    grid.begin_edit(&RowId::Int(3), "due").unwrap();
    assert_eq!(grid.active_edit().unwrap().draft(), "");
    let view = grid.render();
    let (_, cell) = view.editing_cell().unwrap();
    assert_eq!(cell.node.to_plain_text(), "editing in 1 days");

    grid.save_value("tomorrow").unwrap();
    assert_eq!(grid.row(&RowId::Int(3)).unwrap().get("due"), Some(&Value::from("tomorrow")));

    assert!(recorder.errors().is_empty());
}
