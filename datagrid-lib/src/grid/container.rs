//! DataGrid: one table instance.

use std::collections::HashSet;
use std::sync::Arc;

use log::debug;
use log::info;

use super::GridMode;
use super::GridView;
use super::HeaderCell;
use super::render_row;
use crate::column::Column;
use crate::column::ColumnSet;
use crate::config::GridConfig;
use crate::edit::CommitDecision;
use crate::edit::EditKey;
use crate::edit::EditOutcome;
use crate::edit::EditSession;
use crate::error::GridError;
use crate::error::Result;
use crate::model::ID_FIELD;
use crate::model::Row;
use crate::model::RowId;
use crate::model::Value;
use crate::observe::GridObserver;
use crate::observe::LogObserver;
use crate::render::render_header;
use crate::resolve::resolve_or_default;
use crate::sort::SortModel;
use crate::sort::sort_rows;

/// A column-driven table with sorting and inline editing.
///
/// The grid owns the active sort and at most one edit session. Rows are
/// either the owner's snapshot ([`GridMode::Controlled`]) or the grid's own
/// copy ([`GridMode::Uncontrolled`]). Every operation runs synchronously in
/// the caller's event handler.
///
/// # Example
///
/// ```
/// use datagrid_lib::column::{Column, ColumnType};
/// use datagrid_lib::edit::{EditKey, EditOutcome};
/// use datagrid_lib::grid::DataGrid;
/// use datagrid_lib::model::{Row, RowId, Value};
///
/// let columns = vec![
///     Column::new("firstName", "First name").editable(true),
///     Column::new("age", "Age").kind(ColumnType::Number),
/// ];
/// let rows = vec![
///     Row::new(1).set("firstName", "Jon").set("age", 14),
///     Row::new(2).set("firstName", "Cersei").set("age", 31),
/// ];
///
/// let mut grid = DataGrid::uncontrolled(columns, rows).unwrap();
/// grid.activate_header("age").unwrap();
/// grid.activate_header("age").unwrap();
/// assert_eq!(grid.render().row_ids(), vec![RowId::Int(2), RowId::Int(1)]);
///
/// grid.begin_edit(&RowId::Int(1), "firstName").unwrap();
/// grid.set_draft("Jonathan").unwrap();
/// let outcome = grid.handle_key(EditKey::Enter).unwrap();
/// assert!(matches!(outcome, EditOutcome::Committed { .. }));
/// assert_eq!(grid.row(&RowId::Int(1)).unwrap().get("firstName"), Some(&Value::from("Jonathan")));
/// ```
pub struct DataGrid {
    columns: ColumnSet,
    rows: Vec<Row>,
    mode: GridMode,
    sort: Option<SortModel>,
    session: Option<EditSession>,
    config: GridConfig,
    observer: Arc<dyn GridObserver>,
}

impl DataGrid {
    /// Creates a grid whose rows belong to the owner.
    ///
    /// Commits are handed to `on_commit`; the grid never writes them into its
    /// snapshot. The owner pushes its updated rows back with
    /// [`DataGrid::set_rows`].
    pub fn controlled<F>(columns: Vec<Column>, rows: Vec<Row>, on_commit: F) -> Result<Self>
    where
        F: FnMut(&RowId, &str, Value) + 'static,
    {
        Self::new(columns, rows, GridMode::Controlled(Box::new(on_commit)))
    }

    /// Creates a grid that keeps and edits its own row copy.
    pub fn uncontrolled(columns: Vec<Column>, rows: Vec<Row>) -> Result<Self> {
        Self::new(columns, rows, GridMode::Uncontrolled)
    }

    fn new(columns: Vec<Column>, rows: Vec<Row>, mode: GridMode) -> Result<Self> {
        let columns = ColumnSet::new(columns)?;
        check_row_ids(&rows)?;
        debug!(
            "Creating {:?} grid with {} columns and {} rows",
            mode,
            columns.len(),
            rows.len()
        );
        Ok(Self {
            columns,
            rows,
            mode,
            sort: None,
            session: None,
            config: GridConfig::default(),
            observer: Arc::new(LogObserver),
        })
    }

    /// Sets the grid configuration.
    pub fn with_config(mut self, config: GridConfig) -> Self {
        self.config = config;
        self
    }

    /// Sets the observer for contained cell failures.
    pub fn with_observer(mut self, observer: Arc<dyn GridObserver>) -> Self {
        self.observer = observer;
        self
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn mode(&self) -> &GridMode {
        &self.mode
    }

    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    pub fn columns(&self) -> &ColumnSet {
        &self.columns
    }

    /// Rows in source order.
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Returns the row with this id.
    pub fn row(&self, id: &RowId) -> Option<&Row> {
        self.rows.iter().find(|r| r.id() == id)
    }

    pub fn sort_model(&self) -> Option<&SortModel> {
        self.sort.as_ref()
    }

    /// The open edit session, if any.
    pub fn active_edit(&self) -> Option<&EditSession> {
        self.session.as_ref()
    }

    /// Rows in display order.
    pub fn sorted_rows(&self) -> Vec<&Row> {
        sort_rows(
            &self.rows,
            self.sort.as_ref(),
            &self.columns,
            self.observer.as_ref(),
        )
    }

    // =========================================================================
    // Programmatic updates
    // =========================================================================

    /// Replaces the rows.
    ///
    /// Rows with a repeated id are rejected and the grid keeps its current
    /// rows. An open edit whose row is gone is cancelled.
    pub fn set_rows(&mut self, rows: Vec<Row>) -> Result<()> {
        check_row_ids(&rows)?;
        self.rows = rows;
        let orphaned = self
            .session
            .as_ref()
            .is_some_and(|s| self.row(&s.key().row_id).is_none());
        if orphaned {
            self.drop_session("its row was removed");
        }
        Ok(())
    }

    /// Replaces the columns.
    ///
    /// A sort on a column that is gone or no longer sortable is cleared. An
    /// open edit on a column that is gone or no longer editable is cancelled.
    pub fn set_columns(&mut self, columns: Vec<Column>) -> Result<()> {
        self.columns = ColumnSet::new(columns)?;

        let sort_valid = self.sort.as_ref().is_none_or(|sort| {
            self.columns
                .get(&sort.field)
                .is_some_and(|column| column.sortable)
        });
        if !sort_valid {
            debug!("Clearing sort: column no longer sortable");
            self.sort = None;
        }

        let edit_valid = self.session.as_ref().is_none_or(|session| {
            self.columns
                .get(&session.key().field)
                .is_some_and(|column| {
                    column.editable && column.editable_cell.is_some() == session.is_delegated()
                })
        });
        if !edit_valid {
            self.drop_session("its column changed");
        }
        Ok(())
    }

    // =========================================================================
    // Sorting
    // =========================================================================

    /// Handles a header activation on `field`.
    ///
    /// Cycles the column through ascending, descending and unsorted; any
    /// other column's sort is dropped. Returns the new sort.
    pub fn activate_header(&mut self, field: &str) -> Result<Option<&SortModel>> {
        let column = self.columns.require(field)?;
        if !column.sortable {
            return Err(GridError::NotSortable {
                field: field.to_string(),
            });
        }
        self.sort = SortModel::next(self.sort.as_ref(), field);
        debug!("Sort is now {:?}", self.sort);
        Ok(self.sort.as_ref())
    }

    /// Sets the sort directly.
    pub fn set_sort(&mut self, sort: Option<SortModel>) -> Result<()> {
        if let Some(model) = &sort {
            let column = self.columns.require(&model.field)?;
            if !column.sortable {
                return Err(GridError::NotSortable {
                    field: model.field.clone(),
                });
            }
        }
        self.sort = sort;
        Ok(())
    }

    // =========================================================================
    // Editing
    // =========================================================================

    /// Opens an edit on a cell.
    ///
    /// Any other open edit is cancelled first, without committing. Opening
    /// the cell that is already being edited keeps its draft.
    pub fn begin_edit(&mut self, row_id: &RowId, field: &str) -> Result<()> {
        let column = self.columns.require(field)?;
        if !column.editable {
            return Err(GridError::NotEditable {
                field: field.to_string(),
            });
        }
        if field == ID_FIELD {
            return Err(GridError::ReadOnlyField {
                field: field.to_string(),
            });
        }
        let row = self
            .rows
            .iter()
            .find(|r| r.id() == row_id)
            .ok_or_else(|| GridError::unknown_row(row_id.clone()))?;

        if let Some(current) = &mut self.session {
            if current.is_for(row_id, field) {
                return Ok(());
            }
            debug!("Force-cancelling edit of {}", current.key().element_id());
            current.cancel();
        }

        let value = resolve_or_default(row, column, self.observer.as_ref());
        self.session = Some(EditSession::open(
            row_id.clone(),
            column,
            &value,
            &self.config,
            self.observer.as_ref(),
        ));
        Ok(())
    }

    /// Replaces the draft of the open default-pipeline edit.
    pub fn set_draft(&mut self, draft: impl Into<String>) -> Result<()> {
        let session = self.session.as_mut().ok_or(GridError::NoActiveEdit)?;
        let column = self.columns.require(&session.key().field)?;
        if session.is_delegated() {
            return Err(GridError::EditorOwnsCommit {
                field: column.field.clone(),
            });
        }
        session.set_draft(draft, column, &self.config);
        Ok(())
    }

    /// Commits the open default-pipeline edit.
    ///
    /// A rejected draft leaves the row untouched and the session open and
    /// marked invalid.
    pub fn commit_edit(&mut self) -> Result<EditOutcome> {
        let session = self.session.as_mut().ok_or(GridError::NoActiveEdit)?;
        let column = self.columns.require(&session.key().field)?;
        if session.is_delegated() {
            return Err(GridError::EditorOwnsCommit {
                field: column.field.clone(),
            });
        }

        match session.commit(column, &self.config, self.observer.as_ref()) {
            CommitDecision::Rejected => {
                debug!("Draft for {} rejected", session.key().element_id());
                Ok(EditOutcome::Rejected)
            }
            CommitDecision::Accepted(value) => self.finish_commit(value),
        }
    }

    /// Commits a value produced by a custom editor.
    pub fn save_value(&mut self, value: impl Into<Value>) -> Result<EditOutcome> {
        let session = self.session.as_mut().ok_or(GridError::NoActiveEdit)?;
        if !session.is_delegated() {
            return Err(GridError::NotDelegated {
                field: session.key().field.clone(),
            });
        }
        session.accept();
        self.finish_commit(value.into())
    }

    /// Discards the open edit.
    pub fn cancel_edit(&mut self) -> Result<EditOutcome> {
        let mut session = self.session.take().ok_or(GridError::NoActiveEdit)?;
        session.cancel();
        Ok(EditOutcome::Cancelled)
    }

    /// Routes a key from the default input: Enter commits, Escape cancels.
    pub fn handle_key(&mut self, key: EditKey) -> Result<EditOutcome> {
        match key {
            EditKey::Enter => self.commit_edit(),
            EditKey::Escape => self.cancel_edit(),
        }
    }

    /// The edit surface lost focus without a save instruction.
    pub fn blur(&mut self) -> Result<EditOutcome> {
        self.cancel_edit()
    }

    fn finish_commit(&mut self, value: Value) -> Result<EditOutcome> {
        let session = self.session.take().ok_or(GridError::NoActiveEdit)?;
        let key = session.key().clone();
        info!("Committing {} = {:?}", key.element_id(), value);

        match &mut self.mode {
            GridMode::Controlled(on_commit) => on_commit(&key.row_id, &key.field, value.clone()),
            GridMode::Uncontrolled => {
                let row = self
                    .rows
                    .iter_mut()
                    .find(|r| r.id() == &key.row_id)
                    .ok_or_else(|| GridError::unknown_row(key.row_id.clone()))?;
                row.insert(key.field.clone(), value.clone())
                    .map_err(|_| GridError::ReadOnlyField {
                        field: key.field.clone(),
                    })?;
            }
        }

        Ok(EditOutcome::Committed {
            row_id: key.row_id,
            field: key.field,
            value,
        })
    }

    fn drop_session(&mut self, reason: &str) {
        if let Some(mut session) = self.session.take() {
            debug!("Cancelling edit of {}: {}", session.key().element_id(), reason);
            session.cancel();
        }
    }

    // =========================================================================
    // Rendering
    // =========================================================================

    /// Renders the header and the sorted rows.
    pub fn render(&self) -> GridView {
        let observer = self.observer.as_ref();
        let header = self
            .columns
            .iter()
            .map(|column| {
                let direction = SortModel::direction_for(self.sort.as_ref(), &column.field);
                HeaderCell {
                    field: column.field.clone(),
                    node: render_header(column, direction),
                    align: column.effective_align(),
                    width: column.width,
                    min_width: column.min_width_or(self.config.default_min_width),
                    sortable: column.sortable,
                    direction,
                }
            })
            .collect();

        let rows = self
            .sorted_rows()
            .into_iter()
            .map(|row| {
                render_row(
                    row,
                    &self.columns,
                    self.session.as_ref(),
                    &self.config,
                    observer,
                )
            })
            .collect();

        GridView { header, rows }
    }
}

impl std::fmt::Debug for DataGrid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DataGrid")
            .field("mode", &self.mode)
            .field("columns", &self.columns)
            .field("rows", &self.rows.len())
            .field("sort", &self.sort)
            .field("session", &self.session)
            .field("config", &self.config)
            .finish()
    }
}

fn check_row_ids(rows: &[Row]) -> Result<()> {
    let mut seen = HashSet::new();
    for row in rows {
        if !seen.insert(row.id()) {
            return Err(GridError::DuplicateRow {
                row_id: row.id().clone(),
            });
        }
    }
    Ok(())
}
