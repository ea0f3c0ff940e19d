//! A loaded page and, in controlled mode, the owner of its rows.

use std::cell::RefCell;
use std::rc::Rc;

use chrono::Utc;
use datagrid_lib::config::GridConfig;
use datagrid_lib::extensions::assignee::User;
use datagrid_lib::grid::DataGrid;
use datagrid_lib::model::Row;
use datagrid_lib::model::RowId;
use datagrid_lib::model::Value;
use log::info;
use log::warn;

use crate::error::CliError;
use crate::pages::Page;

/// A commit handed to the owner.
#[derive(Debug, Clone, PartialEq)]
pub struct Commit {
    pub row_id: RowId,
    pub field: String,
    pub value: Value,
}

/// Keeps the authoritative rows of a controlled grid.
#[derive(Debug)]
struct Owner {
    rows: Vec<Row>,
    pending: Rc<RefCell<Vec<Commit>>>,
    touch_field: Option<&'static str>,
}

impl Owner {
    /// Applies queued commits. Returns the new rows if anything changed.
    fn apply(&mut self) -> Option<Vec<Row>> {
        let commits: Vec<Commit> = self.pending.borrow_mut().drain(..).collect();
        if commits.is_empty() {
            return None;
        }

        for commit in commits {
            info!(
                "Row updated: id={}, field={}, value={}",
                commit.row_id, commit.field, commit.value
            );
            let Some(row) = self.rows.iter_mut().find(|r| r.id() == &commit.row_id) else {
                warn!("Commit for unknown row {}", commit.row_id);
                continue;
            };
            if let Err(e) = row.insert(commit.field, commit.value) {
                warn!("Commit not applied: {}", e);
                continue;
            }
            if let Some(field) = self.touch_field {
                if let Err(e) = row.insert(field, Utc::now()) {
                    warn!("Could not stamp {}: {}", field, e);
                }
            }
        }
        Some(self.rows.clone())
    }
}

/// The grid of one page plus whatever owns its rows.
pub struct Demo {
    title: &'static str,
    grid: DataGrid,
    people: Vec<User>,
    owner: Option<Owner>,
}

impl Demo {
    pub fn new(page: Page, controlled: bool, config: GridConfig) -> Result<Self, CliError> {
        let Page {
            title,
            columns,
            rows,
            people,
            touch_field,
        } = page;

        let (grid, owner) = if controlled {
            let pending: Rc<RefCell<Vec<Commit>>> = Rc::default();
            let sink = pending.clone();
            let grid = DataGrid::controlled(columns, rows.clone(), move |row_id, field, value| {
                sink.borrow_mut().push(Commit {
                    row_id: row_id.clone(),
                    field: field.to_string(),
                    value,
                });
            })?;
            let owner = Owner {
                rows,
                pending,
                touch_field,
            };
            (grid, Some(owner))
        } else {
            (DataGrid::uncontrolled(columns, rows)?, None)
        };

        Ok(Self {
            title,
            grid: grid.with_config(config),
            people,
            owner,
        })
    }

    pub fn title(&self) -> &str {
        self.title
    }

    pub fn grid(&self) -> &DataGrid {
        &self.grid
    }

    pub fn grid_mut(&mut self) -> &mut DataGrid {
        &mut self.grid
    }

    /// Users that can be assigned on this page.
    pub fn people(&self) -> &[User] {
        &self.people
    }

    /// Lets the owner apply queued commits and pushes its rows back.
    pub fn sync(&mut self) -> Result<(), CliError> {
        if let Some(rows) = self.owner.as_mut().and_then(Owner::apply) {
            self.grid.set_rows(rows)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use datagrid_lib::column::Column;

    use super::*;

    fn page() -> Page {
        Page {
            title: "Test",
            columns: vec![Column::new("name", "Name").editable(true)],
            rows: vec![Row::new(1).set("name", "Jon")],
            people: Vec::new(),
            touch_field: Some("updatedAt"),
        }
    }

    #[test]
    fn test_controlled_sync_applies_commit() {
        let mut demo = Demo::new(page(), true, GridConfig::default()).unwrap();
        let id = RowId::Int(1);
        demo.grid_mut().begin_edit(&id, "name").unwrap();
        demo.grid_mut().set_draft("Jonathan").unwrap();
        demo.grid_mut().commit_edit().unwrap();

        assert_eq!(demo.grid().row(&id).unwrap().get_str("name").unwrap(), Some("Jon"));
        demo.sync().unwrap();
        let row = demo.grid().row(&id).unwrap();
        assert_eq!(row.get_str("name").unwrap(), Some("Jonathan"));
        assert!(row.get_datetime("updatedAt").unwrap().is_some());
    }

    #[test]
    fn test_failed_stamp_keeps_commit() {
        let page = Page {
            touch_field: Some("id"),
            ..page()
        };
        let mut demo = Demo::new(page, true, GridConfig::default()).unwrap();
        let id = RowId::Int(1);
        demo.grid_mut().begin_edit(&id, "name").unwrap();
        demo.grid_mut().set_draft("Jonathan").unwrap();
        demo.grid_mut().commit_edit().unwrap();
        demo.sync().unwrap();

        let row = demo.grid().row(&id).unwrap();
        assert_eq!(row.get_str("name").unwrap(), Some("Jonathan"));
        assert_eq!(row.get_int("id").unwrap(), Some(1));
    }

    #[test]
    fn test_uncontrolled_has_no_owner() {
        let mut demo = Demo::new(page(), false, GridConfig::default()).unwrap();
        let id = RowId::Int(1);
        demo.grid_mut().begin_edit(&id, "name").unwrap();
        demo.grid_mut().set_draft("Jonathan").unwrap();
        demo.grid_mut().commit_edit().unwrap();
        demo.sync().unwrap();

        let row = demo.grid().row(&id).unwrap();
        assert_eq!(row.get_str("name").unwrap(), Some("Jonathan"));
        assert_eq!(row.get("updatedAt"), None);
    }
}
