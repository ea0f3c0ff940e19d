//! Shared fixtures for the integration tests.

#![allow(dead_code)]

use std::sync::Arc;
use std::sync::Mutex;

use datagrid_lib::error::CellError;
use datagrid_lib::model::Row;
use datagrid_lib::model::RowId;
use datagrid_lib::model::Value;
use datagrid_lib::observe::GridObserver;

/// Observer that keeps every reported failure.
#[derive(Default)]
pub struct Recorder {
    errors: Mutex<Vec<CellError>>,
}

impl Recorder {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn errors(&self) -> Vec<CellError> {
        self.errors.lock().unwrap().clone()
    }
}

impl GridObserver for Recorder {
    fn on_cell_error(&self, error: &CellError) {
        self.errors.lock().unwrap().push(error.clone());
    }
}

/// `[{id:1,age:30},{id:2,age:null},{id:3,age:10}]`
pub fn ages() -> Vec<Row> {
    vec![
        Row::new(1).set("age", 30),
        Row::new(2).set("age", Value::Null),
        Row::new(3).set("age", 10),
    ]
}

pub fn ids(rows: &[&Row]) -> Vec<i64> {
    rows.iter()
        .map(|r| match r.id() {
            RowId::Int(n) => *n,
            RowId::Text(_) => panic!("expected numeric ids"),
        })
        .collect()
}

pub fn int_ids(ids: &[RowId]) -> Vec<i64> {
    ids.iter()
        .map(|id| match id {
            RowId::Int(n) => *n,
            RowId::Text(_) => panic!("expected numeric ids"),
        })
        .collect()
}
