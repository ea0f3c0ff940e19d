//! Cell value resolution.

use std::borrow::Cow;

use crate::column::Column;
use crate::error::CellError;
use crate::model::Row;
use crate::model::Value;
use crate::observe::GridObserver;

/// Resolves the logical value of a cell.
///
/// A column's value getter is authoritative when set. Otherwise the value is
/// the row's `field`, and a missing field resolves to [`Value::Null`].
///
/// # Example
///
/// ```
/// use datagrid_lib::column::Column;
/// use datagrid_lib::model::{Row, Value};
/// use datagrid_lib::resolve::resolve;
///
/// let row = Row::new(1).set("firstName", "Jon").set("lastName", "Snow");
/// let full_name = Column::new("fullName", "Full name").value_getter(|row| {
///     let first = row.get_str("firstName").ok().flatten().unwrap_or_default();
///     let last = row.get_str("lastName").ok().flatten().unwrap_or_default();
///     Ok(Value::from(format!("{} {}", first, last)))
/// });
///
/// assert_eq!(resolve(&row, &full_name).unwrap().as_ref(), &Value::from("Jon Snow"));
/// assert!(resolve(&row, &Column::new("age", "Age")).unwrap().is_null());
/// ```
pub fn resolve<'a>(row: &'a Row, column: &Column) -> Result<Cow<'a, Value>, CellError> {
    match &column.value_getter {
        Some(getter) => getter(row)
            .map(Cow::Owned)
            .map_err(|e| CellError::resolution(Some(row.id().clone()), &column.field, e)),
        None => Ok(row
            .get(&column.field)
            .map(Cow::Borrowed)
            .unwrap_or(Cow::Owned(Value::Null))),
    }
}

/// Resolves a cell value, containing getter failures.
///
/// A failing getter is reported to `observer` and the cell resolves to
/// [`Value::Null`].
pub fn resolve_or_default<'a>(
    row: &'a Row,
    column: &Column,
    observer: &dyn GridObserver,
) -> Cow<'a, Value> {
    resolve(row, column).unwrap_or_else(|err| {
        observer.on_cell_error(&err);
        Cow::Owned(Value::Null)
    })
}
