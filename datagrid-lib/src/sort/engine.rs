//! Stable row sorting.

use std::borrow::Cow;
use std::cmp::Ordering;

use log::debug;

use super::SortModel;
use super::compare_values;
use crate::column::Column;
use crate::column::ColumnSet;
use crate::error::CellError;
use crate::model::Row;
use crate::model::Value;
use crate::observe::GridObserver;
use crate::resolve::resolve_or_default;

/// Orders rows under the active sort.
///
/// Returns a borrowed view; `rows` itself is never reordered or mutated.
/// Without a sort, or when the sorted field names no column, the view keeps
/// the input order.
///
/// The sort is stable for any comparator. A custom comparator that fails
/// counts as "equal" for that comparison; the first failure of the pass is
/// reported to `observer`.
///
/// # Example
///
/// ```
/// use datagrid_lib::column::{Column, ColumnSet, ColumnType};
/// use datagrid_lib::model::{Row, RowId, Value};
/// use datagrid_lib::observe::LogObserver;
/// use datagrid_lib::sort::{SortModel, sort_rows};
///
/// let rows = vec![
///     Row::new(1).set("age", 30),
///     Row::new(2).set("age", Value::Null),
///     Row::new(3).set("age", 10),
/// ];
/// let columns = ColumnSet::new(vec![Column::new("age", "Age").kind(ColumnType::Number)]).unwrap();
///
/// let sorted = sort_rows(&rows, Some(&SortModel::asc("age")), &columns, &LogObserver);
/// let ids: Vec<_> = sorted.iter().map(|r| r.id().clone()).collect();
/// assert_eq!(ids, vec![RowId::Int(2), RowId::Int(3), RowId::Int(1)]);
/// ```
pub fn sort_rows<'a>(
    rows: &'a [Row],
    sort: Option<&SortModel>,
    columns: &ColumnSet,
    observer: &dyn GridObserver,
) -> Vec<&'a Row> {
    let mut view: Vec<&Row> = rows.iter().collect();

    let Some(sort) = sort else {
        return view;
    };
    let Some(column) = columns.get(&sort.field) else {
        debug!("Sort field '{}' has no column, keeping input order", sort.field);
        return view;
    };

    let ascending = sort.direction.is_ascending();
    debug!(
        "Sorting {} rows by '{}' ({:?})",
        rows.len(),
        sort.field,
        sort.direction
    );

    match &column.sort_comparator {
        Some(comparator) => {
            let mut reported = false;
            merge_sort_by(&mut view, |a, b| {
                comparator(a, b, &column.field, ascending).unwrap_or_else(|err| {
                    if !reported {
                        observer.on_cell_error(&CellError::resolution(None, &column.field, err));
                        reported = true;
                    }
                    Ordering::Equal
                })
            });
            view
        }
        None => sort_by_type(view, column, ascending, observer),
    }
}

fn sort_by_type<'a>(
    view: Vec<&'a Row>,
    column: &Column,
    ascending: bool,
    observer: &dyn GridObserver,
) -> Vec<&'a Row> {
    // Resolve each key once so a failing getter is reported once per row.
    let keys: Vec<Cow<'a, Value>> = view
        .iter()
        .map(|&row| resolve_or_default(row, column, observer))
        .collect();

    let mut order: Vec<usize> = (0..view.len()).collect();
    merge_sort_by(&mut order, |&a, &b| {
        compare_values(column.kind, &keys[a], &keys[b], ascending)
    });

    order.into_iter().map(|i| view[i]).collect()
}

/// Bottom-up merge sort.
///
/// Stable, and well defined even when `compare` is not a total order.
pub(crate) fn merge_sort_by<T, F>(items: &mut [T], mut compare: F)
where
    T: Copy,
    F: FnMut(&T, &T) -> Ordering,
{
    let len = items.len();
    if len < 2 {
        return;
    }

    let mut buffer = items.to_vec();
    let mut width = 1;
    while width < len {
        let mut start = 0;
        while start < len {
            let mid = (start + width).min(len);
            let end = (start + 2 * width).min(len);
            merge(&items[start..mid], &items[mid..end], &mut buffer[start..end], &mut compare);
            start = end;
        }
        items.copy_from_slice(&buffer);
        width *= 2;
    }
}

fn merge<T, F>(left: &[T], right: &[T], out: &mut [T], compare: &mut F)
where
    T: Copy,
    F: FnMut(&T, &T) -> Ordering,
{
    let (mut i, mut j) = (0, 0);
    for slot in out.iter_mut() {
        // Ties take from the left run.
        let take_right = i == left.len()
            || (j < right.len() && compare(&right[j], &left[i]) == Ordering::Less);
        if take_right {
            *slot = right[j];
            j += 1;
        } else {
            *slot = left[i];
            i += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_sort_orders() {
        let mut items = vec![5, 3, 9, 1, 1, 7, 2];
        merge_sort_by(&mut items, |a, b| a.cmp(b));
        assert_eq!(items, vec![1, 1, 2, 3, 5, 7, 9]);
    }

    #[test]
    fn test_merge_sort_is_stable() {
        let mut items = vec![(1, 'a'), (0, 'b'), (1, 'c'), (0, 'd')];
        merge_sort_by(&mut items, |a, b| a.0.cmp(&b.0));
        assert_eq!(items, vec![(0, 'b'), (0, 'd'), (1, 'a'), (1, 'c')]);
    }

    #[test]
    fn test_merge_sort_inconsistent_comparator() {
        let mut items: Vec<u32> = (0..33).collect();
        let mut calls = 0u32;
        merge_sort_by(&mut items, |_, _| {
            calls += 1;
            if calls % 2 == 0 { Ordering::Less } else { Ordering::Greater }
        });
        let mut sorted = items.clone();
        sorted.sort();
        assert_eq!(sorted, (0..33).collect::<Vec<_>>());
    }
}
