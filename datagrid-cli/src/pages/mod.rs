//! Demo datasets with their column definitions.

pub mod tasks;
pub mod users;

use std::cmp::Ordering;

use datagrid_lib::column::Column;
use datagrid_lib::error::CallbackError;
use datagrid_lib::extensions::assignee::User;
use datagrid_lib::model::Row;

/// Everything needed to put one dataset on screen.
pub struct Page {
    pub title: &'static str,
    pub columns: Vec<Column>,
    pub rows: Vec<Row>,
    /// Users offered by assignee editors
    pub people: Vec<User>,
    /// Field the owner stamps with the commit time
    pub touch_field: Option<&'static str>,
}

/// Position of a text field's value in a fixed order. Unknown values rank last.
fn rank(row: &Row, field: &str, order: &[&str]) -> usize {
    let value = row.get_str(field).ok().flatten();
    value
        .and_then(|v| order.iter().position(|o| *o == v))
        .unwrap_or(order.len())
}

/// Applies the ascending flag to a base ordering.
fn directed(ordering: Ordering, ascending: bool) -> Ordering {
    if ascending { ordering } else { ordering.reverse() }
}

/// Comparator ranking a text field by a fixed order.
fn by_order(
    order: &'static [&'static str],
) -> impl Fn(&Row, &Row, &str, bool) -> Result<Ordering, CallbackError> + Send + Sync + 'static {
    move |a, b, field, ascending| {
        Ok(directed(rank(a, field, order).cmp(&rank(b, field, order)), ascending))
    }
}

/// Comparator by the number of items in a list field.
fn by_count(
    a: &Row,
    b: &Row,
    field: &str,
    ascending: bool,
) -> Result<Ordering, CallbackError> {
    let count = |row: &Row| row.get_list(field).ok().flatten().map_or(0, <[_]>::len);
    Ok(directed(count(a).cmp(&count(b)), ascending))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rank_unknown_last() {
        let order = ["Low", "High"];
        assert_eq!(rank(&Row::new(1).set("p", "High"), "p", &order), 1);
        assert_eq!(rank(&Row::new(1).set("p", "Urgent"), "p", &order), 2);
        assert_eq!(rank(&Row::new(1), "p", &order), 2);
    }
}
