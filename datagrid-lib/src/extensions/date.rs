//! Human-friendly date cells.

use chrono::NaiveDate;

use crate::column::Column;
use crate::model::Row;
use crate::model::Value;
use crate::render::Node;
use crate::sort::as_timestamp;

/// Formats a date as `Mon D, YYYY`.
///
/// ```
/// use chrono::NaiveDate;
/// use datagrid_lib::extensions::date::short_date;
///
/// assert_eq!(short_date(NaiveDate::from_ymd_opt(2023, 12, 5).unwrap()), "Dec 5, 2023");
/// ```
pub fn short_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

/// Reads a calendar date from a cell value.
pub fn date_of(value: &Value) -> Option<NaiveDate> {
    as_timestamp(value).map(|dt| dt.date_naive())
}

/// A due date is overdue when it lies before `today` and the work is not done.
pub fn is_overdue(due: Option<NaiveDate>, done: bool, today: NaiveDate) -> bool {
    !done && due.is_some_and(|due| due < today)
}

/// Display of a date as `Mon D, YYYY`, empty when the value is not a date.
pub fn short_date_renderer() -> impl Fn(&Value, &Row, &Column) -> Node + Send + Sync + 'static {
    |value, _, column| {
        let text = date_of(value).map(short_date).unwrap_or_default();
        Node::text_aligned(text, column.effective_align())
    }
}
