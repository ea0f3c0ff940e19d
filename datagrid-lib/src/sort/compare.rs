//! Type-based default comparators.
//!
//! All three share one null rule: on ascending order nulls sort first, on
//! descending order nulls sort last, and two nulls are equal. The base
//! comparison of two present values is reversed for descending order.
//!
//! Strings collate with the Unicode root collation on lower-cased text, so
//! `éclair` sorts before `zebra`. Strings equal under case folding are equal.

use std::cell::RefCell;
use std::cmp::Ordering;

use chrono::DateTime;
use chrono::NaiveDate;
use chrono::NaiveDateTime;
use chrono::Utc;
use feruca::Collator;
use unicase::UniCase;

use crate::column::ColumnType;
use crate::model::Value;

/// Compares two resolved cell values under a column type.
///
/// # Example
///
/// ```
/// use std::cmp::Ordering;
/// use datagrid_lib::column::ColumnType;
/// use datagrid_lib::model::Value;
/// use datagrid_lib::sort::compare_values;
///
/// let apple = Value::from("Apple");
/// let banana = Value::from("banana");
/// assert_eq!(compare_values(ColumnType::String, &apple, &banana, true), Ordering::Less);
/// assert_eq!(compare_values(ColumnType::Number, &Value::Null, &Value::from(1), false), Ordering::Greater);
/// ```
pub fn compare_values(kind: ColumnType, a: &Value, b: &Value, ascending: bool) -> Ordering {
    match kind {
        ColumnType::Number => with_nulls(as_number(a), as_number(b), ascending, |x, y| {
            x.partial_cmp(y).unwrap_or(Ordering::Equal)
        }),
        ColumnType::Date => with_nulls(as_timestamp(a), as_timestamp(b), ascending, Ord::cmp),
        ColumnType::String | ColumnType::Default => {
            with_nulls(as_text(a), as_text(b), ascending, |x, y| compare_text(x, y))
        }
    }
}

thread_local! {
    static COLLATOR: RefCell<Collator> = RefCell::new(Collator::default());
}

fn compare_text(a: &str, b: &str) -> Ordering {
    if UniCase::new(a) == UniCase::new(b) {
        return Ordering::Equal;
    }
    let (a, b) = (a.to_lowercase(), b.to_lowercase());
    COLLATOR.with(|collator| collator.borrow_mut().collate(a.as_str(), b.as_str()))
}

fn with_nulls<T>(
    a: Option<T>,
    b: Option<T>,
    ascending: bool,
    compare: impl FnOnce(&T, &T) -> Ordering,
) -> Ordering {
    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) if ascending => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (Some(_), None) if ascending => Ordering::Greater,
        (Some(_), None) => Ordering::Less,
        (Some(a), Some(b)) => {
            let ordering = compare(&a, &b);
            if ascending { ordering } else { ordering.reverse() }
        }
    }
}

/// Coerces a value to a number; `None` counts as null.
///
/// Integers, floats, booleans and numeric strings qualify. `NaN` does not.
pub fn as_number(value: &Value) -> Option<f64> {
    let n = match value {
        Value::Int(n) => *n as f64,
        Value::Float(n) => *n,
        Value::Bool(b) => f64::from(u8::from(*b)),
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    (!n.is_nan()).then_some(n)
}

/// Coerces a value to a UTC timestamp; `None` counts as null.
///
/// Dates count as midnight UTC. Numbers are epoch milliseconds. Strings are
/// read as RFC 3339, `YYYY-MM-DD` or `YYYY-MM-DDTHH:MM:SS`.
pub fn as_timestamp(value: &Value) -> Option<DateTime<Utc>> {
    match value {
        Value::Date(date) => date.and_hms_opt(0, 0, 0).map(|dt| dt.and_utc()),
        Value::DateTime(dt) => Some(*dt),
        Value::Int(ms) => DateTime::from_timestamp_millis(*ms),
        Value::Float(ms) if ms.is_finite() => DateTime::from_timestamp_millis(ms.trunc() as i64),
        Value::String(s) => parse_timestamp(s.trim()),
        _ => None,
    }
}

fn parse_timestamp(s: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S") {
        return Some(dt.and_utc());
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc())
}

fn as_text(value: &Value) -> Option<String> {
    match value {
        Value::Null | Value::Json(serde_json::Value::Null) => None,
        other => Some(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_number_nulls_first_ascending() {
        let null = Value::Null;
        let ten = Value::from(10);
        assert_eq!(compare_values(ColumnType::Number, &null, &ten, true), Ordering::Less);
        assert_eq!(compare_values(ColumnType::Number, &ten, &null, true), Ordering::Greater);
    }

    #[test]
    fn test_number_nulls_last_descending() {
        let null = Value::Null;
        let ten = Value::from(10);
        assert_eq!(compare_values(ColumnType::Number, &null, &ten, false), Ordering::Greater);
        assert_eq!(compare_values(ColumnType::Number, &ten, &null, false), Ordering::Less);
    }

    #[test]
    fn test_two_nulls_equal() {
        for kind in [ColumnType::Number, ColumnType::Date, ColumnType::String] {
            assert_eq!(compare_values(kind, &Value::Null, &Value::Null, true), Ordering::Equal);
        }
    }

    #[test]
    fn test_number_mixed_representations() {
        assert_eq!(
            compare_values(ColumnType::Number, &Value::from(2.5), &Value::from(3), true),
            Ordering::Less
        );
        assert_eq!(
            compare_values(ColumnType::Number, &Value::from("12"), &Value::from(3), true),
            Ordering::Greater
        );
        assert_eq!(as_number(&Value::from(f64::NAN)), None);
        assert_eq!(as_number(&Value::from("twelve")), None);
    }

    #[test]
    fn test_date_unparsable_is_null() {
        let bad = Value::from("someday");
        let date = Value::from(NaiveDate::from_ymd_opt(2023, 12, 15).unwrap());
        assert_eq!(compare_values(ColumnType::Date, &bad, &date, true), Ordering::Less);
        assert_eq!(compare_values(ColumnType::Date, &bad, &Value::Null, true), Ordering::Equal);
    }

    #[test]
    fn test_date_epoch_millis() {
        let millis = Value::from(1_702_598_400_000_i64);
        let date = Value::from(NaiveDate::from_ymd_opt(2023, 12, 15).unwrap());
        assert_eq!(compare_values(ColumnType::Date, &millis, &date, true), Ordering::Equal);
        assert_eq!(as_timestamp(&Value::from(0)).unwrap().timestamp(), 0);
    }

    #[test]
    fn test_string_accents_collate_with_base_letter() {
        let eclair = Value::from("éclair");
        let zebra = Value::from("zebra");
        let echo = Value::from("Echo");
        assert_eq!(compare_values(ColumnType::String, &eclair, &zebra, true), Ordering::Less);
        assert_eq!(compare_values(ColumnType::String, &echo, &eclair, true), Ordering::Less);
    }

    #[test]
    fn test_date_mixed_representations() {
        let date = Value::from(NaiveDate::from_ymd_opt(2023, 12, 15).unwrap());
        let text = Value::from("2023-12-14T23:00:00");
        let rfc = Value::from("2023-12-15T00:00:00Z");
        assert_eq!(compare_values(ColumnType::Date, &text, &date, true), Ordering::Less);
        assert_eq!(compare_values(ColumnType::Date, &rfc, &date, true), Ordering::Equal);
    }

    #[test]
    fn test_string_case_insensitive() {
        let upper = Value::from("APPLE");
        let lower = Value::from("apple");
        assert_eq!(compare_values(ColumnType::String, &upper, &lower, true), Ordering::Equal);
        assert_eq!(
            compare_values(ColumnType::Default, &Value::from("b"), &Value::from("A"), false),
            Ordering::Less
        );
    }
}
