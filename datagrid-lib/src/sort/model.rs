//! Sort model and header activation cycle.

use serde::Deserialize;
use serde::Serialize;

/// Sort direction for an active sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    /// Ascending order (A-Z, 0-9), nulls first.
    Asc,
    /// Descending order (Z-A, 9-0), nulls last.
    Desc,
}

impl SortDirection {
    /// Returns `true` for [`SortDirection::Asc`].
    pub fn is_ascending(self) -> bool {
        matches!(self, SortDirection::Asc)
    }
}

/// The single active sort of a grid.
///
/// "No sort" is expressed as `Option<SortModel>::None`, so a present model
/// always carries a direction.
///
/// # Example
///
/// ```
/// use datagrid_lib::sort::{SortDirection, SortModel};
///
/// let sort = SortModel::next(None, "age");
/// assert_eq!(sort, Some(SortModel::asc("age")));
///
/// let sort = SortModel::next(sort.as_ref(), "age");
/// assert_eq!(sort.as_ref().map(|s| s.direction), Some(SortDirection::Desc));
///
/// assert_eq!(SortModel::next(sort.as_ref(), "age"), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortModel {
    pub field: String,
    pub direction: SortDirection,
}

impl SortModel {
    /// Creates an ascending sort on a field.
    pub fn asc(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            direction: SortDirection::Asc,
        }
    }

    /// Creates a descending sort on a field.
    pub fn desc(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            direction: SortDirection::Desc,
        }
    }

    /// Computes the sort after a header activation on `field`.
    ///
    /// The same field cycles none, ascending, descending, none. Another field
    /// always starts at ascending.
    pub fn next(current: Option<&SortModel>, field: &str) -> Option<SortModel> {
        match current {
            Some(model) if model.field == field => match model.direction {
                SortDirection::Asc => Some(SortModel::desc(field)),
                SortDirection::Desc => None,
            },
            _ => Some(SortModel::asc(field)),
        }
    }

    /// Direction shown for `field` under this sort, if any.
    pub fn direction_for(current: Option<&SortModel>, field: &str) -> Option<SortDirection> {
        current
            .filter(|model| model.field == field)
            .map(|model| model.direction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cycle_returns_to_none() {
        let first = SortModel::next(None, "title");
        let second = SortModel::next(first.as_ref(), "title");
        let third = SortModel::next(second.as_ref(), "title");

        assert_eq!(first, Some(SortModel::asc("title")));
        assert_eq!(second, Some(SortModel::desc("title")));
        assert_eq!(third, None);
    }

    #[test]
    fn test_other_field_starts_ascending() {
        let current = SortModel::desc("title");
        assert_eq!(
            SortModel::next(Some(&current), "dueDate"),
            Some(SortModel::asc("dueDate"))
        );
    }

    #[test]
    fn test_direction_for_other_field_is_none() {
        let current = SortModel::asc("title");
        assert_eq!(SortModel::direction_for(Some(&current), "status"), None);
        assert_eq!(
            SortModel::direction_for(Some(&current), "title"),
            Some(SortDirection::Asc)
        );
    }
}
