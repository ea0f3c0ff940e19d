//! Ready-made cells for common domain values.
//!
//! Each module offers a display builder that plugs into
//! [`Column::render_cell`](crate::column::Column::render_cell) and, where
//! editing makes sense, a [`CellEditor`](crate::edit::CellEditor) for
//! [`Column::editable_cell`](crate::column::Column::editable_cell).

pub mod assignee;
pub mod date;
pub mod link;
pub mod star_rating;
