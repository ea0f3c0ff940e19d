//! Single-column sorting.
//!
//! [`SortModel`] tracks the active (field, direction) pair, [`sort_rows`]
//! produces the ordered view.

mod compare;
mod engine;
mod model;

pub use compare::*;
pub use engine::*;
pub use model::*;
