//! Grid container.
//!
//! [`DataGrid`] composes sorting, rendering and editing for one table and
//! bridges commits to the row owner.

mod container;
mod mode;
mod row_renderer;
mod view;

pub use container::*;
pub use mode::*;
pub use row_renderer::*;
pub use view::*;
