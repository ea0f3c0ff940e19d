//! Column configuration schema.
//!
//! A [`Column`] describes one vertical slice of the grid. The static part of
//! the configuration can be loaded from JSON through [`ColumnSchema`];
//! behaviours (value getters, renderers, comparators, editors, validators)
//! are attached with the builder methods.

mod definition;
mod kind;
mod schema;
mod set;

pub use definition::*;
pub use kind::*;
pub use schema::*;
pub use set::*;
