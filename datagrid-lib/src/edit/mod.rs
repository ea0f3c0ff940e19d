//! Inline cell editing.
//!
//! A cell is edited either through the default pipeline (format the value
//! into a draft, validate the parsed draft, commit) or through a column's
//! [`CellEditor`], which takes over the whole surface.

pub mod codec;
mod editor;
mod session;

pub use editor::*;
pub use session::*;
