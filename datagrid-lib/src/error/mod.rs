//! Error types

mod cell;
mod field;
mod grid;

pub use cell::*;
pub use field::*;
pub use grid::*;

/// Convenience alias for fallible grid operations.
pub type Result<T> = std::result::Result<T, GridError>;
