//! Column-driven data grid engine
//!
//! A table engine that sorts, renders and edits rows described by a
//! declarative column configuration. Rendering produces a technology-neutral
//! [`Node`](render::Node) tree; front ends decide how to draw it.
//!
//! The entry point is [`DataGrid`](grid::DataGrid).

pub mod column;
pub mod config;
pub mod edit;
pub mod error;
pub mod extensions;
pub mod grid;
pub mod model;
pub mod observe;
pub mod render;
pub mod resolve;
pub mod sort;

pub use column::Column;
pub use grid::DataGrid;
pub use model::Row;
pub use model::RowId;
pub use model::Value;
