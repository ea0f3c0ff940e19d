//! Display nodes and render dispatch.

mod cells;
mod dispatch;
mod node;

pub use cells::*;
pub use dispatch::*;
pub use node::*;
