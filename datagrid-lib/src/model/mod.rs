//! Row and value model

mod row;
mod row_id;
mod row_serde;
mod value;

pub use row::*;
pub use row_id::*;
pub use value::*;
