//! Row and column filtering driven by rule lists.

pub mod cols;
pub mod rows;

pub use cols::filter_cols;
pub use rows::filter_rows;
