//! Cell-level and structural transforms.
//!
//! These consume the selector machinery but carry no rule-combination
//! logic of their own.

pub mod interpret;
pub mod replace;
pub mod transpose;

pub use interpret::apply_interpret;
pub use replace::apply_replace;
pub use transpose::transpose;
