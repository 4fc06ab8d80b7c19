//! A small declarative engine for cleaning tabular data.
//!
//! A caller describes cleaning steps as JSON operations; the engine
//! applies them in order to a [`Table`] and returns a new table, leaving
//! the input untouched. Rows and columns are dropped by rule lists
//! combining index, value, and nested `allOf` conditions; the remaining
//! operations replace cell text, interpret strings as typed values, and
//! transpose the table.
//!
//! ```
//! use refine::{refine_json, Table};
//!
//! let table = Table::from_csv_reader("a,1\nb,2\n".as_bytes()).unwrap();
//! let cleaned = refine_json(
//!     r#"[{"operation": "ignoreRowIf", "param": [{"col": 0, "val": "a"}]}]"#,
//!     &table,
//! )
//! .unwrap();
//! assert_eq!(cleaned.len(), 1);
//! ```

pub mod combine;
pub mod engine;
pub mod error;
pub mod filter;
pub mod ops;
pub mod parser;
pub mod predicate;
pub mod rules;
pub mod selector;
pub mod value;

pub use engine::{parse_operations, refine, refine_json};
pub use error::{Error, Result};
pub use rules::Operation;
pub use value::{Cell, Table};
