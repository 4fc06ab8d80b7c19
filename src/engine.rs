//! Operation parsing and sequencing.

use serde_json::Value;

use crate::error::{Error, Result};
use crate::filter::{filter_cols, filter_rows};
use crate::ops::{apply_interpret, apply_replace, transpose};
use crate::rules::Operation;
use crate::value::Table;

/// Parse operations from JSON: a single operation object or an array of
/// them. An unrecognized operation name or malformed parameter fails
/// here, with the offending step recorded; applying a parsed operation
/// cannot fail.
pub fn parse_operations(json: &str) -> Result<Vec<Operation>> {
    let value: Value = serde_json::from_str(json)
        .map_err(|e| Error::new(format!("invalid operation JSON: {}", e)))?;

    match value {
        Value::Array(items) => items
            .into_iter()
            .enumerate()
            .map(|(step, item)| {
                serde_json::from_value(item).map_err(|e| Error::new(e.to_string()).at_step(step))
            })
            .collect(),
        other => Ok(vec![
            serde_json::from_value(other).map_err(|e| Error::new(e.to_string()))?,
        ]),
    }
}

/// Apply one operation, producing a new table.
pub fn apply(operation: &Operation, table: &Table) -> Table {
    match operation {
        Operation::IgnoreRowIf(rules) => filter_rows(table, rules),
        Operation::IgnoreColIf(rules) => filter_cols(table, rules),
        Operation::Replace(rules) => apply_replace(table, rules),
        Operation::InterpretStr(spec) => apply_interpret(table, spec),
        Operation::Transpose => transpose(table),
    }
}

/// Apply operations left to right, each consuming the previous output.
/// The input table is never touched.
pub fn refine(operations: &[Operation], table: &Table) -> Table {
    let mut current = table.clone();
    for operation in operations {
        current = apply(operation, &current);
    }
    current
}

/// One-call entry point: parse operations from JSON and apply them.
/// A parse failure aborts before any operation runs.
pub fn refine_json(operations_json: &str, table: &Table) -> Result<Table> {
    let operations = parse_operations(operations_json)?;
    Ok(refine(&operations, table))
}
