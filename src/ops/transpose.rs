//! Table transposition.

use crate::value::Table;

/// Swap rows and columns: output row `c` collects cell `c` of every
/// input row that has one. An involution for rectangular tables; ragged
/// input yields transposed rows that skip the missing cells.
pub fn transpose(table: &Table) -> Table {
    let width = table.width();
    let rows = (0..width)
        .map(|col| {
            table
                .rows
                .iter()
                .filter_map(|row| row.get(col).cloned())
                .collect()
        })
        .collect();
    Table::from_rows(rows)
}
