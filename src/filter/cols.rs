//! Column filtering.
//!
//! The structural dual of row filtering with the roles swapped: value
//! rules carry a `row` scope and report column indices where their value
//! is found. Unlike rows, the three rule kinds do not vote through a
//! combiner; each feeds one deduplicated "columns to drop" set.

use std::collections::HashSet;
use std::slice;

use crate::predicate::IndexPredicate;
use crate::rules::Rule;
use crate::selector::Selector;
use crate::value::Table;

/// Drop every column matching at least one rule in the list.
///
/// Three independent sources union into the drop set: explicit index
/// rules (columns the index predicate excludes), value rules (columns
/// where the value appears in a selected row), and `allOf` groups
/// (columns satisfying every group member). Output rows omit the
/// dropped positions; ragged rows simply omit fewer cells.
pub fn filter_cols(table: &Table, rules: &[Rule]) -> Table {
    let width = table.width();
    let mut drop: HashSet<usize> = HashSet::new();

    let index = IndexPredicate::build(rules);
    for col in 0..width {
        if !index.keep(col) {
            drop.insert(col);
        }
    }

    for rule in rules {
        match rule {
            Rule::Value { row, val, .. } => {
                let scope = Selector::normalize(row.as_ref());
                for row_index in scope.positions(table.len()) {
                    for (col, cell) in table.rows[row_index].iter().enumerate() {
                        if cell == val {
                            drop.insert(col);
                        }
                    }
                }
            }
            Rule::AllOf { rules } => {
                for col in 0..width {
                    if group_matches_col(table, rules, col) {
                        drop.insert(col);
                    }
                }
            }
            Rule::Index { .. } => {}
        }
    }

    let rows = table
        .rows
        .iter()
        .map(|row| {
            row.iter()
                .enumerate()
                .filter(|(col, _)| !drop.contains(col))
                .map(|(_, cell)| cell.clone())
                .collect()
        })
        .collect();

    Table::from_rows(rows)
}

/// Does the column satisfy every member of an `allOf` group?
fn group_matches_col(table: &Table, rules: &[Rule], col: usize) -> bool {
    rules.iter().all(|rule| rule_matches_col(table, rule, col))
}

/// Does the column satisfy one group member?
fn rule_matches_col(table: &Table, rule: &Rule, col: usize) -> bool {
    match rule {
        Rule::Value { row, val, .. } => {
            let scope = Selector::normalize(row.as_ref());
            scope
                .positions(table.len())
                .into_iter()
                .any(|row_index| table.rows[row_index].get(col) == Some(val))
        }
        Rule::Index { .. } => !IndexPredicate::build(slice::from_ref(rule)).keep(col),
        Rule::AllOf { rules } => group_matches_col(table, rules, col),
    }
}
