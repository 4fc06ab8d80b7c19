//! Pattern replacement in text cells.

use regex::Regex;

use crate::rules::ReplaceRule;
use crate::selector::Selector;
use crate::value::{Cell, Table};

/// Apply a list of replace rules to every text cell within each rule's
/// row/column scope. Rules apply in order, so a later rule sees the
/// output of an earlier one.
///
/// `orig` is compiled as a regex; a pattern that fails to compile is
/// skipped rather than raised. Non-text cells pass through unchanged.
pub fn apply_replace(table: &Table, rules: &[ReplaceRule]) -> Table {
    let compiled: Vec<(Regex, &str, Selector, Selector)> = rules
        .iter()
        .filter_map(|rule| {
            Regex::new(&rule.orig).ok().map(|pattern| {
                (
                    pattern,
                    rule.new.as_str(),
                    Selector::normalize(rule.row.as_ref()),
                    Selector::normalize(rule.col.as_ref()),
                )
            })
        })
        .collect();

    let rows = table
        .rows
        .iter()
        .enumerate()
        .map(|(row_index, row)| {
            row.iter()
                .enumerate()
                .map(|(col_index, cell)| {
                    let mut cell = cell.clone();
                    for (pattern, replacement, row_scope, col_scope) in &compiled {
                        if row_scope.contains(row_index)
                            && col_scope.contains(col_index)
                            && let Cell::Text(s) = &cell
                        {
                            cell = Cell::Text(pattern.replace_all(s, *replacement).into_owned());
                        }
                    }
                    cell
                })
                .collect()
        })
        .collect();

    Table::from_rows(rows)
}
