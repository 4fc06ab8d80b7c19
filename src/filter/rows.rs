//! Row filtering.

use crate::combine::Combiner;
use crate::predicate::{GroupPredicate, IndexPredicate, ValuePredicate};
use crate::rules::Rule;
use crate::value::Table;

/// Drop every row matching at least one rule in the list.
///
/// The rule list is compiled once into an index predicate, one value
/// predicate per value rule, and one group predicate per `allOf` group.
/// Per row, each compiled predicate votes and the votes combine in AND
/// mode: a single matching rule removes the row. Surviving rows keep
/// their order and contents.
pub fn filter_rows(table: &Table, rules: &[Rule]) -> Table {
    let index = IndexPredicate::build(rules);
    let values = ValuePredicate::build(rules);
    let groups: Vec<GroupPredicate> = rules
        .iter()
        .filter_map(|rule| match rule {
            Rule::AllOf { rules } => Some(GroupPredicate::build(rules)),
            _ => None,
        })
        .collect();

    let rows = table
        .rows
        .iter()
        .enumerate()
        .filter(|(row_index, row)| {
            let mut combiner = Combiner::new(true);
            combiner.report(index.keep(*row_index));
            for predicate in &values {
                combiner.report(predicate.keep(row));
            }
            for group in &groups {
                combiner.report(group.keep(row, *row_index));
            }
            combiner.decide()
        })
        .map(|(_, row)| row.clone())
        .collect();

    Table::from_rows(rows)
}
