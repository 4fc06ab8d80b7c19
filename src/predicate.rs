//! Predicates built from rule lists.
//!
//! The row and column filters both compile a rule list into three kinds of
//! predicate before scanning the table: an index predicate over line
//! indices, value predicates over line contents, and recursive group
//! predicates for `allOf` rule groups.

use std::collections::HashSet;

use crate::combine::Combiner;
use crate::parser::IndexExpr;
use crate::rules::{IndexSpec, Rule};
use crate::selector::Selector;
use crate::value::Cell;

/// A predicate over line indices, answering "is this index excluded by
/// no index rule" (true = keep).
#[derive(Debug)]
pub struct IndexPredicate {
    excluded: HashSet<usize>,
    exprs: Vec<IndexExpr>,
}

impl IndexPredicate {
    /// Collect the index-bearing rules of a list: literal indices go into
    /// the exclusion set, expression strings become evaluators. Rules
    /// without an `index` field do not participate.
    pub fn build(rules: &[Rule]) -> Self {
        let mut excluded = HashSet::new();
        let mut exprs = Vec::new();

        for rule in rules {
            if let Rule::Index { index } = rule {
                match index {
                    IndexSpec::One(i) => {
                        excluded.insert(*i);
                    }
                    IndexSpec::Many(indices) => excluded.extend(indices.iter().copied()),
                    IndexSpec::Expr(expr) => exprs.push(IndexExpr::compile(expr)),
                }
            }
        }

        Self { excluded, exprs }
    }

    /// True when no index rule participated. A vacuous predicate keeps
    /// every index; groups also use this to apply their precedence rule.
    pub fn is_vacuous(&self) -> bool {
        self.excluded.is_empty() && self.exprs.is_empty()
    }

    /// Keep the index unless it is in the exclusion set, or every
    /// expression evaluator (of at least one) matches it.
    pub fn keep(&self, index: usize) -> bool {
        if self.excluded.contains(&index) {
            return false;
        }
        if !self.exprs.is_empty() && self.exprs.iter().all(|e| e.matches(index)) {
            return false;
        }
        true
    }
}

/// A predicate testing whether a line holds a target value at selected
/// positions. Votes `false` ("remove") iff the value is found.
#[derive(Debug)]
pub struct ValuePredicate {
    scope: Selector,
    target: Cell,
}

impl ValuePredicate {
    pub fn new(scope: Selector, target: Cell) -> Self {
        Self { scope, target }
    }

    /// One predicate per value rule in the list. The position scope comes
    /// from the rule's `col` field (row filtering orientation).
    pub fn build(rules: &[Rule]) -> Vec<Self> {
        rules
            .iter()
            .filter_map(|rule| match rule {
                Rule::Value { col, val, .. } => {
                    Some(Self::new(Selector::normalize(col.as_ref()), val.clone()))
                }
                _ => None,
            })
            .collect()
    }

    /// Keep the line unless the target value appears at a selected
    /// in-bounds position. Out-of-range selected positions are skipped.
    pub fn keep(&self, line: &[Cell]) -> bool {
        !self
            .scope
            .positions(line.len())
            .into_iter()
            .any(|i| line[i] == self.target)
    }
}

/// A compiled `allOf` group: one clause in its parent's combination,
/// internally an AND over its own members.
#[derive(Debug)]
pub struct GroupPredicate {
    index: IndexPredicate,
    values: Vec<ValuePredicate>,
    groups: Vec<GroupPredicate>,
}

impl GroupPredicate {
    pub fn build(rules: &[Rule]) -> Self {
        Self {
            index: IndexPredicate::build(rules),
            values: ValuePredicate::build(rules),
            groups: rules
                .iter()
                .filter_map(|rule| match rule {
                    Rule::AllOf { rules } => Some(GroupPredicate::build(rules)),
                    _ => None,
                })
                .collect(),
        }
    }

    /// Decide the group's vote for one line.
    ///
    /// A group carrying any index rule is decided by its index predicate
    /// alone; its value predicates are ignored. Otherwise every member
    /// votes and the results combine in OR mode, so the group flags the
    /// line only when all members matched it.
    pub fn keep(&self, line: &[Cell], index: usize) -> bool {
        if !self.index.is_vacuous() {
            return self.index.keep(index);
        }

        let mut combiner = Combiner::new(false);
        for predicate in &self.values {
            combiner.report(predicate.keep(line));
        }
        for group in &self.groups {
            combiner.report(group.keep(line, index));
        }
        combiner.decide()
    }
}
