//! Normalized row/column scopes.

use crate::rules::ScopeSpec;

/// A normalized row/column scope: either every index, or an explicit set.
///
/// Produced once per rule from the raw `ScopeSpec`; the explicit form keeps
/// the caller's indices as given (no dedup, no sort).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selector {
    All,
    Subset(Vec<usize>),
}

impl Selector {
    /// Normalize a raw scope. An absent scope and the `"any"` keyword both
    /// mean "every index"; a scalar becomes a one-element set. Total over
    /// its domain; never fails.
    pub fn normalize(spec: Option<&ScopeSpec>) -> Self {
        match spec {
            None | Some(ScopeSpec::Any) => Selector::All,
            Some(ScopeSpec::One(idx)) => Selector::Subset(vec![*idx]),
            Some(ScopeSpec::Many(indices)) => Selector::Subset(indices.clone()),
        }
    }

    /// Does this scope cover the given index?
    pub fn contains(&self, index: usize) -> bool {
        match self {
            Selector::All => true,
            Selector::Subset(indices) => indices.contains(&index),
        }
    }

    /// The concrete positions this scope selects within a line of `len`
    /// elements. `All` yields every position; a subset yields only its
    /// in-bounds members, silently skipping the rest.
    pub fn positions(&self, len: usize) -> Vec<usize> {
        match self {
            Selector::All => (0..len).collect(),
            Selector::Subset(indices) => {
                indices.iter().copied().filter(|&i| i < len).collect()
            }
        }
    }
}
