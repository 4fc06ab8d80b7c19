//! Clause combination for rule groups.

/// Folds a sequence of per-clause "keep" votes into one decision.
///
/// Each clause reports `true` ("this clause would keep the line") or
/// `false` ("this clause flags the line for removal"). The two modes
/// are deliberately asymmetric:
///
/// - AND mode: the line is kept unless at least one clause voted false.
///   Top-level rule lists use this, so any single matching rule is a
///   knockout.
/// - OR mode: the line is kept unless every clause voted false. `allOf`
///   groups use this internally, so a group flags the line only when
///   all of its members matched it. An empty clause list keeps.
///
/// Report order does not affect the outcome.
#[derive(Debug)]
pub struct Combiner {
    combine_with_and: bool,
    votes: Vec<bool>,
}

impl Combiner {
    /// Create a combiner. `true` selects AND mode, `false` OR mode.
    pub fn new(combine_with_and: bool) -> Self {
        Self {
            combine_with_and,
            votes: Vec::new(),
        }
    }

    /// Record one clause result.
    pub fn report(&mut self, keep: bool) {
        self.votes.push(keep);
    }

    /// The combined decision: should the line be kept?
    pub fn decide(&self) -> bool {
        if self.combine_with_and {
            self.votes.iter().all(|&v| v)
        } else {
            self.votes.is_empty() || self.votes.iter().any(|&v| v)
        }
    }
}
