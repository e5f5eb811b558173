//! Grouping of candidate answers by the feedback a guess would produce.

use std::collections::BTreeMap;

use crate::feedback::FeedbackPattern;

/// The result of partitioning a candidate list with one guess.
///
/// Each group holds the candidates that would yield the same feedback pattern,
/// in their original candidate order. A candidate equal to the guess itself
/// joins no group; it only sets `self_is_candidate`, since guessing it ends
/// that branch immediately.
#[derive(Debug, Clone, Default)]
pub struct Partition {
    pub groups: BTreeMap<FeedbackPattern, Vec<String>>,
    pub self_is_candidate: bool,
}

impl Partition {
    /// Number of candidates accounted for, groups plus the self flag.
    pub fn total(&self) -> usize {
        let grouped: usize = self.groups.values().map(Vec::len).sum();
        grouped + usize::from(self.self_is_candidate)
    }
}

/// Bucket `candidates` by the feedback pattern `guess` would produce against
/// each of them.
pub fn partition(guess: &str, candidates: &[String]) -> Partition {
    let mut result = Partition::default();

    for answer in candidates {
        if answer == guess {
            result.self_is_candidate = true;
            continue;
        }

        let pattern = FeedbackPattern::calculate(guess, answer);
        result
            .groups
            .entry(pattern)
            .or_default()
            .push(answer.clone());
    }

    result
}
