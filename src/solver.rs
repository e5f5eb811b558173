//! Greedy guess selection.
//!
//! Every permissible guess is scored by how finely it partitions the current
//! candidate answers: more distinct feedback groups means better
//! discrimination, and a guess that is itself a possible answer gets a small
//! bonus because it can end its branch in one step. This is a one-ply greedy
//! heuristic, not a proven-optimal rule, and is kept exactly as tuned.

use rayon::prelude::*;

use crate::feedback::FeedbackPattern;
use crate::partition::{partition, Partition};

/// Bonus subtracted from the cost when the guess is a possible answer.
const SELF_CANDIDATE_BONUS: f64 = 1.1;

/// The winning guess for one node, with its candidate partition.
#[derive(Debug, Clone)]
pub struct GuessSelection {
    pub guess: String,
    pub partition: Partition,
}

/// Score one guess against the current candidates. Lower is better.
///
/// Allocation-free: only the number of distinct groups and the self flag feed
/// the cost, so a seen-pattern table suffices and the group contents are never
/// materialized here.
pub fn guess_cost(guess: &str, candidates: &[String]) -> f64 {
    let mut seen = [false; FeedbackPattern::NUM_PATTERNS];
    let mut distinct_groups = 0usize;
    let mut self_is_candidate = false;

    for answer in candidates {
        if answer == guess {
            self_is_candidate = true;
            continue;
        }
        let pattern = FeedbackPattern::calculate(guess, answer);
        if !seen[pattern.0 as usize] {
            seen[pattern.0 as usize] = true;
            distinct_groups += 1;
        }
    }

    let bonus = if self_is_candidate {
        SELF_CANDIDATE_BONUS
    } else {
        0.0
    };
    -(distinct_groups as f64) - bonus
}

/// Pick the guess with the lowest cost from `pool`, evaluated against
/// `candidates`. Ties keep the earliest pool entry, so the result is
/// deterministic for a fixed pool order.
///
/// Panics if `pool` or `candidates` is empty; both are configuration errors
/// the caller must rule out.
pub fn select_best(pool: &[String], candidates: &[String]) -> GuessSelection {
    assert!(
        !pool.is_empty(),
        "guess pool exhausted with {} candidates unresolved",
        candidates.len()
    );
    assert!(!candidates.is_empty(), "empty candidate list");

    let costs: Vec<f64> = pool
        .par_iter()
        .map(|guess| guess_cost(guess, candidates))
        .collect();

    let mut best = 0;
    for (i, &cost) in costs.iter().enumerate().skip(1) {
        if cost < costs[best] {
            best = i;
        }
    }

    GuessSelection {
        guess: pool[best].clone(),
        partition: partition(&pool[best], candidates),
    }
}
