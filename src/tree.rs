//! Recursive construction of the full strategy tree.

use std::collections::BTreeMap;

use crate::feedback::FeedbackPattern;
use crate::solver::select_best;

/// A branching node: the guess to play here and one subtree per feedback
/// pattern observed among the current candidates.
#[derive(Debug, Clone)]
pub struct InternalNode {
    pub guess: String,
    pub children: BTreeMap<FeedbackPattern, TreeNode>,
    /// The guess itself is among the remaining candidate answers.
    pub self_is_candidate: bool,
    /// Candidates resolved anywhere beneath this node.
    pub count: usize,
    /// Worst-case number of further guesses from this node.
    pub max_depth: usize,
    /// Expected number of further guesses from this node, with all remaining
    /// candidates equally likely.
    pub average_depth: f64,
}

/// One node of the strategy tree.
#[derive(Debug, Clone)]
pub enum TreeNode {
    /// A single resolved answer.
    Leaf(String),
    Internal(InternalNode),
}

impl TreeNode {
    /// Candidates resolved beneath this node. A leaf resolves exactly one.
    pub fn count(&self) -> usize {
        match self {
            TreeNode::Leaf(_) => 1,
            TreeNode::Internal(node) => node.count,
        }
    }

    /// Worst-case guesses remaining. A leaf needs only its own word.
    pub fn max_depth(&self) -> usize {
        match self {
            TreeNode::Leaf(_) => 0,
            TreeNode::Internal(node) => node.max_depth,
        }
    }

    /// Expected guesses remaining beyond the incoming guess.
    pub fn average_depth(&self) -> f64 {
        match self {
            TreeNode::Leaf(_) => 0.0,
            TreeNode::Internal(node) => node.average_depth,
        }
    }
}

/// Build the full strategy tree for `candidates`, choosing guesses from
/// `pool`.
///
/// The chosen guess is removed from the pool passed down to every child
/// branch, so no guess is played twice along any path. Candidates shrink only
/// by partitioning. Panics if the pool runs out before all candidates are
/// disambiguated; the caller must supply a pool large enough for the answer
/// list.
pub fn build_tree(pool: &[String], candidates: &[String]) -> TreeNode {
    build_at_depth(pool, candidates, 0)
}

fn build_at_depth(pool: &[String], candidates: &[String], depth: usize) -> TreeNode {
    assert!(!candidates.is_empty(), "empty candidate list");

    if candidates.len() == 1 {
        return TreeNode::Leaf(candidates[0].clone());
    }

    let selection = select_best(pool, candidates);
    if depth < 2 {
        log::debug!(
            "depth {}: guess {:?} splits {} candidates into {} groups",
            depth,
            selection.guess,
            candidates.len(),
            selection.partition.groups.len()
        );
    }

    // The selector picked the guess from this pool, so exactly one entry
    // matches.
    let chosen = pool.iter().position(|w| *w == selection.guess).unwrap();
    let mut reduced = pool.to_vec();
    reduced.remove(chosen);

    let mut children = BTreeMap::new();
    for (pattern, group) in selection.partition.groups {
        children.insert(pattern, build_at_depth(&reduced, &group, depth + 1));
    }

    let self_is_candidate = selection.partition.self_is_candidate;
    let count = children.values().map(TreeNode::count).sum::<usize>()
        + usize::from(self_is_candidate);
    let max_depth = 1 + children.values().map(TreeNode::max_depth).max().unwrap_or(0);
    // Expected depth: one guess here, plus the count-weighted mean of each
    // branch's remaining depth. A candidate resolved by the guess itself
    // costs exactly the one guess, which the leading 1 already covers.
    let average_depth = 1.0
        + children
            .values()
            .map(|child| child.average_depth() * child.count() as f64)
            .sum::<f64>()
            / count as f64;

    TreeNode::Internal(InternalNode {
        guess: selection.guess,
        children,
        self_is_candidate,
        count,
        max_depth,
        average_depth,
    })
}
