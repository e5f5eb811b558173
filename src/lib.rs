//! # Wordle Tree
//!
//! Precomputes a full strategy tree for a Wordle-style guessing game.
//!
//! At every node the builder scores each permissible guess by how many distinct
//! feedback groups it splits the remaining candidate answers into, picks the
//! best one greedily, and recurses into each group until every candidate is
//! uniquely identified.

pub mod feedback;
pub mod partition;
pub mod render;
pub mod solver;
pub mod tree;

pub use feedback::{Feedback, FeedbackPattern};
pub use partition::{partition, Partition};
pub use solver::{select_best, GuessSelection};
pub use tree::{build_tree, InternalNode, TreeNode};

/// Word length for Wordle
pub const WORD_LENGTH: usize = 5;

fn parse_word_list(data: &str) -> Vec<String> {
    data.lines()
        .map(|line| line.trim().to_lowercase())
        .filter(|w| w.len() == WORD_LENGTH && w.bytes().all(|b| b.is_ascii_lowercase()))
        .collect()
}

/// Load the permissible-guess list from the embedded file
pub fn load_guess_pool() -> Vec<String> {
    parse_word_list(include_str!("../dictionary/guesses.txt"))
}

/// Load the candidate-answer list from the embedded file
pub fn load_answers() -> Vec<String> {
    parse_word_list(include_str!("../dictionary/answers.txt"))
}
