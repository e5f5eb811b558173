//! Text rendering of the strategy tree.
//!
//! The tree itself carries no formatting; these helpers turn it into a
//! YAML-style nested listing for display. Sibling branches appear in the
//! canonical pattern order, which the `FeedbackPattern` encoding already
//! provides through the child map's key order.

use std::fmt::Write;

use crate::partition::Partition;
use crate::tree::TreeNode;

const INDENT: &str = "  ";

/// Render the whole tree as a YAML-style nested mapping. Internal nodes show
/// the guess to play and one entry per feedback pattern; leaves are bare
/// words.
pub fn render_yaml(node: &TreeNode) -> String {
    let mut out = String::new();
    match node {
        TreeNode::Leaf(word) => {
            let _ = writeln!(out, "{word}");
        }
        TreeNode::Internal(_) => write_node(&mut out, node, 0),
    }
    out
}

fn write_node(out: &mut String, node: &TreeNode, level: usize) {
    let pad = INDENT.repeat(level);
    if let TreeNode::Internal(internal) = node {
        let _ = writeln!(out, "{pad}input: {}", internal.guess);
        let _ = writeln!(out, "{pad}next:");
        for (pattern, child) in &internal.children {
            match child {
                TreeNode::Leaf(word) => {
                    let _ = writeln!(out, "{pad}{INDENT}{pattern}: {word}");
                }
                TreeNode::Internal(_) => {
                    let _ = writeln!(out, "{pad}{INDENT}{pattern}:");
                    write_node(out, child, level + 2);
                }
            }
        }
    }
}

/// One-screen summary of a single guess's partition: branch count, group-size
/// spread, and the membership of every group.
pub fn partition_summary(guess: &str, partition: &Partition) -> String {
    let counts: Vec<f64> = partition.groups.values().map(|g| g.len() as f64).collect();

    let mut out = String::new();
    let _ = writeln!(out, "Input: {guess}");
    let _ = writeln!(out, "Variance = {}", variance(&counts));
    let _ = writeln!(out, "Average = {} words", mean(&counts));
    let _ = writeln!(out, "# of Branches = {}", counts.len());
    if partition.self_is_candidate {
        let _ = writeln!(out, "Input is a possible answer");
    }
    let _ = writeln!(out);
    let _ = writeln!(out, "---");
    let _ = writeln!(out);

    for (pattern, group) in &partition.groups {
        let num = format!("({})", group.len());
        let _ = writeln!(out, "{pattern} {num:>6} -> {}", group.join(","));
    }

    out
}

fn mean(numbers: &[f64]) -> f64 {
    if numbers.is_empty() {
        return 0.0;
    }
    numbers.iter().sum::<f64>() / numbers.len() as f64
}

fn variance(numbers: &[f64]) -> f64 {
    let average = mean(numbers);
    let squared: Vec<f64> = numbers.iter().map(|n| (n - average).powi(2)).collect();
    mean(&squared)
}
