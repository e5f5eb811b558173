use wordle_tree::{
    build_tree, load_answers, load_guess_pool, partition, render, select_best, FeedbackPattern,
    TreeNode,
};

fn words(list: &[&str]) -> Vec<String> {
    list.iter().map(|w| w.to_string()).collect()
}

/// Every word resolved beneath `node`, with the number of guesses needed to
/// identify it. A leaf is identified by the guesses above it; a self-resolved
/// guess costs one more than the node's depth.
fn collect_resolved(node: &TreeNode, depth: usize, out: &mut Vec<(String, usize)>) {
    match node {
        TreeNode::Leaf(word) => out.push((word.clone(), depth)),
        TreeNode::Internal(internal) => {
            if internal.self_is_candidate {
                out.push((internal.guess.clone(), depth + 1));
            }
            for child in internal.children.values() {
                collect_resolved(child, depth + 1, out);
            }
        }
    }
}

fn check_no_guess_repeats(node: &TreeNode, path: &mut Vec<String>) {
    if let TreeNode::Internal(internal) = node {
        assert!(
            !path.contains(&internal.guess),
            "guess {:?} repeated along a path",
            internal.guess
        );
        path.push(internal.guess.clone());
        for child in internal.children.values() {
            check_no_guess_repeats(child, path);
        }
        path.pop();
    }
}

fn check_aggregates(node: &TreeNode) {
    let TreeNode::Internal(internal) = node else {
        return;
    };

    let mut resolved = Vec::new();
    collect_resolved(node, 0, &mut resolved);

    assert_eq!(internal.count, resolved.len());
    assert!(internal.count >= 1);
    assert!(internal.max_depth >= 1);

    let max = resolved.iter().map(|(_, d)| *d).max().unwrap();
    assert_eq!(internal.max_depth, max);

    let mean =
        resolved.iter().map(|(_, d)| *d as f64).sum::<f64>() / resolved.len() as f64;
    assert!(
        (internal.average_depth - mean).abs() < 1e-9,
        "average_depth {} != weighted mean {}",
        internal.average_depth,
        mean
    );

    for child in internal.children.values() {
        check_aggregates(child);
    }
}

#[test]
fn test_partition_completeness() {
    let candidates = words(&["crane", "slate", "trace", "crate", "raise", "stare"]);

    for guess in &candidates {
        let result = partition(guess, &candidates);
        assert_eq!(result.total(), candidates.len());
        assert!(result.self_is_candidate);

        let mut grouped: Vec<String> = result.groups.values().flatten().cloned().collect();
        assert!(!grouped.contains(guess));
        grouped.push(guess.clone());
        grouped.sort();

        let mut expected = candidates.clone();
        expected.sort();
        assert_eq!(grouped, expected);
    }
}

#[test]
fn test_partition_groups_by_pattern() {
    let candidates = words(&["crane", "slate", "toast"]);
    let result = partition("crane", &candidates);

    assert!(result.self_is_candidate);
    assert_eq!(result.groups.len(), 2);
    for (pattern, group) in &result.groups {
        for answer in group {
            assert_eq!(FeedbackPattern::calculate("crane", answer), *pattern);
        }
    }
}

#[test]
fn test_partition_preserves_candidate_order() {
    // All three words yield all-Miss against the guess, so they land in one
    // group and must keep their original order.
    let candidates = words(&["fghij", "jihgf", "gjfih"]);
    let result = partition("abcde", &candidates);

    assert_eq!(result.groups.len(), 1);
    let group = result.groups.values().next().unwrap();
    assert_eq!(*group, candidates);
}

#[test]
fn test_selector_determinism() {
    let pool = load_guess_pool();
    let answers = load_answers();

    let first = select_best(&pool, &answers);
    let second = select_best(&pool, &answers);
    assert_eq!(first.guess, second.guess);
}

#[test]
fn test_selector_stable_tie_break() {
    // Neither guess shares a letter with either candidate: both produce a
    // single all-Miss group with equal cost, so the earlier pool entry wins.
    let pool = words(&["klmno", "pqrst"]);
    let candidates = words(&["abcde", "fghij"]);

    let selection = select_best(&pool, &candidates);
    assert_eq!(selection.guess, "klmno");
}

#[test]
fn test_selector_rewards_possible_answer() {
    // "abcde" and "klmno" discriminate equally (one group each), but "abcde"
    // is itself a candidate and takes the bonus.
    let pool = words(&["klmno", "abcde"]);
    let candidates = words(&["abcde", "fghij"]);

    let selection = select_best(&pool, &candidates);
    assert_eq!(selection.guess, "abcde");
    assert!(selection.partition.self_is_candidate);
}

#[test]
#[should_panic(expected = "guess pool exhausted")]
fn test_selector_panics_on_empty_pool() {
    select_best(&[], &words(&["abcde", "fghij"]));
}

#[test]
fn test_two_answer_scenario() {
    let pool = words(&["abcde", "fghij", "klmno"]);
    let answers = words(&["abcde", "fghij"]);

    let all_miss = FeedbackPattern::parse("wwwww").unwrap();
    assert_eq!(FeedbackPattern::calculate("abcde", "fghij"), all_miss);

    let tree = build_tree(&pool, &answers);
    let TreeNode::Internal(root) = &tree else {
        panic!("expected internal root");
    };

    assert_eq!(root.guess, "abcde");
    assert!(root.self_is_candidate);
    assert_eq!(root.children.len(), 1);
    assert!(matches!(
        root.children.get(&all_miss),
        Some(TreeNode::Leaf(word)) if word == "fghij"
    ));
    assert_eq!(root.count, 2);
    assert_eq!(root.max_depth, 1);
    assert!((root.average_depth - 1.0).abs() < 1e-9);
}

#[test]
fn test_single_answer_is_leaf() {
    let pool = words(&["fghij", "klmno"]);
    let tree = build_tree(&pool, &words(&["abcde"]));
    assert!(matches!(tree, TreeNode::Leaf(word) if word == "abcde"));
}

#[test]
fn test_tree_covers_all_answers_exactly_once() {
    let pool = load_guess_pool();
    let answers = load_answers();
    let tree = build_tree(&pool, &answers);

    let mut resolved = Vec::new();
    collect_resolved(&tree, 0, &mut resolved);

    let mut resolved_words: Vec<String> = resolved.into_iter().map(|(w, _)| w).collect();
    resolved_words.sort();
    let mut expected = answers.clone();
    expected.sort();
    assert_eq!(resolved_words, expected);
}

#[test]
fn test_tree_aggregates_consistent() {
    let pool = load_guess_pool();
    let answers: Vec<String> = load_answers().into_iter().take(40).collect();
    let tree = build_tree(&pool, &answers);

    check_aggregates(&tree);
    check_no_guess_repeats(&tree, &mut Vec::new());
}

#[test]
fn test_render_leaf() {
    let tree = TreeNode::Leaf("abcde".to_string());
    assert_eq!(render::render_yaml(&tree), "abcde\n");
}

#[test]
fn test_render_tree_shape() {
    let pool = words(&["abcde", "fghij", "klmno"]);
    let answers = words(&["abcde", "fghij"]);
    let tree = build_tree(&pool, &answers);

    let rendered = render::render_yaml(&tree);
    assert_eq!(rendered, "input: abcde\nnext:\n  ⬜⬜⬜⬜⬜: fghij\n");
}

#[test]
fn test_render_orders_branches_canonically() {
    let pool = load_guess_pool();
    let answers: Vec<String> = load_answers().into_iter().take(25).collect();
    let tree = build_tree(&pool, &answers);

    let TreeNode::Internal(root) = &tree else {
        panic!("expected internal root");
    };
    let keys: Vec<FeedbackPattern> = root.children.keys().copied().collect();
    let mut sorted = keys.clone();
    sorted.sort();
    assert_eq!(keys, sorted);

    let rendered = render::render_yaml(&tree);
    assert!(rendered.starts_with(&format!("input: {}\n", root.guess)));
}

#[test]
fn test_partition_summary_lists_every_group() {
    let candidates = words(&["crane", "slate", "toast", "trace"]);
    let selection = select_best(&words(&["crane", "slate"]), &candidates);
    let summary = render::partition_summary(&selection.guess, &selection.partition);

    assert!(summary.contains(&format!("Input: {}", selection.guess)));
    assert!(summary.contains(&format!(
        "# of Branches = {}",
        selection.partition.groups.len()
    )));
    for group in selection.partition.groups.values() {
        assert!(summary.contains(&group.join(",")));
    }
}
