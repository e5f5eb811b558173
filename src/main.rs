//! Wordle Tree CLI
//!
//! Builds the strategy tree over the embedded word lists (or lists supplied
//! on the command line) and prints it, or summarizes the best opening guess.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use wordle_tree::{
    build_tree, load_answers, load_guess_pool, render, select_best, TreeNode, WORD_LENGTH,
};

#[derive(Parser)]
#[command(version, about = "Precompute a full Wordle strategy tree")]
struct Cli {
    /// Permissible-guess list, one word per line (defaults to the embedded list)
    #[arg(long, global = true)]
    guesses: Option<PathBuf>,

    /// Candidate-answer list, one word per line (defaults to the embedded list)
    #[arg(long, global = true)]
    answers: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Build the full strategy tree and print it as YAML
    Tree,
    /// Evaluate only the opening guess and print its partition
    Best,
}

fn load_words(path: Option<&Path>, embedded: fn() -> Vec<String>, role: &str) -> Result<Vec<String>> {
    let words = match path {
        Some(path) => {
            let data = std::fs::read_to_string(path)
                .with_context(|| format!("reading {} list from {}", role, path.display()))?;
            data.lines()
                .map(|line| line.trim().to_lowercase())
                .filter(|w| w.len() == WORD_LENGTH && w.bytes().all(|b| b.is_ascii_lowercase()))
                .collect()
        }
        None => embedded(),
    };

    if words.is_empty() {
        bail!("{} list contains no {}-letter words", role, WORD_LENGTH);
    }
    Ok(words)
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let guesses = load_words(cli.guesses.as_deref(), load_guess_pool, "guess")?;
    let answers = load_words(cli.answers.as_deref(), load_answers, "answer")?;
    log::info!(
        "loaded {} permissible guesses, {} candidate answers",
        guesses.len(),
        answers.len()
    );

    match cli.command {
        Command::Tree => {
            let tree = build_tree(&guesses, &answers);
            if let TreeNode::Internal(root) = &tree {
                log::info!(
                    "resolved {} answers, max depth {}, average depth {:.3}",
                    root.count,
                    root.max_depth,
                    root.average_depth
                );
            }
            print!("{}", render::render_yaml(&tree));
        }
        Command::Best => {
            let selection = select_best(&guesses, &answers);
            print!(
                "{}",
                render::partition_summary(&selection.guess, &selection.partition)
            );
        }
    }

    Ok(())
}
