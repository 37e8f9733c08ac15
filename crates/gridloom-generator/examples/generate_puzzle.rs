//! Example demonstrating Sudoku puzzle generation.
//!
//! This example shows how to:
//! - Generate a puzzle from entropy or from a fixed seed
//! - Sample several puzzles in parallel and keep the sparsest one
//! - Display the problem, solution, and seed
//!
//! # Usage
//!
//! ```sh
//! cargo run --release --example generate_puzzle
//! ```
//!
//! Reproduce a specific puzzle from its seed:
//!
//! ```sh
//! cargo run --release --example generate_puzzle -- \
//!     --seed c1d44bd6afaf8af64f126546884e19298acbdc33c3924a28136715de946ef3f1
//! ```
//!
//! Sample many puzzles and keep the one with the fewest givens:
//!
//! ```sh
//! cargo run --release --example generate_puzzle -- --samples 500
//! ```

use std::process;

use clap::Parser;
use gridloom_generator::{GeneratedPuzzle, PuzzleGenerator, PuzzleSeed};
use rayon::prelude::*;

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Seed as 64 hex characters; a fresh entropy seed when omitted.
    #[arg(long, value_name = "SEED", conflicts_with = "samples")]
    seed: Option<String>,

    /// Puzzles to sample; the one with the fewest givens is kept.
    #[arg(long, value_name = "COUNT", default_value_t = 1)]
    samples: usize,
}

fn main() {
    let args = Args::parse();
    let generator = PuzzleGenerator::new();

    if let Some(seed) = &args.seed {
        let seed = match seed.parse::<PuzzleSeed>() {
            Ok(seed) => seed,
            Err(err) => {
                eprintln!("Invalid seed: {err}");
                process::exit(2);
            }
        };
        match generator.generate_with_seed(seed) {
            Ok(puzzle) => print_puzzle(&puzzle),
            Err(err) => {
                eprintln!("Generation failed: {err}");
                process::exit(1);
            }
        }
        return;
    }

    if args.samples == 0 {
        eprintln!("--samples must be at least 1.");
        process::exit(1);
    }

    let best = (0..args.samples)
        .into_par_iter()
        .filter_map(|_| generator.generate().ok())
        .min_by_key(|puzzle| puzzle.problem.given_count());

    match best {
        Some(puzzle) => print_puzzle(&puzzle),
        None => {
            eprintln!("Generation failed for every sample.");
            process::exit(1);
        }
    }
}

fn print_puzzle(puzzle: &GeneratedPuzzle) {
    println!("Seed:");
    println!("  {}", puzzle.seed);
    println!();

    println!("Problem ({} givens):", puzzle.problem.given_count());
    for line in puzzle.problem.to_block_string().lines() {
        println!("  {line}");
    }
    println!();

    println!("Solution:");
    for line in puzzle.solution.to_block_string().lines() {
        println!("  {line}");
    }
    println!();

    println!("Line form:");
    println!("  {}", puzzle.problem);
}
