//! Reproducible Sudoku puzzle generation for the gridloom engine.
//!
//! Generation is a thin client of the solver: a full solution is grown by
//! assigning seeded-random candidates on a fresh
//! [`CandidateBoard`](gridloom_solver::CandidateBoard) (restarting on
//! contradiction), and the puzzle is then carved out of that solution by
//! removing givens while constraint propagation alone still decides every
//! cell, which guarantees a unique solution without ever enumerating
//! solutions.
//!
//! Every puzzle is identified by a 32-byte [`PuzzleSeed`]; the same seed
//! always reproduces the same puzzle.
//!
//! # Examples
//!
//! ```
//! use gridloom_generator::{PuzzleGenerator, PuzzleSeed};
//!
//! let generator = PuzzleGenerator::new();
//! let seed = PuzzleSeed::from_phrase("gridloom");
//! let puzzle = generator.generate_with_seed(seed)?;
//!
//! assert!(puzzle.problem.given_count() < 81);
//! assert_eq!(puzzle.solution.given_count(), 81);
//! # Ok::<(), gridloom_generator::GenerateError>(())
//! ```

pub use self::{
    generator::{GenerateError, GeneratedPuzzle, PuzzleGenerator},
    seed::{PuzzleSeed, SeedParseError},
};

mod generator;
mod seed;
