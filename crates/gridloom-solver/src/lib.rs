//! Constraint propagation and backtracking search for the gridloom engine.
//!
//! This crate is the algorithmic heart of gridloom. It maintains a
//! [`CandidateBoard`] (one candidate [`DigitSet`](gridloom_core::DigitSet)
//! per cell) and contracts those sets through two interleaved propagation
//! rules:
//!
//! - **naked singles**: a cell reduced to one candidate eliminates that digit
//!   from all 20 of its peers;
//! - **hidden singles**: a digit with only one remaining place in a house is
//!   assigned there.
//!
//! A single elimination can cascade through both rules until a fixpoint is
//! reached. When propagation alone cannot decide every cell, [`search`]
//! explores the remaining choices depth-first, branching on the cell with the
//! fewest candidates and cloning the board per branch, so a contradiction
//! never corrupts state outside its own branch.
//!
//! # Examples
//!
//! ```
//! use gridloom_solver::solve;
//!
//! let grid =
//!     "003020600900305001001806400008102900700000008006708200002609500800203009005010300"
//!         .parse()?;
//!
//! let solution = solve(&grid).expect("this puzzle is solvable");
//! assert_eq!(solution.given_count(), 81);
//! # Ok::<(), gridloom_core::GridParseError>(())
//! ```

pub use self::{
    board::{CandidateBoard, Contradiction},
    search::{SearchStats, search, search_with_stats, solve},
};

mod board;
mod search;
