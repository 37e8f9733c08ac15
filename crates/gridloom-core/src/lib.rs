//! Core board vocabulary for the gridloom Sudoku engine.
//!
//! This crate defines the immutable structure of a 9×9 board and the value
//! types the solver and generator crates operate on:
//!
//! - [`Digit`]: type-safe representation of the digits 1-9
//! - [`Position`]: one of the 81 cells, addressed by `(x, y)` or row-major index
//! - [`House`]: one of the 27 constraint groups (rows, columns, 3×3 boxes)
//! - [`DigitSet`]: a set of digits, used as the candidate set of a single cell
//! - [`PositionSet`]: a set of cells, used for house membership and peers
//! - [`DigitGrid`]: the external 81-cell representation with text parsing
//!   and formatting
//!
//! The topology (which cells form each house, and which 20 cells are the
//! peers of a given cell) is computed once in const context and never
//! mutated. [`Position::houses`] and [`Position::peers`] read those tables.
//!
//! # Examples
//!
//! ```
//! use gridloom_core::{Digit, DigitSet, Position};
//!
//! let pos = Position::new(4, 4);
//! assert_eq!(pos.peers().len(), 20);
//!
//! let mut candidates = DigitSet::FULL;
//! candidates.remove(Digit::D5);
//! assert_eq!(candidates.len(), 8);
//! ```

pub use self::{
    digit::Digit,
    digit_set::{DigitSet, DigitSetIter},
    grid::{DigitGrid, GridParseError},
    house::House,
    position::Position,
    position_set::{PositionSet, PositionSetIter},
};

mod digit;
mod digit_set;
mod grid;
mod house;
mod position;
mod position_set;
