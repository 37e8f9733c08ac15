//! The candidate store and its propagation engine.

use gridloom_core::{Digit, DigitGrid, DigitSet, House, Position};
use tinyvec::ArrayVec;

/// Outcome signalling that a board has no legal continuation.
///
/// A contradiction is detected when some cell loses its last candidate or
/// some house loses its last place for a digit. It is not an exceptional
/// condition: [`CandidateBoard::assign`] and [`CandidateBoard::eliminate`]
/// return it as a first-class value, and callers branch on it as normal
/// control flow: try the next candidate, restart generation, or report that
/// no solution exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("board has no legal continuation")]
pub struct Contradiction;

/// The mutable solver state: one candidate set per cell.
///
/// A fresh board holds [`DigitSet::FULL`] in every cell. Narrowing happens
/// exclusively through [`eliminate`](CandidateBoard::eliminate) and
/// [`assign`](CandidateBoard::assign), which propagate consequences until a
/// fixpoint: candidate sets only ever shrink, and a set that would become
/// empty surfaces as [`Contradiction`] instead.
///
/// The search driver treats the board as a value type: it clones the board
/// for every branch it explores and discards clones whose propagation
/// contradicts. Nothing is ever rolled back; isolation between branches is
/// by copy, and a board that returned an `Err` from a mutation must be
/// discarded by its owner.
///
/// # Examples
///
/// ```
/// use gridloom_core::{Digit, Position};
/// use gridloom_solver::CandidateBoard;
///
/// let mut board = CandidateBoard::new();
/// board.assign(Position::new(0, 0), Digit::D5)?;
///
/// // The digit is no longer a candidate anywhere in the cell's row,
/// // column, or box.
/// assert!(!board.candidates(Position::new(8, 0)).contains(Digit::D5));
/// # Ok::<(), gridloom_solver::Contradiction>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateBoard {
    cells: [DigitSet; 81],
}

impl CandidateBoard {
    /// Creates a board with all nine digits possible in every cell.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cells: [DigitSet::FULL; 81],
        }
    }

    /// Builds a board from a grid of givens.
    ///
    /// Every cell starts with all nine candidates; each given is then
    /// [`assign`](CandidateBoard::assign)ed exactly once, propagating as it
    /// goes. Propagation is confluent, so the order the givens are processed
    /// in does not affect the resulting fixpoint.
    ///
    /// # Errors
    ///
    /// Returns [`Contradiction`] if the givens are mutually inconsistent,
    /// for example when a digit appears twice in one house.
    pub fn from_grid(grid: &DigitGrid) -> Result<Self, Contradiction> {
        let mut board = Self::new();
        for (pos, cell) in grid.iter() {
            if let Some(digit) = cell {
                board.assign(pos, digit)?;
            }
        }
        Ok(board)
    }

    /// Returns the candidate set of the cell at `pos`.
    #[must_use]
    #[inline]
    pub const fn candidates(&self, pos: Position) -> DigitSet {
        self.cells[pos.index()]
    }

    /// Returns the digit decided for `pos`, or `None` while the cell still
    /// has several candidates.
    #[must_use]
    #[inline]
    pub const fn digit(&self, pos: Position) -> Option<Digit> {
        self.candidates(pos).as_single()
    }

    /// Returns `true` if every cell has exactly one candidate.
    #[must_use]
    pub fn is_decided(&self) -> bool {
        self.cells.iter().all(|cell| cell.len() == 1)
    }

    /// Checks that the board is a valid complete solution.
    ///
    /// True iff for every house, the digits of its decided cells are exactly
    /// 1-9: each house is a permutation with no repeats and no omissions.
    /// This reads only the candidate sets, independently of how the board
    /// was derived, so it catches a propagation bug that silently produced
    /// an inconsistent board.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        House::ALL.into_iter().all(|house| {
            let mut decided = DigitSet::EMPTY;
            for pos in house.positions() {
                match self.digit(pos) {
                    Some(digit) => decided.insert(digit),
                    None => return false,
                }
            }
            decided == DigitSet::FULL
        })
    }

    /// Returns a grid holding the decided cells; undecided cells are left
    /// unknown.
    #[must_use]
    pub fn to_digit_grid(&self) -> DigitGrid {
        let mut grid = DigitGrid::new();
        for pos in Position::ALL {
            grid.set(pos, self.digit(pos));
        }
        grid
    }

    /// Narrows the cell at `pos` to exactly `digit`.
    ///
    /// Every *other* candidate of the cell is removed through
    /// [`eliminate`](CandidateBoard::eliminate), one at a time, cascading
    /// freely. Assigning a digit that is not currently a candidate of the
    /// cell empties it and is therefore a contradiction.
    ///
    /// # Errors
    ///
    /// Returns [`Contradiction`] if any elimination step leaves a cell
    /// without candidates or a house without places for some digit. The
    /// board is then part-way through propagation and must be discarded;
    /// callers that need to survive a failed assignment work on a clone.
    pub fn assign(&mut self, pos: Position, digit: Digit) -> Result<(), Contradiction> {
        for other in self.candidates(pos).without(digit) {
            self.eliminate(pos, other)?;
        }
        Ok(())
    }

    /// Removes `digit` from the candidates of `pos` and propagates the
    /// consequences to a fixpoint.
    ///
    /// Removing an already-absent digit is a no-op, which makes the
    /// operation idempotent. Otherwise, after the removal:
    ///
    /// 1. if the cell is left with a single candidate, that digit is
    ///    eliminated from all 20 peers (naked single);
    /// 2. for each of the three houses of `pos`, if `digit` has exactly one
    ///    place left, it is [`assign`](CandidateBoard::assign)ed there
    ///    (hidden single).
    ///
    /// Each rule can trigger the other, but every recursive step strictly
    /// shrinks some candidate set, so the cascade terminates.
    ///
    /// # Errors
    ///
    /// Returns [`Contradiction`] if the cell loses its last candidate, or
    /// some house loses its last place for `digit`, here or anywhere down
    /// the cascade. The board must then be discarded by its owner.
    pub fn eliminate(&mut self, pos: Position, digit: Digit) -> Result<(), Contradiction> {
        let cell = &mut self.cells[pos.index()];
        if !cell.contains(digit) {
            return Ok(());
        }
        cell.remove(digit);
        let remaining = *cell;
        if remaining.is_empty() {
            return Err(Contradiction);
        }

        if let Some(forced) = remaining.as_single() {
            for peer in pos.peers() {
                self.eliminate(peer, forced)?;
            }
        }

        for house in pos.houses() {
            let mut places: ArrayVec<[Position; 9]> = ArrayVec::new();
            for member in house.positions() {
                if self.candidates(member).contains(digit) {
                    places.push(member);
                }
            }
            match places.as_slice() {
                [] => return Err(Contradiction),
                &[only] => self.assign(only, digit)?,
                _ => {}
            }
        }
        Ok(())
    }
}

impl Default for CandidateBoard {
    fn default() -> Self {
        Self::new()
    }
}
