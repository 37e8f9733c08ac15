//! Depth-first backtracking search over candidate boards.

use gridloom_core::{DigitGrid, Position};

use crate::CandidateBoard;

/// Counters collected while searching.
///
/// # Examples
///
/// ```
/// use gridloom_solver::{CandidateBoard, SearchStats, search_with_stats};
///
/// let grid =
///     "003020600900305001001806400008102900700000008006708200002609500800203009005010300"
///         .parse()?;
/// let board = CandidateBoard::from_grid(&grid)?;
///
/// let mut stats = SearchStats::default();
/// let solution = search_with_stats(&board, &mut stats);
/// assert!(solution.is_some());
/// // This puzzle is decided by propagation alone, so the search visits a
/// // single node and never backtracks.
/// assert_eq!(stats.nodes(), 1);
/// assert_eq!(stats.backtracks(), 0);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct SearchStats {
    nodes: usize,
    backtracks: usize,
}

impl SearchStats {
    /// Returns the number of boards the search looked at, including the
    /// root.
    #[must_use]
    pub const fn nodes(&self) -> usize {
        self.nodes
    }

    /// Returns the number of boards whose every branch was exhausted.
    #[must_use]
    pub const fn backtracks(&self) -> usize {
        self.backtracks
    }
}

/// Searches for the first solution reachable from `board`.
///
/// If every cell of `board` is already decided, the board itself is the
/// solution. Otherwise the undecided cell with the fewest remaining
/// candidates is selected (minimum remaining values, ties broken by lowest
/// cell index) and each of its candidates is tried in ascending order on a
/// clone of the board. The first branch that reaches a solution wins;
/// `None` means every branch was exhausted and the board has no legal
/// completion, which is an ordinary outcome, not an error.
///
/// The branching order is fixed, so the same board always yields the same
/// solution.
#[must_use]
pub fn search(board: &CandidateBoard) -> Option<CandidateBoard> {
    let mut stats = SearchStats::default();
    search_with_stats(board, &mut stats)
}

/// Like [`search`], accumulating node and backtrack counters into `stats`.
pub fn search_with_stats(
    board: &CandidateBoard,
    stats: &mut SearchStats,
) -> Option<CandidateBoard> {
    stats.nodes += 1;
    let Some(pos) = most_constrained_cell(board) else {
        return Some(board.clone());
    };
    for digit in board.candidates(pos) {
        let mut branch = board.clone();
        if branch.assign(pos, digit).is_ok()
            && let Some(solution) = search_with_stats(&branch, stats)
        {
            return Some(solution);
        }
    }
    stats.backtracks += 1;
    None
}

/// Solves a grid of givens end to end.
///
/// Builds the candidate board, lets propagation run to its fixpoint, and
/// searches from there. Returns `None` both when the givens are mutually
/// inconsistent (the board construction itself contradicts, so no branching
/// happens at all) and when the search exhausts every branch.
#[must_use]
pub fn solve(grid: &DigitGrid) -> Option<DigitGrid> {
    let board = CandidateBoard::from_grid(grid).ok()?;
    search(&board).map(|solution| solution.to_digit_grid())
}

/// Returns the undecided cell with the fewest candidates, lowest index
/// first, or `None` when every cell is decided.
fn most_constrained_cell(board: &CandidateBoard) -> Option<Position> {
    Position::ALL
        .into_iter()
        .filter(|&pos| board.candidates(pos).len() > 1)
        .min_by_key(|&pos| board.candidates(pos).len())
}

#[cfg(test)]
mod tests {
    use gridloom_core::{Digit, DigitGrid};

    use super::*;
    use crate::Contradiction;

    // Norvig's easy grid: constraint propagation decides every cell.
    const EASY: &str =
        "003020600900305001001806400008102900700000008006708200002609500800203009005010300";
    const EASY_SOLUTION: &str =
        "483921657967345821251876493548132976729564138136798245372689514814253769695417382";

    // Norvig's hard grid: 17 givens, unique solution, needs branching.
    const HARD: &str =
        "4.....8.5.3..........7......2.....6.....8.4......1.......6.3.7.5..2.....1.4......";
    const HARD_SOLUTION: &str =
        "417369825632158947958724316825437169791586432346912758289643571573291684164875293";

    fn parse(line: &str) -> DigitGrid {
        line.parse().unwrap()
    }

    #[test]
    fn test_easy_grid_needs_no_branching() {
        let board = CandidateBoard::from_grid(&parse(EASY)).unwrap();
        assert!(board.is_decided());

        let mut stats = SearchStats::default();
        let solution = search_with_stats(&board, &mut stats).unwrap();
        assert_eq!(stats.nodes(), 1);
        assert_eq!(stats.backtracks(), 0);
        assert_eq!(solution.to_digit_grid().to_string(), EASY_SOLUTION);
    }

    #[test]
    fn test_hard_grid_requires_branching() {
        let grid = parse(HARD);
        assert_eq!(grid.given_count(), 17);

        let board = CandidateBoard::from_grid(&grid).unwrap();
        assert!(!board.is_decided());

        let mut stats = SearchStats::default();
        let solution = search_with_stats(&board, &mut stats).unwrap();
        assert!(stats.nodes() > 1);
        assert!(solution.is_complete());
        assert_eq!(solution.to_digit_grid().to_string(), HARD_SOLUTION);
    }

    #[test]
    fn test_solution_extends_the_givens() {
        let grid = parse(HARD);
        let solution = solve(&grid).unwrap();
        for (pos, cell) in grid.iter() {
            if let Some(digit) = cell {
                assert_eq!(solution.get(pos), Some(digit));
            }
        }
    }

    #[test]
    fn test_empty_grid_yields_some_valid_solution() {
        let board = CandidateBoard::new();
        let solution = search(&board).unwrap();
        assert!(solution.is_decided());
        assert!(solution.is_complete());
    }

    #[test]
    fn test_search_is_deterministic() {
        let board = CandidateBoard::new();
        let first = search(&board).unwrap();
        let second = search(&board).unwrap();
        assert_eq!(first, second);

        assert_eq!(solve(&parse(HARD)), solve(&parse(HARD)));
    }

    #[test]
    fn test_contradictory_givens_short_circuit() {
        // Two 5s in the top-left box.
        let mut grid = DigitGrid::new();
        grid.set(Position::new(0, 0), Some(Digit::D5));
        grid.set(Position::new(2, 2), Some(Digit::D5));

        assert_eq!(CandidateBoard::from_grid(&grid), Err(Contradiction));
        assert_eq!(solve(&grid), None);
    }

    #[test]
    fn test_search_exhausts_unsolvable_board() {
        // Three cells of row 0 restricted to the same two candidates.
        // Propagation accepts each restriction on its own, but no completion
        // exists, so every branch dies and search reports exhaustion.
        let mut board = CandidateBoard::new();
        for x in [0, 1, 2] {
            for digit in Digit::ALL {
                if digit != Digit::D1 && digit != Digit::D2 {
                    board.eliminate(Position::new(x, 0), digit).unwrap();
                }
            }
        }
        assert_eq!(search(&board), None);
    }

    #[test]
    fn test_mrv_prefers_fewest_candidates() {
        let mut board = CandidateBoard::new();
        // Leave (4, 4) with two candidates; everything else keeps more.
        for digit in Digit::ALL {
            if digit != Digit::D1 && digit != Digit::D2 {
                board.eliminate(Position::new(4, 4), digit).unwrap();
            }
        }
        assert_eq!(most_constrained_cell(&board), Some(Position::new(4, 4)));
    }

    #[test]
    fn test_mrv_breaks_ties_by_lowest_index() {
        let board = CandidateBoard::new();
        assert_eq!(most_constrained_cell(&board), Some(Position::new(0, 0)));
    }
}
