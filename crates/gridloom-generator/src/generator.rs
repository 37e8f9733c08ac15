//! Seeded puzzle generation on top of the solver engine.

use gridloom_core::{Digit, DigitGrid, Position};
use gridloom_solver::{CandidateBoard, search};
use rand::{RngExt as _, SeedableRng as _, seq::SliceRandom as _};
use rand_pcg::Pcg64;

use crate::PuzzleSeed;

/// How many seeding attempts a single generation may burn before giving up.
///
/// Seeding restarts whenever random assignment contradicts; in practice a
/// handful of attempts suffices.
const MAX_SEED_ATTEMPTS: usize = 64;

/// Error returned when puzzle generation fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum GenerateError {
    /// Every seeding attempt ended in a contradiction or an exhausted
    /// search.
    #[display("no full solution found within {MAX_SEED_ATTEMPTS} seeding attempts")]
    SeedingBudgetExhausted,
}

/// A generated puzzle together with its solution and the seed that produced
/// it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedPuzzle {
    /// The puzzle as handed to a player: the carved grid of givens.
    pub problem: DigitGrid,
    /// The unique solution of `problem`.
    pub solution: DigitGrid,
    /// The seed that reproduces this puzzle.
    pub seed: PuzzleSeed,
}

/// Generates Sudoku puzzles by driving the solver engine with seeded
/// randomness.
///
/// Generation happens in two phases:
///
/// 1. **Solution synthesis**: cells are visited in shuffled order and each
///    still-undecided cell is assigned a randomly picked candidate. A
///    contradiction discards the whole attempt and restarts with the next
///    shuffle; a bounded number of restarts keeps pathological seeds from
///    looping forever. Once the board is consistent but not fully decided,
///    the deterministic search finishes it.
/// 2. **Carving**: givens are removed in shuffled order; a removal is kept
///    only while constraint propagation alone still decides every cell of
///    the remaining puzzle. A propagation-decided puzzle necessarily has a
///    unique solution, so no solution counting is needed.
///
/// # Examples
///
/// ```
/// use gridloom_generator::{PuzzleGenerator, PuzzleSeed};
/// use gridloom_solver::solve;
///
/// let generator = PuzzleGenerator::new();
/// let puzzle = generator.generate_with_seed(PuzzleSeed::from_phrase("demo"))?;
///
/// // The engine agrees with the reported solution.
/// assert_eq!(solve(&puzzle.problem), Some(puzzle.solution.clone()));
/// # Ok::<(), gridloom_generator::GenerateError>(())
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct PuzzleGenerator;

impl PuzzleGenerator {
    /// Creates a new generator.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Generates a puzzle from a fresh entropy seed.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::SeedingBudgetExhausted`] if no attempt
    /// produced a full solution within the restart budget.
    pub fn generate(&self) -> Result<GeneratedPuzzle, GenerateError> {
        self.generate_with_seed(PuzzleSeed::from_entropy())
    }

    /// Generates the puzzle identified by `seed`.
    ///
    /// The same seed always yields the same puzzle.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::SeedingBudgetExhausted`] if no attempt
    /// produced a full solution within the restart budget.
    pub fn generate_with_seed(&self, seed: PuzzleSeed) -> Result<GeneratedPuzzle, GenerateError> {
        let mut rng = Pcg64::from_seed(seed.into_bytes());
        let solution = random_solution(&mut rng)?;
        let problem = carve(&solution, &mut rng);
        Ok(GeneratedPuzzle {
            problem,
            solution,
            seed,
        })
    }
}

/// Grows a full solution from seeded random assignments.
fn random_solution(rng: &mut Pcg64) -> Result<DigitGrid, GenerateError> {
    let mut order = Position::ALL;
    for _ in 0..MAX_SEED_ATTEMPTS {
        order.shuffle(rng);
        if let Some(board) = seed_board(&order, rng)
            && let Some(solution) = search(&board)
        {
            return Ok(solution.to_digit_grid());
        }
    }
    Err(GenerateError::SeedingBudgetExhausted)
}

/// Number of cells to decide randomly before handing over to search.
const SEED_CELLS: usize = 24;

/// Assigns random candidates along `order` until enough cells are decided.
///
/// Returns `None` when an assignment contradicts; the caller restarts with
/// a new shuffle.
fn seed_board(order: &[Position], rng: &mut Pcg64) -> Option<CandidateBoard> {
    let mut board = CandidateBoard::new();
    let mut decided = 0;
    for &pos in order {
        if decided >= SEED_CELLS || board.is_decided() {
            break;
        }
        if board.digit(pos).is_some() {
            continue;
        }
        let digit = random_candidate(&board, pos, rng)?;
        board.assign(pos, digit).ok()?;
        decided += 1;
    }
    Some(board)
}

/// Picks a uniformly random candidate of the cell at `pos`.
fn random_candidate(board: &CandidateBoard, pos: Position, rng: &mut Pcg64) -> Option<Digit> {
    let candidates = board.candidates(pos);
    let skip = rng.random_range(0..candidates.len());
    candidates.into_iter().nth(skip as usize)
}

/// Removes givens from `solution` while the rest stays decidable by
/// propagation alone.
fn carve(solution: &DigitGrid, rng: &mut Pcg64) -> DigitGrid {
    let mut order = Position::ALL;
    order.shuffle(rng);

    let mut problem = solution.clone();
    for pos in order {
        let kept = problem.get(pos);
        problem.set(pos, None);
        if !decided_by_propagation(&problem) {
            problem.set(pos, kept);
        }
    }
    problem
}

/// Returns `true` if building the candidate board for `grid` leaves every
/// cell decided.
fn decided_by_propagation(grid: &DigitGrid) -> bool {
    CandidateBoard::from_grid(grid).is_ok_and(|board| board.is_decided())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded(phrase: &str) -> GeneratedPuzzle {
        PuzzleGenerator::new()
            .generate_with_seed(PuzzleSeed::from_phrase(phrase))
            .unwrap()
    }

    #[test]
    fn test_same_seed_reproduces_the_puzzle() {
        let first = seeded("reproducible");
        let second = seeded("reproducible");
        assert_eq!(first, second);
    }

    #[test]
    fn test_different_seeds_differ() {
        assert_ne!(seeded("one").problem, seeded("two").problem);
    }

    #[test]
    fn test_solution_is_complete() {
        let puzzle = seeded("complete");
        assert_eq!(puzzle.solution.given_count(), 81);

        let board = CandidateBoard::from_grid(&puzzle.solution).unwrap();
        assert!(board.is_complete());
    }

    #[test]
    fn test_problem_is_a_subset_of_the_solution() {
        let puzzle = seeded("subset");
        assert!(puzzle.problem.given_count() < 81);
        for (pos, cell) in puzzle.problem.iter() {
            if let Some(digit) = cell {
                assert_eq!(puzzle.solution.get(pos), Some(digit));
            }
        }
    }

    #[test]
    fn test_problem_is_decided_by_propagation() {
        let puzzle = seeded("propagation");
        let board = CandidateBoard::from_grid(&puzzle.problem).unwrap();
        assert!(board.is_decided());
        assert_eq!(board.to_digit_grid(), puzzle.solution);
    }

    #[test]
    fn test_entropy_generation_succeeds() {
        let puzzle = PuzzleGenerator::new().generate().unwrap();
        assert!(puzzle.problem.given_count() < 81);
    }
}
