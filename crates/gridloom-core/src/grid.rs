//! The external 81-cell grid representation and its text formats.

use std::{
    fmt::{self, Display, Write as _},
    str::FromStr,
};

use crate::{Digit, Position};

/// A 9×9 grid of given digits, the external representation of a puzzle.
///
/// Each of the 81 cells either holds a digit (a given) or is unknown. The
/// engine consumes a `DigitGrid` when building its candidate state and
/// produces one when reporting a solution; it never mutates a grid it was
/// handed.
///
/// # Text format
///
/// Parsing scans the input for cell characters: `1`-`9` are givens, and `0`,
/// `.` or `_` all denote an unknown cell. Every other character (whitespace,
/// `|`, `-`, and any other decoration) is ignored, so both the 81-character
/// line form and block layouts parse:
///
/// ```
/// use gridloom_core::DigitGrid;
///
/// let from_line: DigitGrid =
///     "4.....8.5.3..........7......2.....6.....8.4......1.......6.3.7.5..2.....1.4......"
///         .parse()?;
///
/// let from_block: DigitGrid = "
///     4__ ___ 8_5
///     _3_ ___ ___
///     ___ 7__ ___
///     _2_ ___ _6_
///     ___ _8_ 4__
///     ___ _1_ ___
///     ___ 6_3 _7_
///     5__ 2__ ___
///     1_4 ___ ___
/// "
/// .parse()?;
///
/// assert_eq!(from_line, from_block);
/// # Ok::<(), gridloom_core::GridParseError>(())
/// ```
///
/// After filtering, exactly 81 cell characters must remain or parsing fails
/// with [`GridParseError::WrongCellCount`].
///
/// [`Display`] renders the line form with `.` for unknown cells;
/// [`DigitGrid::to_block_string`] renders a multi-line block form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DigitGrid {
    cells: [Option<Digit>; 81],
}

impl DigitGrid {
    /// Creates a grid with every cell unknown.
    #[must_use]
    pub const fn new() -> Self {
        Self { cells: [None; 81] }
    }

    /// Returns the digit at `pos`, or `None` if the cell is unknown.
    #[must_use]
    #[inline]
    pub const fn get(&self, pos: Position) -> Option<Digit> {
        self.cells[pos.index()]
    }

    /// Sets or clears the digit at `pos`.
    #[inline]
    pub const fn set(&mut self, pos: Position, digit: Option<Digit>) {
        self.cells[pos.index()] = digit;
    }

    /// Returns the number of givens (known cells) in the grid.
    #[must_use]
    pub fn given_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Returns an iterator over all cells in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Position, Option<Digit>)> {
        Position::ALL.into_iter().zip(self.cells)
    }

    /// Renders the grid as a 9-line block with boxes separated by spaces and
    /// unknown cells shown as `_`.
    ///
    /// # Examples
    ///
    /// ```
    /// use gridloom_core::DigitGrid;
    ///
    /// let grid = DigitGrid::new();
    /// let block = grid.to_block_string();
    /// assert_eq!(block.lines().count(), 9);
    /// assert!(block.starts_with("___ ___ ___"));
    /// ```
    #[must_use]
    pub fn to_block_string(&self) -> String {
        let mut out = String::with_capacity(12 * 9);
        for (pos, cell) in self.iter() {
            match cell {
                Some(digit) => {
                    let _ = write!(out, "{digit}");
                }
                None => out.push('_'),
            }
            if pos.x() == 8 {
                if pos.y() < 8 {
                    out.push('\n');
                }
            } else if pos.x() % 3 == 2 {
                out.push(' ');
            }
        }
        out
    }
}

impl Default for DigitGrid {
    fn default() -> Self {
        Self::new()
    }
}

/// Error returned when parsing a [`DigitGrid`] from text fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum GridParseError {
    /// The input did not contain exactly 81 cell characters.
    #[display("expected 81 cell characters, found {count}")]
    WrongCellCount {
        /// Number of cell characters found after filtering.
        count: usize,
    },
}

impl FromStr for DigitGrid {
    type Err = GridParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cells = [None; 81];
        let mut count = 0;
        for ch in s.chars() {
            let cell = match ch {
                '1'..='9' => Some(Digit::from_value(ch as u8 - b'0')),
                '0' | '.' | '_' => None,
                _ => continue,
            };
            if count < 81 {
                cells[count] = cell;
            }
            count += 1;
        }
        if count != 81 {
            return Err(GridParseError::WrongCellCount { count });
        }
        Ok(Self { cells })
    }
}

impl Display for DigitGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for cell in self.cells {
            match cell {
                Some(digit) => Display::fmt(&digit, f)?,
                None => f.write_char('.')?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LINE: &str =
        "003020600900305001001806400008102900700000008006708200002609500800203009005010300";

    #[test]
    fn test_parse_line_form() {
        let grid: DigitGrid = LINE.parse().unwrap();
        assert_eq!(grid.get(Position::new(2, 0)), Some(Digit::D3));
        assert_eq!(grid.get(Position::new(0, 0)), None);
        assert_eq!(grid.given_count(), 32);
    }

    #[test]
    fn test_parse_block_form() {
        let grid: DigitGrid = "
            53_ _7_ ___
            6__ 195 ___
            _98 ___ _6_
            8__ _6_ __3
            4__ 8_3 __1
            7__ _2_ __6
            _6_ ___ 28_
            ___ 419 __5
            ___ _8_ _79
        "
        .parse()
        .unwrap();
        assert_eq!(grid.get(Position::new(0, 0)), Some(Digit::D5));
        assert_eq!(grid.get(Position::new(4, 1)), Some(Digit::D9));
        assert_eq!(grid.given_count(), 30);
    }

    #[test]
    fn test_parse_accepts_dots_and_zeros() {
        let dotted: DigitGrid = ".".repeat(81).parse().unwrap();
        let zeroed: DigitGrid = "0".repeat(81).parse().unwrap();
        assert_eq!(dotted, zeroed);
        assert_eq!(dotted.given_count(), 0);
    }

    #[test]
    fn test_parse_rejects_wrong_length() {
        assert_eq!(
            "123".parse::<DigitGrid>(),
            Err(GridParseError::WrongCellCount { count: 3 })
        );
        assert_eq!(
            ".".repeat(82).parse::<DigitGrid>(),
            Err(GridParseError::WrongCellCount { count: 82 })
        );
    }

    #[test]
    fn test_display_round_trip() {
        let grid: DigitGrid = LINE.parse().unwrap();
        let rendered = grid.to_string();
        assert_eq!(rendered.parse::<DigitGrid>().unwrap(), grid);
        assert_eq!(rendered.len(), 81);
    }

    #[test]
    fn test_block_string_parses_back() {
        let grid: DigitGrid = LINE.parse().unwrap();
        let block = grid.to_block_string();
        assert_eq!(block.parse::<DigitGrid>().unwrap(), grid);
    }

    #[test]
    fn test_set_and_get() {
        let mut grid = DigitGrid::new();
        let pos = Position::new(4, 4);
        grid.set(pos, Some(Digit::D7));
        assert_eq!(grid.get(pos), Some(Digit::D7));
        grid.set(pos, None);
        assert_eq!(grid.get(pos), None);
    }
}
