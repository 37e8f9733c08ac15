//! Houses (rows, columns, boxes) and the peer topology derived from them.

use crate::{Position, PositionSet};

/// A Sudoku house: a row, column, or 3×3 box.
///
/// Each of the 27 houses is a set of 9 cells that must contain every digit
/// exactly once in a solved board.
///
/// # Examples
///
/// ```
/// use gridloom_core::{House, Position};
///
/// let row = House::Row { y: 4 };
/// assert!(row.positions().contains(Position::new(0, 4)));
/// assert_eq!(House::ALL.len(), 27);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum House {
    /// A row identified by its y coordinate (0-8).
    Row {
        /// Row index (0-8).
        y: u8,
    },
    /// A column identified by its x coordinate (0-8).
    Column {
        /// Column index (0-8).
        x: u8,
    },
    /// A 3×3 box identified by its index (0-8, left to right, top to bottom).
    Box {
        /// Box index (0-8).
        index: u8,
    },
}

impl House {
    /// Array containing all 27 houses: rows, then columns, then boxes.
    pub const ALL: [Self; 27] = {
        let mut all = [Self::Row { y: 0 }; 27];
        let mut i = 0;
        #[expect(clippy::cast_possible_truncation)]
        while i < 9 {
            all[i] = Self::Row { y: i as u8 };
            all[i + 9] = Self::Column { x: i as u8 };
            all[i + 18] = Self::Box { index: i as u8 };
            i += 1;
        }
        all
    };

    /// Returns all positions contained in this house.
    #[must_use]
    pub const fn positions(self) -> PositionSet {
        match self {
            House::Row { y } => PositionSet::ROW_POSITIONS[y as usize],
            House::Column { x } => PositionSet::COLUMN_POSITIONS[x as usize],
            House::Box { index } => PositionSet::BOX_POSITIONS[index as usize],
        }
    }

    /// Converts a cell index within the house (0-8) into an absolute
    /// [`Position`].
    ///
    /// # Panics
    ///
    /// Panics if `i` is not in the range 0-8.
    #[must_use]
    pub const fn position_from_cell_index(self, i: u8) -> Position {
        assert!(i < 9);
        match self {
            House::Row { y } => Position::new(i, y),
            House::Column { x } => Position::new(x, i),
            House::Box { index } => Position::from_box(index, i),
        }
    }
}

/// Per-cell peer sets: the union of a cell's three houses, minus the cell.
const PEERS: [PositionSet; 81] = {
    let mut table = [PositionSet::EMPTY; 81];
    let mut i = 0;
    while i < 81 {
        let y = i / 9;
        let x = i % 9;
        let b = y / 3 * 3 + x / 3;
        let bits = PositionSet::ROW_POSITIONS[y].0
            | PositionSet::COLUMN_POSITIONS[x].0
            | PositionSet::BOX_POSITIONS[b].0;
        table[i] = PositionSet(bits & !(1 << i));
        i += 1;
    }
    table
};

impl Position {
    /// Returns the three houses containing this position: its row, its
    /// column, and its box.
    #[must_use]
    pub const fn houses(self) -> [House; 3] {
        [
            House::Row { y: self.y() },
            House::Column { x: self.x() },
            House::Box {
                index: self.box_index(),
            },
        ]
    }

    /// Returns the 20 peers of this position: every other cell sharing at
    /// least one house with it.
    #[must_use]
    pub const fn peers(self) -> PositionSet {
        PEERS[self.index()]
    }
}
