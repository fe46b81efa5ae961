//! Grid geometry: validated coordinates on the fixed 10×10 board.
//!
//! External input names a cell by row letter (`A`..`J`) and 1-based column
//! (`1`..`10`). Internally every cell is a zero-based `(row, col)` pair that
//! is checked once at construction and never holds an out-of-range value.

use core::fmt;

use crate::common::BoardError;
use crate::config::BOARD_SIZE;
use crate::ship::Orientation;

const GRID_SIZE: usize = BOARD_SIZE as usize;

/// A cell on the board. Always in range once constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coordinate {
    row: u8,
    col: u8,
}

impl Coordinate {
    /// Build a coordinate from zero-based indices.
    pub fn new(row: usize, col: usize) -> Result<Self, BoardError> {
        if row >= GRID_SIZE || col >= GRID_SIZE {
            return Err(BoardError::OutOfBounds { row, col });
        }
        Ok(Coordinate {
            row: row as u8,
            col: col as u8,
        })
    }

    /// Indices must already be below `BOARD_SIZE`.
    pub(crate) fn new_unchecked(row: usize, col: usize) -> Self {
        debug_assert!(row < GRID_SIZE && col < GRID_SIZE);
        Coordinate {
            row: row as u8,
            col: col as u8,
        }
    }

    /// Map a row letter and a 1-based column onto the grid.
    pub fn from_label(row_letter: char, column: usize) -> Result<Self, BoardError> {
        let letter = row_letter.to_ascii_uppercase();
        if !letter.is_ascii_uppercase() {
            return Err(BoardError::OutOfBounds {
                row: usize::MAX,
                col: column.wrapping_sub(1),
            });
        }
        let row = (letter as u8 - b'A') as usize;
        if column == 0 {
            return Err(BoardError::OutOfBounds {
                row,
                col: usize::MAX,
            });
        }
        Coordinate::new(row, column - 1)
    }

    /// Parse a single token such as `B7` or `j10`.
    pub fn parse(input: &str) -> Option<Self> {
        let input = input.trim();
        let mut chars = input.chars();
        let letter = chars.next()?;
        let column: usize = chars.as_str().trim().parse().ok()?;
        Coordinate::from_label(letter, column).ok()
    }

    pub fn row(&self) -> usize {
        self.row as usize
    }

    pub fn col(&self) -> usize {
        self.col as usize
    }

    /// Row letter used on screen.
    pub fn row_letter(&self) -> char {
        (b'A' + self.row) as char
    }

    /// The cell `offset` steps from `self` along the extending axis of
    /// `orientation`, or `None` past the edge of the board.
    pub fn step(&self, orientation: Orientation, offset: usize) -> Option<Self> {
        let (row, col) = match orientation {
            Orientation::Horizontal => (self.row(), self.col().checked_add(offset)?),
            Orientation::Vertical => (self.row().checked_add(offset)?, self.col()),
        };
        Coordinate::new(row, col).ok()
    }

    /// Every cell of the board in row-major order.
    pub fn all() -> impl Iterator<Item = Coordinate> {
        (0..GRID_SIZE)
            .flat_map(|row| (0..GRID_SIZE).map(move |col| Coordinate::new_unchecked(row, col)))
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.row_letter(), self.col() + 1)
    }
}
