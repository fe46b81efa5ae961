//! Fixed-size board storage indexed by validated coordinates.

use core::ops::{Index, IndexMut};

use crate::config::BOARD_SIZE;
use crate::coord::Coordinate;
use crate::ship::ShipKind;

const GRID_SIZE: usize = BOARD_SIZE as usize;

/// An owned `BOARD_SIZE × BOARD_SIZE` grid of cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Grid<T> {
    cells: [[T; GRID_SIZE]; GRID_SIZE],
}

impl<T: Copy + Default> Grid<T> {
    /// A grid with every cell at its default value.
    pub fn new() -> Self {
        Grid {
            cells: [[T::default(); GRID_SIZE]; GRID_SIZE],
        }
    }

    /// Reset every cell to its default value.
    pub fn clear(&mut self) {
        self.cells = [[T::default(); GRID_SIZE]; GRID_SIZE];
    }
}

impl<T: Copy + Default> Default for Grid<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Grid<T> {
    /// Iterate `(coordinate, cell)` pairs in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Coordinate, &T)> {
        Coordinate::all().map(move |c| (c, &self.cells[c.row()][c.col()]))
    }

    /// Cells of a single row, left to right.
    pub fn row(&self, row: usize) -> &[T] {
        &self.cells[row]
    }
}

impl<T> Index<Coordinate> for Grid<T> {
    type Output = T;

    fn index(&self, c: Coordinate) -> &T {
        &self.cells[c.row()][c.col()]
    }
}

impl<T> IndexMut<Coordinate> for Grid<T> {
    fn index_mut(&mut self, c: Coordinate) -> &mut T {
        &mut self.cells[c.row()][c.col()]
    }
}

/// One cell of a player's own fleet grid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FleetCell {
    /// Ship occupying the cell, `None` for open water.
    pub occupant: Option<ShipKind>,
    /// Set once, when the opponent guesses this cell.
    pub struck: bool,
}

/// One cell of a player's record of guesses against the opponent.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GuessCell {
    #[default]
    Unknown,
    Miss,
    Hit,
}
