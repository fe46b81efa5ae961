//! Board state: a player's fleet grid and guess grid.

use crate::common::{BoardError, GuessOutcome};
use crate::coord::Coordinate;
use crate::grid::{FleetCell, Grid, GuessCell};
use crate::placement;
use crate::ship::{segment_cells, Placement, ShipKind};
use core::fmt;

/// Which ship, if any, sits on each cell, and whether the cell was struck.
#[derive(Clone, Copy, Default, PartialEq, Eq)]
pub struct FleetGrid {
    grid: Grid<FleetCell>,
}

impl FleetGrid {
    /// An empty fleet grid: open water, nothing struck.
    pub fn new() -> Self {
        FleetGrid { grid: Grid::new() }
    }

    /// `true` iff no ship occupies the cell. Struck status is ignored.
    pub fn is_cell_empty(&self, coord: Coordinate) -> bool {
        self.grid[coord].occupant.is_none()
    }

    pub fn occupant(&self, coord: Coordinate) -> Option<ShipKind> {
        self.grid[coord].occupant
    }

    pub fn is_struck(&self, coord: Coordinate) -> bool {
        self.grid[coord].struck
    }

    pub fn cell(&self, coord: Coordinate) -> FleetCell {
        self.grid[coord]
    }

    /// Number of occupied cells.
    pub fn occupied_count(&self) -> usize {
        self.grid.iter().filter(|(_, c)| c.occupant.is_some()).count()
    }

    /// Write `kind` onto every cell of `at`.
    ///
    /// The placement is validated against this grid first, so a ship that
    /// would overlap or leave the board writes nothing.
    pub fn place_ship(&mut self, kind: ShipKind, at: Placement) -> Result<(), BoardError> {
        placement::check_placement(self, kind.length(), at.anchor, at.orientation)?;
        for cell in segment_cells(kind.length(), at.anchor, at.orientation).flatten() {
            self.grid[cell] = FleetCell {
                occupant: Some(kind),
                struck: false,
            };
        }
        Ok(())
    }

    /// Mark the cell as struck and report what was there.
    fn strike(&mut self, coord: Coordinate) -> Option<ShipKind> {
        let cell = &mut self.grid[coord];
        if cell.occupant.is_some() {
            cell.struck = true;
        }
        cell.occupant
    }

    pub fn clear(&mut self) {
        self.grid.clear();
    }

    pub fn grid(&self) -> &Grid<FleetCell> {
        &self.grid
    }
}

impl fmt::Debug for FleetGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (coord, cell) in self.grid.iter() {
            let ch = match (cell.occupant, cell.struck) {
                (Some(_), true) => '*',
                (Some(kind), false) => kind.symbol(),
                (None, _) => '.',
            };
            write!(f, "{}", ch)?;
            if coord.col() + 1 == crate::config::BOARD_SIZE as usize {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

/// Outcome of each of a player's own guesses against the opponent.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GuessGrid {
    grid: Grid<GuessCell>,
}

impl GuessGrid {
    pub fn new() -> Self {
        GuessGrid { grid: Grid::new() }
    }

    pub fn get(&self, coord: Coordinate) -> GuessCell {
        self.grid[coord]
    }

    /// `true` while the cell has not been guessed.
    pub fn is_unknown(&self, coord: Coordinate) -> bool {
        self.grid[coord] == GuessCell::Unknown
    }

    /// Number of cells holding `state`.
    pub fn count(&self, state: GuessCell) -> usize {
        self.grid.iter().filter(|(_, c)| **c == state).count()
    }

    pub fn clear(&mut self) {
        self.grid.clear();
    }

    pub fn grid(&self) -> &Grid<GuessCell> {
        &self.grid
    }
}

/// Apply the attacker's guess at `coord` to the defender's fleet.
///
/// Strikes the defender's cell if a ship is there and marks the attacker's
/// guess cell `Hit` or `Miss`. A cell already guessed is rejected with
/// `AlreadyGuessed` and neither grid changes.
pub fn record_guess(
    attacker: &mut GuessGrid,
    defender: &mut FleetGrid,
    coord: Coordinate,
) -> Result<GuessOutcome, BoardError> {
    if !attacker.is_unknown(coord) {
        return Err(BoardError::AlreadyGuessed);
    }
    let outcome = match defender.strike(coord) {
        Some(kind) => {
            attacker.grid[coord] = GuessCell::Hit;
            GuessOutcome::Hit(kind)
        }
        None => {
            attacker.grid[coord] = GuessCell::Miss;
            GuessOutcome::Miss
        }
    };
    Ok(outcome)
}
