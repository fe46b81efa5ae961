//! Placement validation and commit.
//!
//! The only ways onto a fleet grid run through [`check_placement`]:
//! [`commit_placement`] checks before writing, and so does
//! [`FleetGrid::place_ship`].

use crate::board::FleetGrid;
use crate::common::BoardError;
use crate::coord::Coordinate;
use crate::ship::{segment_cells, Orientation, Placement, Ship};

/// Check that a ship of `length` at `anchor` stays on the board and only
/// covers open water.
pub fn check_placement(
    fleet: &FleetGrid,
    length: usize,
    anchor: Coordinate,
    orientation: Orientation,
) -> Result<(), BoardError> {
    for (i, cell) in segment_cells(length, anchor, orientation).enumerate() {
        let cell = cell.ok_or_else(|| {
            let (row, col) = match orientation {
                Orientation::Horizontal => (anchor.row(), anchor.col() + i),
                Orientation::Vertical => (anchor.row() + i, anchor.col()),
            };
            BoardError::OutOfBounds { row, col }
        })?;
        if !fleet.is_cell_empty(cell) {
            return Err(BoardError::Overlap);
        }
    }
    Ok(())
}

/// Boolean form of [`check_placement`].
pub fn is_valid_placement(
    fleet: &FleetGrid,
    length: usize,
    anchor: Coordinate,
    orientation: Orientation,
) -> bool {
    check_placement(fleet, length, anchor, orientation).is_ok()
}

/// Validate and then place `ship` at `anchor`.
///
/// On success the ship's cells are written to `fleet` and the ship records
/// its placement. On failure nothing changes.
pub fn commit_placement(
    fleet: &mut FleetGrid,
    ship: &mut Ship,
    anchor: Coordinate,
    orientation: Orientation,
) -> Result<(), BoardError> {
    if ship.is_placed() {
        return Err(BoardError::ShipAlreadyPlaced);
    }
    fleet.place_ship(
        ship.kind(),
        Placement {
            anchor,
            orientation,
        },
    )?;
    ship.set_placement(anchor, orientation);
    log::debug!(
        "placed {} at {} ({:?})",
        ship.kind().name(),
        anchor,
        orientation
    );
    Ok(())
}
