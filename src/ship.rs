//! Fleet model: ship kinds, orientation, and the cells a ship occupies.

use crate::board::FleetGrid;
use crate::coord::Coordinate;

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Orientation {
    #[default]
    Horizontal,
    Vertical,
}

/// The five kinds of ship in a fleet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShipKind {
    Carrier,
    Battleship,
    Cruiser,
    Destroyer,
    Submarine,
}

impl ShipKind {
    /// Number of cells the ship occupies.
    pub const fn length(&self) -> usize {
        match self {
            ShipKind::Carrier => 5,
            ShipKind::Battleship => 4,
            ShipKind::Cruiser => 3,
            ShipKind::Destroyer => 3,
            ShipKind::Submarine => 2,
        }
    }

    pub const fn name(&self) -> &'static str {
        match self {
            ShipKind::Carrier => "Aircraft Carrier",
            ShipKind::Battleship => "Battleship",
            ShipKind::Cruiser => "Cruiser",
            ShipKind::Destroyer => "Destroyer",
            ShipKind::Submarine => "Submarine",
        }
    }

    /// Letter drawn on the owner's fleet grid.
    pub const fn symbol(&self) -> char {
        match self {
            ShipKind::Carrier => 'A',
            ShipKind::Battleship => 'B',
            ShipKind::Cruiser => 'C',
            ShipKind::Destroyer => 'D',
            ShipKind::Submarine => 'S',
        }
    }

    /// Position of this kind in the fleet catalog.
    pub const fn index(&self) -> usize {
        match self {
            ShipKind::Carrier => 0,
            ShipKind::Battleship => 1,
            ShipKind::Cruiser => 2,
            ShipKind::Destroyer => 3,
            ShipKind::Submarine => 4,
        }
    }
}

/// Anchor cell and orientation of a placed ship.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub anchor: Coordinate,
    pub orientation: Orientation,
}

/// A ship of the fleet, placed at most once per match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ship {
    kind: ShipKind,
    placement: Option<Placement>,
}

impl Ship {
    /// An unplaced ship of the given kind.
    pub const fn new(kind: ShipKind) -> Self {
        Ship {
            kind,
            placement: None,
        }
    }

    pub fn kind(&self) -> ShipKind {
        self.kind
    }

    pub fn length(&self) -> usize {
        self.kind.length()
    }

    pub fn placement(&self) -> Option<Placement> {
        self.placement
    }

    pub fn is_placed(&self) -> bool {
        self.placement.is_some()
    }

    /// Record where the ship sits. Only the placer calls this, after the
    /// cells have been validated and written to the fleet grid.
    pub(crate) fn set_placement(&mut self, anchor: Coordinate, orientation: Orientation) {
        self.placement = Some(Placement {
            anchor,
            orientation,
        });
    }

    /// Return the ship to its unplaced state for a new match.
    pub fn reset(&mut self) {
        self.placement = None;
    }

    /// `true` once every occupied cell has been struck on the owner's fleet
    /// grid. An unplaced ship is never sunk.
    pub fn is_sunk(&self, fleet: &FleetGrid) -> bool {
        self.is_placed() && self.cells().all(|cell| fleet.is_struck(cell))
    }

    /// Cells occupied by the ship; empty while unplaced.
    pub fn cells(&self) -> impl Iterator<Item = Coordinate> {
        let placement = self.placement;
        let len = placement.map_or(0, |_| self.length());
        (0..len).filter_map(move |i| placement.and_then(|p| p.anchor.step(p.orientation, i)))
    }
}

/// Candidate cells for a ship of `length` at `anchor`, in order. Yields
/// `None` for the first segment that falls off the board.
pub fn segment_cells(
    length: usize,
    anchor: Coordinate,
    orientation: Orientation,
) -> impl Iterator<Item = Option<Coordinate>> {
    (0..length).map(move |i| anchor.step(orientation, i))
}
