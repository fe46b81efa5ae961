#[cfg(not(feature = "std"))]
use alloc::string::{String, ToString};

use crate::board::{FleetGrid, GuessGrid};
use crate::common::BoardError;
use crate::config::{FLEET, NUM_SHIPS};
use crate::coord::Coordinate;
use crate::placement;
use crate::ship::{Orientation, Ship, ShipKind};

/// Who supplies a player's placements and guesses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum PlayerKind {
    Human,
    Random,
}

/// One side of a match: its fleet, its fleet grid and its guess grid.
#[derive(Debug, Clone)]
pub struct Player {
    kind: PlayerKind,
    name: String,
    ships: [Ship; NUM_SHIPS],
    fleet: FleetGrid,
    guesses: GuessGrid,
}

impl Player {
    /// A player with an empty board and an unplaced fleet.
    pub fn new(kind: PlayerKind, name: &str) -> Self {
        Player {
            kind,
            name: name.to_string(),
            ships: FLEET.map(Ship::new),
            fleet: FleetGrid::new(),
            guesses: GuessGrid::new(),
        }
    }

    pub fn kind(&self) -> PlayerKind {
        self.kind
    }

    pub fn set_kind(&mut self, kind: PlayerKind) {
        self.kind = kind;
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn ships(&self) -> &[Ship; NUM_SHIPS] {
        &self.ships
    }

    pub fn ship(&self, kind: ShipKind) -> &Ship {
        &self.ships[kind.index()]
    }

    pub fn fleet(&self) -> &FleetGrid {
        &self.fleet
    }

    pub fn guesses(&self) -> &GuessGrid {
        &self.guesses
    }

    pub(crate) fn guesses_mut(&mut self) -> &mut GuessGrid {
        &mut self.guesses
    }

    pub(crate) fn fleet_mut(&mut self) -> &mut FleetGrid {
        &mut self.fleet
    }

    /// Wipe both grids and return every ship to the unplaced state.
    pub fn reset(&mut self) {
        self.fleet.clear();
        self.guesses.clear();
        for ship in self.ships.iter_mut() {
            ship.reset();
        }
    }

    /// Validate and place the ship of `kind`.
    pub fn place(
        &mut self,
        kind: ShipKind,
        anchor: Coordinate,
        orientation: Orientation,
    ) -> Result<(), BoardError> {
        placement::commit_placement(
            &mut self.fleet,
            &mut self.ships[kind.index()],
            anchor,
            orientation,
        )
    }

    /// First ship in catalog order that has not been placed yet.
    pub fn next_unplaced(&self) -> Option<ShipKind> {
        self.ships.iter().find(|s| !s.is_placed()).map(|s| s.kind())
    }

    pub fn fleet_placed(&self) -> bool {
        self.ships.iter().all(|s| s.is_placed())
    }

    pub fn ship_sunk(&self, kind: ShipKind) -> bool {
        self.ship(kind).is_sunk(&self.fleet)
    }

    /// `true` when all five ships are sunk.
    pub fn fleet_sunk(&self) -> bool {
        self.ships.iter().all(|s| s.is_sunk(&self.fleet))
    }

    /// Number of ships still afloat.
    pub fn remaining_ships(&self) -> usize {
        self.ships.iter().filter(|s| !s.is_sunk(&self.fleet)).count()
    }
}
