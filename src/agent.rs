// Uniform-random placement and targeting for computer-controlled players.
// Holds no memory of earlier guesses; the turn engine rejects repeats and
// asks again.

use crate::{
    config::{BOARD_SIZE, FLEET},
    coord::Coordinate,
    placement,
    player::Player,
    ship::Orientation,
    BoardError,
};
use rand::Rng;

const GRID_SIZE: usize = BOARD_SIZE as usize;

/// Draw a cell uniformly from the whole board.
pub fn random_coordinate<R: Rng + ?Sized>(rng: &mut R) -> Coordinate {
    let row = rng.random_range(0..GRID_SIZE);
    let col = rng.random_range(0..GRID_SIZE);
    Coordinate::new_unchecked(row, col)
}

pub fn random_orientation<R: Rng + ?Sized>(rng: &mut R) -> Orientation {
    if rng.random() {
        Orientation::Horizontal
    } else {
        Orientation::Vertical
    }
}

/// Uniform-random player: rejection-sampled placement and blind guessing.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomAgent;

impl RandomAgent {
    pub fn new() -> Self {
        Self
    }

    /// Draw anchors and orientations until one is valid for a ship of
    /// `length` on the player's fleet grid.
    pub fn choose_placement<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        player: &Player,
        length: usize,
    ) -> (Coordinate, Orientation) {
        let mut attempts = 0u32;
        loop {
            attempts += 1;
            let anchor = random_coordinate(rng);
            let orientation = random_orientation(rng);
            if placement::is_valid_placement(player.fleet(), length, anchor, orientation) {
                log::trace!("placement found after {} draws", attempts);
                return (anchor, orientation);
            }
        }
    }

    /// Place every unplaced ship of the fleet in catalog order.
    pub fn place_fleet<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        player: &mut Player,
    ) -> Result<(), BoardError> {
        for kind in FLEET {
            if player.ship(kind).is_placed() {
                continue;
            }
            let (anchor, orientation) = self.choose_placement(rng, player, kind.length());
            player.place(kind, anchor, orientation)?;
        }
        Ok(())
    }

    /// Pick the next target. May repeat an earlier guess.
    pub fn choose_target<R: Rng + ?Sized>(&self, rng: &mut R) -> Coordinate {
        random_coordinate(rng)
    }
}
