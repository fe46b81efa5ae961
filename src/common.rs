//! Common types: board errors and guess outcomes.

use crate::ship::ShipKind;

/// Outcome of applying a guess to the defender's fleet grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessOutcome {
    /// Guess missed all ships.
    Miss,
    /// Guess struck a segment of the given ship.
    Hit(ShipKind),
}

impl GuessOutcome {
    /// Ship struck by the guess, if any.
    pub fn struck(&self) -> Option<ShipKind> {
        match self {
            GuessOutcome::Hit(kind) => Some(*kind),
            GuessOutcome::Miss => None,
        }
    }

    pub fn is_hit(&self) -> bool {
        matches!(self, GuessOutcome::Hit(_))
    }
}

/// Errors returned by board, placement and turn operations.
///
/// Every variant is recoverable: the operation that produced it left all
/// state untouched and the caller is expected to ask again.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    /// Coordinate or ship segment lies outside the 10×10 grid.
    OutOfBounds { row: usize, col: usize },
    /// Ship placement collides with an already placed ship.
    Overlap,
    /// Guess was already made at this position.
    AlreadyGuessed,
    /// Attempted to place a ship that is already placed.
    ShipAlreadyPlaced,
    /// Guessing began before both fleets were placed.
    FleetNotPlaced,
    /// The match has already been decided.
    GameOver,
}

impl core::fmt::Display for BoardError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            BoardError::OutOfBounds { row, col } => {
                write!(f, "Position out of bounds: row={}, col={}", row, col)
            }
            BoardError::Overlap => write!(f, "Ship placement overlaps with another ship"),
            BoardError::AlreadyGuessed => write!(f, "Guess was already made at this position"),
            BoardError::ShipAlreadyPlaced => write!(f, "Ship is already placed on the board"),
            BoardError::FleetNotPlaced => write!(f, "Both fleets must be placed first"),
            BoardError::GameOver => write!(f, "The game is already over"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BoardError {}
