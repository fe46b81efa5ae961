//! Commonly used types and utilities for ease of import.

pub use crate::{
    BoardError, Console, Coordinate, GameEngine, GameEvent, GuessOutcome, Orientation, Player,
    PlayerKind, RandomAgent, ShipKind, FLEET,
};

#[cfg(feature = "std")]
pub use crate::{init_logging, TerminalConsole};
