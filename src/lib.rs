#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;
#[cfg(feature = "std")]
extern crate std;
mod agent;
mod board;
#[cfg(feature = "std")]
mod cli;
mod common;
mod config;
mod coord;
mod game;
mod grid;
#[cfg(feature = "std")]
mod logging;
mod placement;
mod player;
pub mod prelude;
mod ship;
#[cfg(feature = "std")]
mod ui;

pub use agent::*;
pub use board::*;
#[cfg(feature = "std")]
pub use cli::*;
pub use common::*;
pub use config::*;
pub use coord::*;
pub use game::*;
pub use grid::*;
#[cfg(feature = "std")]
pub use logging::{init_logging, init_with_default};
pub use placement::*;
pub use player::*;
pub use ship::*;
#[cfg(feature = "std")]
pub use ui::*;
