#![cfg(feature = "std")]

//! Text rendering of a player's two grids, side by side.

use std::fmt;

use crate::{
    config::BOARD_SIZE,
    grid::{FleetCell, GuessCell},
    player::Player,
};

const GRID_SIZE: usize = BOARD_SIZE as usize;

/// Symbol for a cell of the owner's fleet grid: `*` once struck, the ship
/// letter while intact, blank for water.
pub fn fleet_symbol(cell: FleetCell) -> char {
    match cell.occupant {
        Some(_) if cell.struck => '*',
        Some(kind) => kind.symbol(),
        None => ' ',
    }
}

/// Symbol for a cell of the guess grid: `*` hit, `-` miss, blank unknown.
pub fn guess_symbol(cell: GuessCell) -> char {
    match cell {
        GuessCell::Hit => '*',
        GuessCell::Miss => '-',
        GuessCell::Unknown => ' ',
    }
}

/// Fleet grid on the left, guess grid on the right.
pub struct BoardsView<'a>(pub &'a Player);

impl fmt::Display for BoardsView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let player = self.0;
        columns_row(f)?;
        columns_row(f)?;
        writeln!(f)?;
        for r in 0..GRID_SIZE {
            separator(f)?;
            write!(f, " ")?;
            separator(f)?;
            writeln!(f)?;

            let letter = (b'A' + r as u8) as char;
            write!(f, "{}|", letter)?;
            for cell in player.fleet().grid().row(r) {
                write!(f, " {} |", fleet_symbol(*cell))?;
            }
            write!(f, " {}|", letter)?;
            for cell in player.guesses().grid().row(r) {
                write!(f, " {} |", guess_symbol(*cell))?;
            }
            writeln!(f)?;
        }
        separator(f)?;
        write!(f, " ")?;
        separator(f)?;
        writeln!(f)
    }
}

fn columns_row(f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "  ")?;
    for c in 1..=GRID_SIZE {
        write!(f, " {:<3}", c)?;
    }
    Ok(())
}

fn separator(f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, " ")?;
    for _ in 0..GRID_SIZE {
        write!(f, "+---")?;
    }
    write!(f, "+")
}

/// Render both of `player`'s grids to a string.
pub fn render_boards(player: &Player) -> String {
    BoardsView(player).to_string()
}
