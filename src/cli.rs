#![cfg(feature = "std")]

//! Terminal implementation of [`Console`]: prompts on a `BufRead`, draws on
//! a `Write`.

use std::io::{self, BufRead, Write};

use crate::{
    coord::Coordinate,
    game::{Console, GameEvent},
    player::{Player, PlayerKind},
    ship::Orientation,
    ui::BoardsView,
    GuessOutcome,
};

const INPUT_ERROR: &str = "Invalid Input! Try Again!";
const CLEAR_SCREEN: &str = "\x1B[2J\x1B[1;1H";

/// Console reading answers line by line from `input` and writing prompts,
/// boards and announcements to `output`.
pub struct TerminalConsole<R, W> {
    input: R,
    output: W,
    buf: String,
    clear_screen: bool,
    player2: Option<PlayerKind>,
}

impl TerminalConsole<io::StdinLock<'static>, io::Stdout> {
    /// Console bound to the process's stdin and stdout.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> TerminalConsole<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            buf: String::new(),
            clear_screen: true,
            player2: None,
        }
    }

    /// Answer the per-match "how many human players" question up front.
    pub fn with_player2(mut self, kind: PlayerKind) -> Self {
        self.player2 = Some(kind);
        self
    }

    /// Keep earlier output on screen instead of clearing before each board.
    pub fn without_clear(mut self) -> Self {
        self.clear_screen = false;
        self
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Repeatedly prompt until `checker` accepts the trimmed line.
    fn read_input<F, T>(&mut self, prompt: &str, mut checker: F) -> anyhow::Result<T>
    where
        F: FnMut(&str) -> Option<T>,
    {
        loop {
            self.read_line(prompt)?;
            if let Some(val) = checker(self.buf.trim()) {
                return Ok(val);
            }
            writeln!(self.output, "{}", INPUT_ERROR)?;
        }
    }

    /// Print the prompt, clear the buffer and read one line.
    fn read_line(&mut self, prompt: &str) -> anyhow::Result<()> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;
        self.buf.clear();
        if self.input.read_line(&mut self.buf)? == 0 {
            writeln!(self.output)?;
            anyhow::bail!("input closed");
        }
        Ok(())
    }
}

fn single_char(line: &str) -> Option<char> {
    let mut chars = line.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c.to_ascii_uppercase()),
        _ => None,
    }
}

impl<R: BufRead, W: Write> Console for TerminalConsole<R, W> {
    fn request_player2_kind(&mut self) -> anyhow::Result<PlayerKind> {
        if let Some(kind) = self.player2 {
            return Ok(kind);
        }
        self.read_input("How many human players? (1/2): ", |line| match line {
            "1" => Some(PlayerKind::Random),
            "2" => Some(PlayerKind::Human),
            _ => None,
        })
    }

    fn request_coordinate(&mut self, _player: &Player) -> anyhow::Result<Coordinate> {
        let row: Result<Coordinate, char> = self.read_input("Please input a row (A-J): ", |line| {
            if let Some(coord) = Coordinate::parse(line) {
                return Some(Ok(coord));
            }
            single_char(line)
                .filter(|c| Coordinate::from_label(*c, 1).is_ok())
                .map(Err)
        })?;
        let letter = match row {
            Ok(coord) => return Ok(coord),
            Err(letter) => letter,
        };
        self.read_input("Please input a column (1-10): ", |line| {
            let column: usize = line.parse().ok()?;
            Coordinate::from_label(letter, column).ok()
        })
    }

    fn request_orientation(&mut self, _player: &Player) -> anyhow::Result<Orientation> {
        self.read_input(
            "Please choose an orientation, (H) = Horizontal, (V) = Vertical: ",
            |line| match single_char(line)? {
                'H' => Some(Orientation::Horizontal),
                'V' => Some(Orientation::Vertical),
                _ => None,
            },
        )
    }

    fn render_boards(&mut self, player: &Player) -> anyhow::Result<()> {
        if self.clear_screen {
            write!(self.output, "{}", CLEAR_SCREEN)?;
        }
        write!(self.output, "{}", BoardsView(player))?;
        Ok(())
    }

    fn pause(&mut self) -> anyhow::Result<()> {
        self.read_line("Press Enter to continue...")
    }

    fn announce(&mut self, event: GameEvent<'_>) -> anyhow::Result<()> {
        let out = &mut self.output;
        match event {
            GameEvent::PlacementPrompt { player, ship } => writeln!(
                out,
                "{}, please set the position and orientation for your {}",
                player.name(),
                ship.name()
            )?,
            GameEvent::PlacementRejected { .. } => {
                writeln!(out, "Not a valid placement. Try again.")?
            }
            GameEvent::GuessPrompt { player } => {
                writeln!(out, "{}, what is your guess?", player.name())?
            }
            GameEvent::GuessRejected { .. } => writeln!(out, "Not a valid guess. Try again.")?,
            GameEvent::Shot {
                attacker,
                target,
                outcome,
                ..
            } => match (attacker.kind(), outcome) {
                (PlayerKind::Random, _) => writeln!(out, "{} chose {}", attacker.name(), target)?,
                (PlayerKind::Human, GuessOutcome::Hit(_)) => writeln!(out, "{} is a hit!", target)?,
                (PlayerKind::Human, GuessOutcome::Miss) => writeln!(out, "{} is a miss.", target)?,
            },
            GameEvent::Sunk {
                attacker,
                defender,
                ship,
            } => match attacker.kind() {
                PlayerKind::Random => {
                    writeln!(out, "{} sunk your {}!", attacker.name(), ship.name())?
                }
                PlayerKind::Human => {
                    writeln!(out, "You sunk {}'s {}!", defender.name(), ship.name())?
                }
            },
            GameEvent::GameOver { winner, .. } => {
                if winner.kind() == PlayerKind::Random {
                    writeln!(out, "You Lost!")?;
                }
                writeln!(out, "Congratulations {}, you won!", winner.name())?
            }
        }
        Ok(())
    }

    fn play_again(&mut self) -> anyhow::Result<bool> {
        self.read_input("Play Again? (y/n): ", |line| {
            match single_char(line)?.to_ascii_lowercase() {
                'y' => Some(true),
                'n' => Some(false),
                _ => None,
            }
        })
    }
}
