//! Turn engine: fleet setup, the guess/reveal cycle, and game-over detection.
//!
//! A match moves through [`Phase::SettingUp`] while fleets are placed, then
//! alternates [`Phase::AwaitingGuess`] between the two players until one
//! fleet is fully sunk and the match settles in [`Phase::GameOver`].
//! Applying a guess, the sunk check, the game-over check and the turn switch
//! all happen inside a single [`GameEngine::guess`] call.

use crate::{
    agent::RandomAgent,
    board,
    common::{BoardError, GuessOutcome},
    config::{PLAYER1_NAME, PLAYER2_NAME},
    coord::Coordinate,
    player::{Player, PlayerKind},
    ship::{Orientation, ShipKind},
};
use rand::Rng;

/// Where the match currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Fleets are being placed, one player after the other.
    SettingUp,
    /// Waiting for the player at index `active` to guess.
    AwaitingGuess { active: usize },
    /// The player at index `winner` still has ships afloat.
    GameOver { winner: usize },
}

/// Everything that happened while applying one guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnReport {
    pub attacker: usize,
    pub target: Coordinate,
    pub outcome: GuessOutcome,
    /// Ship that this guess finished off.
    pub sunk: Option<ShipKind>,
    /// Set when this guess ended the match.
    pub winner: Option<usize>,
}

/// Notable moments reported to the presentation layer.
#[derive(Debug, Clone, Copy)]
pub enum GameEvent<'a> {
    /// A human is about to place `ship`.
    PlacementPrompt { player: &'a Player, ship: ShipKind },
    PlacementRejected { player: &'a Player, error: BoardError },
    /// A human is about to guess.
    GuessPrompt { player: &'a Player },
    GuessRejected { player: &'a Player, target: Coordinate },
    /// A guess was applied.
    Shot {
        attacker: &'a Player,
        defender: &'a Player,
        target: Coordinate,
        outcome: GuessOutcome,
    },
    Sunk {
        attacker: &'a Player,
        defender: &'a Player,
        ship: ShipKind,
    },
    GameOver { winner: &'a Player, loser: &'a Player },
}

/// Input and presentation collaborator used by the engine.
///
/// Human placements and guesses are read through it, and every notable
/// event is passed to [`Console::announce`]. Implementations re-prompt on
/// malformed input themselves; an `Err` ends the session.
pub trait Console {
    /// Ask how player 2 is controlled for the coming match.
    fn request_player2_kind(&mut self) -> anyhow::Result<PlayerKind>;

    fn request_coordinate(&mut self, player: &Player) -> anyhow::Result<Coordinate>;

    fn request_orientation(&mut self, player: &Player) -> anyhow::Result<Orientation>;

    /// Paint `player`'s fleet grid next to their guess grid.
    fn render_boards(&mut self, player: &Player) -> anyhow::Result<()>;

    /// Block until the reader acknowledges the screen.
    fn pause(&mut self) -> anyhow::Result<()>;

    fn announce(&mut self, event: GameEvent<'_>) -> anyhow::Result<()>;

    fn play_again(&mut self) -> anyhow::Result<bool>;
}

/// Two players, whose turn it is, and how far the match has come.
#[derive(Debug, Clone)]
pub struct GameEngine {
    players: [Player; 2],
    phase: Phase,
    turns: usize,
    agent: RandomAgent,
}

impl GameEngine {
    pub fn new(player1: Player, player2: Player) -> Self {
        Self {
            players: [player1, player2],
            phase: Phase::SettingUp,
            turns: 0,
            agent: RandomAgent::new(),
        }
    }

    /// Engine with the default player names.
    pub fn with_kinds(player1: PlayerKind, player2: PlayerKind) -> Self {
        Self::new(
            Player::new(player1, PLAYER1_NAME),
            Player::new(player2, PLAYER2_NAME),
        )
    }

    pub fn player(&self, index: usize) -> &Player {
        &self.players[index]
    }

    pub fn players(&self) -> &[Player; 2] {
        &self.players
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Index of the player whose turn it is, while guessing is open.
    pub fn active(&self) -> Option<usize> {
        match self.phase {
            Phase::AwaitingGuess { active } => Some(active),
            _ => None,
        }
    }

    pub fn winner(&self) -> Option<usize> {
        match self.phase {
            Phase::GameOver { winner } => Some(winner),
            _ => None,
        }
    }

    /// Guesses applied so far this match.
    pub fn turns(&self) -> usize {
        self.turns
    }

    /// Clear both players for a fresh match and set player 2's controller.
    pub fn setup_match(&mut self, player2: PlayerKind) {
        for player in self.players.iter_mut() {
            player.reset();
        }
        self.players[1].set_kind(player2);
        self.phase = Phase::SettingUp;
        self.turns = 0;
        log::debug!(
            "new match: {} ({:?}) vs {} ({:?})",
            self.players[0].name(),
            self.players[0].kind(),
            self.players[1].name(),
            self.players[1].kind()
        );
    }

    /// Place one ship for the player at `index` during setup.
    ///
    /// Once play has begun every ship is placed, so this only ever fails
    /// with `ShipAlreadyPlaced` afterwards.
    pub fn place(
        &mut self,
        index: usize,
        kind: ShipKind,
        anchor: Coordinate,
        orientation: Orientation,
    ) -> Result<(), BoardError> {
        self.players[index].place(kind, anchor, orientation)
    }

    /// Let the random agent place whatever remains of the player's fleet.
    pub fn auto_place<R: Rng + ?Sized>(
        &mut self,
        index: usize,
        rng: &mut R,
    ) -> Result<(), BoardError> {
        self.agent.place_fleet(rng, &mut self.players[index])
    }

    /// Open guessing with player 1 to move.
    pub fn start(&mut self) -> Result<(), BoardError> {
        if self.phase != Phase::SettingUp {
            return Ok(());
        }
        if !self.players.iter().all(|p| p.fleet_placed()) {
            return Err(BoardError::FleetNotPlaced);
        }
        self.phase = Phase::AwaitingGuess { active: 0 };
        Ok(())
    }

    /// Apply the active player's guess at `target`.
    ///
    /// A cell the active player already guessed is rejected with
    /// `AlreadyGuessed` and nothing changes. Otherwise the guess is recorded
    /// on both boards, a finished ship is reported as sunk, both fleets are
    /// checked for game over, and the turn passes to the other player.
    pub fn guess(&mut self, target: Coordinate) -> Result<TurnReport, BoardError> {
        let attacker = match self.phase {
            Phase::SettingUp => return Err(BoardError::FleetNotPlaced),
            Phase::GameOver { .. } => return Err(BoardError::GameOver),
            Phase::AwaitingGuess { active } => active,
        };
        let defender = 1 - attacker;

        let outcome = {
            let (att, def) = self.pair_mut(attacker);
            board::record_guess(att.guesses_mut(), def.fleet_mut(), target)?
        };
        self.turns += 1;
        log::debug!(
            "{} guessed {}: {:?}",
            self.players[attacker].name(),
            target,
            outcome
        );

        let sunk = outcome
            .struck()
            .filter(|&kind| self.players[defender].ship_sunk(kind));
        if let Some(kind) = sunk {
            log::info!(
                "{} sank {}'s {}",
                self.players[attacker].name(),
                self.players[defender].name(),
                kind.name()
            );
        }

        let winner = self.check_game_over();
        self.phase = match winner {
            Some(winner) => {
                log::info!(
                    "game over after {} guesses, {} wins",
                    self.turns,
                    self.players[winner].name()
                );
                Phase::GameOver { winner }
            }
            None => Phase::AwaitingGuess { active: defender },
        };

        Ok(TurnReport {
            attacker,
            target,
            outcome,
            sunk,
            winner,
        })
    }

    /// Either fleet sunk ends the match; the other player wins.
    fn check_game_over(&self) -> Option<usize> {
        if self.players[0].fleet_sunk() {
            Some(1)
        } else if self.players[1].fleet_sunk() {
            Some(0)
        } else {
            None
        }
    }

    fn pair_mut(&mut self, attacker: usize) -> (&mut Player, &mut Player) {
        let (first, second) = self.players.split_at_mut(1);
        if attacker == 0 {
            (&mut first[0], &mut second[0])
        } else {
            (&mut second[0], &mut first[0])
        }
    }

    /// Place both fleets, then alternate guesses until one fleet is sunk.
    /// Returns the index of the winner.
    pub fn play_one_match<C, R>(&mut self, console: &mut C, rng: &mut R) -> anyhow::Result<usize>
    where
        C: Console + ?Sized,
        R: Rng + ?Sized,
    {
        for index in 0..self.players.len() {
            self.setup_player(index, console, rng)?;
        }
        self.start().map_err(|e| anyhow::anyhow!(e))?;

        loop {
            let attacker = match self.phase {
                Phase::AwaitingGuess { active } => active,
                Phase::GameOver { winner } => return Ok(winner),
                Phase::SettingUp => return Err(anyhow::anyhow!(BoardError::FleetNotPlaced)),
            };
            let defender = 1 - attacker;
            let human = self.players[attacker].kind() == PlayerKind::Human;

            if human {
                console.render_boards(&self.players[attacker])?;
            }
            let target = self.acquire_guess(attacker, console, rng)?;
            let report = self.guess(target).map_err(|e| anyhow::anyhow!(e))?;

            let (att, def) = (&self.players[attacker], &self.players[defender]);
            if human {
                console.render_boards(att)?;
            } else {
                console.render_boards(def)?;
            }
            console.announce(GameEvent::Shot {
                attacker: att,
                defender: def,
                target,
                outcome: report.outcome,
            })?;
            if let Some(ship) = report.sunk {
                console.announce(GameEvent::Sunk {
                    attacker: att,
                    defender: def,
                    ship,
                })?;
            }
            console.pause()?;

            if let Some(winner) = report.winner {
                console.announce(GameEvent::GameOver {
                    winner: &self.players[winner],
                    loser: &self.players[1 - winner],
                })?;
                return Ok(winner);
            }
        }
    }

    /// Keep asking the attacker for a target until it names an unguessed
    /// cell.
    fn acquire_guess<C, R>(
        &self,
        attacker: usize,
        console: &mut C,
        rng: &mut R,
    ) -> anyhow::Result<Coordinate>
    where
        C: Console + ?Sized,
        R: Rng + ?Sized,
    {
        let player = &self.players[attacker];
        loop {
            let target = match player.kind() {
                PlayerKind::Human => {
                    console.announce(GameEvent::GuessPrompt { player })?;
                    console.request_coordinate(player)?
                }
                PlayerKind::Random => self.agent.choose_target(rng),
            };
            if player.guesses().is_unknown(target) {
                return Ok(target);
            }
            match player.kind() {
                PlayerKind::Human => console.announce(GameEvent::GuessRejected { player, target })?,
                PlayerKind::Random => log::trace!("{} redraws {}", player.name(), target),
            }
        }
    }

    fn setup_player<C, R>(&mut self, index: usize, console: &mut C, rng: &mut R) -> anyhow::Result<()>
    where
        C: Console + ?Sized,
        R: Rng + ?Sized,
    {
        if self.players[index].kind() == PlayerKind::Random {
            return self.auto_place(index, rng).map_err(|e| anyhow::anyhow!(e));
        }
        if self.players[index].fleet_placed() {
            return Ok(());
        }
        while let Some(ship) = self.players[index].next_unplaced() {
            console.render_boards(&self.players[index])?;
            loop {
                let player = &self.players[index];
                console.announce(GameEvent::PlacementPrompt { player, ship })?;
                let anchor = console.request_coordinate(player)?;
                let orientation = console.request_orientation(player)?;
                match self.place(index, ship, anchor, orientation) {
                    Ok(()) => break,
                    Err(error) => {
                        let player = &self.players[index];
                        console.announce(GameEvent::PlacementRejected { player, error })?;
                        console.pause()?;
                    }
                }
            }
        }
        console.render_boards(&self.players[index])?;
        console.pause()
    }

    /// Repeat matches until the console declines another one.
    pub fn run_session<C, R>(&mut self, console: &mut C, rng: &mut R) -> anyhow::Result<()>
    where
        C: Console + ?Sized,
        R: Rng + ?Sized,
    {
        loop {
            let player2 = console.request_player2_kind()?;
            self.setup_match(player2);
            self.play_one_match(console, rng)?;
            if !console.play_again()? {
                return Ok(());
            }
        }
    }
}

/// Console for matches with no human seat: announcements go to the log and
/// any request for human input is an error.
#[derive(Debug, Default, Clone, Copy)]
pub struct Headless;

impl Console for Headless {
    fn request_player2_kind(&mut self) -> anyhow::Result<PlayerKind> {
        Ok(PlayerKind::Random)
    }

    fn request_coordinate(&mut self, player: &Player) -> anyhow::Result<Coordinate> {
        Err(anyhow::anyhow!("no human at the console for {}", player.name()))
    }

    fn request_orientation(&mut self, player: &Player) -> anyhow::Result<Orientation> {
        Err(anyhow::anyhow!("no human at the console for {}", player.name()))
    }

    fn render_boards(&mut self, _player: &Player) -> anyhow::Result<()> {
        Ok(())
    }

    fn pause(&mut self) -> anyhow::Result<()> {
        Ok(())
    }

    fn announce(&mut self, event: GameEvent<'_>) -> anyhow::Result<()> {
        if let GameEvent::GameOver { winner, .. } = event {
            log::debug!("{} won", winner.name());
        }
        Ok(())
    }

    fn play_again(&mut self) -> anyhow::Result<bool> {
        Ok(false)
    }
}
