use std::collections::VecDeque;

use fleet_duel::{
    BoardError, Console, Coordinate, GameEngine, GameEvent, GuessOutcome, Headless, Orientation,
    Phase, Player, PlayerKind, ShipKind, FLEET,
};
use rand::rngs::SmallRng;
use rand::SeedableRng;

fn at(row: usize, col: usize) -> Coordinate {
    Coordinate::new(row, col).unwrap()
}

/// Fleet stacked in the top-left corner, one ship per row from A1.
fn place_rows(engine: &mut GameEngine, index: usize) {
    for (row, kind) in FLEET.iter().enumerate() {
        engine
            .place(index, *kind, at(row, 0), Orientation::Horizontal)
            .unwrap();
    }
}

fn ship_cells(player: &Player) -> Vec<Coordinate> {
    FLEET
        .iter()
        .flat_map(|k| player.ship(*k).cells().collect::<Vec<_>>())
        .collect()
}

fn water_cells(player: &Player) -> Vec<Coordinate> {
    Coordinate::all()
        .filter(|c| player.fleet().is_cell_empty(*c))
        .collect()
}

/// Plays out a match where `loser` never hits and `winner` sinks everything.
fn play_to_end(engine: &mut GameEngine, winner: usize) -> Vec<fleet_duel::TurnReport> {
    let loser = 1 - winner;
    let mut targets_for_winner = ship_cells(engine.player(loser)).into_iter();
    let mut targets_for_loser = water_cells(engine.player(winner)).into_iter();
    let mut reports = Vec::new();
    while engine.winner().is_none() {
        let active = engine.active().unwrap();
        let target = if active == winner {
            targets_for_winner.next().unwrap()
        } else {
            targets_for_loser.next().unwrap()
        };
        reports.push(engine.guess(target).unwrap());
    }
    reports
}

#[test]
fn test_guessing_requires_both_fleets() {
    let mut engine = GameEngine::with_kinds(PlayerKind::Human, PlayerKind::Random);
    assert_eq!(engine.phase(), Phase::SettingUp);
    assert_eq!(engine.guess(at(0, 0)).unwrap_err(), BoardError::FleetNotPlaced);

    place_rows(&mut engine, 0);
    assert_eq!(engine.start().unwrap_err(), BoardError::FleetNotPlaced);

    let mut rng = SmallRng::seed_from_u64(1);
    engine.auto_place(1, &mut rng).unwrap();
    engine.start().unwrap();
    assert_eq!(engine.phase(), Phase::AwaitingGuess { active: 0 });
    assert_eq!(
        engine
            .place(0, ShipKind::Carrier, at(9, 0), Orientation::Horizontal)
            .unwrap_err(),
        BoardError::ShipAlreadyPlaced
    );
}

#[test]
fn test_turns_alternate_and_repeat_guess_is_rejected() {
    let mut engine = GameEngine::with_kinds(PlayerKind::Human, PlayerKind::Human);
    place_rows(&mut engine, 0);
    place_rows(&mut engine, 1);
    engine.start().unwrap();

    let report = engine.guess(at(0, 0)).unwrap();
    assert_eq!(report.attacker, 0);
    assert_eq!(report.outcome, GuessOutcome::Hit(ShipKind::Carrier));
    assert_eq!(report.sunk, None);
    assert_eq!(engine.active(), Some(1));

    let report = engine.guess(at(9, 9)).unwrap();
    assert_eq!(report.attacker, 1);
    assert_eq!(report.outcome, GuessOutcome::Miss);
    assert_eq!(engine.active(), Some(0));

    let before = engine.players().clone();
    assert_eq!(engine.guess(at(0, 0)).unwrap_err(), BoardError::AlreadyGuessed);
    assert_eq!(engine.active(), Some(0));
    assert_eq!(engine.turns(), 2);
    for i in 0..2 {
        assert_eq!(engine.player(i).fleet(), before[i].fleet());
        assert_eq!(engine.player(i).guesses(), before[i].guesses());
    }

    // Player 2 guessing (0, 0) against player 1 is a different cell.
    engine.guess(at(9, 8)).unwrap();
    assert_eq!(engine.guess(at(0, 0)).unwrap().attacker, 1);
}

#[test]
fn test_sinking_whole_fleet_ends_game() {
    let mut engine = GameEngine::with_kinds(PlayerKind::Human, PlayerKind::Random);
    place_rows(&mut engine, 0);
    let mut rng = SmallRng::seed_from_u64(2024);
    engine.auto_place(1, &mut rng).unwrap();
    engine.start().unwrap();

    let reports = play_to_end(&mut engine, 0);
    let last = reports.last().unwrap();
    assert_eq!(last.winner, Some(0));
    assert_eq!(last.attacker, 0);
    assert!(last.sunk.is_some());
    assert_eq!(engine.phase(), Phase::GameOver { winner: 0 });
    assert!(engine.player(1).fleet_sunk());
    assert!(!engine.player(0).fleet_sunk());

    let mut sunk: Vec<_> = reports.iter().filter_map(|r| r.sunk).collect();
    sunk.sort_by_key(|k| k.index());
    assert_eq!(sunk, FLEET.to_vec());
    assert!(reports[..reports.len() - 1].iter().all(|r| r.winner.is_none()));

    assert_eq!(engine.guess(at(9, 9)).unwrap_err(), BoardError::GameOver);
}

#[test]
fn test_second_player_can_win() {
    let mut engine = GameEngine::with_kinds(PlayerKind::Human, PlayerKind::Human);
    place_rows(&mut engine, 0);
    place_rows(&mut engine, 1);
    engine.start().unwrap();

    let reports = play_to_end(&mut engine, 1);
    assert_eq!(reports.last().unwrap().winner, Some(1));
    assert_eq!(engine.winner(), Some(1));
    assert!(engine.player(0).fleet_sunk());
    assert_eq!(engine.player(1).remaining_ships(), FLEET.len());
}

#[test]
fn test_random_match_runs_to_completion() {
    for seed in 0..20 {
        let mut engine = GameEngine::with_kinds(PlayerKind::Random, PlayerKind::Random);
        let mut rng = SmallRng::seed_from_u64(seed);
        engine.setup_match(PlayerKind::Random);
        let winner = engine.play_one_match(&mut Headless, &mut rng).unwrap();
        assert_eq!(engine.winner(), Some(winner));
        assert!(engine.player(1 - winner).fleet_sunk());
        assert!(!engine.player(winner).fleet_sunk());
        assert!(engine.turns() <= 200);
    }
}

#[test]
fn test_setup_match_resets_players() {
    let mut engine = GameEngine::with_kinds(PlayerKind::Random, PlayerKind::Random);
    let mut rng = SmallRng::seed_from_u64(5);
    engine.play_one_match(&mut Headless, &mut rng).unwrap();
    assert!(engine.turns() > 0);

    engine.setup_match(PlayerKind::Human);
    assert_eq!(engine.phase(), Phase::SettingUp);
    assert_eq!(engine.turns(), 0);
    assert_eq!(engine.player(1).kind(), PlayerKind::Human);
    for player in engine.players() {
        assert_eq!(player.fleet().occupied_count(), 0);
        assert_eq!(player.next_unplaced(), Some(ShipKind::Carrier));
    }
}

/// Console that replays queued answers and records what it was told.
#[derive(Default)]
struct ScriptedConsole {
    coords: VecDeque<Coordinate>,
    orientations: VecDeque<Orientation>,
    again: VecDeque<bool>,
    log: Vec<String>,
    pauses: usize,
}

impl Console for ScriptedConsole {
    fn request_player2_kind(&mut self) -> anyhow::Result<PlayerKind> {
        Ok(PlayerKind::Random)
    }

    fn request_coordinate(&mut self, _player: &Player) -> anyhow::Result<Coordinate> {
        self.coords
            .pop_front()
            .ok_or_else(|| anyhow::anyhow!("script exhausted"))
    }

    fn request_orientation(&mut self, _player: &Player) -> anyhow::Result<Orientation> {
        self.orientations
            .pop_front()
            .ok_or_else(|| anyhow::anyhow!("script exhausted"))
    }

    fn render_boards(&mut self, _player: &Player) -> anyhow::Result<()> {
        Ok(())
    }

    fn pause(&mut self) -> anyhow::Result<()> {
        self.pauses += 1;
        Ok(())
    }

    fn announce(&mut self, event: GameEvent<'_>) -> anyhow::Result<()> {
        let line = match event {
            GameEvent::PlacementPrompt { ship, .. } => format!("place {}", ship.name()),
            GameEvent::PlacementRejected { error, .. } => format!("rejected placement: {}", error),
            GameEvent::GuessPrompt { .. } => "guess".to_string(),
            GameEvent::GuessRejected { target, .. } => format!("rejected guess {}", target),
            GameEvent::Shot { attacker, target, .. } => {
                format!("{} shot {}", attacker.name(), target)
            }
            GameEvent::Sunk { defender, ship, .. } => {
                format!("sunk {} {}", defender.name(), ship.name())
            }
            GameEvent::GameOver { winner, .. } => format!("winner {}", winner.name()),
        };
        self.log.push(line);
        Ok(())
    }

    fn play_again(&mut self) -> anyhow::Result<bool> {
        Ok(self.again.pop_front().unwrap_or(false))
    }
}

#[test]
fn test_human_setup_and_guess_retries() {
    let mut console = ScriptedConsole::default();
    // Carrier on row A, then an overlapping Battleship that must be retried.
    console.coords.push_back(at(0, 0));
    console.coords.push_back(at(0, 2));
    for row in 1..FLEET.len() {
        console.coords.push_back(at(row, 0));
    }
    console.orientations.push_back(Orientation::Horizontal);
    console.orientations.push_back(Orientation::Vertical);
    for _ in 1..FLEET.len() {
        console.orientations.push_back(Orientation::Horizontal);
    }
    // Guesses: A1 twice, then sweep the rest of the board.
    console.coords.push_back(at(0, 0));
    console.coords.push_back(at(0, 0));
    console.coords.extend(Coordinate::all().skip(1));

    let mut engine = GameEngine::with_kinds(PlayerKind::Human, PlayerKind::Random);
    let mut rng = SmallRng::seed_from_u64(11);
    engine.setup_match(PlayerKind::Random);
    let winner = engine.play_one_match(&mut console, &mut rng).unwrap();

    assert_eq!(engine.winner(), Some(winner));
    let rejected: Vec<_> = console
        .log
        .iter()
        .filter(|l| l.starts_with("rejected placement"))
        .collect();
    assert_eq!(rejected.len(), 1);
    assert!(rejected[0].contains("overlaps"));
    assert!(console.log.contains(&"rejected guess A1".to_string()));
    for (index, player) in engine.players().iter().enumerate() {
        let sunk_events = console
            .log
            .iter()
            .filter(|l| l.starts_with(&format!("sunk {}", player.name())))
            .count();
        assert_eq!(sunk_events, FLEET.len() - engine.player(index).remaining_ships());
    }
    assert_eq!(console.log.last().unwrap(), &format!("winner {}", engine.player(winner).name()));
    assert!(console.pauses > 0);
    let carrier = engine.player(0).ship(ShipKind::Carrier).placement().unwrap();
    assert_eq!(carrier.anchor, at(0, 0));
}

#[test]
fn test_session_repeats_until_declined() {
    let mut console = ScriptedConsole::default();
    console.again.extend([true, true, false]);
    let mut engine = GameEngine::with_kinds(PlayerKind::Random, PlayerKind::Random);
    let mut rng = SmallRng::seed_from_u64(77);
    engine.run_session(&mut console, &mut rng).unwrap();
    let games = console.log.iter().filter(|l| l.starts_with("winner")).count();
    assert_eq!(games, 3);
    assert!(console.again.is_empty());
}
