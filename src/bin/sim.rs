//! Headless batch of random-vs-random matches, reported as JSON.

use clap::Parser;
use fleet_duel::{init_with_default, GameEngine, GuessCell, Headless, PlayerKind};
use log::LevelFilter;
use rand::{rngs::SmallRng, SeedableRng};
use serde::Serialize;

#[derive(Parser)]
#[command(about = "Run random-vs-random matches and print a JSON summary")]
struct Args {
    #[arg(long, default_value_t = 1)]
    games: u32,
    #[arg(long, default_value_t = 0)]
    seed: u64,
}

#[derive(Serialize)]
struct MatchSummary {
    seed: u64,
    winner: String,
    winner_kind: PlayerKind,
    turns: usize,
    hits: [usize; 2],
    misses: [usize; 2],
}

#[derive(Serialize)]
struct Report {
    games: u32,
    wins: [u32; 2],
    average_turns: f64,
    matches: Vec<MatchSummary>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_with_default(LevelFilter::Warn);

    let mut engine = GameEngine::with_kinds(PlayerKind::Random, PlayerKind::Random);
    let mut matches = Vec::with_capacity(args.games as usize);
    let mut wins = [0u32; 2];

    for i in 0..args.games {
        let seed = args.seed.wrapping_add(i as u64);
        let mut rng = SmallRng::seed_from_u64(seed);
        engine.setup_match(PlayerKind::Random);
        let winner = engine.play_one_match(&mut Headless, &mut rng)?;
        wins[winner] += 1;

        let players = engine.players();
        matches.push(MatchSummary {
            seed,
            winner: players[winner].name().to_string(),
            winner_kind: players[winner].kind(),
            turns: engine.turns(),
            hits: [0, 1].map(|p| players[p].guesses().count(GuessCell::Hit)),
            misses: [0, 1].map(|p| players[p].guesses().count(GuessCell::Miss)),
        });
    }

    let total_turns: usize = matches.iter().map(|m| m.turns).sum();
    let average_turns = if matches.is_empty() {
        0.0
    } else {
        total_turns as f64 / matches.len() as f64
    };

    let report = Report {
        games: args.games,
        wins,
        average_turns,
        matches,
    };
    println!("{}", serde_json::to_string(&report)?);
    Ok(())
}
