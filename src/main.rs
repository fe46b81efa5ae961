use fleet_duel::{init_logging, GameEngine, PlayerKind, TerminalConsole};

use clap::Parser;
use rand::rngs::SmallRng;
use rand::SeedableRng;

#[derive(Parser)]
#[command(author, version, about = "Two-player naval combat on a 10x10 grid", long_about = None)]
struct Cli {
    #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
    seed: Option<u64>,
    #[arg(
        long,
        value_parser = clap::value_parser!(u8).range(1..=2),
        help = "Number of human players; skips the question before each match"
    )]
    humans: Option<u8>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging();

    let mut rng = match cli.seed {
        Some(s) => {
            log::info!("using fixed seed {}", s);
            SmallRng::seed_from_u64(s)
        }
        None => {
            let mut seed_rng = rand::rng();
            SmallRng::from_rng(&mut seed_rng)
        }
    };

    let mut console = TerminalConsole::stdio();
    if let Some(humans) = cli.humans {
        let player2 = if humans == 1 {
            PlayerKind::Random
        } else {
            PlayerKind::Human
        };
        console = console.with_player2(player2);
    }

    let mut engine = GameEngine::with_kinds(PlayerKind::Human, PlayerKind::Random);
    engine.run_session(&mut console, &mut rng)
}
