//! Play one game of Snakes and Ladders and print each turn.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use snakes_ladders::{play_game, BoardConfig, GameRecord, GameRng, GameStatus, RandomDice};

/// Play a single-player game of Snakes and Ladders.
#[derive(Parser)]
#[command(name = "snakes", about = "Play a single-player game of Snakes and Ladders")]
struct Cli {
    /// Seed for the dice (random if omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Path to a JSON board configuration (standard board if omitted)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print the finished game as JSON instead of text
    #[arg(long)]
    json: bool,

    /// Stop after this many turns even if nobody has won
    #[arg(long)]
    max_turns: Option<usize>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("reading board config from {}", path.display()))?;
            BoardConfig::from_json(&text)
                .with_context(|| format!("parsing board config from {}", path.display()))?
        }
        None => BoardConfig::standard(),
    };
    let board = config.build().context("building board")?;

    let rng = match cli.seed {
        Some(seed) => GameRng::new(seed),
        None => GameRng::from_entropy(),
    };
    tracing::info!(seed = rng.seed(), size = board.size(), "starting game");

    let mut game = play_game(&board, RandomDice::new(rng));
    let limit = cli.max_turns.unwrap_or(usize::MAX);
    let mut turns = Vec::new();

    for result in game.by_ref().take(limit) {
        let turn = result.context("playing game")?;
        if cli.json {
            turns.push(turn);
        } else {
            println!("\n{}", turn);
        }
    }

    if cli.json {
        let record = GameRecord {
            turns,
            status: game.status(),
        };
        println!("{}", serde_json::to_string_pretty(&record)?);
        return Ok(());
    }

    match game.status() {
        GameStatus::Won => println!("\nPlayer Wins"),
        GameStatus::Playing => println!(
            "\nStopped after {} turns at position {}",
            game.turns_played(),
            game.position()
        ),
    }

    Ok(())
}
