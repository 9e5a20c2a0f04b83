//! Kuba-Rust: the Kuba marble-pushing game.
//!
//! ## Usage
//!
//! - `kuba-rust` - Replay the opening walkthrough
//! - `kuba-rust demo` - Same as above
//! - `kuba-rust selfplay` - Play random games and report the results

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};

use kuba_rust::board::Direction;
use kuba_rust::game::KubaGame;
use kuba_rust::playout::playout;

/// Kuba-Rust: rules engine for the Kuba board game
#[derive(Parser)]
#[command(name = "kuba-rust")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Replay the opening walkthrough move by move
    Demo,
    /// Play games between two random movers
    Selfplay {
        /// Number of games to play
        #[arg(short, long, default_value_t = 10)]
        games: usize,
        /// Seed for the random mover
        #[arg(short, long, default_value_t = 1)]
        seed: u64,
        /// Give up on a game after this many moves
        #[arg(long, default_value_t = 500)]
        max_moves: usize,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Selfplay {
            games,
            seed,
            max_moves,
        }) => run_selfplay(games, seed, max_moves),
        Some(Commands::Demo) | None => run_demo(),
    }
}

fn run_demo() -> Result<()> {
    println!("Kuba-Rust: Kuba Rules Engine\n");

    let mut game = KubaGame::new(("PlayerA", "W"), ("PlayerB", "B"))
        .context("failed to set up players")?;
    println!("{}", game.board());
    println!("Marbles (W, B, R): {:?}", game.get_marble_count());

    let moves = [
        ("PlayerA", (6, 5), "F"),
        ("PlayerA", (6, 5), "L"),
        ("PlayerB", (0, 6), "B"),
        ("PlayerA", (5, 5), "F"),
    ];
    for (player, pt, dir) in moves {
        let dir: Direction = dir.parse()?;
        match game.try_move(player, pt, dir) {
            Ok(out) => {
                println!("{player} {pt:?} {dir}: ok");
                if let Some(m) = out.pushed_off {
                    println!("  pushed off {m}");
                }
            }
            Err(e) => println!("{player} {pt:?} {dir}: {e}"),
        }
    }
    println!("\n{}", game.board());
    println!(
        "Next to move: {}",
        game.get_current_turn().unwrap_or("nobody")
    );
    Ok(())
}

fn run_selfplay(games: usize, seed: u64, max_moves: usize) -> Result<()> {
    if games == 0 {
        bail!("--games must be at least 1");
    }
    let mut rng = fastrand::Rng::with_seed(seed);
    let mut wins = [0usize; 2];
    let mut unfinished = 0;
    let mut total_moves = 0;

    for i in 0..games {
        let mut game = KubaGame::new(("White", "W"), ("Black", "B"))?;
        let result = playout(&mut game, &mut rng, max_moves);
        total_moves += result.moves;
        match result.winner.as_deref() {
            Some("White") => wins[0] += 1,
            Some(_) => wins[1] += 1,
            None => unfinished += 1,
        }
        eprintln!(
            "game {:>3}: {:>4} moves, winner {}",
            i + 1,
            result.moves,
            result.winner.as_deref().unwrap_or("-")
        );
    }

    println!(
        "White {} / Black {} / unfinished {} ({:.1} moves per game)",
        wins[0],
        wins[1],
        unfinished,
        total_moves as f64 / games as f64
    );
    Ok(())
}
