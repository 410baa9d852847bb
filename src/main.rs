//! Mastermind - CLI
//!
//! Classic code-breaking game with TUI and plain CLI modes.

use anyhow::Result;
use clap::{Parser, Subcommand};
use mastermind::{
    commands::run_simple,
    core::{CLASSIC_SIZE, Palette},
    game::{Evaluator, UniformRandom},
    interactive::{App, run_tui},
};

#[derive(Parser)]
#[command(
    name = "mastermind",
    about = "Classic Mastermind code-breaking game with TUI and CLI modes",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Code length (pegs per guess)
    #[arg(short, long, global = true, default_value_t = 4)]
    length: usize,

    /// Number of guess rounds per game
    #[arg(short, long, global = true, default_value_t = 10)]
    rounds: usize,

    /// Number of colors in play (classic palette prefix, 2-8)
    #[arg(short, long, global = true, default_value_t = CLASSIC_SIZE)]
    colors: usize,

    /// RNG seed for a reproducible secret
    #[arg(short, long, global = true)]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (plain text, no TUI)
    Simple,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    anyhow::ensure!(cli.rounds >= 1, "At least one round is required");

    let palette = Palette::classic_with(cli.colors)?;
    log::debug!(
        "starting with {} colors, length {}, {} rounds",
        palette.len(),
        cli.length,
        cli.rounds
    );

    let source = match cli.seed {
        Some(seed) => UniformRandom::seeded(seed),
        None => UniformRandom::new(),
    };
    let mut evaluator = Evaluator::new(palette, cli.length, source)?;

    // Default to Play mode if no command given
    match cli.command.unwrap_or(Commands::Play) {
        Commands::Play => run_tui(App::new(evaluator, cli.rounds)),
        Commands::Simple => run_simple(&mut evaluator, cli.rounds).map_err(|e| anyhow::anyhow!(e)),
    }
}
