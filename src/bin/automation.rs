//! Automation: The Game - command-line runner
//!
//! Plays one fully automated game and prints the result.

use automation_game::{error::Result, ConsoleReporter, GameConfig, GameEngine, Verbosity};
use clap::Parser;

#[derive(Parser)]
#[command(name = "automation")]
#[command(about = "Automation: The Game - automated two-player deck-building simulation", long_about = None)]
struct Cli {
    /// Random seed (a fresh one is picked when omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// First player's name
    #[arg(long, default_value = "Alice")]
    first: String,

    /// Second player's name
    #[arg(long, default_value = "Bob")]
    second: String,

    /// Cards per hand
    #[arg(long, default_value_t = 5)]
    hand_size: usize,

    /// Also report hands, supply status and skipped purchases
    #[arg(long, short = 'v', conflicts_with = "quiet")]
    verbose: bool,

    /// Print only the final summary
    #[arg(long, short = 'q')]
    quiet: bool,
}

impl Cli {
    fn verbosity(&self) -> Verbosity {
        if self.quiet {
            Verbosity::Silent
        } else if self.verbose {
            Verbosity::Verbose
        } else {
            Verbosity::Normal
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let verbosity = cli.verbosity();
    let seed = cli.seed.unwrap_or_else(rand::random);

    let config = GameConfig::new()
        .with_seed(seed)
        .with_player_names(cli.first, cli.second)
        .with_hand_size(cli.hand_size);

    println!("========================================");
    println!("  Welcome to Automation: The Game!");
    println!("========================================\n");
    println!("Starting game with automated players (seed {seed})...\n");

    let mut engine = GameEngine::new(config)?.with_reporter(ConsoleReporter::new(verbosity));
    engine.play_until_ended()?;

    // The reporter already printed the summary at game over.
    if verbosity == Verbosity::Silent {
        println!("{}", engine.summary());
    }
    Ok(())
}
