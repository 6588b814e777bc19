//! Booray CLI - play the card game against seven computer opponents.

use booray::ai::{Decider, HeuristicOpponent};
use booray::cli::{ConsoleNotifier, PromptDecider};
use booray::domain::RulesMode;
use booray::engine::Game;
use booray::GameConfig;
use clap::{Parser, ValueEnum};

#[derive(Parser)]
#[command(name = "booray")]
#[command(about = "Booray card game against computer opponents")]
struct Args {
    /// Your name at the table
    #[arg(short, long, default_value = "Player")]
    name: String,

    /// Rule variant to play
    #[arg(long, default_value = "normal")]
    mode: Mode,

    /// Number of computer opponents (1-7)
    #[arg(short, long, default_value = "7")]
    opponents: usize,

    /// Seed for reproducible games
    #[arg(long)]
    seed: Option<u64>,

    /// Let the computer play your seat too (headless game)
    #[arg(long)]
    auto: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Mode {
    /// Follow-suit and trump obligations apply
    Normal,
    /// Any card may be played at any time
    NoRules,
}

impl From<Mode> for RulesMode {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Normal => RulesMode::Normal,
            Mode::NoRules => RulesMode::NoRules,
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let filter = if args.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = GameConfig {
        human_name: args.name,
        opponents: GameConfig::default()
            .opponents
            .into_iter()
            .take(args.opponents)
            .collect(),
        mode: args.mode.into(),
        seed: args.seed,
        ..GameConfig::default()
    };

    let mut deciders: Vec<Box<dyn Decider>> = Vec::with_capacity(config.seat_count());
    if args.auto {
        deciders.push(Box::new(HeuristicOpponent::new(args.seed)));
    } else {
        deciders.push(Box::new(PromptDecider));
    }
    for i in 0..config.opponents.len() as u64 {
        deciders.push(Box::new(HeuristicOpponent::new(
            args.seed.map(|s| s.wrapping_add(i + 1)),
        )));
    }

    let names: Vec<String> = std::iter::once(config.human_name.clone())
        .chain(config.opponents.iter().cloned())
        .collect();
    let mut notifier = ConsoleNotifier::new(names);

    let mut game = Game::new(&config, deciders)?;
    let summary = game.run(&mut notifier)?;

    println!(
        "{} won after {} rounds with {} chips.",
        summary.winner_name, summary.rounds_played, summary.chips
    );
    Ok(())
}
