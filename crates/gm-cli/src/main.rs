//! CLI frontend for the Gamemaster assistant.

mod commands;

use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(
    name = "gm",
    about = "Gamemaster: bookkeeping for tabletop game masters",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Roll a single die
    Roll {
        /// Number of sides
        #[arg(short = 'n', long, default_value = "20")]
        sides: u32,

        /// RNG seed for a reproducible roll
        #[arg(short, long)]
        seed: Option<u64>,
    },

    /// Roll a skill check: succeeds when roll + skill >= difficulty
    Check {
        /// Skill modifier added to the roll
        #[arg(allow_negative_numbers = true)]
        skill: i32,

        /// Difficulty to meet or beat
        #[arg(short, long, default_value = "10", allow_negative_numbers = true)]
        dc: i32,

        /// Number of sides on the die
        #[arg(short = 'n', long, default_value = "20")]
        sides: u32,

        /// RNG seed for a reproducible roll
        #[arg(short, long)]
        seed: Option<u64>,
    },

    /// Start an interactive game master session
    Play {
        /// RNG seed for reproducible rolls
        #[arg(short, long)]
        seed: Option<u64>,
    },
}

fn main() {
    init_logging();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Roll { sides, seed } => commands::roll::run(sides, seed),
        Commands::Check {
            skill,
            dc,
            sides,
            seed,
        } => commands::check::run(skill, dc, sides, seed),
        Commands::Play { seed } => commands::play::run(seed),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}

/// Log to stderr, filtered by `RUST_LOG` (warnings only by default).
fn init_logging() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
