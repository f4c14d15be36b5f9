//! Arena - plays a match from a roster file and prints every round

use anyhow::{Context, Result};
use arena_core::{init_constants, Arena, CombatantView, MatchStatus, PlayOutcome};
use clap::{Parser, ValueEnum};
use roster_core::{RosterConfig, RosterGenerator};
use serde::Serialize;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Turn-based arena: fighters pick targets and trade blows until one stands
#[derive(Parser, Debug)]
#[command(name = "arena")]
struct Args {
    /// Roster file (TOML). Uses the built-in roster when omitted
    #[arg(long)]
    roster: Option<PathBuf>,

    /// Arena constants file (TOML)
    #[arg(long)]
    constants: Option<PathBuf>,

    /// Stop after this many rounds, even if the match is undecided
    #[arg(long, default_value_t = 500)]
    max_rounds: u32,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Verbose logging (repeat for more)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

/// JSON output structure
#[derive(Serialize)]
struct MatchSummary<'a> {
    status: &'a MatchStatus,
    rounds: u32,
    log: &'a [String],
    roster: Vec<CombatantView>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    if let Some(path) = &args.constants {
        init_constants(path)
            .with_context(|| format!("loading constants from {}", path.display()))?;
    }

    let config = match &args.roster {
        Some(path) => RosterConfig::load(path)?,
        None => RosterConfig::reference(),
    };
    let generator = RosterGenerator::new(config)?;
    let mut arena = Arena::new(generator.generate());
    tracing::info!(fighters = arena.roster().len(), "match starting");

    if args.format == Format::Text {
        print_roster(&arena.snapshot());
    }

    while arena.round() < args.max_rounds {
        match arena.play() {
            PlayOutcome::Round(report) => {
                if args.format == Format::Text {
                    println!("--- Round {} ---", report.round);
                    for line in report.log_lines() {
                        println!("{}", line);
                    }
                }
            }
            PlayOutcome::Finished(_) => break,
        }
    }

    // The last kill may land on the final allowed round
    if !arena.is_finished() && arena.living_count() <= 1 {
        arena.play();
    }
    if !arena.is_finished() {
        tracing::warn!(rounds = arena.round(), "round limit reached without a winner");
    }

    match args.format {
        Format::Text => {
            println!();
            print_roster(&arena.snapshot());
            println!("{}", arena.status());
        }
        Format::Json => {
            let summary = MatchSummary {
                status: arena.status(),
                rounds: arena.round(),
                log: arena.log(),
                roster: arena.snapshot(),
            };
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
    }

    Ok(())
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn print_roster(roster: &[CombatantView]) {
    for view in roster {
        println!("{}", view);
    }
}
