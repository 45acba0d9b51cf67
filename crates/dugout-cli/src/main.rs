//! Dugout - command-line driver
//!
//! Loads a player catalog, replays a recorded session of intents through the
//! assignment engine and prints the share card.

#![warn(missing_docs)]

mod cli;
mod config;
mod session;

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command, OutputFormat};
use config::DugoutConfig;
use dugout_core::{AssignmentEngine, Schedule, ShareSnapshot};
use roster::{Catalog, FieldSlot};
use serde::Serialize;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = DugoutConfig::load_or_default(&cli.config)?.with_overrides(&cli);

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log)),
        )
        .with_writer(std::io::stderr)
        .init();

    let catalog = Catalog::load(&config.catalog)
        .with_context(|| format!("loading catalog {}", config.catalog.display()))?;
    info!(players = catalog.len(), "catalog loaded");
    let engine = AssignmentEngine::new(Arc::new(catalog));
    let schedule = config.schedule()?;

    match cli.command {
        Command::Play { session, strict } => run_play(engine, &config, &schedule, session, strict),
        Command::Roster => run_roster(engine, config.format),
        Command::Eligible { slot } => run_eligible(engine, slot, config.format),
        Command::Schedule => emit(config.format, &schedule_lines(&schedule), &schedule),
    }
}

/// Replay a session and print the share card
fn run_play(
    mut engine: AssignmentEngine,
    config: &DugoutConfig,
    schedule: &Schedule,
    session_path: Option<std::path::PathBuf>,
    strict: bool,
) -> Result<()> {
    let path = session_path
        .or_else(|| config.session.clone())
        .context("no session file given on the command line or in the config")?;
    let intents = session::load(&path)?;
    info!(path = %path.display(), intents = intents.len(), "replaying session");

    let summary = session::replay(&mut engine, intents, strict)?;
    info!(applied = summary.applied, rejected = summary.rejected, "session replayed");

    let snapshot = ShareSnapshot::capture(&engine, schedule)?;
    emit(config.format, &snapshot.to_string(), &snapshot)
}

/// Print the catalog grouped as on the bench
fn run_roster(mut engine: AssignmentEngine, format: OutputFormat) -> Result<()> {
    engine.init_from_catalog();
    let view = engine.view();
    let groups: Vec<_> = view
        .bench_groups()
        .into_iter()
        .map(|(group, players)| (group, players.into_iter().cloned().collect::<Vec<_>>()))
        .collect();

    let mut text = String::new();
    for (group, players) in &groups {
        text.push_str(&format!("{} ({})\n", group.label(), players.len()));
        for player in players {
            let hand = player.hand.map(|h| format!(" {h}")).unwrap_or_default();
            text.push_str(&format!("  {:<6} {}{hand}\n", player.class.code(), player.name));
        }
    }
    text.push_str(&format!("{} players", view.bench_count()));
    emit(format, &text, &groups)
}

/// Print the players who may take a slot on an empty field
fn run_eligible(mut engine: AssignmentEngine, slot: FieldSlot, format: OutputFormat) -> Result<()> {
    engine.init_from_catalog();
    let players: Vec<_> = engine
        .view()
        .eligible_for_field(slot)
        .into_iter()
        .cloned()
        .collect();

    let text = players
        .iter()
        .map(|p| format!("{:<6} {}", p.class.code(), p.name))
        .collect::<Vec<_>>()
        .join("\n");
    emit(format, &text, &players)
}

fn schedule_lines(schedule: &Schedule) -> String {
    (0..dugout_core::ROTATION_LEN)
        .filter_map(|i| schedule.label(i))
        .collect::<Vec<_>>()
        .join("\n")
}

fn emit<T: Serialize>(format: OutputFormat, text: &str, value: &T) -> Result<()> {
    match format {
        OutputFormat::Text => println!("{text}"),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(value)?),
    }
    Ok(())
}
