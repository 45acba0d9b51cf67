//! Command-line interface for the dugout driver.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use roster::FieldSlot;
use serde::{Deserialize, Serialize};

/// Dugout - build a lineup, defense and rotation from a recorded session
#[derive(Parser, Debug)]
#[command(name = "dugout")]
#[command(about = "Roster assignment engine driver", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the configuration file
    #[arg(short, long, default_value = "dugout.toml")]
    pub config: PathBuf,

    /// Player catalog (overrides the config file)
    #[arg(long)]
    pub catalog: Option<PathBuf>,

    /// Output format (overrides the config file)
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Replay a session of intents and print the share card
    Play {
        /// Session file, a JSON list of intents (overrides the config file)
        #[arg(short, long)]
        session: Option<PathBuf>,

        /// Stop at the first rejected intent instead of skipping it
        #[arg(long)]
        strict: bool,
    },

    /// List the catalog grouped as on the bench
    Roster,

    /// List the players eligible for a field slot
    Eligible {
        /// Slot code, e.g. SS or C
        slot: FieldSlot,
    },

    /// Print the game schedule
    Schedule,
}

/// How results are printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable text
    #[default]
    Text,
    /// Pretty-printed JSON
    Json,
}
