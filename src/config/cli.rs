use crate::config::toml_config::AppConfig;
use clap::{Parser, Subcommand};

#[derive(Debug, Clone, Parser)]
#[command(name = "boxing-ring")]
#[command(about = "Manage a boxer catalog and simulate fights in the ring")]
pub struct CliConfig {
    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Override the JSON store path from the config
    #[arg(long)]
    pub store: Option<String>,

    /// Seed the fight simulation for reproducible results
    #[arg(long)]
    pub seed: Option<u64>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Add a boxer to the catalog
    Create {
        name: String,
        #[arg(long)]
        weight: u32,
        #[arg(long)]
        height: u32,
        #[arg(long)]
        reach: f64,
        #[arg(long)]
        age: u32,
    },
    /// Look up a boxer by id or name
    Get {
        #[arg(long, conflicts_with = "name", required_unless_present = "name")]
        id: Option<u64>,
        #[arg(long)]
        name: Option<String>,
    },
    /// Remove a boxer from the catalog
    Delete { id: u64 },
    /// Record a fight result ("win" or "loss") for a boxer
    Record { id: u64, result: String },
    /// Show boxers ranked by wins or win percentage
    Leaderboard {
        #[arg(long)]
        sort_by: Option<String>,
        /// Write the leaderboard as CSV instead of printing it
        #[arg(long)]
        csv: Option<String>,
    },
    /// Put two boxers in the ring and simulate a fight
    Fight { first: String, second: String },
}

impl Command {
    /// Whether the command needs boxers that an earlier run created.
    pub fn reads_catalog(&self) -> bool {
        !matches!(self, Command::Create { .. })
    }
}

impl CliConfig {
    /// Applies command-line overrides on top of the file configuration.
    pub fn apply_overrides(&self, config: &mut AppConfig) {
        if let Some(path) = &self.store {
            config.store.backend = "json".to_string();
            config.store.path = Some(path.clone());
        }
        if self.seed.is_some() {
            config.ring.seed = self.seed;
        }
        if self.verbose {
            config.logging.verbose = true;
        }
    }
}
