use anyhow::Context;
use blackjack_lib::{GameConfig, Money};
use clap::Parser;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Command line arguments of the `blackjack` binary.
#[derive(Debug, Parser)]
#[command(name = "blackjack", about = "Play blackjack against the dealer in your terminal")]
pub struct Cli {
    /// JSON file with the game settings, command line flags take precedence over it
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Number of decks in the shoe
    #[arg(long)]
    pub decks: Option<usize>,

    /// Starting balance in whole units
    #[arg(long)]
    pub balance: Option<i64>,

    /// Minimum bet per round
    #[arg(long)]
    pub min_bet: Option<u32>,

    /// Seed for shuffling the shoe, the same seed deals the same cards
    #[arg(long)]
    pub seed: Option<u64>,

    /// Print the session summary as JSON
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

/// A struct for the game settings read from a JSON file. Every field may be left out.
#[derive(Debug, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    pub starting_balance: Option<i64>,
    pub min_bet: Option<u32>,
    pub num_decks: Option<usize>,
    pub seed: Option<u64>,
}

impl ConfigFile {
    pub fn from_json(json: &str) -> anyhow::Result<ConfigFile> {
        serde_json::from_str(json).context("malformed game config")
    }

    pub fn load(path: &Path) -> anyhow::Result<ConfigFile> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("could not read config file {}", path.display()))?;
        ConfigFile::from_json(&json).with_context(|| format!("in {}", path.display()))
    }
}

impl Cli {
    /// Builds the `GameConfig` for the session from the config file, if one was given, and the
    /// command line overrides.
    pub fn game_config(&self) -> anyhow::Result<GameConfig> {
        let file = match &self.config {
            Some(path) => ConfigFile::load(path)?,
            None => ConfigFile::default(),
        };
        let config = self.merge(file);
        config.validate()?;
        Ok(config)
    }

    fn merge(&self, file: ConfigFile) -> GameConfig {
        let mut builder = GameConfig::new();
        if let Some(balance) = self.balance.or(file.starting_balance) {
            builder.starting_balance(Money::from_units(balance));
        }
        if let Some(min_bet) = self.min_bet.or(file.min_bet) {
            builder.min_bet(min_bet);
        }
        if let Some(decks) = self.decks.or(file.num_decks) {
            builder.num_decks(decks);
        }
        if let Some(seed) = self.seed.or(file.seed) {
            builder.seed(seed);
        }
        builder.build()
    }
}
