//! Command-line interface definitions.
//!
//! Defines the CLI structure for the tokenboard application using `clap`.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::infrastructure::config::settings::DEFAULT_CONFIG_PATH;

/// Resolve a token price feed and rank wallet balances
#[derive(Parser, Debug)]
#[command(name = "tokenboard")]
#[command(version)]
pub struct Cli {
    /// Color output mode [auto, always, never]
    #[arg(
        long,
        global = true,
        default_value = "auto",
        hide_possible_values = true
    )]
    pub color: ColorChoice,

    /// JSON output for scripting
    #[arg(long, global = true)]
    pub json: bool,

    /// Decrease output verbosity
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase output verbosity
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Color output mode for terminal rendering.
#[derive(Clone, Debug, Default, clap::ValueEnum)]
pub enum ColorChoice {
    /// Detect automatically
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Top-level subcommands for the tokenboard CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Rank wallet balances by chain tier and USD value
    Balances(BalancesArgs),

    /// List tokens with a positive latest price
    Tokens(SourceArgs),

    /// Show the latest price of one token
    Price(PriceArgs),

    /// Manage configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

/// Subcommands for `tokenboard config`.
#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Generate a new configuration file from template.
    Init(ConfigInitArgs),
    /// Display the effective configuration with defaults applied.
    Show(ConfigPathArg),
    /// Validate a configuration file for correctness.
    Validate(ConfigPathArg),
}

/// Shared argument struct for commands that require only a configuration path.
#[derive(Parser, Debug)]
pub struct ConfigPathArg {
    /// Path to the configuration file.
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,
}

/// Arguments for the `config init` subcommand.
#[derive(Parser, Debug)]
pub struct ConfigInitArgs {
    /// Output path for the generated configuration file.
    #[arg(default_value = DEFAULT_CONFIG_PATH)]
    pub path: PathBuf,
    /// Overwrite the file if it already exists.
    #[arg(long)]
    pub force: bool,
}

/// Config path plus an optional local price feed override.
#[derive(Parser, Debug)]
pub struct SourceArgs {
    /// Path to the configuration file.
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,

    /// Read the price feed from a local JSON file instead of the configured source.
    #[arg(long)]
    pub prices_file: Option<PathBuf>,
}

/// Arguments for the `balances` subcommand.
#[derive(Parser, Debug)]
pub struct BalancesArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Balance file (JSON array), overriding `[balances] path`.
    #[arg(short, long)]
    pub balances: Option<PathBuf>,
}

/// Arguments for the `price` subcommand.
#[derive(Parser, Debug)]
pub struct PriceArgs {
    /// Token symbol, e.g. ETH (case-sensitive).
    pub symbol: String,

    #[command(flatten)]
    pub source: SourceArgs,
}
