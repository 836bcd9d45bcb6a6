//! Shared setup for data commands: config, logging and the board service.

use std::path::Path;

use tracing::debug;

use super::command::SourceArgs;
use super::output;
use crate::application::Board;
use crate::error::Result;
use crate::infrastructure::config::settings::Config;
use crate::infrastructure::factory::source::{build_balance_source, build_price_source};

/// Load the effective config for a data command and start logging.
///
/// A missing config file means defaults; a present but invalid one is an error.
pub fn load_config(source: &SourceArgs, balances: Option<&Path>) -> Result<Config> {
    let mut config = Config::load_or_default(&source.config)?;
    if let Some(path) = &source.prices_file {
        config.prices.file = Some(path.clone());
    }
    if let Some(path) = balances {
        config.balances.path = path.to_path_buf();
    }

    config.logging.init_with_level(output::current().log_level());
    debug!(config = %source.config.display(), "Configuration loaded");
    Ok(config)
}

/// Build the board service from an effective config.
pub fn board(config: &Config) -> Result<Board> {
    Ok(Board::new(
        build_price_source(config)?,
        build_balance_source(config),
        config.chain_tiers()?,
    ))
}
