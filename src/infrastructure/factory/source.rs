//! Data source factory.

use std::sync::Arc;

use tracing::info;

use crate::adapter::outbound::file::{JsonFileBalanceSource, JsonFilePriceSource};
use crate::adapter::outbound::http::HttpPriceSource;
use crate::error::Result;
use crate::infrastructure::config::settings::Config;
use crate::port::{BalanceSource, PriceSource};

/// Build the price source from configuration.
///
/// A configured `prices.file` wins over `prices.url`.
///
/// # Errors
///
/// Returns an error if the feed URL does not parse.
pub fn build_price_source(config: &Config) -> Result<Arc<dyn PriceSource>> {
    let source: Arc<dyn PriceSource> = match &config.prices.file {
        Some(path) => Arc::new(JsonFilePriceSource::new(path)),
        None => Arc::new(HttpPriceSource::from_config(&config.prices)?),
    };
    info!(origin = %source.describe(), "Price source initialized");
    Ok(source)
}

/// Build the balance source from configuration.
#[must_use]
pub fn build_balance_source(config: &Config) -> Arc<dyn BalanceSource> {
    let source: Arc<dyn BalanceSource> = Arc::new(JsonFileBalanceSource::new(&config.balances.path));
    info!(origin = %source.describe(), "Balance source initialized");
    source
}
