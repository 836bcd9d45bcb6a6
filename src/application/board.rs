//! The board service: sources → resolver → ranker.
//!
//! Each call fetches fresh batches and computes its output from scratch. No
//! state survives between calls, so concurrent callers never interfere.

use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::domain::{
    rank_balances, resolve_latest_prices, total_usd_value, ChainTiers, DisplayRow, PriceMap,
    ResolvedPrice, Token, UsdValue,
};
use crate::error::{Error, Result};
use crate::port::{BalanceSource, PriceSource};

/// Outcome of ranking one balance batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Ranking {
    /// Ranked display rows.
    pub rows: Vec<DisplayRow>,
    /// Sum of `usd_value` across `rows`.
    pub total_usd_value: UsdValue,
    /// Balance rows dropped for an unknown chain or non-positive amount.
    pub filtered_out: usize,
}

impl Ranking {
    /// Whether there is nothing to show.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Wires the data sources to the pricing and ranking pipeline.
pub struct Board {
    prices: Arc<dyn PriceSource>,
    balances: Arc<dyn BalanceSource>,
    tiers: ChainTiers,
}

impl Board {
    pub fn new(
        prices: Arc<dyn PriceSource>,
        balances: Arc<dyn BalanceSource>,
        tiers: ChainTiers,
    ) -> Self {
        Self {
            prices,
            balances,
            tiers,
        }
    }

    /// The tier table used for ranking.
    #[must_use]
    pub fn tiers(&self) -> &ChainTiers {
        &self.tiers
    }

    /// Fetch the feed and resolve it to the latest price per symbol.
    ///
    /// An unavailable or unreadable feed counts as an empty one: the failure
    /// is logged and an empty map is returned.
    pub async fn resolve_prices(&self) -> PriceMap {
        let observations = match self.prices.fetch_observations().await {
            Ok(observations) => observations,
            Err(e) => {
                warn!(
                    origin = %self.prices.describe(),
                    error = %e,
                    "Price feed unavailable, continuing without prices"
                );
                Vec::new()
            }
        };

        let map = resolve_latest_prices(&observations);
        debug!(
            observations = observations.len(),
            symbols = map.len(),
            "Resolved price feed"
        );
        map
    }

    /// Fetch balances and prices, then rank the balances.
    ///
    /// # Errors
    ///
    /// Returns an error if the balance source fails. Price feed failures are
    /// absorbed (see [`Board::resolve_prices`]).
    pub async fn rank(&self) -> Result<Ranking> {
        let (balances, prices) =
            tokio::join!(self.balances.fetch_balances(), self.resolve_prices());
        let balances = balances?;

        let rows = rank_balances(&balances, &prices, &self.tiers);
        let ranking = Ranking {
            total_usd_value: total_usd_value(&rows),
            filtered_out: balances.len() - rows.len(),
            rows,
        };

        info!(
            balances = balances.len(),
            shown = ranking.rows.len(),
            filtered = ranking.filtered_out,
            total_usd = %ranking.total_usd_value,
            "Ranked balances"
        );
        Ok(ranking)
    }

    /// Tokens with a strictly positive latest price, by symbol.
    pub async fn catalog(&self) -> Vec<Token> {
        self.resolve_prices().await.catalog()
    }

    /// Latest resolved price for a single symbol.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] when the feed has no observation for
    /// `symbol`.
    pub async fn latest_price(&self, symbol: &str) -> Result<ResolvedPrice> {
        self.resolve_prices()
            .await
            .get(symbol)
            .copied()
            .ok_or_else(|| Error::NotFound {
                symbol: symbol.to_string(),
            })
    }
}
