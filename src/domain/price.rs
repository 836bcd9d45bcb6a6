//! Price feed resolution.
//!
//! A raw feed may repeat a symbol many times with different timestamps and in
//! no particular order. [`resolve_latest_prices`] reduces it to one price per
//! symbol, keeping the most recent observation.

use std::borrow::Borrow;
use std::collections::{BTreeMap, HashMap};
use std::hash::{BuildHasher, Hash};

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::id::Symbol;
use super::money::Price;

/// A single timestamped price observation from the feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceObservation {
    #[serde(rename = "currency")]
    pub symbol: Symbol,
    pub price: Price,
    #[serde(rename = "date")]
    pub observed_at: DateTime<Utc>,
}

impl PriceObservation {
    /// Create a new observation.
    pub fn new(symbol: impl Into<Symbol>, price: Price, observed_at: DateTime<Utc>) -> Self {
        Self {
            symbol: symbol.into(),
            price,
            observed_at,
        }
    }
}

/// The winning observation for one symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ResolvedPrice {
    pub price: Price,
    pub observed_at: DateTime<Utc>,
}

/// Symbol → most recent price.
///
/// Only symbols that appeared in the input are present; there are no
/// placeholder entries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PriceMap {
    latest: BTreeMap<Symbol, ResolvedPrice>,
}

/// Resolve a raw observation feed to the latest price per symbol.
///
/// A later observation replaces the retained one only when its timestamp is
/// strictly greater; on equal timestamps the first one seen is kept. Prices
/// are copied unmodified, including zero and negative values.
#[must_use]
pub fn resolve_latest_prices(observations: &[PriceObservation]) -> PriceMap {
    let mut latest: BTreeMap<Symbol, ResolvedPrice> = BTreeMap::new();

    for obs in observations {
        let candidate = ResolvedPrice {
            price: obs.price,
            observed_at: obs.observed_at,
        };
        match latest.get_mut(obs.symbol.as_str()) {
            Some(current) => {
                if obs.observed_at > current.observed_at {
                    *current = candidate;
                }
            }
            None => {
                latest.insert(obs.symbol.clone(), candidate);
            }
        }
    }

    PriceMap { latest }
}

impl PriceMap {
    /// Latest price for `symbol`, if it was observed.
    #[must_use]
    pub fn latest(&self, symbol: &str) -> Option<Price> {
        self.latest.get(symbol).map(|r| r.price)
    }

    /// Full resolution (price and timestamp) for `symbol`.
    #[must_use]
    pub fn get(&self, symbol: &str) -> Option<&ResolvedPrice> {
        self.latest.get(symbol)
    }

    /// Number of distinct symbols.
    #[must_use]
    pub fn len(&self) -> usize {
        self.latest.len()
    }

    /// Whether the feed contained no observations.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.latest.is_empty()
    }

    /// Iterate symbols in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = (&Symbol, &ResolvedPrice)> {
        self.latest.iter()
    }

    /// Tokens worth listing: every resolved symbol with a strictly positive
    /// price, ordered by symbol.
    #[must_use]
    pub fn catalog(&self) -> Vec<Token> {
        self.latest
            .iter()
            .filter(|(_, resolved)| resolved.price > Decimal::ZERO)
            .map(|(symbol, resolved)| Token {
                symbol: symbol.clone(),
                price: resolved.price,
                updated_at: resolved.observed_at,
            })
            .collect()
    }
}

/// An entry of the token catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    pub symbol: Symbol,
    pub price: Price,
    pub updated_at: DateTime<Utc>,
}

/// Anything that can answer "what is the price of this symbol".
///
/// The ranker only needs lookups, so it accepts a resolved [`PriceMap`] or a
/// plain map built elsewhere.
pub trait PriceLookup {
    /// Price for `symbol`, or `None` when unknown.
    fn price_of(&self, symbol: &str) -> Option<Price>;
}

impl PriceLookup for PriceMap {
    fn price_of(&self, symbol: &str) -> Option<Price> {
        self.latest(symbol)
    }
}

impl<K, S> PriceLookup for HashMap<K, Price, S>
where
    K: Borrow<str> + Hash + Eq,
    S: BuildHasher,
{
    fn price_of(&self, symbol: &str) -> Option<Price> {
        self.get(symbol).copied()
    }
}

impl<K> PriceLookup for BTreeMap<K, Price>
where
    K: Borrow<str> + Ord,
{
    fn price_of(&self, symbol: &str) -> Option<Price> {
        self.get(symbol).copied()
    }
}
