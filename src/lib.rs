//! Tokenboard - resolve a redundant price feed and rank wallet balances.
//!
//! The crate turns a raw, possibly repetitive, time-stamped price feed and a
//! raw set of per-account balances into a deterministically ordered list
//! ready for display.
//!
//! # Architecture
//!
//! - **`domain`** - Pure pipeline stages
//!   - [`domain::resolve_latest_prices`] - one price per symbol, newest wins,
//!     first-seen wins on equal timestamps
//!   - [`domain::rank_balances`] - filter by chain tier and positive amount,
//!     price, then sort by tier, USD value and currency
//! - **`port`** - Source traits for the price feed and balances
//! - **`adapter`** - HTTP/file sources and the CLI
//! - **`application`** - The [`application::Board`] service wiring it together
//! - **`infrastructure`** - TOML configuration, logging and source factories
//!
//! # Example
//!
//! ```
//! use std::collections::HashMap;
//! use rust_decimal_macros::dec;
//! use tokenboard::domain::{rank_balances, AccountBalance, ChainTiers};
//!
//! let balances = vec![
//!     AccountBalance::new("USD", dec!(100), "Ethereum"),
//!     AccountBalance::new("ABC", dec!(50), "UnknownChain"),
//! ];
//! let prices: HashMap<String, _> = [("USD".to_string(), dec!(1))].into_iter().collect();
//!
//! let rows = rank_balances(&balances, &prices, &ChainTiers::standard());
//! assert_eq!(rows.len(), 1);
//! assert_eq!(rows[0].usd_value, dec!(100));
//! ```

pub mod adapter;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod port;
