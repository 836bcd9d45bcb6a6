//! Source-agnostic domain logic: price resolution and balance ranking.
//!
//! Everything here is pure and synchronous. Fetching happens in adapters.

pub mod error;
pub mod format;
pub mod id;
pub mod money;

mod balance;
mod price;
mod ranker;
mod tier;

pub use balance::{AccountBalance, DisplayRow};
pub use format::format_amount;
pub use id::{Chain, Symbol};
pub use money::{Amount, Price, UsdValue};
pub use price::{resolve_latest_prices, PriceLookup, PriceMap, PriceObservation, ResolvedPrice, Token};
pub use ranker::{rank_balances, total_usd_value};
pub use tier::{default_tier_table, ChainTiers, Priority, UNKNOWN_PRIORITY_BASELINE};
