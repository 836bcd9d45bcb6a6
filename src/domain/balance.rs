//! Account balances and their display form.

use serde::{Deserialize, Serialize};

use super::id::{Chain, Symbol};
use super::money::{Amount, UsdValue};

/// A raw balance row as reported by the balance source.
///
/// Rows sharing `(currency, chain)` are kept apart; nothing merges them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountBalance {
    pub currency: Symbol,
    pub amount: Amount,
    #[serde(rename = "blockchain", alias = "chain")]
    pub chain: Chain,
}

impl AccountBalance {
    /// Create a new balance row.
    pub fn new(currency: impl Into<Symbol>, amount: Amount, chain: impl Into<Chain>) -> Self {
        Self {
            currency: currency.into(),
            amount,
            chain: chain.into(),
        }
    }
}

/// A ranked, enriched balance ready for display. Derived per call, never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayRow {
    pub currency: Symbol,
    pub chain: Chain,
    pub amount: Amount,
    pub usd_value: UsdValue,
    pub formatted_amount: String,
}
