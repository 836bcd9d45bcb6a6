//! Monetary types for price and amount representation.

use rust_decimal::Decimal;

/// USD price of one unit of an asset.
pub type Price = Decimal;

/// Quantity of an asset held in an account.
pub type Amount = Decimal;

/// USD value of a holding (`amount * price`).
pub type UsdValue = Decimal;
