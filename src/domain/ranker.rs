//! Balance ranking.
//!
//! Turns raw balances into the ordered display list:
//!
//! 1. drop rows on chains without a tier, and rows with `amount <= 0`
//! 2. price each survivor (`usd_value = amount * price`, missing price = 0)
//! 3. sort by tier descending, USD value descending, currency ascending

use std::cmp::Ordering;

use rust_decimal::Decimal;

use super::balance::{AccountBalance, DisplayRow};
use super::format::format_amount;
use super::money::UsdValue;
use super::price::PriceLookup;
use super::tier::{ChainTiers, Priority};

/// Rank `balances` for display.
///
/// Never fails: unknown chains and non-positive amounts are filtered out,
/// missing prices default to zero. The input is not modified. Rows that tie
/// on every key keep their input order.
#[must_use]
pub fn rank_balances<P>(balances: &[AccountBalance], prices: &P, tiers: &ChainTiers) -> Vec<DisplayRow>
where
    P: PriceLookup + ?Sized,
{
    let mut ranked: Vec<(Priority, DisplayRow)> = balances
        .iter()
        .filter_map(|balance| {
            let priority = tiers.get(balance.chain.as_str())?;
            if balance.amount <= Decimal::ZERO {
                return None;
            }
            Some((priority, enrich(balance, prices)))
        })
        .collect();

    ranked.sort_by(|(lp, lhs), (rp, rhs)| compare(*lp, lhs, *rp, rhs));

    ranked.into_iter().map(|(_, row)| row).collect()
}

fn enrich<P>(balance: &AccountBalance, prices: &P) -> DisplayRow
where
    P: PriceLookup + ?Sized,
{
    let price = prices
        .price_of(balance.currency.as_str())
        .unwrap_or(Decimal::ZERO);
    DisplayRow {
        currency: balance.currency.clone(),
        chain: balance.chain.clone(),
        amount: balance.amount,
        usd_value: balance.amount.saturating_mul(price),
        formatted_amount: format_amount(balance.amount),
    }
}

fn compare(lp: Priority, lhs: &DisplayRow, rp: Priority, rhs: &DisplayRow) -> Ordering {
    rp.cmp(&lp)
        .then_with(|| rhs.usd_value.cmp(&lhs.usd_value))
        .then_with(|| lhs.currency.cmp(&rhs.currency))
}

/// Sum of USD values across `rows`.
#[must_use]
pub fn total_usd_value(rows: &[DisplayRow]) -> UsdValue {
    rows.iter()
        .fold(Decimal::ZERO, |acc, row| acc.saturating_add(row.usd_value))
}
