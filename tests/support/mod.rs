#![allow(dead_code)]

pub mod source;

use chrono::{DateTime, TimeZone, Utc};
use rust_decimal::Decimal;

use tokenboard::domain::PriceObservation;

/// A fixed instant offset by `secs`.
pub fn at(secs: i64) -> DateTime<Utc> {
    Utc.timestamp_opt(1_693_293_030 + secs, 0).unwrap()
}

pub fn observation(symbol: &str, price: Decimal, secs: i64) -> PriceObservation {
    PriceObservation::new(symbol, price, at(secs))
}
