//! Data source ports.
//!
//! Each call returns one complete batch. Sources never stream partial
//! results and never retry; a failed fetch is reported as an error and the
//! caller decides what an unavailable feed means.

use async_trait::async_trait;

use crate::domain::{AccountBalance, PriceObservation};
use crate::error::SourceError;

/// Port for fetching raw price observations.
#[async_trait]
pub trait PriceSource: Send + Sync {
    /// Fetch the full observation batch.
    async fn fetch_observations(&self) -> Result<Vec<PriceObservation>, SourceError>;

    /// Human-readable origin (URL or path) for logs.
    fn describe(&self) -> String;
}

/// Port for fetching raw account balances.
#[async_trait]
pub trait BalanceSource: Send + Sync {
    /// Fetch the full balance batch.
    async fn fetch_balances(&self) -> Result<Vec<AccountBalance>, SourceError>;

    /// Human-readable origin (URL or path) for logs.
    fn describe(&self) -> String;
}
