//! In-memory data sources.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;

use tokenboard::domain::{AccountBalance, PriceObservation};
use tokenboard::error::SourceError;
use tokenboard::port::{BalanceSource, PriceSource};

/// Price source returning a fixed batch, or failing every call.
pub struct StaticPrices {
    observations: Option<Vec<PriceObservation>>,
    calls: AtomicUsize,
}

impl StaticPrices {
    pub fn new(observations: Vec<PriceObservation>) -> Arc<Self> {
        Arc::new(Self {
            observations: Some(observations),
            calls: AtomicUsize::new(0),
        })
    }

    pub fn unavailable() -> Arc<Self> {
        Arc::new(Self {
            observations: None,
            calls: AtomicUsize::new(0),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PriceSource for StaticPrices {
    async fn fetch_observations(&self) -> Result<Vec<PriceObservation>, SourceError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.observations.clone().ok_or_else(|| SourceError::Status {
            url: "memory://prices".to_string(),
            status: 503,
        })
    }

    fn describe(&self) -> String {
        "memory://prices".to_string()
    }
}

/// Balance source returning a fixed batch, or failing every call.
pub struct StaticBalances {
    balances: Option<Vec<AccountBalance>>,
}

impl StaticBalances {
    pub fn new(balances: Vec<AccountBalance>) -> Arc<Self> {
        Arc::new(Self {
            balances: Some(balances),
        })
    }

    pub fn unavailable() -> Arc<Self> {
        Arc::new(Self { balances: None })
    }
}

#[async_trait]
impl BalanceSource for StaticBalances {
    async fn fetch_balances(&self) -> Result<Vec<AccountBalance>, SourceError> {
        self.balances.clone().ok_or_else(|| SourceError::Io {
            path: "memory://balances".to_string(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "no balances"),
        })
    }

    fn describe(&self) -> String {
        "memory://balances".to_string()
    }
}
