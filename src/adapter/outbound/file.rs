//! JSON file sources.
//!
//! Both files hold a JSON array: price observations in feed format, or
//! balance rows.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::domain::{AccountBalance, PriceObservation};
use crate::error::SourceError;
use crate::port::{BalanceSource, PriceSource};

async fn read_json_array<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, SourceError> {
    let origin = path.display().to_string();
    let content = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| SourceError::Io {
            path: origin.clone(),
            source,
        })?;
    serde_json::from_str(&content).map_err(|source| SourceError::Decode { origin, source })
}

/// Price observations loaded from a local JSON file.
#[derive(Debug, Clone)]
pub struct JsonFilePriceSource {
    path: PathBuf,
}

impl JsonFilePriceSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl PriceSource for JsonFilePriceSource {
    async fn fetch_observations(&self) -> Result<Vec<PriceObservation>, SourceError> {
        let observations: Vec<PriceObservation> = read_json_array(&self.path).await?;
        debug!(path = %self.path.display(), count = observations.len(), "Loaded price file");
        Ok(observations)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Account balances loaded from a local JSON file.
#[derive(Debug, Clone)]
pub struct JsonFileBalanceSource {
    path: PathBuf,
}

impl JsonFileBalanceSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl BalanceSource for JsonFileBalanceSource {
    async fn fetch_balances(&self) -> Result<Vec<AccountBalance>, SourceError> {
        let balances: Vec<AccountBalance> = read_json_array(&self.path).await?;
        debug!(path = %self.path.display(), count = balances.len(), "Loaded balance file");
        Ok(balances)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
