//! HTTP price feed client.
//!
//! Fetches the whole feed document (a JSON array of observations) in one
//! request. There is no retry: one call, one batch.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client as HttpClient;
use tracing::{debug, warn};
use url::Url;

use crate::domain::PriceObservation;
use crate::error::{Result, SourceError};
use crate::infrastructure::config::settings::PricesConfig;
use crate::port::PriceSource;

/// Price source backed by a JSON document served over HTTP.
pub struct HttpPriceSource {
    http: HttpClient,
    url: Url,
}

impl HttpPriceSource {
    /// Create a client from the `[prices]` config section.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured URL does not parse.
    pub fn from_config(config: &PricesConfig) -> Result<Self> {
        let url = Url::parse(&config.url)?;
        let http = HttpClient::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .unwrap_or_else(|err| {
                warn!(error = %err, "Failed to build HTTP client, using defaults");
                HttpClient::new()
            });
        Ok(Self { http, url })
    }

    /// The feed URL.
    #[must_use]
    pub fn url(&self) -> &Url {
        &self.url
    }
}

#[async_trait]
impl PriceSource for HttpPriceSource {
    async fn fetch_observations(&self) -> std::result::Result<Vec<PriceObservation>, SourceError> {
        let url = self.url.as_str();
        debug!(url, "Fetching price feed");

        let response = self
            .http
            .get(self.url.clone())
            .send()
            .await
            .map_err(|source| SourceError::Http {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.text().await.map_err(|source| SourceError::Http {
            url: url.to_string(),
            source,
        })?;

        let observations: Vec<PriceObservation> =
            serde_json::from_str(&body).map_err(|source| SourceError::Decode {
                origin: url.to_string(),
                source,
            })?;

        debug!(url, count = observations.len(), "Fetched price feed");
        Ok(observations)
    }

    fn describe(&self) -> String {
        self.url.to_string()
    }
}
