//! HTTP seam between the fetcher and the network.

use async_trait::async_trait;
use serde_json::Value;
use std::time::Duration;
use thiserror::Error;

/// Why a single source attempt produced nothing.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("network failure: {0}")]
    Network(String),

    #[error("non-success status: {0}")]
    BadStatus(u16),

    #[error("malformed data: {0}")]
    MalformedData(String),
}

/// Fetches a URL and decodes the body as JSON.
#[async_trait]
pub trait HttpGetter: Send + Sync {
    async fn get_json(&self, url: &str) -> Result<Value, FetchError>;
}

/// `HttpGetter` backed by a shared reqwest client.
#[derive(Clone)]
pub struct ReqwestGetter {
    client: reqwest::Client,
}

impl ReqwestGetter {
    /// Create a new getter. Without `timeout_sec` reqwest's default applies.
    pub fn new(timeout_sec: Option<u64>) -> anyhow::Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(secs) = timeout_sec {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        Ok(Self {
            client: builder.build()?,
        })
    }
}

#[async_trait]
impl HttpGetter for ReqwestGetter {
    async fn get_json(&self, url: &str) -> Result<Value, FetchError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        if !response.status().is_success() {
            return Err(FetchError::BadStatus(response.status().as_u16()));
        }

        response
            .json()
            .await
            .map_err(|e| FetchError::MalformedData(e.to_string()))
    }
}
