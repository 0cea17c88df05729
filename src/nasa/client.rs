use crate::config::NasaApiConfig;
use crate::error::Error;
use async_trait::async_trait;
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

/// Upstream API seam, mockable in tests.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait NasaApi: Send + Sync {
    /// Issue `GET {base}{path}` with the given query pairs and return the
    /// parsed JSON body.
    async fn get_json(&self, path: &str, query: &[(String, String)]) -> Result<Value, Error>;
}

/// HTTP client for the NASA Image and Video Library API.
///
/// Each call builds a scoped `reqwest::Client` for that one request; there
/// is no connection reuse or shared state between invocations.
pub struct NasaClient {
    base_url: String,
    timeout: Duration,
}

impl NasaClient {
    pub fn new(config: &NasaApiConfig) -> Self {
        Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            timeout: Duration::from_secs(config.timeout_seconds),
        }
    }
}

#[async_trait]
impl NasaApi for NasaClient {
    async fn get_json(&self, path: &str, query: &[(String, String)]) -> Result<Value, Error> {
        let url = format!("{}{}", self.base_url, path);
        debug!(%url, params = query.len(), "requesting NASA API");

        let client = reqwest::Client::builder().timeout(self.timeout).build()?;
        let response = client.get(&url).query(query).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::ApiStatus {
                status: status.as_u16(),
                body,
            });
        }

        Ok(response.json().await?)
    }
}
