//! Direct HTTP transport built on reqwest.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;

use super::{Method, Transport};
use crate::error::{GardenError, Result};

/// Default base URL of the local planting API.
pub const DEFAULT_API_URL: &str = "http://localhost:5000/api";

/// Default per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Transport that talks to the planting API over HTTP.
#[derive(Clone, Debug)]
pub struct HttpTransport {
    client: Client,
    base_url: String,
}

impl HttpTransport {
    /// Create a transport for `base_url` with a per-request timeout.
    ///
    /// # Errors
    ///
    /// Returns `GardenError::Configuration` if the HTTP client cannot be
    /// constructed (e.g. TLS backend initialisation failure).
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| GardenError::Configuration {
                message: format!("Failed to build HTTP client: {e}"),
            })?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}/{}", self.base_url, endpoint.trim_start_matches('/'))
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn call(&self, endpoint: &str, method: Method, body: Option<Value>) -> Result<Value> {
        let url = self.url(endpoint);
        log::debug!("{} {url}", method.as_str());

        let mut request = match method {
            Method::Get => self.client.get(&url),
            Method::Post => self.client.post(&url),
        };
        if let Some(body) = body {
            request = request.json(&body);
        }

        let response = request
            .send()
            .await
            .map_err(|e| GardenError::data_fetch(format!("Request to {url} failed: {e}")))?;

        // The API answers errors with a JSON envelope and a 4xx status, so the
        // body is decoded before the status is considered.
        let status = response.status();
        match response.json::<Value>().await {
            Ok(value) => Ok(value),
            Err(_) if !status.is_success() => Err(GardenError::data_fetch(format!(
                "API error: {status} from {url}"
            ))),
            Err(e) => Err(GardenError::data_fetch(format!(
                "Failed to parse response from {url}: {e}"
            ))),
        }
    }
}
