//! Client binding for the planting/weather HTTP contract.
//!
//! The planner never talks to the network directly. It goes through an
//! [`ApiClient`], which decodes response envelopes, over a [`Transport`],
//! which moves JSON between the client and the service:
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │ GardenPlanner   │───▶│   ApiClient     │───▶│   Transport     │
//! │ (state, ops)    │    │ (envelopes,     │    │ (HttpTransport, │
//! │                 │    │  typed payload) │    │  desktop bridge)│
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! A desktop shell that proxies calls over IPC implements [`Transport`] and
//! gets identical planner behaviour.
//!
//! ## Endpoints
//!
//! | Operation | Request |
//! |-----------|---------|
//! | [`ApiClient::fetch_planting_data`] | `GET planting-data/{region}` |
//! | [`ApiClient::fetch_weather`] | `GET weather/{region}` |
//! | [`ApiClient::fetch_garden`] | `GET garden` |
//! | [`ApiClient::add_garden_entry`] | `POST garden` |

use async_trait::async_trait;
use serde_json::Value;

pub mod client;
pub mod envelope;
pub mod http;

pub use client::ApiClient;
pub use envelope::Envelope;
pub use http::{HttpTransport, DEFAULT_API_URL, DEFAULT_TIMEOUT};

use crate::error::Result;

/// Request method understood by every transport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
        }
    }
}

/// Moves one JSON request/response pair to the planting API.
///
/// `endpoint` is relative to the API root (e.g. `weather/90210`). The returned
/// value is the raw response body; envelope handling happens in
/// [`ApiClient`]. Implementations map connection failures and timeouts to
/// [`crate::GardenError::DataFetch`].
#[async_trait]
pub trait Transport: Send + Sync {
    async fn call(&self, endpoint: &str, method: Method, body: Option<Value>) -> Result<Value>;
}

