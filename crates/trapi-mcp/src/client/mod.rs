//! Translator services API client.
//!
//! Provides an async HTTP client with:
//! - Connection pooling via reqwest
//! - A bounded per-request timeout
//! - Request logging middleware
//!
//! No retries and no cache: one tool call is one upstream request, and an
//! upstream failure is returned to the caller as-is.

mod ars;
mod middleware;
mod name_resolution;
mod node_normalization;

use reqwest::Client;
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use serde_json::Value;

use crate::config::Config;
use crate::error::{ClientError, ClientResult};

pub use middleware::RequestLogging;
pub use name_resolution::lookup_params;
pub use node_normalization::normalize_params;

/// Client for the ARS, Name Resolution and Node Normalization services.
///
/// Holds no mutable state, so a single instance can be shared across
/// concurrent tool calls.
#[derive(Clone)]
pub struct TranslatorClient {
    /// HTTP client with middleware.
    client: ClientWithMiddleware,

    /// Endpoint configuration.
    config: Config,
}

impl TranslatorClient {
    /// Create a new client with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns error if HTTP client initialization fails.
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let mut headers = reqwest::header::HeaderMap::new();
        headers.insert(reqwest::header::ACCEPT, "application/json".parse()?);

        let client = Client::builder()
            .default_headers(headers)
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .timeout(config.request_timeout)
            .connect_timeout(config.connect_timeout)
            .gzip(true)
            .build()?;

        let client = ClientBuilder::new(client).with(RequestLogging).build();

        Ok(Self { client, config })
    }

    /// Make a GET request and return the JSON body.
    async fn get_json(&self, url: &str, params: &[(String, String)]) -> ClientResult<Value> {
        let response = self.client.get(url).query(params).send().await?;
        Self::read_json(response).await
    }

    /// Make a POST request with a JSON body and return the JSON response.
    async fn post_json(&self, url: &str, body: &Value) -> ClientResult<Value> {
        let body_str = serde_json::to_string(body)?;

        let response = self
            .client
            .post(url)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .body(body_str)
            .send()
            .await?;

        Self::read_json(response).await
    }

    /// Map non-success statuses to errors, otherwise parse the body.
    async fn read_json(response: reqwest::Response) -> ClientResult<Value> {
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ClientError::upstream_http(status.as_u16(), body));
        }

        let bytes = response.bytes().await?;
        serde_json::from_slice(&bytes).map_err(ClientError::from)
    }
}

impl std::fmt::Debug for TranslatorClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TranslatorClient")
            .field("ars_api_url", &self.config.ars_api_url)
            .field("request_timeout", &self.config.request_timeout)
            .finish()
    }
}
