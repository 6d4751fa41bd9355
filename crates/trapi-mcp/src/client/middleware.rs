//! Middleware for the HTTP client.
//!
//! Composed into the `reqwest-middleware` stack in [`super::TranslatorClient::new`].

use std::time::Instant;

use axum::http::Extensions;
use reqwest::{Request, Response};
use reqwest_middleware::{Middleware, Next, Result};

/// Logs every upstream request with its outcome and latency.
#[derive(Debug, Clone, Copy, Default)]
pub struct RequestLogging;

#[async_trait::async_trait]
impl Middleware for RequestLogging {
    async fn handle(
        &self,
        req: Request,
        extensions: &mut Extensions,
        next: Next<'_>,
    ) -> Result<Response> {
        let method = req.method().clone();
        let url = req.url().clone();
        let started = Instant::now();

        let result = next.run(req, extensions).await;
        let elapsed_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);

        match &result {
            Ok(response) if response.status().is_success() => {
                tracing::debug!(
                    %method,
                    %url,
                    status = response.status().as_u16(),
                    elapsed_ms,
                    "Upstream request"
                );
            }
            Ok(response) => {
                tracing::warn!(
                    %method,
                    %url,
                    status = response.status().as_u16(),
                    elapsed_ms,
                    "Upstream returned error status"
                );
            }
            Err(e) => {
                tracing::warn!(%method, %url, error = %e, elapsed_ms, "Upstream request failed");
            }
        }

        result
    }
}
