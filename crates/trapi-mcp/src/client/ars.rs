//! ARS (Automated Relay System) bindings.
//!
//! Status and results are the same upstream resource, `messages/{pk}`.
//! Callers poll it until `fields.status` leaves `"Running"`.

use serde_json::Value;

use super::TranslatorClient;
use crate::error::ClientResult;

impl TranslatorClient {
    /// Submit a TRAPI message. Returns `{pk, fields}` verbatim.
    ///
    /// # Errors
    ///
    /// Returns error on API failure.
    pub async fn submit_query(&self, query: &Value) -> ClientResult<Value> {
        let url = self.config.ars_submit_url();
        let response = self.post_json(&url, query).await?;

        let pk = response.get("pk").and_then(Value::as_str).unwrap_or_default();
        tracing::info!(pk, "Submitted TRAPI query to ARS");
        Ok(response)
    }

    /// Fetch the message for a job, used for status polling.
    ///
    /// The key is forwarded without validation, as a single percent-encoded
    /// path segment.
    ///
    /// # Errors
    ///
    /// Returns error on API failure, typically 404 for an unknown key.
    pub async fn get_status(&self, pk: &str) -> ClientResult<Value> {
        self.get_message(pk).await
    }

    /// Fetch the message for a job, used once its status is `"Done"`.
    ///
    /// # Errors
    ///
    /// Returns error on API failure, typically 404 for an unknown key.
    pub async fn get_results(&self, pk: &str) -> ClientResult<Value> {
        self.get_message(pk).await
    }

    async fn get_message(&self, pk: &str) -> ClientResult<Value> {
        let url = self.config.ars_message_url(pk)?;
        tracing::debug!(pk, "Fetching ARS message");
        self.get_json(url.as_str(), &[]).await
    }
}
