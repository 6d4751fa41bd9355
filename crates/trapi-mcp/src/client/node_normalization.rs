//! Node Normalization bindings.

use serde_json::Value;

use super::TranslatorClient;
use crate::error::ClientResult;
use crate::models::NormalizeNodesInput;

impl TranslatorClient {
    /// Normalize CURIEs. Returns the CURIE → result map verbatim; unknown
    /// CURIEs map to `null`.
    ///
    /// # Errors
    ///
    /// Returns error on API failure.
    pub async fn normalize_nodes(&self, input: &NormalizeNodesInput) -> ClientResult<Value> {
        let url = self.config.normalized_nodes_url();
        let params = normalize_params(input);

        tracing::debug!(curies = input.curies.len(), "Normalizing nodes");
        self.get_json(&url, &params).await
    }
}

/// Build `/get_normalized_nodes` query parameters.
///
/// Each CURIE is its own repeated `curie` parameter, never comma-joined.
#[must_use]
pub fn normalize_params(input: &NormalizeNodesInput) -> Vec<(String, String)> {
    let mut params: Vec<(String, String)> =
        input.curies.iter().map(|c| ("curie".to_string(), c.clone())).collect();

    params.extend([
        ("conflate".to_string(), input.conflate.to_string()),
        ("drug_chemical_conflate".to_string(), input.drug_chemical_conflate.to_string()),
        ("description".to_string(), input.description.to_string()),
        ("individual_types".to_string(), input.individual_types.to_string()),
    ]);

    params
}
