//! Name Resolution bindings.

use serde_json::Value;

use super::TranslatorClient;
use crate::error::ClientResult;
use crate::models::LookupNameInput;

impl TranslatorClient {
    /// Resolve free text to candidate CURIEs. Returns the match list verbatim.
    ///
    /// # Errors
    ///
    /// Returns error on API failure.
    pub async fn lookup_name(&self, input: &LookupNameInput) -> ClientResult<Value> {
        let url = self.config.name_lookup_url();
        let params = lookup_params(input);

        self.get_json(&url, &params).await
    }
}

/// Build `/lookup` query parameters.
///
/// `biolink_type` is a single comma-joined value. Prefix and taxon filters
/// are pipe-joined, as the service documents. Empty filters are omitted.
#[must_use]
pub fn lookup_params(input: &LookupNameInput) -> Vec<(String, String)> {
    let mut params = vec![
        ("string".to_string(), input.string.clone()),
        ("autocomplete".to_string(), input.autocomplete.to_string()),
        ("highlighting".to_string(), input.highlighting.to_string()),
        ("offset".to_string(), input.offset.to_string()),
        ("limit".to_string(), input.limit.to_string()),
    ];

    let joined = [
        ("biolink_type", &input.biolink_type, ","),
        ("only_prefixes", &input.only_prefixes, "|"),
        ("exclude_prefixes", &input.exclude_prefixes, "|"),
        ("only_taxa", &input.only_taxa, "|"),
    ];

    for (key, values, sep) in joined {
        if let Some(values) = values.as_ref().filter(|v| !v.is_empty()) {
            params.push((key.to_string(), values.join(sep)));
        }
    }

    params
}
