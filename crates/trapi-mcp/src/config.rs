//! Configuration for the TRAPI MCP server.

use std::time::Duration;

use anyhow::Context;

/// Upstream service constants.
pub mod api {
    use std::time::Duration;

    /// ARS (Automated Relay System) API base.
    pub const ARS_API: &str = "https://ars-prod.transltr.io/ars/api";

    /// Name Resolution service base.
    pub const NAME_RESOLUTION_API: &str = "https://name-resolution-sri.renci.org";

    /// Node Normalization service base (versioned).
    pub const NODE_NORMALIZATION_API: &str = "https://nodenormalization-sri.renci.org/1.5";

    /// Per-request timeout. ARS submissions return quickly; results are polled.
    pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

    /// Connection timeout.
    pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);
}

/// Environment variable names read by [`Config::from_env`].
pub mod env {
    pub const ARS_URL: &str = "TRAPI_ARS_URL";
    pub const NAME_RESOLUTION_URL: &str = "TRAPI_NAME_RESOLUTION_URL";
    pub const NODE_NORMALIZATION_URL: &str = "TRAPI_NODE_NORMALIZATION_URL";
    pub const REQUEST_TIMEOUT_SECS: &str = "TRAPI_REQUEST_TIMEOUT_SECS";
}

/// Server configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// ARS API base URL (submit and messages live below it).
    pub ars_api_url: String,

    /// Name Resolution base URL.
    pub name_resolution_url: String,

    /// Node Normalization base URL, including the API version segment.
    pub node_normalization_url: String,

    /// Request timeout.
    pub request_timeout: Duration,

    /// Connection timeout.
    pub connect_timeout: Duration,
}

impl Config {
    /// Create a configuration pointing at the production Translator services.
    #[must_use]
    pub fn new() -> Self {
        Self {
            ars_api_url: api::ARS_API.to_string(),
            name_resolution_url: api::NAME_RESOLUTION_API.to_string(),
            node_normalization_url: api::NODE_NORMALIZATION_API.to_string(),
            request_timeout: api::REQUEST_TIMEOUT,
            connect_timeout: api::CONNECT_TIMEOUT,
        }
    }

    /// Create a test configuration with every service behind one mock server.
    #[must_use]
    pub fn for_testing(base_url: &str) -> Self {
        Self {
            ars_api_url: format!("{}/ars/api", base_url),
            name_resolution_url: base_url.to_string(),
            node_normalization_url: format!("{}/1.5", base_url),
            request_timeout: Duration::from_secs(5),
            connect_timeout: Duration::from_secs(2),
        }
    }

    /// Create configuration from environment variables.
    ///
    /// Unset variables fall back to the production defaults.
    ///
    /// # Errors
    ///
    /// Returns error if a variable is set to an invalid URL or timeout.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from any key/value source, keyed by the [`env`] names.
    ///
    /// # Errors
    ///
    /// Returns error if a value is an invalid URL or timeout.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let mut config = Self::new();

        if let Some(url) = lookup(env::ARS_URL) {
            config.ars_api_url = url;
        }
        if let Some(url) = lookup(env::NAME_RESOLUTION_URL) {
            config.name_resolution_url = url;
        }
        if let Some(url) = lookup(env::NODE_NORMALIZATION_URL) {
            config.node_normalization_url = url;
        }
        if let Some(secs) = lookup(env::REQUEST_TIMEOUT_SECS) {
            let secs: u64 = secs.trim().parse().with_context(|| {
                format!("{} must be an integer, got {secs:?}", env::REQUEST_TIMEOUT_SECS)
            })?;
            config = config.with_request_timeout(Duration::from_secs(secs));
        }

        config.validate()?;
        Ok(config)
    }

    /// Override the per-request timeout.
    #[must_use]
    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    /// Check that every base URL parses and the timeout is non-zero.
    ///
    /// # Errors
    ///
    /// Returns error naming the first invalid setting.
    pub fn validate(&self) -> anyhow::Result<()> {
        for (name, value) in [
            ("ARS URL", &self.ars_api_url),
            ("name resolution URL", &self.name_resolution_url),
            ("node normalization URL", &self.node_normalization_url),
        ] {
            url::Url::parse(value).with_context(|| format!("invalid {name}: {value:?}"))?;
        }

        anyhow::ensure!(!self.request_timeout.is_zero(), "request timeout must be non-zero");
        Ok(())
    }

    /// ARS submission endpoint.
    #[must_use]
    pub fn ars_submit_url(&self) -> String {
        format!("{}/submit", trim_slash(&self.ars_api_url))
    }

    /// ARS message endpoint for a job. Serves both status and results.
    ///
    /// `pk` always lands as one path segment under `messages/`.
    ///
    /// # Errors
    ///
    /// Returns error if the ARS base is not a hierarchical URL.
    pub fn ars_message_url(&self, pk: &str) -> Result<url::Url, url::ParseError> {
        let mut url = url::Url::parse(&self.ars_api_url)?;
        url.path_segments_mut()
            .map_err(|()| url::ParseError::RelativeUrlWithCannotBeABaseBase)?
            .pop_if_empty()
            .push("messages")
            .push(pk);
        Ok(url)
    }

    /// Name Resolution lookup endpoint.
    #[must_use]
    pub fn name_lookup_url(&self) -> String {
        format!("{}/lookup", trim_slash(&self.name_resolution_url))
    }

    /// Node Normalization endpoint.
    #[must_use]
    pub fn normalized_nodes_url(&self) -> String {
        format!("{}/get_normalized_nodes", trim_slash(&self.node_normalization_url))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

fn trim_slash(url: &str) -> &str {
    url.trim_end_matches('/')
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    #[test]
    fn test_default_endpoints() {
        let config = Config::default();
        assert_eq!(config.ars_submit_url(), "https://ars-prod.transltr.io/ars/api/submit");
        assert_eq!(
            config.ars_message_url("abc-123").unwrap().as_str(),
            "https://ars-prod.transltr.io/ars/api/messages/abc-123"
        );
        assert_eq!(config.name_lookup_url(), "https://name-resolution-sri.renci.org/lookup");
        assert_eq!(
            config.normalized_nodes_url(),
            "https://nodenormalization-sri.renci.org/1.5/get_normalized_nodes"
        );
    }

    #[test]
    fn test_default_timeout_is_bounded() {
        assert_eq!(Config::default().request_timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_trailing_slash_is_ignored() {
        let mut config = Config::default();
        config.ars_api_url = "http://localhost:8080/ars/api/".to_string();
        assert_eq!(config.ars_submit_url(), "http://localhost:8080/ars/api/submit");
        assert_eq!(
            config.ars_message_url("abc").unwrap().as_str(),
            "http://localhost:8080/ars/api/messages/abc"
        );
    }

    #[test]
    fn test_message_url_keeps_pk_in_one_segment() {
        let config = Config::default();
        let base = "https://ars-prod.transltr.io/ars/api/messages";

        assert_eq!(
            config.ars_message_url("../submit").unwrap().as_str(),
            format!("{base}/..%2Fsubmit")
        );
        assert_eq!(config.ars_message_url("a?b").unwrap().as_str(), format!("{base}/a%3Fb"));
        assert_eq!(config.ars_message_url("x#frag").unwrap().as_str(), format!("{base}/x%23frag"));
    }

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> =
            vars.iter().map(|(k, v)| ((*k).to_string(), (*v).to_string())).collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn test_from_lookup_defaults_when_unset() {
        let config = Config::from_lookup(|_| None).unwrap();
        assert_eq!(config.ars_api_url, api::ARS_API);
        assert_eq!(config.request_timeout, api::REQUEST_TIMEOUT);
    }

    #[test]
    fn test_from_lookup_reads_overrides() {
        let config = Config::from_lookup(lookup_from(&[
            (env::ARS_URL, "http://localhost:8080/ars/api"),
            (env::NAME_RESOLUTION_URL, "http://localhost:8081"),
            (env::NODE_NORMALIZATION_URL, "http://localhost:8082/1.5"),
            (env::REQUEST_TIMEOUT_SECS, " 45 "),
        ]))
        .unwrap();

        assert_eq!(config.ars_submit_url(), "http://localhost:8080/ars/api/submit");
        assert_eq!(config.name_lookup_url(), "http://localhost:8081/lookup");
        assert_eq!(config.normalized_nodes_url(), "http://localhost:8082/1.5/get_normalized_nodes");
        assert_eq!(config.request_timeout, Duration::from_secs(45));
    }

    #[test]
    fn test_from_lookup_rejects_zero_timeout() {
        let err = Config::from_lookup(lookup_from(&[(env::REQUEST_TIMEOUT_SECS, "0")]))
            .unwrap_err();
        assert!(err.to_string().contains("non-zero"));
    }

    #[test]
    fn test_from_lookup_rejects_non_numeric_timeout() {
        let err = Config::from_lookup(lookup_from(&[(env::REQUEST_TIMEOUT_SECS, "soon")]))
            .unwrap_err();
        assert!(err.to_string().contains(env::REQUEST_TIMEOUT_SECS));
    }

    #[test]
    fn test_from_lookup_rejects_bad_url() {
        let err = Config::from_lookup(lookup_from(&[(env::ARS_URL, "not a url")])).unwrap_err();
        assert!(err.to_string().contains("ARS URL"));
    }

    #[test]
    fn test_validate_rejects_bad_url() {
        let mut config = Config::default();
        config.name_resolution_url = "not a url".to_string();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("name resolution URL"));
    }

    #[test]
    fn test_validate_rejects_zero_timeout() {
        let config = Config::default().with_request_timeout(Duration::ZERO);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_for_testing_routes_to_mock() {
        let config = Config::for_testing("http://127.0.0.1:9999");
        assert_eq!(config.ars_submit_url(), "http://127.0.0.1:9999/ars/api/submit");
        assert_eq!(
            config.normalized_nodes_url(),
            "http://127.0.0.1:9999/1.5/get_normalized_nodes"
        );
        assert!(config.validate().is_ok());
    }
}
