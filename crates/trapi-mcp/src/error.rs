//! Error types for the TRAPI MCP server.
//!
//! Uses `thiserror` for structured error handling with automatic `From` implementations.

/// Errors from the HTTP client layer.
#[derive(thiserror::Error, Debug)]
pub enum ClientError {
    /// Upstream answered with a non-success status (4xx/5xx).
    #[error("Upstream returned HTTP {status}: {body}")]
    UpstreamHttp {
        /// HTTP status code
        status: u16,
        /// Raw response body
        body: String,
    },

    /// Network-level failure: connection, DNS, TLS or timeout.
    #[error("Upstream transport error: {0}")]
    UpstreamTransport(#[from] reqwest::Error),

    /// Failure raised inside the middleware stack before a response arrived.
    #[error("Middleware error: {0}")]
    Middleware(anyhow::Error),

    /// Success status, but the body was not JSON.
    #[error("Failed to parse response: {0}")]
    Parse(#[from] serde_json::Error),

    /// Request URL could not be built from the configured base.
    #[error("Invalid request URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

impl From<reqwest_middleware::Error> for ClientError {
    fn from(err: reqwest_middleware::Error) -> Self {
        match err {
            reqwest_middleware::Error::Reqwest(e) => Self::UpstreamTransport(e),
            reqwest_middleware::Error::Middleware(e) => Self::Middleware(e),
        }
    }
}

impl ClientError {
    /// Create an upstream HTTP error.
    #[must_use]
    pub fn upstream_http(status: u16, body: impl Into<String>) -> Self {
        Self::UpstreamHttp { status, body: body.into() }
    }

    /// HTTP status carried by this error, if the upstream answered at all.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::UpstreamHttp { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Returns true if the request never got a response.
    #[must_use]
    pub const fn is_transport(&self) -> bool {
        matches!(self, Self::UpstreamTransport(_) | Self::Middleware(_))
    }

    /// Returns true if the request hit the configured timeout.
    #[must_use]
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::UpstreamTransport(e) if e.is_timeout())
    }
}

/// Errors from MCP tool execution.
#[derive(thiserror::Error, Debug)]
pub enum ToolError {
    /// Error from the API client
    #[error("API error: {0}")]
    Client(#[from] ClientError),

    /// Caller-supplied TRAPI message lacks a required key
    #[error("Invalid query: missing '{missing}'")]
    InvalidQuery {
        /// Dotted path of the missing key
        missing: String,
    },

    /// Input validation failed
    #[error("Validation error: {message}")]
    Validation {
        /// Field that failed validation
        field: String,
        /// Validation error message
        message: String,
    },

    /// Tool arguments did not match the expected shape
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ToolError {
    /// Create an invalid query error.
    #[must_use]
    pub fn invalid_query(missing: impl Into<String>) -> Self {
        Self::InvalidQuery { missing: missing.into() }
    }

    /// Create a validation error.
    #[must_use]
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation { field: field.into(), message: message.into() }
    }

    /// Convert to a user-friendly error message for MCP response.
    #[must_use]
    pub fn to_user_message(&self) -> String {
        match self {
            Self::Client(ClientError::UpstreamHttp { status: 404, body }) => {
                format!("Not found upstream (HTTP 404): {body}. Check the identifier is correct.")
            }
            Self::Client(err) if err.is_timeout() => {
                "Upstream service timed out. The request may be retried later.".to_string()
            }
            Self::InvalidQuery { missing } => {
                format!("Invalid TRAPI query: required key '{missing}' is missing")
            }
            Self::Validation { field, message } => {
                format!("Invalid input for '{field}': {message}")
            }
            _ => self.to_string(),
        }
    }
}

/// Result type alias for client operations.
pub type ClientResult<T> = Result<T, ClientError>;

/// Result type alias for tool operations.
pub type ToolResult<T> = Result<T, ToolError>;
