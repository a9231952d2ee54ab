use serde::{Deserialize, Serialize};

/// Unified error type for all FRAPPE API operations.
///
/// Each variant carries a `backend` field naming the base URL (or host) that
/// produced the error, plus variant-specific context. All variants are
/// serializable for structured error reporting.
///
/// # Retryable Errors
///
/// - [`NetworkError`](Self::NetworkError) — network connectivity issues
/// - [`Timeout`](Self::Timeout) — request timed out
///
/// Retries only happen when the client was built with `max_retries > 0`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "code")]
pub enum ClientError {
    /// A network-level error occurred (DNS resolution failure, connection refused, etc.).
    NetworkError {
        /// Backend that produced the error.
        backend: String,
        /// Error details.
        detail: String,
    },

    /// The HTTP request timed out.
    Timeout {
        /// Backend that produced the error.
        backend: String,
        /// Error details.
        detail: String,
    },

    /// The backend answered with a non-success status code.
    ///
    /// `body` is the raw response text, kept verbatim so callers can show it.
    HttpStatus {
        /// Backend that produced the error.
        backend: String,
        /// HTTP status code.
        status: u16,
        /// Raw response body.
        body: String,
    },

    /// The requested user or item does not exist (HTTP 404).
    NotFound {
        /// Backend that produced the error.
        backend: String,
        /// Path that was requested.
        resource: String,
        /// Raw response body, if any.
        raw_message: Option<String>,
    },

    /// Failed to parse the backend's response.
    ParseError {
        /// Backend that produced the error.
        backend: String,
        /// Details about the parse failure.
        detail: String,
    },

    /// A request URL could not be built from the configured base URL.
    InvalidUrl {
        /// Offending URL text.
        url: String,
        /// Parser message.
        detail: String,
    },
}

impl ClientError {
    /// Whether the error is an expected outcome (missing resource, rejected input),
    /// used to pick the log level.
    ///
    /// `true` → log at `warn`, `false` → log at `error`.
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::NotFound { .. } => true,
            Self::HttpStatus { status, .. } => (400..500).contains(status),
            _ => false,
        }
    }

    /// Whether the request may succeed if sent again.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::NetworkError { .. } | Self::Timeout { .. } => true,
            Self::HttpStatus { status, .. } => matches!(status, 502..=504),
            _ => false,
        }
    }

    /// Raw response body carried by the error, if the backend sent one.
    #[must_use]
    pub fn raw_body(&self) -> Option<&str> {
        match self {
            Self::HttpStatus { body, .. } => Some(body),
            Self::NotFound { raw_message, .. } => raw_message.as_deref(),
            _ => None,
        }
    }
}

impl std::fmt::Display for ClientError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NetworkError { backend, detail } => {
                write!(f, "[{backend}] Network error: {detail}")
            }
            Self::Timeout { backend, detail } => {
                write!(f, "[{backend}] Request timeout: {detail}")
            }
            Self::HttpStatus {
                backend, status, ..
            } => {
                write!(f, "[{backend}] HTTP {status}")
            }
            Self::NotFound {
                backend, resource, ..
            } => {
                write!(f, "[{backend}] '{resource}' not found")
            }
            Self::ParseError { backend, detail } => {
                write!(f, "[{backend}] Parse error: {detail}")
            }
            Self::InvalidUrl { url, detail } => {
                write!(f, "Invalid URL '{url}': {detail}")
            }
        }
    }
}

impl std::error::Error for ClientError {}

/// Convenience type alias for `Result<T, ClientError>`.
pub type Result<T> = std::result::Result<T, ClientError>;
