//! Unified error type definition

use serde::Serialize;
use thiserror::Error;

// Re-export library error type
pub use frappe_client::ClientError;

/// Core layer error type
#[derive(Error, Debug, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum CoreError {
    /// Install/remove request rejected by the backend.
    ///
    /// `raw_body` is the response text exactly as received, shown to the user verbatim.
    #[error("Mutation failed (HTTP {status})")]
    Mutation { status: u16, raw_body: String },

    /// Configuration could not be used
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Validation error
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// Client error (converting from library)
    #[error("{0}")]
    Client(#[from] ClientError),
}

impl CoreError {
    /// Whether it is expected behavior (user input, resource does not exist, etc.) is used for log classification.
    ///
    /// Level `warn` should be used when returning `true` and level `error` when returning `false`.
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::Mutation { .. } | Self::ValidationError(_) | Self::InvalidConfig(_) => true,
            Self::Client(e) => e.is_expected(),
        }
    }

    /// Raw backend response carried by the error, if any.
    #[must_use]
    pub fn raw_body(&self) -> Option<&str> {
        match self {
            Self::Mutation { raw_body, .. } => Some(raw_body),
            Self::Client(e) => e.raw_body(),
            _ => None,
        }
    }

    /// Turn a failed install/remove call into [`CoreError::Mutation`] when the
    /// backend answered; transport errors stay [`CoreError::Client`].
    pub(crate) fn from_mutation(err: ClientError) -> Self {
        match err {
            ClientError::HttpStatus { status, body, .. } => Self::Mutation {
                status,
                raw_body: body,
            },
            ClientError::NotFound { raw_message, .. } => Self::Mutation {
                status: 404,
                raw_body: raw_message.unwrap_or_default(),
            },
            other => Self::Client(other),
        }
    }
}

/// Core layer Result type alias
pub type CoreResult<T> = std::result::Result<T, CoreError>;
