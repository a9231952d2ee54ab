//! HTTP implementation of [`FrappeApi`](crate::FrappeApi)

mod api;
mod http;

use std::time::Duration;

use reqwest::Client;
use url::Url;

use crate::error::{ClientError, Result};

/// Default connect timeout (seconds)
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

/// Construction options of [`FrappeClient`].
#[derive(Debug, Clone)]
pub struct ClientOptions {
    /// Backend base URL, e.g. `http://localhost:8000/api/v2`.
    pub base_url: String,
    /// Sent as `X-CSRFToken` on non-safe methods.
    pub csrf_token: Option<String>,
    /// Extra attempts for transient failures. `0` sends every request once.
    pub max_retries: u32,
    /// Whole-request timeout. `None` waits indefinitely.
    pub request_timeout: Option<Duration>,
}

impl ClientOptions {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            csrf_token: None,
            max_retries: 0,
            request_timeout: None,
        }
    }
}

/// FRAPPE backend client over HTTP.
pub struct FrappeClient {
    pub(crate) client: Client,
    pub(crate) base: Url,
    pub(crate) csrf_token: Option<String>,
    pub(crate) max_retries: u32,
}

impl FrappeClient {
    pub fn new(options: ClientOptions) -> Result<Self> {
        let base = Url::parse(&options.base_url).map_err(|e| ClientError::InvalidUrl {
            url: options.base_url.clone(),
            detail: e.to_string(),
        })?;
        if base.cannot_be_a_base() {
            return Err(ClientError::InvalidUrl {
                url: options.base_url,
                detail: "URL cannot be used as a base".to_string(),
            });
        }

        Ok(Self {
            client: create_http_client(options.request_timeout, base.as_str())?,
            base,
            csrf_token: options.csrf_token,
            max_retries: options.max_retries,
        })
    }
}

/// Create the reqwest client with the configured timeouts.
fn create_http_client(request_timeout: Option<Duration>, backend: &str) -> Result<Client> {
    let mut builder =
        Client::builder().connect_timeout(Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS));
    if let Some(timeout) = request_timeout {
        builder = builder.timeout(timeout);
    }
    builder.build().map_err(|e| ClientError::NetworkError {
        backend: backend.to_string(),
        detail: format!("Failed to create HTTP client: {e}"),
    })
}
