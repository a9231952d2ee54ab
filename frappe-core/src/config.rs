//! Client configuration
//!
//! Built once at startup and shared (`Arc`) by every component.

use std::time::Duration;

use frappe_client::ClientOptions;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{CoreError, CoreResult};

/// Default items per page of the paginator.
pub const DEFAULT_PAGE_SIZE: usize = 4;
/// Default number of recommendations requested.
pub const DEFAULT_RECOMMENDATION_COUNT: u32 = 4;
/// Marketplace app documents used for the icon fallback.
pub const DEFAULT_MARKETPLACE_BASE: &str = "https://marketplace.firefox.com/api/v2/apps/app/";

/// Order of the records of a completed list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RenderOrder {
    /// Order in which the detail responses arrived.
    #[default]
    Arrival,
    /// Order of the ids in the list response.
    Request,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Backend base URL, e.g. `http://localhost:8000/api/v2`.
    pub base_url: String,
    pub page_size: usize,
    pub recommendation_count: u32,
    /// Value of the `items` query of the owned-items request; `None` uses the backend default.
    pub installed_page_items: Option<u32>,
    pub render_order: RenderOrder,
    /// Skip owned items that carry a removal date.
    pub hide_removed: bool,
    pub csrf_token: Option<String>,
    pub max_retries: u32,
    pub request_timeout_secs: Option<u64>,
    /// Prefix of the third-party app document, `<marketplace_base><id>/`.
    /// `None` disables the fallback when a detail has no `details` link.
    pub marketplace_base: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            page_size: DEFAULT_PAGE_SIZE,
            recommendation_count: DEFAULT_RECOMMENDATION_COUNT,
            installed_page_items: None,
            render_order: RenderOrder::default(),
            hide_removed: true,
            csrf_token: None,
            max_retries: 0,
            request_timeout_secs: None,
            marketplace_base: Some(DEFAULT_MARKETPLACE_BASE.to_string()),
        }
    }
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// Check the values that would otherwise fail at request time.
    pub fn validate(&self) -> CoreResult<()> {
        if self.base_url.trim().is_empty() {
            return Err(CoreError::InvalidConfig("base_url is empty".to_string()));
        }
        let url = Url::parse(&self.base_url)
            .map_err(|e| CoreError::InvalidConfig(format!("base_url '{}': {e}", self.base_url)))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(CoreError::InvalidConfig(format!(
                "base_url '{}': scheme must be http or https",
                self.base_url
            )));
        }
        if self.page_size == 0 {
            return Err(CoreError::InvalidConfig(
                "page_size must be at least 1".to_string(),
            ));
        }
        if let Some(base) = &self.marketplace_base {
            Url::parse(base).map_err(|e| {
                CoreError::InvalidConfig(format!("marketplace_base '{base}': {e}"))
            })?;
        }
        Ok(())
    }

    /// Third-party detail URL of `item`, if a marketplace is configured.
    pub fn marketplace_url(&self, item: &str) -> Option<String> {
        self.marketplace_base.as_ref().map(|base| {
            let base = base.trim_end_matches('/');
            format!("{base}/{item}/")
        })
    }

    pub fn to_client_options(&self) -> ClientOptions {
        let mut options = ClientOptions::new(self.base_url.clone());
        options.csrf_token.clone_from(&self.csrf_token);
        options.max_retries = self.max_retries;
        options.request_timeout = self.request_timeout_secs.map(Duration::from_secs);
        options
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = ClientConfig::default();
        assert_eq!(config.page_size, 4);
        assert_eq!(config.recommendation_count, 4);
        assert_eq!(config.render_order, RenderOrder::Arrival);
        assert!(config.hide_removed);
        assert_eq!(config.max_retries, 0);
    }

    #[test]
    fn partial_json_uses_defaults() {
        let config: ClientConfig =
            serde_json::from_str(r#"{"base_url": "http://localhost:8000/api/v2", "render_order": "request"}"#)
                .unwrap();
        assert_eq!(config.render_order, RenderOrder::Request);
        assert_eq!(config.page_size, DEFAULT_PAGE_SIZE);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn validate_rejects_bad_values() {
        assert!(ClientConfig::default().validate().is_err());
        assert!(ClientConfig::new("ftp://host/").validate().is_err());
        assert!(ClientConfig::new("not a url").validate().is_err());

        let mut config = ClientConfig::new("http://localhost/");
        config.page_size = 0;
        assert!(matches!(config.validate(), Err(CoreError::InvalidConfig(_))));
    }

    #[test]
    fn marketplace_url_joins_id() {
        let config = ClientConfig::new("http://localhost/");
        assert_eq!(
            config.marketplace_url("42").as_deref(),
            Some("https://marketplace.firefox.com/api/v2/apps/app/42/")
        );
        let config = ClientConfig {
            marketplace_base: None,
            ..ClientConfig::new("http://localhost/")
        };
        assert!(config.marketplace_url("42").is_none());
    }

    #[test]
    fn client_options_carry_timeout() {
        let config = ClientConfig {
            request_timeout_secs: Some(5),
            csrf_token: Some("t".into()),
            ..ClientConfig::new("http://localhost/")
        };
        let options = config.to_client_options();
        assert_eq!(options.request_timeout, Some(Duration::from_secs(5)));
        assert_eq!(options.csrf_token.as_deref(), Some("t"));
    }
}
