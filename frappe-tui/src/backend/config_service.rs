//! 配置服务
//!
//! 配置文件为 JSON，默认位于 `<config_dir>/frappe-tui/config.json`。
//! 客户端相关的字段与 `ClientConfig` 相同，平铺在顶层：
//!
//! ```json
//! {
//!   "theme": "dark",
//!   "locale": "en-US",
//!   "base_url": "http://localhost:8000/api/v2",
//!   "render_order": "request"
//! }
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use frappe_core::ClientConfig;
use serde::{Deserialize, Serialize};

use crate::view::theme::Theme;

/// 默认后端地址
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000/api/v2";
/// 用户列表每页条数
pub const DEFAULT_USERS_PAGE_SIZE: u32 = 20;

/// 应用配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub theme: Theme,
    /// 物品名称 / 描述的首选语言
    pub locale: String,
    pub users_page_size: u32,
    /// 日志文件；`None` 使用数据目录下的默认位置
    pub log_file: Option<PathBuf>,
    #[serde(flatten)]
    pub client: ClientConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            theme: Theme::Dark,
            locale: "en-US".to_string(),
            users_page_size: DEFAULT_USERS_PAGE_SIZE,
            log_file: None,
            client: ClientConfig::new(DEFAULT_BASE_URL),
        }
    }
}

/// 配置服务 trait
pub trait ConfigService: Send + Sync {
    /// 加载配置
    fn load(&self) -> Result<AppConfig>;

    /// 保存配置
    fn save(&self, config: &AppConfig) -> Result<()>;
}

/// JSON 文件配置服务
pub struct JsonConfigService {
    path: PathBuf,
}

impl JsonConfigService {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// 平台默认位置的配置文件
    pub fn default_location() -> Result<Self> {
        let dir = dirs::config_dir().context("cannot determine the config directory")?;
        Ok(Self::new(dir.join("frappe-tui").join("config.json")))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ConfigService for JsonConfigService {
    /// 文件不存在时返回默认配置
    fn load(&self) -> Result<AppConfig> {
        if !self.path.exists() {
            log::info!("No config at {}, using defaults", self.path.display());
            return Ok(AppConfig::default());
        }
        let content = fs::read_to_string(&self.path)
            .with_context(|| format!("reading {}", self.path.display()))?;
        let config = serde_json::from_str(&content)
            .with_context(|| format!("parsing {}", self.path.display()))?;
        Ok(config)
    }

    fn save(&self, config: &AppConfig) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
        let content = serde_json::to_string_pretty(config)?;
        fs::write(&self.path, content).with_context(|| format!("writing {}", self.path.display()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use frappe_core::RenderOrder;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("frappe-tui-test-{}-{name}", std::process::id()))
            .join("config.json")
    }

    #[test]
    fn missing_file_yields_defaults() {
        let service = JsonConfigService::new(temp_path("missing"));
        let config = service.load().unwrap();
        assert_eq!(config.client.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.client.page_size, 4);
        assert_eq!(config.users_page_size, DEFAULT_USERS_PAGE_SIZE);
    }

    #[test]
    fn client_fields_are_flattened() {
        let config: AppConfig = serde_json::from_str(
            r#"{"theme": "light", "base_url": "http://frappe:8000/api/v2", "render_order": "request"}"#,
        )
        .unwrap();
        assert!(matches!(config.theme, Theme::Light));
        assert_eq!(config.client.base_url, "http://frappe:8000/api/v2");
        assert_eq!(config.client.render_order, RenderOrder::Request);
        assert_eq!(config.locale, "en-US");
    }

    #[test]
    fn save_then_load() {
        let path = temp_path("save");
        let service = JsonConfigService::new(&path);
        let mut config = AppConfig::default();
        config.locale = "pt-PT".to_string();
        config.client.hide_removed = false;

        service.save(&config).unwrap();
        let loaded = service.load().unwrap();
        assert_eq!(loaded.locale, "pt-PT");
        assert!(!loaded.client.hide_removed);

        let _ = fs::remove_dir_all(path.parent().unwrap());
    }
}
