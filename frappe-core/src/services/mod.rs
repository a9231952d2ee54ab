//! 业务逻辑服务层

mod item_list_service;
mod user_items_controller;
mod user_service;

pub use item_list_service::ItemListService;
pub use user_items_controller::{MutationOutcome, UserItemsController};
pub use user_service::UserService;

use std::sync::Arc;

use frappe_client::{ClientError, FrappeApi, FrappeClient};

use crate::config::ClientConfig;
use crate::error::CoreResult;

/// 服务上下文 - 持有所有依赖
///
/// 平台层创建一次，所有服务共享。
pub struct ServiceContext {
    /// 后端 API
    pub api: Arc<dyn FrappeApi>,
    /// 客户端配置（只读）
    pub config: Arc<ClientConfig>,
}

impl ServiceContext {
    /// 创建服务上下文
    #[must_use]
    pub fn new(api: Arc<dyn FrappeApi>, config: Arc<ClientConfig>) -> Self {
        Self { api, config }
    }

    /// 校验配置并创建基于 HTTP 的上下文
    pub fn connect(config: ClientConfig) -> CoreResult<Self> {
        config.validate()?;
        let client = FrappeClient::new(config.to_client_options())?;
        log::info!("Using FRAPPE backend {}", client.base_url());
        Ok(Self::new(Arc::new(client), Arc::new(config)))
    }
}

/// 按 `is_expected()` 选择日志级别
pub(crate) fn log_client_error(context: &str, err: &ClientError) {
    if err.is_expected() {
        log::warn!("{context}: {err}");
    } else {
        log::error!("{context}: {err}");
    }
}
