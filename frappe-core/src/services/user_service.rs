//! 用户列表服务

use std::sync::Arc;

use frappe_client::{PaginationParams, User};

use crate::error::CoreResult;
use crate::services::{log_client_error, ServiceContext};

/// 用户列表服务
pub struct UserService {
    ctx: Arc<ServiceContext>,
}

impl UserService {
    #[must_use]
    pub fn new(ctx: Arc<ServiceContext>) -> Self {
        Self { ctx }
    }

    /// 获取第 `page` 页（从 0 开始）的用户
    pub async fn list_users(&self, page: u32, page_size: u32) -> CoreResult<Vec<User>> {
        let params = PaginationParams::new(page_size, page.saturating_mul(page_size));
        self.ctx.api.list_users(&params).await.map_err(|e| {
            log_client_error("Failed to list users", &e);
            e.into()
        })
    }
}
