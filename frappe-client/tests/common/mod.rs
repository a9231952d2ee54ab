//! 共享测试工具和辅助函数

#![allow(dead_code)]

use std::env;
use std::sync::Arc;

use frappe_client::{ClientOptions, FrappeApi, FrappeClient, ItemId, PaginationParams};

/// 跳过测试的宏（当环境变量缺失时）
#[macro_export]
macro_rules! skip_if_no_backend {
    ($($var:expr),+) => {
        $(
            if std::env::var($var).is_err() {
                eprintln!("跳过测试: 缺少环境变量 {}", $var);
                return;
            }
        )+
    };
}

/// 断言 `Option` 为 `Some`，并解包返回内部值（失败则直接让测试失败）。
#[macro_export]
macro_rules! require_some {
    ($expr:expr $(,)?) => {{
        let opt = $expr;
        assert!(opt.is_some(), "expected Some(..), got None");
        let Some(val) = opt else {
            return;
        };
        val
    }};
    ($expr:expr, $($msg:tt)+) => {{
        let opt = $expr;
        assert!(opt.is_some(), "{}", format_args!($($msg)+));
        let Some(val) = opt else {
            return;
        };
        val
    }};
}

/// 断言 `Result` 为 `Ok`，并解包返回内部值（失败则直接让测试失败）。
#[macro_export]
macro_rules! require_ok {
    ($expr:expr $(,)?) => {{
        let res = $expr;
        assert!(res.is_ok(), "expected Ok(..), got {res:?}");
        let Ok(val) = res else {
            return;
        };
        val
    }};
}

/// 测试上下文 - 封装客户端和测试用户
pub struct TestContext {
    pub api: Arc<dyn FrappeApi>,
    pub user: String,
}

impl TestContext {
    /// 从 `FRAPPE_BASE_URL` / `FRAPPE_TEST_USER` 创建
    pub fn from_env() -> Option<Self> {
        let base_url = env::var("FRAPPE_BASE_URL").ok()?;
        let user = env::var("FRAPPE_TEST_USER").ok()?;

        let mut options = ClientOptions::new(base_url);
        options.csrf_token = env::var("FRAPPE_CSRF_TOKEN").ok();
        let client = FrappeClient::new(options).ok()?;

        Some(Self {
            api: Arc::new(client),
            user,
        })
    }

    /// 当前用户仍然安装着的物品
    pub async fn installed_ids(&self) -> Option<Vec<ItemId>> {
        let response = self
            .api
            .list_user_items(&self.user, &PaginationParams::default())
            .await
            .ok()?;
        Some(
            response
                .items
                .into_iter()
                .filter(|stub| stub.is_installed())
                .map(|stub| stub.external_id)
                .collect(),
        )
    }
}
