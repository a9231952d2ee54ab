//! 测试辅助模块
//!
//! 提供内存中的 `FrappeApi` mock 和便捷的测试工厂方法。

use std::collections::{BTreeMap, HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use frappe_client::{
    ClientError, FrappeApi, ItemDetail, ItemDetailQuery, ItemId, ItemStub, OwnedItemChange,
    PaginationParams, RecommendationResponse, User, UserItemsResponse,
};
use tokio::sync::RwLock;

use crate::config::ClientConfig;
use crate::services::ServiceContext;

const BACKEND: &str = "mock";

// ===== MockFrappeApi =====

#[derive(Default)]
struct MockState {
    users: Vec<String>,
    fail_users: bool,
    installed: HashMap<String, Vec<ItemStub>>,
    recommendations: HashMap<String, Vec<ItemId>>,
    failing_items: HashSet<String>,
    hanging_items: HashSet<String>,
    item_delays: HashMap<String, Duration>,
    details_links: HashMap<String, String>,
    app_icons: HashMap<String, BTreeMap<u32, String>>,
    /// 如果 Some，变更请求返回此状态码和响应体
    change_error: Option<(u16, String)>,
    item_queries: Vec<(String, Option<u32>)>,
    changes: Vec<(String, OwnedItemChange)>,
}

/// 内存中的 FRAPPE 后端
#[derive(Default)]
pub struct MockFrappeApi {
    state: RwLock<MockState>,
    user_items_calls: AtomicUsize,
    recommend_calls: AtomicUsize,
    item_calls: AtomicUsize,
    app_detail_calls: AtomicUsize,
}

impl MockFrappeApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn set_users(&self, users: Vec<String>) {
        self.state.write().await.users = users;
    }

    pub async fn fail_users(&self, fail: bool) {
        self.state.write().await.fail_users = fail;
    }

    pub async fn set_installed(&self, user: &str, items: Vec<String>) {
        let stubs = items
            .into_iter()
            .map(|id| ItemStub {
                external_id: ItemId::new(id),
                acquisition_date: Some(chrono::Utc::now()),
                removed_date: None,
            })
            .collect();
        self.state.write().await.installed.insert(user.to_string(), stubs);
    }

    pub async fn mark_removed(&self, user: &str, item: &str) {
        let mut state = self.state.write().await;
        if let Some(stubs) = state.installed.get_mut(user) {
            for stub in stubs.iter_mut().filter(|s| s.external_id.as_str() == item) {
                stub.removed_date = Some(chrono::Utc::now());
            }
        }
    }

    pub async fn set_recommendations(&self, user: &str, items: Vec<String>) {
        self.state
            .write()
            .await
            .recommendations
            .insert(user.to_string(), items.into_iter().map(ItemId::new).collect());
    }

    /// 该物品的详情请求返回 500
    pub async fn fail_item(&self, item: &str) {
        self.state.write().await.failing_items.insert(item.to_string());
    }

    /// 该物品的详情请求永不返回
    pub async fn hang_item(&self, item: &str) {
        self.state.write().await.hanging_items.insert(item.to_string());
    }

    pub async fn delay_item(&self, item: &str, delay: Duration) {
        self.state
            .write()
            .await
            .item_delays
            .insert(item.to_string(), delay);
    }

    pub async fn set_details_link(&self, item: &str, url: &str) {
        self.state
            .write()
            .await
            .details_links
            .insert(item.to_string(), url.to_string());
    }

    pub async fn set_app_icons(&self, url: &str, icons: &[(u32, &str)]) {
        let icons = icons
            .iter()
            .map(|(size, uri)| (*size, (*uri).to_string()))
            .collect();
        self.state.write().await.app_icons.insert(url.to_string(), icons);
    }

    pub async fn fail_changes(&self, status: u16, body: &str) {
        self.state.write().await.change_error = Some((status, body.to_string()));
    }

    pub fn user_items_calls(&self) -> usize {
        self.user_items_calls.load(Ordering::SeqCst)
    }

    pub fn recommend_calls(&self) -> usize {
        self.recommend_calls.load(Ordering::SeqCst)
    }

    pub fn item_calls(&self) -> usize {
        self.item_calls.load(Ordering::SeqCst)
    }

    pub fn app_detail_calls(&self) -> usize {
        self.app_detail_calls.load(Ordering::SeqCst)
    }

    /// 每次详情请求的 (物品, rank)
    pub async fn item_queries(&self) -> Vec<(String, Option<u32>)> {
        self.state.read().await.item_queries.clone()
    }

    pub async fn changes(&self) -> Vec<(String, OwnedItemChange)> {
        self.state.read().await.changes.clone()
    }
}

fn not_found(resource: String) -> ClientError {
    ClientError::NotFound {
        backend: BACKEND.to_string(),
        resource,
        raw_message: None,
    }
}

#[async_trait]
impl FrappeApi for MockFrappeApi {
    fn base_url(&self) -> &str {
        BACKEND
    }

    async fn list_users(&self, params: &PaginationParams) -> frappe_client::Result<Vec<User>> {
        let state = self.state.read().await;
        if state.fail_users {
            return Err(ClientError::NetworkError {
                backend: BACKEND.to_string(),
                detail: "connection refused".to_string(),
            });
        }
        let offset = params.offset.unwrap_or(0) as usize;
        let limit = params.limit.map_or(usize::MAX, |l| l as usize);
        Ok(state
            .users
            .iter()
            .skip(offset)
            .take(limit)
            .map(|id| User {
                id: None,
                external_id: ItemId::new(id.clone()),
            })
            .collect())
    }

    async fn list_user_items(
        &self,
        user: &str,
        _params: &PaginationParams,
    ) -> frappe_client::Result<UserItemsResponse> {
        self.user_items_calls.fetch_add(1, Ordering::SeqCst);
        let state = self.state.read().await;
        let items = state
            .installed
            .get(user)
            .cloned()
            .ok_or_else(|| not_found(format!("/user-items/{user}/")))?;
        Ok(UserItemsResponse {
            user: Some(ItemId::new(user)),
            items,
        })
    }

    async fn recommend(&self, user: &str, count: u32) -> frappe_client::Result<RecommendationResponse> {
        self.recommend_calls.fetch_add(1, Ordering::SeqCst);
        let state = self.state.read().await;
        let recommendations = state
            .recommendations
            .get(user)
            .ok_or_else(|| not_found(format!("/recommend/{count}/{user}/")))?
            .iter()
            .take(count as usize)
            .cloned()
            .collect();
        Ok(RecommendationResponse {
            user: Some(ItemId::new(user)),
            recommendations,
        })
    }

    async fn get_item(&self, item: &ItemId, query: &ItemDetailQuery) -> frappe_client::Result<ItemDetail> {
        self.item_calls.fetch_add(1, Ordering::SeqCst);
        let (hang, fail, delay, details) = {
            let mut state = self.state.write().await;
            state
                .item_queries
                .push((item.to_string(), query.rank));
            (
                state.hanging_items.contains(item.as_str()),
                state.failing_items.contains(item.as_str()),
                state.item_delays.get(item.as_str()).copied(),
                state.details_links.get(item.as_str()).cloned(),
            )
        };

        if hang {
            futures::future::pending::<()>().await;
        }
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
        if fail {
            return Err(ClientError::HttpStatus {
                backend: BACKEND.to_string(),
                status: 500,
                body: "detail failed".to_string(),
            });
        }

        Ok(ItemDetail {
            external_id: Some(item.clone()),
            details,
            ..ItemDetail::default()
        })
    }

    async fn get_app_details(&self, url: &str) -> frappe_client::Result<ItemDetail> {
        self.app_detail_calls.fetch_add(1, Ordering::SeqCst);
        let state = self.state.read().await;
        let icons = state
            .app_icons
            .get(url)
            .cloned()
            .ok_or_else(|| not_found(url.to_string()))?;
        Ok(ItemDetail {
            icons,
            ..ItemDetail::default()
        })
    }

    async fn change_owned_item(&self, user: &str, change: &OwnedItemChange) -> frappe_client::Result<()> {
        let mut state = self.state.write().await;
        if let Some((status, body)) = state.change_error.clone() {
            return Err(ClientError::HttpStatus {
                backend: BACKEND.to_string(),
                status,
                body,
            });
        }
        state.changes.push((user.to_string(), change.clone()));

        let stubs = state.installed.entry(user.to_string()).or_default();
        match change {
            OwnedItemChange::Acquire(item) => stubs.push(ItemStub {
                external_id: item.clone(),
                acquisition_date: Some(chrono::Utc::now()),
                removed_date: None,
            }),
            OwnedItemChange::Remove(item) => {
                for stub in stubs.iter_mut().filter(|s| &s.external_id == item) {
                    stub.removed_date = Some(chrono::Utc::now());
                }
            }
        }
        Ok(())
    }
}

// ===== 工厂方法 =====

/// 创建测试用 `ServiceContext`（默认配置）
pub fn create_test_context(api: Arc<MockFrappeApi>) -> Arc<ServiceContext> {
    create_test_context_with(api, ClientConfig::new("http://localhost:8000/api/v2"))
}

/// 创建测试用 `ServiceContext`（自定义配置）
pub fn create_test_context_with(api: Arc<MockFrappeApi>, config: ClientConfig) -> Arc<ServiceContext> {
    Arc::new(ServiceContext::new(api, Arc::new(config)))
}
