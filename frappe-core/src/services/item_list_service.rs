//! 物品列表加载服务
//!
//! 一次加载 = 一个列表请求 + 每个条目一个详情请求（全部并发）。
//! 所有详情都返回后才产出完整列表。

use std::sync::Arc;

use futures::stream::{FuturesUnordered, StreamExt};

use frappe_client::{ItemDetail, ItemDetailQuery, ItemId, ItemStub, PaginationParams};

use crate::error::CoreResult;
use crate::list::{BatchAccumulator, BatchId, Generation};
use crate::services::{log_client_error, ServiceContext};
use crate::types::{ItemList, ItemRecord, ListKind, LoadOutcome};

/// 物品列表加载服务
pub struct ItemListService {
    ctx: Arc<ServiceContext>,
}

impl ItemListService {
    #[must_use]
    pub fn new(ctx: Arc<ServiceContext>) -> Self {
        Self { ctx }
    }

    /// 已安装物品的条目（按配置过滤已移除的）
    pub async fn installed_stubs(&self, user: &str) -> CoreResult<Vec<ItemStub>> {
        let params = PaginationParams {
            limit: self.ctx.config.installed_page_items,
            offset: None,
        };
        let response = self
            .ctx
            .api
            .list_user_items(user, &params)
            .await
            .inspect_err(|e| log_client_error(&format!("Failed to list items of user {user}"), e))?;

        let total = response.items.len();
        let stubs: Vec<ItemStub> = if self.ctx.config.hide_removed {
            response
                .items
                .into_iter()
                .filter(ItemStub::is_installed)
                .collect()
        } else {
            response.items
        };
        log::debug!("User {user}: {} of {total} owned items listed", stubs.len());
        Ok(stubs)
    }

    /// 推荐物品的条目（只有 id）
    pub async fn recommendation_stubs(&self, user: &str) -> CoreResult<Vec<ItemStub>> {
        let response = self
            .ctx
            .api
            .recommend(user, self.ctx.config.recommendation_count)
            .await
            .inspect_err(|e| {
                log_client_error(&format!("Failed to get recommendations for {user}"), e);
            })?;

        Ok(response
            .recommendations
            .into_iter()
            .map(|external_id| ItemStub {
                external_id,
                acquisition_date: None,
                removed_date: None,
            })
            .collect())
    }

    /// 加载一个列表：获取条目后并发请求所有详情
    ///
    /// 列表请求失败时返回错误；详情失败时返回 [`LoadOutcome::Incomplete`]。
    pub async fn load(
        &self,
        kind: ListKind,
        user: &str,
        generation: &Generation,
        batch: BatchId,
    ) -> CoreResult<LoadOutcome> {
        let stubs = match kind {
            ListKind::Installed => self.installed_stubs(user).await?,
            ListKind::Recommended => self.recommendation_stubs(user).await?,
        };
        if !generation.is_current(batch) {
            log::debug!("{kind:?} batch {batch} superseded before details");
            return Ok(LoadOutcome::Superseded(batch));
        }
        Ok(self.load_details(kind, user, &stubs, generation, batch).await)
    }

    /// 并发获取 `stubs` 的详情并合并
    pub async fn load_details(
        &self,
        kind: ListKind,
        user: &str,
        stubs: &[ItemStub],
        generation: &Generation,
        batch: BatchId,
    ) -> LoadOutcome {
        let mut accumulator = BatchAccumulator::new(batch, stubs.len());

        let mut pending: FuturesUnordered<_> = stubs
            .iter()
            .enumerate()
            .map(|(index, stub)| {
                let query = detail_query(kind, user, index);
                async move { (index, self.fetch_detail(&stub.external_id, &query).await) }
            })
            .collect();

        while let Some((index, result)) = pending.next().await {
            if !generation.is_current(batch) {
                continue;
            }
            match result {
                Ok(detail) => {
                    accumulator.record_resolved(batch, index, detail);
                }
                Err(e) => log_client_error(
                    &format!("Failed to load item {}", stubs[index].external_id),
                    &e,
                ),
            }
        }

        if !generation.is_current(batch) {
            log::debug!("{kind:?} batch {batch} superseded, discarding results");
            return LoadOutcome::Superseded(batch);
        }

        let expected = accumulator.expected();
        let resolved = accumulator.resolved();
        let Some(resolved_items) = accumulator.finish(self.ctx.config.render_order) else {
            log::warn!("{kind:?} batch {batch} incomplete: {resolved}/{expected} details loaded");
            return LoadOutcome::Incomplete {
                batch,
                expected,
                resolved,
            };
        };

        let records = resolved_items
            .into_iter()
            .map(|r| ItemRecord::merge(&stubs[r.index], r.value, kind, user, r.index, r.position))
            .collect();
        log::info!("{kind:?} list of {user} complete with {expected} items ({batch})");

        LoadOutcome::Completed(ItemList {
            batch,
            kind,
            user: user.to_string(),
            records,
        })
    }

    /// 获取详情；没有图标时从第三方文档补充
    async fn fetch_detail(
        &self,
        item: &ItemId,
        query: &ItemDetailQuery,
    ) -> frappe_client::Result<ItemDetail> {
        let mut detail = self.ctx.api.get_item(item, query).await?;
        if !detail.icons.is_empty() {
            return Ok(detail);
        }

        let link = detail
            .details
            .clone()
            .or_else(|| self.ctx.config.marketplace_url(item.as_str()));
        if let Some(url) = link {
            match self.ctx.api.get_app_details(&url).await {
                Ok(app) => detail.icons = app.icons,
                Err(e) => log::warn!("Icon lookup for item {item} failed: {e}"),
            }
        }
        Ok(detail)
    }
}

fn detail_query(kind: ListKind, user: &str, index: usize) -> ItemDetailQuery {
    let query = ItemDetailQuery::for_user(user);
    match kind {
        ListKind::Installed => query,
        ListKind::Recommended => query.with_rank(u32::try_from(index + 1).unwrap_or(u32::MAX)),
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::config::{ClientConfig, RenderOrder};
    use crate::test_utils::{create_test_context, create_test_context_with, MockFrappeApi};

    fn ids(list: &ItemList) -> Vec<&str> {
        list.records.iter().map(|r| r.external_id.as_str()).collect()
    }

    async fn load(svc: &ItemListService, kind: ListKind) -> LoadOutcome {
        let generation = Generation::new();
        let batch = generation.begin();
        svc.load(kind, "u1", &generation, batch).await.unwrap()
    }

    #[tokio::test]
    async fn all_details_complete_the_list() {
        for n in [0usize, 1, 3, 9] {
            let api = Arc::new(MockFrappeApi::new());
            api.set_installed("u1", (0..n).map(|i| i.to_string()).collect()).await;
            let svc = ItemListService::new(create_test_context(api.clone()));

            let list = load(&svc, ListKind::Installed).await.into_completed().unwrap();
            assert_eq!(list.len(), n);
            assert_eq!(api.item_calls(), n);
        }
    }

    #[tokio::test]
    async fn failed_detail_leaves_list_incomplete() {
        let api = Arc::new(MockFrappeApi::new());
        api.set_installed("u1", vec!["1".into(), "2".into(), "3".into()]).await;
        api.fail_item("2").await;
        let svc = ItemListService::new(create_test_context(api));

        let outcome = load(&svc, ListKind::Installed).await;
        assert!(matches!(
            outcome,
            LoadOutcome::Incomplete {
                expected: 3,
                resolved: 2,
                ..
            }
        ));
    }

    #[tokio::test]
    async fn pending_detail_never_completes() {
        let api = Arc::new(MockFrappeApi::new());
        api.set_installed("u1", vec!["1".into(), "2".into(), "3".into()]).await;
        api.hang_item("3").await;
        let svc = ItemListService::new(create_test_context(api));

        let result = tokio::time::timeout(Duration::from_millis(200), load(&svc, ListKind::Installed)).await;
        assert!(result.is_err(), "load must not complete");
    }

    #[tokio::test]
    async fn list_failure_is_an_error() {
        let api = Arc::new(MockFrappeApi::new());
        let svc = ItemListService::new(create_test_context(api.clone()));
        let generation = Generation::new();
        let batch = generation.begin();
        assert!(svc.load(ListKind::Installed, "nobody", &generation, batch).await.is_err());
        assert_eq!(api.item_calls(), 0);
    }

    #[tokio::test]
    async fn removed_items_are_hidden() {
        let api = Arc::new(MockFrappeApi::new());
        api.set_installed("u1", vec!["1".into(), "2".into()]).await;
        api.mark_removed("u1", "1").await;
        let svc = ItemListService::new(create_test_context(api.clone()));

        let list = load(&svc, ListKind::Installed).await.into_completed().unwrap();
        assert_eq!(ids(&list), ["2"]);

        let config = ClientConfig {
            hide_removed: false,
            ..ClientConfig::new("http://localhost/")
        };
        let svc = ItemListService::new(create_test_context_with(api, config));
        let list = load(&svc, ListKind::Installed).await.into_completed().unwrap();
        assert_eq!(list.len(), 2);
    }

    #[tokio::test]
    async fn request_order_ignores_arrival() {
        let api = Arc::new(MockFrappeApi::new());
        api.set_installed("u1", vec!["a".into(), "b".into(), "c".into()]).await;
        api.delay_item("a", Duration::from_millis(30)).await;
        api.delay_item("b", Duration::from_millis(15)).await;

        let config = ClientConfig {
            render_order: RenderOrder::Request,
            ..ClientConfig::new("http://localhost/")
        };
        let svc = ItemListService::new(create_test_context_with(api.clone(), config));
        let list = load(&svc, ListKind::Installed).await.into_completed().unwrap();
        assert_eq!(ids(&list), ["a", "b", "c"]);

        let svc = ItemListService::new(create_test_context(api));
        let list = load(&svc, ListKind::Installed).await.into_completed().unwrap();
        assert_eq!(ids(&list), ["c", "b", "a"]);
        assert_eq!(list.records[0].position, 0);
        assert_eq!(list.records[0].rank, 3);
    }

    #[tokio::test]
    async fn recommendations_carry_rank() {
        let api = Arc::new(MockFrappeApi::new());
        api.set_recommendations("u1", vec!["10".into(), "11".into()]).await;
        let svc = ItemListService::new(create_test_context(api.clone()));

        let list = load(&svc, ListKind::Recommended).await.into_completed().unwrap();
        assert_eq!(list.len(), 2);
        assert!(list.records.iter().all(|r| r.install_or_remove() == "plus"));

        let mut ranks = api.item_queries().await;
        ranks.sort();
        assert_eq!(
            ranks,
            vec![("10".to_string(), Some(1)), ("11".to_string(), Some(2))]
        );
    }

    #[tokio::test]
    async fn superseded_batch_is_discarded() {
        let api = Arc::new(MockFrappeApi::new());
        api.set_installed("u1", vec!["1".into()]).await;
        api.delay_item("1", Duration::from_millis(50)).await;
        let svc = Arc::new(ItemListService::new(create_test_context(api)));

        let generation = Generation::new();
        let old = generation.begin();
        let task = {
            let svc = svc.clone();
            let generation = generation.clone();
            tokio::spawn(async move { svc.load(ListKind::Installed, "u1", &generation, old).await })
        };
        tokio::time::sleep(Duration::from_millis(10)).await;
        generation.begin();

        let outcome = task.await.unwrap().unwrap();
        assert!(matches!(outcome, LoadOutcome::Superseded(b) if b == old));
    }

    #[tokio::test]
    async fn icon_fallback_uses_details_link() {
        let api = Arc::new(MockFrappeApi::new());
        api.set_installed("u1", vec!["5".into(), "6".into()]).await;
        api.set_details_link("5", "https://apps.example/5/").await;
        api.set_app_icons("https://apps.example/5/", &[(64, "big.png")]).await;

        let config = ClientConfig {
            marketplace_base: None,
            render_order: RenderOrder::Request,
            ..ClientConfig::new("http://localhost/")
        };
        let svc = ItemListService::new(create_test_context_with(api.clone(), config));
        let list = load(&svc, ListKind::Installed).await.into_completed().unwrap();

        assert_eq!(list.records[0].detail.icon_for(64), Some("big.png"));
        // 6 has no link and no marketplace: no fallback request, still complete
        assert!(list.records[1].detail.icons.is_empty());
        assert_eq!(api.app_detail_calls(), 1);
    }

    #[tokio::test]
    async fn failed_icon_fallback_still_completes() {
        let api = Arc::new(MockFrappeApi::new());
        api.set_installed("u1", vec!["5".into()]).await;
        let svc = ItemListService::new(create_test_context(api.clone()));

        // marketplace URL is configured but unknown to the mock
        let list = load(&svc, ListKind::Installed).await.into_completed().unwrap();
        assert_eq!(list.len(), 1);
        assert_eq!(api.app_detail_calls(), 1);
    }
}
