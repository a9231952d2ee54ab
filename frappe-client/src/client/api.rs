use async_trait::async_trait;
use url::Url;

use crate::error::{ClientError, Result};
use crate::traits::FrappeApi;
use crate::types::{
    ItemDetail, ItemDetailQuery, ItemId, OwnedItemChange, PaginationParams,
    RecommendationResponse, User, UserItemsResponse,
};

use super::FrappeClient;

#[async_trait]
impl FrappeApi for FrappeClient {
    fn base_url(&self) -> &str {
        self.backend()
    }

    async fn list_users(&self, params: &PaginationParams) -> Result<Vec<User>> {
        let url = self.endpoint(&["users"], &params.to_query("users"))?;
        self.get_json(url).await
    }

    async fn list_user_items(
        &self,
        user: &str,
        params: &PaginationParams,
    ) -> Result<UserItemsResponse> {
        let url = self.endpoint(&["user-items", user], &params.to_query("items"))?;
        self.get_json(url).await
    }

    async fn recommend(&self, user: &str, count: u32) -> Result<RecommendationResponse> {
        let count = count.to_string();
        let url = self.endpoint(&["recommend", &count, user], &[])?;
        self.get_json(url).await
    }

    async fn get_item(&self, item: &ItemId, query: &ItemDetailQuery) -> Result<ItemDetail> {
        let url = self.endpoint(&["item", item.as_str()], &query.to_query())?;
        self.get_json(url).await
    }

    async fn get_app_details(&self, url: &str) -> Result<ItemDetail> {
        let parsed = Url::parse(url).map_err(|e| ClientError::InvalidUrl {
            url: url.to_string(),
            detail: e.to_string(),
        })?;
        self.get_json(parsed).await
    }

    async fn change_owned_item(&self, user: &str, change: &OwnedItemChange) -> Result<()> {
        let url = self.endpoint(&["user-items", user], &[])?;
        log::info!(
            "[{}] {} item {} for user {user}",
            self.backend(),
            change.method(),
            change.item()
        );
        self.send_form(change.method(), url, &change.form()).await?;
        Ok(())
    }
}
