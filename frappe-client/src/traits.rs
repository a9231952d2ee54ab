use async_trait::async_trait;

use crate::error::Result;
use crate::types::{
    ItemDetail, ItemDetailQuery, ItemId, OwnedItemChange, PaginationParams,
    RecommendationResponse, User, UserItemsResponse,
};

/// FRAPPE recommender API
///
/// Every endpoint the client consumes, relative to one backend base URL.
/// Implemented over HTTP by [`FrappeClient`](crate::FrappeClient); higher
/// layers depend on the trait so they can run against an in-memory double.
#[async_trait]
pub trait FrappeApi: Send + Sync {
    /// Base URL this API talks to, used to label logs and errors.
    fn base_url(&self) -> &str;

    /// `GET <base>/users/?users=<n>&offset=<k>`
    async fn list_users(&self, params: &PaginationParams) -> Result<Vec<User>>;

    /// `GET <base>/user-items/<user>/?items=<n>&offset=<k>`
    async fn list_user_items(
        &self,
        user: &str,
        params: &PaginationParams,
    ) -> Result<UserItemsResponse>;

    /// `GET <base>/recommend/<n>/<user>/`
    async fn recommend(&self, user: &str, count: u32) -> Result<RecommendationResponse>;

    /// `GET <base>/item/<id>/?user=<user>&rank=<r>`
    async fn get_item(&self, item: &ItemId, query: &ItemDetailQuery) -> Result<ItemDetail>;

    /// Fetch a third-party detail document by absolute URL
    /// (the `details` link of an item, or a marketplace app URL).
    async fn get_app_details(&self, url: &str) -> Result<ItemDetail>;

    /// `POST`/`DELETE <base>/user-items/<user>/`
    async fn change_owned_item(&self, user: &str, change: &OwnedItemChange) -> Result<()>;

    /// Add `item` to the user's owned items.
    async fn acquire_item(&self, user: &str, item: &ItemId) -> Result<()> {
        self.change_owned_item(user, &OwnedItemChange::Acquire(item.clone()))
            .await
    }

    /// Mark `item` as removed from the user's owned items.
    async fn remove_item(&self, user: &str, item: &ItemId) -> Result<()> {
        self.change_owned_item(user, &OwnedItemChange::Remove(item.clone()))
            .await
    }
}
