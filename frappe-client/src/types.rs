use std::collections::BTreeMap;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

// ============ Identifiers ============

/// External identifier of an item or user.
///
/// The backend sends item ids as JSON integers in some endpoints and as strings
/// in others; both are normalised to their decimal/string form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct ItemId(String);

impl ItemId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ItemId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for ItemId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl<'de> Deserialize<'de> for ItemId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Str(String),
            Signed(i64),
            Unsigned(u64),
        }

        Ok(match RawId::deserialize(deserializer)? {
            RawId::Str(s) => Self(s),
            RawId::Signed(n) => Self(n.to_string()),
            RawId::Unsigned(n) => Self(n.to_string()),
        })
    }
}

// ============ Pagination ============

/// Offset window for backend list endpoints.
///
/// `limit` maps to the endpoint's count parameter (`users=` for the user list,
/// `items=` for owned items). `None` leaves the parameter out and the backend
/// applies its own default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationParams {
    /// Maximum number of entries to return.
    pub limit: Option<u32>,
    /// Number of entries to skip.
    pub offset: Option<u32>,
}

impl PaginationParams {
    pub fn new(limit: u32, offset: u32) -> Self {
        Self {
            limit: Some(limit),
            offset: Some(offset),
        }
    }

    /// Query pairs with the endpoint-specific name for the count parameter.
    pub fn to_query(&self, limit_name: &'static str) -> Vec<(&'static str, String)> {
        let mut query = Vec::new();
        if let Some(limit) = self.limit {
            query.push((limit_name, limit.to_string()));
        }
        if let Some(offset) = self.offset {
            query.push(("offset", offset.to_string()));
        }
        query
    }
}

// ============ Users ============

/// Entry of `GET <base>/users/`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Backend primary key.
    #[serde(default)]
    pub id: Option<u64>,
    /// Public identifier used in every other endpoint.
    pub external_id: ItemId,
}

// ============ Owned items ============

/// Entry of the owned-items list: identifier plus inventory timestamps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemStub {
    pub external_id: ItemId,
    #[serde(default, with = "crate::utils::datetime")]
    pub acquisition_date: Option<DateTime<Utc>>,
    #[serde(
        default,
        alias = "dropped_date",
        with = "crate::utils::datetime"
    )]
    pub removed_date: Option<DateTime<Utc>>,
}

impl ItemStub {
    /// A stub without removal date is a live install.
    pub fn is_installed(&self) -> bool {
        self.removed_date.is_none()
    }
}

/// Response of `GET <base>/user-items/<user>/`.
///
/// Older backends name the list `installed`, newer ones `items`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserItemsResponse {
    #[serde(default)]
    pub user: Option<ItemId>,
    #[serde(default, alias = "installed")]
    pub items: Vec<ItemStub>,
}

// ============ Recommendations ============

/// Response of `GET <base>/recommend/<n>/<user>/`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecommendationResponse {
    #[serde(default)]
    pub user: Option<ItemId>,
    #[serde(default)]
    pub recommendations: Vec<ItemId>,
}

// ============ Item details ============

/// Display text that is either a plain string or a locale → text map
/// (the marketplace localises names and descriptions).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LocalizedText {
    Plain(String),
    Localized(BTreeMap<String, String>),
}

impl LocalizedText {
    /// Text for `locale`, falling back to `en-US` and then to any entry.
    pub fn resolve(&self, locale: &str) -> Option<&str> {
        match self {
            Self::Plain(text) => Some(text),
            Self::Localized(map) => map
                .get(locale)
                .or_else(|| map.get("en-US"))
                .or_else(|| map.values().next())
                .map(String::as_str),
        }
    }
}

/// Full metadata of one item, as returned by `GET <base>/item/<id>/` or by a
/// marketplace app document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ItemDetail {
    #[serde(default)]
    pub external_id: Option<ItemId>,
    #[serde(default)]
    pub name: Option<LocalizedText>,
    #[serde(default)]
    pub description: Option<LocalizedText>,
    /// Icon URIs keyed by pixel size.
    #[serde(default)]
    pub icons: BTreeMap<u32, String>,
    /// Link to the third-party detail document, when the backend only proxies ids.
    #[serde(default)]
    pub details: Option<String>,
    /// Every other field of the payload, kept as-is.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl ItemDetail {
    /// Smallest icon at least `size` pixels wide, or the largest one available.
    pub fn icon_for(&self, size: u32) -> Option<&str> {
        self.icons
            .range(size..)
            .next()
            .or_else(|| self.icons.iter().next_back())
            .map(|(_, uri)| uri.as_str())
    }
}

/// Extra query parameters of the item detail endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemDetailQuery {
    /// User on whose behalf the detail is shown (the backend logs the click).
    pub user: Option<String>,
    /// 1-based rank of the item inside a recommendation list.
    pub rank: Option<u32>,
}

impl ItemDetailQuery {
    pub fn for_user(user: impl Into<String>) -> Self {
        Self {
            user: Some(user.into()),
            rank: None,
        }
    }

    #[must_use]
    pub fn with_rank(mut self, rank: u32) -> Self {
        self.rank = Some(rank);
        self
    }

    pub fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut query = Vec::new();
        if let Some(user) = &self.user {
            query.push(("user", user.clone()));
        }
        if let Some(rank) = self.rank {
            query.push(("rank", rank.to_string()));
        }
        query
    }
}

// ============ Mutations ============

/// A change to a user's owned-item collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "item", rename_all = "snake_case")]
pub enum OwnedItemChange {
    /// `POST <base>/user-items/<user>/` with `item_to_acquire`.
    Acquire(ItemId),
    /// `DELETE <base>/user-items/<user>/` with `item_to_remove`.
    Remove(ItemId),
}

impl OwnedItemChange {
    pub fn item(&self) -> &ItemId {
        match self {
            Self::Acquire(id) | Self::Remove(id) => id,
        }
    }

    pub fn method(&self) -> reqwest::Method {
        match self {
            Self::Acquire(_) => reqwest::Method::POST,
            Self::Remove(_) => reqwest::Method::DELETE,
        }
    }

    /// Form body sent with the request.
    pub fn form(&self) -> [(&'static str, &str); 1] {
        match self {
            Self::Acquire(id) => [("item_to_acquire", id.as_str())],
            Self::Remove(id) => [("item_to_remove", id.as_str())],
        }
    }
}
