//! # frappe-client
//!
//! Async client for the FRAPPE recommender backend.
//!
//! The backend exposes a small REST surface relative to one base URL:
//!
//! | Endpoint | Method | Purpose |
//! |----------|--------|---------|
//! | `users/` | GET | list known users |
//! | `user-items/<user>/` | GET | items a user owns, with inventory dates |
//! | `user-items/<user>/` | POST / DELETE | acquire / remove an item |
//! | `recommend/<n>/<user>/` | GET | `n` recommended item ids |
//! | `item/<id>/` | GET | full metadata of one item |
//!
//! ## Feature Flags
//!
//! - **`native-tls`** *(default)* — Use the platform's native TLS implementation.
//! - **`rustls`** — Use rustls.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use frappe_client::{ClientOptions, FrappeApi, FrappeClient, ItemDetailQuery};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = FrappeClient::new(ClientOptions::new("http://localhost:8000/api/v2"))?;
//!
//!     let recs = client.recommend("1001", 4).await?;
//!     for (i, id) in recs.recommendations.iter().enumerate() {
//!         let query = ItemDetailQuery::for_user("1001").with_rank(i as u32 + 1);
//!         let detail = client.get_item(id, &query).await?;
//!         println!("{id}: {:?}", detail.name);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Every operation returns [`Result<T, ClientError>`](ClientError). Non-2xx
//! responses keep their raw body ([`ClientError::raw_body`]) so a caller can
//! show the backend's own error page.

mod client;
mod error;
mod http_client;
mod traits;
mod types;
mod utils;

pub use client::{ClientOptions, FrappeClient};
pub use error::{ClientError, Result};
pub use traits::FrappeApi;
pub use types::{
    ItemDetail, ItemDetailQuery, ItemId, ItemStub, LocalizedText, OwnedItemChange,
    PaginationParams, RecommendationResponse, User, UserItemsResponse,
};

pub use utils::datetime;
