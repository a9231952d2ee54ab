//! FRAPPE Core Library
//!
//! Platform-independent logic of FRAPPE recommender clients:
//! - list loading (one list request, concurrent detail requests, completion tracking)
//! - batch generations, so superseded loads are discarded
//! - client-side pagination
//! - install / remove actions followed by a reload of both lists
//!
//! The backend is reached through the [`frappe_client::FrappeApi`] trait, so
//! every service runs against the HTTP client or an in-memory double.

pub mod config;
pub mod error;
pub mod list;
pub mod services;
pub mod types;

#[cfg(test)]
mod test_utils;

// Re-export common types
pub use config::{ClientConfig, RenderOrder};
pub use error::{CoreError, CoreResult};
pub use list::{BatchAccumulator, BatchId, Generation, PagerControl, Paginator};
pub use services::{ItemListService, MutationOutcome, ServiceContext, UserItemsController, UserService};
