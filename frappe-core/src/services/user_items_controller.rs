//! Loading and mutating one user's items
//!
//! Owns the batch generation of both lists. Every load starts a new batch,
//! so a reload (for instance after an install) supersedes whatever was still
//! accumulating.

use std::sync::Arc;

use frappe_client::ItemId;

use crate::error::{CoreError, CoreResult};
use crate::list::{BatchId, Generation};
use crate::services::{ItemListService, ServiceContext};
use crate::types::{ActionKind, ItemAction, ListKind, LoadOutcome};

/// Both reloads triggered by a successful mutation.
///
/// The batches are reported separately from the results so a failed
/// reload can still be matched against the current generation.
#[derive(Debug)]
pub struct MutationOutcome {
    pub installed_batch: BatchId,
    pub installed: CoreResult<LoadOutcome>,
    pub recommended_batch: BatchId,
    pub recommended: CoreResult<LoadOutcome>,
}

/// Loads the installed and recommended lists of a user and applies
/// install/remove actions. Clones share state.
#[derive(Clone)]
pub struct UserItemsController {
    ctx: Arc<ServiceContext>,
    lists: Arc<ItemListService>,
    installed: Generation,
    recommended: Generation,
}

impl UserItemsController {
    #[must_use]
    pub fn new(ctx: Arc<ServiceContext>) -> Self {
        Self {
            lists: Arc::new(ItemListService::new(ctx.clone())),
            ctx,
            installed: Generation::new(),
            recommended: Generation::new(),
        }
    }

    fn generation(&self, kind: ListKind) -> &Generation {
        match kind {
            ListKind::Installed => &self.installed,
            ListKind::Recommended => &self.recommended,
        }
    }

    /// Whether `batch` is still the latest load of `kind`.
    pub fn is_current(&self, kind: ListKind, batch: BatchId) -> bool {
        self.generation(kind).is_current(batch)
    }

    /// Start a new batch of `kind` without loading yet.
    pub fn begin(&self, kind: ListKind) -> BatchId {
        self.generation(kind).begin()
    }

    /// Load `kind` under an already started `batch`.
    pub async fn load_batch(&self, kind: ListKind, user: &str, batch: BatchId) -> CoreResult<LoadOutcome> {
        self.lists.load(kind, user, self.generation(kind), batch).await
    }

    /// Reload both lists concurrently, each exactly once.
    pub async fn reload_all(&self, user: &str) -> MutationOutcome {
        let installed_batch = self.begin(ListKind::Installed);
        let recommended_batch = self.begin(ListKind::Recommended);
        let (installed, recommended) = futures::join!(
            self.load_batch(ListKind::Installed, user, installed_batch),
            self.load_batch(ListKind::Recommended, user, recommended_batch)
        );
        MutationOutcome {
            installed_batch,
            installed,
            recommended_batch,
            recommended,
        }
    }

    /// `POST` the item, then reload both lists.
    pub async fn item_acquire(&self, user: &str, item: &ItemId) -> CoreResult<MutationOutcome> {
        self.ctx
            .api
            .acquire_item(user, item)
            .await
            .map_err(|e| mutation_error("acquire", item, e))?;
        log::info!("User {user} acquired item {item}");
        Ok(self.reload_all(user).await)
    }

    /// `DELETE` the item, then reload both lists.
    pub async fn item_remove(&self, user: &str, item: &ItemId) -> CoreResult<MutationOutcome> {
        self.ctx
            .api
            .remove_item(user, item)
            .await
            .map_err(|e| mutation_error("remove", item, e))?;
        log::info!("User {user} removed item {item}");
        Ok(self.reload_all(user).await)
    }

    /// Run the action attached to a record.
    pub async fn perform(&self, action: &ItemAction) -> CoreResult<MutationOutcome> {
        match action.kind {
            ActionKind::Acquire => self.item_acquire(&action.user, &action.item).await,
            ActionKind::Remove => self.item_remove(&action.user, &action.item).await,
        }
    }
}

fn mutation_error(verb: &str, item: &ItemId, err: frappe_client::ClientError) -> CoreError {
    let err = CoreError::from_mutation(err);
    if err.is_expected() {
        log::warn!("Failed to {verb} item {item}: {err}");
    } else {
        log::error!("Failed to {verb} item {item}: {err}");
    }
    err
}
