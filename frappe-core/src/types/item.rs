//! Item record type definitions

use chrono::{DateTime, Utc};
use serde::Serialize;

use frappe_client::{ItemDetail, ItemId, ItemStub};

use crate::list::BatchId;

/// Which list a record belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ListKind {
    /// Items the user owns.
    Installed,
    /// Items recommended to the user.
    Recommended,
}

impl ListKind {
    /// Action offered on every record of this list.
    pub fn action(self) -> ActionKind {
        match self {
            Self::Installed => ActionKind::Remove,
            Self::Recommended => ActionKind::Acquire,
        }
    }
}

/// Install / remove
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionKind {
    Acquire,
    Remove,
}

impl ActionKind {
    /// `install_or_remove` label
    pub fn label(self) -> &'static str {
        match self {
            Self::Acquire => "plus",
            Self::Remove => "minus",
        }
    }

    /// `install_or_remove_color` label
    pub fn color(self) -> &'static str {
        match self {
            Self::Acquire => "success",
            Self::Remove => "danger",
        }
    }
}

/// Action descriptor attached to a record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemAction {
    pub kind: ActionKind,
    pub user: String,
    pub item: ItemId,
}

/// Stub metadata merged with the item detail.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItemRecord {
    pub external_id: ItemId,
    pub detail: ItemDetail,
    #[serde(rename = "installation_date")]
    pub acquisition_date: Option<DateTime<Utc>>,
    pub removed_date: Option<DateTime<Utc>>,
    pub action: ItemAction,
    /// 1-based position of the id in the list response.
    pub rank: u32,
    /// 0-based order in which the detail resolved.
    pub position: usize,
}

impl ItemRecord {
    /// Merge a list entry with its detail document.
    pub fn merge(
        stub: &ItemStub,
        detail: ItemDetail,
        kind: ListKind,
        user: &str,
        index: usize,
        position: usize,
    ) -> Self {
        Self {
            external_id: stub.external_id.clone(),
            detail,
            acquisition_date: stub.acquisition_date,
            removed_date: stub.removed_date,
            action: ItemAction {
                kind: kind.action(),
                user: user.to_string(),
                item: stub.external_id.clone(),
            },
            rank: u32::try_from(index + 1).unwrap_or(u32::MAX),
            position,
        }
    }

    /// Display name, falling back to the id.
    pub fn display_name(&self, locale: &str) -> String {
        self.detail
            .name
            .as_ref()
            .and_then(|name| name.resolve(locale))
            .map_or_else(|| self.external_id.to_string(), str::to_string)
    }

    pub fn description(&self, locale: &str) -> Option<&str> {
        self.detail
            .description
            .as_ref()
            .and_then(|text| text.resolve(locale))
    }

    pub fn install_or_remove(&self) -> &'static str {
        self.action.kind.label()
    }

    pub fn install_or_remove_color(&self) -> &'static str {
        self.action.kind.color()
    }
}

/// A completed list of one batch.
#[derive(Debug, Clone, Serialize)]
pub struct ItemList {
    pub batch: BatchId,
    pub kind: ListKind,
    pub user: String,
    pub records: Vec<ItemRecord>,
}

impl ItemList {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Ids in display order, the input of a [`Paginator`](crate::list::Paginator).
    pub fn ids(&self) -> Vec<ItemId> {
        self.records.iter().map(|r| r.external_id.clone()).collect()
    }
}

/// Result of one list load.
#[derive(Debug, Clone)]
pub enum LoadOutcome {
    /// Every detail resolved.
    Completed(ItemList),
    /// Some details failed; nothing is rendered for this batch.
    Incomplete {
        batch: BatchId,
        expected: usize,
        resolved: usize,
    },
    /// A newer batch started while this one was loading.
    Superseded(BatchId),
}

impl LoadOutcome {
    pub fn batch(&self) -> BatchId {
        match self {
            Self::Completed(list) => list.batch,
            Self::Incomplete { batch, .. } | Self::Superseded(batch) => *batch,
        }
    }

    pub fn into_completed(self) -> Option<ItemList> {
        match self {
            Self::Completed(list) => Some(list),
            _ => None,
        }
    }
}
