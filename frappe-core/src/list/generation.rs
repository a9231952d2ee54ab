//! Batch generations
//!
//! Every list slot (installed items, recommendations, users) owns one
//! [`Generation`]. Starting a load bumps it and hands out a [`BatchId`];
//! anything tagged with an older id belongs to a superseded load.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use serde::Serialize;

/// Identifier of one fetch cycle of one list slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct BatchId(u64);

impl fmt::Display for BatchId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Monotonic batch counter of one list slot. Clones share the counter.
#[derive(Debug, Clone, Default)]
pub struct Generation(Arc<AtomicU64>);

impl Generation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new batch, superseding every earlier one.
    pub fn begin(&self) -> BatchId {
        BatchId(self.0.fetch_add(1, Ordering::AcqRel) + 1)
    }

    pub fn is_current(&self, batch: BatchId) -> bool {
        self.0.load(Ordering::Acquire) == batch.0
    }
}
