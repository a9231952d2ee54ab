//! Completion tracking of one batch of detail requests

use crate::config::RenderOrder;

use super::generation::BatchId;

/// What happened to one call of [`BatchAccumulator::record_resolved`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// Stored; `position` is its 0-based completion order.
    Accepted { position: usize },
    /// This request index was already resolved.
    Duplicate,
    /// Tagged with another batch.
    Stale,
    /// Index outside `0..expected`.
    OutOfRange,
}

/// A resolved value with its request index and completion position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolved<T> {
    pub index: usize,
    pub position: usize,
    pub value: T,
}

/// Collects the `expected` results of one batch.
///
/// Complete exactly when every request index in `0..expected` has resolved
/// once. Nothing can be taken out before that.
#[derive(Debug)]
pub struct BatchAccumulator<T> {
    batch: BatchId,
    slots: Vec<Option<(usize, T)>>,
    resolved: usize,
}

impl<T> BatchAccumulator<T> {
    pub fn new(batch: BatchId, expected: usize) -> Self {
        Self {
            batch,
            slots: std::iter::repeat_with(|| None).take(expected).collect(),
            resolved: 0,
        }
    }

    pub fn batch(&self) -> BatchId {
        self.batch
    }

    pub fn expected(&self) -> usize {
        self.slots.len()
    }

    pub fn resolved(&self) -> usize {
        self.resolved
    }

    pub fn is_complete(&self) -> bool {
        self.resolved == self.slots.len()
    }

    pub fn record_resolved(&mut self, batch: BatchId, index: usize, value: T) -> Resolution {
        if batch != self.batch {
            return Resolution::Stale;
        }
        let Some(slot) = self.slots.get_mut(index) else {
            return Resolution::OutOfRange;
        };
        if slot.is_some() {
            return Resolution::Duplicate;
        }
        let position = self.resolved;
        *slot = Some((position, value));
        self.resolved += 1;
        Resolution::Accepted { position }
    }

    /// Take the results in `order`, or `None` while incomplete.
    pub fn finish(self, order: RenderOrder) -> Option<Vec<Resolved<T>>> {
        if !self.is_complete() {
            return None;
        }
        let mut out: Vec<Resolved<T>> = self
            .slots
            .into_iter()
            .enumerate()
            .filter_map(|(index, slot)| {
                slot.map(|(position, value)| Resolved {
                    index,
                    position,
                    value,
                })
            })
            .collect();
        if order == RenderOrder::Arrival {
            out.sort_by_key(|r| r.position);
        }
        Some(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::list::Generation;

    fn values(out: &[Resolved<&'static str>]) -> Vec<&'static str> {
        out.iter().map(|r| r.value).collect()
    }

    #[test]
    fn empty_batch_is_complete() {
        let acc: BatchAccumulator<()> = BatchAccumulator::new(Generation::new().begin(), 0);
        assert!(acc.is_complete());
        assert_eq!(acc.finish(RenderOrder::Arrival), Some(vec![]));
    }

    #[test]
    fn completes_only_when_all_resolved() {
        let batch = Generation::new().begin();
        let mut acc = BatchAccumulator::new(batch, 3);
        acc.record_resolved(batch, 0, "a");
        acc.record_resolved(batch, 2, "c");
        assert!(!acc.is_complete());
        assert_eq!(acc.resolved(), 2);

        acc.record_resolved(batch, 1, "b");
        assert!(acc.is_complete());
    }

    #[test]
    fn incomplete_batch_yields_nothing() {
        let batch = Generation::new().begin();
        let mut acc = BatchAccumulator::new(batch, 3);
        acc.record_resolved(batch, 0, "a");
        acc.record_resolved(batch, 1, "b");
        assert!(acc.finish(RenderOrder::Request).is_none());
    }

    #[test]
    fn duplicate_does_not_count_twice() {
        let batch = Generation::new().begin();
        let mut acc = BatchAccumulator::new(batch, 2);
        assert_eq!(
            acc.record_resolved(batch, 0, "a"),
            Resolution::Accepted { position: 0 }
        );
        assert_eq!(acc.record_resolved(batch, 0, "a2"), Resolution::Duplicate);
        assert!(!acc.is_complete());
        assert_eq!(acc.resolved(), 1);
    }

    #[test]
    fn stale_batch_is_discarded() {
        let generation = Generation::new();
        let old = generation.begin();
        let current = generation.begin();
        let mut acc = BatchAccumulator::new(current, 1);
        assert_eq!(acc.record_resolved(old, 0, "old"), Resolution::Stale);
        assert_eq!(acc.resolved(), 0);
        assert_eq!(acc.record_resolved(current, 5, "x"), Resolution::OutOfRange);
    }

    #[test]
    fn arrival_and_request_order() {
        let batch = Generation::new().begin();
        let build = || {
            let mut acc = BatchAccumulator::new(batch, 3);
            acc.record_resolved(batch, 2, "c");
            acc.record_resolved(batch, 0, "a");
            acc.record_resolved(batch, 1, "b");
            acc
        };

        let arrival = build().finish(RenderOrder::Arrival).unwrap();
        assert_eq!(values(&arrival), ["c", "a", "b"]);
        assert_eq!(arrival[0].index, 2);

        let request = build().finish(RenderOrder::Request).unwrap();
        assert_eq!(values(&request), ["a", "b", "c"]);
        assert_eq!(request[0].position, 1);
    }
}
