//! Client-side pagination over a completed list

use std::ops::Range;

use frappe_client::ItemId;
use serde::Serialize;

/// One entry of the control strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PagerControl {
    Previous,
    /// `number` is 1-indexed.
    Page { number: usize, active: bool },
    Next,
}

/// Fixed-size pages over an ordered list of item ids.
///
/// Starts at page 0. Every transition is range-checked; an out-of-range
/// target leaves the state untouched. Rebuilding a paginator is the only
/// way to reset it.
#[derive(Debug, Clone)]
pub struct Paginator {
    ids: Vec<ItemId>,
    page_size: usize,
    current: usize,
}

impl Paginator {
    /// `page_size` of 0 is treated as 1.
    pub fn new(ids: Vec<ItemId>, page_size: usize) -> Self {
        Self {
            ids,
            page_size: page_size.max(1),
            current: 0,
        }
    }

    pub fn item_count(&self) -> usize {
        self.ids.len()
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn num_pages(&self) -> usize {
        self.ids.len().div_ceil(self.page_size)
    }

    pub fn current(&self) -> usize {
        self.current
    }

    /// Returns whether the page changed.
    pub fn go_to(&mut self, page: usize) -> bool {
        if page >= self.num_pages() {
            return false;
        }
        self.current = page;
        true
    }

    pub fn previous(&mut self) -> bool {
        match self.current.checked_sub(1) {
            Some(page) => self.go_to(page),
            None => false,
        }
    }

    pub fn next(&mut self) -> bool {
        self.go_to(self.current + 1)
    }

    /// Indices `[page * size, page * size + size)` clamped to the list.
    pub fn visible_range(&self) -> Range<usize> {
        let start = (self.current * self.page_size).min(self.ids.len());
        let end = (start + self.page_size).min(self.ids.len());
        start..end
    }

    pub fn visible_ids(&self) -> &[ItemId] {
        &self.ids[self.visible_range()]
    }

    /// Previous, one entry per page, Next.
    pub fn controls(&self) -> Vec<PagerControl> {
        let mut controls = Vec::with_capacity(self.num_pages() + 2);
        controls.push(PagerControl::Previous);
        controls.extend((0..self.num_pages()).map(|page| PagerControl::Page {
            number: page + 1,
            active: page == self.current,
        }));
        controls.push(PagerControl::Next);
        controls
    }
}
