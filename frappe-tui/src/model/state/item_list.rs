//! 物品列表状态
//!
//! 一个列表只在整批详情都返回后才显示（`apply`）；之后由 `Paginator`
//! 决定当前页可见的物品。

use frappe_core::types::{ItemList, ItemRecord, ListKind};
use frappe_core::Paginator;

/// 物品列表状态（已安装 / 推荐各一份）
#[derive(Debug)]
pub struct ItemListState {
    pub kind: ListKind,
    /// 最近一次完整加载的列表
    pub list: Option<ItemList>,
    /// 列表非空时才存在
    pub paginator: Option<Paginator>,
    /// 当前页内的选中索引
    pub selected: usize,
    /// 是否正在加载
    pub loading: bool,
    /// 未完成的批次：(已返回, 期望)
    pub incomplete: Option<(usize, usize)>,
    /// 错误信息
    pub error: Option<String>,
}

impl ItemListState {
    pub fn new(kind: ListKind) -> Self {
        Self {
            kind,
            list: None,
            paginator: None,
            selected: 0,
            loading: false,
            incomplete: None,
            error: None,
        }
    }

    /// 切换用户时清空
    pub fn reset(&mut self) {
        *self = Self::new(self.kind);
    }

    pub fn begin_loading(&mut self) {
        self.loading = true;
        self.error = None;
    }

    /// 显示一个完整的列表，重建分页器（回到第一页）
    pub fn apply(&mut self, list: ItemList, page_size: usize) {
        self.paginator = (!list.is_empty()).then(|| Paginator::new(list.ids(), page_size));
        self.list = Some(list);
        self.selected = 0;
        self.loading = false;
        self.incomplete = None;
        self.error = None;
    }

    /// 有详情请求失败，本轮不显示任何物品
    pub fn mark_incomplete(&mut self, resolved: usize, expected: usize) {
        self.list = None;
        self.paginator = None;
        self.selected = 0;
        self.loading = false;
        self.incomplete = Some((resolved, expected));
    }

    pub fn set_error(&mut self, error: String) {
        self.loading = false;
        self.error = Some(error);
    }

    /// 当前页可见的物品
    pub fn visible_records(&self) -> &[ItemRecord] {
        match (&self.list, &self.paginator) {
            (Some(list), Some(pager)) => &list.records[pager.visible_range()],
            _ => &[],
        }
    }

    /// 获取当前选中的物品
    pub fn selected_record(&self) -> Option<&ItemRecord> {
        self.visible_records().get(self.selected)
    }

    /// 选择上一项
    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// 选择下一项
    pub fn select_next(&mut self) {
        let len = self.visible_records().len();
        if len > 0 && self.selected < len - 1 {
            self.selected += 1;
        }
    }

    /// 选择第一项
    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    /// 选择最后一项
    pub fn select_last(&mut self) {
        self.selected = self.visible_records().len().saturating_sub(1);
    }

    pub fn next_page(&mut self) {
        self.turn(Paginator::next);
    }

    pub fn previous_page(&mut self) {
        self.turn(Paginator::previous);
    }

    pub fn go_to_page(&mut self, page: usize) {
        self.turn(|pager| pager.go_to(page));
    }

    fn turn(&mut self, step: impl FnOnce(&mut Paginator) -> bool) {
        if let Some(pager) = self.paginator.as_mut() {
            if step(pager) {
                self.selected = 0;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use frappe_core::types::{ItemDetail, ItemId, ItemStub};
    use frappe_core::Generation;

    fn list(n: usize) -> ItemList {
        let records = (0..n)
            .map(|i| {
                let stub = ItemStub {
                    external_id: ItemId::new(i.to_string()),
                    acquisition_date: None,
                    removed_date: None,
                };
                ItemRecord::merge(&stub, ItemDetail::default(), ListKind::Installed, "u1", i, i)
            })
            .collect();
        ItemList {
            batch: Generation::new().begin(),
            kind: ListKind::Installed,
            user: "u1".to_string(),
            records,
        }
    }

    fn visible_ids(state: &ItemListState) -> Vec<&str> {
        state
            .visible_records()
            .iter()
            .map(|r| r.external_id.as_str())
            .collect()
    }

    #[test]
    fn apply_builds_first_page() {
        let mut state = ItemListState::new(ListKind::Installed);
        state.begin_loading();
        state.apply(list(10), 4);
        assert!(!state.loading);
        assert_eq!(visible_ids(&state), ["0", "1", "2", "3"]);
        assert_eq!(state.paginator.as_ref().map(Paginator::num_pages), Some(3));
    }

    #[test]
    fn empty_list_has_no_paginator() {
        let mut state = ItemListState::new(ListKind::Installed);
        state.apply(list(0), 4);
        assert!(state.paginator.is_none());
        assert!(state.visible_records().is_empty());
        state.next_page();
    }

    #[test]
    fn paging_resets_selection() {
        let mut state = ItemListState::new(ListKind::Installed);
        state.apply(list(10), 4);
        state.select_last();
        assert_eq!(state.selected, 3);

        state.go_to_page(2);
        assert_eq!(visible_ids(&state), ["8", "9"]);
        assert_eq!(state.selected, 0);

        state.select_next();
        state.next_page();
        assert_eq!(state.selected, 1, "no-op page turn keeps selection");
    }

    #[test]
    fn reapplying_resets_to_first_page() {
        let mut state = ItemListState::new(ListKind::Installed);
        state.apply(list(10), 4);
        state.next_page();
        state.apply(list(10), 4);
        assert_eq!(state.paginator.as_ref().map(Paginator::current), Some(0));
    }

    #[test]
    fn incomplete_batch_shows_nothing() {
        let mut state = ItemListState::new(ListKind::Installed);
        state.apply(list(3), 4);
        state.mark_incomplete(2, 3);
        assert!(state.visible_records().is_empty());
        assert_eq!(state.incomplete, Some((2, 3)));
    }
}
