//! 弹窗状态定义

use frappe_core::types::ItemRecord;

/// 弹窗类型
#[derive(Debug, Clone)]
pub enum Modal {
    /// 帮助信息
    Help,
    /// 安装 / 移除失败，显示后端原始响应
    MutationFailed {
        message: String,
        raw_body: Option<String>,
        /// 原始响应的滚动偏移（行）
        scroll: u16,
    },
    /// 物品详情
    ItemDetail { record: Box<ItemRecord> },
}

/// 弹窗状态
#[derive(Debug, Default)]
pub struct ModalState {
    /// 当前活动的弹窗
    pub active: Option<Modal>,
}

impl ModalState {
    /// 创建新的弹窗状态
    pub fn new() -> Self {
        Self::default()
    }

    /// 关闭弹窗
    pub fn close(&mut self) {
        self.active = None;
    }

    /// 是否有活动弹窗
    pub fn is_open(&self) -> bool {
        self.active.is_some()
    }

    /// 显示帮助弹窗
    pub fn show_help(&mut self) {
        self.active = Some(Modal::Help);
    }

    pub fn show_mutation_failed(&mut self, message: String, raw_body: Option<String>) {
        self.active = Some(Modal::MutationFailed {
            message,
            raw_body,
            scroll: 0,
        });
    }

    pub fn show_item_detail(&mut self, record: ItemRecord) {
        self.active = Some(Modal::ItemDetail {
            record: Box::new(record),
        });
    }

    /// 向上滚动原始响应
    pub fn scroll_up(&mut self) {
        if let Some(Modal::MutationFailed { scroll, .. }) = self.active.as_mut() {
            *scroll = scroll.saturating_sub(1);
        }
    }

    /// 向下滚动原始响应
    pub fn scroll_down(&mut self) {
        if let Some(Modal::MutationFailed {
            scroll,
            raw_body: Some(body),
            ..
        }) = self.active.as_mut()
        {
            let max = u16::try_from(body.lines().count().saturating_sub(1)).unwrap_or(u16::MAX);
            *scroll = (*scroll + 1).min(max);
        }
    }
}
