//! 应用主状态结构

use frappe_core::types::ListKind;

use super::{FocusPanel, ItemListState, ModalState, Page, UsersState};

/// 应用主状态
pub struct App {
    /// 是否应该退出
    pub should_quit: bool,

    /// 当前焦点面板
    pub focus: FocusPanel,

    /// 当前页面
    pub current_page: Page,

    /// 状态栏消息
    pub status_message: Option<String>,

    /// 后端地址（标题栏显示）
    pub base_url: String,

    /// 显示名称 / 描述所用的语言
    pub locale: String,

    /// 每页物品数
    pub page_size: usize,

    // === 各页面状态 ===
    /// 用户列表页面状态
    pub users: UsersState,
    /// 已安装物品
    pub installed: ItemListState,
    /// 推荐物品
    pub recommended: ItemListState,

    /// 弹窗状态
    pub modal: ModalState,
}

impl App {
    /// 创建新的应用实例
    pub fn new(base_url: impl Into<String>, locale: impl Into<String>, page_size: usize) -> Self {
        Self {
            should_quit: false,
            focus: FocusPanel::default(),
            current_page: Page::Users,
            status_message: None,
            base_url: base_url.into(),
            locale: locale.into(),
            page_size,
            users: UsersState::new(),
            installed: ItemListState::new(ListKind::Installed),
            recommended: ItemListState::new(ListKind::Recommended),
            modal: ModalState::new(),
        }
    }

    /// 设置状态消息
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// 清除状态消息
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    pub fn list(&self, kind: ListKind) -> &ItemListState {
        match kind {
            ListKind::Installed => &self.installed,
            ListKind::Recommended => &self.recommended,
        }
    }

    pub fn list_mut(&mut self, kind: ListKind) -> &mut ItemListState {
        match kind {
            ListKind::Installed => &mut self.installed,
            ListKind::Recommended => &mut self.recommended,
        }
    }

    /// 当前获得焦点的物品列表
    pub fn focused_list(&self) -> &ItemListState {
        self.list(self.focus.list_kind())
    }

    pub fn focused_list_mut(&mut self) -> &mut ItemListState {
        self.list_mut(self.focus.list_kind())
    }
}
