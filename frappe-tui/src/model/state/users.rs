//! 用户列表页面状态

use frappe_core::types::User;

/// 用户列表页面状态
///
/// 后端分页：`page` 对应 `offset = page * page_size`。
#[derive(Debug, Default)]
pub struct UsersState {
    /// 当前页的用户
    pub users: Vec<User>,
    /// 当前选中的索引
    pub selected: usize,
    /// 当前页（从 0 开始）
    pub page: u32,
    /// 是否正在加载
    pub loading: bool,
    /// 错误信息
    pub error: Option<String>,
}

impl UsersState {
    /// 创建新的用户列表状态
    pub fn new() -> Self {
        Self::default()
    }

    /// 选择上一项
    pub fn select_previous(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
        }
    }

    /// 选择下一项
    pub fn select_next(&mut self) {
        if !self.users.is_empty() && self.selected < self.users.len() - 1 {
            self.selected += 1;
        }
    }

    /// 选择第一项
    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    /// 选择最后一项
    pub fn select_last(&mut self) {
        if !self.users.is_empty() {
            self.selected = self.users.len() - 1;
        }
    }

    /// 获取当前选中的用户
    pub fn selected_user(&self) -> Option<&User> {
        self.users.get(self.selected)
    }

    /// 开始加载第 `page` 页
    pub fn begin_loading(&mut self, page: u32) {
        self.page = page;
        self.loading = true;
        self.error = None;
    }

    /// 设置用户列表
    pub fn set_users(&mut self, page: u32, users: Vec<User>) {
        self.users = users;
        self.page = page;
        self.selected = 0;
        self.loading = false;
        self.error = None;
    }

    pub fn set_error(&mut self, error: String) {
        self.loading = false;
        self.error = Some(error);
    }
}
