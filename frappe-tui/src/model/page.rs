//! 页面状态定义

/// 页面枚举
///
/// 同一时间只显示一个页面；切换页面即重新加载该页面的数据。
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Page {
    /// 用户列表
    #[default]
    Users,
    /// 某个用户的已安装 / 推荐物品
    UserItems { user: String },
}

impl Page {
    /// 获取页面标题
    pub fn title(&self) -> String {
        match self {
            Page::Users => "Users".to_string(),
            Page::UserItems { user } => format!("User {user}"),
        }
    }

    /// 是否是详情页面（需要返回按钮）
    pub fn is_detail_page(&self) -> bool {
        matches!(self, Page::UserItems { .. })
    }

    /// 当前页面对应的用户
    pub fn user(&self) -> Option<&str> {
        match self {
            Page::UserItems { user } => Some(user),
            Page::Users => None,
        }
    }
}
