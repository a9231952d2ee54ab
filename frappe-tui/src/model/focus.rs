//! 焦点状态定义

use frappe_core::types::ListKind;

/// 用户物品页中的焦点面板
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusPanel {
    /// 已安装物品
    #[default]
    Installed,
    /// 推荐物品
    Recommended,
}

impl FocusPanel {
    /// 切换到另一个面板
    pub fn toggle(self) -> Self {
        match self {
            FocusPanel::Installed => FocusPanel::Recommended,
            FocusPanel::Recommended => FocusPanel::Installed,
        }
    }

    /// 面板对应的列表
    pub fn list_kind(self) -> ListKind {
        match self {
            FocusPanel::Installed => ListKind::Installed,
            FocusPanel::Recommended => ListKind::Recommended,
        }
    }
}
