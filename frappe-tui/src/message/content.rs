//! 内容面板消息
//!
//! 列表选择、翻页、对选中项执行操作

/// 内容面板消息
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentMessage {
    // ========== 列表导航 ==========
    /// 选择上一项
    SelectPrevious,
    /// 选择下一项
    SelectNext,
    /// 跳转到第一项
    SelectFirst,
    /// 跳转到最后一项
    SelectLast,
    /// 确认选择（用户列表：进入该用户；物品列表：安装 / 移除）
    Confirm,
    /// 查看选中物品的详情
    ShowDetail,

    // ========== 翻页 ==========
    /// 上一页
    PreviousPage,
    /// 下一页
    NextPage,
    /// 跳到指定页（从 0 开始）
    GoToPage(usize),
}
