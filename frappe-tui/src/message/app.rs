//! 应用主消息枚举

use super::{BackendMessage, ContentMessage, ModalMessage};

/// 应用主消息
#[derive(Debug, Clone)]
pub enum AppMessage {
    /// 退出应用
    Quit,

    /// 在已安装 / 推荐两个列表之间切换焦点
    ToggleFocus,

    /// 内容面板相关消息
    Content(ContentMessage),

    /// 弹窗相关消息
    Modal(ModalMessage),

    /// 后台任务结果
    Backend(BackendMessage),

    /// 返回上一页
    GoBack,

    /// 重新加载当前页面
    Refresh,

    /// 显示帮助
    ShowHelp,

    /// 清除状态消息
    ClearStatus,

    /// 无操作（用于忽略未处理的事件）
    Noop,
}
