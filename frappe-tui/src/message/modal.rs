//! 弹窗消息类型

/// 弹窗相关消息
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModalMessage {
    /// 关闭弹窗
    Close,

    /// 向上滚动（原始响应内容）
    ScrollUp,

    /// 向下滚动
    ScrollDown,
}
