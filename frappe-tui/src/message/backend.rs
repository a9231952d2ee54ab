//! 后台任务回报的消息

use frappe_core::types::{ItemId, ListKind, LoadOutcome, User};
use frappe_core::BatchId;

/// 后台任务结果
///
/// 错误在发送前已转为字符串，消息本身可以 `Clone`。
#[derive(Debug, Clone)]
pub enum BackendMessage {
    /// 用户列表某一页
    UsersLoaded {
        page: u32,
        result: Result<Vec<User>, String>,
    },

    /// 一个物品列表的加载结果
    ListLoaded {
        kind: ListKind,
        user: String,
        /// 发起加载时开始的批次，失败的结果同样携带
        batch: BatchId,
        result: Result<LoadOutcome, String>,
    },

    /// 安装 / 移除成功（两个列表的重新加载会随后以 `ListLoaded` 到达）
    MutationDone { item: ItemId, acquired: bool },

    /// 安装 / 移除失败
    MutationFailed {
        message: String,
        /// 后端返回的原始响应体
        raw_body: Option<String>,
    },
}
