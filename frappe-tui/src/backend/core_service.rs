//! 核心服务
//!
//! 封装 frappe-core 的各种服务。所有调用都在 tokio 运行时上以任务执行，
//! 结果通过 channel 以 `BackendMessage` 发回主循环，UI 线程从不阻塞。

use std::sync::Arc;

use frappe_core::services::{ServiceContext, UserItemsController, UserService};
use frappe_core::types::{ActionKind, ItemAction, ListKind, LoadOutcome};
use frappe_core::{BatchId, CoreResult};
use tokio::runtime::Handle;
use tokio::sync::mpsc::UnboundedSender;

use crate::message::BackendMessage;

/// UI 可以发起的后台操作
///
/// 所有方法立即返回；结果稍后作为 `BackendMessage` 到达。
pub trait Backend {
    /// 加载用户列表的第 `page` 页
    fn load_users(&self, page: u32);

    /// 重新加载一个列表，之前未完成的同类批次作废
    fn load_list(&self, kind: ListKind, user: &str);

    /// 同时加载已安装与推荐列表
    fn load_user_items(&self, user: &str) {
        self.load_list(ListKind::Installed, user);
        self.load_list(ListKind::Recommended, user);
    }

    /// 执行安装 / 移除，成功后两个列表各重新加载一次
    fn perform(&self, action: ItemAction);

    /// `batch` 是否仍是 `kind` 的最新批次
    fn is_current(&self, kind: ListKind, batch: BatchId) -> bool;
}

/// TUI 核心服务
pub struct CoreService {
    handle: Handle,
    controller: UserItemsController,
    users: Arc<UserService>,
    tx: UnboundedSender<BackendMessage>,
    users_page_size: u32,
}

impl CoreService {
    /// 创建核心服务实例
    pub fn new(
        ctx: Arc<ServiceContext>,
        handle: Handle,
        tx: UnboundedSender<BackendMessage>,
        users_page_size: u32,
    ) -> Self {
        Self {
            handle,
            controller: UserItemsController::new(ctx.clone()),
            users: Arc::new(UserService::new(ctx)),
            tx,
            users_page_size,
        }
    }
}

impl Backend for CoreService {
    fn load_users(&self, page: u32) {
        let users = self.users.clone();
        let tx = self.tx.clone();
        let page_size = self.users_page_size;
        self.handle.spawn(async move {
            let result = users
                .list_users(page, page_size)
                .await
                .map_err(|e| e.to_string());
            send(&tx, BackendMessage::UsersLoaded { page, result });
        });
    }

    fn load_list(&self, kind: ListKind, user: &str) {
        let batch = self.controller.begin(kind);
        let controller = self.controller.clone();
        let tx = self.tx.clone();
        let user = user.to_string();
        log::debug!("Loading {kind:?} list of {user} as batch {batch}");
        self.handle.spawn(async move {
            let result = controller.load_batch(kind, &user, batch).await;
            send(&tx, list_loaded(kind, user, batch, result));
        });
    }

    fn perform(&self, action: ItemAction) {
        let controller = self.controller.clone();
        let tx = self.tx.clone();
        self.handle.spawn(async move {
            match controller.perform(&action).await {
                Ok(outcome) => {
                    send(
                        &tx,
                        BackendMessage::MutationDone {
                            item: action.item.clone(),
                            acquired: action.kind == ActionKind::Acquire,
                        },
                    );
                    send(
                        &tx,
                        list_loaded(
                            ListKind::Installed,
                            action.user.clone(),
                            outcome.installed_batch,
                            outcome.installed,
                        ),
                    );
                    send(
                        &tx,
                        list_loaded(
                            ListKind::Recommended,
                            action.user,
                            outcome.recommended_batch,
                            outcome.recommended,
                        ),
                    );
                }
                Err(e) => send(
                    &tx,
                    BackendMessage::MutationFailed {
                        message: e.to_string(),
                        raw_body: e.raw_body().map(str::to_string),
                    },
                ),
            }
        });
    }

    fn is_current(&self, kind: ListKind, batch: BatchId) -> bool {
        self.controller.is_current(kind, batch)
    }
}

fn list_loaded(
    kind: ListKind,
    user: String,
    batch: BatchId,
    result: CoreResult<LoadOutcome>,
) -> BackendMessage {
    BackendMessage::ListLoaded {
        kind,
        user,
        batch,
        result: result.map_err(|e| e.to_string()),
    }
}

fn send(tx: &UnboundedSender<BackendMessage>, msg: BackendMessage) {
    if tx.send(msg).is_err() {
        log::debug!("UI loop has exited, dropping backend message");
    }
}
