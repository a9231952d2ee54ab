//！┌─────────────────────────────────────────────────────────────────────────────┐
//！│                              主循环 (app.rs)                               │
//！│                                                                            │
//！│  ┌────────────────────────────── UI 层 ───────────────────────────────┐   │
//！│  │                                                                     │   │
//！│  │   ┌─────────┐          ┌───────────┐          ┌──────────┐         │   │
//！│  │   │  Event  │ ───────▶ │  Message  │ ───────▶ │  Update  │         │   │
//！│  │   │   层    │   翻译    │    层     │   消费    │    层    │         │   │
//！│  │   └─────────┘          │           │          └────┬─────┘         │   │
//！│  │        ▲               │ AppMessage│               │ 修改          │   │
//！│  │        │               │ ModalMsg  │               ▼               │   │
//！│  │   ┌─────────┐          │ ContentMsg│          ┌──────────┐         │   │
//！│  │   │  View   │          │ Backend   │   ┌───── │  Model   │         │   │
//！│  │   │   层    │          └───────────┘   │      │    层    │         │   │
//！│  │   └────┬────┘ ◀──────── 读取 ──────────┘      └────┬─────┘         │   │
//！│  │        │                                           │               │   │
//！│  └────────│───────────────────────────────────────────│───────────────┘   │
//！│           │                                           │ 异步调用          │
//！│           ▼                                           ▼                   │
//！│      ┌─────────┐                                ┌──────────┐              │
//！│      │  终端   │                                │ Backend  │              │
//！│      │ (Util)  │                                │    层    │              │
//！│      └─────────┘                                └────┬─────┘              │
//！│                                                      │                    │
//！│                                                      ▼                    │
//！│                                           ┌───────────────────┐           │
//！│                                           │   frappe-core     │           │
//！│                                           │                   │           │
//！│                                           └───────────────────┘           │
//！└─────────────────────────────────────────────────────────────────────────────┘



//!
//! src/update/mod.rs
//! Update 层：状态更新逻辑
//!
//! Update 层负责处理 Message，更新 Model 状态。
//! 是唯一可以修改 Model 的地方。
//!
//!
//! 有模块结构：
//!     src/update/mod.rs
//!         mod content;            // 列表选择、翻页、进入用户、安装 / 移除
//!         mod modal;              // 弹窗子消息处理
//!         mod backend;            // 后台任务结果
//!
//!         pub fn update(app: &mut App, backend: &dyn Backend, msg: AppMessage) {...}
//!
//!     需要数据的操作不在这里等待结果：update 调用 backend 的方法
//!     （load_users、load_user_items、perform），这些方法立即返回，
//!     结果稍后作为 AppMessage::Backend 回到这里。
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 后台结果（backend.rs）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     ListLoaded 在应用前要经过两道检查：
//!         - 结果所属的用户必须是当前页面的用户
//!         - 结果的批次必须仍是该列表的最新批次（backend.is_current），
//!           加载失败的结果也一样
//!
//!     不满足任一条件的结果直接丢弃，所以切换用户或安装 / 移除之后，
//!     旧批次的迟到结果不会覆盖新列表。
//!
//!     MutationFailed 打开弹窗，显示后端返回的原始响应。
//!
//!
//! Update 完成后，控制权返回主循环（app.rs）。
//! 下一轮循环时，View 层会读取更新后的 Model 来重新渲染。
//!

mod backend;
mod content;
mod modal;

use crate::backend::Backend;
use crate::message::AppMessage;
use crate::model::{App, FocusPanel, Page};

/// 处理应用消息，更新状态
pub fn update(app: &mut App, backend: &dyn Backend, msg: AppMessage) {
    match msg {
        AppMessage::Quit => {
            app.should_quit = true;
        }

        AppMessage::ToggleFocus => {
            // 如果有弹窗打开，不切换焦点
            if !app.modal.is_open() && app.current_page.is_detail_page() {
                app.focus = app.focus.toggle();
            }
        }

        AppMessage::Content(content_msg) => {
            content::update(app, backend, content_msg);
        }

        AppMessage::Modal(modal_msg) => {
            modal::update(app, modal_msg);
        }

        AppMessage::Backend(backend_msg) => {
            backend::update(app, backend, backend_msg);
        }

        AppMessage::GoBack => {
            // 如果有弹窗打开，先关闭弹窗
            if app.modal.is_open() {
                app.modal.close();
                app.clear_status();
            } else if app.current_page.is_detail_page() {
                // 如果在用户物品页，返回用户列表
                app.current_page = Page::Users;
                app.focus = FocusPanel::default();
                app.installed.reset();
                app.recommended.reset();
                app.clear_status();
            }
        }

        AppMessage::Refresh => {
            app.set_status("Refreshing...");
            refresh(app, backend);
        }

        AppMessage::ShowHelp => {
            // 显示帮助弹窗
            app.modal.show_help();
        }

        AppMessage::ClearStatus => {
            app.clear_status();
        }

        AppMessage::Noop => {}
    }
}

/// 重新加载当前页面的数据
pub fn refresh(app: &mut App, backend: &dyn Backend) {
    match app.current_page.clone() {
        Page::Users => {
            let page = app.users.page;
            app.users.begin_loading(page);
            backend.load_users(page);
        }
        Page::UserItems { user } => {
            app.installed.begin_loading();
            app.recommended.begin_loading();
            backend.load_user_items(&user);
        }
    }
}
