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
//! src/event/mod.rs
//! Event 层：事件处理
//!
//! 负责将键盘输入转换为 Message。
//!
//!
//! 有模块结构：
//!     src/event/mod.rs
//!         mod handler;        // 事件处理器
//!         mod keymap;         // 快捷键映射
//!
//!         pub use handler::{handle_event, poll_event};
//!
//!
//!     其中有：
//!         · poll_event      事件轮询，受 ~/app.rs 调用，最长阻塞 timeout
//!
//!         · handle_event    事件分发
//!             - 有弹窗打开时，调用 handle_modal_keys 处理（关闭、滚动）
//!             - 全局快捷键，就地处理（退出、帮助、刷新、返回、切换焦点）
//!             - 其余按键交给 handle_list_keys（选择、翻页、确认）
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 按键
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!         ↑/↓ j/k         → ContentMessage::SelectPrevious / SelectNext
//!         Enter           → ContentMessage::Confirm
//!         ←/→ h/l [ ]     → ContentMessage::PreviousPage / NextPage
//!         1-9             → ContentMessage::GoToPage(n - 1)
//!         i               → ContentMessage::ShowDetail
//!         Tab             → AppMessage::ToggleFocus
//!         Esc             → AppMessage::GoBack
//!
//!     handler.rs 只创建消息，不修改状态；
//!     在 src/app.rs 中 update::update(app, &backend, msg) 消费它。
//!

mod handler;
mod keymap;

pub use handler::{handle_event, poll_event};
pub use keymap::DefaultKeymap;
