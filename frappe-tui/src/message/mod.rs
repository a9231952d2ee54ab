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
//! src/message/mod.rs
//! Message 层：事件消息定义
//!
//! 作为 Event —→ Update 之间的桥梁。
//! 按键翻译成 AppMessage，后台任务的结果包装成 AppMessage::Backend，
//! 二者走同一个 update 入口。
//!
//!
//! 有模块结构：
//!     src/message/mod.rs
//!         mod app;            // 主消息
//!         mod backend;        // 后台任务回报的结果
//!         mod content;        // 列表、翻页、执行操作
//!         mod modal;          // 弹窗
//!
//!
//!     后台消息的来源：
//!         backend/core_service.rs 在 tokio 任务里调用 frappe-core，
//!         把结果通过无界 channel 发回主循环：
//!
//!             tx.send(BackendMessage::ListLoaded { kind, user, batch, result })
//!
//!         app.rs 每轮循环用 try_recv() 取出所有待处理的消息，
//!         包装成 AppMessage::Backend(msg) 交给 update。
//!
//!     列表消息带有发起加载时的 BatchId（成功和失败都带），
//!     update 层会丢弃不是最新批次的结果。
//!

mod app;
mod backend;
mod content;
mod modal;

pub use app::AppMessage;
pub use backend::BackendMessage;
pub use content::ContentMessage;
pub use modal::ModalMessage;
