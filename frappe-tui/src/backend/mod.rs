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
//!
//! src/backend/mod.rs
//! Backend 层：业务服务
//!
//! Backend 层与 UI 完全解耦，通过 frappe-core 访问 FRAPPE 推荐服务。
//!
//!
//! 有模块结构：
//!     src/backend/mod.rs
//!         mod core_service;       // 核心服务入口（Backend trait + CoreService）
//!         mod config_service;     // 配置文件（JSON）
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 一、核心服务（CoreService）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     在 src/backend/core_service.rs 中定义：
//!
//!         CoreService 持有：
//!             - tokio 运行时的 Handle
//!             - UserItemsController（两个列表的批次代号 + 安装 / 移除）
//!             - UserService（用户列表）
//!             - 发往主循环的 UnboundedSender<BackendMessage>
//!
//!         提供的操作（Backend trait）：
//!             - load_users(page)          用户列表某一页
//!             - load_list(kind, user)     重新加载一个物品列表
//!             - load_user_items(user)     同时加载两个列表
//!             - perform(action)           安装 / 移除，然后两个列表各重新加载一次
//!             - is_current(kind, batch)   结果是否属于最新批次
//!
//!         load_list 在派发任务前就开始新批次，
//!         所以任何还在进行中的旧批次在返回时都已过期。
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 二、配置（JsonConfigService）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     在 src/backend/config_service.rs 中定义：
//!
//!         存储位置：~/.config/frappe-tui/config.json
//!         文件不存在时使用默认配置；命令行参数可以覆盖其中的字段。
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 三、数据流
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     用户在推荐列表上按 Enter
//!         ↓
//!     Update 层处理 ContentMessage::Confirm，调用 backend.perform(action)
//!         ↓
//!     CoreService 在 tokio 任务中调用 UserItemsController::perform
//!         ↓
//!     POST / DELETE 成功后，两个列表各重新加载一次
//!         ↓
//!     结果以 BackendMessage 发回，app.rs 用 try_recv() 取出
//!         ↓
//!     Update 层丢弃过期批次，更新 Model
//!         ↓
//!     View 层重新渲染
//!

mod config_service;
mod core_service;

pub use config_service::{AppConfig, ConfigService, JsonConfigService, DEFAULT_BASE_URL};
pub use core_service::{Backend, CoreService};

#[cfg(test)]
pub use core_service::mock;
