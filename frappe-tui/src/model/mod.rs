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
//! src/model/mod.rs
//! Model 层：应用状态定义
//!
//! Model 层是应用状态的 “唯一真相来源”。
//! 这一层只包含纯数据结构，不包含任何业务逻辑。
//! 所有状态变更都通过 Update 层来触发。
//!
//!
//! 有模块结构：
//!     src/model/mod.rs
//!         mod app;            // 主应用状态
//!         mod focus;          // 焦点状态（已安装 / 推荐）
//!         mod page;           // 页面路由状态
//!
//!         pub mod state;      // 页面数据状态
//!
//!     Page 只标识当前位置（用户列表，或某个用户的物品页），
//!     State 存储列表、选中项、分页器、加载状态等。
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 一、主应用状态（App）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!         pub struct App {
//!             pub should_quit: bool,              // 退出标志
//!             pub focus: FocusPanel,              // 当前焦点
//!             pub current_page: Page,             // 当前页面
//!             pub status_message: Option<String>, // 状态栏消息
//!
//!             pub users: UsersState,              // 用户列表
//!             pub installed: ItemListState,       // 已安装物品
//!             pub recommended: ItemListState,     // 推荐物品
//!
//!             pub modal: ModalState               // 弹窗状态
//!         }
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 二、物品列表（ItemListState）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     一个列表只有在整批详情都返回后才被替换（apply），同时重建分页器，
//!     回到第一页。每页固定条目数（默认 4）。
//!
//!     数据流：
//!         后端完成一批加载
//!             ↓
//!         BackendMessage::ListLoaded { kind, user, batch, result }
//!             ↓
//!         update/backend.rs 检查批次是否仍为最新，再调用 apply()
//!             ↓
//!         view/pages/user_items.rs 渲染 visible_records() 与翻页控件
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 三、弹窗状态（ModalState）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!         Modal 枚举：
//!             - Help
//!             - MutationFailed { message, raw_body, scroll }
//!             - ItemDetail { record }
//!
//!         ModalState.active = None 表示无弹窗。
//!

mod app;
mod focus;
mod page;
pub mod state;

pub use app::App;
pub use focus::FocusPanel;
pub use page::Page;
pub use state::{ItemListState, Modal, ModalState, UsersState};
