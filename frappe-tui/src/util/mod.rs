//！┌─────────────────────────────────────────────────────────────────────────┐
//！│                           主循环 (app.rs)                                │
//！│                                                                         │
//！│    ┌─────────┐     ┌─────────┐     ┌──────────┐     ┌─────────┐         │
//！│    │ 用户按键 │ ─▶ │  Event  │ ─▶ │ Message  │ ──▶ │ Update  │         │
//！│    └─────────┘     │  层     │     │   层     │     │   层    │          │
//！│         ▲          └─────────┘     └──────────┘     └────┬────┘         │
//！│         │                                                │              │
//！│         │          ┌─────────┐     ┌──────────┐          ▼              │
//！│         │          │  Util   │     │  Model   │ ◀───────────           │
//！│         │          │  层     │     │   层     │                         │
//！│         │          └─────────┘     └────┬─────┘                         │
//！│         │                               │                               │
//！│         │          ┌─────────┐          ▼                               │
//！│         └──────────│  View   │ ◀── 读取状态                             │
//！│           屏幕输出  │   层    │                                          │
//！│                    └─────────┘                                          │
//！└─────────────────────────────────────────────────────────────────────────┘

//!
//! src/util/mod.rs
//! Util 层：基础设施和工具函数
//!
//! Util 层提供与业务逻辑无关的基础设施代码：
//! 终端的初始化和恢复，以及按显示宽度处理文本。
//!
//!
//! 有模块结构：
//!     src/util/mod.rs
//!         mod terminal;       // 终端初始化和恢复
//!         mod text;           // 截断、补齐、日期格式
//!
//!
//!     初始化终端（terminal.rs）：
//!
//!         · Raw Mode（原始模式）
//!             - 关闭行缓冲：无需按 Enter，每个按键立即生效
//!             - 关闭字符回显：按键不会显示在终端上
//!
//!         · Alternate Screen（备用屏幕）
//!             - TUI 应用在备用屏幕运行，退出后恢复主屏幕内容
//!
//!         · panic hook
//!             - panic 时先离开原始模式与备用屏幕，panic 信息才能正常显示
//!
//!     恢复终端：
//!         无论 app::run 成功与否，main.rs 都会调用 restore_terminal()，
//!         然后再返回 run 的结果。
//!
//!
//!     文本（text.rs）：
//!         物品名称可能包含中日韩字符，列宽按 unicode-width 计算，
//!         而不是按字节或字符数。
//!

mod terminal;
mod text;

pub use terminal::{init_terminal, restore_terminal, Term};
pub use text::{format_date, pad_to_width, truncate};
