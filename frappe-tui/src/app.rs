//!
//! app.rs
//! 应用主循环
//!
//!
//! 在应用启动时，App 初始化为：
//!
//! App {
//!     should_quit: false,                 // 决定应用是否应该退出
//!     focus: FocusPanel::Installed,       // 用户物品页中获得焦点的列表
//!     current_page: Page::Users,          // 从用户列表开始
//!     users: UsersState { loading: true, .. },
//!     ...
//! }
//!
//! main.rs 在进入循环前已调用 backend.load_users(0)。
//!
//!
//! 主循环大约每 100 ms 执行一次（取决于有无事件）：
//! loop {
//!
//!     terminal.draw(|f| view::render(&app, f))        // 渲染 UI
//!     if app.should_quit { break }                    // 检查是否应该退出
//!     while let Ok(msg) = rx.try_recv() {             // 取出所有后台结果
//!         update::update(&mut app, &backend, AppMessage::Backend(msg))
//!     }
//!     if let Some(event) = poll_event() {             // 轮询输入，最长等待 100ms
//!         let msg = handle_event(event, &app);
//!         update::update(&mut app, &backend, msg)
//!     }
//! }
//!
//! 后台结果到达后，最迟在下一次轮询超时后被渲染。
//!

use std::time::Duration;

use anyhow::Result;
use tokio::sync::mpsc::UnboundedReceiver;

use crate::backend::Backend;
use crate::event;
use crate::message::{AppMessage, BackendMessage};
use crate::model::App;
use crate::update;
use crate::util::Term;
use crate::view;

/// 运行应用主循环
pub fn run(
    terminal: &mut Term,
    app: &mut App,
    backend: &dyn Backend,
    rx: &mut UnboundedReceiver<BackendMessage>,
) -> Result<()> {
    loop {
        // 1. 渲染 UI
        terminal.draw(|frame| {
            view::render(app, frame);
        })?;

        // 2. 检查是否应该退出
        if app.should_quit {
            break;
        }

        // 3. 处理后台任务结果
        while let Ok(msg) = rx.try_recv() {
            update::update(app, backend, AppMessage::Backend(msg));
        }

        // 4. 轮询事件（100ms 超时）
        if let Some(event) = event::poll_event(Duration::from_millis(100))? {
            let msg = event::handle_event(event, app);
            update::update(app, backend, msg);
        }
    }

    Ok(())
}
