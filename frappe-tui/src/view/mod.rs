//! View 层：UI 渲染
//!
//! 只读取 Model，不修改状态。每轮主循环整体重绘一次。

pub mod components;
pub mod layout;
pub mod pages;
pub mod theme;

use ratatui::Frame;

use crate::model::App;

/// 渲染整个界面
pub fn render(app: &App, frame: &mut Frame) {
    layout::render(app, frame);
}
