//! 主布局渲染

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::model::{App, Page};

use super::components;
use super::pages;
use super::theme::{colors, Styles};

/// 渲染主布局
pub fn render(app: &App, frame: &mut Frame) {
    let size = frame.area();

    // 三层布局：标题栏 + 主内容区 + 状态栏
    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // 标题栏
            Constraint::Min(1),    // 主内容区
            Constraint::Length(1), // 状态栏
        ])
        .split(size);

    render_title_bar(app, frame, main_layout[0]);

    match &app.current_page {
        Page::Users => render_users_page(app, frame, main_layout[1]),
        // 两个列表各自带边框
        Page::UserItems { .. } => pages::user_items::render(app, frame, main_layout[1]),
    }

    components::statusbar::render(app, frame, main_layout[2]);

    // 渲染弹窗（在最上层）
    components::modal::render(app, frame);
}

/// 渲染标题栏
fn render_title_bar(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();
    let text = format!(
        " FRAPPE v{} │ {} │ {}",
        env!("CARGO_PKG_VERSION"),
        app.current_page.title(),
        app.base_url
    );
    let title = Paragraph::new(text).style(Style::default().bg(c.highlight).fg(c.selected_fg));
    frame.render_widget(title, area);
}

fn render_users_page(app: &App, frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .title(format!(" Users (page {}) ", app.users.page + 1))
        .title_style(Styles::title())
        .borders(Borders::ALL)
        .border_style(Styles::border(true));

    let inner_area = block.inner(area);
    frame.render_widget(block, area);
    pages::users::render(app, frame, inner_area);
}
