//! 用户列表页面视图

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::model::App;
use crate::view::theme::{colors, Styles};

/// 渲染用户列表页面
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let state = &app.users;

    if state.loading {
        render_message(frame, area, "Loading users...");
    } else if let Some(ref error) = state.error {
        render_message(frame, area, &format!("Failed to load users: {error}"));
    } else if state.users.is_empty() {
        render_message(frame, area, "No users on this page");
    } else {
        render_list(app, frame, area);
    }
}

fn render_message(frame: &mut Frame, area: Rect, text: &str) {
    let content = vec![Line::from(""), Line::styled(format!("  {text}"), Styles::muted())];
    frame.render_widget(Paragraph::new(content), area);
}

/// 渲染用户列表
fn render_list(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();
    let items: Vec<ListItem> = app
        .users
        .users
        .iter()
        .enumerate()
        .map(|(i, user)| {
            let is_selected = i == app.users.selected;
            let style = if is_selected {
                Styles::selected()
            } else {
                Style::default().fg(c.fg)
            };
            let id = user.id.map(|id| format!("  #{id}")).unwrap_or_default();

            ListItem::new(Line::from(vec![
                Span::raw("  "),
                Span::styled(user.external_id.to_string(), style),
                Span::styled(id, Styles::muted()),
            ]))
        })
        .collect();

    let mut list_state = ListState::default();
    list_state.select(Some(app.users.selected));
    frame.render_stateful_widget(List::new(items), area, &mut list_state);
}
