//! 底部状态栏组件

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::model::{App, Page};
use crate::view::theme::Styles;

/// 渲染状态栏
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let mut spans = Vec::new();

    for (i, (key, desc)) in get_hints(app).iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(*key, Styles::hint_key()));
        spans.push(Span::raw(" "));
        spans.push(Span::styled(*desc, Styles::hint_desc()));
    }

    // 如果有状态消息，显示在右侧
    if let Some(ref msg) = app.status_message {
        spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        spans.push(Span::styled(msg.clone(), Style::default().fg(Color::Yellow)));
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Styles::statusbar());
    frame.render_widget(paragraph, area);
}

/// 根据当前页面生成快捷键提示
fn get_hints(app: &App) -> Vec<(&'static str, &'static str)> {
    let mut hints = vec![("↑↓", "Select")];

    match &app.current_page {
        Page::Users => {
            hints.push(("Enter", "Open"));
            hints.push(("←→", "Page"));
        }
        Page::UserItems { .. } => {
            hints.push(("Tab", "Switch list"));
            hints.push(("Enter", "Install/Remove"));
            hints.push(("←→ 1-9", "Page"));
            hints.push(("Esc", "Back"));
        }
    }

    hints.push(("?", "Help"));
    hints.push(("q", "Quit"));
    hints
}
