//! 弹窗组件

use frappe_core::types::ItemRecord;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::event::DefaultKeymap;
use crate::model::state::Modal;
use crate::model::App;
use crate::util::format_date;

/// 渲染弹窗（如果有活动弹窗）
pub fn render(app: &App, frame: &mut Frame) {
    let Some(ref modal) = app.modal.active else {
        return;
    };

    match modal {
        Modal::Help => render_help(frame),
        Modal::MutationFailed {
            message,
            raw_body,
            scroll,
        } => render_mutation_failed(frame, message, raw_body.as_deref(), *scroll),
        Modal::ItemDetail { record } => render_item_detail(app, frame, record),
    }
}

/// 计算居中弹窗区域
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

fn modal_block(title: &str, color: Color) -> Block<'_> {
    Block::default()
        .title(format!(" {title} "))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color))
        .style(Style::default().bg(Color::Black))
}

fn hint(text: &str) -> Line<'_> {
    Line::styled(text, Style::default().fg(Color::DarkGray))
}

/// 安装 / 移除失败：错误信息 + 可滚动的原始响应
fn render_mutation_failed(frame: &mut Frame, message: &str, raw_body: Option<&str>, scroll: u16) {
    let screen = frame.area();
    let width = screen.width.saturating_sub(8).max(40);
    let height = screen.height.saturating_sub(4).max(10);
    let area = centered_rect(width, height, screen);
    frame.render_widget(Clear, area);

    let block = modal_block("Action failed", Color::Red);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let header = Rect::new(inner.x, inner.y, inner.width, 2.min(inner.height));
    frame.render_widget(
        Paragraph::new(vec![
            Line::styled(message, Style::default().fg(Color::White).add_modifier(Modifier::BOLD)),
            hint("Raw response (↑↓ scroll, Esc close):"),
        ]),
        header,
    );

    let body_area = Rect::new(
        inner.x,
        inner.y + header.height,
        inner.width,
        inner.height.saturating_sub(header.height),
    );
    let body = raw_body.unwrap_or("(no response body)");
    let paragraph = Paragraph::new(body)
        .style(Style::default().fg(Color::Gray))
        .scroll((scroll, 0));
    frame.render_widget(paragraph, body_area);
}

/// 物品详情
fn render_item_detail(app: &App, frame: &mut Frame, record: &ItemRecord) {
    let area = centered_rect(70, 16, frame.area());
    frame.render_widget(Clear, area);

    let block = modal_block("Item", Color::Cyan);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let label = |text: &'static str| Span::styled(format!("{text:<12}"), Style::default().fg(Color::Yellow));
    let value = |text: String| Span::styled(text, Style::default().fg(Color::White));

    let mut lines = vec![
        Line::styled(
            record.display_name(&app.locale),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ),
        Line::from(""),
        Line::from(vec![label("Id"), value(record.external_id.to_string())]),
        Line::from(vec![label("Rank"), value(record.rank.to_string())]),
    ];
    if record.acquisition_date.is_some() {
        lines.push(Line::from(vec![
            label("Installed"),
            value(format_date(record.acquisition_date.as_ref())),
        ]));
    }
    if let Some(icon) = record.detail.icon_for(64) {
        lines.push(Line::from(vec![label("Icon"), value(icon.to_string())]));
    }
    if let Some(ref link) = record.detail.details {
        lines.push(Line::from(vec![label("Details"), value(link.clone())]));
    }
    if let Some(description) = record.description(&app.locale) {
        lines.push(Line::from(""));
        lines.push(Line::styled(description.to_string(), Style::default().fg(Color::Gray)));
    }
    lines.push(Line::from(""));
    lines.push(hint("Press Esc to close"));

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), inner);
}

/// 帮助弹窗
fn render_help(frame: &mut Frame) {
    let entries = DefaultKeymap::help_entries();
    let height = u16::try_from(entries.len()).unwrap_or(u16::MAX).saturating_add(6);
    let area = centered_rect(60, height, frame.area());
    frame.render_widget(Clear, area);

    let block = modal_block("Help", Color::Cyan);
    frame.render_widget(block, area);

    let inner = Rect::new(
        area.x + 2,
        area.y + 1,
        area.width.saturating_sub(4),
        area.height.saturating_sub(2),
    );

    let mut lines = vec![
        Line::styled("Shortcuts", Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
        Line::from(""),
    ];
    lines.extend(entries.into_iter().map(|(key, desc)| {
        Line::from(vec![
            Span::styled(format!("  {key:<14}"), Style::default().fg(Color::Yellow)),
            Span::styled(desc, Style::default().fg(Color::White)),
        ])
    }));
    lines.push(Line::from(""));
    lines.push(hint("Press Esc to close the help"));

    frame.render_widget(Paragraph::new(lines), inner);
}
