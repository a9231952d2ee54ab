//! 用户物品页面视图
//!
//! 左侧为已安装物品，右侧为推荐物品。每个列表一次只显示一页，
//! 底部是翻页控件。

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};
use frappe_core::types::{ItemRecord, ListKind};

use crate::model::{App, ItemListState};
use crate::util::{format_date, pad_to_width, truncate};
use crate::view::components::pager;
use crate::view::theme::{colors, Styles};

/// 日期列宽度（`2024-01-31`）
const DATE_WIDTH: usize = 10;

/// 渲染用户物品页面
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    for (kind, column) in [ListKind::Installed, ListKind::Recommended].into_iter().zip(columns.iter()) {
        let focused = app.focus.list_kind() == kind;
        render_pane(app, app.list(kind), focused, frame, *column);
    }
}

fn pane_title(state: &ItemListState) -> String {
    let name = match state.kind {
        ListKind::Installed => "Installed",
        ListKind::Recommended => "Recommended",
    };
    match &state.list {
        Some(list) => format!(" {name} ({}) ", list.len()),
        None => format!(" {name} "),
    }
}

fn render_pane(app: &App, state: &ItemListState, focused: bool, frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .title(pane_title(state))
        .title_style(Styles::title())
        .borders(Borders::ALL)
        .border_style(Styles::border(focused));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if let Some(text) = placeholder(state) {
        let content = vec![Line::from(""), Line::styled(format!("  {text}"), Styles::muted())];
        frame.render_widget(Paragraph::new(content), inner);
        return;
    }

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(inner);

    let width = rows[0].width as usize;
    let items: Vec<ListItem> = state
        .visible_records()
        .iter()
        .enumerate()
        .map(|(i, record)| {
            let selected = focused && i == state.selected;
            render_record(app, record, selected, width)
        })
        .collect();
    frame.render_widget(List::new(items), rows[0]);

    if let Some(ref paginator) = state.paginator {
        frame.render_widget(Paragraph::new(pager::line(paginator)), rows[1]);
    }
}

/// 列表为空或尚未加载时显示的文字
fn placeholder(state: &ItemListState) -> Option<String> {
    if state.loading && state.list.is_none() {
        return Some("Loading...".to_string());
    }
    if let Some(ref error) = state.error {
        return Some(format!("Failed: {error}"));
    }
    if let Some((resolved, expected)) = state.incomplete {
        return Some(format!("Only {resolved} of {expected} items could be loaded"));
    }
    match &state.list {
        Some(list) if list.is_empty() => Some("No items".to_string()),
        None => Some(String::new()),
        _ => None,
    }
}

/// 一个物品两行：操作 + 名称 + 安装日期，描述
fn render_record(app: &App, record: &ItemRecord, selected: bool, width: usize) -> ListItem<'static> {
    let c = colors();
    let base = if selected {
        Styles::selected()
    } else {
        Style::default().fg(c.fg)
    };

    let action = Span::styled(
        format!(" [{}] ", record.install_or_remove()),
        base.fg(c.action(record.install_or_remove_color()))
            .add_modifier(Modifier::BOLD),
    );

    let date = format_date(record.acquisition_date.as_ref());
    // 操作列 5 + 日期列 + 间隔
    let name_width = width.saturating_sub(5 + DATE_WIDTH + 2);
    let name = pad_to_width(&truncate(&record.display_name(&app.locale), name_width), name_width);

    let first = Line::from(vec![
        action,
        Span::styled(name, base),
        Span::raw(" "),
        Span::styled(date, Styles::muted()),
    ]);

    let description = record
        .description(&app.locale)
        .map(|d| d.split_whitespace().collect::<Vec<_>>().join(" "))
        .unwrap_or_default();
    let second = Line::styled(
        format!("     {}", truncate(&description, width.saturating_sub(5))),
        Styles::muted(),
    );

    ListItem::new(vec![first, second])
}
