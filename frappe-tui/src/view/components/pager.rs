//! 翻页控件
//!
//! `‹ 1 2 3 ›`，当前页高亮。

use frappe_core::{PagerControl, Paginator};
use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

use crate::view::theme::colors;

/// 把分页器的控件转成一行
pub fn line(pager: &Paginator) -> Line<'static> {
    let c = colors();
    let mut spans = Vec::new();

    for control in pager.controls() {
        let span = match control {
            PagerControl::Previous => {
                let enabled = pager.current() > 0;
                Span::styled(" ‹ ", arrow_style(enabled))
            }
            PagerControl::Next => {
                let enabled = pager.current() + 1 < pager.num_pages();
                Span::styled(" › ", arrow_style(enabled))
            }
            PagerControl::Page { number, active } => {
                let style = if active {
                    Style::default()
                        .fg(c.selected_fg)
                        .bg(c.highlight)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(c.fg)
                };
                Span::styled(format!(" {number} "), style)
            }
        };
        spans.push(span);
    }

    Line::from(spans)
}

fn arrow_style(enabled: bool) -> Style {
    let c = colors();
    Style::default().fg(if enabled { c.fg } else { c.muted })
}

#[cfg(test)]
mod tests {
    use super::*;
    use frappe_core::types::ItemId;

    fn pager(n: usize) -> Paginator {
        Paginator::new((0..n).map(|i| ItemId::new(i.to_string())).collect(), 4)
    }

    fn text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn one_entry_per_page_between_arrows() {
        assert_eq!(text(&line(&pager(10))), " ‹  1  2  3  › ");
    }

    #[test]
    fn active_page_follows_current() {
        let mut pager = pager(10);
        pager.go_to(2);
        let line = line(&pager);
        let active = &line.spans[3];
        assert_eq!(active.content.as_ref(), " 3 ");
        assert!(active.style.add_modifier.contains(Modifier::BOLD));
        assert!(!line.spans[1].style.add_modifier.contains(Modifier::BOLD));
    }
}
