//! 事件处理器

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::event::keymap::DefaultKeymap;
use crate::message::{AppMessage, ContentMessage, ModalMessage};
use crate::model::App;

/// 轮询事件
pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// 处理事件，返回对应的消息
pub fn handle_event(event: Event, app: &App) -> AppMessage {
    match event {
        Event::Key(key_event) => handle_key_event(key_event, app), // 键盘事件
        _ => AppMessage::Noop,                                     // Resize 会在下一轮自动重绘
    }
}

/// 处理键盘事件
fn handle_key_event(key: KeyEvent, app: &App) -> AppMessage {
    // 只处理 Press 事件，忽略 Release 和 Repeat
    if key.kind != KeyEventKind::Press {
        return AppMessage::Noop;
    }

    // 如果有弹窗打开，优先处理弹窗输入
    if app.modal.is_open() {
        return handle_modal_keys(key);
    }

    // 全局快捷键
    if DefaultKeymap::FORCE_QUIT.matches(&key) || DefaultKeymap::QUIT.matches(&key) {
        return AppMessage::Quit;
    }
    if DefaultKeymap::HELP.matches(&key)
        || (key.modifiers == KeyModifiers::SHIFT && key.code == KeyCode::Char('?'))
    {
        return AppMessage::ShowHelp;
    }
    if DefaultKeymap::REFRESH.matches(&key) {
        return AppMessage::Refresh;
    }
    if DefaultKeymap::BACK.matches(&key) {
        return AppMessage::GoBack;
    }
    if DefaultKeymap::TOGGLE_FOCUS.matches(&key) {
        return AppMessage::ToggleFocus;
    }

    handle_list_keys(key)
}

/// 处理列表页面的按键
fn handle_list_keys(key: KeyEvent) -> AppMessage {
    if DefaultKeymap::DETAIL.matches(&key) {
        return AppMessage::Content(ContentMessage::ShowDetail);
    }

    let msg = match key.code {
        // ↑ 或 k: 上一项
        KeyCode::Up | KeyCode::Char('k') => ContentMessage::SelectPrevious,
        // ↓ 或 j: 下一项
        KeyCode::Down | KeyCode::Char('j') => ContentMessage::SelectNext,
        KeyCode::Home => ContentMessage::SelectFirst,
        KeyCode::End => ContentMessage::SelectLast,
        KeyCode::Enter => ContentMessage::Confirm,
        // 翻页
        KeyCode::Left | KeyCode::Char('h' | '[') | KeyCode::PageUp => ContentMessage::PreviousPage,
        KeyCode::Right | KeyCode::Char('l' | ']') | KeyCode::PageDown => ContentMessage::NextPage,
        // 数字键跳页（1 开始）
        KeyCode::Char(c @ '1'..='9') => {
            let page = c.to_digit(10).map_or(0, |d| d as usize - 1);
            ContentMessage::GoToPage(page)
        }
        _ => return AppMessage::Noop,
    };
    AppMessage::Content(msg)
}

/// 处理弹窗中的按键
fn handle_modal_keys(key: KeyEvent) -> AppMessage {
    match (key.modifiers, key.code) {
        // Esc 和 Ctrl+C 始终可以关闭弹窗
        (KeyModifiers::CONTROL, KeyCode::Char('c'))
        | (KeyModifiers::NONE, KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q')) => {
            AppMessage::Modal(ModalMessage::Close)
        }
        (_, KeyCode::Up | KeyCode::Char('k')) => AppMessage::Modal(ModalMessage::ScrollUp),
        (_, KeyCode::Down | KeyCode::Char('j')) => AppMessage::Modal(ModalMessage::ScrollDown),
        _ => AppMessage::Noop,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    fn press(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn app() -> App {
        App::new("http://localhost:8000/api/v2", "en-US", 4)
    }

    #[test]
    fn digits_go_to_zero_based_page() {
        let msg = handle_event(press(KeyCode::Char('3')), &app());
        assert!(matches!(msg, AppMessage::Content(ContentMessage::GoToPage(2))));
    }

    #[test]
    fn arrows_and_brackets_turn_pages() {
        for code in [KeyCode::Left, KeyCode::Char('h'), KeyCode::Char('[')] {
            assert!(matches!(
                handle_event(press(code), &app()),
                AppMessage::Content(ContentMessage::PreviousPage)
            ));
        }
        for code in [KeyCode::Right, KeyCode::Char('l'), KeyCode::Char(']')] {
            assert!(matches!(
                handle_event(press(code), &app()),
                AppMessage::Content(ContentMessage::NextPage)
            ));
        }
    }

    #[test]
    fn open_modal_captures_keys() {
        let mut app = app();
        app.modal.show_help();

        assert!(matches!(
            handle_event(press(KeyCode::Char('q')), &app),
            AppMessage::Modal(ModalMessage::Close)
        ));
        assert!(matches!(
            handle_event(press(KeyCode::Down), &app),
            AppMessage::Modal(ModalMessage::ScrollDown)
        ));
    }

    #[test]
    fn release_events_are_ignored() {
        let key = KeyEvent {
            code: KeyCode::Char('q'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert!(matches!(handle_event(Event::Key(key), &app()), AppMessage::Noop));
    }

    #[test]
    fn global_keys() {
        assert!(matches!(handle_event(press(KeyCode::Char('q')), &app()), AppMessage::Quit));
        assert!(matches!(handle_event(press(KeyCode::Tab), &app()), AppMessage::ToggleFocus));
        assert!(matches!(handle_event(press(KeyCode::Esc), &app()), AppMessage::GoBack));
        assert!(matches!(handle_event(press(KeyCode::Char('r')), &app()), AppMessage::Refresh));
    }
}
