//! 快捷键配置

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// 快捷键绑定
#[derive(Debug, Clone)]
pub struct KeyBinding {
    pub modifiers: KeyModifiers,
    pub code: KeyCode,
}

impl KeyBinding {
    pub const fn new(modifiers: KeyModifiers, code: KeyCode) -> Self {
        Self { modifiers, code }
    }

    pub const fn key(code: KeyCode) -> Self {
        Self::new(KeyModifiers::NONE, code)
    }

    pub const fn ctrl(code: KeyCode) -> Self {
        Self::new(KeyModifiers::CONTROL, code)
    }

    /// 检查按键事件是否匹配此快捷键绑定
    pub fn matches(&self, key: &KeyEvent) -> bool {
        key.modifiers == self.modifiers && key.code == self.code
    }

    /// 帮助弹窗中显示的按键名
    pub fn label(&self) -> String {
        let key = match self.code {
            KeyCode::Char(c) => c.to_string(),
            KeyCode::Esc => "Esc".to_string(),
            KeyCode::Enter => "Enter".to_string(),
            KeyCode::Tab => "Tab".to_string(),
            other => format!("{other:?}"),
        };
        if self.modifiers.contains(KeyModifiers::CONTROL) {
            format!("Ctrl+{key}")
        } else {
            key
        }
    }
}

/// 默认快捷键配置
pub struct DefaultKeymap;

impl DefaultKeymap {
    // 全局
    pub const QUIT: KeyBinding = KeyBinding::key(KeyCode::Char('q'));
    pub const FORCE_QUIT: KeyBinding = KeyBinding::ctrl(KeyCode::Char('c'));
    pub const HELP: KeyBinding = KeyBinding::key(KeyCode::Char('?'));
    pub const REFRESH: KeyBinding = KeyBinding::key(KeyCode::Char('r'));
    pub const BACK: KeyBinding = KeyBinding::key(KeyCode::Esc);
    pub const TOGGLE_FOCUS: KeyBinding = KeyBinding::key(KeyCode::Tab);

    // 列表
    pub const CONFIRM: KeyBinding = KeyBinding::key(KeyCode::Enter);
    pub const DETAIL: KeyBinding = KeyBinding::key(KeyCode::Char('i'));
    pub const PREV_PAGE: KeyBinding = KeyBinding::key(KeyCode::Char('['));
    pub const NEXT_PAGE: KeyBinding = KeyBinding::key(KeyCode::Char(']'));

    /// 帮助弹窗的内容
    pub fn help_entries() -> Vec<(String, &'static str)> {
        vec![
            ("↑/↓ j/k".to_string(), "Select"),
            ("Home/End".to_string(), "First / last"),
            (Self::CONFIRM.label(), "Open user / install or remove item"),
            (Self::DETAIL.label(), "Item details"),
            ("←/→ h/l [ ]".to_string(), "Previous / next page"),
            ("1-9".to_string(), "Go to page"),
            (Self::TOGGLE_FOCUS.label(), "Switch installed / recommended"),
            (Self::REFRESH.label(), "Reload"),
            (Self::BACK.label(), "Back / close"),
            (Self::HELP.label(), "Help"),
            (format!("{} / {}", Self::QUIT.label(), Self::FORCE_QUIT.label()), "Quit"),
        ]
    }
}
