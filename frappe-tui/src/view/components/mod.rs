//! 可复用的界面组件

pub mod modal;
pub mod pager;
pub mod statusbar;
