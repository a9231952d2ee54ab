//! 页面视图

pub mod user_items;
pub mod users;
