//! 页面状态模块
//!
//! 定义各个页面的状态数据结构

mod item_list;
mod modal;
mod users;

pub use item_list::ItemListState;
pub use modal::{Modal, ModalState};
pub use users::UsersState;
