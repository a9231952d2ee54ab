//! 类型定义模块

mod item;

pub use item::{ActionKind, ItemAction, ItemList, ItemRecord, ListKind, LoadOutcome};

// Re-export client 库的公共类型
pub use frappe_client::{
    ItemDetail, ItemDetailQuery, ItemId, ItemStub, LocalizedText, OwnedItemChange,
    PaginationParams, User,
};
