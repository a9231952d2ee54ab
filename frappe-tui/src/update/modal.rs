//! 弹窗更新逻辑

use crate::message::ModalMessage;
use crate::model::App;

/// 处理弹窗消息
pub fn update(app: &mut App, msg: ModalMessage) {
    if !app.modal.is_open() {
        return;
    }

    match msg {
        ModalMessage::Close => app.modal.close(),
        ModalMessage::ScrollUp => app.modal.scroll_up(),
        ModalMessage::ScrollDown => app.modal.scroll_down(),
    }
}
