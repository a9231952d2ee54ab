//! 内容面板更新逻辑
//!
//! 用户列表页：选择用户、翻页（后端分页）
//! 用户物品页：在焦点列表上选择、翻页（客户端分页）、安装 / 移除

use frappe_core::types::ActionKind;

use crate::backend::Backend;
use crate::message::ContentMessage;
use crate::model::{App, FocusPanel, Page};

/// 处理内容面板消息
pub fn update(app: &mut App, backend: &dyn Backend, msg: ContentMessage) {
    match app.current_page {
        Page::Users => update_users(app, backend, msg),
        Page::UserItems { .. } => update_items(app, backend, msg),
    }
}

// ========== 用户列表 ==========

fn update_users(app: &mut App, backend: &dyn Backend, msg: ContentMessage) {
    match msg {
        ContentMessage::SelectPrevious => app.users.select_previous(),
        ContentMessage::SelectNext => app.users.select_next(),
        ContentMessage::SelectFirst => app.users.select_first(),
        ContentMessage::SelectLast => app.users.select_last(),
        ContentMessage::Confirm => {
            if let Some(user) = app.users.selected_user() {
                let user = user.external_id.to_string();
                enter_user(app, backend, user);
            }
        }
        ContentMessage::PreviousPage => {
            if app.users.page > 0 && !app.users.loading {
                let page = app.users.page - 1;
                load_users_page(app, backend, page);
            }
        }
        ContentMessage::NextPage => {
            // 空页说明已经翻过了最后一页
            if !app.users.users.is_empty() && !app.users.loading {
                let page = app.users.page + 1;
                load_users_page(app, backend, page);
            }
        }
        ContentMessage::GoToPage(_) | ContentMessage::ShowDetail => {}
    }
}

fn load_users_page(app: &mut App, backend: &dyn Backend, page: u32) {
    app.users.begin_loading(page);
    backend.load_users(page);
}

/// 进入某个用户的物品页，同时加载两个列表
fn enter_user(app: &mut App, backend: &dyn Backend, user: String) {
    log::info!("Opening items of user {user}");
    app.installed.reset();
    app.recommended.reset();
    app.installed.begin_loading();
    app.recommended.begin_loading();
    app.focus = FocusPanel::default();
    backend.load_user_items(&user);
    app.current_page = Page::UserItems { user };
    app.clear_status();
}

// ========== 用户物品 ==========

fn update_items(app: &mut App, backend: &dyn Backend, msg: ContentMessage) {
    match msg {
        ContentMessage::SelectPrevious => app.focused_list_mut().select_previous(),
        ContentMessage::SelectNext => app.focused_list_mut().select_next(),
        ContentMessage::SelectFirst => app.focused_list_mut().select_first(),
        ContentMessage::SelectLast => app.focused_list_mut().select_last(),
        ContentMessage::PreviousPage => app.focused_list_mut().previous_page(),
        ContentMessage::NextPage => app.focused_list_mut().next_page(),
        ContentMessage::GoToPage(page) => app.focused_list_mut().go_to_page(page),
        ContentMessage::Confirm => perform_selected(app, backend),
        ContentMessage::ShowDetail => {
            if let Some(record) = app.focused_list().selected_record().cloned() {
                app.modal.show_item_detail(record);
            }
        }
    }
}

/// 对选中的物品执行其操作（已安装 → 移除，推荐 → 安装）
fn perform_selected(app: &mut App, backend: &dyn Backend) {
    let Some(record) = app.focused_list().selected_record() else {
        return;
    };
    let action = record.action.clone();
    let name = record.display_name(&app.locale);

    let verb = match action.kind {
        ActionKind::Acquire => "Installing",
        ActionKind::Remove => "Removing",
    };
    app.set_status(format!("{verb} {name}..."));
    backend.perform(action);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::mock::{Call, MockBackend};
    use crate::update::tests::app_with_users;
    use frappe_core::types::{ItemDetail, ItemId, ItemList, ItemRecord, ItemStub, ListKind};
    use frappe_core::Generation;

    fn list(kind: ListKind, n: usize) -> ItemList {
        let records = (0..n)
            .map(|i| {
                let stub = ItemStub {
                    external_id: ItemId::new(format!("{i}")),
                    acquisition_date: None,
                    removed_date: None,
                };
                ItemRecord::merge(&stub, ItemDetail::default(), kind, "alice", i, i)
            })
            .collect();
        ItemList {
            batch: Generation::new().begin(),
            kind,
            user: "alice".to_string(),
            records,
        }
    }

    fn items_page() -> App {
        let mut app = app_with_users();
        app.current_page = Page::UserItems { user: "alice".to_string() };
        app.installed.apply(list(ListKind::Installed, 6), 4);
        app.recommended.apply(list(ListKind::Recommended, 3), 4);
        app
    }

    #[test]
    fn confirm_on_recommendation_installs_it() {
        let backend = MockBackend::new();
        let mut app = items_page();
        app.focus = FocusPanel::Recommended;
        app.recommended.select_next();

        update(&mut app, &backend, ContentMessage::Confirm);

        let calls = backend.calls();
        assert_eq!(calls.len(), 1);
        let Call::Perform(action) = &calls[0] else {
            panic!("expected a perform call, got {calls:?}");
        };
        assert_eq!(action.kind, ActionKind::Acquire);
        assert_eq!(action.item, ItemId::new("1"));
        assert_eq!(action.user, "alice");
        assert!(app.status_message.is_some());
    }

    #[test]
    fn confirm_on_installed_item_removes_it() {
        let backend = MockBackend::new();
        let mut app = items_page();

        update(&mut app, &backend, ContentMessage::Confirm);

        assert!(matches!(
            backend.calls().as_slice(),
            [Call::Perform(action)] if action.kind == ActionKind::Remove
        ));
    }

    #[test]
    fn paging_moves_only_the_focused_list() {
        let backend = MockBackend::new();
        let mut app = items_page();

        update(&mut app, &backend, ContentMessage::NextPage);
        assert_eq!(app.installed.visible_records().len(), 2);
        assert_eq!(app.recommended.visible_records().len(), 3);

        update(&mut app, &backend, ContentMessage::GoToPage(7));
        assert_eq!(app.installed.paginator.as_ref().map(|p| p.current()), Some(1));

        update(&mut app, &backend, ContentMessage::GoToPage(0));
        assert_eq!(app.installed.visible_records().len(), 4);
        assert!(backend.calls().is_empty());
    }

    #[test]
    fn users_paging_requests_next_page() {
        let backend = MockBackend::new();
        let mut app = app_with_users();

        update(&mut app, &backend, ContentMessage::PreviousPage);
        update(&mut app, &backend, ContentMessage::NextPage);

        assert_eq!(backend.calls(), vec![Call::Users(1)]);
        assert!(app.users.loading);
        assert_eq!(app.users.page, 1);
    }

    #[test]
    fn show_detail_opens_modal() {
        let backend = MockBackend::new();
        let mut app = items_page();
        update(&mut app, &backend, ContentMessage::ShowDetail);
        assert!(app.modal.is_open());
    }
}
