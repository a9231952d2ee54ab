//! 后台任务结果的更新逻辑

use frappe_core::types::LoadOutcome;

use crate::backend::Backend;
use crate::message::BackendMessage;
use crate::model::App;

/// 处理后台任务结果
pub fn update(app: &mut App, backend: &dyn Backend, msg: BackendMessage) {
    match msg {
        BackendMessage::UsersLoaded { page, result } => {
            if page != app.users.page {
                log::debug!("Dropping users page {page}, now on page {}", app.users.page);
                return;
            }
            match result {
                Ok(users) => app.users.set_users(page, users),
                Err(e) => {
                    app.set_status(format!("Failed to load users: {e}"));
                    app.users.set_error(e);
                }
            }
        }

        BackendMessage::ListLoaded {
            kind,
            user,
            batch,
            result,
        } => {
            if app.current_page.user() != Some(user.as_str()) {
                log::debug!("Dropping {kind:?} list of {user}, no longer displayed");
                return;
            }
            if !backend.is_current(kind, batch) {
                log::debug!("Dropping stale {kind:?} batch {batch}");
                return;
            }
            let outcome = match result {
                Ok(outcome) => outcome,
                Err(e) => {
                    log::warn!("{kind:?} items of {user} failed to load: {e}");
                    app.set_status(format!("Failed to load {kind:?} items: {e}"));
                    app.list_mut(kind).set_error(e);
                    return;
                }
            };
            if outcome.batch() != batch {
                log::warn!("{kind:?} outcome of batch {} reported as {batch}", outcome.batch());
                return;
            }

            let page_size = app.page_size;
            match outcome {
                LoadOutcome::Completed(list) => app.list_mut(kind).apply(list, page_size),
                LoadOutcome::Incomplete {
                    expected, resolved, ..
                } => {
                    app.set_status(format!(
                        "{kind:?} items: only {resolved} of {expected} details loaded"
                    ));
                    app.list_mut(kind).mark_incomplete(resolved, expected);
                }
                LoadOutcome::Superseded(_) => {}
            }
        }

        BackendMessage::MutationDone { item, acquired } => {
            let verb = if acquired { "Installed" } else { "Removed" };
            app.set_status(format!("{verb} item {item}"));
            app.installed.begin_loading();
            app.recommended.begin_loading();
        }

        BackendMessage::MutationFailed { message, raw_body } => {
            app.set_status(format!("Action failed: {message}"));
            app.modal.show_mutation_failed(message, raw_body);
        }
    }
}
