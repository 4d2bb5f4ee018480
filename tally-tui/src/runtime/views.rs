use crate::app::{App, View};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::action_queue::{Action, ActionTx};

mod confirm_delete;
mod dashboard;
mod log_time;
mod menu;
mod projects;

fn enqueue_action(action_tx: &ActionTx, action: Action) {
    let _ = action_tx.send(action);
}

pub(super) fn handle_key(key: KeyEvent, app: &mut App, action_tx: &ActionTx) {
    // Ctrl+C quits from anywhere
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.quit();
        return;
    }

    if app.menu_open && app.current_view != View::ConfirmDelete {
        menu::handle_menu_key(key, app);
        return;
    }

    match app.current_view {
        View::Dashboard => dashboard::handle_dashboard_key(key, app, action_tx),
        View::LogTime => log_time::handle_log_time_key(key, app, action_tx),
        View::Projects => projects::handle_projects_key(key, app, action_tx),
        View::ConfirmDelete => confirm_delete::handle_confirm_delete_key(key, app, action_tx),
    }
}

#[cfg(test)]
pub(super) mod test_support {
    use super::*;
    use crate::runtime::action_queue::channel;

    pub(crate) fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    /// Feed keys through the dispatcher and collect the queued actions.
    pub(crate) fn press(app: &mut App, keys: &[KeyCode]) -> Vec<Action> {
        let (tx, mut rx) = channel();
        for code in keys {
            handle_key(key(*code), app, &tx);
        }
        let mut actions = Vec::new();
        while let Ok(action) = rx.try_recv() {
            actions.push(action);
        }
        actions
    }

    pub(crate) fn type_text(app: &mut App, text: &str) -> Vec<Action> {
        let keys: Vec<KeyCode> = text.chars().map(KeyCode::Char).collect();
        press(app, &keys)
    }
}
