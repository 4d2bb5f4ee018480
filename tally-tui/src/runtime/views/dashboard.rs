use crate::app::{App, View};
use crossterm::event::{KeyCode, KeyEvent};

use super::super::action_queue::{Action, ActionTx};
use super::enqueue_action;

pub(super) fn handle_dashboard_key(key: KeyEvent, app: &mut App, action_tx: &ActionTx) {
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => app.quit(),
        KeyCode::Esc | KeyCode::Char('m') => app.toggle_menu(),
        KeyCode::Down | KeyCode::Char('j') => app.entries_focus_down(),
        KeyCode::Up | KeyCode::Char('k') => app.entries_focus_up(),
        KeyCode::Char('d') | KeyCode::Delete => app.request_delete_entry(),
        KeyCode::Char('l') | KeyCode::Char('2') => app.navigate_to(View::LogTime),
        KeyCode::Char('p') | KeyCode::Char('3') => app.navigate_to(View::Projects),
        KeyCode::Char('r') => enqueue_action(action_tx, Action::Refresh),
        _ => {}
    }
}
