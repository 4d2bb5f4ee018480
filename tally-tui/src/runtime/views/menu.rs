use crate::app::{App, View};
use crossterm::event::{KeyCode, KeyEvent};

pub(super) fn handle_menu_key(key: KeyEvent, app: &mut App) {
    match key.code {
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Tab => app.menu_next(),
        KeyCode::Up | KeyCode::Char('k') | KeyCode::BackTab => app.menu_previous(),
        KeyCode::Enter | KeyCode::Char(' ') => app.menu_confirm(),
        KeyCode::Char('1') => app.navigate_to(View::Dashboard),
        KeyCode::Char('2') => app.navigate_to(View::LogTime),
        KeyCode::Char('3') => app.navigate_to(View::Projects),
        KeyCode::Esc | KeyCode::Char('m') => app.toggle_menu(),
        KeyCode::Char('q') | KeyCode::Char('Q') => app.quit(),
        _ => {}
    }
}
