use crate::app::{App, ProjectFocus};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::super::action_queue::{Action, ActionTx};
use super::enqueue_action;

pub(super) fn handle_projects_key(key: KeyEvent, app: &mut App, action_tx: &ActionTx) {
    match key.code {
        KeyCode::Esc => app.toggle_menu(),
        KeyCode::Tab | KeyCode::BackTab => app.project_form.toggle_focus(),
        _ => match app.project_form.focus {
            ProjectFocus::Input => handle_name_input_key(key, app, action_tx),
            ProjectFocus::List => handle_project_list_key(key, app),
        },
    }
}

fn handle_name_input_key(key: KeyEvent, app: &mut App, action_tx: &ActionTx) {
    let input = &mut app.project_form.name;
    match key.code {
        KeyCode::Enter => {
            if let Some(name) = app.project_form.submit(&app.projects) {
                enqueue_action(action_tx, Action::AddProject { name });
            }
        }
        KeyCode::Char('x') if key.modifiers.contains(KeyModifiers::CONTROL) => input.clear(),
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => input.insert(c),
        KeyCode::Backspace => input.backspace(),
        KeyCode::Delete => input.delete(),
        KeyCode::Left => input.move_left(),
        KeyCode::Right => input.move_right(),
        KeyCode::Home => input.home(),
        KeyCode::End => input.end(),
        KeyCode::Down => app.project_form.focus = ProjectFocus::List,
        _ => {}
    }
}

fn handle_project_list_key(key: KeyEvent, app: &mut App) {
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => app.quit(),
        KeyCode::Down | KeyCode::Char('j') => app.project_list_down(),
        KeyCode::Up | KeyCode::Char('k') => {
            if app.project_form.selected == 0 {
                app.project_form.focus = ProjectFocus::Input;
            } else {
                app.project_list_up();
            }
        }
        KeyCode::Char('d') | KeyCode::Delete => app.request_delete_project(),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::{press, type_text};
    use super::*;
    use crate::app::tests::demo_app;
    use crate::app::{DeleteTarget, View};
    use tally_core::ProjectId;

    fn projects_app() -> App {
        let mut app = demo_app();
        app.navigate_to(View::Projects);
        app
    }

    #[test]
    fn enter_queues_trimmed_name() {
        let mut app = projects_app();
        type_text(&mut app, "  Ops  ");
        let actions = press(&mut app, &[KeyCode::Enter]);

        assert_eq!(
            actions,
            vec![Action::AddProject {
                name: "Ops".to_string()
            }]
        );
        assert_eq!(app.project_form.name.value, "  Ops  ");
    }

    #[test]
    fn duplicate_name_differing_in_case_is_rejected() {
        let mut app = projects_app();
        type_text(&mut app, "project alpha - mobile app");
        assert!(press(&mut app, &[KeyCode::Enter]).is_empty());
        assert_eq!(
            app.project_form.error.as_deref(),
            Some("A project with this name already exists.")
        );
    }

    #[test]
    fn empty_name_is_rejected() {
        let mut app = projects_app();
        assert!(press(&mut app, &[KeyCode::Enter]).is_empty());
        assert_eq!(
            app.project_form.error.as_deref(),
            Some("Project name cannot be empty.")
        );
    }

    #[test]
    fn q_types_into_the_name_field() {
        let mut app = projects_app();
        type_text(&mut app, "q");
        assert!(app.running);
        assert_eq!(app.project_form.name.value, "q");
    }

    #[test]
    fn deleting_from_the_list_asks_first() {
        let mut app = projects_app();
        press(
            &mut app,
            &[KeyCode::Tab, KeyCode::Char('j'), KeyCode::Char('j'), KeyCode::Char('d')],
        );
        assert_eq!(app.current_view, View::ConfirmDelete);
        assert_eq!(
            app.delete_context.map(|c| c.target),
            Some(DeleteTarget::Project(ProjectId::new(3)))
        );
    }

    #[test]
    fn moving_up_from_the_top_returns_to_the_input() {
        let mut app = projects_app();
        press(&mut app, &[KeyCode::Down, KeyCode::Up]);
        assert_eq!(app.project_form.focus, ProjectFocus::Input);
    }
}
