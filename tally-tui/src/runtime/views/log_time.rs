use crate::app::{App, LogField};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::super::action_queue::{Action, ActionTx};
use super::enqueue_action;

pub(super) fn handle_log_time_key(key: KeyEvent, app: &mut App, action_tx: &ActionTx) {
    let form = &mut app.log_form;
    match key.code {
        KeyCode::Esc => app.toggle_menu(),
        KeyCode::Tab | KeyCode::Down => form.focused = form.focused.next(),
        KeyCode::BackTab | KeyCode::Up => form.focused = form.focused.prev(),
        KeyCode::Enter => {
            if let Some(entry) = form.submit() {
                enqueue_action(action_tx, Action::LogTimeEntry(entry));
            }
        }
        KeyCode::Left | KeyCode::Right if form.focused == LogField::Project => {
            form.cycle_project(&app.projects, key.code == KeyCode::Right);
        }
        KeyCode::Char(' ') if form.focused == LogField::Project => {
            form.cycle_project(&app.projects, true);
        }
        KeyCode::Char('x') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            if let Some(input) = form.focused_input() {
                input.clear();
            }
        }
        code => {
            let Some(input) = form.focused_input() else {
                return;
            };
            match code {
                KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                    input.insert(c)
                }
                KeyCode::Backspace => input.backspace(),
                KeyCode::Delete => input.delete(),
                KeyCode::Left => input.move_left(),
                KeyCode::Right => input.move_right(),
                KeyCode::Home => input.home(),
                KeyCode::End => input.end(),
                _ => {}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::{press, type_text};
    use super::*;
    use crate::app::tests::demo_app;
    use crate::app::View;
    use tally_core::ProjectId;

    fn log_time_app() -> App {
        let mut app = demo_app();
        app.navigate_to(View::LogTime);
        app
    }

    #[test]
    fn filling_the_form_queues_an_entry() {
        let mut app = log_time_app();
        press(&mut app, &[KeyCode::Right, KeyCode::Tab]);
        type_text(&mut app, "Fix login bug");
        press(&mut app, &[KeyCode::Tab]);
        type_text(&mut app, "2.5");
        let actions = press(&mut app, &[KeyCode::Enter]);

        let [Action::LogTimeEntry(entry)] = actions.as_slice() else {
            panic!("unexpected actions: {actions:?}");
        };
        assert_eq!(entry.project_id, ProjectId::new(2));
        assert_eq!(entry.task_description, "Fix login bug");
        assert_eq!(entry.hours, 2.5);
        assert_eq!(app.log_form.project_id, Some(ProjectId::new(2)));
        assert_eq!(app.log_form.description.value, "Fix login bug");
    }

    #[test]
    fn out_of_range_hours_queue_nothing() {
        let mut app = log_time_app();
        press(&mut app, &[KeyCode::Tab]);
        type_text(&mut app, "Standup");
        press(&mut app, &[KeyCode::Tab]);
        type_text(&mut app, "25");

        assert!(press(&mut app, &[KeyCode::Enter]).is_empty());
        assert_eq!(
            app.log_form.error.as_deref(),
            Some("Hours must be a positive number, up to 24.")
        );
        assert_eq!(app.current_view, View::LogTime);
    }

    #[test]
    fn typing_on_project_field_is_ignored() {
        let mut app = log_time_app();
        type_text(&mut app, "abc");
        assert!(app.log_form.description.value.is_empty());
        assert_eq!(app.log_form.project_id, Some(ProjectId::new(1)));
    }

    #[test]
    fn ctrl_x_clears_the_focused_field() {
        let mut app = log_time_app();
        press(&mut app, &[KeyCode::BackTab]);
        assert_eq!(app.log_form.focused, LogField::Date);

        let (tx, _rx) = crate::runtime::action_queue::channel();
        handle_log_time_key(
            KeyEvent::new(KeyCode::Char('x'), KeyModifiers::CONTROL),
            &mut app,
            &tx,
        );
        assert!(app.log_form.date.value.is_empty());
    }
}
