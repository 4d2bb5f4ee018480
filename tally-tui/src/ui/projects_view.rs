use super::utils::{field_border, input_display};
use super::*;
use crate::app::ProjectFocus;
use ratatui::widgets::{List, ListItem, ListState};

pub fn render_project_manager(frame: &mut Frame, app: &App, body: Rect) {
    let form = &app.project_form;
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(body);

    let input_focused = form.focus == ProjectFocus::Input;
    let input = Paragraph::new(input_display(&form.name, input_focused, "New project name"))
        .style(if form.name.value.is_empty() && !input_focused {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default().fg(Color::White)
        })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(field_border(input_focused))
                .title(" Add New Project ")
                .padding(Padding::horizontal(1)),
        );
    frame.render_widget(input, rows[0]);

    if let Some(error) = &form.error {
        frame.render_widget(
            Paragraph::new(error.as_str()).style(Style::default().fg(Color::Red)),
            rows[1],
        );
    }

    let list_focused = form.focus == ProjectFocus::List;
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(field_border(list_focused))
        .title(format!(" Projects ({}) ", app.projects.len()))
        .padding(Padding::horizontal(1));

    if app.projects.is_empty() {
        let empty = Paragraph::new("No projects found. Add one above to get started.")
            .style(
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::ITALIC),
            )
            .block(block);
        frame.render_widget(empty, rows[2]);
        return;
    }

    let items: Vec<ListItem> = app
        .projects
        .iter()
        .map(|project| ListItem::new(project.name.as_str()))
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(
            Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▶ ");

    let mut state = ListState::default();
    if list_focused {
        state.select(Some(form.selected));
    }
    frame.render_stateful_widget(list, rows[2], &mut state);
}
