use super::utils::{field_border, input_display};
use super::*;
use crate::app::{LogField, TextInput};

const FORM_WIDTH: u16 = 64;

pub fn render_log_time_form(frame: &mut Frame, app: &App, body: Rect) {
    let form = &app.log_form;
    let width = FORM_WIDTH.min(body.width.saturating_sub(2));
    let area = Rect {
        x: body.x + (body.width.saturating_sub(width)) / 2,
        width,
        ..body
    };

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(2), // Error
            Constraint::Length(3), // Project
            Constraint::Length(3), // Task Description
            Constraint::Length(3), // Hours
            Constraint::Length(3), // Date
            Constraint::Min(0),
        ])
        .split(area);

    if let Some(error) = &form.error {
        let error = Paragraph::new(error.as_str()).style(
            Style::default()
                .fg(Color::Red)
                .add_modifier(Modifier::BOLD),
        );
        frame.render_widget(error, rows[0]);
    }

    render_project_picker(frame, app, rows[1]);
    render_text_field(
        frame,
        rows[2],
        "Task Description",
        &form.description,
        form.focused == LogField::Description,
        "What did you work on?",
    );
    render_text_field(
        frame,
        rows[3],
        "Hours",
        &form.hours,
        form.focused == LogField::Hours,
        "e.g. 1.5",
    );
    render_text_field(
        frame,
        rows[4],
        "Date",
        &form.date,
        form.focused == LogField::Date,
        "YYYY-MM-DD",
    );
}

fn render_project_picker(frame: &mut Frame, app: &App, area: Rect) {
    let focused = app.log_form.focused == LogField::Project;

    let line = match app.log_form.project_id {
        Some(id) if !app.projects.is_empty() => Line::from(vec![
            Span::styled("◀ ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                app.project_name(id).to_string(),
                Style::default().fg(Color::Cyan),
            ),
            Span::styled(" ▶", Style::default().fg(Color::DarkGray)),
        ]),
        _ => Line::from(Span::styled(
            "Please add a project first",
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        )),
    };

    let picker = Paragraph::new(line).block(field_block("Project", focused));
    frame.render_widget(picker, area);
}

fn render_text_field(
    frame: &mut Frame,
    area: Rect,
    title: &'static str,
    input: &TextInput,
    focused: bool,
    placeholder: &str,
) {
    let style = if !focused && input.value.is_empty() {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default().fg(Color::White)
    };
    let field = Paragraph::new(input_display(input, focused, placeholder))
        .style(style)
        .block(field_block(title, focused));
    frame.render_widget(field, area);
}

fn field_block(title: &'static str, focused: bool) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(field_border(focused))
        .title(format!(" {} ", title))
        .padding(Padding::horizontal(1))
}
