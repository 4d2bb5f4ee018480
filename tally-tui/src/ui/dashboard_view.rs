use super::utils::bar_cells;
use super::*;
use ratatui::widgets::{Cell, Row, Table, TableState};
use tally_core::models::format_iso_date;

const HOURS_COL_WIDTH: usize = 11;

pub fn render_dashboard(frame: &mut Frame, app: &App, body: Rect) {
    let summary_height = (app.summary.len().max(1) as u16 + 4).min(body.height / 2);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([Constraint::Length(summary_height), Constraint::Min(0)])
        .split(body);

    render_summary_panel(frame, app, chunks[0]);
    render_recent_entries(frame, app, chunks[1]);
}

fn render_summary_panel(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::White))
        .title(Span::styled(
            " Project Summary ",
            Style::default().fg(Color::Blue),
        ))
        .padding(Padding::new(1, 1, 1, 0));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if app.summary.is_empty() {
        let empty = Paragraph::new(
            "No time logged yet. Go to \"Log Time\" to add your first entry.",
        )
        .style(
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        );
        frame.render_widget(empty, inner);
        return;
    }

    let width = inner.width as usize;
    let name_cols = app
        .summary
        .iter()
        .map(|row| row.name.chars().count())
        .max()
        .unwrap_or(0)
        .min(width / 3)
        .max(1);
    let bar_cols = width.saturating_sub(name_cols + HOURS_COL_WIDTH + 2).max(1);
    let max_hours = app.max_total_hours();

    let lines: Vec<Line> = app
        .summary
        .iter()
        .map(|row| {
            let filled = bar_cells(row.total_hours, max_hours, bar_cols);
            let name: String = row.name.chars().take(name_cols).collect();
            Line::from(vec![
                Span::styled(
                    format!("{:<width$}  ", name, width = name_cols),
                    Style::default().fg(Color::Gray),
                ),
                Span::styled("█".repeat(filled), Style::default().fg(Color::Blue)),
                Span::styled(
                    "░".repeat(bar_cols - filled),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::styled(
                    format!("{:>7.1} hrs", row.total_hours),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ),
            ])
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), inner);
}

fn render_recent_entries(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::White))
        .title(Span::styled(
            " Recent Entries ",
            Style::default().fg(Color::Green),
        ))
        .padding(Padding::horizontal(1));

    let header = Row::new(["Project", "Task", "Hours", "Date"])
        .style(
            Style::default()
                .fg(Color::Gray)
                .add_modifier(Modifier::BOLD),
        )
        .bottom_margin(1);

    let entries = app.recent_entries();
    let rows: Vec<Row> = if entries.is_empty() {
        vec![Row::new([Cell::from(Span::styled(
            "No recent entries.",
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        ))])]
    } else {
        entries
            .iter()
            .map(|entry| {
                Row::new([
                    Cell::from(app.project_name(entry.project_id).to_string())
                        .style(Style::default().fg(Color::Cyan)),
                    Cell::from(entry.task_description.clone()),
                    Cell::from(format!("{:.1}", entry.hours))
                        .style(Style::default().fg(Color::Magenta)),
                    Cell::from(format_iso_date(entry.date))
                        .style(Style::default().fg(Color::Yellow)),
                ])
            })
            .collect()
    };

    let table = Table::new(
        rows,
        [
            Constraint::Percentage(30),
            Constraint::Min(20),
            Constraint::Length(7),
            Constraint::Length(12),
        ],
    )
    .header(header)
    .block(block)
    .column_spacing(2)
    .row_highlight_style(
        Style::default()
            .bg(Color::DarkGray)
            .add_modifier(Modifier::BOLD),
    )
    .highlight_symbol("▶ ");

    let mut state = TableState::default().with_selected(app.focused_entry_index);
    frame.render_stateful_widget(table, area, &mut state);
}
