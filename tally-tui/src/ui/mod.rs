use crate::app::{App, View};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Padding, Paragraph},
    Frame,
};

mod dashboard_view;
mod delete_dialog;
mod log_time_view;
mod projects_view;
mod sidebar;
pub(super) mod utils;

/// Below this width the sidebar is hidden unless the menu is open.
const SIDEBAR_BREAKPOINT: u16 = 90;
const SIDEBAR_WIDTH: u16 = 26;

pub fn render(frame: &mut Frame, app: &App) {
    let root = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(frame.area());

    render_header(frame, root[0], app);

    let wide = frame.area().width >= SIDEBAR_BREAKPOINT;
    let body = if wide {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(0)])
            .split(root[1]);
        sidebar::render_sidebar(frame, app, columns[0]);
        columns[1]
    } else {
        root[1]
    };

    render_view(frame, app, app.current_view, body);
    frame.render_widget(utils::controls_bar(controls_for(app)), root[2]);

    // Narrow terminals: the menu slides over the content while open
    if !wide && app.menu_open {
        let overlay = Rect {
            width: SIDEBAR_WIDTH.min(root[1].width),
            ..root[1]
        };
        frame.render_widget(Clear, overlay);
        sidebar::render_sidebar(frame, app, overlay);
    }
}

fn render_view(frame: &mut Frame, app: &App, view: View, body: Rect) {
    match view {
        View::Dashboard => dashboard_view::render_dashboard(frame, app, body),
        View::LogTime => log_time_view::render_log_time_form(frame, app, body),
        View::Projects => projects_view::render_project_manager(frame, app, body),
        View::ConfirmDelete => delete_dialog::render_delete_confirm_dialog(frame, app, body),
    }
}

fn render_header(frame: &mut Frame, area: Rect, app: &App) {
    let page = match (&app.delete_context, app.current_view) {
        (Some(ctx), View::ConfirmDelete) => ctx.origin.title(),
        (_, view) => view.title(),
    };

    let mut spans = vec![
        Span::styled(
            "⏱ Tally",
            Style::default()
                .fg(Color::Blue)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled("  │  ", Style::default().fg(Color::DarkGray)),
        Span::styled(page, Style::default().fg(Color::White)),
    ];
    if let Some(status) = &app.status_message {
        spans.push(Span::styled("  │  ", Style::default().fg(Color::DarkGray)));
        spans.push(Span::styled(
            status.as_str(),
            Style::default().fg(Color::Green),
        ));
    }

    let header = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Left)
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(Color::DarkGray))
                .padding(Padding::new(1, 1, 1, 0)),
        );
    frame.render_widget(header, area);
}

fn controls_for(app: &App) -> &'static [(&'static str, &'static str)] {
    if app.menu_open && app.current_view != View::ConfirmDelete {
        return &[
            ("↑↓/j/k", "Navigate"),
            ("Enter", "Open"),
            ("1-3", "Jump"),
            ("Esc", "Close menu"),
            ("Q", "Quit"),
        ];
    }
    match app.current_view {
        View::Dashboard => &[
            ("↑↓/j/k", "Select entry"),
            ("D", "Delete"),
            ("L", "Log time"),
            ("P", "Projects"),
            ("R", "Refresh"),
            ("Esc", "Menu"),
            ("Q", "Quit"),
        ],
        View::LogTime => &[
            ("Tab/↑↓", "Field"),
            ("←→", "Project"),
            ("Enter", "Log time"),
            ("Ctrl+X", "Clear field"),
            ("Esc", "Menu"),
        ],
        View::Projects => &[
            ("Tab", "Input/List"),
            ("Enter", "Add"),
            ("D", "Delete selected"),
            ("Esc", "Menu"),
        ],
        View::ConfirmDelete => &[("Y/Enter", "Delete"), ("N/Esc", "Cancel")],
    }
}
