use super::*;
use ratatui::widgets::{List, ListItem};

pub fn render_sidebar(frame: &mut Frame, app: &App, area: Rect) {
    let border_color = if app.menu_open {
        Color::Yellow
    } else {
        Color::DarkGray
    };

    let items: Vec<ListItem> = View::NAVIGABLE
        .iter()
        .enumerate()
        .map(|(i, view)| {
            let is_active = *view == app.current_view
                || app
                    .delete_context
                    .as_ref()
                    .is_some_and(|ctx| ctx.origin == *view);
            let is_highlighted = app.menu_open && i == app.menu_index;

            let marker = if is_highlighted { "▶ " } else { "  " };
            let style = if is_active {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Blue)
                    .add_modifier(Modifier::BOLD)
            } else if is_highlighted {
                Style::default().fg(Color::Yellow)
            } else {
                Style::default().fg(Color::Gray)
            };

            ListItem::new(Line::from(vec![
                Span::styled(marker, Style::default().fg(Color::Yellow)),
                Span::styled(format!("{} {}", i + 1, view.title()), style),
            ]))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color))
            .title(Span::styled(" Menu ", Style::default().fg(border_color)))
            .padding(Padding::new(1, 1, 1, 0)),
    );
    frame.render_widget(list, area);
}
