use super::utils::centered_rect;
use super::*;
use crate::app::DeleteTarget;

pub fn render_delete_confirm_dialog(frame: &mut Frame, app: &App, body: Rect) {
    let Some(ctx) = &app.delete_context else {
        return;
    };

    // Render the originating view in the background
    super::render_view(frame, app, ctx.origin, body);

    let area = centered_rect(56, 10, frame.area());
    frame.render_widget(Clear, area);

    let title = match ctx.target {
        DeleteTarget::Entry(_) => " Delete Entry? ",
        DeleteTarget::Project(_) => " Delete Project? ",
    };

    let text = vec![
        Line::from(""),
        Line::from(Span::styled(
            ctx.label.as_str(),
            Style::default().fg(Color::White),
        )),
        Line::from(Span::styled(
            ctx.detail.as_str(),
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("[y] Yes", Style::default().fg(Color::Red)),
            Span::raw("    "),
            Span::styled("[n] No", Style::default().fg(Color::White)),
        ]),
    ];

    let paragraph = Paragraph::new(text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red))
                .title(title)
                .padding(Padding::horizontal(1)),
        )
        .alignment(Alignment::Center);

    frame.render_widget(paragraph, area);
}
