use crate::app::{App, FormState};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Render the status bar: mode chip, key hints, position.
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let (mode_label, mode_color) = match app.form {
        FormState::Closed => ("LIST", Color::Green),
        FormState::Create => ("NEW", Color::Cyan),
        FormState::Edit { .. } => ("EDIT", Color::Yellow),
    };

    let hints = match app.form {
        FormState::Closed => " j/k move  a add  e edit  d delete  q quit",
        _ => " Enter submit  Esc cancel",
    };

    let position = if app.tasks.is_empty() {
        String::new()
    } else {
        format!(" {}/{} ", app.selected + 1, app.tasks.len())
    };

    let line = Line::from(vec![
        Span::styled(
            format!(" {mode_label} "),
            Style::default()
                .fg(Color::Black)
                .bg(mode_color)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(hints, Style::default().fg(Color::DarkGray)),
        Span::raw(" | "),
        Span::styled(position, Style::default().fg(Color::Gray)),
    ]);

    f.render_widget(
        Paragraph::new(line).style(Style::default().bg(Color::Black)),
        area,
    );
}
