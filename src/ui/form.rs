use crate::app::{App, FormState};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the entry form. The border stays dim while the slide animation has
/// frames left, then settles to cyan.
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let title = match app.form {
        FormState::Edit { .. } => " Edit task ",
        _ => " New task ",
    };

    let border_color = if app.is_animating() {
        Color::DarkGray
    } else {
        Color::Cyan
    };

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color))
        .border_type(ratatui::widgets::BorderType::Rounded);

    let inner = block.inner(area);
    f.render_widget(block, area);

    // Too collapsed to hold the field yet; the block alone reads as the form
    // sliding open.
    if inner.height < 2 {
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Input field
            Constraint::Length(1), // Key hints
        ])
        .split(inner);

    let input_block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Rgb(76, 86, 106)))
        .border_type(ratatui::widgets::BorderType::Rounded);

    let input_inner = input_block.inner(chunks[0]);
    f.render_widget(input_block, chunks[0]);
    f.render_widget(&app.input, input_inner);

    let submit_label = match app.form {
        FormState::Edit { .. } => "update",
        _ => "save",
    };
    let hints = Line::from(vec![
        Span::styled("Enter", Style::default().fg(Color::Cyan)),
        Span::styled(format!(" {submit_label}  "), Style::default().fg(Color::Gray)),
        Span::styled("Esc", Style::default().fg(Color::Cyan)),
        Span::styled(" cancel", Style::default().fg(Color::Gray)),
    ]);
    f.render_widget(Paragraph::new(hints), chunks[1]);
}
