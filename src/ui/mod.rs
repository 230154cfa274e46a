mod form;
mod list;
mod statusbar;

use crate::app::{App, Notification, NotificationLevel};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

/// Top-level render function. Everything is a pure function of `&App`; the
/// form region's height comes from the slide animation.
pub fn render(f: &mut Frame, app: &App) {
    let form_height = app.form_height;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),           // Header + divider
            Constraint::Min(0),              // Task list
            Constraint::Length(form_height), // Entry form (0 when closed)
            Constraint::Length(1),           // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0], app);
    list::render(f, chunks[1], app);

    if form_height > 0 {
        form::render(f, chunks[2], app);
    }

    statusbar::render(f, chunks[3], app);

    // Notification overlay on top of everything.
    if let Some(ref notification) = app.notification {
        render_notification(f, f.area(), notification);
    }
}

/// Title row with the task count and the add hint, divider underneath.
fn render_header(f: &mut Frame, area: Rect, app: &App) {
    let count = app.tasks.len();
    let line = Line::from(vec![
        Span::styled(
            " tudu ",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("— {} task{}", count, if count == 1 { "" } else { "s" }),
            Style::default().fg(Color::Gray),
        ),
        Span::raw("  "),
        Span::styled("[a] add", Style::default().fg(Color::DarkGray)),
    ]);

    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(Color::DarkGray));

    f.render_widget(Paragraph::new(line).block(block), area);
}

/// Notification bar across the top.
fn render_notification(f: &mut Frame, area: Rect, notification: &Notification) {
    let notification_area = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: 3,
    };

    let (bg_color, fg_color, prefix) = match notification.level {
        NotificationLevel::Info => (Color::Blue, Color::White, "ℹ"),
        NotificationLevel::Success => (Color::Green, Color::White, "✓"),
        NotificationLevel::Warning => (Color::Yellow, Color::Black, "⚠"),
        NotificationLevel::Error => (Color::Red, Color::White, "✗"),
    };

    let content = Line::from(vec![
        Span::styled(
            format!(" {} ", prefix),
            Style::default()
                .fg(fg_color)
                .bg(bg_color)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" "),
        Span::styled(&notification.message, Style::default().fg(fg_color)),
    ]);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(bg_color))
        .style(Style::default().bg(bg_color));

    f.render_widget(Paragraph::new(content).block(block), notification_area);
}
