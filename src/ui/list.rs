use crate::app::App;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, ListState, Paragraph},
    Frame,
};

/// Render the task list. Each task takes two lines: the text, then the
/// timestamp. The edit/delete hints appear only on the selected row.
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    if app.tasks.is_empty() {
        render_empty(f, area);
        return;
    }

    let items: Vec<ListItem> = app
        .tasks
        .iter()
        .enumerate()
        .map(|(i, task)| {
            let is_selected = i == app.selected;

            let marker = if is_selected {
                Span::styled("▶ ", Style::default().fg(Color::Cyan))
            } else {
                Span::raw("  ")
            };

            let text_style = if is_selected {
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray)
            };

            let mut title_line = vec![marker, Span::styled(&task.text, text_style)];
            if is_selected {
                // Selection-revealed action hints.
                title_line.push(Span::raw("  "));
                title_line.push(Span::styled(
                    "[e]dit",
                    Style::default().fg(Color::Cyan).add_modifier(Modifier::DIM),
                ));
                title_line.push(Span::raw(" "));
                title_line.push(Span::styled(
                    "[d]elete",
                    Style::default().fg(Color::Red).add_modifier(Modifier::DIM),
                ));
            }

            let date_line = Line::from(vec![
                Span::raw("  "),
                Span::styled(&task.date, Style::default().fg(Color::Blue)),
            ]);

            let style = if is_selected {
                Style::default().bg(Color::Rgb(59, 66, 82))
            } else {
                Style::default()
            };

            ListItem::new(vec![Line::from(title_line), date_line]).style(style)
        })
        .collect();

    let list = List::new(items);

    let mut state = ListState::default();
    state.select(Some(app.selected));

    f.render_stateful_widget(list, area, &mut state);
}

/// Empty state
fn render_empty(f: &mut Frame, area: Rect) {
    let paragraph = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            "  No tasks yet",
            Style::default().fg(Color::Gray),
        )),
        Line::from(Span::styled(
            "  Press a to add one",
            Style::default().fg(Color::DarkGray),
        )),
    ]);

    f.render_widget(paragraph, area);
}
