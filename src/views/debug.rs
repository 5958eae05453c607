use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::app::App;

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;

    let block = Block::default()
        .title(" Debug ")
        .borders(Borders::ALL)
        .border_style(theme.dim_style());

    let mut lines = Vec::new();

    let state = &app.state;
    lines.push(Line::from(vec![
        Span::styled("Batch: ", theme.dim_style()),
        Span::styled(
            format!(
                "{} current, {} done, {:?} loader",
                state.current_batch() + 1,
                state.completed_batches(),
                state.loader_status()
            ),
            Style::default().fg(theme.foreground),
        ),
    ]));
    if let Some(index) = state.stalled() {
        lines.push(Line::from(Span::styled(
            format!("  stalled on batch {}", index + 1),
            Style::default().fg(theme.primary),
        )));
    }

    let task_count = app.debug.running_tasks.len();
    lines.push(Line::from(vec![
        Span::styled("Tasks: ", theme.dim_style()),
        Span::styled(task_count.to_string(), Style::default().fg(theme.foreground)),
    ]));

    for task in &app.debug.running_tasks {
        let elapsed = task.started_at.elapsed();
        lines.push(Line::from(vec![
            Span::raw("  "),
            Span::styled(format!("[{}] ", task.id), theme.dim_style()),
            Span::styled(&task.description, Style::default().fg(theme.foreground)),
            Span::styled(format!(" ({:.1?})", elapsed), theme.dim_style()),
        ]));
    }

    // Newest log entries first, as many as fit
    let available_lines = area.height.saturating_sub(2) as usize;
    let log_lines = available_lines.saturating_sub(lines.len());

    for entry in app.debug.log.iter().rev().take(log_lines) {
        lines.push(Line::from(Span::styled(
            format!("  {}", entry.message),
            theme.dim_style(),
        )));
    }

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
