use std::sync::Arc;

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};

use crate::api::Story;
use crate::app::App;
use crate::theme::Theme;
use crate::time::{Clock, format_relative};
use crate::views::status_bar::StatusBar;

/// Rows shown while nothing has loaded yet.
pub const SKELETON_ROWS: usize = 25;
const SKELETON_WIDTHS: [usize; 5] = [42, 56, 34, 48, 38];

pub const BRAND: &str = "Pico Hacker News";
/// Static navigation entries; only the repository link goes anywhere.
pub const NAV_LINKS: [(&str, bool); 3] = [
    ("Newest", false),
    ("Jobs Stories", false),
    ("GitHub Repo", true),
];

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::vertical([
        Constraint::Length(1), // Header
        Constraint::Min(0),    // Story list
        Constraint::Length(1), // Load more
        Constraint::Length(1), // Status bar
    ])
    .split(area);

    render_header(frame, &app.theme, chunks[0]);
    render_story_list(frame, app, chunks[1]);
    render_load_more(frame, app, chunks[2]);
    render_status_bar(frame, app, chunks[3]);
}

fn render_header(frame: &mut Frame, theme: &Theme, area: Rect) {
    let mut spans = vec![Span::styled(BRAND, theme.brand_style()), Span::raw("   ")];
    for (label, active) in NAV_LINKS {
        let style = if active {
            Style::default().fg(theme.primary)
        } else {
            theme.dim_style()
        };
        spans.push(Span::styled(label, style));
        spans.push(Span::raw("  "));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_story_list(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let stories = app.state.stories();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.border_style())
        .title("Top Stories");

    if stories.is_empty() {
        let items: Vec<ListItem> = (0..SKELETON_ROWS)
            .map(|i| skeleton_item(i, theme))
            .collect();
        frame.render_widget(List::new(items).block(block), area);
        return;
    }

    let items: Vec<ListItem> = stories
        .iter()
        .enumerate()
        .map(|(i, story)| story_to_list_item(story, i + 1, theme, &app.clock))
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(theme.selection_style())
        .highlight_symbol("▶ ");

    let mut state = ListState::default();
    state.select(Some(app.selected_index));
    frame.render_stateful_widget(list, area, &mut state);
}

fn skeleton_item(index: usize, theme: &Theme) -> ListItem<'static> {
    let width = SKELETON_WIDTHS[index % SKELETON_WIDTHS.len()];
    ListItem::new(vec![
        Line::from(Span::styled(
            format!("     {}", "░".repeat(width)),
            theme.skeleton_style(),
        )),
        Line::from(Span::styled(
            format!("     {}", "░".repeat(width / 2)),
            theme.skeleton_style(),
        )),
    ])
}

fn story_to_list_item(
    story: &Story,
    rank: usize,
    theme: &Theme,
    clock: &Arc<dyn Clock>,
) -> ListItem<'static> {
    let mut title = vec![
        Span::styled(format!("{:>3}. ", rank), theme.dim_style()),
        Span::styled(story.title.clone(), Style::default().fg(theme.story_title)),
    ];
    if let Some(domain) = story.domain() {
        title.push(Span::styled(
            format!(" ({})", domain),
            Style::default().fg(theme.story_domain),
        ));
    }

    let ago = format_relative(story.time, clock.now());
    let meta = Line::from(vec![
        Span::raw("     "),
        Span::styled(story.summary(&ago), Style::default().fg(theme.story_meta)),
    ]);

    ListItem::new(vec![Line::from(title), meta])
}

fn render_load_more(frame: &mut Frame, app: &App, area: Rect) {
    let busy = app.state.load_more_busy();
    let label = if busy { " ⋯ Load More " } else { " Load More " };
    let button = Paragraph::new(Line::from(Span::styled(
        label,
        app.theme.button_style(busy),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(button, area);
}

fn render_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let state = &app.state;
    let help_text = match (app.show_help, state.can_load_more()) {
        (true, true) => "j/k:nav  g/G:top/bottom  o:open  m:load more  `:debug  q:quit  ?:hide",
        (true, false) => "j/k:nav  g/G:top/bottom  o:open  `:debug  q:quit  ?:hide",
        (false, true) => "m:load more  ?:help  q:quit",
        (false, false) => "?:help  q:quit",
    };

    let mut bar = StatusBar::new(&app.theme)
        .label("Top")
        .batch(state.completed_batches(), state.batch_count())
        .help(help_text);
    if state.in_flight().is_some() {
        bar = bar.loading("Loading...");
    }
    if !state.stories().is_empty() {
        bar = bar.position(app.selected_index + 1, state.stories().len());
    }
    bar.render(frame, area);
}
