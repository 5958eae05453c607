use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::theme::Theme;

/// Builder for the one-line status bar.
///
/// Layout: `[Label] [Loading?] Position | Batch | Help Text`
pub struct StatusBar<'a> {
    theme: &'a Theme,
    label: &'a str,
    loading_text: Option<&'a str>,
    position: Option<(usize, usize)>,
    batch: Option<(usize, usize)>,
    help_text: &'a str,
}

impl<'a> StatusBar<'a> {
    pub fn new(theme: &'a Theme) -> Self {
        Self {
            theme,
            label: "",
            loading_text: None,
            position: None,
            batch: None,
            help_text: "",
        }
    }

    pub fn label(mut self, label: &'a str) -> Self {
        self.label = label;
        self
    }

    pub fn loading(mut self, text: &'a str) -> Self {
        self.loading_text = Some(text);
        self
    }

    pub fn position(mut self, current: usize, total: usize) -> Self {
        self.position = Some((current, total));
        self
    }

    /// Batches loaded out of batches available.
    pub fn batch(mut self, loaded: usize, total: usize) -> Self {
        self.batch = Some((loaded, total));
        self
    }

    pub fn help(mut self, text: &'a str) -> Self {
        self.help_text = text;
        self
    }

    pub fn render(self, frame: &mut Frame, area: Rect) {
        let dim = Style::default().fg(self.theme.foreground_dim);
        let mut spans = vec![
            Span::styled(format!(" {} ", self.label), self.theme.status_bar_style()),
            Span::raw(" "),
        ];

        if let Some(loading) = self.loading_text {
            spans.push(Span::styled(
                loading.to_string(),
                Style::default().fg(self.theme.primary),
            ));
            spans.push(Span::raw(" | "));
        }

        if let Some((current, total)) = self.position {
            spans.push(Span::styled(format!("{}/{}", current, total), dim));
            spans.push(Span::raw(" | "));
        }

        if let Some((loaded, total)) = self.batch {
            spans.push(Span::styled(format!("batch {}/{}", loaded, total), dim));
            spans.push(Span::raw(" | "));
        }

        spans.push(Span::styled(self.help_text.to_string(), dim));

        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::{ThemeVariant, default_for_variant};
    use crate::views::tests::render_to_string;

    #[test]
    fn test_status_bar_full() {
        let theme = default_for_variant(ThemeVariant::Dark);
        let output = render_to_string(70, 1, |frame| {
            StatusBar::new(&theme)
                .label("Top")
                .position(5, 100)
                .batch(5, 25)
                .help("j/k:nav  ?:help")
                .render(frame, frame.area());
        });

        assert!(output.contains("Top"));
        assert!(output.contains("5/100"));
        assert!(output.contains("batch 5/25"));
        assert!(output.contains("j/k:nav"));
    }

    #[test]
    fn test_status_bar_with_loading() {
        let theme = default_for_variant(ThemeVariant::Dark);
        let output = render_to_string(60, 1, |frame| {
            StatusBar::new(&theme)
                .label("Top")
                .loading("Loading...")
                .help("?:help")
                .render(frame, frame.area());
        });

        assert!(output.contains("Loading..."));
        assert!(!output.contains("batch"));
    }
}
