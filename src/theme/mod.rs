mod builtin;

pub use builtin::default_for_variant;

use ratatui::style::{Color, Modifier, Style};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ThemeVariant {
    #[default]
    Dark,
    Light,
}

/// Palette for one variant. Views read the colors directly or through the
/// style helpers below.
#[derive(Debug, Clone)]
pub struct Theme {
    pub name: &'static str,
    pub variant: ThemeVariant,
    pub foreground: Color,
    pub foreground_dim: Color,
    pub border: Color,
    pub selection_bg: Color,
    pub primary: Color,
    pub story_title: Color,
    pub story_domain: Color,
    pub story_meta: Color,
    pub skeleton: Color,
    pub button_bg: Color,
    pub button_fg: Color,
    pub status_bar_bg: Color,
    pub status_bar_fg: Color,
}

impl Theme {
    pub fn border_style(&self) -> Style {
        Style::default().fg(self.border)
    }

    pub fn selection_style(&self) -> Style {
        Style::default()
            .bg(self.selection_bg)
            .add_modifier(Modifier::BOLD)
    }

    pub fn dim_style(&self) -> Style {
        Style::default().fg(self.foreground_dim)
    }

    pub fn brand_style(&self) -> Style {
        Style::default()
            .fg(self.primary)
            .add_modifier(Modifier::BOLD)
    }

    pub fn skeleton_style(&self) -> Style {
        Style::default().fg(self.skeleton)
    }

    /// The load more control: dimmed while busy, filled otherwise.
    pub fn button_style(&self, busy: bool) -> Style {
        if busy {
            Style::default()
                .fg(self.foreground_dim)
                .add_modifier(Modifier::DIM)
        } else {
            Style::default()
                .bg(self.button_bg)
                .fg(self.button_fg)
                .add_modifier(Modifier::BOLD)
        }
    }

    pub fn status_bar_style(&self) -> Style {
        Style::default()
            .bg(self.status_bar_bg)
            .fg(self.status_bar_fg)
    }
}
