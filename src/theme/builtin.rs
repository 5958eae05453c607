use ratatui::style::Color;

use super::{Theme, ThemeVariant};

const PICO_DARK: Theme = Theme {
    name: "pico-dark",
    variant: ThemeVariant::Dark,
    foreground: Color::Rgb(0xC2, 0xC7, 0xD0),
    foreground_dim: Color::Rgb(0x7B, 0x84, 0x95),
    border: Color::Rgb(0x37, 0x41, 0x51),
    selection_bg: Color::Rgb(0x1F, 0x2D, 0x38),
    primary: Color::Rgb(0x10, 0x95, 0xC1),
    story_title: Color::Rgb(0x1A, 0xB3, 0xE6),
    story_domain: Color::Rgb(0x7B, 0x84, 0x95),
    story_meta: Color::Rgb(0xA2, 0xAF, 0xB9),
    skeleton: Color::Rgb(0x37, 0x41, 0x51),
    button_bg: Color::Rgb(0x10, 0x95, 0xC1),
    button_fg: Color::White,
    status_bar_bg: Color::Rgb(0x1F, 0x2D, 0x38),
    status_bar_fg: Color::Rgb(0xC2, 0xC7, 0xD0),
};

const PICO_LIGHT: Theme = Theme {
    name: "pico-light",
    variant: ThemeVariant::Light,
    foreground: Color::Rgb(0x24, 0x33, 0x3E),
    foreground_dim: Color::Rgb(0x73, 0x82, 0x8C),
    border: Color::Rgb(0xD5, 0xDC, 0xE2),
    selection_bg: Color::Rgb(0xED, 0xF0, 0xF3),
    primary: Color::Rgb(0x10, 0x95, 0xC1),
    story_title: Color::Rgb(0x10, 0x95, 0xC1),
    story_domain: Color::Rgb(0x73, 0x82, 0x8C),
    story_meta: Color::Rgb(0x41, 0x54, 0x62),
    skeleton: Color::Rgb(0xD5, 0xDC, 0xE2),
    button_bg: Color::Rgb(0x10, 0x95, 0xC1),
    button_fg: Color::White,
    status_bar_bg: Color::Rgb(0xED, 0xF0, 0xF3),
    status_bar_fg: Color::Rgb(0x24, 0x33, 0x3E),
};

pub fn default_for_variant(variant: ThemeVariant) -> Theme {
    match variant {
        ThemeVariant::Dark => PICO_DARK,
        ThemeVariant::Light => PICO_LIGHT,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_for_variant() {
        assert_eq!(default_for_variant(ThemeVariant::Dark).name, "pico-dark");
        let light = default_for_variant(ThemeVariant::Light);
        assert_eq!(light.name, "pico-light");
        assert_eq!(light.variant, ThemeVariant::Light);
    }

    #[test]
    fn test_palette_colors_are_rgb() {
        let dark = default_for_variant(ThemeVariant::Dark);
        assert_eq!(dark.primary, Color::Rgb(0x10, 0x95, 0xC1));
        assert_eq!(dark.foreground, Color::Rgb(0xC2, 0xC7, 0xD0));
    }
}
