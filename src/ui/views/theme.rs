//! Colors for the light and dark palettes.

use ratatui::prelude::{Color, Modifier, Style};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Theme {
    pub background: Color,
    pub text: Color,
    pub muted: Color,
    pub accent: Color,
    pub highlight: Color,
    pub danger: Color,
}

impl Theme {
    pub fn for_mode(dark_mode: bool) -> Self {
        if dark_mode {
            Self {
                background: Color::Rgb(16, 20, 24),
                text: Color::Gray,
                muted: Color::DarkGray,
                accent: Color::Cyan,
                highlight: Color::LightGreen,
                danger: Color::LightRed,
            }
        } else {
            Self {
                background: Color::Rgb(245, 245, 245),
                text: Color::Black,
                muted: Color::Gray,
                accent: Color::Blue,
                highlight: Color::Green,
                danger: Color::Red,
            }
        }
    }

    pub fn text(&self) -> Style {
        Style::default().fg(self.text)
    }

    pub fn muted(&self) -> Style {
        Style::default().fg(self.muted)
    }

    pub fn accent(&self) -> Style {
        Style::default().fg(self.accent)
    }

    pub fn title(&self) -> Style {
        self.accent().add_modifier(Modifier::BOLD)
    }

    /// Style of the selected row or tab.
    pub fn selected(&self) -> Style {
        Style::default()
            .fg(self.highlight)
            .add_modifier(Modifier::BOLD | Modifier::REVERSED)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palettes_differ() {
        assert_ne!(Theme::for_mode(true), Theme::for_mode(false));
        assert_eq!(Theme::for_mode(true).background, Color::Rgb(16, 20, 24));
    }
}
