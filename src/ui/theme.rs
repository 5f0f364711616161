//! Light and dark palettes

use ratatui::style::{Color, Style};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeMode {
    Light,
    Dark,
}

/// Active palette
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub mode: ThemeMode,
}

impl Theme {
    pub fn new(dark: bool) -> Self {
        let mode = if dark { ThemeMode::Dark } else { ThemeMode::Light };
        Self { mode }
    }

    pub fn is_dark(&self) -> bool {
        self.mode == ThemeMode::Dark
    }

    pub fn toggle(&mut self) {
        self.mode = match self.mode {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        };
    }

    /// Label of the toggle: names the mode it switches to
    pub fn toggle_label(&self) -> &'static str {
        match self.mode {
            ThemeMode::Dark => "Light Mode",
            ThemeMode::Light => "Dark Mode",
        }
    }

    pub fn background(&self) -> Color {
        match self.mode {
            ThemeMode::Dark => Color::Rgb(17, 24, 39),
            ThemeMode::Light => Color::Rgb(255, 255, 255),
        }
    }

    pub fn text(&self) -> Color {
        match self.mode {
            ThemeMode::Dark => Color::Rgb(243, 244, 246),
            ThemeMode::Light => Color::Rgb(17, 24, 39),
        }
    }

    pub fn accent(&self) -> Color {
        match self.mode {
            ThemeMode::Dark => Color::Rgb(56, 189, 248),
            ThemeMode::Light => Color::Rgb(2, 132, 199),
        }
    }

    pub fn muted(&self) -> Color {
        match self.mode {
            ThemeMode::Dark => Color::Rgb(156, 163, 175),
            ThemeMode::Light => Color::Rgb(107, 114, 128),
        }
    }

    /// Borders of idle inputs and upcoming steps
    pub fn inactive(&self) -> Color {
        match self.mode {
            ThemeMode::Dark => Color::Rgb(55, 65, 81),
            ThemeMode::Light => Color::Rgb(229, 231, 235),
        }
    }

    pub fn error(&self) -> Color {
        Color::Rgb(248, 113, 113)
    }

    pub fn success(&self) -> Color {
        Color::Rgb(74, 222, 128)
    }

    pub fn base_style(&self) -> Style {
        Style::default().fg(self.text()).bg(self.background())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_flips_mode() {
        let mut theme = Theme::new(true);
        assert!(theme.is_dark());
        theme.toggle();
        assert_eq!(theme.mode, ThemeMode::Light);
        theme.toggle();
        assert!(theme.is_dark());
    }

    #[test]
    fn test_toggle_label_names_other_mode() {
        assert_eq!(Theme::new(true).toggle_label(), "Light Mode");
        assert_eq!(Theme::new(false).toggle_label(), "Dark Mode");
    }

    #[test]
    fn test_palettes_differ() {
        let dark = Theme::new(true);
        let light = Theme::new(false);
        assert_ne!(dark.background(), light.background());
        assert_ne!(dark.text(), light.text());
        assert_eq!(dark.error(), light.error());
    }
}
