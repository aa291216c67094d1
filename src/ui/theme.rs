//! Color theme definitions for the TUI
//!
//! Defines colors and styles used throughout the application.

use ratatui::style::{Color, Modifier, Style};

/// Theme configuration for the TUI
#[derive(Debug, Clone)]
pub struct Theme {
    /// Background color for the selected card
    pub selection_bg: Color,
    /// Foreground color for the selected card
    pub selection_fg: Color,
    /// Color for the focus indicator and key names
    pub accent: Color,
    /// Color for food descriptions
    pub title: Color,
    /// Color for brand owners
    pub brand: Color,
    /// Color for data type badges
    pub badge: Color,
    /// Color for nutrient values
    pub value: Color,
    /// Color for error messages
    pub error: Color,
    /// Color for borders
    pub border: Color,
    /// Color for dimmed/inactive text
    pub dimmed: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    /// Create a dark theme (default)
    #[must_use]
    pub const fn dark() -> Self {
        Self {
            selection_bg: Color::Blue,
            selection_fg: Color::White,
            accent: Color::Cyan,
            title: Color::White,
            brand: Color::Yellow,
            badge: Color::Magenta,
            value: Color::Green,
            error: Color::Red,
            border: Color::DarkGray,
            dimmed: Color::DarkGray,
        }
    }

    /// Style for the currently selected card
    #[must_use]
    pub fn selected_style(&self) -> Style {
        Style::default()
            .bg(self.selection_bg)
            .fg(self.selection_fg)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for key names and the focused border
    #[must_use]
    pub fn accent_style(&self) -> Style {
        Style::default().fg(self.accent).add_modifier(Modifier::BOLD)
    }

    /// Style for headings
    #[must_use]
    pub fn heading_style(&self) -> Style {
        Style::default().fg(self.title).add_modifier(Modifier::BOLD)
    }

    /// Style for food descriptions
    #[must_use]
    pub fn title_style(&self) -> Style {
        Style::default().fg(self.title)
    }

    /// Style for brand owners
    #[must_use]
    pub fn brand_style(&self) -> Style {
        Style::default().fg(self.brand)
    }

    /// Style for data type badges
    #[must_use]
    pub fn badge_style(&self) -> Style {
        Style::default().fg(self.badge)
    }

    /// Style for nutrient values
    #[must_use]
    pub fn value_style(&self) -> Style {
        Style::default().fg(self.value).add_modifier(Modifier::BOLD)
    }

    /// Style for error messages
    #[must_use]
    pub fn error_style(&self) -> Style {
        Style::default().fg(self.error)
    }

    /// Style for borders
    #[must_use]
    pub fn border_style(&self) -> Style {
        Style::default().fg(self.border)
    }

    /// Style for dimmed text
    #[must_use]
    pub fn dimmed_style(&self) -> Style {
        Style::default().fg(self.dimmed)
    }
}
