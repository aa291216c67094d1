//! Start screen shown before the first search

use crate::ui::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

/// Instructions plus selectable example queries
pub struct WelcomeView<'a> {
    suggestions: &'a [&'a str],
    cursor: Option<usize>,
    theme: &'a Theme,
}

impl<'a> WelcomeView<'a> {
    #[must_use]
    pub const fn new(suggestions: &'a [&'a str], theme: &'a Theme) -> Self {
        Self {
            suggestions,
            cursor: None,
            theme,
        }
    }

    /// Highlight the suggestion at `cursor`
    #[must_use]
    pub const fn cursor(mut self, cursor: Option<usize>) -> Self {
        self.cursor = cursor;
        self
    }
}

/// `banana` -> `Banana`
fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}

impl Widget for WelcomeView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut tags = Vec::new();
        for (i, suggestion) in self.suggestions.iter().enumerate() {
            if i > 0 {
                tags.push(Span::raw("  "));
            }
            let style = if self.cursor == Some(i) {
                self.theme.selected_style()
            } else {
                self.theme.badge_style()
            };
            tags.push(Span::styled(format!(" {} ", capitalize(suggestion)), style));
        }

        let lines = vec![
            Line::default(),
            Line::from("🔍"),
            Line::styled("Start Your Search", self.theme.heading_style()),
            Line::styled(
                "Enter a food name in the search bar above to get started!",
                self.theme.dimmed_style(),
            ),
            Line::default(),
            Line::from("Try searching for:"),
            Line::from(tags),
            Line::default(),
            Line::styled("↓ to pick an example, Enter to search", self.theme.dimmed_style()),
        ];

        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .render(area, buf);
    }
}
