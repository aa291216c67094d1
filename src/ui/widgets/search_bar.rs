//! Search bar widget for query input

use crate::ui::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Shown in the empty box
const PLACEHOLDER: &str = "Search for foods (e.g., banana, chicken, apple)...";

/// Search bar widget that displays the query with cursor
pub struct SearchBar<'a> {
    /// Current query text
    query: &'a str,
    /// Cursor position in the query (byte offset)
    cursor: usize,
    /// Theme for styling
    theme: &'a Theme,
    /// Whether the widget has focus
    focused: bool,
    /// Whether a search is running; input is disabled meanwhile
    loading: bool,
}

impl<'a> SearchBar<'a> {
    /// Create a new search bar widget
    #[must_use]
    pub const fn new(query: &'a str, cursor: usize, theme: &'a Theme) -> Self {
        Self {
            query,
            cursor,
            theme,
            focused: true,
            loading: false,
        }
    }

    /// Set focus state
    #[must_use]
    pub const fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Set loading state
    #[must_use]
    pub const fn loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    /// Label of the submit action
    #[must_use]
    pub const fn button_label(&self) -> &'static str {
        if self.loading { " Searching... " } else { " Enter: Search " }
    }
}

impl Widget for SearchBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = if self.focused && !self.loading {
            self.theme.accent_style()
        } else {
            self.theme.border_style()
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(" Search ")
            .title(Line::styled(self.button_label(), self.theme.dimmed_style()).right_aligned());

        let inner = block.inner(area);
        block.render(area, buf);

        let caret = Span::styled("│", Style::default().add_modifier(Modifier::SLOW_BLINK));
        let mut spans = vec![Span::styled("🔍 ", self.theme.dimmed_style())];

        if self.query.is_empty() {
            if self.focused && !self.loading {
                spans.push(caret);
            }
            spans.push(Span::styled(PLACEHOLDER, self.theme.dimmed_style()));
        } else if self.focused && !self.loading {
            let (before, after) = self.query.split_at(self.cursor.min(self.query.len()));
            spans.push(Span::raw(before));
            spans.push(caret);
            spans.push(Span::raw(after));
        } else {
            spans.push(Span::styled(self.query, self.theme.title_style()));
        }

        Paragraph::new(Line::from(spans)).render(inner, buf);
    }
}
