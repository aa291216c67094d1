//! Loading, error and empty-state panels

use crate::ui::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

const SPINNER: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Vertically centred slot of `height` rows inside `area`
fn centered(area: Rect, height: u16) -> Rect {
    let [_, middle, _] = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(height.min(area.height)),
        Constraint::Fill(1),
    ])
    .areas(area);
    middle
}

/// Spinner with a message
pub struct LoadingView<'a> {
    message: &'a str,
    tick: usize,
    theme: &'a Theme,
}

impl<'a> LoadingView<'a> {
    #[must_use]
    pub const fn new(message: &'a str, tick: usize, theme: &'a Theme) -> Self {
        Self {
            message,
            tick,
            theme,
        }
    }
}

impl Widget for LoadingView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let frame = SPINNER[self.tick % SPINNER.len()];
        let lines = vec![
            Line::styled(frame, self.theme.accent_style()),
            Line::default(),
            Line::styled(self.message, self.theme.dimmed_style()),
        ];
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .render(centered(area, 3), buf);
    }
}

/// Failure panel listing the keys that recover from it
pub struct ErrorView<'a> {
    message: &'a str,
    actions: &'a [(&'a str, &'a str)],
    theme: &'a Theme,
}

impl<'a> ErrorView<'a> {
    /// `actions` pairs a key with what it does, e.g. `("r", "Try Again")`
    #[must_use]
    pub const fn new(message: &'a str, actions: &'a [(&'a str, &'a str)], theme: &'a Theme) -> Self {
        Self {
            message,
            actions,
            theme,
        }
    }
}

impl Widget for ErrorView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut hints = Vec::new();
        for (i, (key, action)) in self.actions.iter().enumerate() {
            if i > 0 {
                hints.push(Span::raw("    "));
            }
            hints.push(Span::styled(format!("[{key}]"), self.theme.accent_style()));
            hints.push(Span::raw(format!(" {action}")));
        }

        let lines = vec![
            Line::styled("⚠", self.theme.error_style()),
            Line::styled("Oops! Something went wrong", self.theme.heading_style()),
            Line::default(),
            Line::styled(self.message, self.theme.error_style()),
            Line::default(),
            Line::from(hints),
        ];
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .render(centered(area, 8), buf);
    }
}

/// Single centred line of dimmed text
pub struct Notice<'a> {
    text: &'a str,
    theme: &'a Theme,
}

impl<'a> Notice<'a> {
    #[must_use]
    pub const fn new(text: &'a str, theme: &'a Theme) -> Self {
        Self { text, theme }
    }
}

impl Widget for Notice<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(Line::styled(self.text, self.theme.dimmed_style()))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .render(centered(area, 2), buf);
    }
}
