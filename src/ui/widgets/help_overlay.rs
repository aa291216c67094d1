//! Help overlay widget listing every key binding

use crate::ui::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget},
};

const SEARCH_KEYS: [(&str, &str); 8] = [
    ("Type", "Edit the query"),
    ("Enter", "Search / open food / run example"),
    ("↓ / Tab", "Move into the result list"),
    ("↑ / ↓", "Select a result"),
    ("← / →", "Previous / next page (list)"),
    ("PgUp / PgDn", "Previous / next page"),
    ("r / F5", "Retry the last search"),
    ("Esc", "Back to the query / quit"),
];

const DETAIL_KEYS: [(&str, &str); 3] = [
    ("Esc / Backspace", "Back to search"),
    ("r / F5", "Retry after an error"),
    ("q", "Quit"),
];

/// Centered help screen, closed by any key
pub struct HelpOverlay<'a> {
    theme: &'a Theme,
}

impl<'a> HelpOverlay<'a> {
    #[must_use]
    pub const fn new(theme: &'a Theme) -> Self {
        Self { theme }
    }

    /// Calculate centered area for the overlay
    fn centered_rect(width_percent: u16, height_percent: u16, area: Rect) -> Rect {
        let [_, middle, _] = Layout::vertical([
            Constraint::Percentage((100 - height_percent) / 2),
            Constraint::Percentage(height_percent),
            Constraint::Percentage((100 - height_percent) / 2),
        ])
        .areas(area);

        let [_, center, _] = Layout::horizontal([
            Constraint::Percentage((100 - width_percent) / 2),
            Constraint::Percentage(width_percent),
            Constraint::Percentage((100 - width_percent) / 2),
        ])
        .areas(middle);
        center
    }

    fn section(&self, title: &'static str, keys: &[(&'static str, &'static str)]) -> Vec<Line<'static>> {
        let mut lines = vec![
            Line::styled(
                format!("  {title}"),
                self.theme.accent_style().add_modifier(Modifier::UNDERLINED),
            ),
            Line::default(),
        ];
        lines.extend(keys.iter().map(|(key, desc)| {
            Line::from(vec![
                Span::styled(format!("  {key:<18}"), self.theme.accent_style()),
                Span::raw(*desc),
            ])
        }));
        lines.push(Line::default());
        lines
    }
}

impl Widget for HelpOverlay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let popup = Self::centered_rect(70, 80, area);
        Clear.render(popup, buf);

        let mut lines = vec![Line::default()];
        lines.extend(self.section("Search", &SEARCH_KEYS));
        lines.extend(self.section("Food details", &DETAIL_KEYS));
        lines.push(Line::styled("  F1 help   Ctrl+C quit", self.theme.dimmed_style()));
        lines.push(Line::styled("  Press any key to close", self.theme.dimmed_style()));

        Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(self.theme.accent_style())
                    .title(" Help "),
            )
            .render(popup, buf);
    }
}
