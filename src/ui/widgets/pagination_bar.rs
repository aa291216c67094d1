//! Pagination bar shown under the result list

use crate::pagination::PageWindow;
use crate::ui::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Range summary on the left, page controls on the right
pub struct PaginationBar<'a> {
    window: &'a PageWindow,
    theme: &'a Theme,
}

impl<'a> PaginationBar<'a> {
    #[must_use]
    pub const fn new(window: &'a PageWindow, theme: &'a Theme) -> Self {
        Self { window, theme }
    }

    fn control_style(&self, enabled: bool) -> Style {
        if enabled {
            self.theme.accent_style()
        } else {
            self.theme.dimmed_style()
        }
    }
}

impl Widget for PaginationBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.border_style());
        let inner = block.inner(area);
        block.render(area, buf);

        Paragraph::new(Line::styled(self.window.range_label(), self.theme.dimmed_style()))
            .render(inner, buf);

        let controls = Line::from(vec![
            Span::styled("← Previous", self.control_style(self.window.previous().is_some())),
            Span::raw("   "),
            Span::styled(self.window.page_label(), self.theme.heading_style()),
            Span::raw("   "),
            Span::styled("Next →", self.control_style(self.window.next().is_some())),
        ])
        .right_aligned();
        Paragraph::new(controls).render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_renders_range_and_page() {
        let theme = Theme::default();
        let window = PageWindow::new(2, 45, 20).unwrap();

        let area = Rect::new(0, 0, 80, 3);
        let mut buf = Buffer::empty(area);
        PaginationBar::new(&window, &theme).render(area, &mut buf);

        let row: String = (0..area.width).map(|x| buf[(x, 1)].symbol().to_string()).collect();
        assert!(row.contains("Showing 21-40 of 45 results"));
        assert!(row.contains("Page 2 of 3"));
    }
}
