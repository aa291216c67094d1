//! Result list widget rendering one card per food

use crate::format::{DEFAULT_TRUNCATE_LEN, truncate_text};
use crate::models::FoodSummary;
use crate::pagination::result_count_label;
use crate::ui::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Rows taken by one card, including the spacer
pub const CARD_HEIGHT: u16 = 3;

/// List of food cards with a highlighted cursor row
pub struct FoodList<'a> {
    foods: &'a [FoodSummary],
    total: u64,
    cursor: usize,
    scroll_offset: usize,
    theme: &'a Theme,
    focused: bool,
}

impl<'a> FoodList<'a> {
    /// Create a new food list widget
    #[must_use]
    pub const fn new(foods: &'a [FoodSummary], total: u64, theme: &'a Theme) -> Self {
        Self {
            foods,
            total,
            cursor: 0,
            scroll_offset: 0,
            theme,
            focused: false,
        }
    }

    /// Set the highlighted card and the first visible card
    #[must_use]
    pub const fn cursor(mut self, cursor: usize, scroll_offset: usize) -> Self {
        self.cursor = cursor;
        self.scroll_offset = scroll_offset;
        self
    }

    /// Set focus state
    #[must_use]
    pub const fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Number of whole cards that fit in `area`, borders included
    #[must_use]
    pub const fn visible_rows(area: Rect) -> usize {
        (area.height.saturating_sub(2) / CARD_HEIGHT) as usize
    }

    fn card_lines(&self, food: &'a FoodSummary, selected: bool) -> Vec<Line<'a>> {
        let marker = if selected { "▶ " } else { "  " };
        let title = Line::from(vec![
            Span::styled(marker, self.theme.accent_style()),
            Span::styled(
                truncate_text(Some(&food.description), DEFAULT_TRUNCATE_LEN),
                self.theme.title_style(),
            ),
        ]);

        let mut meta = vec![Span::raw("  ")];
        if let Some(brand) = &food.brand_owner {
            meta.push(Span::styled(format!("🏷 {brand}"), self.theme.brand_style()));
            meta.push(Span::raw("  "));
        }
        meta.push(Span::styled(food.data_type.as_str(), self.theme.badge_style()));

        vec![title, Line::from(meta)]
    }
}

impl Widget for FoodList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = if self.focused {
            self.theme.accent_style()
        } else {
            self.theme.border_style()
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(" Results ")
            .title(
                Line::styled(
                    format!(" {} ", result_count_label(self.total)),
                    self.theme.dimmed_style(),
                )
                .right_aligned(),
            );

        let inner = block.inner(area);
        block.render(area, buf);

        let visible = (inner.height / CARD_HEIGHT) as usize;
        let cards = self
            .foods
            .iter()
            .enumerate()
            .skip(self.scroll_offset)
            .take(visible);

        for (row, (idx, food)) in cards.enumerate() {
            #[allow(clippy::cast_possible_truncation)]
            let y = inner.y + row as u16 * CARD_HEIGHT;
            let card_area = Rect::new(inner.x, y, inner.width, CARD_HEIGHT - 1);
            let selected = idx == self.cursor;

            Paragraph::new(self.card_lines(food, selected)).render(card_area, buf);
            if selected && self.focused {
                buf.set_style(card_area, self.theme.selected_style());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::food;

    fn row_text(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width)
            .map(|x| buf[(x, y)].symbol().to_string())
            .collect()
    }

    #[test]
    fn test_visible_rows() {
        assert_eq!(FoodList::visible_rows(Rect::new(0, 0, 40, 11)), 3);
        assert_eq!(FoodList::visible_rows(Rect::new(0, 0, 40, 1)), 0);
    }

    #[test]
    fn test_renders_cards_and_count() {
        let theme = Theme::default();
        let mut foods = vec![food(1, "Bananas, raw"), food(2, "Banana bread")];
        foods[1].brand_owner = Some("Acme Bakery".to_string());

        let area = Rect::new(0, 0, 60, 8);
        let mut buf = Buffer::empty(area);
        FoodList::new(&foods, 2, &theme).render(area, &mut buf);

        assert!(row_text(&buf, 0).contains("2 results found"));
        assert!(row_text(&buf, 1).contains("Bananas, raw"));
        assert!(row_text(&buf, 2).contains("Survey (FNDDS)"));
        assert!(row_text(&buf, 4).contains("Banana bread"));
        assert!(row_text(&buf, 5).contains("Acme Bakery"));
    }

    #[test]
    fn test_scroll_offset_skips_cards() {
        let theme = Theme::default();
        let foods = vec![food(1, "First"), food(2, "Second")];

        let area = Rect::new(0, 0, 40, 5);
        let mut buf = Buffer::empty(area);
        FoodList::new(&foods, 2, &theme).cursor(1, 1).render(area, &mut buf);

        assert!(row_text(&buf, 1).contains("Second"));
    }
}
