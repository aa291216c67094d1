//! Detail card for a single food

use crate::format::format_nutrient;
use crate::models::FoodDetail;
use crate::ui::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, Widget, Wrap},
};

/// Title, brand, data type, nutrient table and source footer
pub struct FoodDetailCard<'a> {
    food: &'a FoodDetail,
    theme: &'a Theme,
}

impl<'a> FoodDetailCard<'a> {
    #[must_use]
    pub const fn new(food: &'a FoodDetail, theme: &'a Theme) -> Self {
        Self { food, theme }
    }

    fn header(&self) -> Vec<Line<'a>> {
        let mut meta = Vec::new();
        if let Some(brand) = &self.food.brand_owner {
            meta.push(Span::styled("Brand: ", self.theme.dimmed_style()));
            meta.push(Span::styled(brand.as_str(), self.theme.brand_style()));
            meta.push(Span::raw("   "));
        }
        meta.push(Span::styled("Type: ", self.theme.dimmed_style()));
        meta.push(Span::styled(self.food.data_type.as_str(), self.theme.badge_style()));

        vec![
            Line::styled(self.food.description.as_str(), self.theme.heading_style()),
            Line::from(meta),
        ]
    }

    fn nutrient_table(&self) -> Table<'a> {
        let rows = self.food.nutrients.rows().map(|row| {
            Row::new(vec![
                Cell::from(row.name),
                Cell::from(Span::styled(
                    format_nutrient(row.value, row.unit),
                    self.theme.value_style(),
                )),
            ])
        });

        Table::new(rows, [Constraint::Length(16), Constraint::Fill(1)])
            .header(Row::new(vec!["Nutrient", "Amount"]).style(self.theme.dimmed_style()))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(self.theme.border_style())
                    .title(Line::styled(" Key Nutrients (per 100g) ", self.theme.heading_style())),
            )
    }
}

impl Widget for FoodDetailCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let [header, table, footer] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Length(9),
            Constraint::Length(2),
        ])
        .areas(area);

        Paragraph::new(self.header())
            .wrap(Wrap { trim: true })
            .render(header, buf);
        Widget::render(self.nutrient_table(), table, buf);
        Paragraph::new(Line::styled(
            format!("Data Source: USDA FoodData Central (ID: {})", self.food.fdc_id),
            self.theme.dimmed_style(),
        ))
        .render(footer, buf);
    }
}
