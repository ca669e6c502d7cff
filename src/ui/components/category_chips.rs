use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget};

use crate::catalog::data::CATEGORIES;
use crate::catalog::search;
use crate::catalog::types::WordEntry;
use crate::ui::theme::{Theme, ThemeColors};

/// Horizontal row of category chips with per-category word counts.
pub struct CategoryChips<'a> {
    catalog: &'a [WordEntry],
    selected_id: &'a str,
    theme: &'a Theme,
}

impl<'a> CategoryChips<'a> {
    pub fn new(catalog: &'a [WordEntry], selected_id: &'a str, theme: &'a Theme) -> Self {
        Self {
            catalog,
            selected_id,
            theme,
        }
    }
}

impl Widget for CategoryChips<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;

        let mut spans: Vec<Span> = vec![Span::raw(" ")];
        for category in CATEGORIES {
            let count = search::category_count(self.catalog, category.id);
            let chip = format!(" {} {} {} ", category.glyph, category.name, count);
            let style = if category.id == self.selected_id {
                Style::default()
                    .fg(colors.bg())
                    .bg(ThemeColors::parse_color(category.color))
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(colors.muted())
            };
            spans.push(Span::styled(chip, style));
            spans.push(Span::raw(" "));
        }

        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}
