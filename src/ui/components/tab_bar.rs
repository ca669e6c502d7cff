use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget};

use crate::session::state::ActiveView;
use crate::ui::theme::Theme;

pub struct TabBar<'a> {
    active: ActiveView,
    theme: &'a Theme,
}

impl<'a> TabBar<'a> {
    pub fn new(active: ActiveView, theme: &'a Theme) -> Self {
        Self { active, theme }
    }
}

impl Widget for TabBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;

        let mut spans: Vec<Span> = vec![Span::raw(" ")];
        for (i, view) in ActiveView::ALL.into_iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled("│", Style::default().fg(colors.border())));
            }
            let style = if view == self.active {
                Style::default()
                    .fg(colors.header_fg())
                    .bg(colors.header_bg())
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(colors.muted())
            };
            spans.push(Span::styled(format!(" {} ", view.title()), style));
        }

        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}
