use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::Widget;

use crate::ui::theme::Theme;

/// Single-row horizontal bar with a centered percent label.
pub struct ProgressBar<'a> {
    ratio: f64,
    theme: &'a Theme,
}

impl<'a> ProgressBar<'a> {
    pub fn new(ratio: f64, theme: &'a Theme) -> Self {
        Self {
            ratio: ratio.clamp(0.0, 1.0),
            theme,
        }
    }
}

impl Widget for ProgressBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        let colors = &self.theme.colors;

        let filled_width = (self.ratio * area.width as f64) as u16;
        for x in area.x..area.x + area.width {
            let style = if x < area.x + filled_width {
                Style::default().fg(colors.bg()).bg(colors.bar_filled())
            } else {
                Style::default().fg(colors.fg()).bg(colors.bar_empty())
            };
            buf[(x, area.y)].set_style(style);
        }

        let label = format!("{:.0}%", self.ratio * 100.0);
        let label_x = area.x + (area.width.saturating_sub(label.len() as u16)) / 2;
        buf.set_string(label_x, area.y, &label, Style::default().fg(colors.fg()));
    }
}
