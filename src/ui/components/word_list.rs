use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget};

use crate::catalog::data;
use crate::catalog::types::{Level, WordEntry};
use crate::session::favorites::Favorites;
use crate::ui::theme::Theme;

/// Scrollable card list of word entries, shared by the Dictionary and
/// Favorites views.
pub struct WordList<'a> {
    words: &'a [&'a WordEntry],
    favorites: &'a Favorites,
    selected: usize,
    show_examples: bool,
    /// Rendered centered when the list is empty. The Favorites view sets
    /// this; dictionary search renders nothing for an empty result.
    empty_text: Option<&'static str>,
    theme: &'a Theme,
}

impl<'a> WordList<'a> {
    pub fn new(
        words: &'a [&'a WordEntry],
        favorites: &'a Favorites,
        selected: usize,
        show_examples: bool,
        theme: &'a Theme,
    ) -> Self {
        Self {
            words,
            favorites,
            selected,
            show_examples,
            empty_text: None,
            theme,
        }
    }

    pub fn empty_text(mut self, text: &'static str) -> Self {
        self.empty_text = Some(text);
        self
    }

    fn level_style(&self, level: Level) -> Style {
        let colors = &self.theme.colors;
        match level {
            Level::Beginner => Style::default().fg(colors.level_beginner()),
            Level::Intermediate => Style::default().fg(colors.level_intermediate()),
        }
    }
}

impl Widget for WordList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;

        if self.words.is_empty() {
            if let Some(text) = self.empty_text {
                let message = Paragraph::new(vec![
                    Line::from(""),
                    Line::from(Span::styled("♡", Style::default().fg(colors.muted()))),
                    Line::from(Span::styled(text, Style::default().fg(colors.muted()))),
                ])
                .alignment(Alignment::Center);
                message.render(area, buf);
            }
            return;
        }

        let rows_per_entry = if self.show_examples { 4 } else { 3 };
        let visible = (area.height as usize / rows_per_entry).max(1);
        let first = self
            .selected
            .saturating_sub(visible.saturating_sub(1))
            .min(self.words.len().saturating_sub(1));

        let mut lines: Vec<Line> = Vec::new();
        for (offset, word) in self.words.iter().enumerate().skip(first).take(visible) {
            let is_selected = offset == self.selected;
            let indicator = if is_selected { "› " } else { "  " };

            let heart = if self.favorites.contains(word.id) {
                Span::styled("♥", Style::default().fg(colors.favorite()))
            } else {
                Span::styled("♡", Style::default().fg(colors.muted()))
            };

            let word_style = Style::default()
                .fg(if is_selected { colors.accent() } else { colors.fg() })
                .add_modifier(Modifier::BOLD);

            lines.push(Line::from(vec![
                Span::styled(indicator, Style::default().fg(colors.accent())),
                Span::styled(word.word.clone(), word_style),
                Span::raw("  "),
                heart,
                Span::raw("  "),
                Span::styled(word.level.as_str(), self.level_style(word.level)),
            ]));

            lines.push(Line::from(vec![
                Span::raw("    "),
                Span::styled(word.translation.clone(), Style::default().fg(colors.fg())),
                Span::raw("  "),
                Span::styled(
                    data::category_name(&word.category).to_string(),
                    Style::default().fg(colors.muted()),
                ),
            ]));

            if self.show_examples {
                lines.push(Line::from(vec![
                    Span::raw("    "),
                    Span::styled(
                        format!("«{}»", word.example),
                        Style::default().fg(colors.muted()),
                    ),
                ]));
            }

            lines.push(Line::from(""));
        }

        Paragraph::new(lines).render(area, buf);
    }
}
