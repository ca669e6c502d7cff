use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Widget};

use crate::session::history::History;
use crate::session::state::TranslationBuffer;
use crate::ui::theme::Theme;

/// How many history rows the translator view shows.
const HISTORY_ROWS: usize = 5;

pub struct TranslatorPanel<'a> {
    buffer: &'a TranslationBuffer,
    history: &'a History,
    /// Index of the entry currently recalled with Up/Down, if any.
    recall_cursor: Option<usize>,
    theme: &'a Theme,
}

impl<'a> TranslatorPanel<'a> {
    pub fn new(
        buffer: &'a TranslationBuffer,
        history: &'a History,
        recall_cursor: Option<usize>,
        theme: &'a Theme,
    ) -> Self {
        Self {
            buffer,
            history,
            recall_cursor,
            theme,
        }
    }
}

impl Widget for TranslatorPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;

        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Min(4),
            ])
            .split(area);

        // Source field, always focused on this view
        let source_block = Block::bordered()
            .title(" Английский ")
            .border_style(Style::default().fg(colors.border_focused()));
        let source_inner = source_block.inner(layout[0]);
        source_block.render(layout[0], buf);
        Paragraph::new(Line::from(vec![
            Span::styled(self.buffer.source.clone(), Style::default().fg(colors.fg())),
            Span::styled("▏", Style::default().fg(colors.accent())),
        ]))
        .render(source_inner, buf);

        // Result field
        let result_block = Block::bordered()
            .title(" Русский ")
            .border_style(Style::default().fg(colors.border()));
        let result_inner = result_block.inner(layout[1]);
        result_block.render(layout[1], buf);
        let result_line = match &self.buffer.result {
            Some(result) => Line::from(Span::styled(
                result.clone(),
                Style::default()
                    .fg(colors.accent())
                    .add_modifier(Modifier::BOLD),
            )),
            None => Line::from(Span::styled(
                "Результат перевода...",
                Style::default().fg(colors.muted()),
            )),
        };
        Paragraph::new(result_line).render(result_inner, buf);

        // Recent terms, newest first
        let history_block = Block::bordered()
            .title(" История переводов ")
            .border_style(Style::default().fg(colors.border()));
        let history_inner = history_block.inner(layout[2]);
        history_block.render(layout[2], buf);

        let mut lines: Vec<Line> = Vec::new();
        for (i, term) in self.history.entries().iter().take(HISTORY_ROWS).enumerate() {
            let is_recalled = self.recall_cursor == Some(i);
            let indicator = if is_recalled { "› " } else { "  " };
            let style = if is_recalled {
                Style::default()
                    .fg(colors.accent())
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(colors.fg())
            };
            lines.push(Line::from(vec![
                Span::styled(indicator, Style::default().fg(colors.accent())),
                Span::styled(term.clone(), style),
            ]));
        }
        if lines.is_empty() {
            lines.push(Line::from(Span::styled(
                "  Пока пусто",
                Style::default().fg(colors.muted()),
            )));
        }
        Paragraph::new(lines).render(history_inner, buf);
    }
}
