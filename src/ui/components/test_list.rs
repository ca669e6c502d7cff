use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Widget};

use crate::catalog::types::{Level, TestDescriptor, UserProgress};
use crate::ui::components::progress_bar::ProgressBar;
use crate::ui::theme::Theme;

pub struct TestList<'a> {
    tests: &'a [TestDescriptor],
    progress: &'a UserProgress,
    selected: usize,
    theme: &'a Theme,
}

impl<'a> TestList<'a> {
    pub fn new(
        tests: &'a [TestDescriptor],
        progress: &'a UserProgress,
        selected: usize,
        theme: &'a Theme,
    ) -> Self {
        Self {
            tests,
            progress,
            selected,
            theme,
        }
    }
}

impl Widget for TestList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;

        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(4), Constraint::Min(4)])
            .split(area);

        // Progress header card
        let card = Block::bordered()
            .title(" Ваш прогресс ")
            .border_style(Style::default().fg(colors.border()));
        let card_inner = card.inner(layout[0]);
        card.render(layout[0], buf);

        let card_layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Length(1)])
            .split(card_inner);

        Paragraph::new(Line::from(Span::styled(
            format!(
                "{}/{} тестов",
                self.progress.tests_completed, self.progress.tests_total
            ),
            Style::default()
                .fg(colors.accent())
                .add_modifier(Modifier::BOLD),
        )))
        .render(card_layout[0], buf);

        let ratio = self.progress.tests_completed as f64 / self.progress.tests_total as f64;
        ProgressBar::new(ratio, self.theme).render(card_layout[1], buf);

        // Quiz cards
        let mut lines: Vec<Line> = Vec::new();
        for (i, test) in self.tests.iter().enumerate() {
            let is_selected = i == self.selected;
            let indicator = if is_selected { "› " } else { "  " };

            let mut title_spans = vec![
                Span::styled(indicator, Style::default().fg(colors.accent())),
                Span::styled(
                    test.title,
                    Style::default()
                        .fg(if is_selected { colors.accent() } else { colors.fg() })
                        .add_modifier(Modifier::BOLD),
                ),
            ];
            if test.completed {
                title_spans.push(Span::raw("  "));
                title_spans.push(Span::styled(
                    format!("✓ {}%", test.score),
                    Style::default().fg(colors.success()),
                ));
            }
            lines.push(Line::from(title_spans));

            let level_color = match test.level {
                Level::Beginner => colors.level_beginner(),
                Level::Intermediate => colors.level_intermediate(),
            };
            lines.push(Line::from(vec![
                Span::raw("    "),
                Span::styled(test.level.as_str(), Style::default().fg(level_color)),
                Span::styled(
                    format!(" · {} вопросов", test.questions),
                    Style::default().fg(colors.muted()),
                ),
            ]));

            lines.push(Line::from(vec![
                Span::raw("    "),
                Span::styled(
                    if test.completed {
                        "Пройти снова"
                    } else {
                        "Начать тест"
                    },
                    Style::default().fg(colors.muted()),
                ),
            ]));
            lines.push(Line::from(""));
        }

        Paragraph::new(lines).render(layout[1], buf);
    }
}
