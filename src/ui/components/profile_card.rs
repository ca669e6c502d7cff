use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Widget};

use crate::catalog::data;
use crate::catalog::types::UserProgress;
use crate::ui::theme::Theme;

pub struct ProfileCard<'a> {
    progress: &'a UserProgress,
    theme: &'a Theme,
}

impl<'a> ProfileCard<'a> {
    pub fn new(progress: &'a UserProgress, theme: &'a Theme) -> Self {
        Self { progress, theme }
    }
}

impl Widget for ProfileCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;

        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4),
                Constraint::Length(5),
                Constraint::Min(5),
            ])
            .split(area);

        // Identity card
        let identity = Block::bordered().border_style(Style::default().fg(colors.border()));
        let identity_inner = identity.inner(layout[0]);
        identity.render(layout[0], buf);
        Paragraph::new(vec![
            Line::from(Span::styled(
                data::PROFILE_NAME,
                Style::default()
                    .fg(colors.accent())
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                format!("{} уровень", self.progress.current_level.as_str()),
                Style::default().fg(colors.muted()),
            )),
        ])
        .render(identity_inner, buf);

        // Counters
        let counters = Block::bordered().border_style(Style::default().fg(colors.border()));
        let counters_inner = counters.inner(layout[1]);
        counters.render(layout[1], buf);
        let counter_line = |value: String, label: &'static str| {
            Line::from(vec![
                Span::styled(
                    format!("{value:>4}  "),
                    Style::default()
                        .fg(colors.accent())
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(label, Style::default().fg(colors.fg())),
            ])
        };
        Paragraph::new(vec![
            counter_line(self.progress.words_learned.to_string(), "Слов изучено"),
            counter_line(self.progress.tests_completed.to_string(), "Тестов пройдено"),
            counter_line(self.progress.streak_days.to_string(), "Дней подряд"),
        ])
        .render(counters_inner, buf);

        // Achievements
        let achievements = Block::bordered()
            .title(" Достижения ")
            .border_style(Style::default().fg(colors.border()));
        let achievements_inner = achievements.inner(layout[2]);
        achievements.render(layout[2], buf);

        let mut lines: Vec<Line> = Vec::new();
        for achievement in data::ACHIEVEMENTS {
            lines.push(Line::from(vec![
                Span::raw(format!(" {} ", achievement.glyph)),
                Span::styled(
                    achievement.title,
                    Style::default().fg(colors.fg()).add_modifier(Modifier::BOLD),
                ),
            ]));
            lines.push(Line::from(Span::styled(
                format!("    {}", achievement.detail),
                Style::default().fg(colors.muted()),
            )));
        }
        Paragraph::new(lines).render(achievements_inner, buf);
    }
}
