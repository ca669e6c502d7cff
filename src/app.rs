use crate::catalog::data::{self, CATEGORIES};
use crate::catalog::search;
use crate::catalog::types::{TestDescriptor, WordEntry};
use crate::config::Config;
use crate::quiz::{QuizEngine, QuizError, StubQuizEngine};
use crate::session::state::{ActiveView, SessionEvent, SessionState};
use crate::translate::{EchoTranslator, TranslationProvider};
use crate::ui::theme::Theme;

/// Top-level application state: the session model plus everything the
/// terminal needs around it (catalog, providers, theme, list cursors).
///
/// All session mutations funnel through [`App::apply`] so the reducer stays
/// the single write path; the cursor fields here are presentation state
/// only.
pub struct App {
    pub session: SessionState,
    pub catalog: Vec<WordEntry>,
    pub config: Config,
    pub theme: &'static Theme,
    pub word_selected: usize,
    pub favorite_selected: usize,
    pub test_selected: usize,
    /// Position in the history log while cycling entries into the
    /// translator source field. None means the user is typing fresh input.
    pub recall_cursor: Option<usize>,
    pub status: Option<String>,
    pub should_quit: bool,
    translator: Box<dyn TranslationProvider>,
    quiz: Box<dyn QuizEngine>,
}

impl App {
    pub fn new() -> Self {
        let config = Config::load().unwrap_or_default();
        let loaded_theme = Theme::load(&config.theme).unwrap_or_default();
        let theme: &'static Theme = Box::leak(Box::new(loaded_theme));

        Self {
            session: SessionState::default(),
            catalog: data::load_words(),
            config,
            theme,
            word_selected: 0,
            favorite_selected: 0,
            test_selected: 0,
            recall_cursor: None,
            status: None,
            should_quit: false,
            translator: Box::new(EchoTranslator),
            quiz: Box::new(StubQuizEngine),
        }
    }

    pub fn set_theme(&mut self, name: &str) {
        if let Some(theme) = Theme::load(name) {
            self.theme = Box::leak(Box::new(theme));
            self.config.theme = name.to_string();
        }
    }

    fn apply(&mut self, event: SessionEvent) {
        self.session.apply(event, self.translator.as_ref());
        self.clamp_selections();
    }

    /// List contents shift under the cursors whenever the query, chip, or
    /// favorites change; keep every cursor on a real row.
    fn clamp_selections(&mut self) {
        let visible = self.visible_words().len();
        self.word_selected = self.word_selected.min(visible.saturating_sub(1));
        let favorites = self.favorite_words().len();
        self.favorite_selected = self.favorite_selected.min(favorites.saturating_sub(1));
    }

    /// The dictionary list: catalog narrowed by query and category chip.
    pub fn visible_words(&self) -> Vec<&WordEntry> {
        search::filter(
            &self.catalog,
            &self.session.search_query,
            &self.session.selected_category,
        )
    }

    /// Favorited entries in catalog order.
    pub fn favorite_words(&self) -> Vec<&WordEntry> {
        self.catalog
            .iter()
            .filter(|word| self.session.favorites.contains(word.id))
            .collect()
    }

    pub fn select_view(&mut self, view: ActiveView) {
        self.status = None;
        self.recall_cursor = None;
        self.apply(SessionEvent::ViewSelected(view));
    }

    pub fn next_view(&mut self) {
        self.select_view(self.session.active_view.next());
    }

    pub fn prev_view(&mut self) {
        self.select_view(self.session.active_view.prev());
    }

    pub fn search_push(&mut self, ch: char) {
        let mut query = self.session.search_query.clone();
        query.push(ch);
        self.apply(SessionEvent::QueryChanged(query));
    }

    pub fn search_pop(&mut self) {
        let mut query = self.session.search_query.clone();
        query.pop();
        self.apply(SessionEvent::QueryChanged(query));
    }

    pub fn clear_search(&mut self) {
        self.apply(SessionEvent::QueryChanged(String::new()));
    }

    pub fn category_next(&mut self) {
        self.cycle_category(1);
    }

    pub fn category_prev(&mut self) {
        self.cycle_category(-1);
    }

    fn cycle_category(&mut self, step: isize) {
        let current = CATEGORIES
            .iter()
            .position(|c| c.id == self.session.selected_category)
            .unwrap_or(0);
        let len = CATEGORIES.len() as isize;
        let next = (current as isize + step).rem_euclid(len) as usize;
        self.word_selected = 0;
        self.apply(SessionEvent::CategorySelected(CATEGORIES[next].id.to_string()));
    }

    pub fn word_next(&mut self) {
        let len = self.visible_words().len();
        if len > 0 {
            self.word_selected = (self.word_selected + 1).min(len - 1);
        }
    }

    pub fn word_prev(&mut self) {
        self.word_selected = self.word_selected.saturating_sub(1);
    }

    pub fn toggle_selected_word(&mut self) {
        let id = self.visible_words().get(self.word_selected).map(|w| w.id);
        if let Some(id) = id {
            self.apply(SessionEvent::FavoriteToggled(id));
        }
    }

    pub fn favorite_next(&mut self) {
        let len = self.favorite_words().len();
        if len > 0 {
            self.favorite_selected = (self.favorite_selected + 1).min(len - 1);
        }
    }

    pub fn favorite_prev(&mut self) {
        self.favorite_selected = self.favorite_selected.saturating_sub(1);
    }

    pub fn unfavorite_selected(&mut self) {
        let id = self.favorite_words().get(self.favorite_selected).map(|w| w.id);
        if let Some(id) = id {
            self.apply(SessionEvent::FavoriteToggled(id));
        }
    }

    pub fn source_push(&mut self, ch: char) {
        self.recall_cursor = None;
        let mut source = self.session.translation.source.clone();
        source.push(ch);
        self.apply(SessionEvent::SourceChanged(source));
    }

    pub fn source_pop(&mut self) {
        self.recall_cursor = None;
        let mut source = self.session.translation.source.clone();
        source.pop();
        self.apply(SessionEvent::SourceChanged(source));
    }

    pub fn clear_source(&mut self) {
        self.recall_cursor = None;
        self.apply(SessionEvent::SourceChanged(String::new()));
    }

    pub fn submit_translation(&mut self) {
        self.recall_cursor = None;
        self.apply(SessionEvent::TranslateSubmitted);
    }

    /// Shell-history style recall: Up walks toward older entries, filling
    /// the source field. Recall never submits.
    pub fn recall_older(&mut self) {
        if self.session.history.is_empty() {
            return;
        }
        let max = self.session.history.len() - 1;
        let next = match self.recall_cursor {
            None => 0,
            Some(i) => (i + 1).min(max),
        };
        self.recall_cursor = Some(next);
        let term = self.session.history.get(next).map(str::to_string);
        if let Some(term) = term {
            self.apply(SessionEvent::HistoryRecalled(term));
        }
    }

    /// Down walks back toward the newest entry; stepping past it returns to
    /// an empty input line.
    pub fn recall_newer(&mut self) {
        match self.recall_cursor {
            None => {}
            Some(0) => self.clear_source(),
            Some(i) => {
                self.recall_cursor = Some(i - 1);
                let term = self.session.history.get(i - 1).map(str::to_string);
                if let Some(term) = term {
                    self.apply(SessionEvent::HistoryRecalled(term));
                }
            }
        }
    }

    pub fn test_next(&mut self) {
        if !data::TESTS.is_empty() {
            self.test_selected = (self.test_selected + 1).min(data::TESTS.len() - 1);
        }
    }

    pub fn test_prev(&mut self) {
        self.test_selected = self.test_selected.saturating_sub(1);
    }

    pub fn selected_test(&self) -> &'static TestDescriptor {
        &data::TESTS[self.test_selected]
    }

    pub fn start_selected_test(&mut self) {
        match self.quiz.start(self.selected_test()) {
            Ok(()) => self.status = None,
            Err(QuizError::NotImplemented) => {
                self.status = Some("Тесты пока недоступны".to_string());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggling_the_selected_word_updates_favorites() {
        let mut app = App::new();
        // First visible word is "Привет" (id 1), favorited by default
        app.toggle_selected_word();
        assert!(!app.session.favorites.contains(1));
        app.toggle_selected_word();
        assert!(app.session.favorites.contains(1));
    }

    #[test]
    fn category_cycle_wraps_both_ways() {
        let mut app = App::new();
        app.category_prev();
        assert_eq!(app.session.selected_category, "verbs");
        app.category_next();
        assert_eq!(app.session.selected_category, "all");
        app.category_next();
        assert_eq!(app.session.selected_category, "greetings");
    }

    #[test]
    fn selection_clamps_when_the_list_shrinks() {
        let mut app = App::new();
        app.word_selected = 11;
        for ch in "вода".chars() {
            app.search_push(ch);
        }
        let visible = app.visible_words().len();
        assert_eq!(visible, 1);
        assert_eq!(app.word_selected, 0);
    }

    #[test]
    fn recall_walks_history_without_submitting() {
        let mut app = App::new();
        app.select_view(ActiveView::Translator);

        app.recall_older();
        assert_eq!(app.session.translation.source, "Привет");
        app.recall_older();
        assert_eq!(app.session.translation.source, "Спасибо");
        assert!(!app.session.translation.is_resolved());

        app.recall_newer();
        assert_eq!(app.session.translation.source, "Привет");
        app.recall_newer();
        assert_eq!(app.session.translation.source, "");
        assert!(app.recall_cursor.is_none());
    }

    #[test]
    fn starting_a_test_surfaces_the_stub() {
        let mut app = App::new();
        app.select_view(ActiveView::Tests);
        app.start_selected_test();
        assert!(app.status.is_some());
    }
}
