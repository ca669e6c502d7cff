use serde::{Deserialize, Serialize};

use crate::catalog::data::CATEGORY_ALL;
use crate::session::favorites::Favorites;
use crate::session::history::History;
use crate::translate::TranslationProvider;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActiveView {
    Dictionary,
    Translator,
    Tests,
    Favorites,
    Profile,
}

impl ActiveView {
    pub const ALL: [ActiveView; 5] = [
        ActiveView::Dictionary,
        ActiveView::Translator,
        ActiveView::Tests,
        ActiveView::Favorites,
        ActiveView::Profile,
    ];

    pub fn next(self) -> Self {
        match self {
            ActiveView::Dictionary => ActiveView::Translator,
            ActiveView::Translator => ActiveView::Tests,
            ActiveView::Tests => ActiveView::Favorites,
            ActiveView::Favorites => ActiveView::Profile,
            ActiveView::Profile => ActiveView::Dictionary,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            ActiveView::Dictionary => ActiveView::Profile,
            ActiveView::Translator => ActiveView::Dictionary,
            ActiveView::Tests => ActiveView::Translator,
            ActiveView::Favorites => ActiveView::Tests,
            ActiveView::Profile => ActiveView::Favorites,
        }
    }

    /// Tab label.
    pub fn title(self) -> &'static str {
        match self {
            ActiveView::Dictionary => "Словарь",
            ActiveView::Translator => "Перевод",
            ActiveView::Tests => "Тесты",
            ActiveView::Favorites => "Избранное",
            ActiveView::Profile => "Профиль",
        }
    }

    /// Parse the CLI spelling of a tab name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "dictionary" => Some(ActiveView::Dictionary),
            "translator" => Some(ActiveView::Translator),
            "tests" => Some(ActiveView::Tests),
            "favorites" => Some(ActiveView::Favorites),
            "profile" => Some(ActiveView::Profile),
            _ => None,
        }
    }
}

/// The translator's two fields. `result == None` is the Idle state; a
/// populated result is the Resolved state. Nothing resets the buffer except
/// new input.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationBuffer {
    pub source: String,
    pub result: Option<String>,
}

impl TranslationBuffer {
    pub fn is_resolved(&self) -> bool {
        self.result.is_some()
    }
}

/// One discrete user input, as seen by the state model. The rendering layer
/// translates key presses into these; nothing else mutates the session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SessionEvent {
    ViewSelected(ActiveView),
    /// Full text of the search box after an edit.
    QueryChanged(String),
    CategorySelected(String),
    FavoriteToggled(u32),
    /// Full text of the translator source field after an edit.
    SourceChanged(String),
    TranslateSubmitted,
    /// A history entry recalled into the source field. Never auto-submits.
    HistoryRecalled(String),
}

/// The whole interactive session in one serializable struct, mutated only
/// through [`SessionState::apply`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionState {
    pub active_view: ActiveView,
    pub search_query: String,
    pub selected_category: String,
    pub favorites: Favorites,
    pub history: History,
    pub translation: TranslationBuffer,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            active_view: ActiveView::Dictionary,
            search_query: String::new(),
            selected_category: CATEGORY_ALL.to_string(),
            favorites: Favorites::new([1, 3]),
            history: History::new(vec![
                "Привет".to_string(),
                "Спасибо".to_string(),
                "Добрый день".to_string(),
            ]),
            translation: TranslationBuffer::default(),
        }
    }
}

impl SessionState {
    /// Apply one user event. Transitions are synchronous and infallible;
    /// invalid input (an empty translator submit) degrades to a no-op.
    pub fn apply(&mut self, event: SessionEvent, translator: &dyn TranslationProvider) {
        match event {
            SessionEvent::ViewSelected(view) => {
                self.active_view = view;
            }
            SessionEvent::QueryChanged(query) => {
                // The search box feeds the same log as the translator: every
                // non-empty query revision is recorded as typed.
                if !query.is_empty() {
                    self.history.record(&query);
                }
                self.search_query = query;
            }
            SessionEvent::CategorySelected(id) => {
                self.selected_category = id;
            }
            SessionEvent::FavoriteToggled(id) => {
                self.favorites.toggle(id);
            }
            SessionEvent::SourceChanged(text) => {
                self.translation.source = text;
            }
            SessionEvent::TranslateSubmitted => {
                if self.translation.source.is_empty() {
                    return;
                }
                self.translation.result =
                    Some(translator.translate(&self.translation.source));
                let term = self.translation.source.clone();
                self.history.record(&term);
            }
            SessionEvent::HistoryRecalled(term) => {
                // The result keeps showing the previous translation until an
                // explicit submit.
                self.translation.source = term;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::translate::EchoTranslator;

    fn apply(state: &mut SessionState, event: SessionEvent) {
        state.apply(event, &EchoTranslator);
    }

    #[test]
    fn initial_state() {
        let state = SessionState::default();
        assert_eq!(state.active_view, ActiveView::Dictionary);
        assert_eq!(state.selected_category, CATEGORY_ALL);
        assert!(state.search_query.is_empty());
        assert_eq!(state.favorites.len(), 2);
        assert_eq!(state.history.entries(), ["Привет", "Спасибо", "Добрый день"]);
        assert!(!state.translation.is_resolved());
    }

    #[test]
    fn view_changes_only_on_explicit_selection() {
        let mut state = SessionState::default();
        apply(&mut state, SessionEvent::QueryChanged("вода".to_string()));
        apply(&mut state, SessionEvent::FavoriteToggled(6));
        assert_eq!(state.active_view, ActiveView::Dictionary);

        apply(&mut state, SessionEvent::ViewSelected(ActiveView::Profile));
        assert_eq!(state.active_view, ActiveView::Profile);
    }

    #[test]
    fn query_keystrokes_feed_history() {
        let mut state = SessionState::default();
        apply(&mut state, SessionEvent::QueryChanged("х".to_string()));
        apply(&mut state, SessionEvent::QueryChanged("хл".to_string()));
        assert_eq!(state.search_query, "хл");
        assert_eq!(state.history.get(0), Some("хл"));
        assert_eq!(state.history.get(1), Some("х"));
    }

    #[test]
    fn clearing_the_query_records_nothing() {
        let mut state = SessionState::default();
        let before = state.history.clone();
        apply(&mut state, SessionEvent::QueryChanged(String::new()));
        assert_eq!(state.history, before);
    }

    #[test]
    fn translate_swaps_the_fixed_pair() {
        let mut state = SessionState::default();
        apply(&mut state, SessionEvent::SourceChanged("Hello".to_string()));
        apply(&mut state, SessionEvent::TranslateSubmitted);
        assert_eq!(state.translation.result.as_deref(), Some("Привет"));

        apply(&mut state, SessionEvent::SourceChanged("воду".to_string()));
        apply(&mut state, SessionEvent::TranslateSubmitted);
        assert_eq!(state.translation.result.as_deref(), Some("Hello"));
    }

    #[test]
    fn empty_submit_keeps_idle_state() {
        let mut state = SessionState::default();
        apply(&mut state, SessionEvent::TranslateSubmitted);
        assert!(!state.translation.is_resolved());
        assert_eq!(state.history.len(), 3);
    }

    #[test]
    fn submit_records_source_into_history() {
        let mut state = SessionState::default();
        apply(&mut state, SessionEvent::SourceChanged("Hello".to_string()));
        apply(&mut state, SessionEvent::TranslateSubmitted);
        assert_eq!(state.history.get(0), Some("Hello"));
    }

    #[test]
    fn recall_sets_source_without_resubmitting() {
        let mut state = SessionState::default();
        apply(&mut state, SessionEvent::SourceChanged("Hello".to_string()));
        apply(&mut state, SessionEvent::TranslateSubmitted);
        let resolved = state.translation.result.clone();

        apply(
            &mut state,
            SessionEvent::HistoryRecalled("Спасибо".to_string()),
        );
        assert_eq!(state.translation.source, "Спасибо");
        // Result untouched until the next explicit submit
        assert_eq!(state.translation.result, resolved);
    }
}
