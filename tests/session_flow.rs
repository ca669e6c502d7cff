//! End-to-end reducer scenarios: a whole user session driven purely through
//! events, no terminal involved.

use ruslingo::catalog::{data, search};
use ruslingo::session::state::{ActiveView, SessionEvent, SessionState};
use ruslingo::translate::EchoTranslator;

fn apply(state: &mut SessionState, event: SessionEvent) {
    state.apply(event, &EchoTranslator);
}

#[test]
fn favorites_toggle_then_browse() {
    let catalog = data::load_words();
    let mut state = SessionState::default();

    // Default favorites {1, 3}: drop 1, add 5
    apply(&mut state, SessionEvent::FavoriteToggled(1));
    apply(&mut state, SessionEvent::FavoriteToggled(5));

    assert!(!state.favorites.contains(1));
    assert!(state.favorites.contains(3));
    assert!(state.favorites.contains(5));

    // The favorites view lists entries in catalog order
    let favorites: Vec<&str> = catalog
        .iter()
        .filter(|word| state.favorites.contains(word.id))
        .map(|word| word.word.as_str())
        .collect();
    assert_eq!(favorites, ["Добрый день", "Извините"]);
}

#[test]
fn translator_submit_feeds_history_without_promotion() {
    let mut state = SessionState::default();
    assert_eq!(state.history.entries(), ["Привет", "Спасибо", "Добрый день"]);

    apply(&mut state, SessionEvent::SourceChanged("Hello".to_string()));
    apply(&mut state, SessionEvent::TranslateSubmitted);

    assert_eq!(state.translation.result.as_deref(), Some("Привет"));
    assert_eq!(
        state.history.entries(),
        ["Hello", "Привет", "Спасибо", "Добрый день"]
    );

    // Submitting a term already in the log leaves the log untouched: no
    // duplicate, no move-to-front
    apply(&mut state, SessionEvent::SourceChanged("Привет".to_string()));
    apply(&mut state, SessionEvent::TranslateSubmitted);

    assert_eq!(state.translation.result.as_deref(), Some("Hello"));
    assert_eq!(
        state.history.entries(),
        ["Hello", "Привет", "Спасибо", "Добрый день"]
    );
}

#[test]
fn search_session_never_overflows_history() {
    let mut state = SessionState::default();
    for i in 0..20 {
        apply(&mut state, SessionEvent::QueryChanged(format!("запрос {i}")));
    }
    assert_eq!(state.history.len(), 10);
    assert_eq!(state.history.get(0), Some("запрос 19"));
}

#[test]
fn filtered_browsing_follows_chips_and_query() {
    let catalog = data::load_words();
    let mut state = SessionState::default();

    apply(&mut state, SessionEvent::CategorySelected("verbs".to_string()));
    apply(&mut state, SessionEvent::QueryChanged("гово".to_string()));

    let visible = search::filter(&catalog, &state.search_query, &state.selected_category);
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].word, "Говорить");

    // The keystroke also landed in history
    assert_eq!(state.history.get(0), Some("гово"));
}

#[test]
fn recall_then_explicit_submit() {
    let mut state = SessionState::default();
    apply(&mut state, SessionEvent::ViewSelected(ActiveView::Translator));

    apply(
        &mut state,
        SessionEvent::HistoryRecalled("Спасибо".to_string()),
    );
    assert_eq!(state.translation.source, "Спасибо");
    assert!(!state.translation.is_resolved());

    apply(&mut state, SessionEvent::TranslateSubmitted);
    assert_eq!(state.translation.result.as_deref(), Some("Hello"));
}

#[test]
fn session_state_round_trips_through_json() {
    let mut state = SessionState::default();
    apply(&mut state, SessionEvent::FavoriteToggled(7));
    apply(&mut state, SessionEvent::QueryChanged("вода".to_string()));
    apply(&mut state, SessionEvent::ViewSelected(ActiveView::Favorites));

    let json = serde_json::to_string(&state).unwrap();
    let back: SessionState = serde_json::from_str(&json).unwrap();
    assert_eq!(back, state);
}
