use crate::catalog::types::{
    Achievement, Category, Level, TestDescriptor, UserProgress, WordEntry,
};

const WORDS_JSON: &str = include_str!("../../assets/words.json");

/// Sentinel category id that matches every word.
pub const CATEGORY_ALL: &str = "all";

pub const CATEGORIES: &[Category] = &[
    Category { id: CATEGORY_ALL, name: "Все", glyph: "▦", color: "#89b4fa" },
    Category { id: "greetings", name: "Приветствия", glyph: "☺", color: "#22d3ee" },
    Category { id: "politeness", name: "Вежливость", glyph: "♥", color: "#fb7185" },
    Category { id: "food", name: "Еда", glyph: "♨", color: "#fb923c" },
    Category { id: "travel", name: "Путешествия", glyph: "✈", color: "#a78bfa" },
    Category { id: "numbers", name: "Числа", glyph: "#", color: "#34d399" },
    Category { id: "verbs", name: "Глаголы", glyph: "»", color: "#facc15" },
];

pub const TESTS: &[TestDescriptor] = &[
    TestDescriptor {
        id: 1,
        title: "Приветствия",
        questions: 10,
        level: Level::Beginner,
        completed: true,
        score: 90,
    },
    TestDescriptor {
        id: 2,
        title: "Еда и напитки",
        questions: 15,
        level: Level::Beginner,
        completed: true,
        score: 85,
    },
    TestDescriptor {
        id: 3,
        title: "Числа 1-100",
        questions: 20,
        level: Level::Intermediate,
        completed: false,
        score: 0,
    },
    TestDescriptor {
        id: 4,
        title: "Глаголы движения",
        questions: 25,
        level: Level::Intermediate,
        completed: false,
        score: 0,
    },
];

pub const ACHIEVEMENTS: &[Achievement] = &[
    Achievement {
        glyph: "🏆",
        title: "Первый шаг",
        detail: "Выучили первые 10 слов",
    },
    Achievement {
        glyph: "📚",
        title: "Книжный червь",
        detail: "100+ слов в словаре",
    },
    Achievement {
        glyph: "🔥",
        title: "Неделя успеха",
        detail: "7 дней обучения подряд",
    },
];

pub const PROGRESS: UserProgress = UserProgress {
    words_learned: 127,
    tests_completed: 12,
    tests_total: 20,
    current_level: Level::Intermediate,
    streak_days: 7,
};

pub const PROFILE_NAME: &str = "Иван Петров";

/// Load the bundled word catalog. The data ships inside the binary, so a
/// parse failure means a broken build rather than a user error.
pub fn load_words() -> Vec<WordEntry> {
    serde_json::from_str(WORDS_JSON).unwrap_or_default()
}

/// Display name for a category id; falls back to the raw id for an unknown
/// key (data-entry error, not a user-reachable state).
pub fn category_name(id: &str) -> &str {
    CATEGORIES
        .iter()
        .find(|c| c.id == id)
        .map(|c| c.name)
        .unwrap_or(id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn catalog_loads_all_entries() {
        let words = load_words();
        assert_eq!(words.len(), 12);

        let ids: HashSet<u32> = words.iter().map(|w| w.id).collect();
        assert_eq!(ids.len(), words.len(), "word ids must be unique");
    }

    #[test]
    fn every_word_references_a_known_category() {
        let words = load_words();
        for word in &words {
            assert!(
                CATEGORIES.iter().any(|c| c.id == word.category),
                "word {} references unknown category {}",
                word.id,
                word.category
            );
        }
    }

    #[test]
    fn all_sentinel_is_first_category() {
        assert_eq!(CATEGORIES[0].id, CATEGORY_ALL);
        assert_eq!(CATEGORIES.len(), 7);
    }

    #[test]
    fn test_scores_defined_iff_completed() {
        for test in TESTS {
            if test.completed {
                assert!(test.score > 0, "completed test {} has no score", test.id);
            } else {
                assert_eq!(test.score, 0, "pending test {} carries a score", test.id);
            }
        }
    }

    #[test]
    fn category_name_falls_back_to_id() {
        assert_eq!(category_name("greetings"), "Приветствия");
        assert_eq!(category_name("no-such-category"), "no-such-category");
    }
}
