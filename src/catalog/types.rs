use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Level {
    Beginner,
    Intermediate,
}

impl Level {
    pub fn as_str(self) -> &'static str {
        match self {
            Level::Beginner => "Beginner",
            Level::Intermediate => "Intermediate",
        }
    }
}

/// A tag partitioning the catalog for filtered browsing. The `all` sentinel
/// category matches every word.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Category {
    pub id: &'static str,
    pub name: &'static str,
    pub glyph: &'static str,
    /// Hex token, parsed by the theme layer.
    pub color: &'static str,
}

/// One dictionary entry. Immutable for the session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordEntry {
    pub id: u32,
    pub word: String,
    pub translation: String,
    /// Foreign key into the category table.
    pub category: String,
    pub level: Level,
    pub example: String,
}

/// A quiz offered on the Tests view. `score` is meaningful only when
/// `completed` is set.
#[derive(Clone, Copy, Debug)]
pub struct TestDescriptor {
    pub id: u32,
    pub title: &'static str,
    pub questions: u32,
    pub level: Level,
    pub completed: bool,
    pub score: u8,
}

#[derive(Clone, Copy, Debug)]
pub struct Achievement {
    pub glyph: &'static str,
    pub title: &'static str,
    pub detail: &'static str,
}

/// Display snapshot for the Profile and Tests views. Read-only; nothing in
/// the session mutates it.
#[derive(Clone, Copy, Debug)]
pub struct UserProgress {
    pub words_learned: u32,
    pub tests_completed: u32,
    pub tests_total: u32,
    pub current_level: Level,
    pub streak_days: u32,
}
