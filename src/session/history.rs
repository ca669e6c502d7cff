use serde::{Deserialize, Serialize};

/// Oldest entries are evicted once the log is full.
pub const HISTORY_LIMIT: usize = 10;

/// Most-recent-first log of terms entered via search or translation.
///
/// Recording a term that is already present anywhere in the log is a no-op:
/// the entry keeps its position and is NOT promoted to the front.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct History {
    entries: Vec<String>,
}

impl History {
    pub fn new(entries: Vec<String>) -> Self {
        let mut history = Self { entries };
        history.entries.truncate(HISTORY_LIMIT);
        history
    }

    /// Prepend a term unless the log already contains it.
    pub fn record(&mut self, term: &str) {
        if self.entries.iter().any(|entry| entry == term) {
            return;
        }
        self.entries.insert(0, term.to_string());
        self.entries.truncate(HISTORY_LIMIT);
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.entries.get(index).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn log(entries: &[&str]) -> History {
        History::new(entries.iter().map(|s| s.to_string()).collect())
    }

    #[test]
    fn record_prepends_new_terms() {
        let mut history = log(&["b", "c"]);
        history.record("a");
        assert_eq!(history.entries(), ["a", "b", "c"]);
    }

    #[test]
    fn duplicate_is_a_no_op_not_a_promotion() {
        let mut history = log(&["a", "b", "c"]);
        history.record("c");
        // "c" keeps its position at the back
        assert_eq!(history.entries(), ["a", "b", "c"]);
    }

    #[test]
    fn record_is_idempotent_beyond_the_first() {
        let mut once = log(&["x0"]);
        once.record("x");
        let mut twice = once.clone();
        twice.record("x");
        assert_eq!(once, twice);
    }

    #[test]
    fn never_exceeds_the_limit() {
        let mut history = History::default();
        for i in 0..25 {
            history.record(&format!("term-{i}"));
            assert!(history.len() <= HISTORY_LIMIT);
        }
        assert_eq!(history.len(), HISTORY_LIMIT);
        // Newest first, oldest evicted
        assert_eq!(history.get(0), Some("term-24"));
        assert_eq!(history.get(9), Some("term-15"));
    }

    #[test]
    fn new_truncates_oversized_input() {
        let entries: Vec<String> = (0..15).map(|i| format!("t{i}")).collect();
        let history = History::new(entries);
        assert_eq!(history.len(), HISTORY_LIMIT);
    }
}
