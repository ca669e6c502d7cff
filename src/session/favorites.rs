use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// User-curated set of word ids marked for quick access.
///
/// Set semantics: membership is O(1) and toggling twice is the identity.
/// The set lives only for the session; there is no persistence behind it.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Favorites {
    ids: HashSet<u32>,
}

impl Favorites {
    pub fn new(ids: impl IntoIterator<Item = u32>) -> Self {
        Self {
            ids: ids.into_iter().collect(),
        }
    }

    /// Remove the id if present, insert it otherwise.
    pub fn toggle(&mut self, id: u32) {
        if !self.ids.remove(&id) {
            self.ids.insert(id);
        }
    }

    pub fn contains(&self, id: u32) -> bool {
        self.ids.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_inserts_then_removes() {
        let mut favorites = Favorites::default();
        favorites.toggle(7);
        assert!(favorites.contains(7));
        favorites.toggle(7);
        assert!(!favorites.contains(7));
    }

    #[test]
    fn double_toggle_is_identity() {
        let initial = Favorites::new([1, 3]);
        for id in [1, 3, 5, 12] {
            let mut favorites = initial.clone();
            favorites.toggle(id);
            favorites.toggle(id);
            assert_eq!(favorites, initial, "toggle;toggle changed the set for id {id}");
        }
    }

    #[test]
    fn default_session_set() {
        let favorites = Favorites::new([1, 3]);
        assert_eq!(favorites.len(), 2);
        assert!(favorites.contains(1));
        assert!(favorites.contains(3));
        assert!(!favorites.contains(2));
    }
}
