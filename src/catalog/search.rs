use crate::catalog::data::CATEGORY_ALL;
use crate::catalog::types::WordEntry;

fn contains_ci(haystack: &str, needle_lower: &str) -> bool {
    haystack.to_lowercase().contains(needle_lower)
}

/// Filter the catalog by free-text query and category chip.
///
/// A word matches when the query is empty or appears case-insensitively in
/// either the word or its translation, and the category matches (the `all`
/// sentinel matches everything). Source order is preserved; an empty result
/// is valid, not an error.
pub fn filter<'a>(
    catalog: &'a [WordEntry],
    query: &str,
    category_id: &str,
) -> Vec<&'a WordEntry> {
    // Unicode lowercase, not ASCII: queries are usually Cyrillic.
    let query_lower = query.to_lowercase();
    catalog
        .iter()
        .filter(|word| {
            let matches_query = query_lower.is_empty()
                || contains_ci(&word.word, &query_lower)
                || contains_ci(&word.translation, &query_lower);
            let matches_category =
                category_id == CATEGORY_ALL || word.category == category_id;
            matches_query && matches_category
        })
        .collect()
}

/// Word count shown on a category chip.
pub fn category_count(catalog: &[WordEntry], category_id: &str) -> usize {
    catalog
        .iter()
        .filter(|word| category_id == CATEGORY_ALL || word.category == category_id)
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::data;

    #[test]
    fn empty_query_all_category_returns_full_catalog() {
        let catalog = data::load_words();
        let result = filter(&catalog, "", CATEGORY_ALL);
        assert_eq!(result.len(), catalog.len());

        // Stable filter: source order preserved
        let ids: Vec<u32> = result.iter().map(|w| w.id).collect();
        let expected: Vec<u32> = catalog.iter().map(|w| w.id).collect();
        assert_eq!(ids, expected);
    }

    #[test]
    fn query_matches_word_case_insensitively() {
        let catalog = data::load_words();
        let result = filter(&catalog, "прив", CATEGORY_ALL);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].word, "Привет");

        // Uppercase query finds the same entry
        let result = filter(&catalog, "ПРИВ", CATEGORY_ALL);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].word, "Привет");
    }

    #[test]
    fn query_matches_translation_too() {
        let catalog = data::load_words();
        let result = filter(&catalog, "bread", CATEGORY_ALL);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].word, "Хлеб");
    }

    #[test]
    fn category_filter_returns_subset_of_all() {
        let catalog = data::load_words();
        let narrowed = filter(&catalog, "", "politeness");
        let everything = filter(&catalog, "", CATEGORY_ALL);

        assert!(!narrowed.is_empty());
        for word in &narrowed {
            assert_eq!(word.category, "politeness");
            assert!(everything.iter().any(|w| w.id == word.id));
        }
    }

    #[test]
    fn query_and_category_combine() {
        let catalog = data::load_words();
        // "о" appears in words across categories; the chip narrows it down
        let result = filter(&catalog, "о", "numbers");
        for word in &result {
            assert_eq!(word.category, "numbers");
        }
        assert!(result.iter().any(|w| w.word == "Один"));
    }

    #[test]
    fn no_match_returns_empty_not_error() {
        let catalog = data::load_words();
        assert!(filter(&catalog, "xyzzy", CATEGORY_ALL).is_empty());
    }

    #[test]
    fn category_counts_match_chip_badges() {
        let catalog = data::load_words();
        assert_eq!(category_count(&catalog, CATEGORY_ALL), 12);
        assert_eq!(category_count(&catalog, "greetings"), 2);
        assert_eq!(category_count(&catalog, "politeness"), 3);
        assert_eq!(category_count(&catalog, "travel"), 1);
    }
}
