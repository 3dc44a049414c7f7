//! Word lists for the game
//!
//! Default lists are embedded in the binary; either can be replaced with a file at runtime.

mod embedded;
pub mod loader;

pub use embedded::{ALLOWED, ALLOWED_COUNT, ANSWERS, ANSWERS_COUNT};
pub use loader::{Source, WordListError, WordLists};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn answers_count_matches_const() {
        assert_eq!(ANSWERS.len(), ANSWERS_COUNT);
    }

    #[test]
    fn allowed_count_matches_const() {
        assert_eq!(ALLOWED.len(), ALLOWED_COUNT);
    }

    #[test]
    fn embedded_words_are_five_lowercase_letters() {
        for &word in ANSWERS.iter().chain(ALLOWED) {
            assert_eq!(word.len(), 5, "Word '{word}' is not 5 letters");
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn answer_list_is_not_empty() {
        assert!(ANSWERS_COUNT > 0);
    }

    #[test]
    fn embedded_lists_have_no_duplicates() {
        let mut seen = rustc_hash::FxHashSet::default();
        for &word in ANSWERS.iter().chain(ALLOWED) {
            assert!(seen.insert(word), "Word '{word}' is listed twice");
        }
    }

    #[test]
    fn embedded_lists_are_full_size() {
        assert!(ANSWERS_COUNT >= 2000, "only {ANSWERS_COUNT} answers");
        assert!(
            ANSWERS_COUNT + ALLOWED_COUNT >= 5000,
            "only {} accepted guesses",
            ANSWERS_COUNT + ALLOWED_COUNT
        );
    }
}
