//! Word list loading
//!
//! Builds the answer pool and the accepted-guess set from newline-delimited
//! files or from the embedded defaults.

use super::{ALLOWED, ANSWERS};
use crate::core::Word;
use rand::Rng;
use rustc_hash::FxHashSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Fatal problems with the word lists, reported at startup
#[derive(Debug, Error)]
pub enum WordListError {
    #[error("failed to read word list {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("answer list is empty")]
    EmptyAnswers,
}

/// Where a word list came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    Embedded,
    File(PathBuf),
}

impl std::fmt::Display for Source {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Embedded => write!(f, "built-in"),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Candidate answers plus every word accepted as a guess
#[derive(Debug, Clone)]
pub struct WordLists {
    answers: Vec<Word>,
    accepted: FxHashSet<Word>,
    answers_source: Source,
    allowed_source: Source,
}

impl WordLists {
    /// Build from answer and allowed-guess words; accepted = allowed ∪ answers
    ///
    /// # Errors
    ///
    /// Returns `WordListError::EmptyAnswers` if `answers` is empty.
    pub fn new(answers: Vec<Word>, allowed: Vec<Word>) -> Result<Self, WordListError> {
        if answers.is_empty() {
            return Err(WordListError::EmptyAnswers);
        }

        let mut accepted: FxHashSet<Word> = allowed.into_iter().collect();
        accepted.extend(answers.iter().cloned());

        Ok(Self {
            answers,
            accepted,
            answers_source: Source::Embedded,
            allowed_source: Source::Embedded,
        })
    }

    /// Lists compiled into the binary
    ///
    /// # Errors
    ///
    /// Returns an error only if the embedded answer list is empty.
    pub fn embedded() -> Result<Self, WordListError> {
        Self::new(words_from_slice(ANSWERS), words_from_slice(ALLOWED))
    }

    /// Load either list from a file, falling back to the embedded one
    ///
    /// # Errors
    ///
    /// Returns an error if a given file cannot be read or if no answers remain.
    pub fn load(answers: Option<&Path>, allowed: Option<&Path>) -> Result<Self, WordListError> {
        let (answer_words, answers_source) = match answers {
            Some(path) => (read_list(path)?, Source::File(path.to_path_buf())),
            None => (words_from_slice(ANSWERS), Source::Embedded),
        };
        let (allowed_words, allowed_source) = match allowed {
            Some(path) => (read_list(path)?, Source::File(path.to_path_buf())),
            None => (words_from_slice(ALLOWED), Source::Embedded),
        };

        let mut lists = Self::new(answer_words, allowed_words)?;
        lists.answers_source = answers_source;
        lists.allowed_source = allowed_source;

        log::info!(
            "Loaded {} answers ({}) and {} accepted guesses ({})",
            lists.answers.len(),
            lists.answers_source,
            lists.accepted.len(),
            lists.allowed_source
        );
        Ok(lists)
    }

    /// Whether `word` may be submitted as a guess
    #[must_use]
    pub fn is_accepted(&self, word: &Word) -> bool {
        self.accepted.contains(word)
    }

    /// Draw a uniformly random answer
    pub fn random_answer<R: Rng + ?Sized>(&self, rng: &mut R) -> &Word {
        &self.answers[rng.random_range(0..self.answers.len())]
    }

    #[must_use]
    pub fn answers(&self) -> &[Word] {
        &self.answers
    }

    #[must_use]
    pub fn accepted_count(&self) -> usize {
        self.accepted.len()
    }

    #[must_use]
    pub const fn answers_source(&self) -> &Source {
        &self.answers_source
    }

    #[must_use]
    pub const fn allowed_source(&self) -> &Source {
        &self.allowed_source
    }
}

fn read_list(path: &Path) -> Result<Vec<Word>, WordListError> {
    load_from_file(path).map_err(|source| WordListError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Load words from a newline-delimited file
///
/// Lines are trimmed and uppercased; blank lines are ignored and entries that
/// are not five ASCII letters are skipped with a warning.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Word>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let words = parse_words(&content);
    log::debug!("Read {} words from {}", words.len(), path.display());
    Ok(words)
}

fn parse_words(content: &str) -> Vec<Word> {
    let mut skipped = 0usize;
    let words = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter_map(|line| {
            Word::new(line)
                .inspect_err(|e| {
                    skipped += 1;
                    log::trace!("Skipping '{line}': {e}");
                })
                .ok()
        })
        .collect();

    if skipped > 0 {
        log::warn!("Skipped {skipped} invalid word list entries");
    }
    words
}

/// Convert embedded string slice to Word vector
///
/// # Examples
/// ```
/// use wordle_tui::wordlists::loader::words_from_slice;
/// use wordle_tui::wordlists::ANSWERS;
///
/// let words = words_from_slice(ANSWERS);
/// assert_eq!(words.len(), ANSWERS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn words(list: &[&str]) -> Vec<Word> {
        words_from_slice(list)
    }

    #[test]
    fn words_from_slice_uppercases_valid_words() {
        let words = words_from_slice(&["crane", "Slate", "IRATE"]);

        assert_eq!(words.len(), 3);
        assert_eq!(words[0].text(), "CRANE");
        assert_eq!(words[1].text(), "SLATE");
        assert_eq!(words[2].text(), "IRATE");
    }

    #[test]
    fn words_from_slice_skips_invalid() {
        let words = words_from_slice(&["crane", "toolong", "abc", "slate"]);
        assert_eq!(words.len(), 2);
        assert_eq!(words[1].text(), "SLATE");
    }

    #[test]
    fn parse_words_trims_and_skips_blank_lines() {
        let words = parse_words("crane\r\n\n  slate \nsh0rt\n\nirate");
        let texts: Vec<&str> = words.iter().map(Word::text).collect();
        assert_eq!(texts, ["CRANE", "SLATE", "IRATE"]);
    }

    #[test]
    fn accepted_includes_answers() {
        let lists = WordLists::new(words(&["crane"]), words(&["slate"])).unwrap();

        assert!(lists.is_accepted(&Word::new("crane").unwrap()));
        assert!(lists.is_accepted(&Word::new("slate").unwrap()));
        assert!(!lists.is_accepted(&Word::new("irate").unwrap()));
        assert_eq!(lists.accepted_count(), 2);
    }

    #[test]
    fn empty_answers_is_an_error() {
        let err = WordLists::new(Vec::new(), words(&["slate"])).unwrap_err();
        assert!(matches!(err, WordListError::EmptyAnswers));
    }

    #[test]
    fn missing_file_is_an_error() {
        let err = WordLists::load(Some(Path::new("/nonexistent/answers.txt")), None).unwrap_err();
        assert!(matches!(err, WordListError::Io { .. }));
        assert!(err.to_string().contains("/nonexistent/answers.txt"));
    }

    #[test]
    fn random_answer_is_from_answer_list() {
        let lists = WordLists::new(words(&["crane", "slate", "irate"]), Vec::new()).unwrap();
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..20 {
            let answer = lists.random_answer(&mut rng);
            assert!(lists.answers().contains(answer));
        }
    }

    #[test]
    fn embedded_lists_load() {
        let lists = WordLists::embedded().unwrap();
        assert_eq!(lists.answers().len(), ANSWERS.len());
        assert_eq!(lists.answers_source(), &Source::Embedded);
        assert!(lists.is_accepted(&Word::new("crane").unwrap()));
    }

    #[test]
    fn embedded_lists_accept_everyday_words() {
        let lists = WordLists::embedded().unwrap();
        let rejected: Vec<&str> = [
            "hello", "their", "words", "stare", "adieu", "ghost", "pizza", "lemon", "house",
            "plant", "music", "cards", "baked", "water", "world", "apple",
        ]
        .into_iter()
        .filter(|w| !lists.is_accepted(&Word::new(*w).unwrap()))
        .collect();

        assert!(rejected.is_empty(), "rejected: {rejected:?}");
    }
}
