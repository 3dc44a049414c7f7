//! Per-letter guess classification
//!
//! A guess is scored position by position against the answer:
//! - Correct: right letter in the right position
//! - Present: letter occurs elsewhere among the still-unmatched answer letters
//! - Absent: no unmatched occurrence remains

use super::word::{WORD_LEN, Word};
use rustc_hash::FxHashMap;

/// Verdict for a single guess letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Classification {
    /// Letter not in the answer (or all occurrences already matched)
    Absent,
    /// Letter in the answer at a different position
    Present,
    /// Letter in the correct position
    Correct,
}

impl Classification {
    /// Single-character code used by the line-mode output
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Correct => 'G',
            Self::Present => 'Y',
            Self::Absent => '-',
        }
    }

    /// Emoji square as used in shared Wordle results
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }
}

/// Classifications for every position of one guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback([Classification; WORD_LEN]);

impl Feedback {
    /// All positions correct
    pub const PERFECT: Self = Self([Classification::Correct; WORD_LEN]);

    /// Classify `guess` against `answer`
    ///
    /// Duplicate letters are handled the way Wordle does it: exact matches
    /// claim their letters first, then the remaining positions are marked
    /// Present left to right while unmatched copies of that letter remain.
    ///
    /// # Algorithm
    /// 1. Count every letter of the answer
    /// 2. First pass: mark exact matches Correct and consume their counts
    /// 3. Second pass: mark Present while the letter's count is positive, else Absent
    ///
    /// # Examples
    /// ```
    /// use wordle_tui::core::{Classification::*, Feedback, Word};
    ///
    /// let guess = Word::new("trace").unwrap();
    /// let answer = Word::new("crane").unwrap();
    /// let feedback = Feedback::evaluate(&guess, &answer);
    ///
    /// assert_eq!(
    ///     feedback.classifications(),
    ///     &[Absent, Correct, Correct, Present, Correct]
    /// );
    /// ```
    #[must_use]
    pub fn evaluate(guess: &Word, answer: &Word) -> Self {
        let mut result = [Classification::Absent; WORD_LEN];
        let mut remaining: FxHashMap<u8, u8> = FxHashMap::default();
        for &ch in answer.chars() {
            *remaining.entry(ch).or_insert(0) += 1;
        }

        // First pass: exact position matches
        for (i, (&g, &a)) in guess.chars().iter().zip(answer.chars()).enumerate() {
            if g == a {
                result[i] = Classification::Correct;
                if let Some(count) = remaining.get_mut(&g) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        // Second pass: wrong position, but an unmatched copy is left
        for (i, &g) in guess.chars().iter().enumerate() {
            if result[i] == Classification::Correct {
                continue;
            }
            if let Some(count) = remaining.get_mut(&g)
                && *count > 0
            {
                result[i] = Classification::Present;
                *count -= 1;
            }
        }

        Self(result)
    }

    /// The classification of each position in order
    #[inline]
    #[must_use]
    pub const fn classifications(&self) -> &[Classification; WORD_LEN] {
        &self.0
    }

    /// Check if every position is Correct
    #[inline]
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        *self == Self::PERFECT
    }

    /// Count positions with the given classification
    #[must_use]
    pub fn count(&self, classification: Classification) -> usize {
        self.0.iter().filter(|&&c| c == classification).count()
    }

    /// Render as a row of emoji squares, e.g. "⬜🟩🟩🟨🟩"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|c| c.emoji()).collect()
    }
}

impl std::fmt::Display for Feedback {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for c in &self.0 {
            write!(f, "{}", c.symbol())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::Classification::{Absent, Correct, Present};
    use super::*;

    fn evaluate(guess: &str, answer: &str) -> Feedback {
        Feedback::evaluate(&Word::new(guess).unwrap(), &Word::new(answer).unwrap())
    }

    /// Occurrences of `letter` scored Correct or Present must not exceed its count in `answer`
    fn assert_no_overcount(guess: &str, answer: &str) {
        let feedback = evaluate(guess, answer);
        for letter in guess.bytes() {
            let credited = guess
                .bytes()
                .zip(feedback.classifications())
                .filter(|&(g, &c)| g == letter && c != Absent)
                .count();
            let available = answer.bytes().filter(|&a| a == letter).count();
            assert!(
                credited <= available,
                "{guess} vs {answer}: {credited} credits for '{}' but only {available} in answer",
                letter as char
            );
        }
    }

    #[test]
    fn feedback_perfect_constant() {
        assert!(Feedback::PERFECT.is_perfect());
        assert_eq!(Feedback::PERFECT.count(Correct), 5);
        assert_eq!(Feedback::PERFECT.to_string(), "GGGGG");
    }

    #[test]
    fn guess_equal_to_answer_is_all_correct() {
        for word in ["crane", "slate", "speed", "aaaaa", "zzzzz"] {
            assert_eq!(evaluate(word, word), Feedback::PERFECT);
        }
    }

    #[test]
    fn disjoint_letters_are_all_absent() {
        let feedback = evaluate("abcde", "fghij");
        assert_eq!(feedback.classifications(), &[Absent; 5]);
        assert_eq!(feedback.to_string(), "-----");
    }

    #[test]
    fn trace_against_crane() {
        // R and A line up with CRANE; C is only elsewhere
        let feedback = evaluate("trace", "crane");
        assert_eq!(
            feedback.classifications(),
            &[Absent, Correct, Correct, Present, Correct]
        );
        assert_eq!(feedback.count(Correct), 3);
        assert_eq!(feedback.to_string(), "-GGYG");
    }

    #[test]
    fn speed_against_erase_duplicate_letters() {
        // ERASE has two E's, neither at positions 2 or 3, so both guessed E's are Present
        let feedback = evaluate("speed", "erase");
        assert_eq!(
            feedback.classifications(),
            &[Present, Absent, Present, Present, Absent]
        );
        assert_no_overcount("speed", "erase");
    }

    #[test]
    fn correct_match_claims_letter_before_present() {
        // Only one O is unmatched after the exact match at position 3
        let feedback = evaluate("robot", "floor");
        assert_eq!(
            feedback.classifications(),
            &[Present, Present, Absent, Correct, Absent]
        );

        // The exact match on the last E consumes the only E
        let feedback = evaluate("eerie", "crane");
        assert_eq!(
            feedback.classifications(),
            &[Absent, Absent, Present, Absent, Correct]
        );
    }

    #[test]
    fn repeated_guess_letter_single_in_answer() {
        let feedback = evaluate("aaaaa", "crane");
        assert_eq!(
            feedback.classifications(),
            &[Absent, Absent, Correct, Absent, Absent]
        );
        assert_no_overcount("aaaaa", "crane");
        assert_no_overcount("llama", "hello");
        assert_no_overcount("geese", "eerie");
    }

    #[test]
    fn emoji_rendering() {
        assert_eq!(evaluate("trace", "crane").to_emoji(), "⬜🟩🟩🟨🟩");
    }

    #[test]
    fn classification_ordering() {
        assert!(Correct > Present);
        assert!(Present > Absent);
    }
}
