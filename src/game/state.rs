//! Game state: the answer, submitted rows, the row being typed, and the keyboard

use super::status::{GameStatus, MAX_TRIES};
use crate::core::{Feedback, KeyboardState, WORD_LEN, Word};
use crate::wordlists::WordLists;
use rand::Rng;
use thiserror::Error;

/// Reasons a submission is refused; none of them change the game
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GuessError {
    #[error("Not Enough Letters")]
    TooShort(usize),
    #[error("Not in word list")]
    NotInWordList(String),
    #[error("The game is over")]
    GameOver,
}

/// A submitted guess and its feedback
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessRecord {
    pub word: Word,
    pub feedback: Feedback,
}

/// Result of an accepted submission
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Submission {
    pub feedback: Feedback,
    pub status: GameStatus,
}

/// One game of Wordle
#[derive(Debug, Clone)]
pub struct Game {
    answer: Word,
    guesses: Vec<GuessRecord>,
    current: String,
    status: GameStatus,
    keyboard: KeyboardState,
}

impl Game {
    #[must_use]
    pub fn new(answer: Word) -> Self {
        Self {
            answer,
            guesses: Vec::with_capacity(MAX_TRIES),
            current: String::with_capacity(WORD_LEN),
            status: GameStatus::InProgress,
            keyboard: KeyboardState::new(),
        }
    }

    /// Start a game with an answer drawn from `lists`
    pub fn start<R: Rng + ?Sized>(lists: &WordLists, rng: &mut R) -> Self {
        let answer = lists.random_answer(rng).clone();
        log::info!("New game started");
        log::debug!("Answer is {answer}");
        Self::new(answer)
    }

    /// Append a letter to the current guess
    ///
    /// Returns false (and changes nothing) if the game is over, the character
    /// is not an ASCII letter, or the guess is already full.
    pub fn enter_letter(&mut self, letter: char) -> bool {
        if self.status.is_over()
            || !letter.is_ascii_alphabetic()
            || self.current.len() >= WORD_LEN
        {
            return false;
        }

        let letter = letter.to_ascii_uppercase();
        self.current.push(letter);
        log::debug!("{letter} was entered");
        true
    }

    /// Remove the last letter of the current guess
    pub fn remove_letter(&mut self) -> Option<char> {
        if self.status.is_over() {
            return None;
        }

        let removed = self.current.pop();
        if let Some(letter) = removed {
            log::debug!("{letter} was deleted");
        }
        removed
    }

    /// Submit the current guess
    ///
    /// # Errors
    ///
    /// - `GuessError::GameOver` if the game already ended
    /// - `GuessError::TooShort` if fewer than five letters were entered
    /// - `GuessError::NotInWordList` if the word is not an accepted guess
    pub fn submit(&mut self, lists: &WordLists) -> Result<Submission, GuessError> {
        if self.status.is_over() {
            return Err(GuessError::GameOver);
        }
        log::debug!("Checking word: {}", self.current);

        if self.current.len() < WORD_LEN {
            return Err(GuessError::TooShort(self.current.len()));
        }

        let word = Word::new(self.current.as_str())
            .ok()
            .filter(|word| lists.is_accepted(word))
            .ok_or_else(|| GuessError::NotInWordList(self.current.clone()))?;

        let feedback = Feedback::evaluate(&word, &self.answer);
        self.keyboard.record(&word, &feedback);

        let solved = word == self.answer;
        self.guesses.push(GuessRecord { word, feedback });
        self.current.clear();

        if solved {
            self.status = GameStatus::Won(self.guesses.len());
        } else if self.guesses.len() >= MAX_TRIES {
            self.status = GameStatus::Lost;
        }

        if self.status.is_over() {
            log::info!(
                "Game over after {} guesses: {:?}",
                self.guesses.len(),
                self.status
            );
        }

        Ok(Submission {
            feedback,
            status: self.status,
        })
    }

    #[must_use]
    pub const fn answer(&self) -> &Word {
        &self.answer
    }

    #[must_use]
    pub fn guesses(&self) -> &[GuessRecord] {
        &self.guesses
    }

    /// Letters typed into the current row
    #[must_use]
    pub fn current_guess(&self) -> &str {
        &self.current
    }

    /// Index of the row being typed (equals the number of submitted guesses)
    #[must_use]
    pub fn row(&self) -> usize {
        self.guesses.len()
    }

    #[must_use]
    pub fn attempts_left(&self) -> usize {
        MAX_TRIES - self.guesses.len()
    }

    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    #[must_use]
    pub const fn keyboard(&self) -> &KeyboardState {
        &self.keyboard
    }
}
