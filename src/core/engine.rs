//! Guessing state for one session
//!
//! The engine owns the secret word and the three character sets derived from
//! play. It is mutated only through [`GuessEngine::on_right_char`],
//! [`GuessEngine::on_wrong_char`] and [`GuessEngine::on_timeout`].

use crate::transcript::Transcript;
use rustc_hash::FxHashSet;
use std::io;
use thiserror::Error;

/// Placeholder shown for a letter not yet guessed
pub const BLANK: char = '_';

/// Error type for words that cannot be played
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("Word must not be empty")]
    Empty,
    #[error("Word must not contain whitespace")]
    ContainsWhitespace,
}

/// How a proposed character relates to the current state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// Proposed before, right or wrong
    AlreadyTried,
    /// New and part of the word
    Right,
    /// New and not part of the word
    Wrong,
}

/// Hangman guessing state
///
/// Invariants:
/// - `guessed_chars ⊆ word_chars`
/// - `guessed_chars ⊆ attempted_chars`
/// - the game is over iff no guesses remain or every word char is guessed
///
/// The life budget is the word's length in characters, so longer words
/// allow more mistakes.
#[derive(Debug, Clone)]
pub struct GuessEngine {
    word: String,
    letters: Vec<char>,
    word_chars: FxHashSet<char>,
    guessed_chars: FxHashSet<char>,
    attempted_chars: FxHashSet<char>,
    remaining_guesses: usize,
}

impl GuessEngine {
    /// Start a session for `word`
    ///
    /// The word is trimmed and lowercased.
    ///
    /// # Errors
    /// Returns `WordError` if the word is empty or contains inner whitespace.
    ///
    /// # Examples
    /// ```
    /// use hangman::core::GuessEngine;
    ///
    /// let engine = GuessEngine::new("Apple").unwrap();
    /// assert_eq!(engine.word(), "apple");
    /// assert_eq!(engine.remaining_guesses(), 5);
    /// assert_eq!(engine.render_hidden_word(), "_____");
    ///
    /// assert!(GuessEngine::new("").is_err());
    /// ```
    pub fn new(word: &str) -> Result<Self, WordError> {
        let word = word.trim().to_lowercase();

        if word.is_empty() {
            return Err(WordError::Empty);
        }

        if word.chars().any(char::is_whitespace) {
            return Err(WordError::ContainsWhitespace);
        }

        let letters: Vec<char> = word.chars().collect();
        let word_chars: FxHashSet<char> = letters.iter().copied().collect();
        let remaining_guesses = letters.len();

        Ok(Self {
            word,
            letters,
            word_chars,
            guessed_chars: FxHashSet::default(),
            attempted_chars: FxHashSet::default(),
            remaining_guesses,
        })
    }

    /// The secret word
    #[inline]
    #[must_use]
    pub fn word(&self) -> &str {
        &self.word
    }

    #[inline]
    #[must_use]
    pub const fn remaining_guesses(&self) -> usize {
        self.remaining_guesses
    }

    /// Unique characters making up the word
    #[inline]
    #[must_use]
    pub const fn word_chars(&self) -> &FxHashSet<char> {
        &self.word_chars
    }

    /// Characters correctly proposed so far
    #[inline]
    #[must_use]
    pub const fn guessed_chars(&self) -> &FxHashSet<char> {
        &self.guessed_chars
    }

    /// Every character proposed so far
    #[inline]
    #[must_use]
    pub const fn attempted_chars(&self) -> &FxHashSet<char> {
        &self.attempted_chars
    }

    /// Number of distinct wrong characters proposed
    #[must_use]
    pub fn wrong_guesses(&self) -> usize {
        self.attempted_chars.len() - self.guessed_chars.len()
    }

    /// The word with unguessed positions replaced by [`BLANK`]
    ///
    /// ```
    /// use hangman::core::GuessEngine;
    ///
    /// let mut engine = GuessEngine::new("sanity").unwrap();
    /// for c in ['a', 'n', 't'] {
    ///     engine.on_right_char(c);
    /// }
    /// assert_eq!(engine.render_hidden_word(), "_an_t_");
    /// ```
    #[must_use]
    pub fn render_hidden_word(&self) -> String {
        self.letters
            .iter()
            .map(|c| {
                if self.guessed_chars.contains(c) {
                    *c
                } else {
                    BLANK
                }
            })
            .collect()
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.remaining_guesses == 0 || self.is_fully_guessed()
    }

    /// Every character of the word has been guessed
    #[must_use]
    pub fn is_fully_guessed(&self) -> bool {
        self.guessed_chars.len() == self.word_chars.len()
    }

    /// Classify a proposal without changing state
    #[must_use]
    pub fn classify(&self, c: char) -> Verdict {
        if self.attempted_chars.contains(&c) {
            Verdict::AlreadyTried
        } else if self.word_chars.contains(&c) {
            Verdict::Right
        } else {
            Verdict::Wrong
        }
    }

    /// Record a wrong proposal and spend one guess
    ///
    /// Tells the player how many guesses remain, unless that was the last one.
    /// The counter never drops below zero.
    ///
    /// # Errors
    /// Returns an I/O error if the notification cannot be written.
    pub fn on_wrong_char<T: Transcript + ?Sized>(&mut self, c: char, io: &mut T) -> io::Result<()> {
        self.attempted_chars.insert(c);
        self.remaining_guesses = self.remaining_guesses.saturating_sub(1);

        if self.remaining_guesses > 0 {
            io.write(&format!(
                "Wrong\nYou have {} more guesses\n",
                self.remaining_guesses
            ))?;
        }

        Ok(())
    }

    /// Record a right proposal
    ///
    /// # Panics
    /// Debug builds assert that `c` belongs to the word.
    pub fn on_right_char(&mut self, c: char) {
        debug_assert!(self.word_chars.contains(&c), "{c:?} is not in the word");
        self.attempted_chars.insert(c);
        self.guessed_chars.insert(c);
    }

    /// End the session as a loss because time ran out
    ///
    /// # Errors
    /// Returns an I/O error if the notification cannot be written.
    pub fn on_timeout<T: Transcript + ?Sized>(&mut self, io: &mut T) -> io::Result<()> {
        io.write("\nYou are out of time! ")?;
        self.remaining_guesses = 0;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transcript::Scripted;
    use proptest::prelude::*;

    fn engine_with_guessed(word: &str, guessed: &[char]) -> GuessEngine {
        let mut engine = GuessEngine::new(word).unwrap();
        for &c in guessed {
            engine.on_right_char(c);
        }
        engine
    }

    #[test]
    fn new_derives_state_from_word() {
        let engine = GuessEngine::new("apple").unwrap();

        assert_eq!(engine.word(), "apple");
        assert_eq!(engine.remaining_guesses(), 5);
        assert_eq!(engine.word_chars().len(), 4);
        assert!(engine.guessed_chars().is_empty());
        assert!(engine.attempted_chars().is_empty());
        assert!(!engine.is_game_over());
    }

    #[test]
    fn new_normalizes_case_and_padding() {
        let engine = GuessEngine::new("  ApPle\n").unwrap();
        assert_eq!(engine.word(), "apple");
    }

    #[test]
    fn life_budget_counts_characters_not_bytes() {
        let engine = GuessEngine::new("café").unwrap();
        assert_eq!(engine.remaining_guesses(), 4);
        assert_eq!(engine.render_hidden_word(), "____");
    }

    #[test]
    fn new_rejects_unplayable_words() {
        assert_eq!(GuessEngine::new("").unwrap_err(), WordError::Empty);
        assert_eq!(GuessEngine::new("   ").unwrap_err(), WordError::Empty);
        assert_eq!(
            GuessEngine::new("two words").unwrap_err(),
            WordError::ContainsWhitespace
        );
    }

    #[test]
    fn word_error_messages() {
        assert_eq!(WordError::Empty.to_string(), "Word must not be empty");
        assert_eq!(
            WordError::ContainsWhitespace.to_string(),
            "Word must not contain whitespace"
        );
    }

    #[test]
    fn render_hidden_word_examples() {
        let cases: [(&str, &[char], &str); 3] = [
            ("sanity", &['a', 'n', 't'], "_an_t_"),
            ("acknowledgment", &['e', 'n'], "___n___e___en_"),
            ("wit", &[], "___"),
        ];

        for (word, guessed, expected) in cases {
            assert_eq!(engine_with_guessed(word, guessed).render_hidden_word(), expected);
        }
    }

    #[test]
    fn game_over_examples() {
        // beaver: a, e, v guessed, all 6 guesses left
        let engine = engine_with_guessed("beaver", &['a', 'e', 'v']);
        assert!(!engine.is_game_over());

        // man: fully guessed
        let engine = engine_with_guessed("man", &['a', 'n', 'm']);
        assert!(engine.is_game_over());
        assert!(engine.is_fully_guessed());

        // river: no guesses left
        let mut engine = engine_with_guessed("river", &['i']);
        let mut io = Scripted::default();
        for c in ['a', 'b', 'c', 'd', 'f'] {
            engine.on_wrong_char(c, &mut io).unwrap();
        }
        assert_eq!(engine.remaining_guesses(), 0);
        assert!(engine.is_game_over());
    }

    #[test]
    fn wrong_char_spends_a_guess_and_notifies() {
        let mut engine = GuessEngine::new("apple").unwrap();
        let mut io = Scripted::default();

        engine.on_wrong_char('_', &mut io).unwrap();

        assert!(engine.attempted_chars().contains(&'_'));
        assert!(!engine.guessed_chars().contains(&'_'));
        assert_eq!(engine.remaining_guesses(), 4);
        assert_eq!(io.last_written(), Some("Wrong\nYou have 4 more guesses\n"));
    }

    #[test]
    fn last_wrong_char_is_silent() {
        let mut engine = GuessEngine::new("ab").unwrap();
        let mut io = Scripted::default();

        engine.on_wrong_char('x', &mut io).unwrap();
        engine.on_wrong_char('y', &mut io).unwrap();

        assert_eq!(engine.remaining_guesses(), 0);
        assert_eq!(io.written(), ["Wrong\nYou have 1 more guesses\n"]);
    }

    #[test]
    fn wrong_char_never_underflows() {
        let mut engine = GuessEngine::new("a").unwrap();
        let mut io = Scripted::default();

        engine.on_wrong_char('x', &mut io).unwrap();
        engine.on_wrong_char('y', &mut io).unwrap();

        assert_eq!(engine.remaining_guesses(), 0);
        assert!(io.written().is_empty());
    }

    #[test]
    fn right_char_is_recorded_in_both_sets() {
        let mut engine = GuessEngine::new("apple").unwrap();
        engine.on_right_char('p');

        assert!(engine.attempted_chars().contains(&'p'));
        assert!(engine.guessed_chars().contains(&'p'));
        assert_eq!(engine.remaining_guesses(), 5);
        assert_eq!(engine.render_hidden_word(), "_pp__");
    }

    #[test]
    fn timeout_zeroes_guesses_and_notifies() {
        let mut engine = GuessEngine::new("apple").unwrap();
        let mut io = Scripted::default();

        engine.on_timeout(&mut io).unwrap();

        assert_eq!(engine.remaining_guesses(), 0);
        assert!(engine.is_game_over());
        assert_eq!(io.last_written(), Some("\nYou are out of time! "));
    }

    #[test]
    fn classify_distinguishes_all_three_cases() {
        let mut engine = GuessEngine::new("apple").unwrap();
        let mut io = Scripted::default();

        assert_eq!(engine.classify('a'), Verdict::Right);
        assert_eq!(engine.classify('z'), Verdict::Wrong);

        engine.on_right_char('a');
        engine.on_wrong_char('z', &mut io).unwrap();

        assert_eq!(engine.classify('a'), Verdict::AlreadyTried);
        assert_eq!(engine.classify('z'), Verdict::AlreadyTried);
        assert_eq!(engine.wrong_guesses(), 1);
    }

    /// A word plus a mask choosing which of its characters are guessed
    fn word_and_mask() -> impl Strategy<Value = (String, Vec<bool>)> {
        "[a-z]{1,12}".prop_flat_map(|word| {
            let len = word.chars().count();
            (Just(word), prop::collection::vec(any::<bool>(), len))
        })
    }

    proptest! {
        #[test]
        fn render_shows_exactly_guessed_positions((word, mask) in word_and_mask()) {
            let guessed: FxHashSet<char> = word
                .chars()
                .zip(&mask)
                .filter_map(|(c, &keep)| keep.then_some(c))
                .collect();

            let mut engine = GuessEngine::new(&word).unwrap();
            for &c in &guessed {
                engine.on_right_char(c);
            }

            let rendered: Vec<char> = engine.render_hidden_word().chars().collect();
            let letters: Vec<char> = word.chars().collect();
            prop_assert_eq!(rendered.len(), letters.len());

            for (shown, actual) in rendered.iter().zip(&letters) {
                if guessed.contains(actual) {
                    prop_assert_eq!(shown, actual);
                } else {
                    prop_assert_eq!(*shown, BLANK);
                }
            }
        }

        #[test]
        fn game_over_iff_out_of_guesses_or_fully_guessed(
            (word, mask) in word_and_mask(),
            wrong in 0usize..16,
        ) {
            let mut engine = GuessEngine::new(&word).unwrap();
            let mut io = Scripted::default();

            for (c, keep) in word.chars().zip(&mask) {
                if *keep {
                    engine.on_right_char(c);
                }
            }

            // Wrong characters come from outside [a-z] and stop at zero
            let wrong = wrong.min(engine.remaining_guesses());
            for c in ('0'..='9').chain('A'..='F').take(wrong) {
                engine.on_wrong_char(c, &mut io).unwrap();
            }

            let expected = engine.remaining_guesses() == 0
                || engine.guessed_chars() == engine.word_chars();
            prop_assert_eq!(engine.is_game_over(), expected);
            prop_assert!(engine.guessed_chars().is_subset(engine.word_chars()));
            prop_assert!(engine.guessed_chars().is_subset(engine.attempted_chars()));
        }
    }
}
