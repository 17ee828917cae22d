//! Hangman
//!
//! A terminal word-guessing game. The secret word comes from a remote word
//! service or a local list; the player proposes one character at a time until
//! the word is revealed, the guesses run out, or the clock does.
//!
//! # Quick Start
//!
//! ```rust
//! use hangman::core::{run_session, Outcome};
//! use hangman::source::{SupplyError, WordSource};
//! use hangman::timer::Unlimited;
//! use hangman::transcript::Scripted;
//!
//! struct Apple;
//!
//! impl WordSource for Apple {
//!     fn produce_word(&mut self) -> Result<String, SupplyError> {
//!         Ok("apple".to_string())
//!     }
//! }
//!
//! let mut io = Scripted::new(["a", "p", "l", "e"]);
//! let report = run_session(&mut Apple, &mut io, || Unlimited).unwrap();
//! assert_eq!(report.outcome, Outcome::Won);
//! ```

// Guess engine and session loop
pub mod core;

// Word supply
pub mod source;

// Session time budget
pub mod timer;

// Player I/O
pub mod transcript;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
