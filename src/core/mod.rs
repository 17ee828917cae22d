//! Core game logic
//!
//! The guessing state machine and the loop that drives it. Everything that
//! talks to the outside world comes in through the capability traits in
//! [`crate::source`], [`crate::timer`] and [`crate::transcript`].

mod engine;
mod game;
mod proposal;

pub use engine::{BLANK, GuessEngine, Verdict, WordError};
pub use game::{GameError, HangmanGame, Outcome, SessionReport, run_session};
pub use proposal::{ProposalError, REJECTED_NOTICE, parse_proposal};
