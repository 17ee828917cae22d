//! Session loop
//!
//! Drives a [`GuessEngine`] from player replies until the session reaches a
//! terminal state, then reports the outcome.

use super::engine::{GuessEngine, Verdict};
use super::proposal::{REJECTED_NOTICE, parse_proposal};
use crate::source::{SupplyError, WordSource};
use crate::timer::TimeGuard;
use crate::transcript::Transcript;
use std::fmt;
use std::io;
use thiserror::Error;
use tracing::{debug, info, warn};

/// How a session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Won,
    LostByGuesses,
    LostByTimeout,
}

impl Outcome {
    #[must_use]
    pub const fn is_win(self) -> bool {
        matches!(self, Self::Won)
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Won => write!(f, "won"),
            Self::LostByGuesses => write!(f, "lost (out of guesses)"),
            Self::LostByTimeout => write!(f, "lost (out of time)"),
        }
    }
}

/// Summary of a finished session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionReport {
    pub word: String,
    pub outcome: Outcome,
    /// Distinct wrong characters proposed
    pub wrong_guesses: usize,
    /// Accepted proposals, repeats included
    pub proposals: usize,
    pub remaining_guesses: usize,
}

/// Reasons a session could not finish
#[derive(Debug, Error)]
pub enum GameError {
    /// No word could be supplied; the apology has already been written
    #[error(transparent)]
    Supply(#[from] SupplyError),

    /// The transcript failed, e.g. input closed mid-game
    #[error("transcript failed: {0}")]
    Io(#[from] io::Error),
}

/// One hangman session over an engine, a transcript and a time guard
pub struct HangmanGame<T: Transcript, G: TimeGuard> {
    engine: GuessEngine,
    io: T,
    guard: G,
    proposals: usize,
}

impl<T: Transcript, G: TimeGuard> HangmanGame<T, G> {
    pub const fn new(engine: GuessEngine, io: T, guard: G) -> Self {
        Self {
            engine,
            io,
            guard,
            proposals: 0,
        }
    }

    #[must_use]
    pub const fn engine(&self) -> &GuessEngine {
        &self.engine
    }

    /// Play until the session is over
    ///
    /// The time guard is checked before each prompt, never during a blocking
    /// read, so a slow reply is still honored and timeout is only noticed on
    /// the next turn.
    ///
    /// # Errors
    /// Returns `GameError::Io` if the transcript cannot be read or written.
    pub fn play(&mut self) -> Result<SessionReport, GameError> {
        self.io.write("Start guessing...\n")?;

        let mut timed_out = false;
        while !self.engine.is_game_over() {
            if self.guard.is_time_up() {
                warn!("session ran out of time");
                self.engine.on_timeout(&mut self.io)?;
                timed_out = true;
                break;
            }

            self.io.write(&format!(
                "{} guess a character: ",
                self.engine.render_hidden_word()
            ))?;

            let reply = self.io.read()?;
            self.handle_reply(&reply)?;
        }

        let outcome = if self.engine.remaining_guesses() == 0 {
            self.io.write(&format!(
                "You lose. The word is {}\n",
                self.engine.word()
            ))?;
            if timed_out {
                Outcome::LostByTimeout
            } else {
                Outcome::LostByGuesses
            }
        } else {
            self.io
                .write(&format!("{} You win\n", self.engine.word()))?;
            Outcome::Won
        };

        let report = SessionReport {
            word: self.engine.word().to_string(),
            outcome,
            wrong_guesses: self.engine.wrong_guesses(),
            proposals: self.proposals,
            remaining_guesses: self.engine.remaining_guesses(),
        };

        info!(
            %outcome,
            proposals = report.proposals,
            wrong = report.wrong_guesses,
            "session finished"
        );
        Ok(report)
    }

    fn handle_reply(&mut self, reply: &str) -> io::Result<()> {
        let c = match parse_proposal(reply) {
            Ok(c) => c,
            Err(err) => {
                debug!(%err, "rejected reply");
                return self.io.write(REJECTED_NOTICE);
            }
        };

        self.proposals += 1;
        let verdict = self.engine.classify(c);
        debug!(proposal = %c, ?verdict, "proposal");

        match verdict {
            Verdict::AlreadyTried => self.io.write(&format!(
                "You've already tried character '{c}'. Try another one\n"
            )),
            Verdict::Right => {
                self.engine.on_right_char(c);
                Ok(())
            }
            Verdict::Wrong => self.engine.on_wrong_char(c, &mut self.io),
        }
    }
}

/// Run one complete session
///
/// Obtains a word from `source`, starts the timer from `start_timer` once the
/// word is in hand, and plays to the end. A supply failure is written to the
/// player as an apology before it is returned.
///
/// # Errors
/// Returns `GameError::Supply` when no playable word could be obtained, or
/// `GameError::Io` when the transcript fails.
pub fn run_session<S, T, G, F>(
    source: &mut S,
    io: &mut T,
    start_timer: F,
) -> Result<SessionReport, GameError>
where
    S: WordSource + ?Sized,
    T: Transcript + ?Sized,
    G: TimeGuard,
    F: FnOnce() -> G,
{
    let engine = match supply_engine(source) {
        Ok(engine) => engine,
        Err(err) => {
            warn!(kind = err.kind(), "no word for this session");
            debug!(error = %err, "supply failure detail");
            io.write(&err.apology())?;
            return Err(err.into());
        }
    };

    let mut game = HangmanGame::new(engine, io, start_timer());
    game.play()
}

fn supply_engine<S: WordSource + ?Sized>(source: &mut S) -> Result<GuessEngine, SupplyError> {
    let word = source.produce_word()?;
    GuessEngine::new(&word).map_err(|err| {
        debug!(%err, "supplied word rejected");
        SupplyError::InvalidWord { word }
    })
}
