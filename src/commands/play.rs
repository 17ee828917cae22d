//! Play command
//!
//! Builds the collaborators for one session from a [`PlayConfig`] and runs it.

use crate::core::{GameError, SessionReport, run_session};
use crate::source::{LocalListSource, RemoteSource, WordSource, local, remote};
use crate::timer::{GameTimer, TimeGuard, Unlimited};
use crate::transcript::{Console, KeyConsole, Transcript};
use std::path::PathBuf;
use std::time::Duration;
use tracing::info;

/// Default session budget for the remote variant
pub const DEFAULT_TIME_LIMIT: Duration = Duration::from_secs(30);

/// Where the secret word comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordSupply {
    Remote { url: String, fetch_timeout: Duration },
    Local { word_list: PathBuf },
}

/// Configuration for one session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayConfig {
    pub supply: WordSupply,
    /// `None` plays without a clock
    pub time_limit: Option<Duration>,
    /// Answer prompts with single key presses instead of lines
    pub raw_keys: bool,
    /// Show a spinner while fetching a remote word
    pub show_progress: bool,
}

impl PlayConfig {
    /// Remote word service with a 30 second session budget
    #[must_use]
    pub fn remote() -> Self {
        Self {
            supply: WordSupply::Remote {
                url: remote::DEFAULT_URL.to_string(),
                fetch_timeout: remote::DEFAULT_TIMEOUT,
            },
            time_limit: Some(DEFAULT_TIME_LIMIT),
            raw_keys: false,
            show_progress: true,
        }
    }

    /// Local word list without a time limit
    #[must_use]
    pub fn local(word_list: impl Into<PathBuf>) -> Self {
        Self {
            supply: WordSupply::Local {
                word_list: word_list.into(),
            },
            time_limit: None,
            raw_keys: false,
            show_progress: false,
        }
    }

    fn word_source(&self) -> Box<dyn WordSource> {
        match &self.supply {
            WordSupply::Remote { url, fetch_timeout } => Box::new(
                RemoteSource::new(url.clone())
                    .with_timeout(*fetch_timeout)
                    .with_progress(self.show_progress),
            ),
            WordSupply::Local { word_list } => Box::new(LocalListSource::new(word_list.clone())),
        }
    }

    fn time_guard(&self) -> Box<dyn TimeGuard> {
        match self.time_limit {
            Some(limit) => Box::new(GameTimer::new(limit)),
            None => Box::new(Unlimited),
        }
    }
}

impl Default for PlayConfig {
    fn default() -> Self {
        Self::local(local::DEFAULT_WORD_LIST)
    }
}

/// Run one session on the terminal
///
/// # Errors
///
/// Returns a `GameError` if no word could be supplied or the terminal fails.
pub fn run_play(config: &PlayConfig) -> Result<SessionReport, GameError> {
    let mut io: Box<dyn Transcript> = if config.raw_keys {
        Box::new(KeyConsole::new())
    } else {
        Box::new(Console::stdio())
    };

    play_with(config, &mut io)
}

/// Run one session over an arbitrary transcript
///
/// # Errors
///
/// Returns a `GameError` if no word could be supplied or the transcript fails.
pub fn play_with<T: Transcript + ?Sized>(
    config: &PlayConfig,
    io: &mut T,
) -> Result<SessionReport, GameError> {
    info!(supply = ?config.supply, time_limit = ?config.time_limit, "starting session");

    let mut source = config.word_source();
    run_session(&mut source, io, || config.time_guard())
}
