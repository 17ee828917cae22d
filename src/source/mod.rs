//! Secret word supply
//!
//! A [`WordSource`] produces the word for one session. Failures are fatal for
//! that session: the caller writes [`SupplyError::apology`] to the player and
//! stops.

pub mod local;
pub mod remote;

pub use local::LocalListSource;
pub use remote::RemoteSource;

use std::path::PathBuf;
use thiserror::Error;

/// Produce one word on demand
pub trait WordSource {
    /// # Errors
    ///
    /// Returns a [`SupplyError`] when no word can be obtained.
    fn produce_word(&mut self) -> Result<String, SupplyError>;
}

impl<S: WordSource + ?Sized> WordSource for Box<S> {
    fn produce_word(&mut self) -> Result<String, SupplyError> {
        (**self).produce_word()
    }
}

/// Why a word could not be supplied
#[derive(Debug, Error)]
pub enum SupplyError {
    /// The word service did not answer within its budget
    #[error("word service timed out after {seconds} seconds")]
    Timeout { seconds: u64 },

    /// Any other network failure, including non-success HTTP status
    #[error("word service request failed: {detail}")]
    Transport { detail: String },

    /// The service answered with something other than a one-word list
    #[error("unexpected word service response: {body:?}")]
    MalformedResponse { body: String },

    /// The word list is missing or has no usable entries
    #[error("word list {} is missing or empty", path.display())]
    EmptySource { path: PathBuf },

    /// The word list exists but could not be read
    #[error("word list {} could not be read: {source}", path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The supplied word cannot be played
    #[error("supplied word {word:?} is not playable")]
    InvalidWord { word: String },
}

impl SupplyError {
    /// Short variant name, free of the word or response body
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Timeout { .. } => "timeout",
            Self::Transport { .. } => "transport",
            Self::MalformedResponse { .. } => "malformed_response",
            Self::EmptySource { .. } => "empty_source",
            Self::Unreadable { .. } => "unreadable",
            Self::InvalidWord { .. } => "invalid_word",
        }
    }

    /// The line shown to the player before the session aborts
    #[must_use]
    pub fn apology(&self) -> String {
        match self {
            Self::Timeout { seconds } => {
                format!("Server did not respond in {seconds} seconds. We are sorry :(\n")
            }
            Self::Transport { detail } => {
                format!("An error occurred: {detail}. We are sorry :(\n")
            }
            other => format!("An error occurred: {other}. We are sorry :(\n"),
        }
    }
}
