//! Word supply from a remote random-word service
//!
//! The service answers a GET with a one-element list literal such as
//! `["apple"]`. The word is whatever sits inside the two-character wrapper on
//! either side.

use super::{SupplyError, WordSource};
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;
use tracing::{debug, warn};

/// Public random-word endpoint
pub const DEFAULT_URL: &str = "https://random-word-api.herokuapp.com/word";

/// Request budget for a word fetch
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Fetches one word per call from an HTTP endpoint
pub struct RemoteSource {
    url: String,
    timeout: Duration,
    show_progress: bool,
}

impl RemoteSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            timeout: DEFAULT_TIMEOUT,
            show_progress: false,
        }
    }

    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Show a spinner on stderr while the request is in flight
    #[must_use]
    pub const fn with_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }

    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    fn spinner(&self) -> Option<ProgressBar> {
        if !self.show_progress {
            return None;
        }

        let pb = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.cyan} {msg}") {
            pb.set_style(style);
        }
        pb.set_message("Fetching a word...");
        pb.enable_steady_tick(Duration::from_millis(100));
        Some(pb)
    }

    fn fetch(&self) -> Result<String, SupplyError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(self.timeout)
            .build()
            .map_err(|e| self.classify(&e))?;

        let body = client
            .get(&self.url)
            .send()
            .and_then(reqwest::blocking::Response::error_for_status)
            .and_then(reqwest::blocking::Response::text)
            .map_err(|e| self.classify(&e))?;

        debug!(url = %self.url, bytes = body.len(), "word service answered");
        parse_word_list(&body)
    }

    fn classify(&self, err: &reqwest::Error) -> SupplyError {
        if err.is_timeout() {
            warn!(url = %self.url, timeout = ?self.timeout, "word service timed out");
            SupplyError::Timeout {
                seconds: self.timeout.as_secs(),
            }
        } else {
            warn!(url = %self.url, error = %err, "word service request failed");
            SupplyError::Transport {
                detail: err.to_string(),
            }
        }
    }
}

impl Default for RemoteSource {
    fn default() -> Self {
        Self::new(DEFAULT_URL)
    }
}

impl WordSource for RemoteSource {
    fn produce_word(&mut self) -> Result<String, SupplyError> {
        let spinner = self.spinner();
        let result = self.fetch();
        if let Some(pb) = spinner {
            pb.finish_and_clear();
        }
        result
    }
}

/// Extract the word from a one-element list literal
///
/// Accepts `["word"]` or `['word']`, surrounded by optional whitespace. The
/// two wrapper characters on each side are removed; anything else is a
/// [`SupplyError::MalformedResponse`].
///
/// # Errors
///
/// Returns `MalformedResponse` when the body is not exactly one quoted word
/// inside brackets.
pub fn parse_word_list(body: &str) -> Result<String, SupplyError> {
    let malformed = || SupplyError::MalformedResponse {
        body: body.to_string(),
    };

    let trimmed = body.trim();
    let inner = ["\"", "'"]
        .into_iter()
        .find_map(|quote| {
            trimmed
                .strip_prefix('[')?
                .strip_prefix(quote)?
                .strip_suffix(']')?
                .strip_suffix(quote)
        })
        .ok_or_else(malformed)?;

    if inner.is_empty() || inner.contains(['"', '\'', ',', '[', ']']) {
        return Err(malformed());
    }

    Ok(inner.to_string())
}
