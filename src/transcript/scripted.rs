//! Deterministic transcript for driving sessions without a terminal

use super::Transcript;
use std::collections::VecDeque;
use std::io;

/// Replays queued replies and records everything written
///
/// Reading past the end of the script yields `UnexpectedEof`, the same way a
/// closed stdin does.
#[derive(Debug, Default, Clone)]
pub struct Scripted {
    replies: VecDeque<String>,
    written: Vec<String>,
}

impl Scripted {
    pub fn new<I, S>(replies: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            replies: replies.into_iter().map(Into::into).collect(),
            written: Vec::new(),
        }
    }

    /// Every chunk passed to `write`, in order
    #[must_use]
    pub fn written(&self) -> &[String] {
        &self.written
    }

    /// The most recent chunk written
    #[must_use]
    pub fn last_written(&self) -> Option<&str> {
        self.written.last().map(String::as_str)
    }

    /// Replies not yet consumed
    #[must_use]
    pub fn remaining_replies(&self) -> usize {
        self.replies.len()
    }
}

impl Transcript for Scripted {
    fn write(&mut self, text: &str) -> io::Result<()> {
        self.written.push(text.to_string());
        Ok(())
    }

    fn read(&mut self) -> io::Result<String> {
        self.replies
            .pop_front()
            .ok_or_else(|| io::Error::new(io::ErrorKind::UnexpectedEof, "script exhausted"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replays_in_order_then_reports_eof() {
        let mut script = Scripted::new(["a", "b"]);

        assert_eq!(script.read().unwrap(), "a");
        assert_eq!(script.read().unwrap(), "b");
        assert_eq!(
            script.read().unwrap_err().kind(),
            io::ErrorKind::UnexpectedEof
        );
    }

    #[test]
    fn records_writes() {
        let mut script = Scripted::default();
        script.write("one").unwrap();
        script.write("two").unwrap();

        assert_eq!(script.written(), ["one", "two"]);
        assert_eq!(script.last_written(), Some("two"));
    }
}
