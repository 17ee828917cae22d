//! Player-facing text transport
//!
//! The game never touches stdin/stdout directly. Everything goes through a
//! [`Transcript`], so sessions can run against the console, a raw keyboard,
//! or a scripted double in tests.

mod console;
mod keys;
mod scripted;

pub use console::Console;
pub use keys::KeyConsole;
pub use scripted::Scripted;

use std::io;

/// Write prompts to the player and read their replies
pub trait Transcript {
    /// Emit text immediately
    ///
    /// Any buffering must be flushed before this returns, so the text is
    /// visible before the next [`read`](Transcript::read) blocks.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the underlying stream cannot be written.
    fn write(&mut self, text: &str) -> io::Result<()>;

    /// Block until the player supplies one reply
    ///
    /// The trailing line terminator is stripped. Interpreting the reply as a
    /// single character is left to the caller.
    ///
    /// # Errors
    ///
    /// Returns `UnexpectedEof` when input is exhausted, or any other I/O error
    /// raised by the underlying stream.
    fn read(&mut self) -> io::Result<String>;
}

impl<T: Transcript + ?Sized> Transcript for &mut T {
    fn write(&mut self, text: &str) -> io::Result<()> {
        (**self).write(text)
    }

    fn read(&mut self) -> io::Result<String> {
        (**self).read()
    }
}

impl<T: Transcript + ?Sized> Transcript for Box<T> {
    fn write(&mut self, text: &str) -> io::Result<()> {
        (**self).write(text)
    }

    fn read(&mut self) -> io::Result<String> {
        (**self).read()
    }
}
