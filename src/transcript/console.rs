//! Line-based console transcript

use super::Transcript;
use std::io::{self, BufRead, Write};

/// Line-oriented transcript over any reader/writer pair
///
/// Each [`read`](Transcript::read) consumes one line. [`Console::stdio`]
/// binds it to the process standard streams.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl Console<io::StdinLock<'static>, io::Stdout> {
    /// Console bound to stdin/stdout
    #[must_use]
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub const fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Consume the console and return the output sink
    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> Transcript for Console<R, W> {
    fn write(&mut self, text: &str) -> io::Result<()> {
        self.output.write_all(text.as_bytes())?;
        self.output.flush()
    }

    fn read(&mut self) -> io::Result<String> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input closed before the game finished",
            ));
        }

        // Strip exactly one terminator, "\n" or "\r\n"
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }

        Ok(line)
    }
}
