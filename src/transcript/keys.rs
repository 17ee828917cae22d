//! Single-keystroke console transcript
//!
//! Raw mode is held only for the duration of one read, so anything else
//! printing to the terminal between prompts behaves normally.

use super::Transcript;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    terminal::{disable_raw_mode, enable_raw_mode},
};
use std::io::{self, Write};

/// Transcript that answers each prompt with one key press
pub struct KeyConsole {
    output: io::Stdout,
}

impl KeyConsole {
    #[must_use]
    pub fn new() -> Self {
        Self {
            output: io::stdout(),
        }
    }
}

impl Default for KeyConsole {
    fn default() -> Self {
        Self::new()
    }
}

/// Leaves raw mode when dropped, including on early return
struct RawModeGuard;

impl RawModeGuard {
    fn enter() -> io::Result<Self> {
        enable_raw_mode()?;
        Ok(Self)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
    }
}

/// Map one key event to a proposal
///
/// `None` means the event is not an answer and reading should continue.
/// Esc and Ctrl-C abort the read with `Interrupted`.
fn key_to_char(key: KeyEvent) -> Option<io::Result<char>> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    match key.code {
        KeyCode::Esc => Some(Err(io::Error::new(
            io::ErrorKind::Interrupted,
            "escape pressed",
        ))),
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Some(Err(
            io::Error::new(io::ErrorKind::Interrupted, "ctrl-c pressed"),
        )),
        KeyCode::Char(c) => Some(Ok(c)),
        _ => None,
    }
}

fn next_char() -> io::Result<char> {
    let _raw = RawModeGuard::enter()?;

    loop {
        if let Event::Key(key) = event::read()? {
            if let Some(answer) = key_to_char(key) {
                return answer;
            }
        }
    }
}

impl Transcript for KeyConsole {
    fn write(&mut self, text: &str) -> io::Result<()> {
        self.output.write_all(text.as_bytes())?;
        self.output.flush()
    }

    fn read(&mut self) -> io::Result<String> {
        let c = next_char()?;

        // Echo the key, raw mode suppressed it
        writeln!(self.output, "{c}")?;
        self.output.flush()?;

        Ok(c.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn character_press_is_an_answer() {
        assert_eq!(key_to_char(press(KeyCode::Char('a'))).unwrap().unwrap(), 'a');
        assert_eq!(
            key_to_char(KeyEvent::new(KeyCode::Char('Q'), KeyModifiers::SHIFT))
                .unwrap()
                .unwrap(),
            'Q'
        );
    }

    #[test]
    fn release_and_repeat_events_are_skipped() {
        for kind in [KeyEventKind::Release, KeyEventKind::Repeat] {
            let key = KeyEvent::new_with_kind(KeyCode::Char('a'), KeyModifiers::NONE, kind);
            assert!(key_to_char(key).is_none());
        }
    }

    #[test]
    fn non_character_keys_are_skipped() {
        assert!(key_to_char(press(KeyCode::Enter)).is_none());
        assert!(key_to_char(press(KeyCode::Left)).is_none());
        assert!(key_to_char(press(KeyCode::Backspace)).is_none());
    }

    #[test]
    fn escape_interrupts() {
        let err = key_to_char(press(KeyCode::Esc)).unwrap().unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::Interrupted);
    }

    #[test]
    fn ctrl_c_interrupts_but_plain_c_does_not() {
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        let err = key_to_char(ctrl_c).unwrap().unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::Interrupted);

        assert_eq!(key_to_char(press(KeyCode::Char('c'))).unwrap().unwrap(), 'c');
    }
}
