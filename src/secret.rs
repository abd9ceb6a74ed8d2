//! Masked secret entry.
//!
//! Reads an API key from the terminal without echoing it. Only printable
//! ASCII is kept; Backspace deletes, Enter submits, Ctrl-C or Esc cancels.
//! When stdin is not a terminal a single line is read instead, so keys can
//! be piped in.

use std::io::{self, BufRead, IsTerminal, Write};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal;

use crate::error::{AskError, Result};

/// What to do after a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    Continue,
    Submit,
    Cancel,
}

/// Applies one key event to the secret being typed.
pub fn apply_key(secret: &mut String, key: &KeyEvent) -> KeyOutcome {
    if key.kind == KeyEventKind::Release {
        return KeyOutcome::Continue;
    }
    match key.code {
        KeyCode::Enter => KeyOutcome::Submit,
        KeyCode::Esc => KeyOutcome::Cancel,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => KeyOutcome::Cancel,
        KeyCode::Backspace => {
            secret.pop();
            KeyOutcome::Continue
        }
        KeyCode::Char(c) if is_printable(c) && !key.modifiers.contains(KeyModifiers::CONTROL) => {
            secret.push(c);
            KeyOutcome::Continue
        }
        _ => KeyOutcome::Continue,
    }
}

fn is_printable(c: char) -> bool {
    c.is_ascii() && !c.is_ascii_control()
}

/// Keeps only printable characters of a piped line.
fn clean_line(line: &str) -> String {
    line.chars().filter(|c| is_printable(*c)).collect()
}

/// Prints `prompt` and reads a secret from the user.
pub fn read_secret(prompt: &str) -> Result<String> {
    print!("{prompt}");
    io::stdout().flush().map_err(AskError::Input)?;

    let secret = if io::stdin().is_terminal() {
        read_masked()
    } else {
        read_piped()
    };
    println!();
    secret
}

fn read_piped() -> Result<String> {
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line).map_err(AskError::Input)?;
    Ok(clean_line(&line))
}

fn read_masked() -> Result<String> {
    let _raw = RawMode::enable().map_err(AskError::Input)?;
    let mut secret = String::new();
    loop {
        let Event::Key(key) = event::read().map_err(AskError::Input)? else {
            continue;
        };
        match apply_key(&mut secret, &key) {
            KeyOutcome::Continue => {}
            KeyOutcome::Submit => return Ok(secret),
            KeyOutcome::Cancel => {
                return Err(AskError::Input(io::Error::new(
                    io::ErrorKind::Interrupted,
                    "cancelled",
                )))
            }
        }
    }
}

/// Raw mode for the lifetime of the guard.
struct RawMode;

impl RawMode {
    fn enable() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        Ok(Self)
    }
}

impl Drop for RawMode {
    fn drop(&mut self) {
        let _ = terminal::disable_raw_mode();
    }
}
