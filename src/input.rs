//! Key input for the reorder session

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use crossterm::terminal;

use crate::error::{Error, Result};

/// Keys the reorder session understands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// Up arrow
    Up,
    /// Down arrow
    Down,
    /// Right arrow: switch between navigating and relocating
    Toggle,
    /// Enter or Escape: accept the current order
    Confirm,
    /// Anything else; ignored apart from a redraw
    Other,
}

impl From<KeyCode> for Key {
    fn from(code: KeyCode) -> Self {
        match code {
            KeyCode::Up => Key::Up,
            KeyCode::Down => Key::Down,
            KeyCode::Right => Key::Toggle,
            KeyCode::Enter | KeyCode::Esc => Key::Confirm,
            _ => Key::Other,
        }
    }
}

/// Blocking source of one key per call
pub trait KeySource {
    fn next_key(&mut self) -> Result<Key>;

    /// Called once before the first key of a reorder session is read
    fn begin_session(&mut self) -> Result<()> {
        Ok(())
    }

    /// Called once when the session ends, whether it succeeded or not
    fn end_session(&mut self) {}
}

/// Reads single key presses from the terminal
///
/// The terminal stays in raw mode from `begin_session` to `end_session`, so
/// keys pressed while the list is redrawn are not echoed.
#[derive(Debug, Default)]
pub struct TerminalKeys {
    raw: Option<RawModeGuard>,
}

impl TerminalKeys {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_raw(&self) -> bool {
        self.raw.is_some()
    }
}

impl KeySource for TerminalKeys {
    fn begin_session(&mut self) -> Result<()> {
        if self.raw.is_none() {
            self.raw = Some(RawModeGuard::enable()?);
        }
        Ok(())
    }

    fn end_session(&mut self) {
        self.raw = None;
    }

    fn next_key(&mut self) -> Result<Key> {
        loop {
            if let Event::Key(key) = event::read()? {
                if let Some(key) = key_from_event(key) {
                    return Ok(key);
                }
            }
        }
    }
}

/// Map a terminal key event, skipping releases and repeats
fn key_from_event(event: KeyEvent) -> Option<Key> {
    match event.kind {
        KeyEventKind::Press => Some(Key::from(event.code)),
        _ => None,
    }
}

/// Keeps the terminal in raw mode until dropped
#[derive(Debug)]
struct RawModeGuard;

impl RawModeGuard {
    fn enable() -> Result<Self> {
        terminal::enable_raw_mode()?;
        Ok(Self)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        let _ = terminal::disable_raw_mode();
    }
}

impl<I> KeySource for I
where
    I: Iterator<Item = Key>,
{
    fn next_key(&mut self) -> Result<Key> {
        self.next().ok_or(Error::InputClosed)
    }
}
