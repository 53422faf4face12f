use crate::core::event::LogicalKey;
use crate::core::input::InputSource;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::io;

/// Maps a crossterm key event onto the logical key set.
///
/// Releases and keys outside the set (function keys, Ctrl/Alt chords, ...) map to `None`.
pub fn into_logical_key(event: KeyEvent) -> Option<LogicalKey> {
    if event.kind == KeyEventKind::Release {
        return None;
    }
    if event
        .modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT | KeyModifiers::SUPER)
    {
        return None;
    }

    match event.code {
        KeyCode::Up => Some(LogicalKey::Up),
        KeyCode::Down => Some(LogicalKey::Down),
        KeyCode::Left => Some(LogicalKey::Left),
        KeyCode::Right => Some(LogicalKey::Right),
        KeyCode::Enter => Some(LogicalKey::Enter),
        KeyCode::Esc => Some(LogicalKey::Esc),
        KeyCode::Char(ch) if !ch.is_control() => Some(LogicalKey::Char(ch)),
        _ => None,
    }
}

/// Blocking keyboard reader on top of `crossterm::event::read`.
#[derive(Debug, Default)]
pub struct CrosstermInput;

impl CrosstermInput {
    pub fn new() -> Self {
        Self
    }
}

impl InputSource for CrosstermInput {
    fn read_key(&mut self) -> io::Result<LogicalKey> {
        loop {
            match crossterm::event::read()? {
                Event::Key(key) => match into_logical_key(key) {
                    Some(logical) => return Ok(logical),
                    None => tracing::trace!(code = ?key.code, "unmapped key ignored"),
                },
                // The next frame queries the surface size again.
                Event::Resize(cols, rows) => tracing::debug!(rows, cols, "terminal resized"),
                _ => {}
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/tui/crossterm.rs"]
mod tests;
