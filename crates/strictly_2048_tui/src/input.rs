//! Keyboard input: key bindings and raw-mode key capture.

use crate::config::ConfigError;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use serde::{Deserialize, Serialize};
use std::io;
use strictly_2048::{Direction, Input, InputEvent, Status};
use tracing::{debug, instrument};

/// Characters bound to each action. Matching ignores ASCII case.
///
/// Arrow keys always move and Ctrl-C always quits, whatever the bindings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyMap {
    /// Slide up.
    pub up: char,
    /// Slide down.
    pub down: char,
    /// Slide left.
    pub left: char,
    /// Slide right.
    pub right: char,
    /// Leave the game.
    pub quit: char,
}

impl Default for KeyMap {
    fn default() -> Self {
        Self {
            up: 'w',
            down: 's',
            left: 'a',
            right: 'd',
            quit: 'q',
        }
    }
}

impl std::fmt::Display for KeyMap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "up={} down={} left={} right={} quit={}",
            self.up, self.down, self.left, self.right, self.quit
        )
    }
}

impl KeyMap {
    fn bindings(&self) -> [(char, InputEvent); 5] {
        [
            (self.up, InputEvent::Direction(Direction::Up)),
            (self.down, InputEvent::Direction(Direction::Down)),
            (self.left, InputEvent::Direction(Direction::Left)),
            (self.right, InputEvent::Direction(Direction::Right)),
            (self.quit, InputEvent::Quit),
        ]
    }

    /// Checks that the five keys are printable and distinct.
    #[instrument]
    pub fn validate(&self) -> Result<(), ConfigError> {
        let keys: Vec<char> = self
            .bindings()
            .iter()
            .map(|(c, _)| c.to_ascii_lowercase())
            .collect();

        if let Some(bad) = keys.iter().find(|c| c.is_whitespace() || c.is_control()) {
            return Err(ConfigError::new(format!("Key {:?} cannot be bound", bad)));
        }
        for (idx, key) in keys.iter().enumerate() {
            if keys[idx + 1..].contains(key) {
                let message = format!("Key '{}' is bound more than once", key);
                return Err(ConfigError::new(message));
            }
        }
        Ok(())
    }

    /// Maps a character to its bound event, if any.
    pub fn lookup(&self, c: char) -> Option<InputEvent> {
        let c = c.to_ascii_lowercase();
        self.bindings()
            .into_iter()
            .find(|(key, _)| key.to_ascii_lowercase() == c)
            .map(|(_, event)| event)
    }

    /// Translates a terminal key event.
    ///
    /// Returns `None` for key releases, which carry no player intent.
    #[instrument]
    pub fn translate(&self, key: &KeyEvent) -> Option<InputEvent> {
        if key.kind == KeyEventKind::Release {
            return None;
        }

        let event = match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                InputEvent::Quit
            }
            KeyCode::Up => InputEvent::Direction(Direction::Up),
            KeyCode::Down => InputEvent::Direction(Direction::Down),
            KeyCode::Left => InputEvent::Direction(Direction::Left),
            KeyCode::Right => InputEvent::Direction(Direction::Right),
            KeyCode::Char(c) => self
                .lookup(c)
                .unwrap_or_else(|| InputEvent::Invalid(c.to_string())),
            other => InputEvent::Invalid(other.to_string()),
        };
        Some(event)
    }

    /// Usage hint for these bindings, e.g. "Use WASD to make a move or Q to quit."
    pub fn usage(&self) -> Status {
        let moves = [self.up, self.left, self.down, self.right]
            .iter()
            .map(|c| c.to_ascii_uppercase())
            .collect();
        Status::Usage {
            moves,
            quit: self.quit.to_ascii_uppercase().to_string(),
        }
    }
}

/// Restores cooked mode when dropped.
struct RawModeGuard;

impl RawModeGuard {
    fn enable() -> io::Result<Self> {
        enable_raw_mode()?;
        Ok(Self)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        if let Err(e) = disable_raw_mode() {
            tracing::warn!(error = %e, "Failed to leave raw mode");
        }
    }
}

/// Reads single keystrokes from the terminal.
///
/// Raw mode is held only while waiting for a key, so the board and status
/// lines print normally between reads.
pub struct TerminalInput {
    keys: KeyMap,
}

impl TerminalInput {
    /// Creates terminal input with the given bindings.
    pub fn new(keys: KeyMap) -> Self {
        Self { keys }
    }
}

impl Input for TerminalInput {
    #[instrument(skip(self))]
    fn read_event(&mut self) -> io::Result<InputEvent> {
        let _raw = RawModeGuard::enable()?;
        loop {
            if let Event::Key(key) = event::read()?
                && let Some(event) = self.keys.translate(&key)
            {
                debug!(?event, "Key read");
                return Ok(event);
            }
        }
    }

    fn usage(&self) -> Status {
        self.keys.usage()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_default_bindings() {
        let keys = KeyMap::default();
        assert_eq!(
            keys.translate(&press(KeyCode::Char('w'))),
            Some(InputEvent::Direction(Direction::Up))
        );
        assert_eq!(
            keys.translate(&press(KeyCode::Char('a'))),
            Some(InputEvent::Direction(Direction::Left))
        );
        assert_eq!(
            keys.translate(&press(KeyCode::Char('s'))),
            Some(InputEvent::Direction(Direction::Down))
        );
        assert_eq!(
            keys.translate(&press(KeyCode::Char('d'))),
            Some(InputEvent::Direction(Direction::Right))
        );
        assert_eq!(keys.translate(&press(KeyCode::Char('q'))), Some(InputEvent::Quit));
    }

    #[test]
    fn test_bindings_ignore_case() {
        let keys = KeyMap::default();
        assert_eq!(
            keys.translate(&press(KeyCode::Char('D'))),
            Some(InputEvent::Direction(Direction::Right))
        );
        assert_eq!(keys.translate(&press(KeyCode::Char('Q'))), Some(InputEvent::Quit));
    }

    #[test]
    fn test_arrows_and_ctrl_c_always_work() {
        let keys = KeyMap {
            up: 'k',
            down: 'j',
            left: 'h',
            right: 'l',
            quit: 'x',
        };
        assert_eq!(
            keys.translate(&press(KeyCode::Left)),
            Some(InputEvent::Direction(Direction::Left))
        );
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(keys.translate(&ctrl_c), Some(InputEvent::Quit));
        assert_eq!(
            keys.translate(&press(KeyCode::Char('w'))),
            Some(InputEvent::Invalid("w".to_string()))
        );
    }

    #[test]
    fn test_unbound_keys_are_invalid() {
        let keys = KeyMap::default();
        assert_eq!(
            keys.translate(&press(KeyCode::Char('z'))),
            Some(InputEvent::Invalid("z".to_string()))
        );
        assert!(matches!(
            keys.translate(&press(KeyCode::Enter)),
            Some(InputEvent::Invalid(_))
        ));
    }

    #[test]
    fn test_release_is_ignored() {
        let mut key = press(KeyCode::Char('w'));
        key.kind = KeyEventKind::Release;
        assert_eq!(KeyMap::default().translate(&key), None);
    }

    #[test]
    fn test_usage_hint() {
        assert_eq!(
            KeyMap::default().usage().to_string(),
            "Use WASD to make a move or Q to quit."
        );
    }

    #[test]
    fn test_validate() {
        assert!(KeyMap::default().validate().is_ok());
        let clash = KeyMap {
            quit: 'W',
            ..KeyMap::default()
        };
        assert!(clash.validate().is_err());
        let blank = KeyMap {
            up: ' ',
            ..KeyMap::default()
        };
        assert!(blank.validate().is_err());
    }
}
