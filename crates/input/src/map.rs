//! Key mapping from terminal events to game commands.
//!
//! The mapping is a [`KeyBindings`] value owned by the host and passed in explicitly.
//! Bindings serialize as a list of `{ "key": "<name>", "command": "<Command>" }` pairs;
//! key names are single characters (case-insensitive) or one of `Left`, `Right`, `Up`,
//! `Down`, `Space`, `Enter`, `Tab`, `Backspace`, `Esc`.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use serde::{Deserialize, Serialize};

use crate::types::Command;

/// One key bound to one command
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyBinding {
    pub key: String,
    pub command: Command,
}

/// Key to command table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyBindings {
    bindings: Vec<KeyBinding>,
}

impl Default for KeyBindings {
    /// Arrows, vim keys and WASD; space hard-drops, `c` holds, `1`-`3` fire abilities.
    fn default() -> Self {
        let pairs: [(&str, Command); 18] = [
            ("Left", Command::MoveLeft),
            ("h", Command::MoveLeft),
            ("a", Command::MoveLeft),
            ("Right", Command::MoveRight),
            ("l", Command::MoveRight),
            ("d", Command::MoveRight),
            ("Down", Command::MoveDown),
            ("j", Command::MoveDown),
            ("s", Command::MoveDown),
            ("Up", Command::Rotate),
            ("k", Command::Rotate),
            ("w", Command::Rotate),
            ("Space", Command::HardDrop),
            ("c", Command::Hold),
            ("Enter", Command::Hold),
            ("1", Command::Ability1),
            ("2", Command::Ability2),
            ("3", Command::Ability3),
        ];
        Self {
            bindings: pairs
                .iter()
                .map(|(key, command)| KeyBinding {
                    key: key.to_string(),
                    command: *command,
                })
                .collect(),
        }
    }
}

impl KeyBindings {
    /// Bindings with no keys at all
    pub fn empty() -> Self {
        Self {
            bindings: Vec::new(),
        }
    }

    pub fn bindings(&self) -> &[KeyBinding] {
        &self.bindings
    }

    /// Bind `key` to `command`, replacing any previous binding of that key.
    ///
    /// Returns false if `key` is not a recognised key name.
    pub fn bind(&mut self, key: &str, command: Command) -> bool {
        let Some(code) = parse_key_name(key) else {
            return false;
        };
        self.bindings
            .retain(|b| parse_key_name(&b.key) != Some(code));
        self.bindings.push(KeyBinding {
            key: key.to_string(),
            command,
        });
        true
    }

    /// Remove every binding of `key`
    pub fn unbind(&mut self, key: &str) -> bool {
        let Some(code) = parse_key_name(key) else {
            return false;
        };
        let before = self.bindings.len();
        self.bindings
            .retain(|b| parse_key_name(&b.key) != Some(code));
        self.bindings.len() != before
    }

    /// Keys bound to `command`, in binding order
    pub fn keys_for(&self, command: Command) -> Vec<&str> {
        self.bindings
            .iter()
            .filter(|b| b.command == command)
            .map(|b| b.key.as_str())
            .collect()
    }

    /// Map keyboard input to a command.
    pub fn command_for(&self, key: KeyEvent) -> Option<Command> {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return None;
        }
        let code = normalize(key.code);
        self.bindings
            .iter()
            .find(|b| parse_key_name(&b.key) == Some(code))
            .map(|b| b.command)
    }
}

/// Letters compare case-insensitively
fn normalize(code: KeyCode) -> KeyCode {
    match code {
        KeyCode::Char(c) => KeyCode::Char(c.to_ascii_lowercase()),
        other => other,
    }
}

/// Parse a key name into a normalized key code.
pub fn parse_key_name(name: &str) -> Option<KeyCode> {
    let code = match name.to_lowercase().as_str() {
        "left" => KeyCode::Left,
        "right" => KeyCode::Right,
        "up" => KeyCode::Up,
        "down" => KeyCode::Down,
        "space" | " " => KeyCode::Char(' '),
        "enter" | "return" => KeyCode::Enter,
        "tab" => KeyCode::Tab,
        "backspace" => KeyCode::Backspace,
        "esc" | "escape" => KeyCode::Esc,
        other => {
            let mut chars = other.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => KeyCode::Char(c),
                _ => return None,
            }
        }
    };
    Some(normalize(code))
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
