use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::core::{Direction, UserAction};

/// Which keys trigger which action, by key name (`"w"`, `"Up"`, `"Esc"`, ...).
///
/// Loaded once at startup and handed to the input dispatcher; never changed
/// afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct KeyBindings {
    pub up: Vec<String>,
    pub down: Vec<String>,
    pub left: Vec<String>,
    pub right: Vec<String>,
    pub undo: Vec<String>,
    pub quit: Vec<String>,
}

fn keys(names: &[&str]) -> Vec<String> {
    names.iter().map(|name| name.to_string()).collect()
}

impl Default for KeyBindings {
    fn default() -> Self {
        KeyBindings {
            up: keys(&["w", "W", "Up"]),
            down: keys(&["s", "S", "Down"]),
            left: keys(&["a", "A", "Left"]),
            right: keys(&["d", "D", "Right"]),
            undo: keys(&["u", "U", "z", "Backspace"]),
            quit: keys(&["q", "Q", "Esc"]),
        }
    }
}

impl KeyBindings {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&text)
    }

    /// Missing actions fall back to their default keys.
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(text).map_err(ConfigError::Json)
    }

    pub fn to_json_pretty(&self) -> Result<String, ConfigError> {
        serde_json::to_string_pretty(self).map_err(ConfigError::Json)
    }

    pub fn entries(&self) -> [(UserAction, &[String]); 6] {
        [
            (UserAction::Move(Direction::Up), self.up.as_slice()),
            (UserAction::Move(Direction::Down), self.down.as_slice()),
            (UserAction::Move(Direction::Left), self.left.as_slice()),
            (UserAction::Move(Direction::Right), self.right.as_slice()),
            (UserAction::Undo, self.undo.as_slice()),
            (UserAction::Quit, self.quit.as_slice()),
        ]
    }

    /// One-line help text, e.g. `Move: w/a/s/d | Undo: u | Quit: q`.
    pub fn describe(&self) -> String {
        let first = |names: &[String]| names.first().map_or("-", String::as_str).to_string();
        format!(
            "Move: {}/{}/{}/{} | Undo: {} | Quit: {}",
            first(&self.up),
            first(&self.left),
            first(&self.down),
            first(&self.right),
            first(&self.undo),
            first(&self.quit),
        )
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Io { path: PathBuf, source: io::Error },
    Json(serde_json::Error),
    UnknownKey { action: UserAction, name: String },
    DuplicateKey { name: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io { path, source } => {
                write!(f, "could not read {}: {source}", path.display())
            }
            ConfigError::Json(err) => write!(f, "invalid key bindings: {err}"),
            ConfigError::UnknownKey { action, name } => {
                write!(f, "unknown key name {name:?} bound to {action:?}")
            }
            ConfigError::DuplicateKey { name } => {
                write!(f, "key {name:?} is bound to more than one action")
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io { source, .. } => Some(source),
            ConfigError::Json(err) => Some(err),
            _ => None,
        }
    }
}
