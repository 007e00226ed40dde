use std::collections::HashMap;

use crossterm::event::KeyCode;
use log::debug;

use crate::config::{ConfigError, KeyBindings};
use crate::core::UserAction;

/// Turns key codes into actions using a fixed table built from `KeyBindings`.
#[derive(Debug, Clone)]
pub struct InputDispatcher {
    bindings: HashMap<KeyCode, UserAction>,
}

impl InputDispatcher {
    pub fn new(bindings: &KeyBindings) -> Result<Self, ConfigError> {
        let mut table = HashMap::new();
        for (action, names) in bindings.entries() {
            for name in names {
                let code = parse_key_name(name).ok_or_else(|| ConfigError::UnknownKey {
                    action,
                    name: name.clone(),
                })?;
                if table.insert(code, action).is_some() {
                    return Err(ConfigError::DuplicateKey { name: name.clone() });
                }
            }
        }
        debug!("{} keys bound", table.len());
        Ok(InputDispatcher { bindings: table })
    }

    /// Unbound keys map to `Continue`.
    pub fn dispatch(&self, code: KeyCode) -> UserAction {
        self.bindings
            .get(&code)
            .copied()
            .unwrap_or(UserAction::Continue)
    }
}

/// A single character names itself (`"w"`, `"W"`, `"?"`). Longer names are
/// special keys and are matched case-insensitively (`"Up"`, `"esc"`, `"F1"`).
pub fn parse_key_name(name: &str) -> Option<KeyCode> {
    let mut chars = name.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        return Some(KeyCode::Char(c));
    }

    let lower = name.to_ascii_lowercase();
    let code = match lower.as_str() {
        "up" => KeyCode::Up,
        "down" => KeyCode::Down,
        "left" => KeyCode::Left,
        "right" => KeyCode::Right,
        "esc" | "escape" => KeyCode::Esc,
        "enter" | "return" => KeyCode::Enter,
        "backspace" => KeyCode::Backspace,
        "tab" => KeyCode::Tab,
        "space" => KeyCode::Char(' '),
        "home" => KeyCode::Home,
        "end" => KeyCode::End,
        "pageup" => KeyCode::PageUp,
        "pagedown" => KeyCode::PageDown,
        "delete" => KeyCode::Delete,
        "insert" => KeyCode::Insert,
        other => {
            let number: u8 = other.strip_prefix('f')?.parse().ok()?;
            if !(1..=12).contains(&number) {
                return None;
            }
            KeyCode::F(number)
        }
    };
    Some(code)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::core::Direction;

    #[test]
    fn default_bindings_cover_letters_and_arrows() {
        let dispatcher = InputDispatcher::new(&KeyBindings::default()).unwrap();

        assert_eq!(dispatcher.dispatch(KeyCode::Char('w')), UserAction::Move(Direction::Up));
        assert_eq!(dispatcher.dispatch(KeyCode::Char('D')), UserAction::Move(Direction::Right));
        assert_eq!(dispatcher.dispatch(KeyCode::Left), UserAction::Move(Direction::Left));
        assert_eq!(dispatcher.dispatch(KeyCode::Down), UserAction::Move(Direction::Down));
        assert_eq!(dispatcher.dispatch(KeyCode::Backspace), UserAction::Undo);
        assert_eq!(dispatcher.dispatch(KeyCode::Esc), UserAction::Quit);
    }

    #[test]
    fn unbound_keys_continue() {
        let dispatcher = InputDispatcher::new(&KeyBindings::default()).unwrap();
        assert_eq!(dispatcher.dispatch(KeyCode::Char('x')), UserAction::Continue);
        assert_eq!(dispatcher.dispatch(KeyCode::F(5)), UserAction::Continue);
    }

    #[test]
    fn custom_bindings_replace_defaults() {
        let bindings = KeyBindings {
            up: vec!["k".into()],
            down: vec!["j".into()],
            left: vec!["h".into()],
            right: vec!["l".into()],
            undo: vec!["space".into()],
            quit: vec!["F10".into()],
        };
        let dispatcher = InputDispatcher::new(&bindings).unwrap();

        assert_eq!(dispatcher.dispatch(KeyCode::Char('k')), UserAction::Move(Direction::Up));
        assert_eq!(dispatcher.dispatch(KeyCode::Char(' ')), UserAction::Undo);
        assert_eq!(dispatcher.dispatch(KeyCode::F(10)), UserAction::Quit);
        assert_eq!(dispatcher.dispatch(KeyCode::Char('w')), UserAction::Continue);
    }

    #[test]
    fn unknown_key_names_are_rejected() {
        let bindings = KeyBindings {
            quit: vec!["Hyper".into()],
            ..KeyBindings::default()
        };
        let err = InputDispatcher::new(&bindings).unwrap_err();
        assert!(matches!(err, ConfigError::UnknownKey { action: UserAction::Quit, .. }));
    }

    #[test]
    fn a_key_bound_twice_is_rejected() {
        let bindings = KeyBindings {
            undo: vec!["q".into()],
            ..KeyBindings::default()
        };
        let err = InputDispatcher::new(&bindings).unwrap_err();
        assert!(matches!(err, ConfigError::DuplicateKey { name } if name == "q"));
    }

    #[test]
    fn key_names() {
        assert_eq!(parse_key_name("ESC"), Some(KeyCode::Esc));
        assert_eq!(parse_key_name("PageUp"), Some(KeyCode::PageUp));
        assert_eq!(parse_key_name("f12"), Some(KeyCode::F(12)));
        assert_eq!(parse_key_name("F13"), None);
        assert_eq!(parse_key_name(""), None);
        assert_eq!(parse_key_name("left arrow"), None);
    }
}
