//! Type-safe key bindings.
//!
//! A [`Binding`] groups one or more key presses that trigger the same action
//! together with the help text shown for it. Components expose their bindings
//! through the [`KeyMap`] trait so a help line can be generated from them.
//!
//! ```rust
//! use rolodex_list::key::Binding;
//! use crossterm::event::{KeyCode, KeyModifiers};
//!
//! let up = Binding::new(vec![KeyCode::Up, KeyCode::Char('k')]).with_help("↑/k", "up");
//! let save = Binding::new(vec![(KeyCode::Char('s'), KeyModifiers::CONTROL)])
//!     .with_help("ctrl+s", "save");
//!
//! assert_eq!(up.help().key, "↑/k");
//! assert!(save.enabled());
//! ```

use bubbletea_rs::KeyMsg;
use crossterm::event::{KeyCode, KeyModifiers};

/// A single key press: a key code plus the modifiers that must be held.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyPress {
    /// The key.
    pub code: KeyCode,
    /// Modifiers that must be held. Shift is ignored for character keys
    /// because the terminal already reports the shifted character.
    pub modifiers: KeyModifiers,
}

impl From<KeyCode> for KeyPress {
    fn from(code: KeyCode) -> Self {
        Self {
            code,
            modifiers: KeyModifiers::NONE,
        }
    }
}

impl From<(KeyCode, KeyModifiers)> for KeyPress {
    fn from((code, modifiers): (KeyCode, KeyModifiers)) -> Self {
        Self { code, modifiers }
    }
}

impl KeyPress {
    fn matches(&self, msg: &KeyMsg) -> bool {
        if self.code != msg.key {
            return false;
        }
        let relevant = if matches!(msg.key, KeyCode::Char(_)) {
            msg.modifiers.difference(KeyModifiers::SHIFT)
        } else {
            msg.modifiers
        };
        relevant == self.modifiers
    }
}

/// Help text attached to a binding.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Help {
    /// Short label for the keys, e.g. `"↑/k"`.
    pub key: String,
    /// What the binding does, e.g. `"up"`.
    pub desc: String,
}

/// A set of key presses bound to one action.
#[derive(Debug, Clone)]
pub struct Binding {
    keys: Vec<KeyPress>,
    help: Help,
    enabled: bool,
}

impl Binding {
    /// Creates an enabled binding for the given key presses.
    pub fn new<K: Into<KeyPress>>(keys: Vec<K>) -> Self {
        Self {
            keys: keys.into_iter().map(Into::into).collect(),
            help: Help::default(),
            enabled: true,
        }
    }

    /// Sets the help text (builder pattern).
    pub fn with_help(mut self, key: &str, desc: &str) -> Self {
        self.help = Help {
            key: key.to_string(),
            desc: desc.to_string(),
        };
        self
    }

    /// Returns the help text.
    pub fn help(&self) -> &Help {
        &self.help
    }

    /// Returns the bound key presses.
    pub fn keys(&self) -> &[KeyPress] {
        &self.keys
    }

    /// Enables or disables the binding. Disabled bindings never match and
    /// are left out of generated help.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Returns whether the binding is enabled.
    pub fn enabled(&self) -> bool {
        self.enabled && !self.keys.is_empty()
    }

    /// Returns true if `msg` is one of this binding's key presses.
    pub fn matches(&self, msg: &KeyMsg) -> bool {
        self.enabled() && self.keys.iter().any(|k| k.matches(msg))
    }
}

/// Implemented by components that expose their key bindings for help views.
pub trait KeyMap {
    /// The most important bindings, for a one-line help.
    fn short_help(&self) -> Vec<&Binding>;

    /// All bindings grouped into columns.
    fn full_help(&self) -> Vec<Vec<&Binding>>;
}

/// Renders `"key desc • key desc"` for every enabled binding with help text.
pub fn help_line(bindings: &[&Binding], separator: &str) -> String {
    bindings
        .iter()
        .filter(|b| b.enabled() && !b.help().key.is_empty())
        .map(|b| format!("{} {}", b.help().key, b.help().desc))
        .collect::<Vec<_>>()
        .join(separator)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyMsg {
        KeyMsg {
            key: code,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn test_matches_any_bound_key() {
        let b = Binding::new(vec![KeyCode::Up, KeyCode::Char('k')]);
        assert!(b.matches(&key(KeyCode::Up)));
        assert!(b.matches(&key(KeyCode::Char('k'))));
        assert!(!b.matches(&key(KeyCode::Down)));
    }

    #[test]
    fn test_modifiers_must_match() {
        let b = Binding::new(vec![(KeyCode::Char('c'), KeyModifiers::CONTROL)]);
        assert!(!b.matches(&key(KeyCode::Char('c'))));
        assert!(b.matches(&KeyMsg {
            key: KeyCode::Char('c'),
            modifiers: KeyModifiers::CONTROL,
        }));
    }

    #[test]
    fn test_shift_ignored_for_chars() {
        let b = Binding::new(vec![KeyCode::Char('G')]);
        assert!(b.matches(&KeyMsg {
            key: KeyCode::Char('G'),
            modifiers: KeyModifiers::SHIFT,
        }));
    }

    #[test]
    fn test_disabled_binding() {
        let mut b = Binding::new(vec![KeyCode::Enter]).with_help("enter", "open");
        b.set_enabled(false);
        assert!(!b.matches(&key(KeyCode::Enter)));
        assert_eq!(help_line(&[&b], " • "), "");
    }

    #[test]
    fn test_help_line() {
        let up = Binding::new(vec![KeyCode::Up]).with_help("↑", "up");
        let down = Binding::new(vec![KeyCode::Down]).with_help("↓", "down");
        let silent = Binding::new(vec![KeyCode::Tab]);
        assert_eq!(help_line(&[&up, &silent, &down], " • "), "↑ up • ↓ down");
    }
}
