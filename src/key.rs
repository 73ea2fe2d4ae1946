//! Key bindings shared by the timer widget and the application shell.
//!
//! A [`Binding`] pairs one or more key presses with the short help text shown
//! in the help line. Components group their bindings in a struct and
//! implement [`KeyMap`] so the [`help`](crate::help) component can render
//! them.
//!
//! ```rust
//! use bubbletea_pomodoro::key::Binding;
//! use crossterm::event::{KeyCode, KeyModifiers};
//!
//! let toggle = Binding::new(vec![KeyCode::Char(' ')]).with_help("space", "start/pause");
//! let quit = Binding::new(vec![(KeyCode::Char('c'), KeyModifiers::CONTROL)])
//!     .with_help("ctrl+c", "force quit");
//! assert_eq!(toggle.help().key, "space");
//! assert!(quit.enabled());
//! ```

use bubbletea_rs::KeyMsg;
use crossterm::event::{KeyCode, KeyModifiers};

/// A single key press: a key code plus the modifiers that must be held.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyPress {
    /// The key itself.
    pub code: KeyCode,
    /// Required modifiers. `KeyModifiers::NONE` matches a bare key; shift is
    /// ignored for character keys because it is already part of the char.
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
    fn matches(&self, code: KeyCode, modifiers: KeyModifiers) -> bool {
        if self.code != code {
            return false;
        }
        let relevant = match code {
            KeyCode::Char(_) => modifiers.difference(KeyModifiers::SHIFT),
            _ => modifiers,
        };
        relevant == self.modifiers
    }
}

/// Help text attached to a binding.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Help {
    /// How the key is written in the help line, e.g. `"space"`.
    pub key: String,
    /// What the key does, e.g. `"start/pause"`.
    pub desc: String,
}

/// A set of keys that trigger the same action.
#[derive(Debug, Clone)]
pub struct Binding {
    keys: Vec<KeyPress>,
    help: Help,
    enabled: bool,
}

impl Binding {
    /// Creates an enabled binding for the given keys with empty help text.
    pub fn new<K: Into<KeyPress>>(keys: Vec<K>) -> Self {
        Self {
            keys: keys.into_iter().map(Into::into).collect(),
            help: Help::default(),
            enabled: true,
        }
    }

    /// Sets the help key label and description.
    pub fn with_help(mut self, key: impl Into<String>, desc: impl Into<String>) -> Self {
        self.help = Help {
            key: key.into(),
            desc: desc.into(),
        };
        self
    }

    /// Returns the binding's help text.
    pub fn help(&self) -> &Help {
        &self.help
    }

    /// Returns the key presses this binding reacts to.
    pub fn keys(&self) -> &[KeyPress] {
        &self.keys
    }

    /// Whether the binding currently reacts to input and shows up in help.
    pub fn enabled(&self) -> bool {
        self.enabled && !self.keys.is_empty()
    }

    /// Enables or disables the binding.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Reports whether a key message triggers this binding.
    pub fn matches(&self, key_msg: &KeyMsg) -> bool {
        self.enabled()
            && self
                .keys
                .iter()
                .any(|k| k.matches(key_msg.key, key_msg.modifiers))
    }
}

/// Returns true if the key message matches any of the given bindings.
pub fn matches(key_msg: &KeyMsg, bindings: &[&Binding]) -> bool {
    bindings.iter().any(|b| b.matches(key_msg))
}

/// Groups bindings for help rendering.
pub trait KeyMap {
    /// Bindings shown in the single-line help view.
    fn short_help(&self) -> Vec<&Binding>;
    /// Bindings shown in the expanded view, one inner vec per column.
    fn full_help(&self) -> Vec<Vec<&Binding>>;
}
