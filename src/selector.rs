//! The duration selector.
//!
//! Session lengths come from a fixed menu of minute values. The UI only ever
//! moves between menu entries, so the timer never sees an invalid duration
//! from key input. Programmatic callers may still set an off-menu length;
//! the selector then sits between two entries and stepping moves to the
//! nearest choice in that direction.

use crate::error::{Error, Result};

/// Minute values offered to the user, in display order.
pub const DURATION_CHOICES: [u32; 8] = [5, 10, 15, 20, 25, 30, 45, 60];

/// Session length selected at startup.
pub const DEFAULT_MINUTES: u32 = 25;

/// The selected session length, positioned against [`DURATION_CHOICES`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selector {
    minutes: u32,
}

impl Default for Selector {
    fn default() -> Self {
        Self {
            minutes: DEFAULT_MINUTES,
        }
    }
}

impl Selector {
    /// Creates a selector on [`DEFAULT_MINUTES`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a selector on the menu entry `minutes`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedDuration`] if `minutes` is not one of the
    /// choices.
    pub fn with_minutes(minutes: u32) -> Result<Self> {
        index_of(minutes)
            .map(|_| Self { minutes })
            .ok_or(Error::UnsupportedDuration(minutes))
    }

    /// Creates a selector on any length, clamped to at least one minute.
    pub fn custom(minutes: u32) -> Self {
        Self {
            minutes: minutes.max(1),
        }
    }

    /// The currently selected session length.
    pub fn minutes(&self) -> u32 {
        self.minutes
    }

    /// Position of the selection within [`DURATION_CHOICES`], or `None` for
    /// an off-menu length.
    pub fn index(&self) -> Option<usize> {
        index_of(self.minutes)
    }

    /// Moves to the shortest choice longer than the current length.
    /// Returns whether the selection changed.
    pub fn next(&mut self) -> bool {
        match DURATION_CHOICES.iter().copied().find(|&m| m > self.minutes) {
            Some(m) => self.set(m),
            None => false,
        }
    }

    /// Moves to the longest choice shorter than the current length.
    pub fn prev(&mut self) -> bool {
        match DURATION_CHOICES.iter().rev().copied().find(|&m| m < self.minutes) {
            Some(m) => self.set(m),
            None => false,
        }
    }

    /// Jumps to the choice at `index`. Out-of-range indices and the current
    /// selection are ignored.
    pub fn select_index(&mut self, index: usize) -> bool {
        match DURATION_CHOICES.get(index) {
            Some(&m) => self.set(m),
            None => false,
        }
    }

    fn set(&mut self, minutes: u32) -> bool {
        if minutes == self.minutes {
            return false;
        }
        self.minutes = minutes;
        true
    }

    /// No shorter choice exists.
    pub fn is_first(&self) -> bool {
        DURATION_CHOICES.iter().all(|&m| m >= self.minutes)
    }

    /// No longer choice exists.
    pub fn is_last(&self) -> bool {
        DURATION_CHOICES.iter().all(|&m| m <= self.minutes)
    }
}

fn index_of(minutes: u32) -> Option<usize> {
    DURATION_CHOICES.iter().position(|&m| m == minutes)
}

/// Menu label for a duration, e.g. `"25 min"`.
pub fn label(minutes: u32) -> String {
    format!("{} min", minutes)
}

/// Parses a command-line minute value, accepting only the menu choices.
pub fn parse_minutes(s: &str) -> std::result::Result<u32, String> {
    let minutes: u32 = s
        .trim()
        .parse()
        .map_err(|_| format!("`{}` is not a whole number of minutes", s))?;
    Selector::with_minutes(minutes)
        .map(|sel| sel.minutes())
        .map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_25() {
        let sel = Selector::new();
        assert_eq!(sel.minutes(), 25);
        assert_eq!(sel.index(), Some(4));
    }

    #[test]
    fn test_with_minutes_accepts_every_choice() {
        for &m in DURATION_CHOICES.iter() {
            assert_eq!(Selector::with_minutes(m).unwrap().minutes(), m);
        }
    }

    #[test]
    fn test_with_minutes_rejects_others() {
        for m in [0, 1, 7, 26, 90] {
            assert!(matches!(
                Selector::with_minutes(m),
                Err(Error::UnsupportedDuration(x)) if x == m
            ));
        }
    }

    #[test]
    fn test_next_and_prev_clamp() {
        let mut sel = Selector::with_minutes(60).unwrap();
        assert!(sel.is_last());
        assert!(!sel.next());
        assert_eq!(sel.minutes(), 60);
        assert!(sel.prev());
        assert_eq!(sel.minutes(), 45);

        let mut sel = Selector::with_minutes(5).unwrap();
        assert!(sel.is_first());
        assert!(!sel.prev());
        assert_eq!(sel.minutes(), 5);
        assert!(sel.next());
        assert_eq!(sel.minutes(), 10);
    }

    #[test]
    fn test_select_index() {
        let mut sel = Selector::new();
        assert!(sel.select_index(0));
        assert_eq!(sel.minutes(), 5);
        assert!(!sel.select_index(0));
        assert!(!sel.select_index(8));
        assert_eq!(sel.minutes(), 5);
    }

    #[test]
    fn test_select_current_index_is_noop() {
        let mut sel = Selector::new();
        assert!(!sel.select_index(4));
        assert_eq!(sel.minutes(), 25);
    }

    #[test]
    fn test_custom_steps_to_neighbouring_choices() {
        let sel = Selector::custom(7);
        assert_eq!(sel.minutes(), 7);
        assert_eq!(sel.index(), None);
        assert!(!sel.is_first());
        assert!(!sel.is_last());

        let mut up = sel;
        assert!(up.next());
        assert_eq!(up.minutes(), 10);
        let mut down = sel;
        assert!(down.prev());
        assert_eq!(down.minutes(), 5);
    }

    #[test]
    fn test_custom_outside_menu_range() {
        let mut sel = Selector::custom(0);
        assert_eq!(sel.minutes(), 1);
        assert!(sel.is_first());
        assert!(!sel.prev());
        assert!(sel.next());
        assert_eq!(sel.minutes(), 5);

        let mut sel = Selector::custom(90);
        assert!(sel.is_last());
        assert!(!sel.next());
        assert!(sel.prev());
        assert_eq!(sel.minutes(), 60);
    }

    #[test]
    fn test_labels() {
        assert_eq!(label(5), "5 min");
        assert_eq!(label(60), "60 min");
    }

    #[test]
    fn test_parse_minutes() {
        assert_eq!(parse_minutes("45"), Ok(45));
        assert_eq!(parse_minutes(" 5 "), Ok(5));
        assert!(parse_minutes("abc").is_err());
        assert!(parse_minutes("26").unwrap_err().contains("unsupported duration"));
    }
}
