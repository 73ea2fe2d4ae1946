//! Palette and styles for the pomodoro screen.
//!
//! The theme is a plain value: the shell builds one at startup and hands it
//! to the widgets, which derive their lipgloss styles from it. Nothing here
//! holds state.

use lipgloss_extras::lipgloss::{self, AdaptiveColor};
use lipgloss_extras::prelude::*;

/// Default primary accent (violet).
pub const PRIMARY: &str = "#7C4DFF";
/// Default secondary accent (deep purple), the far end of the ring gradient.
pub const SECONDARY: &str = "#6A1B9A";
/// Default color of the unfilled part of the ring.
pub const TRACK: &str = "#F3E8FF";

const MUTED: AdaptiveColor = AdaptiveColor {
    Light: "#909090",
    Dark: "#626262",
};
const FAINT: AdaptiveColor = AdaptiveColor {
    Light: "#B2B2B2",
    Dark: "#4A4A4A",
};

/// Colors shared by every component on screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    pub primary: String,
    pub secondary: String,
    pub track: String,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            primary: PRIMARY.to_string(),
            secondary: SECONDARY.to_string(),
            track: TRACK.to_string(),
        }
    }
}

impl Theme {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title_style(&self) -> Style {
        Style::new()
            .foreground(lipgloss::Color::from(self.primary.as_str()))
            .bold(true)
            .padding(1, 0, 1, 0)
    }

    pub fn clock_style(&self) -> Style {
        Style::new().bold(true)
    }

    pub fn status_style(&self) -> Style {
        self.muted_style()
    }

    /// Style of the primary (start/pause) button.
    pub fn primary_button_style(&self) -> Style {
        Style::new()
            .foreground(lipgloss::Color::from(self.primary.as_str()))
            .bold(true)
            .padding(0, 1, 0, 1)
    }

    /// Style of outlined secondary buttons such as reset.
    pub fn outlined_button_style(&self) -> Style {
        Style::new()
            .foreground(lipgloss::Color::from(self.secondary.as_str()))
            .padding(0, 1, 0, 1)
    }

    pub fn selector_style(&self) -> Style {
        Style::new().foreground(lipgloss::Color::from(self.primary.as_str()))
    }

    pub fn count_style(&self) -> Style {
        Style::new()
            .foreground(lipgloss::Color::from(self.secondary.as_str()))
            .bold(true)
    }

    pub fn muted_style(&self) -> Style {
        Style::new().foreground(MUTED)
    }

    pub fn faint_style(&self) -> Style {
        Style::new().foreground(FAINT)
    }
}
