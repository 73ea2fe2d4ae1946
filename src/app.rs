//! The application shell.
//!
//! [`App`] applies the theme, draws the title above the timer widget and a
//! help line below it, and handles the keys that belong to the program
//! rather than the widget: help toggling and quitting. Everything else is
//! forwarded to the widget.

use crate::config::{self, Config};
use crate::help;
use crate::key::{self, Binding};
use crate::theme::Theme;
use crate::timer::{self, CompletedMsg, TimerKeyMap};
use bubbletea_rs::{quit, Cmd, KeyMsg, Model as BubbleTeaModel, Msg, WindowSizeMsg};
use crossterm::event::{KeyCode, KeyModifiers};
use lipgloss_extras::lipgloss;
use tracing::{debug, info, warn};

/// Heading shown above the timer.
pub const TITLE: &str = "Pomodoro Timer";

/// Program-level key bindings.
#[derive(Debug, Clone)]
pub struct AppKeyMap {
    pub help: Binding,
    pub quit: Binding,
    pub force_quit: Binding,
}

impl Default for AppKeyMap {
    fn default() -> Self {
        Self {
            help: Binding::new(vec![KeyCode::Char('?')]).with_help("?", "more"),
            quit: Binding::new(vec![KeyCode::Char('q'), KeyCode::Esc]).with_help("q", "quit"),
            force_quit: Binding::new(vec![(KeyCode::Char('c'), KeyModifiers::CONTROL)])
                .with_help("ctrl+c", "force quit"),
        }
    }
}

/// Widget and program bindings combined for the help line.
struct HelpKeys<'a> {
    timer: &'a TimerKeyMap,
    app: &'a AppKeyMap,
}

impl key::KeyMap for HelpKeys<'_> {
    fn short_help(&self) -> Vec<&Binding> {
        let mut bindings = key::KeyMap::short_help(self.timer);
        bindings.extend([&self.app.help, &self.app.quit]);
        bindings
    }

    fn full_help(&self) -> Vec<Vec<&Binding>> {
        let mut columns = key::KeyMap::full_help(self.timer);
        columns.push(vec![&self.app.help, &self.app.quit, &self.app.force_quit]);
        columns
    }
}

/// Top-level model run by the `pomodoro` binary.
#[derive(Debug, Clone)]
pub struct App {
    pub timer: timer::Model,
    pub help: help::Model,
    pub keymap: AppKeyMap,
    pub theme: Theme,
    width: usize,
}

impl Default for App {
    fn default() -> Self {
        Self::with_config(&Config::default())
    }
}

impl App {
    /// Builds the app with the configured initial duration.
    pub fn with_config(config: &Config) -> Self {
        let theme = Theme::default();
        let mut timer = timer::Model::with_theme(theme.clone());
        if let Err(err) = timer.select_minutes(config.minutes) {
            warn!(%err, "ignoring configured duration");
        }
        Self {
            timer,
            help: help::Model::new().with_styles(help::Styles::from_theme(&theme)),
            keymap: AppKeyMap::default(),
            theme,
            width: 0,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    fn help_view(&self) -> String {
        let keys = HelpKeys {
            timer: &self.timer.keymap,
            app: &self.keymap,
        };
        self.help.view(&keys)
    }
}

/// Pads every line of `block` so the block sits in the middle of `width`
/// columns. Blocks wider than `width` are returned unchanged.
pub fn center_block(block: &str, width: usize) -> String {
    let block_width = block.lines().map(lipgloss::width_visible).max().unwrap_or(0);
    if width <= block_width {
        return block.to_string();
    }
    let pad = " ".repeat((width - block_width) / 2);
    block
        .lines()
        .map(|line| format!("{}{}", pad, line))
        .collect::<Vec<_>>()
        .join("\n")
}

impl BubbleTeaModel for App {
    fn init() -> (Self, Option<Cmd>) {
        let config = config::current();
        info!(minutes = config.minutes, "starting pomodoro");
        (Self::with_config(&config), None)
    }

    fn update(&mut self, msg: Msg) -> Option<Cmd> {
        if let Some(size) = msg.downcast_ref::<WindowSizeMsg>() {
            self.width = size.width as usize;
            self.help.width = self.width;
            return None;
        }

        if let Some(done) = msg.downcast_ref::<CompletedMsg>() {
            if done.id == self.timer.id() {
                info!(completed = done.completed, "pomodoro finished");
            }
            return None;
        }

        if let Some(key_msg) = msg.downcast_ref::<KeyMsg>() {
            if key::matches(key_msg, &[&self.keymap.quit, &self.keymap.force_quit]) {
                debug!("quit requested");
                return Some(quit());
            }
            if self.keymap.help.matches(key_msg) {
                self.help.show_all = !self.help.show_all;
                return None;
            }
        }

        self.timer.update(msg)
    }

    fn view(&self) -> String {
        let title = self.theme.title_style().render(TITLE);
        let timer = self.timer.view();
        let help = self.help_view();
        let body = lipgloss::join_vertical(
            lipgloss::CENTER,
            &[title.as_str(), timer.as_str(), "", help.as_str()],
        );
        center_block(&body, self.width)
    }
}
