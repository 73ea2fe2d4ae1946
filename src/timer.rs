//! Pomodoro countdown widget.
//!
//! The widget owns every piece of session state: the selected duration, the
//! seconds left, whether it is running, and how many sessions have run to
//! zero. It follows the bubbletea pattern of `update()` consuming messages
//! and returning an optional follow-up command, with `view()` as a pure
//! function of the state.
//!
//! # State machine
//!
//! The countdown is either [`Status::Paused`] or [`Status::Running`]. While
//! running, a tick arrives once per second and takes one second off. When
//! the count reaches zero the session is complete: the completed count goes
//! up by one, the countdown refills to the full duration and the widget
//! pauses. Reset and duration changes also refill and pause, but never touch
//! the completed count.
//!
//! # Tick cancellation
//!
//! Each scheduled tick carries the widget's `id` and the `tag` current at
//! the moment it was scheduled. Every transition into or out of running
//! bumps the tag, so a tick that was already in flight when the user paused,
//! reset, or changed the duration is ignored on arrival. At most one live
//! tick chain exists per widget.
//!
//! ```rust
//! use bubbletea_pomodoro::timer::Model;
//!
//! let mut timer = Model::new();
//! assert_eq!(timer.clock(), "25:00");
//!
//! timer.select_minutes(5).unwrap();
//! let _tick = timer.start();
//! for _ in 0..300 {
//!     let msg = timer.tick_msg();
//!     timer.update(Box::new(msg));
//! }
//! assert_eq!(timer.completed(), 1);
//! assert_eq!(timer.remaining_seconds(), 300);
//! assert!(!timer.running());
//! ```

use crate::error::Result;
use crate::key::{self, Binding};
use crate::ring;
use crate::selector::{self, Selector, DURATION_CHOICES};
use crate::theme::Theme;
use bubbletea_rs::{tick as bubbletea_tick, Cmd, KeyMsg, Model as BubbleTeaModel, Msg};
use crossterm::event::KeyCode;
use lipgloss_extras::lipgloss;
use std::fmt;
use std::sync::atomic::{AtomicI64, Ordering};
use std::time::Duration;
use tracing::{debug, info};

/// Time between two ticks of a running countdown.
pub const TICK_INTERVAL: Duration = Duration::from_secs(1);

static LAST_ID: AtomicI64 = AtomicI64::new(0);

fn next_id() -> i64 {
    LAST_ID.fetch_add(1, Ordering::SeqCst) + 1
}

/// Seconds in a session of `minutes`, never less than one minute.
pub fn total_seconds_for(minutes: u32) -> u32 {
    minutes.max(1).saturating_mul(60)
}

/// Formats seconds as zero-padded `MM:SS`.
pub fn format_clock(seconds: u32) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

/// Elapsed share of a session: `1 - remaining / total`, within [0, 1].
pub fn progress_fraction(remaining: u32, total: u32) -> f64 {
    if total == 0 {
        return 0.0;
    }
    (1.0 - remaining as f64 / total as f64).clamp(0.0, 1.0)
}

/// One scheduled countdown step.
///
/// Only the widget whose id and current tag match acts on it.
#[derive(Debug, Clone)]
pub struct TickMsg {
    pub id: i64,
    tag: i64,
}

/// Sent once each time a session runs to zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletedMsg {
    pub id: i64,
    /// Completed count including this session.
    pub completed: u64,
}

/// Whether the countdown is ticking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Paused,
    Running,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Paused => write!(f, "Paused"),
            Status::Running => write!(f, "Running"),
        }
    }
}

/// Key bindings handled by the widget itself.
#[derive(Debug, Clone)]
pub struct TimerKeyMap {
    pub toggle: Binding,
    pub reset: Binding,
    pub longer: Binding,
    pub shorter: Binding,
    pub pick: Binding,
}

impl Default for TimerKeyMap {
    fn default() -> Self {
        Self {
            toggle: Binding::new(vec![KeyCode::Char(' '), KeyCode::Enter, KeyCode::Char('p')])
                .with_help("space", "start/pause"),
            reset: Binding::new(vec![KeyCode::Char('r')]).with_help("r", "reset"),
            longer: Binding::new(vec![KeyCode::Right, KeyCode::Char('l'), KeyCode::Char('+')])
                .with_help("→/l", "longer"),
            shorter: Binding::new(vec![KeyCode::Left, KeyCode::Char('h'), KeyCode::Char('-')])
                .with_help("←/h", "shorter"),
            pick: Binding::new(
                (1..=DURATION_CHOICES.len())
                    .filter_map(|d| char::from_digit(d as u32, 10))
                    .map(KeyCode::Char)
                    .collect::<Vec<_>>(),
            )
            .with_help("1-8", "pick duration"),
        }
    }
}

impl key::KeyMap for TimerKeyMap {
    fn short_help(&self) -> Vec<&Binding> {
        vec![&self.toggle, &self.reset, &self.shorter, &self.longer]
    }

    fn full_help(&self) -> Vec<Vec<&Binding>> {
        vec![
            vec![&self.toggle, &self.reset],
            vec![&self.shorter, &self.longer, &self.pick],
        ]
    }
}

/// The countdown widget.
#[derive(Debug, Clone)]
pub struct Model {
    id: i64,
    tag: i64,
    selector: Selector,
    remaining: u32,
    running: bool,
    completed: u64,
    /// Key bindings the widget reacts to.
    pub keymap: TimerKeyMap,
    /// Terminal ring drawn around the clock.
    pub ring: ring::Model,
    /// Colors and styles for the clock, status and controls.
    pub theme: Theme,
}

impl Default for Model {
    fn default() -> Self {
        Self::with_theme(Theme::default())
    }
}

impl Model {
    /// A paused 25 minute countdown with nothing completed.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_theme(theme: Theme) -> Self {
        let selector = Selector::new();
        Self {
            id: next_id(),
            tag: 0,
            selector,
            remaining: total_seconds_for(selector.minutes()),
            running: false,
            completed: 0,
            keymap: TimerKeyMap::default(),
            ring: ring::Model::new(&theme),
            theme,
        }
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn minutes(&self) -> u32 {
        self.selector.minutes()
    }

    pub fn selector(&self) -> &Selector {
        &self.selector
    }

    pub fn total_seconds(&self) -> u32 {
        total_seconds_for(self.minutes())
    }

    pub fn remaining_seconds(&self) -> u32 {
        self.remaining
    }

    pub fn running(&self) -> bool {
        self.running
    }

    pub fn status(&self) -> Status {
        if self.running {
            Status::Running
        } else {
            Status::Paused
        }
    }

    /// Sessions that have run to zero since the widget was created.
    pub fn completed(&self) -> u64 {
        self.completed
    }

    /// The remaining time as `MM:SS`.
    pub fn clock(&self) -> String {
        format_clock(self.remaining)
    }

    pub fn progress(&self) -> f64 {
        progress_fraction(self.remaining, self.total_seconds())
    }

    /// Vector ring geometry for the current progress.
    pub fn geometry(&self) -> ring::Geometry {
        ring::Geometry::default().with_progress(self.progress())
    }

    /// Builds the tick the widget expects next. Delivering it to `update`
    /// advances a running countdown by one second.
    pub fn tick_msg(&self) -> TickMsg {
        TickMsg {
            id: self.id,
            tag: self.tag,
        }
    }

    fn tick(&self) -> Cmd {
        let msg = self.tick_msg();
        bubbletea_tick(TICK_INTERVAL, move |_| Box::new(msg.clone()) as Msg)
    }

    fn completed_cmd(&self) -> Cmd {
        let msg = CompletedMsg {
            id: self.id,
            completed: self.completed,
        };
        bubbletea_tick(Duration::from_nanos(1), move |_| Box::new(msg.clone()) as Msg)
    }

    /// Invalidates any tick already scheduled.
    fn cancel_tick(&mut self) {
        self.tag += 1;
    }

    /// Leaves running, if needed, and refills the countdown.
    fn rewind(&mut self) {
        if self.running {
            self.cancel_tick();
            self.running = false;
        }
        self.remaining = self.total_seconds();
    }

    /// Starts the countdown. Returns the first tick, or `None` if it was
    /// already running.
    pub fn start(&mut self) -> Option<Cmd> {
        if self.running {
            return None;
        }
        self.cancel_tick();
        self.running = true;
        debug!(id = self.id, remaining = self.remaining, "timer started");
        Some(self.tick())
    }

    /// Pauses the countdown, keeping the remaining time.
    pub fn pause(&mut self) {
        if !self.running {
            return;
        }
        self.cancel_tick();
        self.running = false;
        debug!(id = self.id, remaining = self.remaining, "timer paused");
    }

    /// Starts when paused, pauses when running.
    pub fn toggle(&mut self) -> Option<Cmd> {
        if self.running {
            self.pause();
            None
        } else {
            self.start()
        }
    }

    /// Refills the countdown and pauses. The completed count is kept.
    pub fn reset(&mut self) {
        self.rewind();
        debug!(id = self.id, remaining = self.remaining, "timer reset");
    }

    /// Sets the session length. Values below one minute count as one minute.
    ///
    /// A different length pauses and refills the countdown, even
    /// mid-session. Setting the current length changes nothing.
    pub fn set_minutes(&mut self, minutes: u32) {
        self.apply_selection(Selector::custom(minutes));
    }

    fn apply_selection(&mut self, selector: Selector) {
        if selector == self.selector {
            return;
        }
        self.selector = selector;
        self.rewind();
        debug!(id = self.id, minutes = self.minutes(), "duration changed");
    }

    /// Selects one of the menu durations.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedDuration`](crate::Error::UnsupportedDuration)
    /// if `minutes` is not on the menu; the widget is left untouched.
    pub fn select_minutes(&mut self, minutes: u32) -> Result<()> {
        let selector = Selector::with_minutes(minutes)?;
        self.apply_selection(selector);
        Ok(())
    }

    /// Moves to the next longer menu duration.
    pub fn select_next(&mut self) {
        let mut selector = self.selector;
        if selector.next() {
            self.apply_selection(selector);
        }
    }

    /// Moves to the next shorter menu duration.
    pub fn select_prev(&mut self) {
        let mut selector = self.selector;
        if selector.prev() {
            self.apply_selection(selector);
        }
    }

    /// Selects the menu duration at `index`, ignoring indices off the menu.
    pub fn select_index(&mut self, index: usize) {
        let mut selector = self.selector;
        if selector.select_index(index) {
            self.apply_selection(selector);
        }
    }

    fn on_tick(&mut self, tick: &TickMsg) -> Option<Cmd> {
        if !self.running || tick.id != self.id || tick.tag != self.tag {
            return None;
        }

        self.remaining = self.remaining.saturating_sub(1);
        if self.remaining > 0 {
            return Some(self.tick());
        }

        self.completed += 1;
        self.rewind();
        info!(id = self.id, completed = self.completed, "session completed");
        Some(self.completed_cmd())
    }

    fn on_key(&mut self, key_msg: &KeyMsg) -> Option<Cmd> {
        if self.keymap.toggle.matches(key_msg) {
            return self.toggle();
        }
        if self.keymap.reset.matches(key_msg) {
            self.reset();
        } else if self.keymap.longer.matches(key_msg) {
            self.select_next();
        } else if self.keymap.shorter.matches(key_msg) {
            self.select_prev();
        } else if self.keymap.pick.matches(key_msg) {
            if let KeyCode::Char(c) = key_msg.key {
                if let Some(d) = c.to_digit(10) {
                    self.select_index((d as usize).saturating_sub(1));
                }
            }
        }
        None
    }

    /// Handles ticks and the widget's key bindings.
    pub fn update(&mut self, msg: Msg) -> Option<Cmd> {
        if let Some(tick) = msg.downcast_ref::<TickMsg>() {
            return self.on_tick(tick);
        }
        if let Some(key_msg) = msg.downcast_ref::<KeyMsg>() {
            return self.on_key(key_msg);
        }
        None
    }

    /// The duration control, e.g. `‹ 25 min ›`. Arrows vanish at the ends.
    pub fn selector_view(&self) -> String {
        let left = if self.selector.is_first() { " " } else { "‹" };
        let right = if self.selector.is_last() { " " } else { "›" };
        self.theme.selector_style().render(&format!(
            "{} {} {}",
            left,
            selector::label(self.minutes()),
            right
        ))
    }

    /// Start/pause and reset buttons followed by the duration control.
    pub fn controls_view(&self) -> String {
        let toggle = if self.running { "⏸ pause" } else { "▶ start" };
        format!(
            "{} {}  {}",
            self.theme.primary_button_style().render(toggle),
            self.theme.outlined_button_style().render("↺ reset"),
            self.selector_view()
        )
    }

    pub fn completed_view(&self) -> String {
        format!(
            "{} {}",
            self.theme.muted_style().render("Completed:"),
            self.theme.count_style().render(&self.completed.to_string())
        )
    }

    /// Ring with the clock and status in its middle, then the controls and
    /// completed count.
    pub fn view(&self) -> String {
        let center = vec![
            self.theme.clock_style().render(&self.clock()),
            self.theme.status_style().render(&self.status().to_string()),
        ];
        let ring = self.ring.view_with_center(self.progress(), &center);
        let controls = self.controls_view();
        let completed = self.completed_view();
        lipgloss::join_vertical(
            lipgloss::CENTER,
            &[ring.as_str(), "", controls.as_str(), "", completed.as_str()],
        )
    }
}

impl BubbleTeaModel for Model {
    fn init() -> (Self, Option<Cmd>) {
        (Self::new(), None)
    }

    fn update(&mut self, msg: Msg) -> Option<Cmd> {
        self.update(msg)
    }

    fn view(&self) -> String {
        self.view()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crossterm::event::KeyModifiers;

    fn tick(timer: &mut Model) -> Option<Cmd> {
        let msg = timer.tick_msg();
        timer.update(Box::new(msg))
    }

    fn ticks(timer: &mut Model, n: u32) {
        for _ in 0..n {
            tick(timer);
        }
    }

    fn press(timer: &mut Model, code: KeyCode) -> Option<Cmd> {
        timer.update(Box::new(KeyMsg {
            key: code,
            modifiers: KeyModifiers::NONE,
        }))
    }

    #[test]
    fn test_defaults() {
        let timer = Model::new();
        assert_eq!(timer.minutes(), 25);
        assert_eq!(timer.total_seconds(), 1500);
        assert_eq!(timer.remaining_seconds(), 1500);
        assert!(!timer.running());
        assert_eq!(timer.status(), Status::Paused);
        assert_eq!(timer.completed(), 0);
        assert_eq!(timer.progress(), 0.0);
    }

    #[test]
    fn test_unique_ids() {
        assert_ne!(Model::new().id(), Model::new().id());
    }

    #[test]
    fn test_select_every_choice() {
        for &d in DURATION_CHOICES.iter() {
            let mut timer = Model::new();
            timer.select_minutes(if d == 5 { 10 } else { 5 }).unwrap();
            timer.start();
            timer.select_minutes(d).unwrap();
            assert_eq!(timer.remaining_seconds(), d * 60);
            assert!(!timer.running());
        }
    }

    #[test]
    fn test_picking_current_duration_keeps_session() {
        let mut timer = Model::new();
        timer.start();
        ticks(&mut timer, 100);

        // '5' picks the fifth choice, 25 min, which is already selected.
        press(&mut timer, KeyCode::Char('5'));
        assert!(timer.running());
        assert_eq!(timer.remaining_seconds(), 1400);

        timer.select_minutes(25).unwrap();
        timer.set_minutes(25);
        assert!(timer.running());
        assert_eq!(timer.remaining_seconds(), 1400);

        // The tick chain is still live.
        assert!(tick(&mut timer).is_some());
        assert_eq!(timer.remaining_seconds(), 1399);
    }

    #[test]
    fn test_off_menu_duration_steps_to_neighbours() {
        let mut timer = Model::new();
        timer.set_minutes(7);
        assert_eq!(timer.minutes(), 7);
        assert_eq!(timer.selector().minutes(), 7);
        let out = lipgloss::strip_ansi(&timer.selector_view());
        assert!(out.contains("‹ 7 min ›"));

        timer.select_next();
        assert_eq!(timer.minutes(), 10);
        assert_eq!(timer.remaining_seconds(), 600);

        timer.set_minutes(7);
        timer.select_prev();
        assert_eq!(timer.minutes(), 5);

        timer.set_minutes(0);
        let out = lipgloss::strip_ansi(&timer.selector_view());
        assert!(!out.contains('‹'));
        timer.select_next();
        assert_eq!(timer.minutes(), 5);
    }

    #[test]
    fn test_select_unsupported_leaves_state() {
        let mut timer = Model::new();
        timer.start();
        ticks(&mut timer, 3);
        assert!(matches!(
            timer.select_minutes(7),
            Err(Error::UnsupportedDuration(7))
        ));
        assert!(timer.running());
        assert_eq!(timer.remaining_seconds(), 1497);
    }

    #[test]
    fn test_set_minutes_clamps_to_one_minute() {
        let mut timer = Model::new();
        timer.set_minutes(0);
        assert_eq!(timer.minutes(), 1);
        assert_eq!(timer.total_seconds(), 60);
        assert_eq!(timer.remaining_seconds(), 60);
    }

    #[test]
    fn test_ticks_count_down() {
        let mut timer = Model::new();
        assert!(timer.start().is_some());
        for n in 1..=100 {
            assert!(tick(&mut timer).is_some());
            assert_eq!(timer.remaining_seconds(), 1500 - n);
            assert!(timer.running());
        }
        assert_eq!(timer.clock(), "23:20");
    }

    #[test]
    fn test_start_when_running_is_noop() {
        let mut timer = Model::new();
        timer.start();
        let msg = timer.tick_msg();
        assert!(timer.start().is_none());
        // The chain scheduled by the first start is still the live one.
        assert!(timer.update(Box::new(msg)).is_some());
        assert_eq!(timer.remaining_seconds(), 1499);
    }

    #[test]
    fn test_completion_happens_once() {
        let mut timer = Model::new();
        timer.set_minutes(1);
        timer.start();
        ticks(&mut timer, 59);
        assert_eq!(timer.remaining_seconds(), 1);
        assert_eq!(timer.completed(), 0);

        let last = timer.tick_msg();
        assert!(timer.update(Box::new(last.clone())).is_some());
        assert_eq!(timer.completed(), 1);
        assert_eq!(timer.remaining_seconds(), 60);
        assert!(!timer.running());

        // Redelivering the same tick or rendering again changes nothing.
        assert!(timer.update(Box::new(last)).is_none());
        let _ = timer.view();
        let _ = timer.view();
        assert_eq!(timer.completed(), 1);
        assert_eq!(timer.remaining_seconds(), 60);
    }

    #[test]
    fn test_tick_ignored_while_paused() {
        let mut timer = Model::new();
        assert!(tick(&mut timer).is_none());
        assert_eq!(timer.remaining_seconds(), 1500);
    }

    #[test]
    fn test_stale_tick_after_pause_is_ignored() {
        let mut timer = Model::new();
        timer.start();
        let in_flight = timer.tick_msg();
        timer.pause();
        timer.start();
        assert!(timer.update(Box::new(in_flight)).is_none());
        assert_eq!(timer.remaining_seconds(), 1500);
        assert!(tick(&mut timer).is_some());
        assert_eq!(timer.remaining_seconds(), 1499);
    }

    #[test]
    fn test_stale_tick_after_reset_and_duration_change() {
        let mut timer = Model::new();
        timer.start();
        let before_reset = timer.tick_msg();
        timer.reset();
        timer.start();
        assert!(timer.update(Box::new(before_reset)).is_none());

        let before_change = timer.tick_msg();
        timer.select_next();
        timer.start();
        assert!(timer.update(Box::new(before_change)).is_none());
        assert_eq!(timer.remaining_seconds(), 1800);
    }

    #[test]
    fn test_tick_for_other_timer_is_ignored() {
        let mut a = Model::new();
        let mut b = Model::new();
        a.start();
        b.start();
        let from_b = b.tick_msg();
        assert!(a.update(Box::new(from_b)).is_none());
        assert_eq!(a.remaining_seconds(), 1500);
    }

    #[test]
    fn test_reset_keeps_completed() {
        let mut timer = Model::new();
        timer.set_minutes(1);
        timer.start();
        ticks(&mut timer, 60);
        assert_eq!(timer.completed(), 1);
        timer.start();
        ticks(&mut timer, 25);
        timer.reset();
        assert_eq!(timer.remaining_seconds(), 60);
        assert!(!timer.running());
        assert_eq!(timer.completed(), 1);
        assert_eq!(timer.progress(), 0.0);
    }

    #[test]
    fn test_duration_change_while_running() {
        let mut timer = Model::new();
        timer.start();
        ticks(&mut timer, 42);
        timer.select_prev();
        assert_eq!(timer.minutes(), 20);
        assert!(!timer.running());
        assert_eq!(timer.remaining_seconds(), 1200);
        assert_eq!(timer.completed(), 0);
        assert_eq!(timer.progress(), 0.0);
    }

    #[test]
    fn test_progress_bounds() {
        let mut timer = Model::new();
        timer.select_minutes(5).unwrap();
        timer.start();
        let mut last = timer.progress();
        for _ in 0..299 {
            tick(&mut timer);
            let p = timer.progress();
            assert!((0.0..=1.0).contains(&p));
            assert!(p > last);
            last = p;
        }
        assert!((last - 299.0 / 300.0).abs() < 1e-12);
    }

    #[test]
    fn test_end_to_end_session() {
        let mut timer = Model::new();
        timer.select_minutes(5).unwrap();
        assert_eq!(timer.remaining_seconds(), 300);

        timer.start();
        ticks(&mut timer, 300);
        assert_eq!(timer.completed(), 1);
        assert_eq!(timer.remaining_seconds(), 300);
        assert!(!timer.running());

        timer.start();
        ticks(&mut timer, 10);
        assert_eq!(timer.remaining_seconds(), 290);
        timer.reset();
        assert_eq!(timer.remaining_seconds(), 300);
        assert!(!timer.running());
        assert_eq!(timer.completed(), 1);
    }

    #[test]
    fn test_keys_drive_the_widget() {
        let mut timer = Model::new();
        assert!(press(&mut timer, KeyCode::Char(' ')).is_some());
        assert!(timer.running());
        tick(&mut timer);
        assert!(press(&mut timer, KeyCode::Char(' ')).is_none());
        assert!(!timer.running());
        assert_eq!(timer.remaining_seconds(), 1499);

        press(&mut timer, KeyCode::Char('r'));
        assert_eq!(timer.remaining_seconds(), 1500);

        press(&mut timer, KeyCode::Right);
        assert_eq!(timer.minutes(), 30);
        press(&mut timer, KeyCode::Char('h'));
        press(&mut timer, KeyCode::Char('-'));
        assert_eq!(timer.minutes(), 20);

        press(&mut timer, KeyCode::Char('1'));
        assert_eq!(timer.minutes(), 5);
        press(&mut timer, KeyCode::Char('8'));
        assert_eq!(timer.minutes(), 60);
        press(&mut timer, KeyCode::Char('9'));
        assert_eq!(timer.minutes(), 60);
    }

    #[test]
    fn test_format_clock() {
        assert_eq!(format_clock(0), "00:00");
        assert_eq!(format_clock(59), "00:59");
        assert_eq!(format_clock(300), "05:00");
        assert_eq!(format_clock(3599), "59:59");
        assert_eq!(format_clock(3600), "60:00");
    }

    #[test]
    fn test_progress_fraction() {
        assert_eq!(progress_fraction(300, 300), 0.0);
        assert_eq!(progress_fraction(0, 300), 1.0);
        assert_eq!(progress_fraction(150, 300), 0.5);
        assert_eq!(progress_fraction(10, 0), 0.0);
        assert_eq!(progress_fraction(400, 300), 0.0);
    }

    #[test]
    fn test_geometry_follows_progress() {
        let mut timer = Model::new();
        timer.select_minutes(5).unwrap();
        timer.start();
        ticks(&mut timer, 150);
        let g = timer.geometry();
        assert!((g.filled - g.circumference / 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_view_contents() {
        let mut timer = Model::new();
        let out = lipgloss::strip_ansi(&timer.view());
        assert!(out.contains("25:00"));
        assert!(out.contains("Paused"));
        assert!(out.contains("▶ start"));
        assert!(out.contains("‹ 25 min ›"));
        assert!(out.contains("Completed: 0"));

        timer.start();
        let out = lipgloss::strip_ansi(&timer.view());
        assert!(out.contains("Running"));
        assert!(out.contains("⏸ pause"));
    }

    #[test]
    fn test_selector_view_hides_arrow_at_ends() {
        let mut timer = Model::new();
        timer.select_minutes(5).unwrap();
        let out = lipgloss::strip_ansi(&timer.selector_view());
        assert!(!out.contains('‹'));
        assert!(out.contains('›'));
        timer.select_minutes(60).unwrap();
        let out = lipgloss::strip_ansi(&timer.selector_view());
        assert!(out.contains('‹'));
        assert!(!out.contains('›'));
    }
}
