//! # bubbletea-pomodoro
//!
//! A Pomodoro countdown timer for the terminal, built as a
//! [bubbletea-rs](https://github.com/joshka/bubbletea-rs) component.
//!
//! Pick a session length, start and pause the countdown, reset it, and
//! watch a ring fill up around the clock. Each time the countdown reaches
//! zero the completed-session count goes up and the timer refills, paused.
//!
//! ## Components
//!
//! | Module | Role |
//! |--------|------|
//! | [`timer`] | The countdown widget: state machine, ticks, rendering |
//! | [`selector`] | The fixed menu of session lengths |
//! | [`ring`] | Circular progress geometry and its terminal rendering |
//! | [`app`] | The shell: title, timer, help line, quit handling |
//! | [`theme`] | Palette and styles |
//! | [`help`] | Key help line |
//! | [`key`] | Key bindings |
//! | [`config`] | Command-line options |
//!
//! ## Embedding the widget
//!
//! ```rust
//! use bubbletea_pomodoro::prelude::*;
//! use bubbletea_rs::{Cmd, Model as BubbleTeaModel, Msg};
//!
//! struct MyApp {
//!     timer: Timer,
//! }
//!
//! impl BubbleTeaModel for MyApp {
//!     fn init() -> (Self, Option<Cmd>) {
//!         (Self { timer: Timer::new() }, None)
//!     }
//!
//!     fn update(&mut self, msg: Msg) -> Option<Cmd> {
//!         if let Some(done) = msg.downcast_ref::<TimerCompletedMsg>() {
//!             if done.id == self.timer.id() {
//!                 // A session just finished.
//!             }
//!         }
//!         self.timer.update(msg)
//!     }
//!
//!     fn view(&self) -> String {
//!         self.timer.view()
//!     }
//! }
//! ```
//!
//! ## Driving it directly
//!
//! ```rust
//! use bubbletea_pomodoro::timer::Model;
//!
//! let mut timer = Model::new();
//! timer.select_minutes(5).unwrap();
//! assert_eq!(timer.clock(), "05:00");
//!
//! let _first_tick = timer.toggle();
//! assert!(timer.running());
//! timer.reset();
//! assert!(!timer.running());
//! ```

pub mod app;
pub mod config;
pub mod error;
pub mod help;
pub mod key;
pub mod ring;
pub mod selector;
pub mod theme;
pub mod timer;

pub use app::App;
pub use error::{Error, Result};
pub use ring::{Geometry as RingGeometry, Model as Ring};
pub use selector::{Selector, DEFAULT_MINUTES, DURATION_CHOICES};
pub use theme::Theme;
pub use timer::{
    format_clock, progress_fraction, CompletedMsg as TimerCompletedMsg, Model as Timer, Status,
    TickMsg as TimerTickMsg,
};

/// Common imports for embedding the timer.
pub mod prelude {
    pub use crate::key::{Binding, KeyMap};
    pub use crate::ring::{Geometry as RingGeometry, Model as Ring};
    pub use crate::selector::{Selector, DURATION_CHOICES};
    pub use crate::theme::Theme;
    pub use crate::timer::{
        CompletedMsg as TimerCompletedMsg, Model as Timer, Status, TickMsg as TimerTickMsg,
    };
}
