//! Circular progress indicator.
//!
//! Two views of the same thing live here:
//!
//! - [`Geometry`] is the vector description of the ring: a fixed size and
//!   stroke width, from which radius and circumference follow, and a dash
//!   split of the circumference into filled and unfilled arc lengths. It is
//!   a pure function of the progress fraction.
//! - [`Model`] rasterises the ring onto a character grid for the terminal.
//!   The arc starts at 12 o'clock and fills clockwise, blending from the
//!   primary to the secondary color. Text can be overlaid in the hollow
//!   center.
//!
//! ```rust
//! use bubbletea_pomodoro::ring::Geometry;
//!
//! let g = Geometry::default().with_progress(0.25);
//! assert_eq!(g.radius, 152.0);
//! assert!((g.filled - g.circumference / 4.0).abs() < 1e-9);
//! ```

use crate::theme::Theme;
use lipgloss_extras::lipgloss::{self, blending::blend_1d};
use lipgloss_extras::prelude::*;
use std::f64::consts::PI;

/// Default outer size of the ring in pixels.
pub const DEFAULT_SIZE: f64 = 320.0;
/// Default stroke width in pixels.
pub const DEFAULT_STROKE: f64 = 16.0;

const DEFAULT_RADIUS_ROWS: usize = 7;
const DEFAULT_THICKNESS: f64 = 1.2;
const GRADIENT_STEPS: usize = 32;

/// Vector geometry of the ring for a given progress fraction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Geometry {
    pub size: f64,
    pub stroke: f64,
    /// Radius of the stroke's center line: `(size - stroke) / 2`.
    pub radius: f64,
    pub circumference: f64,
    /// Length of the filled arc.
    pub filled: f64,
    /// Length of the remaining, unfilled arc. Never negative.
    pub unfilled: f64,
}

impl Default for Geometry {
    fn default() -> Self {
        Self::new(DEFAULT_SIZE, DEFAULT_STROKE)
    }
}

impl Geometry {
    /// Geometry at zero progress for a ring of the given size and stroke.
    pub fn new(size: f64, stroke: f64) -> Self {
        let radius = ((size - stroke) / 2.0).max(0.0);
        let circumference = 2.0 * PI * radius;
        Self {
            size,
            stroke,
            radius,
            circumference,
            filled: 0.0,
            unfilled: circumference,
        }
    }

    /// Splits the circumference according to `progress`, clamped to [0, 1].
    pub fn with_progress(mut self, progress: f64) -> Self {
        let p = clamp_progress(progress);
        self.filled = self.circumference * p;
        self.unfilled = (self.circumference - self.filled).max(0.0);
        self
    }

    /// The `"filled unfilled"` dash pattern used to stroke the arc.
    pub fn dash_array(&self) -> String {
        format!("{:.2} {:.2}", self.filled, self.unfilled)
    }
}

fn clamp_progress(p: f64) -> f64 {
    if p.is_nan() {
        0.0
    } else {
        p.clamp(0.0, 1.0)
    }
}

/// What a grid cell shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    /// Outside the ring or in its hollow center.
    Blank,
    /// Part of the filled arc; carries the cell's angular fraction in
    /// gradient steps.
    Filled(usize),
    /// Part of the unfilled track.
    Track,
}

/// Terminal ring renderer.
#[derive(Debug, Clone)]
pub struct Model {
    /// Outer radius in rows. The grid is `2r + 1` rows by `2(2r + 1)` columns
    /// because terminal cells are about twice as tall as wide.
    pub radius: usize,
    /// Ring thickness in rows.
    pub thickness: f64,
    pub full: char,
    pub empty: char,
    pub gradient_start: String,
    pub gradient_end: String,
    pub track_color: String,
}

impl Default for Model {
    fn default() -> Self {
        Self::new(&Theme::default())
    }
}

impl Model {
    /// Creates a ring colored from the theme.
    pub fn new(theme: &Theme) -> Self {
        Self {
            radius: DEFAULT_RADIUS_ROWS,
            thickness: DEFAULT_THICKNESS,
            full: '█',
            empty: '░',
            gradient_start: theme.primary.clone(),
            gradient_end: theme.secondary.clone(),
            track_color: theme.track.clone(),
        }
    }

    pub fn with_radius(mut self, radius: usize) -> Self {
        self.radius = radius.max(1);
        self
    }

    pub fn height(&self) -> usize {
        2 * self.radius + 1
    }

    pub fn width(&self) -> usize {
        2 * self.height()
    }

    /// Distance from the center and clockwise angle from 12 o'clock as a
    /// fraction of a full turn, both measured in row units.
    fn polar(&self, row: usize, col: usize) -> (f64, f64) {
        let h = self.height() as f64;
        let w = self.width() as f64;
        let y = row as f64 + 0.5 - h / 2.0;
        let x = (col as f64 + 0.5 - w / 2.0) / 2.0;
        let dist = (x * x + y * y).sqrt();
        let mut angle = x.atan2(-y);
        if angle < 0.0 {
            angle += 2.0 * PI;
        }
        (dist, angle / (2.0 * PI))
    }

    fn outer_radius(&self) -> f64 {
        self.radius as f64 + 0.5
    }

    fn inner_radius(&self) -> f64 {
        (self.outer_radius() - self.thickness).max(0.0)
    }

    /// Classifies every cell of the grid for the given progress.
    pub fn cells(&self, progress: f64) -> Vec<Vec<Cell>> {
        let p = clamp_progress(progress);
        let outer = self.outer_radius();
        let inner = self.inner_radius();

        (0..self.height())
            .map(|row| {
                (0..self.width())
                    .map(|col| {
                        let (dist, turn) = self.polar(row, col);
                        if dist > outer || dist < inner {
                            Cell::Blank
                        } else if p > 0.0 && (turn < p || p >= 1.0) {
                            let step = ((turn * (GRADIENT_STEPS - 1) as f64).floor() as usize)
                                .min(GRADIENT_STEPS - 1);
                            Cell::Filled(step)
                        } else {
                            Cell::Track
                        }
                    })
                    .collect()
            })
            .collect()
    }

    /// Columns of the hollow center on a row, as a half-open range.
    fn hollow_span(&self, row: usize) -> Option<(usize, usize)> {
        let inner = self.inner_radius();
        let cols: Vec<usize> = (0..self.width())
            .filter(|&col| self.polar(row, col).0 < inner)
            .collect();
        match (cols.first(), cols.last()) {
            (Some(&a), Some(&b)) => Some((a, b + 1)),
            _ => None,
        }
    }

    /// Renders the ring without any center text.
    pub fn view(&self, progress: f64) -> String {
        self.view_with_center(progress, &[])
    }

    /// Renders the ring and writes `lines` centered in the hollow middle.
    ///
    /// Lines may carry ANSI styling. A line wider than the hollow on its row
    /// is left out.
    pub fn view_with_center(&self, progress: f64, lines: &[String]) -> String {
        let cells = self.cells(progress);
        let gradient = blend_1d(
            GRADIENT_STEPS,
            vec![
                lipgloss::Color::from(self.gradient_start.as_str()),
                lipgloss::Color::from(self.gradient_end.as_str()),
            ],
        );
        let full = self.full.to_string();
        let empty = Style::new()
            .foreground(lipgloss::Color::from(self.track_color.as_str()))
            .render(&self.empty.to_string());

        let first_text_row = (self.height() / 2).saturating_sub(lines.len() / 2);

        let mut out = Vec::with_capacity(cells.len());
        for (row, row_cells) in cells.iter().enumerate() {
            let overlay = row
                .checked_sub(first_text_row)
                .and_then(|i| lines.get(i))
                .and_then(|text| {
                    let (start, end) = self.hollow_span(row)?;
                    let text_width = lipgloss::width_visible(text);
                    (text_width <= end - start).then_some((start, end, text, text_width))
                });

            let mut line = String::new();
            let mut col = 0;
            while col < row_cells.len() {
                if let Some((start, end, text, text_width)) = overlay {
                    if col == start {
                        let left = (end - start - text_width) / 2;
                        let right = end - start - text_width - left;
                        line.push_str(&" ".repeat(left));
                        line.push_str(text);
                        line.push_str(&" ".repeat(right));
                        col = end;
                        continue;
                    }
                }
                match row_cells[col] {
                    Cell::Blank => line.push(' '),
                    Cell::Track => line.push_str(&empty),
                    Cell::Filled(step) => {
                        let color = gradient[step.min(gradient.len().saturating_sub(1))].clone();
                        line.push_str(&Style::new().foreground(color).render(&full));
                    }
                }
                col += 1;
            }
            out.push(line.trim_end().to_string());
        }
        out.join("\n")
    }
}
