//! # Introduction
//!
//! sortty animates classic comparison sorts over an array of bars in the
//! terminal. Each algorithm is a resumable step producer; a single scheduler
//! replays its steps one frame at a time under user-controlled speed and
//! pause/resume, built with [ratatui](https://docs.rs/ratatui).
//!
//! ## Animation pipeline
//!
//! ```text
//! AnimationLoop → Scheduler → SortStepper::step → BarArray → render → Surface → TUI
//! ```
//!
//! 1. [`bars`]: the bar array model: randomize and resize.
//! 2. [`sorting`]: six algorithms as [`sorting::SortStepper`]s: insertion,
//!    selection, bubble, quick, merge and shell.
//! 3. [`render`]: pure mapping from `(bars, highlight)` to a
//!    [`render::DrawList`].
//! 4. [`engine`]: the [`engine::Scheduler`] pacing one session at a time and
//!    the [`engine::AnimationLoop`] that restarts cycles while running.
//! 5. [`config`]: command-line options.
//! 6. [`ui`]: ratatui-based TUI; not part of the stable library API.
//!
//! ## Timing
//!
//! The engine never reads a clock. Callers pass the time elapsed since
//! start-up into `poll`, which keeps every timing rule testable without
//! sleeping.

pub mod bars;
pub mod config;
pub mod engine;
pub mod render;
pub mod sorting;
pub mod ui;
