//! Terminal user interface built on [ratatui](https://github.com/ratatui-org/ratatui).
//!
//! The UI is organized into three layers:
//!
//! - **[`app`]**: application state, keyboard event loop, the timeline fed to
//!   the animation loop
//! - **[`panes`]**: stateless render functions for each visible pane (bar
//!   canvas, algorithm picker, status bar)
//! - **[`theme`]**: centralized color palette used by all panes
//!
//! The entry point for consumers is [`App`]: construct it with an
//! [`AnimationLoop`] and call [`App::run`] to start the event loop.
//!
//! [`AnimationLoop`]: crate::engine::AnimationLoop
//! [`App::run`]: app::App::run

pub mod app;
pub mod panes;
pub mod theme;

pub use app::App;
