//! TUI pane rendering modules
//!
//! Each pane is a stateless render function; all state lives in
//! [`crate::ui::App`].
//!
//! # Pane Modules
//!
//! - [`bars`]: the drawing surface, painting the latest draw list on a canvas
//! - [`algorithms`]: the algorithm picker with the selected and running entry
//! - [`status`]: status bar with keybindings and animation state

pub mod algorithms;
pub mod bars;
pub mod status;

// Re-export render functions for convenience
pub use algorithms::render_algorithms_pane;
pub use bars::render_bars_pane;
pub use status::{render_status_bar, StatusRenderData};
