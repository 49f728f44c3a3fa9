//! TUI pane rendering modules
//!
//! # Pane Modules
//!
//! - [`bars`]: Bar chart of the current frame, one colour per role
//! - [`stats`]: Comparisons, swaps, elapsed time and session settings
//! - [`info`]: Algorithm description, legend and pseudocode
//! - [`status`]: Status bar with keybindings and playback state
//!
//! Each pane module exports a primary `render_*` function and, where the
//! pane needs more than a couple of inputs, a `*RenderData` struct.

pub mod bars;
pub mod info;
pub mod stats;
pub mod status;

pub use bars::{render_bars_pane, BarsRenderData};
pub use info::render_info_pane;
pub use stats::{render_stats_pane, StatsRenderData};
pub use status::{render_status_bar, StatusRenderData};
