//! UI building blocks shared by the renderer and the event handlers.

pub mod grid;
pub mod preview;
pub mod prompt;
pub mod scrollbar;
pub mod status;

pub use grid::{GridCell, GridContext, GridLayout, grid_inner, render_grid};
pub use preview::{PreviewAreas, PreviewContext, render_preview};
pub use prompt::{InputContext, PromptAreas, render_input};
pub use scrollbar::{ScrollMetrics, point_in_rect, render_scrollbar};
pub use status::render_status;
