//! The interactive finder application.
//!
//! [`App`] owns a [`icofz_core::Finder`] session plus the UI-only state around
//! it: the query input, which pane has focus, the grid cursor, and the screen
//! regions recorded while drawing for mouse hit-testing. Input handling lives
//! in `actions`, drawing in `render`.

mod actions;
mod grid;
mod render;
mod state;
#[cfg(test)]
mod tests;

pub(crate) use grid::GridState;
pub use state::{App, Focus, FinderOutcome};
