//! Terminal front-end for the icon finder.
//!
//! [`IconFinder`] assembles an [`App`] around a core
//! [`Finder`](icofz_core::Finder) session and runs it: a search prompt, a grid
//! of matching icon names, and a preview with the usage snippet and SVG
//! markup. Themes, the OSC 52 clipboard, and the event loop live here too.

mod app;
mod builder;
pub mod clipboard;
pub mod components;
mod config;
pub mod input;
mod runtime;
pub mod style;

pub use app::{App, FinderOutcome, Focus};
pub use builder::IconFinder;
pub use clipboard::TerminalClipboard;
pub use config::UiLabels;
pub use input::QueryInput;
pub use style::{StyleConfig, Theme, builtin_themes, default_theme};
