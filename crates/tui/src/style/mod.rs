//! Visual styling for the finder.
//!
//! Themes are colour schemes loaded from bundled TOML definitions.
//! [`StyleConfig`] wraps the active theme so that further knobs can sit next
//! to it without touching every render function.

pub mod theme;

pub use theme::{Theme, ThemeRegistration, builtin_themes, by_name, default_theme, names};

/// Styling options applied to the UI.
#[derive(Clone, Debug, Default)]
pub struct StyleConfig {
	/// The active theme.
	pub theme: Theme,
}

impl StyleConfig {
	#[must_use]
	pub fn with_theme(theme: Theme) -> Self {
		Self { theme }
	}
}
