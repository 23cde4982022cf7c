mod loader;

use std::sync::OnceLock;

use include_dir::{Dir, include_dir};
use loader::{BuiltinThemes, load_builtin_themes};
use ratatui::style::{Color, Modifier, Style};
use tracing::error;

use crate::style::theme::types::{Theme, ThemeRegistration};

static BUILTIN_THEME_DIR: Dir<'static> =
	include_dir!("$CARGO_MANIFEST_DIR/src/style/theme/builtins/themes");

/// Get the default built-in theme.
pub fn default_theme() -> Theme {
	builtin_themes().default_theme
}

pub(super) fn registrations() -> &'static [ThemeRegistration] {
	&builtin_themes().registrations
}

fn builtin_themes() -> &'static BuiltinThemes {
	static BUILTINS: OnceLock<BuiltinThemes> = OnceLock::new();
	BUILTINS.get_or_init(|| {
		load_builtin_themes(&BUILTIN_THEME_DIR).unwrap_or_else(|err| {
			error!(error = %format!("{err:#}"), "failed to load built-in themes");
			let theme = fallback_theme();
			BuiltinThemes {
				registrations: vec![ThemeRegistration::new("fallback", theme)],
				default_theme: theme,
			}
		})
	})
}

/// Plain ANSI theme used when the bundled definitions cannot be parsed.
fn fallback_theme() -> Theme {
	Theme {
		header: Style::new().fg(Color::Cyan),
		row_highlight: Style::new().add_modifier(Modifier::REVERSED),
		prompt: Style::new().fg(Color::White),
		empty: Style::new().fg(Color::DarkGray),
		highlight: Style::new().fg(Color::Yellow).add_modifier(Modifier::BOLD),
		active: Style::new().fg(Color::Green).add_modifier(Modifier::BOLD),
		notice: Style::new().fg(Color::Green),
	}
}
