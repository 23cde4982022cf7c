mod builtins;
mod types;

pub use builtins::default_theme;
pub use types::{Theme, ThemeRegistration};

/// Return the built-in themes bundled with the application, sorted by name.
#[must_use]
pub fn builtin_themes() -> Vec<ThemeRegistration> {
	builtins::registrations().to_vec()
}

/// Names of every built-in theme.
#[must_use]
pub fn names() -> Vec<String> {
	builtins::registrations()
		.iter()
		.map(|registration| registration.name.clone())
		.collect()
}

/// Look up a theme by name or alias, ignoring case.
#[must_use]
pub fn by_name(name: &str) -> Option<Theme> {
	let needle = name.trim();
	builtins::registrations()
		.iter()
		.find(|registration| registration.matches(needle))
		.map(|registration| registration.theme)
}

impl Default for Theme {
	fn default() -> Self {
		default_theme()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn bundled_themes_are_listed() {
		let names = names();
		assert!(names.iter().any(|name| name == "slate"));
		assert!(names.iter().any(|name| name == "solarized"));
		assert!(names.iter().any(|name| name == "light"));
	}

	#[test]
	fn lookup_accepts_aliases_and_case() {
		assert!(by_name("Slate").is_some());
		assert!(by_name("solarized-dark").is_some());
		assert!(by_name("does-not-exist").is_none());
	}
}
