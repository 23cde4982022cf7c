use ratatui::style::{Color, Modifier, Style};

/// Styles for every themed element of the UI.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
	/// Borders, titles, and other chrome.
	pub header: Style,
	/// The grid cell under the cursor.
	pub row_highlight: Style,
	/// The search prompt.
	pub prompt: Style,
	/// Placeholders and muted text.
	pub empty: Style,
	/// Characters of an icon name matched by the keyword.
	pub highlight: Style,
	/// The active (picked) icon.
	pub active: Style,
	/// Transient notices such as "Copied!".
	pub notice: Style,
}

impl Theme {
	/// Style for placeholders and secondary text.
	#[must_use]
	pub fn empty_style(&self) -> Style {
		Style::new()
			.fg(self.empty.fg.unwrap_or(Color::DarkGray))
			.add_modifier(Modifier::ITALIC)
	}

	/// Border colour for a pane, brighter when it has focus.
	#[must_use]
	pub fn border_style(&self, focused: bool) -> Style {
		let style = Style::new().fg(self.header.fg.unwrap_or(Color::Reset));
		if focused {
			style.add_modifier(Modifier::BOLD)
		} else {
			style.add_modifier(Modifier::DIM)
		}
	}
}

/// A named theme and its aliases.
#[derive(Debug, Clone)]
pub struct ThemeRegistration {
	pub name: String,
	pub theme: Theme,
	pub aliases: Vec<String>,
}

impl ThemeRegistration {
	pub fn new(name: impl Into<String>, theme: Theme) -> Self {
		Self {
			name: name.into(),
			theme,
			aliases: Vec::new(),
		}
	}

	pub fn alias(mut self, alias: impl Into<String>) -> Self {
		self.aliases.push(alias.into());
		self
	}

	/// Whether `name` refers to this theme, by name or alias, ignoring case.
	#[must_use]
	pub fn matches(&self, name: &str) -> bool {
		self.name.eq_ignore_ascii_case(name)
			|| self
				.aliases
				.iter()
				.any(|alias| alias.eq_ignore_ascii_case(name))
	}
}
