use std::borrow::Cow;

use anyhow::{Context, Result, bail};
use include_dir::{Dir, File};
use ratatui::style::{Color, Modifier, Style};
use serde::Deserialize;

use crate::style::theme::types::{Theme, ThemeRegistration};

pub(super) struct BuiltinThemes {
	pub(super) registrations: Vec<ThemeRegistration>,
	pub(super) default_theme: Theme,
}

#[derive(Debug, Deserialize)]
struct ThemeFile {
	name: String,
	#[serde(default)]
	aliases: Vec<String>,
	#[serde(default)]
	default: bool,
	styles: ThemeStyles,
}

#[derive(Debug, Deserialize)]
struct ThemeStyles {
	header: StyleSpec,
	row_highlight: StyleSpec,
	prompt: StyleSpec,
	empty: StyleSpec,
	highlight: StyleSpec,
	active: StyleSpec,
	notice: StyleSpec,
}

impl ThemeStyles {
	fn into_theme(self, context: &str) -> Result<Theme> {
		let style = |spec: &StyleSpec, field: &str| spec.to_style(&format!("{context}.{field}"));
		Ok(Theme {
			header: style(&self.header, "header")?,
			row_highlight: style(&self.row_highlight, "row_highlight")?,
			prompt: style(&self.prompt, "prompt")?,
			empty: style(&self.empty, "empty")?,
			highlight: style(&self.highlight, "highlight")?,
			active: style(&self.active, "active")?,
			notice: style(&self.notice, "notice")?,
		})
	}
}

#[derive(Debug, Default, Deserialize)]
struct StyleSpec {
	#[serde(default)]
	fg: Option<String>,
	#[serde(default)]
	bg: Option<String>,
	#[serde(default)]
	modifiers: Vec<String>,
}

impl StyleSpec {
	fn to_style(&self, context: &str) -> Result<Style> {
		let mut style = Style::new();

		if let Some(fg) = &self.fg {
			let color = parse_color(fg)
				.with_context(|| format!("{context}: invalid foreground colour `{fg}`"))?;
			style = style.fg(color);
		}

		if let Some(bg) = &self.bg {
			let color = parse_color(bg)
				.with_context(|| format!("{context}: invalid background colour `{bg}`"))?;
			style = style.bg(color);
		}

		for modifier in &self.modifiers {
			let value = parse_modifier(modifier)
				.with_context(|| format!("{context}: invalid modifier `{modifier}`"))?;
			style = style.add_modifier(value);
		}

		Ok(style)
	}
}

pub(super) fn load_builtin_themes(dir: &Dir) -> Result<BuiltinThemes> {
	let mut registrations = Vec::new();
	let mut default: Option<(Theme, String)> = None;

	let mut files: Vec<_> = dir.files().collect();
	files.sort_by(|a, b| a.path().cmp(b.path()));

	for file in files {
		let (registration, is_default) = parse_theme_file(file)?;

		if is_default {
			if let Some((_, existing)) = &default {
				bail!(
					"multiple built-in themes are marked as default (`{existing}` and `{}`)",
					registration.name
				);
			}
			default = Some((registration.theme, registration.name.clone()));
		}

		registrations.push(registration);
	}

	let Some(first) = registrations.first() else {
		bail!("no built-in theme definitions were found");
	};
	let default_theme = default.map_or(first.theme, |(theme, _)| theme);

	Ok(BuiltinThemes {
		registrations,
		default_theme,
	})
}

fn parse_theme_file(file: &File) -> Result<(ThemeRegistration, bool)> {
	let path = file.path();
	let contents = file
		.contents_utf8()
		.with_context(|| format!("{path:?} is not valid UTF-8"))?;
	parse_theme_str(contents, &format!("{path:?}"))
}

fn parse_theme_str(contents: &str, context: &str) -> Result<(ThemeRegistration, bool)> {
	let file: ThemeFile = toml::from_str(contents)
		.with_context(|| format!("failed to parse theme definition in {context}"))?;

	let theme = file.styles.into_theme(&format!("{context}.styles"))?;
	let registration = file
		.aliases
		.into_iter()
		.map(|alias| alias.trim().to_string())
		.filter(|alias| !alias.is_empty())
		.fold(ThemeRegistration::new(file.name, theme), |registration, alias| {
			registration.alias(alias)
		});

	Ok((registration, file.default))
}

fn parse_color(input: &str) -> Result<Color> {
	let value = input.trim();

	if let Some(hex) = value.strip_prefix('#') {
		return parse_hex_colour(hex);
	}

	if let Some(body) = value.strip_prefix("rgb(").and_then(|s| s.strip_suffix(')')) {
		return parse_rgb_triplet(body);
	}

	if let Ok(index) = value.parse::<u8>() {
		return Ok(Color::Indexed(index));
	}

	match normalise_key(value).as_ref() {
		"reset" | "none" | "default" => Ok(Color::Reset),
		"black" => Ok(Color::Black),
		"red" => Ok(Color::Red),
		"green" => Ok(Color::Green),
		"yellow" => Ok(Color::Yellow),
		"blue" => Ok(Color::Blue),
		"magenta" => Ok(Color::Magenta),
		"cyan" => Ok(Color::Cyan),
		"gray" | "grey" => Ok(Color::Gray),
		"dark_gray" | "dark_grey" => Ok(Color::DarkGray),
		"white" => Ok(Color::White),
		other => bail!("unknown colour `{other}`"),
	}
}

fn parse_hex_colour(hex: &str) -> Result<Color> {
	let expanded = match hex.len() {
		3 => Cow::Owned(hex.chars().flat_map(|ch| [ch, ch]).collect::<String>()),
		6 => Cow::Borrowed(hex),
		_ => bail!("hex colours must be 3 or 6 characters long"),
	};

	let component = |range: std::ops::Range<usize>| {
		expanded
			.get(range)
			.and_then(|digits| u8::from_str_radix(digits, 16).ok())
			.with_context(|| format!("invalid hex colour `#{hex}`"))
	};

	Ok(Color::Rgb(component(0..2)?, component(2..4)?, component(4..6)?))
}

fn parse_rgb_triplet(body: &str) -> Result<Color> {
	let components: Vec<_> = body.split(',').map(str::trim).collect();
	let [r, g, b] = components.as_slice() else {
		bail!(
			"expected three components for rgb() colour, found {}",
			components.len()
		);
	};

	let parse = |value: &str| {
		value
			.parse::<u8>()
			.with_context(|| format!("invalid component `{value}` in rgb() colour"))
	};
	Ok(Color::Rgb(parse(r)?, parse(g)?, parse(b)?))
}

fn parse_modifier(input: &str) -> Result<Modifier> {
	match normalise_key(input).as_ref() {
		"bold" => Ok(Modifier::BOLD),
		"dim" => Ok(Modifier::DIM),
		"italic" => Ok(Modifier::ITALIC),
		"underline" | "underlined" => Ok(Modifier::UNDERLINED),
		"reversed" | "reverse" => Ok(Modifier::REVERSED),
		"crossed_out" | "strikethrough" => Ok(Modifier::CROSSED_OUT),
		other => bail!("unknown modifier `{other}`"),
	}
}

fn normalise_key(value: &str) -> String {
	value
		.trim()
		.to_ascii_lowercase()
		.chars()
		.map(|ch| match ch {
			'-' | ' ' => '_',
			other => other,
		})
		.collect()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn colours_accept_hex_rgb_and_names() {
		assert_eq!(parse_color("#fff").unwrap(), Color::Rgb(255, 255, 255));
		assert_eq!(parse_color("#3858e9").unwrap(), Color::Rgb(0x38, 0x58, 0xe9));
		assert_eq!(parse_color("rgb(1, 2, 3)").unwrap(), Color::Rgb(1, 2, 3));
		assert_eq!(parse_color("Dark-Grey").unwrap(), Color::DarkGray);
		assert_eq!(parse_color("42").unwrap(), Color::Indexed(42));
		assert!(parse_color("#12345").is_err());
		assert!(parse_color("chartreuse").is_err());
	}

	#[test]
	fn theme_file_parses_with_aliases() {
		let source = r##"
name = "test"
aliases = ["t", " "]

[styles.header]
fg = "cyan"
[styles.row_highlight]
bg = "#222"
[styles.prompt]
[styles.empty]
[styles.highlight]
modifiers = ["bold"]
[styles.active]
[styles.notice]
fg = "green"
"##;
		let (registration, is_default) = parse_theme_str(source, "test").unwrap();
		assert!(!is_default);
		assert_eq!(registration.aliases, vec!["t"]);
		assert_eq!(registration.theme.header.fg, Some(Color::Cyan));
		assert!(registration.theme.highlight.add_modifier.contains(Modifier::BOLD));
	}

	#[test]
	fn unknown_modifier_is_reported_with_context() {
		let source = r#"
name = "broken"
[styles.header]
modifiers = ["sparkly"]
[styles.row_highlight]
[styles.prompt]
[styles.empty]
[styles.highlight]
[styles.active]
[styles.notice]
"#;
		let error = parse_theme_str(source, "broken").unwrap_err();
		assert!(format!("{error:#}").contains("header"));
	}
}
