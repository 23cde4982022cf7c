use std::fmt::{self, Write};
use std::path::PathBuf;

use thiserror::Error;

/// Application-ready configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ResolvedConfig {
	pub(crate) icons_dir: Option<PathBuf>,
	pub(crate) builtin: bool,
	pub(crate) initial_query: String,
	pub(crate) theme: Option<String>,
	pub(crate) title: Option<String>,
	/// Where exports go; the user's download directory when unset.
	pub(crate) download_dir: Option<PathBuf>,
	pub(crate) snippet_size: u16,
	pub(crate) log_file: Option<PathBuf>,
	pub(crate) log_level: Option<String>,
}

/// Where a setting's value came from, for error messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum SettingSource {
	CliFlag(&'static str),
	Environment(&'static str),
	ConfigKey(&'static str),
}

impl fmt::Display for SettingSource {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::CliFlag(flag) => write!(f, "CLI flag `{flag}`"),
			Self::Environment(var) => write!(f, "environment variable `{var}`"),
			Self::ConfigKey(key) => write!(f, "configuration key `{key}`"),
		}
	}
}

#[derive(Debug, Default, Clone)]
pub(crate) struct ConfigSources {
	pub(crate) icons_dir: Option<SettingSource>,
	pub(crate) theme: Option<SettingSource>,
	pub(crate) size: Option<SettingSource>,
}

#[derive(Debug, Error)]
#[error("invalid value for {key} from {origin}: {reason} (value: {value})")]
pub(crate) struct ConfigError {
	pub(crate) key: &'static str,
	pub(crate) value: String,
	pub(crate) origin: SettingSource,
	pub(crate) reason: String,
}

impl ConfigError {
	fn invalid(
		key: &'static str,
		value: impl Into<String>,
		origin: Option<SettingSource>,
		reason: impl Into<String>,
	) -> Self {
		Self {
			key,
			value: value.into(),
			origin: origin.unwrap_or(SettingSource::ConfigKey(key)),
			reason: reason.into(),
		}
	}
}

impl ResolvedConfig {
	pub(super) fn validate(&self, sources: &ConfigSources) -> Result<(), ConfigError> {
		if self.snippet_size == 0 {
			return Err(ConfigError::invalid(
				"export.size",
				"0",
				sources.size.clone(),
				"must be greater than zero",
			));
		}

		if let Some(theme) = &self.theme
			&& icofz_tui::style::by_name(theme).is_none()
		{
			return Err(ConfigError::invalid(
				"ui.theme",
				theme.clone(),
				sources.theme.clone(),
				format!(
					"unknown theme, expected one of: {}",
					icofz_tui::style::names().join(", ")
				),
			));
		}

		if let Some(dir) = &self.icons_dir
			&& !dir.is_dir()
		{
			return Err(ConfigError::invalid(
				"catalog.icons_dir",
				dir.display().to_string(),
				sources.icons_dir.clone(),
				"must be an existing directory",
			));
		}

		if !self.builtin && self.icons_dir.is_none() {
			return Err(ConfigError::invalid(
				"catalog.builtin",
				"false",
				None,
				"no icon source left; set catalog.icons_dir or enable the bundled icons",
			));
		}

		Ok(())
	}

	/// Print a human readable summary of the effective configuration.
	pub(crate) fn print_summary(&self) {
		print!("{}", self.summary());
	}

	fn summary(&self) -> String {
		let mut out = String::from("Effective configuration:\n");
		let _ = writeln!(
			out,
			"  Icons directory: {}",
			self.icons_dir
				.as_ref()
				.map_or_else(|| "(none)".to_string(), |dir| dir.display().to_string())
		);
		let _ = writeln!(out, "  Bundled icons: {}", bool_to_word(self.builtin));
		let _ = writeln!(
			out,
			"  UI theme: {}",
			self.theme.as_deref().unwrap_or("(default)")
		);
		if let Some(title) = &self.title {
			let _ = writeln!(out, "  Title: {title}");
		}
		if !self.initial_query.is_empty() {
			let _ = writeln!(out, "  Initial query: {}", self.initial_query);
		}
		let _ = writeln!(
			out,
			"  Download directory: {}",
			self.download_dir.as_ref().map_or_else(
				|| "(user download directory)".to_string(),
				|dir| dir.display().to_string()
			)
		);
		let _ = writeln!(out, "  Snippet size: {}", self.snippet_size);
		if let Some(file) = &self.log_file {
			let _ = writeln!(out, "  Log file: {}", file.display());
		}
		out
	}
}

fn bool_to_word(value: bool) -> &'static str {
	if value { "yes" } else { "no" }
}

#[cfg(test)]
mod tests {
	use super::*;

	fn config() -> ResolvedConfig {
		ResolvedConfig {
			icons_dir: None,
			builtin: true,
			initial_query: String::new(),
			theme: None,
			title: None,
			download_dir: None,
			snippet_size: 24,
			log_file: None,
			log_level: None,
		}
	}

	#[test]
	fn zero_size_is_rejected_with_its_origin() {
		let config = ResolvedConfig {
			snippet_size: 0,
			..config()
		};
		let sources = ConfigSources {
			size: Some(SettingSource::CliFlag("--size")),
			..ConfigSources::default()
		};

		let err = config.validate(&sources).unwrap_err();
		assert_eq!(err.key, "export.size");
		let message = err.to_string();
		assert!(message.contains("value: 0"));
		assert!(message.contains("CLI flag `--size`"));
	}

	#[test]
	fn unknown_theme_lists_alternatives() {
		let config = ResolvedConfig {
			theme: Some("neon".into()),
			..config()
		};
		let err = config.validate(&ConfigSources::default()).unwrap_err();
		assert_eq!(err.key, "ui.theme");
		assert!(err.reason.contains("slate"));
		assert!(err.to_string().contains("configuration key `ui.theme`"));
	}

	#[test]
	fn some_icon_source_is_required() {
		let config = ResolvedConfig {
			builtin: false,
			..config()
		};
		let err = config.validate(&ConfigSources::default()).unwrap_err();
		assert_eq!(err.key, "catalog.builtin");
	}

	#[test]
	fn missing_icons_dir_is_rejected() {
		let config = ResolvedConfig {
			icons_dir: Some(PathBuf::from("/definitely/not/here")),
			..config()
		};
		let err = config.validate(&ConfigSources::default()).unwrap_err();
		assert_eq!(err.key, "catalog.icons_dir");
	}

	#[test]
	fn summary_mentions_effective_values() {
		let summary = ResolvedConfig {
			theme: Some("light".into()),
			snippet_size: 32,
			..config()
		}
		.summary();
		assert!(summary.contains("UI theme: light"));
		assert!(summary.contains("Snippet size: 32"));
		assert!(summary.contains("Bundled icons: yes"));
	}
}
