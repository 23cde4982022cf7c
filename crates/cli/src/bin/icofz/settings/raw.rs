use std::env;
use std::path::PathBuf;

use anyhow::Result;
use icofz_core::DEFAULT_ICON_SIZE;
use serde::Deserialize;

use super::resolved::{ConfigSources, ResolvedConfig, SettingSource};
use crate::cli::CliArgs;

/// The configuration file representation before CLI overrides and
/// validation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct RawConfig {
	pub(super) catalog: CatalogSection,
	pub(super) ui: UiSection,
	pub(super) export: ExportSection,
	pub(super) log: LogSection,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct CatalogSection {
	pub(super) icons_dir: Option<PathBuf>,
	pub(super) builtin: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct UiSection {
	pub(super) initial_query: Option<String>,
	pub(super) theme: Option<String>,
	pub(super) title: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct ExportSection {
	pub(super) directory: Option<PathBuf>,
	pub(super) size: Option<u16>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct LogSection {
	pub(super) file: Option<PathBuf>,
	pub(super) level: Option<String>,
}

impl RawConfig {
	/// Apply CLI flags on top of the merged file and environment values.
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		override_with(&mut self.catalog.icons_dir, &cli.icons_dir);
		override_with(&mut self.catalog.builtin, &cli.builtin);
		override_with(&mut self.ui.initial_query, &cli.initial_query);
		override_with(&mut self.ui.theme, &cli.theme);
		override_with(&mut self.ui.title, &cli.title);
		override_with(&mut self.export.directory, &cli.download_dir);
		override_with(&mut self.export.size, &cli.size);
		override_with(&mut self.log.file, &cli.log_file);
	}

	/// Fill defaults and validate, producing a [`ResolvedConfig`].
	pub(super) fn resolve(self, cli: &CliArgs) -> Result<ResolvedConfig> {
		let sources = ConfigSources {
			icons_dir: detect_source(
				cli.icons_dir.is_some(),
				self.catalog.icons_dir.is_some(),
				"ICOFZ__CATALOG__ICONS_DIR",
				"--icons-dir",
				"catalog.icons_dir",
			),
			theme: detect_source(
				cli.theme.is_some(),
				self.ui.theme.is_some(),
				"ICOFZ__UI__THEME",
				"--theme",
				"ui.theme",
			),
			size: detect_source(
				cli.size.is_some(),
				self.export.size.is_some(),
				"ICOFZ__EXPORT__SIZE",
				"--size",
				"export.size",
			),
		};

		let config = ResolvedConfig {
			icons_dir: self.catalog.icons_dir,
			builtin: self.catalog.builtin.unwrap_or(true),
			initial_query: self.ui.initial_query.unwrap_or_default(),
			theme: self.ui.theme.filter(|theme| !theme.trim().is_empty()),
			title: self.ui.title.filter(|title| !title.trim().is_empty()),
			download_dir: self.export.directory,
			snippet_size: self.export.size.unwrap_or(DEFAULT_ICON_SIZE),
			log_file: self.log.file,
			log_level: self.log.level,
		};

		config.validate(&sources)?;
		Ok(config)
	}
}

fn override_with<T: Clone>(target: &mut Option<T>, value: &Option<T>) {
	if let Some(value) = value {
		*target = Some(value.clone());
	}
}

fn detect_source(
	cli_present: bool,
	value_present: bool,
	env_var: &'static str,
	cli_flag: &'static str,
	key: &'static str,
) -> Option<SettingSource> {
	if !value_present {
		return None;
	}

	if cli_present {
		return Some(SettingSource::CliFlag(cli_flag));
	}

	if env::var_os(env_var).is_some() {
		return Some(SettingSource::Environment(env_var));
	}

	Some(SettingSource::ConfigKey(key))
}
