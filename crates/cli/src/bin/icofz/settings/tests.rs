use std::fs;
use std::path::PathBuf;

use clap::Parser;

use super::load;
use super::sources::default_config_files;
use crate::cli::CliArgs;

fn write_config(dir: &tempfile::TempDir, contents: &str) -> PathBuf {
	let path = dir.path().join("icofz.toml");
	fs::write(&path, contents).expect("write config");
	path
}

#[test]
fn default_files_include_current_directory_variants() {
	let files = default_config_files();
	assert!(files.iter().any(|path| path.ends_with(".icofz.toml")));
	assert!(files.iter().any(|path| path.ends_with("icofz.toml")));
}

#[test]
fn file_values_are_loaded() {
	let dir = tempfile::tempdir().expect("tempdir");
	let icons = dir.path().join("icons");
	fs::create_dir(&icons).expect("icons dir");
	let path = write_config(
		&dir,
		&format!(
			"[catalog]\nicons_dir = {icons:?}\nbuiltin = false\n\n[ui]\ntheme = \"light\"\ntitle = \"My Icons\"\n\n[export]\nsize = 32\n"
		),
	);

	let cli = CliArgs::parse_from(["icofz", "--no-config", "--config", path.to_str().expect("utf8")]);
	let config = load(&cli).expect("load");
	assert_eq!(config.icons_dir.as_deref(), Some(icons.as_path()));
	assert!(!config.builtin);
	assert_eq!(config.theme.as_deref(), Some("light"));
	assert_eq!(config.title.as_deref(), Some("My Icons"));
	assert_eq!(config.snippet_size, 32);
}

#[test]
fn cli_overrides_take_precedence() {
	let dir = tempfile::tempdir().expect("tempdir");
	let path = write_config(&dir, "[ui]\ntheme = \"light\"\n\n[export]\nsize = 32\n");

	let cli = CliArgs::parse_from([
		"icofz",
		"--no-config",
		"--config",
		path.to_str().expect("utf8"),
		"--theme",
		"solarized",
		"--size",
		"48",
		"--query",
		"arrow",
	]);
	let config = load(&cli).expect("load");
	assert_eq!(config.theme.as_deref(), Some("solarized"));
	assert_eq!(config.snippet_size, 48);
	assert_eq!(config.initial_query, "arrow");
}

#[test]
fn defaults_apply_without_files() {
	let cli = CliArgs::parse_from(["icofz", "--no-config"]);
	let config = load(&cli).expect("load");
	assert!(config.builtin);
	assert_eq!(config.snippet_size, icofz_core::DEFAULT_ICON_SIZE);
	assert!(config.icons_dir.is_none());
}

#[test]
fn invalid_cli_value_names_the_flag() {
	let cli = CliArgs::parse_from(["icofz", "--no-config", "--size", "0"]);
	let err = load(&cli).expect_err("size 0 is invalid");
	assert!(err.to_string().contains("--size"));
}
