//! Resolve the configuration, cache, and download directories for `icofz`.
//!
//! The helpers in this module respect environment overrides while falling back
//! to platform-appropriate locations provided by the `directories` crate.

use std::env;
use std::path::PathBuf;

use anyhow::{Result, anyhow};
use directories::{ProjectDirs, UserDirs};

const QUALIFIER: &str = "io";
const ORGANIZATION: &str = "albo";
const APPLICATION: &str = "icofz";

const CONFIG_DIR_ENV: &str = "ICOFZ_CONFIG_DIR";
const CACHE_DIR_ENV: &str = "ICOFZ_CACHE_DIR";
const DOWNLOAD_DIR_ENV: &str = "ICOFZ_DOWNLOAD_DIR";

/// Return the platform-specific directory layout for the application.
fn project_dirs() -> Result<ProjectDirs> {
	ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
		.ok_or_else(|| anyhow!("unable to determine project directories for icofz"))
}

/// Resolve an override directory from an environment variable.
///
/// An empty string is treated the same as an unset value so that callers can
/// use shell defaults without worrying about trailing whitespace.
fn dir_from_env(name: &str) -> Option<PathBuf> {
	let value = env::var_os(name)?;
	if value.is_empty() {
		None
	} else {
		Some(PathBuf::from(value))
	}
}

/// Return the configuration directory used to persist user preferences.
pub fn get_config_dir() -> Result<PathBuf> {
	if let Some(dir) = dir_from_env(CONFIG_DIR_ENV) {
		return Ok(dir);
	}

	Ok(project_dirs()?.config_local_dir().to_path_buf())
}

/// Return the cache directory, which also holds the session log.
pub fn get_cache_dir() -> Result<PathBuf> {
	if let Some(dir) = dir_from_env(CACHE_DIR_ENV) {
		return Ok(dir);
	}

	Ok(project_dirs()?.cache_dir().to_path_buf())
}

/// Return the directory exported icons are saved into.
///
/// Falls back to the current working directory when the platform has no
/// notion of a downloads folder.
pub fn get_download_dir() -> Result<PathBuf> {
	if let Some(dir) = dir_from_env(DOWNLOAD_DIR_ENV) {
		return Ok(dir);
	}

	if let Some(dir) = UserDirs::new().and_then(|dirs| dirs.download_dir().map(PathBuf::from)) {
		return Ok(dir);
	}

	env::current_dir().map_err(|err| anyhow!("unable to determine a download directory: {err}"))
}
