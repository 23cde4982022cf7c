//! Tracing subscriber setup.
//!
//! The interactive finder owns the terminal, so its logs go to a file (by
//! default in the cache directory). Non-interactive commands log to stderr.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use icofz_core::app_dirs;
use tracing_subscriber::filter::EnvFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;

/// Environment variable holding filter directives, e.g. `icofz_core=debug`.
pub(crate) const LOG_ENV: &str = "ICOFZ_LOG";
const DEFAULT_LEVEL: &str = "info";
const LOG_FILE_NAME: &str = "icofz.log";

/// Where log events are written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum LogTarget {
	File(PathBuf),
	Stderr,
}

impl LogTarget {
	/// File target at `explicit`, else in the cache directory.
	pub(crate) fn file(explicit: Option<&Path>) -> Result<Self> {
		let path = match explicit {
			Some(path) => path.to_path_buf(),
			None => app_dirs::get_cache_dir()
				.context("failed to resolve cache directory for the log file")?
				.join(LOG_FILE_NAME),
		};
		Ok(Self::File(path))
	}
}

/// Install the global subscriber. `level` is used when `ICOFZ_LOG` is unset.
pub(crate) fn init(target: &LogTarget, level: Option<&str>) -> Result<()> {
	let filter = build_filter(env::var(LOG_ENV).ok().as_deref(), level)?;

	match target {
		LogTarget::Stderr => {
			let layer = fmt::layer()
				.with_writer(std::io::stderr)
				.with_target(false)
				.with_filter(filter);
			tracing_subscriber::registry()
				.with(layer)
				.try_init()
				.context("failed to install the log subscriber")?;
		}
		LogTarget::File(path) => {
			let dir = path.parent().filter(|dir| !dir.as_os_str().is_empty());
			let dir = dir.unwrap_or_else(|| Path::new("."));
			fs::create_dir_all(dir)
				.with_context(|| format!("failed to create log directory {}", dir.display()))?;
			let file_name = path
				.file_name()
				.with_context(|| format!("log file path {} has no file name", path.display()))?;
			let appender = tracing_appender::rolling::never(dir, file_name);
			let layer = fmt::layer()
				.with_writer(appender)
				.with_ansi(false)
				.with_filter(filter);
			tracing_subscriber::registry()
				.with(layer)
				.try_init()
				.context("failed to install the log subscriber")?;
		}
	}
	Ok(())
}

/// Directives from the environment win over the configured level.
fn build_filter(env_directives: Option<&str>, level: Option<&str>) -> Result<EnvFilter> {
	let directives = env_directives
		.filter(|value| !value.trim().is_empty())
		.or(level)
		.unwrap_or(DEFAULT_LEVEL);
	EnvFilter::try_new(directives).with_context(|| format!("invalid log filter `{directives}`"))
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn explicit_log_file_is_used() {
		let target = LogTarget::file(Some(Path::new("/tmp/icofz-test.log"))).expect("target");
		assert_eq!(target, LogTarget::File(PathBuf::from("/tmp/icofz-test.log")));
	}

	#[test]
	fn default_log_file_lives_in_cache_dir() {
		let LogTarget::File(path) = LogTarget::file(None).expect("target") else {
			panic!("expected a file target");
		};
		assert!(path.ends_with(LOG_FILE_NAME));
	}

	#[test]
	fn filter_prefers_environment_directives() {
		let filter = build_filter(Some("icofz_core=debug"), Some("warn")).expect("filter");
		assert_eq!(filter.to_string(), "icofz_core=debug");

		let filter = build_filter(Some("  "), Some("warn")).expect("filter");
		assert_eq!(filter.to_string(), "warn");

		let filter = build_filter(None, None).expect("filter");
		assert_eq!(filter.to_string(), DEFAULT_LEVEL);
	}
}
