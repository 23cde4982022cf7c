//! Configuration loading and resolution.
//!
//! Settings are merged from the default config files, any `--config` files,
//! and `ICOFZ__SECTION__KEY` environment variables; command-line flags are
//! applied last. [`load`] returns the validated [`ResolvedConfig`].

mod raw;
mod resolved;
mod sources;
#[cfg(test)]
mod tests;

use anyhow::{Result, anyhow};

use crate::cli::CliArgs;
use raw::RawConfig;
pub(crate) use resolved::ResolvedConfig;
use sources::build_config;

/// Load configuration by combining config files, environment variables, and
/// CLI arguments.
pub(crate) fn load(cli: &CliArgs) -> Result<ResolvedConfig> {
	let builder = build_config(cli)?;
	let mut raw: RawConfig = builder
		.try_deserialize()
		.map_err(|err| anyhow!("failed to deserialize configuration: {err}"))?;
	raw.apply_cli_overrides(cli);
	raw.resolve(cli)
}
