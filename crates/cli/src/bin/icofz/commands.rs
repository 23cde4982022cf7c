//! Non-interactive subcommands: `list`, `snippet`, and `export`.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Result, bail};
use icofz_core::{
	Catalog, CatalogEntry, DirectoryDownloader, Downloader, Finder, app_dirs, export,
	snippet_with_size,
};
use serde::Serialize;

use crate::cli::{Command, OutputFormat, print_json};
use crate::settings::ResolvedConfig;

const MAX_SUGGESTIONS: usize = 3;

#[derive(Debug, Serialize, PartialEq, Eq)]
pub(crate) struct ListReport {
	pub(crate) keyword: String,
	pub(crate) count: usize,
	pub(crate) icons: Vec<String>,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
pub(crate) struct SnippetReport {
	pub(crate) name: String,
	pub(crate) snippet: String,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
pub(crate) struct ExportReport {
	pub(crate) name: String,
	pub(crate) path: PathBuf,
}

/// Run `command` against `catalog` and print its result.
pub(crate) fn run(
	command: &Command,
	catalog: Arc<Catalog>,
	config: &ResolvedConfig,
	format: OutputFormat,
) -> Result<()> {
	match command {
		Command::List { keyword } => {
			let report = list(catalog, keyword.as_deref().unwrap_or_default());
			match format {
				OutputFormat::Plain => {
					for name in &report.icons {
						println!("{name}");
					}
				}
				OutputFormat::Json => print_json(&report)?,
			}
		}
		Command::Snippet { name } => {
			let report = snippet(&catalog, name, config.snippet_size)?;
			match format {
				OutputFormat::Plain => println!("{}", report.snippet),
				OutputFormat::Json => print_json(&report)?,
			}
		}
		Command::Export { name, out } => {
			let dir = match out.as_ref().or(config.download_dir.as_ref()) {
				Some(dir) => dir.clone(),
				None => app_dirs::get_download_dir()?,
			};
			let report = export_to(&catalog, name, &dir)?;
			match format {
				OutputFormat::Plain => println!("{}", report.path.display()),
				OutputFormat::Json => print_json(&report)?,
			}
		}
	}
	Ok(())
}

/// Names matching `keyword`, in catalog order.
pub(crate) fn list(catalog: Arc<Catalog>, keyword: &str) -> ListReport {
	let mut finder = Finder::new(catalog);
	finder.set_keyword(keyword);
	let icons: Vec<String> = finder.results().map(|entry| entry.name().to_owned()).collect();
	ListReport {
		keyword: finder.keyword().to_owned(),
		count: icons.len(),
		icons,
	}
}

pub(crate) fn snippet(catalog: &Arc<Catalog>, name: &str, size: u16) -> Result<SnippetReport> {
	let entry = lookup(catalog, name)?;
	Ok(SnippetReport {
		name: entry.name().to_owned(),
		snippet: snippet_with_size(entry.name(), size),
	})
}

pub(crate) fn export_to(catalog: &Arc<Catalog>, name: &str, dir: &Path) -> Result<ExportReport> {
	let entry = lookup(catalog, name)?;
	let path = DirectoryDownloader::new(dir).save(&export(entry))?;
	Ok(ExportReport {
		name: entry.name().to_owned(),
		path,
	})
}

/// Exact lookup; an unknown name fails with the closest fuzzy matches.
fn lookup<'a>(catalog: &'a Arc<Catalog>, name: &str) -> Result<&'a CatalogEntry> {
	if let Some(entry) = catalog.find(name) {
		return Ok(entry);
	}

	let report = list(Arc::clone(catalog), name);
	if report.icons.is_empty() {
		bail!("unknown icon `{name}`");
	}
	let suggestions: Vec<&str> = report
		.icons
		.iter()
		.take(MAX_SUGGESTIONS)
		.map(String::as_str)
		.collect();
	bail!(
		"unknown icon `{name}` (did you mean: {}?)",
		suggestions.join(", ")
	)
}
