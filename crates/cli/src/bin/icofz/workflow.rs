use std::sync::Arc;

use anyhow::{Context, Result};
use icofz_core::{BuiltinSource, Catalog, DirectoryDownloader, DirectorySource};
use icofz_tui::{FinderOutcome, IconFinder, UiLabels};
use tracing::info;

use crate::settings::ResolvedConfig;

/// Build the icon catalog described by `config`.
///
/// Icons from the configured directory come first; bundled icons follow and
/// never shadow a directory icon with the same name.
pub(crate) fn load_catalog(config: &ResolvedConfig) -> Result<Arc<Catalog>> {
	let mut entries = Vec::new();

	if let Some(dir) = &config.icons_dir {
		let source = DirectorySource::read(dir)
			.with_context(|| format!("failed to load icons from {}", dir.display()))?;
		entries.extend(Catalog::load(&source).iter().cloned());
	}
	if config.builtin {
		entries.extend(Catalog::load(BuiltinSource).iter().cloned());
	}

	let catalog = Catalog::from_entries(entries);
	info!(
		count = catalog.len(),
		builtin = config.builtin,
		"catalog ready"
	);
	Ok(Arc::new(catalog))
}

/// Coordinates building and running the interactive finder.
pub(crate) struct FinderWorkflow {
	finder: IconFinder,
}

impl FinderWorkflow {
	pub(crate) fn from_config(config: &ResolvedConfig) -> Result<Self> {
		let catalog = load_catalog(config)?;
		let finder = FinderFactory::new(catalog)
			.with_title(config.title.as_deref())
			.with_theme(config.theme.as_deref())
			.with_initial_query(&config.initial_query)
			.with_download_dir(config)
			.finish(config.snippet_size);
		Ok(Self { finder })
	}

	pub(crate) fn run(self) -> Result<FinderOutcome> {
		self.finder.run()
	}
}

/// Translates resolved settings into a configured [`IconFinder`].
struct FinderFactory {
	finder: IconFinder,
}

impl FinderFactory {
	fn new(catalog: Arc<Catalog>) -> Self {
		Self {
			finder: IconFinder::new(catalog),
		}
	}

	fn with_title(mut self, title: Option<&str>) -> Self {
		if let Some(title) = title {
			self.finder = self
				.finder
				.with_labels(UiLabels::default().with_title(title));
		}
		self
	}

	fn with_theme(mut self, theme: Option<&str>) -> Self {
		if let Some(theme) = theme {
			self.finder = self.finder.with_theme_name(theme);
		}
		self
	}

	fn with_initial_query(mut self, query: &str) -> Self {
		if !query.is_empty() {
			self.finder = self.finder.with_initial_query(query);
		}
		self
	}

	fn with_download_dir(mut self, config: &ResolvedConfig) -> Self {
		if let Some(dir) = &config.download_dir {
			self.finder = self.finder.with_downloader(DirectoryDownloader::new(dir));
		}
		self
	}

	fn finish(self, snippet_size: u16) -> IconFinder {
		self.finder.with_snippet_size(snippet_size)
	}
}
