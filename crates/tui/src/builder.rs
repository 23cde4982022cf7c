use std::sync::Arc;

use anyhow::{Context, Result};
use icofz_core::{
	Catalog, Clipboard, DEFAULT_ICON_SIZE, DirectoryDownloader, Downloader, Finder, app_dirs,
};

use crate::clipboard::TerminalClipboard;
use crate::config::UiLabels;
use crate::style::{Theme, by_name};
use crate::{App, FinderOutcome};

/// Configures and launches the interactive icon finder.
pub struct IconFinder {
	catalog: Arc<Catalog>,
	initial_query: String,
	labels: UiLabels,
	theme: Option<Theme>,
	snippet_size: u16,
	clipboard: Option<Box<dyn Clipboard>>,
	downloader: Option<Box<dyn Downloader>>,
}

impl IconFinder {
	#[must_use]
	pub fn new(catalog: Arc<Catalog>) -> Self {
		Self {
			catalog,
			initial_query: String::new(),
			labels: UiLabels::default(),
			theme: None,
			snippet_size: DEFAULT_ICON_SIZE,
			clipboard: None,
			downloader: None,
		}
	}

	#[must_use]
	pub fn with_initial_query(mut self, query: impl Into<String>) -> Self {
		self.initial_query = query.into();
		self
	}

	#[must_use]
	pub fn with_labels(mut self, labels: UiLabels) -> Self {
		self.labels = labels;
		self
	}

	#[must_use]
	pub fn with_theme(mut self, theme: Theme) -> Self {
		self.theme = Some(theme);
		self
	}

	/// Use a built-in theme by name. Unknown names keep the default theme.
	#[must_use]
	pub fn with_theme_name(mut self, name: &str) -> Self {
		if let Some(theme) = by_name(name) {
			self.theme = Some(theme);
		}
		self
	}

	#[must_use]
	pub fn with_snippet_size(mut self, size: u16) -> Self {
		self.snippet_size = size;
		self
	}

	#[must_use]
	pub fn with_clipboard(mut self, clipboard: impl Clipboard + 'static) -> Self {
		self.clipboard = Some(Box::new(clipboard));
		self
	}

	#[must_use]
	pub fn with_downloader(mut self, downloader: impl Downloader + 'static) -> Self {
		self.downloader = Some(Box::new(downloader));
		self
	}

	/// Assemble the application without touching the terminal.
	///
	/// Exports default to the user's download directory.
	pub fn build(self) -> Result<App<'static>> {
		let downloader = match self.downloader {
			Some(downloader) => downloader,
			None => {
				let dir = app_dirs::get_download_dir()
					.context("failed to resolve the download directory")?;
				Box::new(DirectoryDownloader::new(dir))
			}
		};
		let clipboard = self
			.clipboard
			.unwrap_or_else(|| Box::new(TerminalClipboard::default()));

		let mut app = App::new(Finder::new(self.catalog), clipboard, downloader);
		app.set_labels(self.labels);
		app.set_snippet_size(self.snippet_size);
		if let Some(theme) = self.theme {
			app.set_theme(theme);
		}
		if !self.initial_query.is_empty() {
			app.set_initial_query(&self.initial_query);
		}
		Ok(app)
	}

	/// Run the finder to completion.
	pub fn run(self) -> Result<FinderOutcome> {
		self.build()?.run()
	}
}
