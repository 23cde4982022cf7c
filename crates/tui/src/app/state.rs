use std::path::PathBuf;
use std::time::Instant;

use icofz_core::{CatalogEntry, Clipboard, DEFAULT_ICON_SIZE, Downloader, Finder};
use serde::Serialize;
use tracing::{info, warn};

use super::GridState;
use crate::components::{PreviewAreas, PromptAreas};
use crate::config::UiLabels;
use crate::input::QueryInput;
use crate::style::{StyleConfig, Theme};

/// Which pane receives keyboard input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
	#[default]
	Input,
	Grid,
}

/// How the user left the finder.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FinderOutcome {
	/// `true` when the user confirmed with Enter.
	pub accepted: bool,
	/// Keyword in the search input on exit.
	pub keyword: String,
	/// Name of the active icon, or the first result, when accepted.
	pub selection: Option<String>,
	/// Files written by exports during the session.
	pub exported: Vec<PathBuf>,
}

/// State of the interactive finder.
pub struct App<'a> {
	pub finder: Finder,
	pub input: QueryInput<'a>,
	pub style: StyleConfig,
	pub(crate) focus: Focus,
	pub(crate) grid: GridState,
	pub(crate) preview_scroll: usize,
	pub(crate) preview_areas: PreviewAreas,
	pub(crate) prompt_areas: PromptAreas,
	pub(crate) ui: UiLabels,
	pub(crate) snippet_size: u16,
	pub(crate) status: Option<String>,
	pub(crate) exported: Vec<PathBuf>,
	clipboard: Box<dyn Clipboard>,
	downloader: Box<dyn Downloader>,
}

impl<'a> App<'a> {
	/// Wrap a finder session with its platform collaborators.
	pub fn new(
		finder: Finder,
		clipboard: Box<dyn Clipboard>,
		downloader: Box<dyn Downloader>,
	) -> Self {
		let input = QueryInput::new(finder.keyword().to_string());
		let mut app = Self {
			finder,
			input,
			style: StyleConfig::default(),
			focus: Focus::Input,
			grid: GridState::default(),
			preview_scroll: 0,
			preview_areas: PreviewAreas::default(),
			prompt_areas: PromptAreas::default(),
			ui: UiLabels::default(),
			snippet_size: DEFAULT_ICON_SIZE,
			status: None,
			exported: Vec::new(),
			clipboard,
			downloader,
		};
		app.apply_focus_style();
		app
	}

	/// Pre-fill the search input and filter immediately.
	pub fn set_initial_query(&mut self, query: &str) {
		self.input = QueryInput::new(query);
		self.apply_focus_style();
		self.sync_keyword();
	}

	pub fn set_theme(&mut self, theme: Theme) {
		self.style.theme = theme;
		self.apply_focus_style();
	}

	pub fn set_labels(&mut self, labels: UiLabels) {
		self.ui = labels;
	}

	pub fn set_snippet_size(&mut self, size: u16) {
		self.snippet_size = size;
	}

	#[must_use]
	pub fn focus(&self) -> Focus {
		self.focus
	}

	/// Advance timers. Returns `true` when something visible changed.
	pub fn tick(&mut self, now: Instant) -> bool {
		self.finder.tick(now)
	}

	/// Push the input text into the finder, resetting the grid when the
	/// results were recomputed.
	pub(crate) fn sync_keyword(&mut self) {
		let keyword = self.input.text().to_owned();
		if self.finder.set_keyword(&keyword) {
			self.grid.reset();
			self.preview_scroll = 0;
		}
	}

	pub(crate) fn clear_keyword(&mut self) {
		self.input.clear();
		self.apply_focus_style();
		if self.finder.clear_keyword() {
			self.grid.reset();
			self.preview_scroll = 0;
		}
	}

	/// Move focus to the search input, dropping the active icon.
	pub(crate) fn focus_input(&mut self) {
		self.focus = Focus::Input;
		self.finder.focus_input();
		self.apply_focus_style();
	}

	/// Move focus to the grid. Does nothing without results.
	pub(crate) fn focus_grid(&mut self) -> bool {
		if self.finder.result_count() == 0 {
			return false;
		}
		self.focus = Focus::Grid;
		self.grid.clamp(self.finder.result_count());
		self.apply_focus_style();
		true
	}

	/// Pick the result at `position`, copying its name.
	pub(crate) fn pick(&mut self, position: usize, now: Instant) {
		self.status = None;
		self.finder.pick(position, self.clipboard.as_mut(), now);
		self.preview_scroll = 0;
	}

	pub(crate) fn recopy(&mut self, now: Instant) {
		self.status = None;
		self.finder.recopy(self.clipboard.as_mut(), now);
	}

	/// Save the active icon through the downloader and report where it went.
	pub(crate) fn export_active(&mut self) {
		let Some(artifact) = self.finder.export_active() else {
			self.status = Some("Pick an icon before exporting".to_string());
			return;
		};
		match self.downloader.save(&artifact) {
			Ok(path) => {
				info!(path = %path.display(), "icon exported from finder");
				self.status = Some(format!("Saved {}", path.display()));
				self.exported.push(path);
			}
			Err(err) => {
				warn!(error = %err, file = %artifact.file_name, "export failed");
				self.status = Some(format!("Export failed: {err}"));
			}
		}
	}

	pub(crate) fn outcome(&self, accepted: bool) -> FinderOutcome {
		FinderOutcome {
			accepted,
			keyword: self.input.text().to_string(),
			selection: accepted
				.then(|| self.accepted_entry().map(|entry| entry.name().to_string()))
				.flatten(),
			exported: self.exported.clone(),
		}
	}

	/// The active icon, else the first current result.
	fn accepted_entry(&self) -> Option<&CatalogEntry> {
		self.finder.active().or_else(|| self.finder.result(0))
	}

	/// Message for the status line: the copy notice wins over older messages.
	pub(crate) fn status_message(&self) -> Option<String> {
		if self.finder.copied()
			&& let Some(entry) = self.finder.active()
		{
			return Some(format!("{} {}", self.ui.copied_notice, entry.name()));
		}
		self.status.clone()
	}

	fn apply_focus_style(&mut self) {
		let focused = self.focus == Focus::Input;
		self.input.set_focused(focused, self.style.theme.prompt);
	}
}
