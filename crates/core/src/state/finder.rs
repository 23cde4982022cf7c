use std::fmt;
use std::sync::Arc;
use std::time::Instant;

use tracing::{debug, warn};

use super::{CopyNotice, SearchState, SelectionState};
use crate::catalog::{Catalog, CatalogEntry};
use crate::collab::Clipboard;
use crate::export::{SvgArtifact, export};
use crate::matcher::{FrizbeeBackend, RankBackend};
use crate::snippet::snippet_with_size;

/// What a selection event did to the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionTransition {
	/// Idle or another entry became active; its name was copied.
	Activated(usize),
	/// The active entry was copied again.
	Recopied(usize),
	/// The active entry was cleared.
	Deselected,
	/// Nothing changed.
	Unchanged,
}

/// A finder session: one catalog, its search and selection state, and the
/// copy notice.
pub struct Finder {
	catalog: Arc<Catalog>,
	backend: Box<dyn RankBackend>,
	search: SearchState,
	selection: SelectionState,
	notice: CopyNotice,
}

impl fmt::Debug for Finder {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Finder")
			.field("catalog_len", &self.catalog.len())
			.field("search", &self.search)
			.field("selection", &self.selection)
			.field("notice", &self.notice)
			.finish_non_exhaustive()
	}
}

impl Finder {
	/// Start a session over `catalog` using the frizbee matcher.
	#[must_use]
	pub fn new(catalog: Arc<Catalog>) -> Self {
		Self::with_backend(catalog, FrizbeeBackend)
	}

	/// Start a session with a custom ranking backend.
	#[must_use]
	pub fn with_backend(catalog: Arc<Catalog>, backend: impl RankBackend + 'static) -> Self {
		let search = SearchState::new(&catalog);
		Self {
			catalog,
			backend: Box::new(backend),
			search,
			selection: SelectionState::default(),
			notice: CopyNotice::default(),
		}
	}

	/// Replace the copy notice, e.g. to use a different reset delay.
	#[must_use]
	pub fn with_notice(mut self, notice: CopyNotice) -> Self {
		self.notice = notice;
		self
	}

	#[must_use]
	pub fn catalog(&self) -> &Catalog {
		&self.catalog
	}

	#[must_use]
	pub fn keyword(&self) -> &str {
		self.search.keyword()
	}

	#[must_use]
	pub fn search(&self) -> &SearchState {
		&self.search
	}

	#[must_use]
	pub fn selection(&self) -> &SelectionState {
		&self.selection
	}

	#[must_use]
	pub fn notice(&self) -> &CopyNotice {
		&self.notice
	}

	/// Catalog indices of the current results.
	#[must_use]
	pub fn result_indices(&self) -> &[usize] {
		self.search.results()
	}

	#[must_use]
	pub fn result_count(&self) -> usize {
		self.search.results().len()
	}

	/// Catalog index of the result at `position`.
	#[must_use]
	pub fn result_index(&self, position: usize) -> Option<usize> {
		self.search.results().get(position).copied()
	}

	/// Entry at `position` within the current results.
	#[must_use]
	pub fn result(&self, position: usize) -> Option<&CatalogEntry> {
		let index = *self.search.results().get(position)?;
		self.catalog.get(index)
	}

	/// Current results in catalog order.
	pub fn results(&self) -> impl Iterator<Item = &CatalogEntry> {
		self.search
			.results()
			.iter()
			.filter_map(|&index| self.catalog.get(index))
	}

	/// Update the keyword, recomputing results when it changed.
	pub fn set_keyword(&mut self, keyword: &str) -> bool {
		let changed = self
			.search
			.set_keyword(keyword, self.backend.as_ref(), &self.catalog);
		if changed {
			debug!(
				keyword,
				results = self.search.results().len(),
				"search keyword updated"
			);
		}
		changed
	}

	/// Reset the keyword so every entry is listed again.
	pub fn clear_keyword(&mut self) -> bool {
		self.set_keyword("")
	}

	/// Pick the entry at `position` in the results, copying its name.
	///
	/// Picking the entry that is already active behaves like [`Self::recopy`].
	pub fn pick(
		&mut self,
		position: usize,
		clipboard: &mut dyn Clipboard,
		now: Instant,
	) -> SelectionTransition {
		let Some(&index) = self.search.results().get(position) else {
			return SelectionTransition::Unchanged;
		};
		if self.selection.active() == Some(index) {
			return self.recopy(clipboard, now);
		}

		self.selection.activate(index);
		self.copy_name(index, clipboard, now);
		SelectionTransition::Activated(index)
	}

	/// Copy the active entry's name again, restarting the notice timer.
	pub fn recopy(&mut self, clipboard: &mut dyn Clipboard, now: Instant) -> SelectionTransition {
		let Some(index) = self.selection.active() else {
			return SelectionTransition::Unchanged;
		};
		self.copy_name(index, clipboard, now);
		SelectionTransition::Recopied(index)
	}

	/// The search input regained focus: drop the active entry.
	pub fn focus_input(&mut self) -> SelectionTransition {
		if self.selection.active().is_none() {
			return SelectionTransition::Unchanged;
		}
		self.selection.clear();
		SelectionTransition::Deselected
	}

	/// Advance time, clearing the copy notice once it expires. Returns `true`
	/// when the notice was cleared by this call.
	pub fn tick(&mut self, now: Instant) -> bool {
		self.notice.tick(now)
	}

	#[must_use]
	pub fn copied(&self) -> bool {
		self.notice.copied()
	}

	#[must_use]
	pub fn active(&self) -> Option<&CatalogEntry> {
		self.selection
			.active()
			.and_then(|index| self.catalog.get(index))
	}

	/// Entry shown in the preview: the active one, else the first in the
	/// catalog.
	#[must_use]
	pub fn preview(&self) -> Option<&CatalogEntry> {
		self.selection
			.preview(&self.catalog)
			.and_then(|index| self.catalog.get(index))
	}

	/// Usage snippet for the preview entry.
	#[must_use]
	pub fn snippet(&self, size: u16) -> Option<String> {
		self.preview()
			.map(|entry| snippet_with_size(entry.name(), size))
	}

	/// Serialise the active entry for download.
	#[must_use]
	pub fn export_active(&self) -> Option<SvgArtifact> {
		self.active().map(export)
	}

	fn copy_name(&mut self, index: usize, clipboard: &mut dyn Clipboard, now: Instant) {
		let Some(entry) = self.catalog.get(index) else {
			return;
		};
		if let Err(error) = clipboard.write(entry.name()) {
			warn!(icon = entry.name(), %error, "failed to copy icon name");
		}
		self.notice.arm(now);
		debug!(icon = entry.name(), "copied icon name");
	}
}
