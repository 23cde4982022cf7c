//! Search, selection, and copy-notice state for a finder session.
//!
//! Each piece of state is a small value type with explicit transition methods.
//! [`Finder`] bundles them with the catalog and the collaborators and is the
//! single owner a front-end drives from its event handlers.

mod finder;
#[cfg(test)]
mod tests;

use std::time::{Duration, Instant};

pub use finder::{Finder, SelectionTransition};

use crate::catalog::Catalog;
use crate::matcher::{RankBackend, filter};

/// How long the "copied" notice stays up after the latest copy.
pub const COPY_NOTICE_DURATION: Duration = Duration::from_millis(2000);

/// Current keyword and the catalog indices it matches, in catalog order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchState {
	keyword: String,
	results: Vec<usize>,
}

impl SearchState {
	/// Initial state: empty keyword, whole catalog.
	#[must_use]
	pub fn new(catalog: &Catalog) -> Self {
		Self {
			keyword: String::new(),
			results: (0..catalog.len()).collect(),
		}
	}

	#[must_use]
	pub fn keyword(&self) -> &str {
		&self.keyword
	}

	#[must_use]
	pub fn results(&self) -> &[usize] {
		&self.results
	}

	/// Replace the keyword and recompute the results from scratch.
	///
	/// Returns `false` without doing any work when the keyword is unchanged.
	/// When the backend fails the keyword is still updated but the previous
	/// results are kept.
	pub fn set_keyword<B>(&mut self, keyword: &str, backend: &B, catalog: &Catalog) -> bool
	where
		B: RankBackend + ?Sized,
	{
		if self.keyword == keyword {
			return false;
		}
		self.keyword.clear();
		self.keyword.push_str(keyword);

		if let Some(results) = filter(backend, keyword, catalog) {
			self.results = results;
		}
		true
	}
}

/// The entry the user picked, if any.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SelectionState {
	active: Option<usize>,
}

impl SelectionState {
	#[must_use]
	pub fn active(&self) -> Option<usize> {
		self.active
	}

	pub fn activate(&mut self, index: usize) {
		self.active = Some(index);
	}

	pub fn clear(&mut self) {
		self.active = None;
	}

	/// Entry to preview: the active one, otherwise the first catalog entry.
	/// `None` only when the catalog is empty.
	#[must_use]
	pub fn preview(&self, catalog: &Catalog) -> Option<usize> {
		self.active
			.filter(|&index| index < catalog.len())
			.or_else(|| (!catalog.is_empty()).then_some(0))
	}
}

/// Transient "copied" acknowledgement with a single pending reset.
///
/// Arming the notice always replaces the pending deadline, so the flag clears
/// [`COPY_NOTICE_DURATION`] after the most recent copy and never earlier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CopyNotice {
	copied: bool,
	reset_at: Option<Instant>,
	duration: Duration,
}

impl Default for CopyNotice {
	fn default() -> Self {
		Self::with_duration(COPY_NOTICE_DURATION)
	}
}

impl CopyNotice {
	#[must_use]
	pub fn with_duration(duration: Duration) -> Self {
		Self {
			copied: false,
			reset_at: None,
			duration,
		}
	}

	#[must_use]
	pub fn copied(&self) -> bool {
		self.copied
	}

	/// Deadline of the pending reset, if one is scheduled.
	#[must_use]
	pub fn reset_at(&self) -> Option<Instant> {
		self.reset_at
	}

	/// Raise the notice and (re)schedule its reset relative to `now`.
	pub fn arm(&mut self, now: Instant) {
		self.copied = true;
		self.reset_at = Some(now + self.duration);
	}

	/// Clear the notice if its deadline has passed. Returns `true` when the
	/// flag flipped back to `false`.
	pub fn tick(&mut self, now: Instant) -> bool {
		match self.reset_at {
			Some(deadline) if now >= deadline => {
				self.copied = false;
				self.reset_at = None;
				true
			}
			_ => false,
		}
	}
}
