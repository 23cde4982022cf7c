use std::sync::Arc;
use std::time::{Duration, Instant};

use super::*;
use crate::catalog::{Catalog, CatalogEntry};
use crate::collab::Clipboard;
use crate::error::ClipboardError;
use crate::matcher::Ranked;
use crate::svg::IconSvg;

#[derive(Default)]
struct RecordingClipboard {
	writes: Vec<String>,
}

impl Clipboard for RecordingClipboard {
	fn write(&mut self, text: &str) -> Result<(), ClipboardError> {
		self.writes.push(text.to_string());
		Ok(())
	}
}

struct BrokenClipboard;

impl Clipboard for BrokenClipboard {
	fn write(&mut self, _text: &str) -> Result<(), ClipboardError> {
		Err(ClipboardError::Unavailable)
	}
}

/// Backend that fails for any keyword starting with `!`.
struct Flaky;

impl RankBackend for Flaky {
	fn rank(&self, keyword: &str, haystacks: &[&str]) -> Option<Vec<Ranked>> {
		if keyword.starts_with('!') {
			return None;
		}
		Some(
			haystacks
				.iter()
				.enumerate()
				.filter(|(_, name)| name.contains(keyword))
				.map(|(index, _)| Ranked { index, score: 1 })
				.collect(),
		)
	}
}

fn sample_catalog() -> Arc<Catalog> {
	let svg = IconSvg::parse("<svg viewBox=\"0 0 24 24\"><path d=\"M4 4h16v16H4z\"/></svg>")
		.expect("svg");
	Arc::new(Catalog::from_entries(
		["search", "close", "download"]
			.into_iter()
			.map(|name| CatalogEntry::new(name, svg.clone())),
	))
}

fn names(finder: &Finder) -> Vec<&str> {
	finder.results().map(CatalogEntry::name).collect()
}

#[test]
fn empty_keyword_lists_catalog_in_order() {
	let finder = Finder::new(sample_catalog());
	assert_eq!(finder.keyword(), "");
	assert_eq!(names(&finder), vec!["search", "close", "download"]);
}

#[test]
fn keyword_filters_and_clearing_restores_catalog() {
	let mut finder = Finder::new(sample_catalog());

	assert!(finder.set_keyword("clo"));
	assert_eq!(names(&finder), vec!["close"]);

	assert!(!finder.set_keyword("clo"), "same keyword does not recompute");

	assert!(finder.clear_keyword());
	assert_eq!(names(&finder), vec!["search", "close", "download"]);
}

#[test]
fn backend_failure_keeps_previous_results() {
	let mut finder = Finder::with_backend(sample_catalog(), Flaky);
	finder.set_keyword("o");
	assert_eq!(names(&finder), vec!["close", "download"]);

	finder.set_keyword("!oops");
	assert_eq!(finder.keyword(), "!oops");
	assert_eq!(names(&finder), vec!["close", "download"]);
}

#[test]
fn picking_activates_and_copies() {
	let mut finder = Finder::new(sample_catalog());
	let mut clipboard = RecordingClipboard::default();
	let now = Instant::now();

	let transition = finder.pick(0, &mut clipboard, now);
	assert_eq!(transition, SelectionTransition::Activated(0));
	assert_eq!(finder.active().map(CatalogEntry::name), Some("search"));
	assert!(finder.copied());
	assert_eq!(clipboard.writes, vec!["search"]);
}

#[test]
fn pick_uses_position_within_filtered_results() {
	let mut finder = Finder::new(sample_catalog());
	let mut clipboard = RecordingClipboard::default();

	finder.set_keyword("dwn");
	let transition = finder.pick(0, &mut clipboard, Instant::now());
	assert_eq!(transition, SelectionTransition::Activated(2));
	assert_eq!(clipboard.writes, vec!["download"]);

	assert_eq!(
		finder.pick(5, &mut clipboard, Instant::now()),
		SelectionTransition::Unchanged
	);
}

#[test]
fn notice_resets_after_two_seconds() {
	let mut finder = Finder::new(sample_catalog());
	let mut clipboard = RecordingClipboard::default();
	let start = Instant::now();

	finder.pick(1, &mut clipboard, start);
	assert!(!finder.tick(start + Duration::from_millis(1999)));
	assert!(finder.copied());

	assert!(finder.tick(start + COPY_NOTICE_DURATION));
	assert!(!finder.copied());
	assert_eq!(finder.notice().reset_at(), None);
}

#[test]
fn recopy_restarts_timer_instead_of_stacking() {
	let mut finder = Finder::new(sample_catalog());
	let mut clipboard = RecordingClipboard::default();
	let start = Instant::now();

	finder.pick(0, &mut clipboard, start);
	let second = start + Duration::from_millis(1500);
	assert_eq!(
		finder.recopy(&mut clipboard, second),
		SelectionTransition::Recopied(0)
	);
	assert_eq!(clipboard.writes, vec!["search", "search"]);
	assert_eq!(
		finder.notice().reset_at(),
		Some(second + COPY_NOTICE_DURATION)
	);

	// The first copy's deadline passes without clearing the notice.
	assert!(!finder.tick(start + COPY_NOTICE_DURATION));
	assert!(finder.copied());

	assert!(!finder.tick(second + Duration::from_millis(1999)));
	assert!(finder.copied());
	assert!(finder.tick(second + COPY_NOTICE_DURATION));
	assert!(!finder.copied());
}

#[test]
fn picking_the_active_entry_again_recopies() {
	let mut finder = Finder::new(sample_catalog());
	let mut clipboard = RecordingClipboard::default();
	let now = Instant::now();

	finder.pick(2, &mut clipboard, now);
	assert_eq!(
		finder.pick(2, &mut clipboard, now),
		SelectionTransition::Recopied(2)
	);
	assert_eq!(clipboard.writes, vec!["download", "download"]);
}

#[test]
fn recopy_without_active_entry_does_nothing() {
	let mut finder = Finder::new(sample_catalog());
	let mut clipboard = RecordingClipboard::default();

	assert_eq!(
		finder.recopy(&mut clipboard, Instant::now()),
		SelectionTransition::Unchanged
	);
	assert!(clipboard.writes.is_empty());
	assert!(!finder.copied());
}

#[test]
fn clipboard_failure_still_raises_notice() {
	let mut finder = Finder::new(sample_catalog());
	finder.pick(0, &mut BrokenClipboard, Instant::now());
	assert!(finder.copied());
	assert!(finder.active().is_some());
}

#[test]
fn focusing_input_deselects_and_preview_falls_back() {
	let mut finder = Finder::new(sample_catalog());
	let mut clipboard = RecordingClipboard::default();

	assert_eq!(finder.preview().map(CatalogEntry::name), Some("search"));

	finder.pick(1, &mut clipboard, Instant::now());
	assert_eq!(finder.preview().map(CatalogEntry::name), Some("close"));

	assert_eq!(finder.focus_input(), SelectionTransition::Deselected);
	assert!(finder.active().is_none());
	assert_eq!(finder.preview().map(CatalogEntry::name), Some("search"));

	assert_eq!(finder.focus_input(), SelectionTransition::Unchanged);
}

#[test]
fn empty_catalog_degrades_gracefully() {
	let mut finder = Finder::new(Arc::new(Catalog::default()));
	let mut clipboard = RecordingClipboard::default();

	assert_eq!(finder.result_count(), 0);
	assert!(finder.preview().is_none());
	assert!(finder.snippet(24).is_none());
	assert_eq!(
		finder.pick(0, &mut clipboard, Instant::now()),
		SelectionTransition::Unchanged
	);
	finder.set_keyword("anything");
	assert_eq!(finder.result_count(), 0);
}

#[test]
fn snippet_follows_preview_and_export_requires_active() {
	let mut finder = Finder::new(sample_catalog());
	let mut clipboard = RecordingClipboard::default();

	assert!(finder.snippet(24).is_some_and(|text| text.contains("Icon, search }")));
	assert!(finder.export_active().is_none());

	finder.pick(2, &mut clipboard, Instant::now());
	let artifact = finder.export_active().expect("active entry exports");
	assert_eq!(artifact.file_name, "download.svg");
	assert!(finder.snippet(24).is_some_and(|text| text.contains("icon={ download }")));
}

#[test]
fn selection_preview_ignores_stale_index() {
	let catalog = sample_catalog();
	let mut selection = SelectionState::default();
	selection.activate(10);
	assert_eq!(selection.preview(&catalog), Some(0));
}

#[test]
fn copy_notice_custom_duration() {
	let mut notice = CopyNotice::with_duration(Duration::from_millis(10));
	let start = Instant::now();
	notice.arm(start);
	assert!(notice.tick(start + Duration::from_millis(10)));
	assert!(!notice.tick(start + Duration::from_millis(20)));
}
