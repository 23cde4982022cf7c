use std::cell::RefCell;
use std::path::PathBuf;
use std::rc::Rc;
use std::sync::Arc;
use std::time::{Duration, Instant};

use icofz_core::{
	COPY_NOTICE_DURATION, Catalog, Clipboard, ClipboardError, Downloader, ExportError, Finder,
	IconSvg, MemorySource, SvgArtifact,
};
use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::crossterm::event::{
	KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use super::{App, Focus};

#[derive(Clone, Default)]
struct SharedClipboard(Rc<RefCell<Vec<String>>>);

impl Clipboard for SharedClipboard {
	fn write(&mut self, text: &str) -> Result<(), ClipboardError> {
		self.0.borrow_mut().push(text.to_string());
		Ok(())
	}
}

#[derive(Clone, Default)]
struct SharedDownloader(Rc<RefCell<Vec<SvgArtifact>>>);

impl Downloader for SharedDownloader {
	fn save(&mut self, artifact: &SvgArtifact) -> Result<PathBuf, ExportError> {
		self.0.borrow_mut().push(artifact.clone());
		Ok(PathBuf::from("/downloads").join(&artifact.file_name))
	}
}

struct Harness {
	app: App<'static>,
	copies: Rc<RefCell<Vec<String>>>,
	saved: Rc<RefCell<Vec<SvgArtifact>>>,
}

fn harness() -> Harness {
	let svg = IconSvg::parse("<svg viewBox=\"0 0 24 24\"><path d=\"M4 4h16v16H4z\"/></svg>")
		.expect("svg");
	let source = MemorySource::new()
		.with("search", svg.clone())
		.with("close", svg.clone())
		.with("download", svg);
	let catalog = Arc::new(Catalog::load(source));

	let clipboard = SharedClipboard::default();
	let downloader = SharedDownloader::default();
	let copies = Rc::clone(&clipboard.0);
	let saved = Rc::clone(&downloader.0);
	let app = App::new(
		Finder::new(catalog),
		Box::new(clipboard),
		Box::new(downloader),
	);
	Harness { app, copies, saved }
}

fn press(app: &mut App<'_>, code: KeyCode) -> Option<super::FinderOutcome> {
	app.handle_key(KeyEvent::new(code, KeyModifiers::NONE), Instant::now())
}

fn type_text(app: &mut App<'_>, text: &str) {
	for ch in text.chars() {
		press(app, KeyCode::Char(ch));
	}
}

fn result_names(app: &App<'_>) -> Vec<String> {
	app.finder
		.results()
		.map(|entry| entry.name().to_string())
		.collect()
}

fn render(app: &mut App<'_>, width: u16, height: u16) -> String {
	let mut terminal = Terminal::new(TestBackend::new(width, height)).expect("terminal");
	terminal.draw(|frame| app.draw(frame)).expect("draw");
	buffer_to_string(terminal.backend().buffer())
}

fn buffer_to_string(buf: &Buffer) -> String {
	let mut lines = Vec::new();
	for y in 0..buf.area.height {
		let mut line = String::new();
		for x in 0..buf.area.width {
			line.push_str(buf[(x, y)].symbol());
		}
		lines.push(line);
	}
	lines.join("\n")
}

#[test]
fn typing_filters_the_grid() {
	let mut h = harness();
	type_text(&mut h.app, "clo");
	assert_eq!(h.app.finder.keyword(), "clo");
	assert_eq!(result_names(&h.app), vec!["close"]);

	press(&mut h.app, KeyCode::Backspace);
	press(&mut h.app, KeyCode::Backspace);
	press(&mut h.app, KeyCode::Backspace);
	assert_eq!(result_names(&h.app), vec!["search", "close", "download"]);
}

#[test]
fn ctrl_u_clears_the_keyword() {
	let mut h = harness();
	type_text(&mut h.app, "dwn");
	assert_eq!(result_names(&h.app), vec!["download"]);

	h.app.handle_key(
		KeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL),
		Instant::now(),
	);
	assert_eq!(h.app.input.text(), "");
	assert_eq!(h.app.finder.result_count(), 3);
}

#[test]
fn picking_in_the_grid_copies_the_name() {
	let mut h = harness();
	press(&mut h.app, KeyCode::Down);
	assert_eq!(h.app.focus(), Focus::Grid);

	press(&mut h.app, KeyCode::Right);
	press(&mut h.app, KeyCode::Char(' '));
	assert_eq!(*h.copies.borrow(), vec!["close"]);
	assert_eq!(h.app.finder.active().map(|entry| entry.name()), Some("close"));
	assert_eq!(h.app.status_message().as_deref(), Some("Copied! close"));

	press(&mut h.app, KeyCode::Char('y'));
	assert_eq!(*h.copies.borrow(), vec!["close", "close"]);
}

#[test]
fn copied_notice_expires_on_tick() {
	let mut h = harness();
	let start = Instant::now();
	press(&mut h.app, KeyCode::Down);
	h.app.handle_key(KeyEvent::new(KeyCode::Char(' '), KeyModifiers::NONE), start);
	assert!(h.app.finder.copied());

	assert!(!h.app.tick(start + Duration::from_millis(500)));
	assert!(h.app.tick(start + COPY_NOTICE_DURATION));
	assert!(h.app.status_message().is_none());
}

#[test]
fn returning_to_the_input_deselects() {
	let mut h = harness();
	press(&mut h.app, KeyCode::Down);
	press(&mut h.app, KeyCode::Char(' '));
	assert!(h.app.finder.active().is_some());

	press(&mut h.app, KeyCode::Up);
	assert_eq!(h.app.focus(), Focus::Input);
	assert!(h.app.finder.active().is_none());
}

#[test]
fn typing_in_the_grid_goes_back_to_search() {
	let mut h = harness();
	press(&mut h.app, KeyCode::Down);
	press(&mut h.app, KeyCode::Char('d'));
	assert_eq!(h.app.focus(), Focus::Input);
	assert_eq!(h.app.input.text(), "d");
}

#[test]
fn grid_needs_results_to_take_focus() {
	let mut h = harness();
	type_text(&mut h.app, "zzzz");
	assert_eq!(h.app.finder.result_count(), 0);
	press(&mut h.app, KeyCode::Down);
	assert_eq!(h.app.focus(), Focus::Input);
}

#[test]
fn export_saves_the_active_icon() {
	let mut h = harness();
	press(&mut h.app, KeyCode::Down);
	press(&mut h.app, KeyCode::Char('e'));
	assert!(h.saved.borrow().is_empty());
	assert_eq!(
		h.app.status_message().as_deref(),
		Some("Pick an icon before exporting")
	);

	press(&mut h.app, KeyCode::Right);
	press(&mut h.app, KeyCode::Right);
	press(&mut h.app, KeyCode::Char(' '));
	press(&mut h.app, KeyCode::Char('e'));
	assert_eq!(h.saved.borrow()[0].file_name, "download.svg");

	let outcome = press(&mut h.app, KeyCode::Esc).expect("outcome");
	assert_eq!(outcome.exported, vec![PathBuf::from("/downloads/download.svg")]);
}

#[test]
fn enter_accepts_the_first_icon_or_the_picked_one() {
	let mut h = harness();
	let outcome = press(&mut h.app, KeyCode::Enter).expect("outcome");
	assert!(outcome.accepted);
	assert_eq!(outcome.selection.as_deref(), Some("search"));

	let mut h = harness();
	type_text(&mut h.app, "dwn");
	press(&mut h.app, KeyCode::Down);
	let outcome = press(&mut h.app, KeyCode::Enter).expect("outcome");
	assert_eq!(outcome.selection.as_deref(), Some("download"));
	assert_eq!(outcome.keyword, "dwn");
	assert_eq!(*h.copies.borrow(), vec!["download"]);
}

#[test]
fn enter_in_the_input_accepts_the_first_result() {
	let mut h = harness();
	type_text(&mut h.app, "dwn");
	assert_eq!(h.app.focus(), Focus::Input);
	let outcome = press(&mut h.app, KeyCode::Enter).expect("outcome");
	assert!(outcome.accepted);
	assert_eq!(outcome.selection.as_deref(), Some("download"));
	assert!(h.copies.borrow().is_empty());

	let mut h = harness();
	type_text(&mut h.app, "zzzz");
	let outcome = press(&mut h.app, KeyCode::Enter).expect("outcome");
	assert!(outcome.accepted);
	assert!(outcome.selection.is_none());
}

#[test]
fn escape_cancels_without_selection() {
	let mut h = harness();
	let outcome = press(&mut h.app, KeyCode::Esc).expect("outcome");
	assert!(!outcome.accepted);
	assert!(outcome.selection.is_none());
}

#[test]
fn draw_shows_title_placeholder_and_icons() {
	let mut h = harness();
	let screen = render(&mut h.app, 140, 20);
	assert!(screen.contains("Gutenberg Icons Finder"));
	assert!(screen.contains("Just another icon finder for developers building Gutenberg blocks."));
	assert!(screen.contains("Search icons..."));
	assert!(screen.contains("3 / 3"));
	for name in ["search", "close", "download"] {
		assert!(screen.contains(name), "{name} missing from\n{screen}");
	}
	assert!(screen.contains("import { Icon, search } from '@wordpress/icons';"));
}

#[test]
fn draw_reports_empty_results() {
	let mut h = harness();
	type_text(&mut h.app, "zzzz");
	let screen = render(&mut h.app, 80, 16);
	assert!(screen.contains("No icons found"));
	assert!(screen.contains("0 / 3"));
}

#[test]
fn clicking_the_clear_button_resets_the_keyword() {
	let mut h = harness();
	type_text(&mut h.app, "clo");
	render(&mut h.app, 80, 16);

	let button = h.app.prompt_areas.clear.expect("clear button");
	h.app.handle_mouse(left_click(button.x, button.y), Instant::now());
	assert_eq!(h.app.input.text(), "");
	assert_eq!(h.app.finder.result_count(), 3);
}

#[test]
fn clicking_a_cell_picks_it() {
	let mut h = harness();
	render(&mut h.app, 80, 16);

	let inner = h.app.grid.area.expect("grid area");
	let column = inner.x + h.app.grid.layout.cell_width;
	h.app.handle_mouse(left_click(column, inner.y), Instant::now());
	assert_eq!(h.app.focus(), Focus::Grid);
	assert_eq!(*h.copies.borrow(), vec!["close"]);

	render(&mut h.app, 80, 16);
	let name = h.app.preview_areas.name.expect("preview name");
	h.app.handle_mouse(left_click(name.x, name.y), Instant::now());
	assert_eq!(*h.copies.borrow(), vec!["close", "close"]);
}

fn left_click(column: u16, row: u16) -> MouseEvent {
	MouseEvent {
		kind: MouseEventKind::Down(MouseButton::Left),
		column,
		row,
		modifiers: KeyModifiers::NONE,
	}
}
