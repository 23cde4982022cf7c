use std::time::Instant;

use ratatui::crossterm::event::{
	KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use super::{App, FinderOutcome, Focus};
use crate::components::point_in_rect;

const PREVIEW_PAGE: usize = 10;
const WHEEL_STEP: usize = 3;

impl App<'_> {
	/// Process a key press. Returns the outcome once the user leaves.
	pub fn handle_key(&mut self, key: KeyEvent, now: Instant) -> Option<FinderOutcome> {
		if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
			return Some(self.outcome(false));
		}
		match self.focus {
			Focus::Input => self.handle_input_key(key),
			Focus::Grid => self.handle_grid_key(key, now),
		}
	}

	fn handle_input_key(&mut self, key: KeyEvent) -> Option<FinderOutcome> {
		match key.code {
			KeyCode::Esc => return Some(self.outcome(false)),
			KeyCode::Enter => return Some(self.outcome(true)),
			KeyCode::Down | KeyCode::Tab => {
				self.focus_grid();
			}
			KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
				self.clear_keyword();
			}
			KeyCode::PageUp => self.scroll_preview_up(PREVIEW_PAGE),
			KeyCode::PageDown => self.scroll_preview_down(PREVIEW_PAGE),
			_ => {
				if self.input.input(key) {
					self.status = None;
					self.sync_keyword();
				}
			}
		}
		None
	}

	fn handle_grid_key(&mut self, key: KeyEvent, now: Instant) -> Option<FinderOutcome> {
		let len = self.finder.result_count();
		match key.code {
			KeyCode::Esc | KeyCode::Char('q') => return Some(self.outcome(false)),
			KeyCode::Enter => {
				if let Some(position) = self.grid.position(len)
					&& self.finder.result_index(position) != self.finder.selection().active()
				{
					self.pick(position, now);
				}
				return Some(self.outcome(true));
			}
			KeyCode::Left | KeyCode::Char('h') => {
				self.grid.move_left();
			}
			KeyCode::Right | KeyCode::Char('l') => {
				self.grid.move_right(len);
			}
			KeyCode::Down | KeyCode::Char('j') => {
				self.grid.move_down(len);
			}
			KeyCode::Up | KeyCode::Char('k') => {
				if !self.grid.move_up() {
					self.focus_input();
				}
			}
			KeyCode::Char(' ') => {
				if let Some(position) = self.grid.position(len) {
					self.pick(position, now);
				}
			}
			KeyCode::Char('y') => self.recopy(now),
			KeyCode::Char('e') => self.export_active(),
			KeyCode::Char('/') | KeyCode::Tab => self.focus_input(),
			KeyCode::PageUp => self.scroll_preview_up(PREVIEW_PAGE),
			KeyCode::PageDown => self.scroll_preview_down(PREVIEW_PAGE),
			KeyCode::Backspace | KeyCode::Char(_)
				if !key.modifiers.contains(KeyModifiers::CONTROL) =>
			{
				// Typing anywhere goes back to searching.
				self.focus_input();
				if self.input.input(key) {
					self.sync_keyword();
				}
			}
			_ => {}
		}
		None
	}

	/// Process a mouse event.
	pub fn handle_mouse(&mut self, mouse: MouseEvent, now: Instant) {
		let (column, row) = (mouse.column, mouse.row);
		match mouse.kind {
			MouseEventKind::Down(MouseButton::Left) => self.click(column, row, now),
			MouseEventKind::ScrollUp if self.over_preview(column, row) => {
				self.scroll_preview_up(WHEEL_STEP);
			}
			MouseEventKind::ScrollDown if self.over_preview(column, row) => {
				self.scroll_preview_down(WHEEL_STEP);
			}
			MouseEventKind::ScrollUp if self.over_grid(column, row) => {
				self.grid.scroll(-1, self.finder.result_count());
			}
			MouseEventKind::ScrollDown if self.over_grid(column, row) => {
				self.grid.scroll(1, self.finder.result_count());
			}
			_ => {}
		}
	}

	fn click(&mut self, column: u16, row: u16, now: Instant) {
		let hit = |area: Option<ratatui::layout::Rect>| {
			area.is_some_and(|area| point_in_rect(column, row, area))
		};

		if hit(self.prompt_areas.clear) {
			self.clear_keyword();
		} else if hit(self.prompt_areas.input) {
			self.focus_input();
		} else if hit(self.preview_areas.name) {
			self.recopy(now);
		} else if let Some(inner) = self.grid.area
			&& point_in_rect(column, row, inner)
		{
			let len = self.finder.result_count();
			let position = self
				.grid
				.layout
				.position_at(inner, self.grid.offset_row, column, row)
				.filter(|&position| position < len);
			if let Some(position) = position {
				self.grid.cursor = position;
				self.focus_grid();
				self.pick(position, now);
			}
		}
	}

	fn over_preview(&self, column: u16, row: u16) -> bool {
		self.preview_areas
			.body
			.is_some_and(|area| point_in_rect(column, row, area))
	}

	fn over_grid(&self, column: u16, row: u16) -> bool {
		self.grid
			.area
			.is_some_and(|area| point_in_rect(column, row, area))
	}

	fn scroll_preview_up(&mut self, lines: usize) {
		self.preview_scroll = self.preview_scroll.saturating_sub(lines);
	}

	fn scroll_preview_down(&mut self, lines: usize) {
		let max = self.preview_areas.metrics.max_scroll;
		self.preview_scroll = self.preview_scroll.saturating_add(lines).min(max);
	}
}
