use ratatui::layout::Rect;

use crate::components::GridLayout;

/// Keyboard cursor and scroll position of the icon grid.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct GridState {
	/// Position of the cursor within the current results.
	pub(crate) cursor: usize,
	/// First visible grid row.
	pub(crate) offset_row: usize,
	pub(crate) layout: GridLayout,
	/// Inner area of the grid from the last draw.
	pub(crate) area: Option<Rect>,
}

impl GridState {
	/// Back to the first cell, e.g. after the results changed.
	pub(crate) fn reset(&mut self) {
		self.cursor = 0;
		self.offset_row = 0;
	}

	/// Keep the cursor and offset inside a result list of `len` entries.
	pub(crate) fn clamp(&mut self, len: usize) {
		self.cursor = self.cursor.min(len.saturating_sub(1));
		let max_offset = self
			.layout
			.rows_for(len)
			.saturating_sub(self.layout.visible_rows);
		self.offset_row = self.offset_row.min(max_offset);
		self.ensure_visible();
	}

	/// The cursor position, if there is anything under it.
	pub(crate) fn position(&self, len: usize) -> Option<usize> {
		(self.cursor < len).then_some(self.cursor)
	}

	pub(crate) fn move_left(&mut self) -> bool {
		if self.cursor == 0 {
			return false;
		}
		self.cursor -= 1;
		self.ensure_visible();
		true
	}

	pub(crate) fn move_right(&mut self, len: usize) -> bool {
		if self.cursor + 1 >= len {
			return false;
		}
		self.cursor += 1;
		self.ensure_visible();
		true
	}

	/// Returns `false` on the first row, where there is nothing above.
	pub(crate) fn move_up(&mut self) -> bool {
		let columns = self.layout.columns;
		if self.cursor < columns {
			return false;
		}
		self.cursor -= columns;
		self.ensure_visible();
		true
	}

	/// Moves a row down, landing on the last cell when the row below is
	/// shorter.
	pub(crate) fn move_down(&mut self, len: usize) -> bool {
		let columns = self.layout.columns;
		let last_row = len.saturating_sub(1) / columns;
		if len == 0 || self.cursor / columns >= last_row {
			return false;
		}
		self.cursor = (self.cursor + columns).min(len - 1);
		self.ensure_visible();
		true
	}

	/// Scroll the view by `rows`, dragging the cursor along when it would
	/// leave the viewport.
	pub(crate) fn scroll(&mut self, rows: isize, len: usize) {
		let max_offset = self
			.layout
			.rows_for(len)
			.saturating_sub(self.layout.visible_rows);
		self.offset_row = self
			.offset_row
			.saturating_add_signed(rows)
			.min(max_offset);

		let columns = self.layout.columns;
		let row = self.cursor / columns;
		let last_visible = self.offset_row + self.layout.visible_rows.saturating_sub(1);
		let col = self.cursor % columns;
		if row < self.offset_row {
			self.cursor = self.offset_row * columns + col;
		} else if row > last_visible {
			self.cursor = last_visible * columns + col;
		}
		self.cursor = self.cursor.min(len.saturating_sub(1));
	}

	fn ensure_visible(&mut self) {
		let row = self.cursor / self.layout.columns;
		let visible = self.layout.visible_rows.max(1);
		if row < self.offset_row {
			self.offset_row = row;
		} else if row >= self.offset_row + visible {
			self.offset_row = row + 1 - visible;
		}
	}
}
