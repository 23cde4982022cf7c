//! The icon grid: result names laid out in fixed-width columns.

use frizbee::{Config, match_indices};
use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::components::scrollbar::{ScrollMetrics, render_scrollbar};
use crate::style::Theme;

const MIN_CELL_WIDTH: u16 = 8;
const MAX_CELL_WIDTH: u16 = 28;
const CELL_PADDING: u16 = 2;
const ELLIPSIS: char = '…';

/// Geometry of the grid for a given inner area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridLayout {
	pub columns: usize,
	pub cell_width: u16,
	pub visible_rows: usize,
}

impl Default for GridLayout {
	fn default() -> Self {
		Self {
			columns: 1,
			cell_width: MIN_CELL_WIDTH,
			visible_rows: 1,
		}
	}
}

impl GridLayout {
	/// Fit cells wide enough for the longest name into `inner`.
	#[must_use]
	pub fn compute<'a>(inner: Rect, names: impl IntoIterator<Item = &'a str>) -> Self {
		let longest = names
			.into_iter()
			.map(|name| name.width() as u16)
			.max()
			.unwrap_or(0);
		let cell_width = longest
			.saturating_add(CELL_PADDING)
			.clamp(MIN_CELL_WIDTH, MAX_CELL_WIDTH)
			.min(inner.width.max(1));
		Self {
			columns: usize::from((inner.width / cell_width).max(1)),
			cell_width,
			visible_rows: usize::from(inner.height.max(1)),
		}
	}

	/// Number of rows needed for `len` cells.
	#[must_use]
	pub fn rows_for(&self, len: usize) -> usize {
		len.div_ceil(self.columns)
	}

	/// Result position under the screen point, if any cell is there.
	#[must_use]
	pub fn position_at(&self, inner: Rect, offset_row: usize, column: u16, row: u16) -> Option<usize> {
		if column < inner.x || row < inner.y || row >= inner.bottom() {
			return None;
		}
		let col = usize::from((column - inner.x) / self.cell_width);
		if col >= self.columns {
			return None;
		}
		let grid_row = offset_row + usize::from(row - inner.y);
		Some(grid_row * self.columns + col)
	}
}

/// One rendered grid cell.
#[derive(Debug, Clone)]
pub struct GridCell<'a> {
	pub name: &'a str,
	/// The cell under the keyboard cursor.
	pub cursor: bool,
	/// The picked icon.
	pub active: bool,
}

/// Argument bundle for [`render_grid`].
pub struct GridContext<'a> {
	pub cells: Vec<GridCell<'a>>,
	pub layout: GridLayout,
	pub offset_row: usize,
	/// Keyword used to highlight matched characters.
	pub highlight: Option<(&'a str, Config)>,
	pub title: &'a str,
	pub empty_message: &'a str,
	pub focused: bool,
	pub theme: &'a Theme,
}

/// Inner area of the grid block, before the scrollbar is carved out.
#[must_use]
pub fn grid_inner(area: Rect) -> Rect {
	Block::default().borders(Borders::ALL).inner(area)
}

/// Render the grid into `area`.
pub fn render_grid(frame: &mut Frame, area: Rect, ctx: GridContext<'_>) {
	let theme = ctx.theme;
	let block = Block::default()
		.borders(Borders::ALL)
		.border_set(ratatui::symbols::border::ROUNDED)
		.border_style(theme.border_style(ctx.focused))
		.title(format!(" {} ", ctx.title));
	let inner = block.inner(area);
	frame.render_widget(block, area);

	if ctx.cells.is_empty() {
		let message = Paragraph::new(Span::styled(ctx.empty_message, theme.empty_style()))
			.alignment(Alignment::Center);
		frame.render_widget(message, inner);
		return;
	}

	let layout = ctx.layout;
	let metrics = ScrollMetrics::compute(layout.rows_for(ctx.cells.len()), layout.visible_rows);
	let content = render_scrollbar(frame, inner, metrics, ctx.offset_row, theme);

	let first = ctx.offset_row * layout.columns;
	let visible = layout.visible_rows * layout.columns;
	for (slot, cell) in ctx.cells.iter().skip(first).take(visible).enumerate() {
		let x = content.x + (slot % layout.columns) as u16 * layout.cell_width;
		let y = content.y + (slot / layout.columns) as u16;
		if x >= content.right() {
			continue;
		}
		let width = layout.cell_width.min(content.right() - x);
		let matched = ctx
			.highlight
			.as_ref()
			.and_then(|(needle, config)| match_indices(needle, cell.name, config))
			.map(|found| found.indices)
			.unwrap_or_default();
		let line = cell_line(cell, &matched, width, ctx.focused, theme);
		frame.buffer_mut().set_line(x, y, &line, width);
	}
}

fn cell_line(
	cell: &GridCell<'_>,
	matched: &[usize],
	width: u16,
	focused: bool,
	theme: &Theme,
) -> Line<'static> {
	let mut base = Style::default();
	if cell.active {
		base = base.patch(theme.active);
	}
	if cell.cursor && focused {
		base = base.patch(theme.row_highlight);
	}
	let marked = base.patch(theme.highlight);

	let label_width = usize::from(width.saturating_sub(1));
	let truncated = cell.name.width() > label_width;
	let keep = if truncated {
		label_width.saturating_sub(1)
	} else {
		label_width
	};

	let mut spans: Vec<Span<'static>> = Vec::new();
	let mut used = 0;
	for (offset, ch) in cell.name.char_indices() {
		let ch_width = ch.width().unwrap_or(0);
		if used + ch_width > keep {
			break;
		}
		used += ch_width;
		let style = if matched.contains(&offset) { marked } else { base };
		spans.push(Span::styled(ch.to_string(), style));
	}
	if truncated {
		spans.push(Span::styled(ELLIPSIS.to_string(), base));
		used += 1;
	}
	let padding = usize::from(width).saturating_sub(used);
	if padding > 1 {
		spans.push(Span::styled(" ".repeat(padding - 1), base));
	}
	Line::from(spans)
}
