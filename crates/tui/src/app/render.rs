use icofz_core::{CatalogEntry, config_for_query};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Margin, Rect};
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};

use super::{App, Focus};
use crate::components::status::{GRID_HINTS, INPUT_HINTS};
use crate::components::{
	GridCell, GridContext, GridLayout, InputContext, PreviewContext, grid_inner, render_grid,
	render_input, render_preview, render_status,
};

/// Below this width the preview pane is hidden.
const PREVIEW_MIN_WIDTH: u16 = 60;

impl App<'_> {
	pub fn draw(&mut self, frame: &mut Frame) {
		let area = frame.area().inner(Margin {
			vertical: 0,
			horizontal: 1,
		});
		let [title, subtitle, prompt, body, status] = Layout::vertical([
			Constraint::Length(1),
			Constraint::Length(1),
			Constraint::Length(1),
			Constraint::Min(3),
			Constraint::Length(1),
		])
		.areas(area);

		frame.buffer_mut().set_line(
			title.x,
			title.y,
			&Line::from(Span::styled(
				self.ui.title.clone(),
				self.style.theme.header.add_modifier(Modifier::BOLD),
			)),
			title.width,
		);
		frame.buffer_mut().set_line(
			subtitle.x,
			subtitle.y,
			&Line::from(Span::styled(
				self.ui.subtitle.clone(),
				self.style.theme.empty_style(),
			)),
			subtitle.width,
		);

		self.prompt_areas = render_input(
			frame,
			InputContext {
				input: &self.input,
				placeholder: &self.ui.placeholder,
				counts: (self.finder.result_count(), self.finder.catalog().len()),
				area: prompt,
				theme: &self.style.theme,
			},
		);

		if body.width >= PREVIEW_MIN_WIDTH {
			let [grid, preview] =
				Layout::horizontal([Constraint::Percentage(60), Constraint::Percentage(40)])
					.areas(body);
			self.render_grid_pane(frame, grid);
			self.render_preview_pane(frame, preview);
		} else {
			self.preview_areas = Default::default();
			self.render_grid_pane(frame, body);
		}

		let hints = match self.focus {
			Focus::Input => INPUT_HINTS,
			Focus::Grid => GRID_HINTS,
		};
		render_status(
			frame,
			status,
			self.status_message().as_deref(),
			hints,
			&self.style.theme,
		);
	}

	fn render_grid_pane(&mut self, frame: &mut Frame, area: Rect) {
		let inner = grid_inner(area);
		// Leave the right-most column for the scrollbar.
		let cells_area = Rect {
			width: inner.width.saturating_sub(1),
			..inner
		};
		self.grid.layout = GridLayout::compute(cells_area, self.finder.results().map(CatalogEntry::name));
		self.grid.area = Some(cells_area);
		let len = self.finder.result_count();
		self.grid.clamp(len);

		let keyword = self.finder.keyword();
		let highlight = (!keyword.is_empty()).then(|| (keyword, config_for_query(keyword)));
		let active = self.finder.selection().active();
		let cells = self
			.finder
			.result_indices()
			.iter()
			.zip(self.finder.results())
			.enumerate()
			.map(|(position, (&index, entry))| GridCell {
				name: entry.name(),
				cursor: position == self.grid.cursor,
				active: active == Some(index),
			})
			.collect();

		render_grid(
			frame,
			area,
			GridContext {
				cells,
				layout: self.grid.layout,
				offset_row: self.grid.offset_row,
				highlight,
				title: &self.ui.grid_title,
				empty_message: &self.ui.no_results,
				focused: self.focus == Focus::Grid,
				theme: &self.style.theme,
			},
		);
	}

	fn render_preview_pane(&mut self, frame: &mut Frame, area: Rect) {
		let entry = self.finder.preview();
		// With an active icon the preview always shows it.
		let active = self.finder.active().is_some();
		let notice = (active && self.finder.copied()).then_some(self.ui.copied_notice.as_str());

		self.preview_areas = render_preview(
			frame,
			area,
			PreviewContext {
				entry,
				snippet: self.finder.snippet(self.snippet_size),
				active,
				notice,
				title: &self.ui.preview_title,
				scroll: self.preview_scroll,
				focused: false,
				theme: &self.style.theme,
			},
		);
		self.preview_scroll = self
			.preview_scroll
			.min(self.preview_areas.metrics.max_scroll);
	}
}
