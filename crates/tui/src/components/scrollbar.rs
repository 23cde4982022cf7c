//! Vertical scrollbar shared by the scrollable panes.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::widgets::{Scrollbar, ScrollbarOrientation, ScrollbarState};

use crate::style::Theme;

/// Scrolling metrics for a viewport over `content_length` lines.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScrollMetrics {
	pub content_length: usize,
	pub viewport_len: usize,
	pub max_scroll: usize,
	pub needs_scrollbar: bool,
}

impl ScrollMetrics {
	/// Returns empty metrics if either value is zero.
	#[must_use]
	pub fn compute(content_length: usize, viewport_height: usize) -> Self {
		if content_length == 0 || viewport_height == 0 {
			return Self::default();
		}

		let viewport_len = viewport_height.min(content_length);
		Self {
			content_length,
			viewport_len,
			max_scroll: content_length - viewport_len,
			needs_scrollbar: content_length > viewport_len,
		}
	}
}

/// Check if a point (column, row) is inside a rectangle.
#[must_use]
pub fn point_in_rect(column: u16, row: u16, area: Rect) -> bool {
	column >= area.x
		&& column < area.x.saturating_add(area.width)
		&& row >= area.y
		&& row < area.y.saturating_add(area.height)
}

/// Render a scrollbar on the right edge of `area` when the content overflows.
///
/// Returns the area left for content.
pub fn render_scrollbar(
	frame: &mut Frame,
	area: Rect,
	metrics: ScrollMetrics,
	scroll: usize,
	theme: &Theme,
) -> Rect {
	if !metrics.needs_scrollbar || area.width < 2 {
		return area;
	}

	let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
		.begin_symbol(None)
		.end_symbol(None)
		.track_symbol(Some("│"))
		.style(Style::default().fg(theme.header.fg.unwrap_or(Color::Reset)));
	let mut state = ScrollbarState::new(metrics.max_scroll.saturating_add(1))
		.viewport_content_length(metrics.viewport_len)
		.position(scroll.min(metrics.max_scroll));

	let bar = Rect {
		x: area.right().saturating_sub(1),
		width: 1,
		..area
	};
	frame.render_stateful_widget(scrollbar, bar, &mut state);

	Rect {
		width: area.width - 1,
		..area
	}
}
