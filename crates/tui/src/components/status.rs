use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};

use crate::style::Theme;

/// Keyboard hints for each focus target.
pub const INPUT_HINTS: &str = "↓/Tab grid · Ctrl+U clear · Enter accept · Esc quit";
pub const GRID_HINTS: &str = "←↑↓→ move · Space copy · y recopy · e export · / search · Enter accept";

/// Render the bottom status line: a message when there is one, else hints.
pub fn render_status(
	frame: &mut Frame,
	area: Rect,
	message: Option<&str>,
	hints: &str,
	theme: &Theme,
) {
	if area.width == 0 || area.height == 0 {
		return;
	}
	let span = match message {
		Some(message) => Span::styled(message.to_string(), theme.notice),
		None => Span::styled(hints.to_string(), theme.empty_style()),
	};
	frame
		.buffer_mut()
		.set_line(area.x, area.y, &Line::from(span), area.width);
}
