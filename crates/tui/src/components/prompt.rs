//! The search prompt: input, placeholder, clear button, and result count.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use unicode_width::UnicodeWidthStr;

use crate::input::QueryInput;
use crate::style::Theme;

/// Glyph of the clear button shown while the input holds text.
pub const CLEAR_SYMBOL: &str = "×";
const PROMPT_SYMBOL: &str = "> ";

/// Argument bundle for rendering the input row.
pub struct InputContext<'a> {
	pub input: &'a QueryInput<'a>,
	pub placeholder: &'a str,
	/// Number of results and catalog size, shown on the right.
	pub counts: (usize, usize),
	pub area: Rect,
	pub theme: &'a Theme,
}

/// Screen regions of the rendered prompt, used for mouse hit-testing.
#[derive(Debug, Clone, Copy, Default)]
pub struct PromptAreas {
	pub input: Option<Rect>,
	pub clear: Option<Rect>,
}

/// Render the prompt row and return where its clickable parts ended up.
pub fn render_input(frame: &mut Frame, ctx: InputContext<'_>) -> PromptAreas {
	let InputContext {
		input,
		placeholder,
		counts,
		area,
		theme,
	} = ctx;
	if area.width == 0 || area.height == 0 {
		return PromptAreas::default();
	}

	let prompt_width = (PROMPT_SYMBOL.width() as u16).min(area.width);
	frame.buffer_mut().set_line(
		area.x,
		area.y,
		&Line::from(Span::styled(PROMPT_SYMBOL, theme.header)),
		prompt_width,
	);

	let count = format!("{} / {}", counts.0, counts.1);
	let count_width = count.width() as u16;
	// Room for the count, a gap, the clear button and another gap.
	let reserved = count_width.saturating_add(4);
	let input_area = Rect {
		x: area.x + prompt_width,
		y: area.y,
		width: area.width.saturating_sub(prompt_width).saturating_sub(reserved),
		height: 1,
	};

	input.render_textarea(frame, input_area);
	if input.text().is_empty() {
		render_placeholder(frame, input_area, placeholder, theme);
	}

	let clear = (!input.text().is_empty() && input_area.width > 0)
		.then(|| Rect {
			x: input_area.right().saturating_add(1),
			y: area.y,
			width: CLEAR_SYMBOL.width() as u16,
			height: 1,
		})
		.filter(|button| button.right() <= area.right());
	if let Some(button) = clear {
		frame.buffer_mut().set_line(
			button.x,
			button.y,
			&Line::from(Span::styled(CLEAR_SYMBOL, theme.header)),
			button.width,
		);
	}

	if count_width < area.width {
		frame.buffer_mut().set_line(
			area.right() - count_width,
			area.y,
			&Line::from(Span::styled(count, theme.empty_style())),
			count_width,
		);
	}

	PromptAreas {
		input: Some(input_area),
		clear,
	}
}

fn render_placeholder(frame: &mut Frame, area: Rect, text: &str, theme: &Theme) {
	if area.width == 0 || text.is_empty() {
		return;
	}
	let display: String = text.chars().take(area.width as usize).collect();
	frame.buffer_mut().set_line(
		area.left(),
		area.top(),
		&Line::from(Span::styled(display, theme.empty_style())),
		area.width,
	);
}
