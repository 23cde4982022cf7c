//! Single-line query input backed by `tui-textarea`.

use ratatui::Frame;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::layout::Rect;
use ratatui::style::Style;
use tui_textarea::{CursorMove, TextArea};

/// Search field holding the current keyword.
#[derive(Debug, Clone)]
pub struct QueryInput<'a> {
	textarea: TextArea<'a>,
}

impl Default for QueryInput<'_> {
	fn default() -> Self {
		Self::new("")
	}
}

impl<'a> QueryInput<'a> {
	/// Create an input pre-filled with `initial`, cursor at the end.
	#[must_use]
	pub fn new(initial: impl Into<String>) -> Self {
		let mut textarea = TextArea::new(vec![initial.into()]);
		textarea.set_cursor_line_style(Style::default());
		textarea.move_cursor(CursorMove::End);
		Self { textarea }
	}

	/// Current text of the input.
	#[must_use]
	pub fn text(&self) -> &str {
		self.textarea
			.lines()
			.first()
			.map(String::as_str)
			.unwrap_or_default()
	}

	/// Feed a key to the textarea. Keys that would break the single line,
	/// such as Enter, are ignored. Returns `true` when the text changed.
	pub fn input(&mut self, key: KeyEvent) -> bool {
		let newline = matches!(key.code, KeyCode::Enter)
			|| (key.modifiers.contains(KeyModifiers::CONTROL)
				&& matches!(key.code, KeyCode::Char('m' | 'j')));
		if newline {
			return false;
		}
		let before = self.text().to_owned();
		self.textarea.input(key);
		self.text() != before
	}

	/// Erase the text. Returns `true` when there was anything to erase.
	pub fn clear(&mut self) -> bool {
		if self.text().is_empty() {
			return false;
		}
		*self = Self::new("");
		true
	}

	/// Show or hide the cursor block, so it only appears while focused.
	pub fn set_focused(&mut self, focused: bool, style: Style) {
		let cursor = if focused {
			style.add_modifier(ratatui::style::Modifier::REVERSED)
		} else {
			Style::default()
		};
		self.textarea.set_cursor_style(cursor);
		self.textarea.set_style(style);
	}

	pub fn render_textarea(&self, frame: &mut Frame, area: Rect) {
		frame.render_widget(&self.textarea, area);
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn key(code: KeyCode) -> KeyEvent {
		KeyEvent::new(code, KeyModifiers::NONE)
	}

	#[test]
	fn typing_appends_and_reports_change() {
		let mut input = QueryInput::new("cl");
		assert!(input.input(key(KeyCode::Char('o'))));
		assert_eq!(input.text(), "clo");
		assert!(input.input(key(KeyCode::Backspace)));
		assert_eq!(input.text(), "cl");
	}

	#[test]
	fn enter_does_not_split_the_line() {
		let mut input = QueryInput::new("close");
		assert!(!input.input(key(KeyCode::Enter)));
		assert_eq!(input.text(), "close");
	}

	#[test]
	fn cursor_movement_is_not_a_change() {
		let mut input = QueryInput::new("close");
		assert!(!input.input(key(KeyCode::Left)));
	}

	#[test]
	fn clear_empties_the_text() {
		let mut input = QueryInput::new("close");
		assert!(input.clear());
		assert_eq!(input.text(), "");
		assert!(!input.clear());
	}
}
