//! Preview pane for the previewed icon: name, usage snippet, and markup.

use icofz_core::CatalogEntry;
use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::components::scrollbar::{ScrollMetrics, render_scrollbar};
use crate::style::Theme;

/// Argument bundle for [`render_preview`].
pub struct PreviewContext<'a> {
	pub entry: Option<&'a CatalogEntry>,
	pub snippet: Option<String>,
	/// Whether the previewed entry is the active one.
	pub active: bool,
	/// Text of the copied notice, when it is showing.
	pub notice: Option<&'a str>,
	pub title: &'a str,
	pub scroll: usize,
	pub focused: bool,
	pub theme: &'a Theme,
}

/// Regions of the rendered preview used for mouse handling.
#[derive(Debug, Clone, Copy, Default)]
pub struct PreviewAreas {
	/// The clickable icon name.
	pub name: Option<Rect>,
	/// The scrollable body.
	pub body: Option<Rect>,
	pub metrics: ScrollMetrics,
}

/// Render the preview pane into `area`.
pub fn render_preview(frame: &mut Frame, area: Rect, ctx: PreviewContext<'_>) -> PreviewAreas {
	let theme = ctx.theme;
	let block = Block::default()
		.borders(Borders::ALL)
		.border_set(ratatui::symbols::border::ROUNDED)
		.border_style(theme.border_style(ctx.focused))
		.title(format!(" {} ", ctx.title));
	let inner = block.inner(area);
	frame.render_widget(block, area);

	let Some(entry) = ctx.entry else {
		let message = Paragraph::new(Span::styled("No icon selected", theme.empty_style()))
			.alignment(Alignment::Center);
		frame.render_widget(message, inner);
		return PreviewAreas::default();
	};
	if inner.height == 0 {
		return PreviewAreas::default();
	}

	let name_style = if ctx.active {
		theme.active
	} else {
		theme.header.add_modifier(Modifier::BOLD)
	};
	let mut header = vec![Span::styled(entry.name().to_string(), name_style)];
	if let Some(notice) = ctx.notice {
		header.push(Span::raw("  "));
		header.push(Span::styled(notice.to_string(), theme.notice));
	}
	frame.buffer_mut().set_line(inner.x, inner.y, &Line::from(header), inner.width);
	let name = Rect {
		width: (entry.name().width() as u16).min(inner.width),
		height: 1,
		..inner
	};

	let body_area = Rect {
		y: inner.y + 1,
		height: inner.height - 1,
		..inner
	};
	let lines = body_lines(entry, ctx.snippet.as_deref(), theme);
	let metrics = ScrollMetrics::compute(lines.len(), usize::from(body_area.height));
	let scroll = ctx.scroll.min(metrics.max_scroll);
	let content = render_scrollbar(frame, body_area, metrics, scroll, theme);
	let body = Paragraph::new(lines).scroll((u16::try_from(scroll).unwrap_or(u16::MAX), 0));
	frame.render_widget(body, content);

	PreviewAreas {
		name: Some(name),
		body: Some(body_area),
		metrics,
	}
}

fn body_lines(entry: &CatalogEntry, snippet: Option<&str>, theme: &Theme) -> Vec<Line<'static>> {
	let muted = theme.empty_style();
	let heading = theme.header.add_modifier(Modifier::BOLD);
	let mut lines = Vec::new();

	if let Some(view_box) = entry.asset().view_box() {
		lines.push(Line::from(Span::styled(format!("viewBox {view_box}"), muted)));
	}
	lines.push(Line::default());

	if let Some(snippet) = snippet {
		lines.push(Line::from(Span::styled("Usage", heading)));
		lines.extend(snippet.lines().map(|line| Line::from(line.to_string())));
		lines.push(Line::default());
	}

	lines.push(Line::from(Span::styled("SVG", heading)));
	lines.extend(
		entry
			.asset()
			.to_markup()
			.lines()
			.map(|line| Line::from(Span::styled(line.to_string(), muted))),
	);
	lines
}
