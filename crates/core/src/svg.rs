//! The graphical payload carried by each catalog entry.
//!
//! Icons are kept as SVG markup. The payload is treated as opaque apart from
//! the root element, which is inspected to validate the markup, read the
//! `viewBox`, and normalise the namespace on export.

use std::borrow::Cow;

use serde::Serialize;

use crate::error::SvgError;

/// Namespace stamped onto exported markup when the source omitted it.
pub const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";

/// SVG markup for a single icon.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct IconSvg {
	markup: Cow<'static, str>,
}

impl IconSvg {
	/// Validate `markup` and wrap it as an icon payload.
	pub fn parse(markup: impl Into<Cow<'static, str>>) -> Result<Self, SvgError> {
		let markup = markup.into();
		let trimmed = markup.trim();
		if trimmed.is_empty() {
			return Err(SvgError::Empty);
		}

		let (start, end) = root_tag_bounds(trimmed).ok_or(SvgError::MissingRoot)?;
		let open_tag = &trimmed[start..=end];
		let self_closing = open_tag.trim_end_matches('>').trim_end().ends_with('/');
		if !self_closing && !trimmed.ends_with("</svg>") {
			return Err(SvgError::Unterminated);
		}

		Ok(Self { markup })
	}

	/// The markup exactly as it was provided by the asset source.
	#[must_use]
	pub fn raw(&self) -> &str {
		&self.markup
	}

	/// The `viewBox` attribute of the root element, if present.
	#[must_use]
	pub fn view_box(&self) -> Option<&str> {
		let trimmed = self.markup.trim();
		let (start, end) = root_tag_bounds(trimmed)?;
		attribute(&trimmed[start..=end], "viewBox")
	}

	/// Serialise the icon to standalone SVG markup.
	///
	/// Anything preceding the root element (XML declaration, comments, doctype)
	/// is dropped, the SVG namespace is added when missing, and the document is
	/// terminated with a newline.
	#[must_use]
	pub fn to_markup(&self) -> String {
		let trimmed = self.markup.trim();
		let Some((start, end)) = root_tag_bounds(trimmed) else {
			return format!("{trimmed}\n");
		};

		let document = &trimmed[start..];
		let open_tag = &trimmed[start..=end];
		let mut out = String::with_capacity(document.len() + SVG_NAMESPACE.len() + 16);
		if attribute(open_tag, "xmlns").is_some() {
			out.push_str(document);
		} else {
			out.push_str("<svg xmlns=\"");
			out.push_str(SVG_NAMESPACE);
			out.push('"');
			out.push_str(&document["<svg".len()..]);
		}
		out.push('\n');
		out
	}
}

/// Locate the `<svg ...>` start tag, returning the byte offsets of its `<` and
/// closing `>`.
fn root_tag_bounds(markup: &str) -> Option<(usize, usize)> {
	let mut search_from = 0;
	let start = loop {
		let offset = markup[search_from..].find("<svg")?;
		let candidate = search_from + offset;
		let next = markup[candidate + "<svg".len()..].chars().next();
		match next {
			Some(ch) if ch.is_whitespace() || ch == '>' || ch == '/' => break candidate,
			_ => search_from = candidate + "<svg".len(),
		}
	};

	let mut quote = None;
	for (offset, ch) in markup[start..].char_indices() {
		match (quote, ch) {
			(None, '"' | '\'') => quote = Some(ch),
			(Some(open), ch) if ch == open => quote = None,
			(None, '>') => return Some((start, start + offset)),
			_ => {}
		}
	}
	None
}

/// Read a quoted attribute value out of a start tag.
fn attribute<'a>(tag: &'a str, name: &str) -> Option<&'a str> {
	let mut consumed = 0;
	while let Some(pos) = tag[consumed..].find(name) {
		let at = consumed + pos;
		consumed = at + name.len();

		let preceded_by_space = tag[..at].chars().next_back().is_some_and(char::is_whitespace);
		if !preceded_by_space {
			continue;
		}
		let Some(value) = tag[consumed..].trim_start().strip_prefix('=') else {
			continue;
		};
		let value = value.trim_start();
		let quote = value.chars().next()?;
		if quote != '"' && quote != '\'' {
			continue;
		}
		let inner = &value[1..];
		let end = inner.find(quote)?;
		return Some(&inner[..end]);
	}
	None
}
