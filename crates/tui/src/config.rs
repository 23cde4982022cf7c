/// Text rendered around the finder's panes.
#[derive(Debug, Clone)]
pub struct UiLabels {
	/// Title of the window frame.
	pub title: String,
	/// Line shown under the title.
	pub subtitle: String,
	/// Placeholder shown while the search input is empty.
	pub placeholder: String,
	/// Title of the icon grid.
	pub grid_title: String,
	/// Title of the preview pane.
	pub preview_title: String,
	/// Notice shown after an icon name was copied.
	pub copied_notice: String,
	/// Message shown when nothing matches the keyword.
	pub no_results: String,
}

impl Default for UiLabels {
	fn default() -> Self {
		Self {
			title: "Gutenberg Icons Finder".to_string(),
			subtitle: "Just another icon finder for developers building Gutenberg blocks."
				.to_string(),
			placeholder: "Search icons...".to_string(),
			grid_title: "Icons".to_string(),
			preview_title: "Preview".to_string(),
			copied_notice: "Copied!".to_string(),
			no_results: "No icons found".to_string(),
		}
	}
}

impl UiLabels {
	/// Replace the window title, keeping the other labels.
	#[must_use]
	pub fn with_title(mut self, title: impl Into<String>) -> Self {
		self.title = title.into();
		self
	}
}
