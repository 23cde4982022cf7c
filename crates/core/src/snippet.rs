/// Size passed to the `Icon` component when none is configured.
pub const DEFAULT_ICON_SIZE: u16 = 24;

/// Package the icon set is imported from.
const ICON_PACKAGE: &str = "@wordpress/icons";

/// Usage snippet for the icon called `name` at the default size.
#[must_use]
pub fn snippet(name: &str) -> String {
	snippet_with_size(name, DEFAULT_ICON_SIZE)
}

/// Usage snippet for the icon called `name`: an import line, a blank line,
/// and the component invocation.
#[must_use]
pub fn snippet_with_size(name: &str, size: u16) -> String {
	format!(
		"import {{ Icon, {name} }} from '{ICON_PACKAGE}';\n\n<Icon icon={{ {name} }} size={{ {size} }} />"
	)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn snippet_imports_and_uses_the_icon() {
		let text = snippet("search");
		let lines: Vec<&str> = text.lines().collect();
		assert_eq!(
			lines,
			vec![
				"import { Icon, search } from '@wordpress/icons';",
				"",
				"<Icon icon={ search } size={ 24 } />",
			]
		);
	}

	#[test]
	fn size_is_a_literal_argument() {
		assert!(snippet_with_size("close", 36).ends_with("size={ 36 } />"));
	}
}
