//! Asset sources the catalog can be built from.

use std::fs;
use std::path::{Path, PathBuf};

use include_dir::{Dir, include_dir};
use indexmap::IndexMap;
use tracing::{debug, warn};

use crate::error::CatalogError;
use crate::svg::IconSvg;

static BUILTIN_ICON_DIR: Dir<'static> = include_dir!("$CARGO_MANIFEST_DIR/assets/icons");

const SVG_EXTENSION: &str = "svg";

/// An enumerable mapping from icon names to their SVG payloads.
pub trait AssetSource {
	/// Names exposed by the source, in the order they should be displayed.
	fn names(&self) -> Vec<String>;

	/// Look up the payload registered under `name`.
	fn payload(&self, name: &str) -> Option<IconSvg>;
}

impl<T> AssetSource for &T
where
	T: AssetSource + ?Sized,
{
	fn names(&self) -> Vec<String> {
		<T as AssetSource>::names(*self)
	}

	fn payload(&self, name: &str) -> Option<IconSvg> {
		<T as AssetSource>::payload(*self, name)
	}
}

/// Icons bundled into the binary at compile time.
#[derive(Debug, Default, Clone, Copy)]
pub struct BuiltinSource;

impl BuiltinSource {
	fn file_for(name: &str) -> Option<&'static include_dir::File<'static>> {
		BUILTIN_ICON_DIR.get_file(format!("{name}.{SVG_EXTENSION}"))
	}
}

impl AssetSource for BuiltinSource {
	fn names(&self) -> Vec<String> {
		let mut names: Vec<String> = BUILTIN_ICON_DIR
			.files()
			.filter_map(|file| svg_stem(file.path()))
			.collect();
		names.sort();
		names
	}

	fn payload(&self, name: &str) -> Option<IconSvg> {
		let file = Self::file_for(name)?;
		let markup = file.contents_utf8()?;
		match IconSvg::parse(markup) {
			Ok(svg) => Some(svg),
			Err(error) => {
				warn!(icon = name, %error, "skipping malformed built-in icon");
				None
			}
		}
	}
}

/// Icons read from `*.svg` files in a directory, named after their file stem.
#[derive(Debug, Clone)]
pub struct DirectorySource {
	root: PathBuf,
	icons: IndexMap<String, IconSvg>,
}

impl DirectorySource {
	/// Read every SVG file directly inside `root`.
	///
	/// Subdirectories are not traversed. Files that cannot be read or do not
	/// hold an `<svg>` document are skipped with a warning; names are sorted so
	/// the catalog order does not depend on the filesystem.
	pub fn read(root: impl AsRef<Path>) -> Result<Self, CatalogError> {
		let root = root.as_ref().to_path_buf();
		if !root.is_dir() {
			return Err(CatalogError::NotADirectory { path: root });
		}

		let entries = fs::read_dir(&root).map_err(|source| CatalogError::ReadDir {
			path: root.clone(),
			source,
		})?;

		let mut found = Vec::new();
		for entry in entries {
			let entry = entry.map_err(|source| CatalogError::ReadDir {
				path: root.clone(),
				source,
			})?;
			let path = entry.path();
			if !path.is_file() {
				continue;
			}
			let Some(name) = svg_stem(&path) else {
				continue;
			};
			let markup = match fs::read_to_string(&path) {
				Ok(markup) => markup,
				Err(error) => {
					warn!(path = %path.display(), %error, "skipping unreadable icon");
					continue;
				}
			};
			match IconSvg::parse(markup) {
				Ok(svg) => found.push((name, svg)),
				Err(error) => warn!(path = %path.display(), %error, "skipping malformed icon"),
			}
		}

		found.sort_by(|a, b| a.0.cmp(&b.0));
		debug!(root = %root.display(), count = found.len(), "read icon directory");

		Ok(Self {
			root,
			icons: found.into_iter().collect(),
		})
	}

	/// Directory the icons were read from.
	#[must_use]
	pub fn root(&self) -> &Path {
		&self.root
	}
}

impl AssetSource for DirectorySource {
	fn names(&self) -> Vec<String> {
		self.icons.keys().cloned().collect()
	}

	fn payload(&self, name: &str) -> Option<IconSvg> {
		self.icons.get(name).cloned()
	}
}

/// In-memory source preserving insertion order, used by embedders and tests.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
	icons: IndexMap<String, IconSvg>,
}

impl MemorySource {
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	/// Register `svg` under `name`, replacing any earlier payload.
	#[must_use]
	pub fn with(mut self, name: impl Into<String>, svg: IconSvg) -> Self {
		self.insert(name, svg);
		self
	}

	pub fn insert(&mut self, name: impl Into<String>, svg: IconSvg) {
		self.icons.insert(name.into(), svg);
	}
}

impl AssetSource for MemorySource {
	fn names(&self) -> Vec<String> {
		self.icons.keys().cloned().collect()
	}

	fn payload(&self, name: &str) -> Option<IconSvg> {
		self.icons.get(name).cloned()
	}
}

fn svg_stem(path: &Path) -> Option<String> {
	let extension = path.extension()?.to_str()?;
	if !extension.eq_ignore_ascii_case(SVG_EXTENSION) {
		return None;
	}
	let stem = path.file_stem()?.to_str()?;
	if stem.is_empty() {
		return None;
	}
	Some(stem.to_string())
}

#[cfg(test)]
mod tests {
	use std::fs;

	use super::*;

	const DOT: &str = "<svg viewBox=\"0 0 24 24\"><circle cx=\"12\" cy=\"12\" r=\"4\"/></svg>";

	#[test]
	fn builtin_icons_are_sorted_and_loadable() {
		let source = BuiltinSource;
		let names = source.names();
		assert!(!names.is_empty(), "bundled icon set should not be empty");

		let mut sorted = names.clone();
		sorted.sort();
		assert_eq!(names, sorted);

		for name in &names {
			assert!(source.payload(name).is_some(), "{name} should parse");
		}
	}

	#[test]
	fn directory_source_reads_svg_files_only() {
		let dir = tempfile::tempdir().expect("tempdir");
		fs::write(dir.path().join("zoom.svg"), DOT).expect("write");
		fs::write(dir.path().join("arrow.SVG"), DOT).expect("write");
		fs::write(dir.path().join("notes.txt"), "not an icon").expect("write");
		fs::write(dir.path().join("broken.svg"), "<div></div>").expect("write");
		fs::create_dir(dir.path().join("nested.svg")).expect("mkdir");

		let source = DirectorySource::read(dir.path()).expect("read dir");
		assert_eq!(source.names(), vec!["arrow".to_string(), "zoom".to_string()]);
		assert_eq!(source.root(), dir.path());
		assert!(source.payload("broken").is_none());
	}

	#[test]
	fn directory_source_requires_directory() {
		let dir = tempfile::tempdir().expect("tempdir");
		let file = dir.path().join("file.svg");
		fs::write(&file, DOT).expect("write");

		let error = DirectorySource::read(&file).expect_err("file is not a dir");
		assert!(matches!(error, CatalogError::NotADirectory { .. }));
	}

	#[test]
	fn memory_source_preserves_insertion_order() {
		let svg = IconSvg::parse(DOT).expect("svg");
		let source = MemorySource::new()
			.with("search", svg.clone())
			.with("close", svg.clone())
			.with("download", svg);
		assert_eq!(source.names(), vec!["search", "close", "download"]);
	}
}
