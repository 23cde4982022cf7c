//! The immutable icon catalog built once at startup.
//!
//! A [`Catalog`] is an ordered list of [`CatalogEntry`] values produced from an
//! [`AssetSource`]. It is built once, shared behind an `Arc`, and never mutated
//! afterwards; search results and selections refer to entries by their index.

mod source;

use std::collections::HashSet;

use serde::Serialize;
use tracing::{debug, info};

pub use source::{AssetSource, BuiltinSource, DirectorySource, MemorySource};

use crate::svg::IconSvg;

/// Key of the generic renderer exported next to the icons themselves. It is
/// not an icon and never enters the catalog.
pub const RESERVED_ASSET: &str = "Icon";

/// A named icon.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogEntry {
	name: String,
	#[serde(rename = "svg")]
	asset: IconSvg,
}

impl CatalogEntry {
	#[must_use]
	pub fn new(name: impl Into<String>, asset: IconSvg) -> Self {
		Self {
			name: name.into(),
			asset,
		}
	}

	/// Unique name of the icon within its catalog.
	#[must_use]
	pub fn name(&self) -> &str {
		&self.name
	}

	/// SVG payload of the icon.
	#[must_use]
	pub fn asset(&self) -> &IconSvg {
		&self.asset
	}
}

/// Ordered, immutable collection of icons.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
	entries: Vec<CatalogEntry>,
}

impl Catalog {
	/// Build the catalog from `source`, preserving the source's order.
	///
	/// The [`RESERVED_ASSET`] key is skipped, as are names without a payload.
	/// If a source reports the same name twice only the first is kept so that
	/// names stay unique.
	pub fn load(source: impl AssetSource) -> Self {
		let names = source.names();
		let mut seen = HashSet::with_capacity(names.len());
		let mut entries = Vec::with_capacity(names.len());

		for name in names {
			if name == RESERVED_ASSET {
				continue;
			}
			if !seen.insert(name.clone()) {
				debug!(icon = %name, "ignoring duplicate icon name");
				continue;
			}
			let Some(asset) = source.payload(&name) else {
				debug!(icon = %name, "asset source has no payload for name");
				continue;
			};
			entries.push(CatalogEntry { name, asset });
		}

		info!(count = entries.len(), "icon catalog loaded");
		Self { entries }
	}

	/// Build a catalog directly from entries, keeping the first of any
	/// duplicate names and dropping the reserved key.
	#[must_use]
	pub fn from_entries(entries: impl IntoIterator<Item = CatalogEntry>) -> Self {
		let mut seen = HashSet::new();
		let entries = entries
			.into_iter()
			.filter(|entry| entry.name != RESERVED_ASSET && seen.insert(entry.name.clone()))
			.collect();
		Self { entries }
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	#[must_use]
	pub fn get(&self, index: usize) -> Option<&CatalogEntry> {
		self.entries.get(index)
	}

	/// First entry in catalog order; the default preview.
	#[must_use]
	pub fn first(&self) -> Option<&CatalogEntry> {
		self.entries.first()
	}

	/// Position of the entry called `name`.
	#[must_use]
	pub fn position(&self, name: &str) -> Option<usize> {
		self.entries.iter().position(|entry| entry.name == name)
	}

	/// Look up an entry by name.
	#[must_use]
	pub fn find(&self, name: &str) -> Option<&CatalogEntry> {
		self.position(name).and_then(|index| self.get(index))
	}

	pub fn iter(&self) -> std::slice::Iter<'_, CatalogEntry> {
		self.entries.iter()
	}

	/// Entry names in catalog order.
	pub fn names(&self) -> impl Iterator<Item = &str> {
		self.entries.iter().map(|entry| entry.name.as_str())
	}
}

impl<'a> IntoIterator for &'a Catalog {
	type Item = &'a CatalogEntry;
	type IntoIter = std::slice::Iter<'a, CatalogEntry>;

	fn into_iter(self) -> Self::IntoIter {
		self.iter()
	}
}
