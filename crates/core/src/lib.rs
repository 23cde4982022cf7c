//! Core crate for the `icofz` icon finder.
//!
//! The root module re-exports the catalog, matcher, and selection state types
//! so that front-ends can drive a search session without digging through the
//! module hierarchy.

pub mod app_dirs;
pub mod catalog;
pub mod collab;
pub mod error;
pub mod export;
pub mod matcher;
pub mod snippet;
pub mod state;
pub mod svg;

pub use crate::catalog::{
	AssetSource, BuiltinSource, Catalog, CatalogEntry, DirectorySource, MemorySource,
	RESERVED_ASSET,
};
pub use crate::collab::{Clipboard, Downloader};
pub use crate::error::{CatalogError, ClipboardError, ExportError, SvgError};
pub use crate::export::{DirectoryDownloader, SVG_MIME, SvgArtifact, export};
pub use crate::matcher::{FrizbeeBackend, RankBackend, Ranked, config_for_query, filter};
pub use crate::snippet::{DEFAULT_ICON_SIZE, snippet, snippet_with_size};
pub use crate::state::{
	COPY_NOTICE_DURATION, CopyNotice, Finder, SearchState, SelectionState, SelectionTransition,
};
pub use crate::svg::IconSvg;
