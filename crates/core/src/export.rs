//! Turning a catalog entry into a downloadable `.svg` file.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::catalog::CatalogEntry;
use crate::collab::Downloader;
use crate::error::ExportError;

/// MIME type of exported artifacts.
pub const SVG_MIME: &str = "image/svg+xml";

/// Serialised icon ready to be saved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SvgArtifact {
	pub file_name: String,
	pub mime: &'static str,
	pub bytes: Vec<u8>,
}

/// Serialise `entry` to SVG markup named `<entry name>.svg`.
#[must_use]
pub fn export(entry: &CatalogEntry) -> SvgArtifact {
	SvgArtifact {
		file_name: file_name_for(entry.name()),
		mime: SVG_MIME,
		bytes: entry.asset().to_markup().into_bytes(),
	}
}

fn file_name_for(name: &str) -> String {
	let stem: String = name
		.chars()
		.map(|ch| match ch {
			'/' | '\\' => '-',
			other => other,
		})
		.collect();
	format!("{stem}.svg")
}

/// [`Downloader`] that writes artifacts into a directory, creating it first if
/// needed. Existing files with the same name are overwritten.
#[derive(Debug, Clone)]
pub struct DirectoryDownloader {
	dir: PathBuf,
}

impl DirectoryDownloader {
	#[must_use]
	pub fn new(dir: impl Into<PathBuf>) -> Self {
		Self { dir: dir.into() }
	}

	#[must_use]
	pub fn dir(&self) -> &Path {
		&self.dir
	}
}

impl Downloader for DirectoryDownloader {
	fn save(&mut self, artifact: &SvgArtifact) -> Result<PathBuf, ExportError> {
		fs::create_dir_all(&self.dir).map_err(|source| ExportError::CreateDir {
			path: self.dir.clone(),
			source,
		})?;

		let path = self.dir.join(&artifact.file_name);
		fs::write(&path, &artifact.bytes).map_err(|source| ExportError::Write {
			path: path.clone(),
			source,
		})?;

		info!(path = %path.display(), bytes = artifact.bytes.len(), "exported icon");
		Ok(path)
	}
}
