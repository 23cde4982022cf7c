//! Platform capabilities the finder depends on but does not implement.

use std::path::PathBuf;

use crate::error::{ClipboardError, ExportError};
use crate::export::SvgArtifact;

/// Write-only access to the system clipboard.
pub trait Clipboard {
	fn write(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// Delivers an exported artifact to the user, returning where it ended up.
pub trait Downloader {
	fn save(&mut self, artifact: &SvgArtifact) -> Result<PathBuf, ExportError>;
}

impl<T> Clipboard for &mut T
where
	T: Clipboard + ?Sized,
{
	fn write(&mut self, text: &str) -> Result<(), ClipboardError> {
		(**self).write(text)
	}
}

impl<T> Downloader for &mut T
where
	T: Downloader + ?Sized,
{
	fn save(&mut self, artifact: &SvgArtifact) -> Result<PathBuf, ExportError> {
		(**self).save(artifact)
	}
}
