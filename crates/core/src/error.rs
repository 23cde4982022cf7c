use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failures raised while reading an icon source from disk.
#[derive(Debug, Error)]
pub enum CatalogError {
	#[error("icon directory {path} does not exist or is not a directory")]
	NotADirectory { path: PathBuf },
	#[error("failed to read icon directory {path}")]
	ReadDir {
		path: PathBuf,
		#[source]
		source: io::Error,
	},
}

/// Reasons a piece of markup was rejected as an icon payload.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SvgError {
	#[error("markup is empty")]
	Empty,
	#[error("markup has no <svg> root element")]
	MissingRoot,
	#[error("the <svg> root element is never closed")]
	Unterminated,
}

/// Failures raised while handing an exported icon to its destination.
#[derive(Debug, Error)]
pub enum ExportError {
	#[error("failed to create export directory {path}")]
	CreateDir {
		path: PathBuf,
		#[source]
		source: io::Error,
	},
	#[error("failed to write {path}")]
	Write {
		path: PathBuf,
		#[source]
		source: io::Error,
	},
}

/// Failures raised by clipboard backends.
#[derive(Debug, Error)]
pub enum ClipboardError {
	#[error("no clipboard backend accepted the text")]
	Unavailable,
	#[error("clipboard write failed")]
	Io(#[from] io::Error),
}
