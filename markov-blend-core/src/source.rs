//! Source resolution collaborators.
//!
//! The blender never touches storage itself: it asks a `SourceResolver` for
//! the text behind each source identifier and skips the ones that fail.

use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::ResolutionError;
use crate::io::{list_files, normalize_folder, read_text};

/// Turns an opaque source identifier into its full text.
pub trait SourceResolver {
	fn resolve(&self, source: &str) -> Result<String, ResolutionError>;
}

impl<T: SourceResolver + ?Sized> SourceResolver for &T {
	fn resolve(&self, source: &str) -> Result<String, ResolutionError> {
		(**self).resolve(source)
	}
}

/// Resolves identifiers as file paths.
///
/// # Behavior
/// - Relative identifiers are joined to `root` when one is set.
/// - When `extension` is set, it is added to identifiers that have none,
///   so `"gettysburg"` resolves to `"gettysburg.txt"`.
#[derive(Debug, Clone, Default)]
pub struct FileResolver {
	root: Option<PathBuf>,
	extension: Option<String>,
}

impl FileResolver {
	/// Resolves identifiers relative to the working directory, as given.
	pub fn new() -> Self {
		Self::default()
	}

	/// Resolves identifiers relative to `root`.
	///
	/// `"."` and `"./"` are taken as the current working directory.
	pub fn with_root<P: AsRef<Path>>(root: P) -> Self {
		Self {
			root: Some(normalize_folder(root.as_ref())),
			extension: None,
		}
	}

	/// Sets the extension added to identifiers without one.
	pub fn extension(mut self, extension: impl Into<String>) -> Self {
		self.extension = Some(extension.into());
		self
	}

	/// Returns the path an identifier resolves to.
	pub fn path_for(&self, source: &str) -> PathBuf {
		let mut path = match &self.root {
			Some(root) => root.join(source),
			None => PathBuf::from(source),
		};
		if let Some(extension) = &self.extension {
			if path.extension().is_none() {
				path.set_extension(extension);
			}
		}
		path
	}

	/// Lists the identifiers available under `root`.
	///
	/// Only files carrying the configured extension are listed, by stem.
	///
	/// # Errors
	/// Returns an error if no root or no extension is configured, or if the
	/// directory cannot be read.
	pub fn available(&self) -> io::Result<Vec<String>> {
		match (&self.root, &self.extension) {
			(Some(root), Some(extension)) => list_files(root, extension),
			_ => Err(io::Error::new(
				io::ErrorKind::InvalidInput,
				"Listing sources needs a root directory and an extension",
			)),
		}
	}
}

impl SourceResolver for FileResolver {
	fn resolve(&self, source: &str) -> Result<String, ResolutionError> {
		read_text(self.path_for(source)).map_err(|cause| ResolutionError::from_io(source, cause))
	}
}

/// Resolves identifiers against named texts held in memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryResolver {
	texts: HashMap<String, String>,
}

impl MemoryResolver {
	pub fn new() -> Self {
		Self::default()
	}

	/// Registers `text` under `name`, replacing any previous text.
	pub fn insert(&mut self, name: impl Into<String>, text: impl Into<String>) {
		self.texts.insert(name.into(), text.into());
	}

	/// Builder-style variant of [`MemoryResolver::insert`].
	pub fn with(mut self, name: impl Into<String>, text: impl Into<String>) -> Self {
		self.insert(name, text);
		self
	}
}

impl SourceResolver for MemoryResolver {
	fn resolve(&self, source: &str) -> Result<String, ResolutionError> {
		self.texts.get(source).cloned().ok_or_else(|| ResolutionError::NotFound {
			source_id: source.to_owned(),
		})
	}
}
