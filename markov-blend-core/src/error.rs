//! Error types for chain building, generation and blending.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// The chosen seed token starts no context of the model.
///
/// The display text is meant to be shown to end users as-is.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("'{seed}' is not a good seed word for this text")]
pub struct SeedError {
	/// The offending seed token.
	pub seed: String,
}

/// A source could not be turned into text.
#[derive(Debug, Error)]
pub enum ResolutionError {
	/// Nothing exists under this identifier.
	#[error("'{source_id}' is not a good input source")]
	NotFound { source_id: String },

	/// The source exists but could not be read.
	#[error("source '{source_id}' could not be read: {cause}")]
	Unreadable {
		source_id: String,
		#[source]
		cause: io::Error,
	},
}

impl ResolutionError {
	/// Maps an I/O failure on `source_id` to the matching variant.
	pub fn from_io(source_id: impl Into<String>, cause: io::Error) -> Self {
		let source_id = source_id.into();
		if cause.kind() == io::ErrorKind::NotFound {
			ResolutionError::NotFound { source_id }
		} else {
			ResolutionError::Unreadable { source_id, cause }
		}
	}

	/// Identifier of the source that failed.
	pub fn source_id(&self) -> &str {
		match self {
			ResolutionError::NotFound { source_id } | ResolutionError::Unreadable { source_id, .. } => source_id,
		}
	}
}

/// Errors that end a blend call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BlendError {
	/// Every source failed to resolve, so no seed is available.
	#[error("no valid sources to blend")]
	NoValidSources,

	/// The randomly chosen seed starts no context of the merged model.
	#[error(transparent)]
	BadSeed(#[from] SeedError),
}

/// Errors raised while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
	#[error("failed to read config file {path}: {cause}")]
	Read {
		path: PathBuf,
		#[source]
		cause: io::Error,
	},

	#[error("invalid config file {path}: {cause}")]
	Parse {
		path: PathBuf,
		#[source]
		cause: toml::de::Error,
	},

	#[error("invalid configuration: {0}")]
	Invalid(String),
}
