//! Blend configuration.
//!
//! Every field has a default, so an empty TOML file is a valid configuration.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::delivery::DEFAULT_MAX_OUTPUT_CHARS;
use crate::error::ConfigError;
use crate::model::blender::Blender;
use crate::model::generator::TextGenerator;
use crate::source::FileResolver;

/// Generation parameters shared by every host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BlendConfig {
	/// Source identifiers blended when a caller gives none.
	pub sources: Vec<String>,

	/// Directory source identifiers are resolved against.
	pub data_dir: Option<PathBuf>,

	/// Extension added to identifiers that have none (e.g. `"txt"`).
	pub source_extension: Option<String>,

	/// Maximum number of walk steps. `None` walks until a dead end.
	pub max_steps: Option<usize>,

	/// Output is truncated to this many characters before delivery.
	pub max_output_chars: usize,

	/// Seed of the random source, for reproducible output.
	pub rng_seed: Option<u64>,

	/// Log level used when `RUST_LOG` is not set.
	pub log_level: String,
}

impl Default for BlendConfig {
	fn default() -> Self {
		Self {
			sources: Vec::new(),
			data_dir: None,
			source_extension: None,
			max_steps: Some(10_000),
			max_output_chars: DEFAULT_MAX_OUTPUT_CHARS,
			rng_seed: None,
			log_level: "info".to_owned(),
		}
	}
}

impl BlendConfig {
	/// Loads a configuration from a TOML file.
	///
	/// # Errors
	/// Returns an error if the file cannot be read, is not valid TOML, or
	/// holds invalid values.
	pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
		let path = path.as_ref();
		let contents = fs::read_to_string(path).map_err(|cause| ConfigError::Read {
			path: path.to_path_buf(),
			cause,
		})?;
		let config: Self = toml::from_str(&contents).map_err(|cause| ConfigError::Parse {
			path: path.to_path_buf(),
			cause,
		})?;
		config.validate()?;
		Ok(config)
	}

	/// Checks value ranges.
	pub fn validate(&self) -> Result<(), ConfigError> {
		if self.max_output_chars == 0 {
			return Err(ConfigError::Invalid("max_output_chars must be > 0".to_owned()));
		}
		if self.log_level.trim().is_empty() {
			return Err(ConfigError::Invalid("log_level cannot be empty".to_owned()));
		}
		Ok(())
	}

	/// Builds the generator described by `max_steps`.
	pub fn generator(&self) -> TextGenerator {
		match self.max_steps {
			Some(max_steps) => TextGenerator::with_step_cap(max_steps),
			None => TextGenerator::new(),
		}
	}

	/// Builds the file resolver described by `data_dir` and `source_extension`.
	pub fn file_resolver(&self) -> FileResolver {
		let resolver = match &self.data_dir {
			Some(dir) => FileResolver::with_root(dir),
			None => FileResolver::new(),
		};
		match &self.source_extension {
			Some(extension) => resolver.extension(extension.as_str()),
			None => resolver,
		}
	}

	/// Builds a file-backed blender from this configuration.
	pub fn file_blender(&self) -> Blender<FileResolver> {
		Blender::new(self.file_resolver()).with_generator(self.generator())
	}
}
