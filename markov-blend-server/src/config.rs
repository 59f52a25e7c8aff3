use std::fs;
use std::path::{Path, PathBuf};

use markov_blend_core::{BlendConfig, ConfigError};
use serde::Deserialize;

/// Server configuration, loaded from TOML.
///
/// Blend parameters live under a `[blend]` table.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
	pub bind_address: String,
	pub port: u16,
	/// Seconds given to in-flight requests on shutdown.
	pub shutdown_timeout_secs: u64,
	pub blend: BlendConfig,
}

impl Default for ServerConfig {
	fn default() -> Self {
		Self {
			bind_address: "127.0.0.1".to_owned(),
			port: 5000,
			shutdown_timeout_secs: 30,
			blend: BlendConfig {
				data_dir: Some(PathBuf::from("./data")),
				source_extension: Some("txt".to_owned()),
				..BlendConfig::default()
			},
		}
	}
}

impl ServerConfig {
	/// Loads the configuration from `path`, or returns the defaults when `None`.
	pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
		let Some(path) = path else {
			return Ok(Self::default());
		};

		let contents = fs::read_to_string(path).map_err(|cause| ConfigError::Read {
			path: path.to_path_buf(),
			cause,
		})?;
		let mut config: Self = toml::from_str(&contents).map_err(|cause| ConfigError::Parse {
			path: path.to_path_buf(),
			cause,
		})?;

		// A `[blend]` table falls back to the library defaults, not ours
		let defaults = Self::default().blend;
		if config.blend.data_dir.is_none() {
			config.blend.data_dir = defaults.data_dir;
		}
		if config.blend.source_extension.is_none() {
			config.blend.source_extension = defaults.source_extension;
		}
		config.blend.validate()?;
		Ok(config)
	}
}
