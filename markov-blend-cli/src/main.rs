use std::path::PathBuf;

use clap::Parser;
use markov_blend_core::delivery::render;
use markov_blend_core::{BlendConfig, BlendError};
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Blend one or more texts into new, similar-sounding text.
#[derive(Parser, Debug)]
#[command(name = "markov-blend", version, about, long_about = None)]
struct Cli {
    /// Source files to blend (defaults to the config file's `sources`)
    sources: Vec<String>,

    /// Configuration file (TOML)
    #[arg(short, long, env = "MARKOV_BLEND_CONFIG")]
    config: Option<PathBuf>,

    /// Directory the source names are resolved against
    #[arg(short, long)]
    data_dir: Option<PathBuf>,

    /// Seed of the random source, for reproducible output
    #[arg(short, long)]
    seed: Option<u64>,

    /// Maximum number of characters printed
    #[arg(long)]
    max_chars: Option<usize>,

    /// Maximum number of generated words after the starting pair
    #[arg(long, conflicts_with = "uncapped")]
    max_steps: Option<usize>,

    /// Walk until a dead end, with no step limit
    #[arg(long)]
    uncapped: bool,

    /// Number of texts to generate
    #[arg(short = 'n', long, default_value_t = 1)]
    count: usize,
}

impl Cli {
    /// Loads the config file (if any) and applies command-line overrides.
    fn into_config(self) -> Result<(BlendConfig, usize), Box<dyn std::error::Error>> {
        let mut config = match &self.config {
            Some(path) => BlendConfig::load(path)?,
            None => BlendConfig::default(),
        };

        if !self.sources.is_empty() {
            config.sources = self.sources;
        }
        if self.data_dir.is_some() {
            config.data_dir = self.data_dir;
        }
        if self.seed.is_some() {
            config.rng_seed = self.seed;
        }
        if let Some(max_chars) = self.max_chars {
            config.max_output_chars = max_chars;
        }
        if self.max_steps.is_some() {
            config.max_steps = self.max_steps;
        }
        if self.uncapped {
            config.max_steps = None;
        }
        config.validate()?;

        Ok((config, self.count))
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let (config, count) = Cli::parse().into_config()?;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(config.log_level.as_str())).init();

    if config.sources.is_empty() {
        return Err("No sources given, pass file names or set `sources` in the config file".into());
    }

    // Same seed, same output
    let mut rng = match config.rng_seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let blender = config.file_blender();
    for _ in 0..count {
        match blender.blend(config.sources.as_slice(), &mut rng) {
            Ok(tokens) => println!("{}", render(&tokens, config.max_output_chars)),
            // A bad seed is reported like a result, the next text may work
            Err(BlendError::BadSeed(e)) => println!("Uh oh; {}.", e),
            Err(e) => return Err(e.into()),
        }
    }

    Ok(())
}
