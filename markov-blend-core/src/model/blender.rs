use log::{debug, info, warn};
use rand::Rng;
use rand::seq::IndexedRandom;

use crate::error::BlendError;
use crate::model::builder::{build, tokenize};
use crate::model::chain_model::ChainModel;
use crate::model::context::Token;
use crate::model::generator::TextGenerator;
use crate::source::SourceResolver;

/// Blends several source texts into one generated token sequence.
///
/// # Responsibilities
/// - Resolve each source through a `SourceResolver`, skipping failures
/// - Collect the first token of every resolved source (the seed pool)
/// - Fold every resolved source into one shared `ChainModel`
/// - Pick a seed and run the `TextGenerator` on the merged model
#[derive(Debug, Clone)]
pub struct Blender<S> {
	resolver: S,
	generator: TextGenerator,
}

impl<S: SourceResolver> Blender<S> {
	/// Creates a blender with an uncapped generator.
	pub fn new(resolver: S) -> Self {
		Self {
			resolver,
			generator: TextGenerator::new(),
		}
	}

	/// Replaces the generator, typically to set a step cap.
	pub fn with_generator(mut self, generator: TextGenerator) -> Self {
		self.generator = generator;
		self
	}

	/// Resolves and folds every source, returning the seed pool and the model.
	///
	/// # Behavior
	/// - Sources are processed in order; one that fails to resolve is logged
	///   and skipped.
	/// - The seed pool holds one first token per resolved source, in order.
	pub fn build_model<I: AsRef<str>>(&self, sources: &[I]) -> (Vec<Token>, ChainModel) {
		let mut seeds: Vec<Token> = Vec::with_capacity(sources.len());
		let mut model = ChainModel::new();

		for source in sources {
			let source = source.as_ref();
			let text = match self.resolver.resolve(source) {
				Ok(text) => text,
				Err(e) => {
					warn!("skipping source: {}", e);
					continue;
				}
			};

			let tokens = tokenize(&text);
			// split always yields at least one token
			if let Some(first) = tokens.first() {
				seeds.push(first.clone());
			}
			model = build(Some(model), &tokens);
			debug!("source '{}' contributed {} tokens", source, tokens.len());
		}

		(seeds, model)
	}

	/// Blends `sources` and generates one token sequence.
	///
	/// # Returns
	/// - `Ok(Vec<Token>)`: The generated tokens.
	/// - `Err(BlendError::NoValidSources)`: If no source could be resolved.
	/// - `Err(BlendError::BadSeed)`: If the chosen seed starts no context.
	///   No other seed is tried.
	pub fn blend<I, R>(&self, sources: &[I], rng: &mut R) -> Result<Vec<Token>, BlendError>
	where
		I: AsRef<str>,
		R: Rng + ?Sized,
	{
		let (seeds, model) = self.build_model(sources);

		let seed = match seeds.choose(rng) {
			Some(seed) => seed,
			None => return Err(BlendError::NoValidSources),
		};

		info!(
			"blending {} of {} sources ({} contexts) from seed {:?}",
			seeds.len(),
			sources.len(),
			model.len(),
			seed
		);

		Ok(self.generator.generate(&model, seed, rng)?)
	}
}
