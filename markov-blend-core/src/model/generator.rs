use crate::error::SeedError;
use crate::model::chain_model::ChainModel;
use crate::model::context::Token;
use crate::model::successors::Successor;
use log::{debug, warn};
use rand::Rng;
use rand::seq::IndexedRandom;

/// Random-walk text generator over a `ChainModel`.
///
/// # Responsibilities
/// - Pick a starting context from a seed token
/// - Walk the model, drawing successors uniformly, until a dead end
/// - Optionally stop after a fixed number of steps
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TextGenerator {
	/// Maximum number of walk steps. `None` walks until a dead end.
	step_cap: Option<usize>,
}

impl TextGenerator {
	/// Creates an uncapped generator.
	///
	/// A model whose contexts form a cycle with no dead end makes an uncapped
	/// walk run forever.
	pub fn new() -> Self {
		Self { step_cap: None }
	}

	/// Creates a generator that stops after at most `max_steps` drawn tokens.
	///
	/// This bounds the walk on cyclic models; output may then end on a
	/// context that still had successors.
	pub fn with_step_cap(max_steps: usize) -> Self {
		Self { step_cap: Some(max_steps) }
	}

	pub fn step_cap(&self) -> Option<usize> {
		self.step_cap
	}

	/// Generates a token sequence starting with `seed`.
	///
	/// # Parameters
	/// - `model`: The chain to walk.
	/// - `seed`: Token that must start the first context.
	/// - `rng`: Random source used for every uniform draw.
	///
	/// # Returns
	/// - `Ok(Vec<Token>)`: At least the two tokens of the chosen starting context.
	/// - `Err(SeedError)`: If no context of the model starts with `seed`.
	///
	/// # Behavior
	/// - Candidates are all contexts `(seed, x)`; one is chosen uniformly.
	/// - At each step the current context is looked up. An unknown context, an
	///   empty list or a drawn `Successor::End` ends the walk.
	/// - A drawn token is appended and becomes the second half of the next context.
	pub fn generate<R: Rng + ?Sized>(
		&self,
		model: &ChainModel,
		seed: &str,
		rng: &mut R,
	) -> Result<Vec<Token>, SeedError> {
		// Sorted so the same rng state always picks the same context
		let mut candidates = model.contexts_starting_with(seed);
		candidates.sort();

		let mut context = match candidates.choose(rng) {
			Some(context) => (*context).clone(),
			None => return Err(SeedError { seed: seed.to_owned() }),
		};

		let mut words: Vec<Token> = vec![context.first().to_owned(), context.second().to_owned()];
		let mut steps = 0;

		loop {
			if self.step_cap.is_some_and(|cap| steps >= cap) {
				warn!("walk stopped by step cap after {} steps", steps);
				break;
			}

			let Some(successors) = model.state(&context) else {
				break;
			};
			let next = match successors.draw(rng) {
				Some(Successor::Token(token)) => token.clone(),
				Some(Successor::End) | None => break,
			};

			words.push(next.clone());
			context = context.advance(next);
			steps += 1;
		}

		debug!("generated {} tokens from seed {:?}", words.len(), seed);
		Ok(words)
	}
}

/// Generates with an uncapped `TextGenerator`.
///
/// See [`TextGenerator::generate`].
pub fn generate<R: Rng + ?Sized>(model: &ChainModel, seed: &str, rng: &mut R) -> Result<Vec<Token>, SeedError> {
	TextGenerator::new().generate(model, seed, rng)
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::model::builder::{build, tokenize};
	use crate::model::context::Context;
	use rand::SeedableRng;
	use rand::rngs::StdRng;

	fn hi_there_model() -> ChainModel {
		build(None, &tokenize("hi there mary hi there juanita"))
	}

	#[test]
	fn unknown_seed_fails_for_any_rng_state() {
		let model = hi_there_model();
		for seed in 0..20 {
			let mut rng = StdRng::seed_from_u64(seed);
			assert_eq!(
				generate(&model, "there", &mut rng),
				Err(SeedError { seed: "there".into() })
			);
		}
	}

	#[test]
	fn output_starts_with_a_seed_context() {
		let model = hi_there_model();
		for seed in 0..20 {
			let mut rng = StdRng::seed_from_u64(seed);
			let words = generate(&model, "hi", &mut rng).unwrap();
			assert!(words.len() >= 2);
			assert_eq!(words[0], "hi");
			assert!(model.contains(&Context::new(words[0].as_str(), words[1].as_str())));
		}
	}

	#[test]
	fn walk_stops_on_unknown_context() {
		// "hi there juanita" ends because ("there", "juanita") is not a key
		let mut model = ChainModel::new();
		model.append(Context::new("hi", "there"), "juanita".into());

		let mut rng = StdRng::seed_from_u64(1);
		assert_eq!(generate(&model, "hi", &mut rng).unwrap(), vec!["hi", "there", "juanita"]);
	}

	#[test]
	fn walk_stops_on_end_marker() {
		let mut model = ChainModel::new();
		model.append(Context::new("hi", "there"), Successor::End);

		let mut rng = StdRng::seed_from_u64(3);
		assert_eq!(generate(&model, "hi", &mut rng).unwrap(), vec!["hi", "there"]);
	}

	#[test]
	fn tokens_are_emitted_until_end_marker() {
		let mut model = ChainModel::new();
		model.append(Context::new("a", "b"), "c".into());
		model.append(Context::new("b", "c"), Successor::End);

		let mut rng = StdRng::seed_from_u64(9);
		assert_eq!(generate(&model, "a", &mut rng).unwrap(), vec!["a", "b", "c"]);
	}

	#[test]
	fn only_observed_transitions_are_followed() {
		let model = hi_there_model();
		let mut rng = StdRng::seed_from_u64(11);
		for _ in 0..50 {
			let words = generate(&model, "mary", &mut rng).unwrap();
			for window in words.windows(3) {
				let context = Context::new(window[0].as_str(), window[1].as_str());
				let successors = model.successors(&context).unwrap();
				assert!(successors.contains(&Successor::from(window[2].as_str())));
			}
		}
	}

	#[test]
	fn same_rng_seed_gives_same_output() {
		let model = build(None, &tokenize("a b c a b d a b c e"));
		let first = generate(&model, "a", &mut StdRng::seed_from_u64(5)).unwrap();
		let second = generate(&model, "a", &mut StdRng::seed_from_u64(5)).unwrap();
		assert_eq!(first, second);
	}

	#[test]
	fn step_cap_bounds_cyclic_walks() {
		// (a, b) -> a and (b, a) -> b cycle forever
		let model = build(None, &tokenize("a b a b"));

		let generator = TextGenerator::with_step_cap(10);
		let mut rng = StdRng::seed_from_u64(0);
		let words = generator.generate(&model, "a", &mut rng).unwrap();
		assert_eq!(words.len(), 12);
	}

	#[test]
	fn zero_step_cap_returns_seed_context() {
		let model = hi_there_model();
		let generator = TextGenerator::with_step_cap(0);
		let words = generator.generate(&model, "hi", &mut StdRng::seed_from_u64(2)).unwrap();
		assert_eq!(words, vec!["hi", "there"]);
	}
}
