use log::debug;

use super::chain_model::ChainModel;
use super::context::{Context, Token};

/// Splits a source text into tokens.
///
/// Splitting is literal on `' '`: newlines and tabs stay attached to their
/// tokens, and consecutive spaces produce empty tokens. An empty text yields
/// a single empty token.
pub fn tokenize(text: &str) -> Vec<Token> {
	text.split(' ').map(str::to_owned).collect()
}

/// Folds the order-2 transitions of `tokens` into `model`.
///
/// For each window `(t[i], t[i+1]) -> t[i+2]`, the successor is appended to
/// the context's list, creating the list if absent. When `model` is `None`,
/// a new one is created; otherwise the passed model is extended in place
/// and returned.
///
/// # Notes
/// - Sequences shorter than 3 tokens leave the model unchanged.
/// - The final bigram of `tokens` is not recorded as a context by this pass.
pub fn build(model: Option<ChainModel>, tokens: &[Token]) -> ChainModel {
	let mut model = model.unwrap_or_default();

	if tokens.len() < 3 {
		// Sequence too short, no transitions to record
		return model;
	}

	for window in tokens.windows(3) {
		let context = Context::new(window[0].as_str(), window[1].as_str());
		model.append(context, window[2].as_str().into());
	}

	debug!(
		"folded {} transitions, model now has {} contexts",
		tokens.len() - 2,
		model.len()
	);
	model
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::model::successors::Successor;

	fn tokens(text: &str) -> Vec<Token> {
		tokenize(text)
	}

	#[test]
	fn tokenize_splits_on_space_only() {
		assert_eq!(tokenize("a b\nc\td"), vec!["a", "b\nc\td"]);
		assert_eq!(tokenize("a  b"), vec!["a", "", "b"]);
		assert_eq!(tokenize(""), vec![""]);
	}

	#[test]
	fn hi_there_scenario() {
		let model = build(None, &tokens("hi there mary hi there juanita"));

		assert_eq!(model.len(), 3);
		assert_eq!(
			model.successors(&Context::new("hi", "there")),
			Some(&[Successor::from("mary"), Successor::from("juanita")][..])
		);
		assert_eq!(
			model.successors(&Context::new("there", "mary")),
			Some(&[Successor::from("hi")][..])
		);
		assert_eq!(
			model.successors(&Context::new("mary", "hi")),
			Some(&[Successor::from("there")][..])
		);
	}

	#[test]
	fn final_bigram_is_not_a_context() {
		let model = build(None, &tokens("hi there mary hi there juanita"));
		assert!(!model.contains(&Context::new("there", "juanita")));
	}

	#[test]
	fn short_sequences_leave_model_unchanged() {
		let mut seeded = ChainModel::new();
		seeded.append(Context::new("x", "y"), "z".into());

		for text in ["", "one", "one two"] {
			let model = build(Some(seeded.clone()), &tokens(text));
			assert_eq!(model, seeded);
			assert!(build(None, &tokens(text)).is_empty());
		}
	}

	#[test]
	fn building_extends_existing_model() {
		let first = build(None, &tokens("a b c"));
		let both = build(Some(first), &tokens("a b d"));

		assert_eq!(
			both.successors(&Context::new("a", "b")),
			Some(&[Successor::from("c"), Successor::from("d")][..])
		);
	}

	#[test]
	fn rebuilding_same_source_duplicates_entries() {
		let text = tokens("hi there mary hi there juanita");
		let once = build(None, &text);
		let twice = build(Some(once.clone()), &text);

		assert_eq!(twice.len(), once.len());
		assert_eq!(twice.transition_count(), 2 * once.transition_count());
		assert_eq!(
			twice.successors(&Context::new("hi", "there")),
			Some(
				&[
					Successor::from("mary"),
					Successor::from("juanita"),
					Successor::from("mary"),
					Successor::from("juanita"),
				][..]
			)
		);
	}
}
