use super::context::Context;
use super::successors::{Successor, Successors};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Represents an order-2 Markov chain over space-delimited tokens.
///
/// The `ChainModel` maps each two-token `Context` to the ordered list of
/// successors observed after it, across one or more source texts.
///
/// # Responsibilities
/// - Record transitions with a create-if-absent, then append operation
/// - Answer successor lookups, distinguishing "unknown context" from
///   "known context"
/// - Find the contexts starting with a given token (seed lookup)
/// - Merge with another model by concatenating successor lists
///
/// # Invariants
/// - Append-only: entries are never removed or replaced
/// - Successor lists keep insertion order and duplicates
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct ChainModel {
	/// Mapping from a context to everything observed after it
	states: HashMap<Context, Successors>,
}

impl ChainModel {
	/// Creates a new empty model.
	pub fn new() -> Self {
		Self { states: HashMap::new() }
	}

	/// Appends `successor` to the list of `context`, creating the list if absent.
	pub fn append(&mut self, context: Context, successor: Successor) {
		self.states.entry(context).or_default().push(successor);
	}

	/// Returns the successors of `context`.
	///
	/// `None` means the context was never recorded, which is not the same as
	/// a recorded context whose list only holds `Successor::End`.
	pub fn successors(&self, context: &Context) -> Option<&[Successor]> {
		self.states.get(context).map(Successors::as_slice)
	}

	/// Returns the successor list of `context` for random draws.
	pub(crate) fn state(&self, context: &Context) -> Option<&Successors> {
		self.states.get(context)
	}

	/// Returns every context whose first token equals `token`.
	///
	/// Iteration order is unspecified.
	pub fn contexts_starting_with(&self, token: &str) -> Vec<&Context> {
		self.states.keys().filter(|context| context.first() == token).collect()
	}

	pub fn contains(&self, context: &Context) -> bool {
		self.states.contains_key(context)
	}

	/// Number of distinct contexts.
	pub fn len(&self) -> usize {
		self.states.len()
	}

	pub fn is_empty(&self) -> bool {
		self.states.is_empty()
	}

	/// Total number of recorded successor entries, across every context.
	pub fn transition_count(&self) -> usize {
		self.states.values().map(Successors::len).sum()
	}

	/// Iterates over `(context, successors)` pairs in unspecified order.
	pub fn iter(&self) -> impl Iterator<Item = (&Context, &[Successor])> {
		self.states.iter().map(|(context, successors)| (context, successors.as_slice()))
	}

	/// Merges another model into this one.
	///
	/// # Notes
	/// - Lists for contexts known to both models are concatenated, `self` first.
	/// - Contexts only known to `other` are cloned.
	/// - Nothing already in `self` is removed or replaced.
	pub fn merge(&mut self, other: &Self) {
		for (context, successors) in &other.states {
			if let Some(existing) = self.states.get_mut(context) {
				existing.extend_from(successors);
			} else {
				self.states.insert(context.clone(), successors.clone());
			}
		}
	}
}
