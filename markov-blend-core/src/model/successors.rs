use rand::Rng;
use rand::seq::IndexedRandom;

use serde::{Deserialize, Serialize};

use super::context::Token;

/// One entry of a successor list.
///
/// `End` records that the chain may legitimately stop after a context.
/// Drawing it ends a walk without emitting anything.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Successor {
	Token(Token),
	End,
}

impl Successor {
	/// Returns the token carried by this entry, if any.
	pub fn as_token(&self) -> Option<&str> {
		match self {
			Successor::Token(token) => Some(token),
			Successor::End => None,
		}
	}
}

impl From<&str> for Successor {
	fn from(token: &str) -> Self {
		Successor::Token(token.to_owned())
	}
}

impl From<Token> for Successor {
	fn from(token: Token) -> Self {
		Successor::Token(token)
	}
}

/// Ordered list of everything observed after a single context.
///
/// Conceptually, this is the set of outgoing edges of one node in the
/// Markov chain, where an edge observed `k` times appears `k` times.
///
/// ## Invariants
/// - Insertion order is preserved
/// - Entries are never removed; repetition encodes frequency
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct Successors {
	entries: Vec<Successor>,
}

impl Successors {
	/// Creates an empty successor list.
	pub fn new() -> Self {
		Self { entries: Vec::new() }
	}

	/// Records one more observation of `successor`.
	pub fn push(&mut self, successor: Successor) {
		self.entries.push(successor);
	}

	/// Draws one entry uniformly at random.
	///
	/// Frequencies come from repetition: an entry stored twice is twice as
	/// likely as one stored once. Returns `None` if the list is empty.
	pub fn draw<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&Successor> {
		self.entries.choose(rng)
	}

	/// Appends every entry of `other`, keeping its order.
	pub fn extend_from(&mut self, other: &Self) {
		self.entries.extend(other.entries.iter().cloned());
	}

	pub fn as_slice(&self) -> &[Successor] {
		&self.entries
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}
}
