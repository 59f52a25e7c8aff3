use serde::{Deserialize, Serialize};

/// A single unit of text, produced by splitting on the space character.
pub type Token = String;

/// Ordered pair of two consecutive tokens, used as a lookup key.
///
/// Equality and hashing are structural: two contexts built from different
/// source texts compare equal when their tokens do.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Context {
	first: Token,
	second: Token,
}

impl Context {
	/// Creates a context from its two tokens.
	pub fn new(first: impl Into<Token>, second: impl Into<Token>) -> Self {
		Self {
			first: first.into(),
			second: second.into(),
		}
	}

	pub fn first(&self) -> &str {
		&self.first
	}

	pub fn second(&self) -> &str {
		&self.second
	}

	/// Returns the context reached after emitting `next`.
	///
	/// `(a, b)` advanced with `c` becomes `(b, c)`.
	pub fn advance(&self, next: impl Into<Token>) -> Self {
		Self {
			first: self.second.clone(),
			second: next.into(),
		}
	}
}
