//! Output delivery helpers.
//!
//! Generation may produce arbitrarily long output; limiting it is a
//! delivery-layer policy applied by the hosts.

use crate::model::context::Token;

/// Default output limit, in characters.
pub const DEFAULT_MAX_OUTPUT_CHARS: usize = 1000;

/// Joins generated tokens with a single space.
pub fn join_tokens(tokens: &[Token]) -> String {
	tokens.join(" ")
}

/// Truncates `text` to at most `max_chars` characters.
///
/// Counts Unicode scalar values, so a multi-byte character is never split.
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
	match text.char_indices().nth(max_chars) {
		Some((byte_index, _)) => &text[..byte_index],
		None => text,
	}
}

/// Joins `tokens` and truncates the result to `max_chars` characters.
pub fn render(tokens: &[Token], max_chars: usize) -> String {
	let text = join_tokens(tokens);
	truncate_chars(&text, max_chars).to_owned()
}
