use std::fmt;

/// A single emission event in the character chain.
///
/// Training and generation both walk a sequence of events: the `Start`
/// sentinel (twice, forming the initial state), one `Character` per letter
/// of a name, and the `End` sentinel that closes it.
///
/// # Variants
/// - `Start`: precedes the first character; never the target of a transition.
/// - `End`: follows the last character; drawing it terminates generation.
/// - `Character(char)`: one character of a name.
///
/// # Invariants
/// - Value semantics: equality and hashing depend on the tag and payload
///   only, never on identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Event {
	Start,
	End,
	Character(char),
}

impl fmt::Display for Event {
	/// Formats the event with the `<` / `>` boundary notation.
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Event::Start => write!(f, "<"),
			Event::End => write!(f, ">"),
			Event::Character(c) => write!(f, "{}", c),
		}
	}
}
