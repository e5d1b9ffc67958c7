use std::fmt;

use super::event::Event;

/// The generation context: the last two emitted events, most recent first.
///
/// Conceptually, this is a node in the order-2 Markov chain. The pair of
/// trailing events fully determines the probability distribution of the
/// next one, so the same type keys the transition table during training
/// and drives the walk during generation.
///
/// # Invariants
/// - Both fields always hold an event; the walk begins from `(Start, Start)`.
/// - Value semantics: equality and hashing by field content, which makes
///   `State` usable as a map key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct State {
	/// The most recently emitted event.
	last: Event,
	/// The event emitted just before `last`.
	next_to_last: Event,
}

impl State {
	/// Returns the initial walk state `(Start, Start)`.
	pub fn initial() -> Self {
		Self { last: Event::Start, next_to_last: Event::Start }
	}

	/// Returns the state reached after emitting `event`.
	///
	/// A pure transition: the new state is `(event, self.last)` and the
	/// old value is left untouched.
	pub fn next(self, event: Event) -> Self {
		Self { last: event, next_to_last: self.last }
	}

	/// A state is terminal once the last emitted event is `End`.
	pub fn is_end(&self) -> bool {
		self.last == Event::End
	}
}

impl fmt::Display for State {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "({}, {})", self.last, self.next_to_last)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn next_shifts_the_history_pair() {
		let state = State::initial()
			.next(Event::Character('a'))
			.next(Event::Character('b'));

		assert_eq!(state.to_string(), "(b, a)");
		assert!(!state.is_end());
	}

	#[test]
	fn end_event_makes_the_state_terminal() {
		let state = State::initial().next(Event::End);
		assert!(state.is_end());
		assert_eq!(state.to_string(), "(>, <)");
	}

	#[test]
	fn initial_state_holds_two_start_markers() {
		let state = State::initial();
		assert!(!state.is_end());
		assert_eq!(state.to_string(), "(<, <)");
	}
}
