use std::collections::HashMap;

use rand::Rng;

use super::event::Event;
use super::state::State;
use crate::error::{NameGenError, Result};

/// One weighted outgoing edge of the transition table.
///
/// Pairs a target event with the probability of drawing it from some fixed
/// source state. The probabilities listed for one source state sum to 1.0.
#[derive(Debug, Clone)]
pub(crate) struct Transition {
	/// Probability of drawing this transition, in (0.0, 1.0].
	probability: f32,
	/// Event emitted when this transition is drawn.
	target: Event,
}

impl Transition {
	pub(crate) fn new(probability: f32, target: Event) -> Self {
		Self { probability, target }
	}

	/// Probability of drawing this transition from its source state.
	pub(crate) fn probability(&self) -> f32 {
		self.probability
	}

	/// Event emitted when this transition is drawn.
	pub(crate) fn target(&self) -> Event {
		self.target
	}
}

/// The trained order-2 Markov chain over characters.
///
/// Maps every state observed during training to the list of transitions
/// recorded from it. Built once by `ModelBuilder::build`, never mutated
/// afterwards; generation only reads it, so one model can serve any number
/// of generation calls (or threads) without synchronization.
///
/// # Invariants
/// - Every listed state carries at least one transition.
/// - The transition probabilities of one state sum to 1.0 within float
///   tolerance, so the weighted draw always selects an entry.
#[derive(Debug, Clone)]
pub struct MarkovModel {
	/// Outgoing transitions indexed by source state.
	transitions: HashMap<State, Vec<Transition>>,
}

impl MarkovModel {
	pub(crate) fn new(transitions: HashMap<State, Vec<Transition>>) -> Self {
		Self { transitions }
	}

	/// Returns the number of distinct source states in the table.
	pub fn size(&self) -> usize {
		self.transitions.len()
	}

	/// Returns the transitions recorded from `state`, if any.
	pub(crate) fn get_transitions(&self, state: &State) -> Option<&Vec<Transition>> {
		self.transitions.get(state)
	}

	/// Draws the next event from `state` using weighted random sampling.
	///
	/// Draws a uniform value in `[0, 1)` and scans the transition list in
	/// stored order, subtracting each probability from the value until one
	/// covers what remains.
	///
	/// # Errors
	/// - `UnknownState` if `state` was never observed during training.
	/// - `CorruptModel` if the scan exhausts the list, which means the
	///   probabilities of this state do not sum to 1.0.
	pub(crate) fn sample_next<R: Rng + ?Sized>(&self, state: &State, rng: &mut R) -> Result<Event> {
		let transitions = self
			.get_transitions(state)
			.ok_or_else(|| NameGenError::UnknownState(state.to_string()))?;

		let mut v: f32 = rng.random();
		for transition in transitions {
			if v <= transition.probability() {
				return Ok(transition.target());
			}
			v -= transition.probability();
		}

		// Unreachable for a correctly normalized table
		Err(NameGenError::CorruptModel)
	}
}
