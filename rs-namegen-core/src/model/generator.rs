use rand::Rng;

use super::event::Event;
use super::markov_model::MarkovModel;
use super::state::State;
use crate::error::Result;

/// Random name generator backed by a trained transition model.
///
/// # Responsibilities
/// - Walk the model from the start state, drawing one event per step.
/// - Collect drawn characters until the end event terminates the walk.
///
/// # Notes
/// - The generator holds the model immutably, so one instance can serve
///   any number of `generate` calls.
/// - Randomness is injected per call, which keeps generation reproducible
///   under a seeded generator and test-friendly.
#[derive(Debug)]
pub struct Generator {
	model: MarkovModel,
}

impl Generator {
	/// Creates a generator for a trained model.
	pub fn new(model: MarkovModel) -> Self {
		Self { model }
	}

	/// Returns the model this generator draws from.
	pub fn model(&self) -> &MarkovModel {
		&self.model
	}

	/// Generates one name.
	///
	/// # Behavior
	/// - Starts the walk at the start state and draws the next event from
	///   the transitions of the current state.
	/// - Appends each drawn character to the name and shifts the state.
	/// - Stops as soon as the end event is drawn.
	///
	/// # Parameters
	/// - `rng`: Source of randomness for the weighted draws.
	///
	/// # Returns
	/// The generated name, resembling the training samples.
	///
	/// # Errors
	/// - `UnknownState` if the walk reaches a state missing from the model.
	/// - `CorruptModel` if a transition list fails to cover a drawn value.
	pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<String> {
		let mut name = String::new();
		let mut state = State::initial();
		while !state.is_end() {
			let event = self.model.sample_next(&state, rng)?;
			if let Event::Character(character) = event {
				name.push(character);
			}
			state = state.next(event);
		}
		Ok(name)
	}
}
