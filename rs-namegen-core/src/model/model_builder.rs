use std::collections::HashMap;

use log::debug;

use super::event::Event;
use super::markov_model::{MarkovModel, Transition};
use super::state::State;
use crate::error::{NameGenError, Result};

/// Occurrence counts accumulated while walking the samples.
///
/// Keeps the per-target counts and the per-state totals side by side so
/// normalization is a single pass over the counts.
#[derive(Debug, Default)]
struct TransitionCounter {
	/// How often each target event was seen from each source state.
	counts: HashMap<State, HashMap<Event, usize>>,
	/// How often each source state was left, all targets combined.
	totals: HashMap<State, usize>,
}

impl TransitionCounter {
	/// Records one observed `source -> target` step.
	fn record(&mut self, source: State, target: Event) {
		*self.counts.entry(source).or_default().entry(target).or_insert(0) += 1;
		*self.totals.entry(source).or_insert(0) += 1;
	}

	/// Converts the counts into per-state probability lists.
	///
	/// Each count is divided by the total of its source state, so the
	/// probabilities of one state sum to 1.0 within float tolerance.
	fn into_transitions(self) -> HashMap<State, Vec<Transition>> {
		let TransitionCounter { counts, totals } = self;
		counts
			.into_iter()
			.map(|(state, events)| {
				// Recorded together with counts, cannot be missing
				let total = totals[&state] as f32;
				let weighted: Vec<Transition> = events
					.into_iter()
					.map(|(target, occurrences)| {
						Transition::new(occurrences as f32 / total, target)
					})
					.collect();
				(state, weighted)
			})
			.collect()
	}
}

/// Collects training samples and builds the transition model from them.
///
/// # Responsibilities
/// - Validate and normalize incoming samples (reject empty, fold case).
/// - Walk each sample once, counting `state -> event` observations.
/// - Normalize the counts into the per-state probability lists of the
///   final `MarkovModel`.
///
/// # Notes
/// Each sample is walked from the fresh start state, so the model never
/// links the end of one sample to the beginning of the next and every
/// sample contributes its own opening transitions.
#[derive(Debug, Default)]
pub struct ModelBuilder {
	/// Accepted samples, already lowercased.
	samples: Vec<String>,
}

impl ModelBuilder {
	pub fn new() -> Self {
		Self::default()
	}

	/// Adds one training sample.
	///
	/// The sample is lowercased before storage, so `"Lala"` and `"LALA"`
	/// train the same transitions.
	///
	/// # Errors
	/// - `EmptySample` if `sample` is empty.
	pub fn add_sample(&mut self, sample: &str) -> Result<()> {
		if sample.is_empty() {
			return Err(NameGenError::EmptySample);
		}
		self.samples.push(sample.to_lowercase());
		Ok(())
	}

	/// Adds every sample of an iterator, stopping at the first invalid one.
	///
	/// # Errors
	/// - `EmptySample` if any sample is empty; samples before it are kept.
	pub fn add_samples<I, S>(&mut self, samples: I) -> Result<()>
	where
		I: IntoIterator<Item = S>,
		S: AsRef<str>,
	{
		for sample in samples {
			self.add_sample(sample.as_ref())?;
		}
		Ok(())
	}

	/// Builds the transition model from the collected samples.
	///
	/// Walks each sample from the start state, records one transition per
	/// character plus the closing end transition, then normalizes the
	/// counts into probabilities. The builder is untouched and can keep
	/// collecting samples for a later build.
	///
	/// # Errors
	/// - `NoSamples` if no sample was added.
	pub fn build(&self) -> Result<MarkovModel> {
		if self.samples.is_empty() {
			return Err(NameGenError::NoSamples);
		}

		let mut counter = TransitionCounter::default();
		for sample in &self.samples {
			let mut state = State::initial();
			for character in sample.chars() {
				let event = Event::Character(character);
				counter.record(state, event);
				state = state.next(event);
			}
			counter.record(state, Event::End);
		}

		let model = MarkovModel::new(counter.into_transitions());
		debug!(
			"built transition model: {} samples, {} states",
			self.samples.len(),
			model.size()
		);
		Ok(model)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	// Collects the transitions of one state into a comparable map.
	fn outgoing(model: &MarkovModel, state: &State) -> HashMap<Event, f32> {
		model
			.get_transitions(state)
			.map(|transitions| {
				transitions
					.iter()
					.map(|transition| (transition.target(), transition.probability()))
					.collect()
			})
			.unwrap_or_default()
	}

	#[test]
	fn empty_sample_is_rejected() {
		let mut builder = ModelBuilder::new();
		assert_eq!(builder.add_sample("").unwrap_err(), NameGenError::EmptySample);
	}

	#[test]
	fn batch_stops_at_the_first_empty_sample() {
		let mut builder = ModelBuilder::new();
		assert_eq!(
			builder.add_samples(["ab", "", "cd"]).unwrap_err(),
			NameGenError::EmptySample
		);

		// Samples accepted before the failure stay, the rest are dropped
		let model = builder.build().unwrap();
		assert_eq!(model.size(), 3);
		assert_eq!(
			outgoing(&model, &State::initial()),
			HashMap::from([(Event::Character('a'), 1.0)])
		);
	}

	#[test]
	fn build_without_samples_fails() {
		assert_eq!(
			ModelBuilder::new().build().unwrap_err(),
			NameGenError::NoSamples
		);
	}

	#[test]
	fn single_sample_chains_with_certainty() {
		let mut builder = ModelBuilder::new();
		builder.add_sample("aa").unwrap();
		let model = builder.build().unwrap();

		// "aa" visits exactly three states, each with one certain transition
		assert_eq!(model.size(), 3);

		let start = State::initial();
		let after_a = start.next(Event::Character('a'));
		let after_aa = after_a.next(Event::Character('a'));

		assert_eq!(outgoing(&model, &start), HashMap::from([(Event::Character('a'), 1.0)]));
		assert_eq!(outgoing(&model, &after_a), HashMap::from([(Event::Character('a'), 1.0)]));
		assert_eq!(outgoing(&model, &after_aa), HashMap::from([(Event::End, 1.0)]));
	}

	#[test]
	fn two_samples_split_evenly_after_shared_prefix() {
		let mut builder = ModelBuilder::new();
		builder.add_samples(["ab", "ac"]).unwrap();
		let model = builder.build().unwrap();

		let after_a = State::initial().next(Event::Character('a'));
		let split = outgoing(&model, &after_a);
		assert_eq!(split.len(), 2);
		assert!((split[&Event::Character('b')] - 0.5).abs() < 1e-6);
		assert!((split[&Event::Character('c')] - 0.5).abs() < 1e-6);
	}

	#[test]
	fn every_sample_starts_from_the_same_state() {
		let mut builder = ModelBuilder::new();
		builder.add_samples(["ab", "cd"]).unwrap();
		let model = builder.build().unwrap();

		// Both openings hang off the start state, not off the previous sample
		let openings = outgoing(&model, &State::initial());
		assert_eq!(openings.len(), 2);
		assert!((openings[&Event::Character('a')] - 0.5).abs() < 1e-6);
		assert!((openings[&Event::Character('c')] - 0.5).abs() < 1e-6);
	}

	#[test]
	fn probabilities_of_each_state_sum_to_one() {
		let mut builder = ModelBuilder::new();
		builder.add_samples(["lalala", "lala", "papa"]).unwrap();
		let model = builder.build().unwrap();

		// Re-walk the samples to enumerate every state the model can hold
		let mut states = vec![State::initial()];
		for sample in ["lalala", "lala", "papa"] {
			let mut state = State::initial();
			for character in sample.chars() {
				state = state.next(Event::Character(character));
				states.push(state);
			}
		}

		for state in states {
			let sum: f32 = outgoing(&model, &state).values().sum();
			assert!((sum - 1.0).abs() < 1e-6, "state {} sums to {}", state, sum);
		}
	}

	#[test]
	fn samples_are_case_folded() {
		let mut lowercase = ModelBuilder::new();
		lowercase.add_sample("lala").unwrap();
		let folded = lowercase.build().unwrap();

		let mut uppercase = ModelBuilder::new();
		uppercase.add_sample("LALA").unwrap();
		let unfolded = uppercase.build().unwrap();

		assert_eq!(folded.size(), unfolded.size());
		let after_l = State::initial().next(Event::Character('l'));
		assert_eq!(outgoing(&folded, &after_l), outgoing(&unfolded, &after_l));
	}

	mod proptests {
		use proptest::prelude::*;

		use super::*;

		fn corpus() -> impl Strategy<Value = Vec<String>> {
			prop::collection::vec("[a-z]{1,12}", 1..16)
		}

		proptest! {
			/// Building from any non-empty corpus of non-empty samples succeeds.
			#[test]
			fn build_accepts_any_nonempty_corpus(samples in corpus()) {
				let mut builder = ModelBuilder::new();
				builder.add_samples(&samples).unwrap();
				prop_assert!(builder.build().is_ok());
			}

			/// Every state visited while walking a sample has transitions.
			#[test]
			fn walked_states_are_all_present(samples in corpus()) {
				let mut builder = ModelBuilder::new();
				builder.add_samples(&samples).unwrap();
				let model = builder.build().unwrap();

				for sample in &samples {
					let mut state = State::initial();
					prop_assert!(model.get_transitions(&state).is_some());
					for character in sample.chars() {
						state = state.next(Event::Character(character));
						prop_assert!(model.get_transitions(&state).is_some());
					}
				}
			}

			/// The probabilities of every state sum to 1.0.
			#[test]
			fn normalization_covers_every_state(samples in corpus()) {
				let mut builder = ModelBuilder::new();
				builder.add_samples(&samples).unwrap();
				let model = builder.build().unwrap();

				// Re-walk the samples to enumerate every state, the
				// end-carrying final state of each sample included
				let mut states = vec![State::initial()];
				for sample in &samples {
					let mut state = State::initial();
					for character in sample.chars() {
						state = state.next(Event::Character(character));
						states.push(state);
					}
				}

				for state in states {
					let sum: f32 = model
						.get_transitions(&state)
						.unwrap()
						.iter()
						.map(|transition| transition.probability())
						.sum();
					prop_assert!((sum - 1.0).abs() < 1e-4, "state {} sums to {}", state, sum);
				}
			}
		}
	}
}
