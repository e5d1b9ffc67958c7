//! Error types for training and generation.
//!
//! A single enum covers every failure the builder, the model and the
//! generator can surface. All errors are synchronous and fatal to the call
//! in progress: nothing is retried internally and no partial result is
//! returned on failure.

use thiserror::Error;

/// Errors surfaced by the name generation crate.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NameGenError {
	/// A training sample was empty.
	#[error("sample cannot be empty")]
	EmptySample,

	/// `build` was called before any sample was added.
	#[error("no samples available")]
	NoSamples,

	/// Generation reached a state with no recorded transitions.
	#[error("no transitions recorded from state {0}")]
	UnknownState(String),

	/// The weighted draw exhausted a transition list without selecting an
	/// entry, meaning the probability map was not built correctly.
	#[error("the probability map was not built correctly")]
	CorruptModel,
}

/// Result type for name generation operations.
pub type Result<T> = std::result::Result<T, NameGenError>;
