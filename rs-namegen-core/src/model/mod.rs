//! Top-level module for the name generation system.
//!
//! This crate provides an order-2 Markov chain name generator, including:
//! - Sample collection and model construction (`ModelBuilder`)
//! - The trained transition table (`MarkovModel`)
//! - Walk events and states (`Event`, `State`)
//! - A high-level generation interface (`Generator`)

/// High-level interface for generating names from a trained model.
///
/// Exposes random walk generation with injected randomness, so callers
/// control seeding and reproducibility.
pub mod generator;

/// The trained transition table of the Markov chain.
///
/// Maps every observed state to its weighted outgoing transitions and
/// supports weighted random sampling of the next event.
pub mod markov_model;

/// Sample collection and model construction.
///
/// Handles sample validation, case folding, transition counting and
/// normalization into the final probability table.
pub mod model_builder;

/// The events observed while walking a name.
///
/// This module is not exposed publicly.
pub(crate) mod event;

/// The sliding two-event window the chain conditions on.
///
/// This module is not exposed publicly.
pub(crate) mod state;
