//! Markov-chain-based name generation library.
//!
//! This crate provides an order-2 Markov chain name generator including:
//! - Character-level transition models trained from sample names
//! - Case-folding sample ingestion with validation
//! - Probabilistic generation with injected randomness
//! - Typed errors for training and generation failures
//!
//! Only the high-level API is exposed publicly. Low-level components
//! are kept internal to ensure consistency and prevent misuse.

/// Core Markov model and generation logic.
///
/// This module exposes the builder and generator interfaces while keeping
/// internal walk representations private.
pub mod model;

/// Error types shared by training and generation.
pub mod error;
