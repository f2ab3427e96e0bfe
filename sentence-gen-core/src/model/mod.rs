//! Top-level module for the word-adjacency generation system.
//!
//! This crate provides a first-order word-chain sentence generator, including:
//! - A hashed vocabulary store with per-word successor edges (`WordTable`)
//! - A model built from streams of sentence-flagged tokens (`ChainModel`)
//! - Generation configuration (`GenerationInput`)
//! - A weighted random-walk sentence generator (`SentenceGenerator`)
//! - A structured model dump (`ModelReport`)

/// Word-adjacency model built from a token stream.
///
/// Handles token ingestion, sentence boundary tracking,
/// transition counting, and report construction.
pub mod chain_model;

/// Generation parameter structure.
///
/// Stores the termination bias increment applied while walking,
/// validated against its allowed range.
pub mod generation_input;

/// Weighted random-walk sentence generator.
///
/// Exposes start-word selection, successor sampling, repetition
/// suppression, and probabilistic sentence termination.
pub mod generator;

/// Structured snapshot of a built model.
///
/// Lists every word with its counters and successor edges, in the
/// store's deterministic bucket-then-chain order.
pub mod report;

/// Hashed vocabulary store.
///
/// Maps words to fixed buckets through a folded 16-bit hash, resolves
/// collisions with per-bucket chains, and owns all per-word counters.
pub mod word_table;

/// Internal 16-bit string hash.
///
/// This module is not exposed publicly.
mod hash;
