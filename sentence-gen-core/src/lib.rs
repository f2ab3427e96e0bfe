//! Word-adjacency sentence generation library.
//!
//! This crate provides a first-order word-chain generation system including:
//! - A hashed vocabulary store with successor edge lists
//! - Word-level model construction from raw text or token streams
//! - Probabilistic sentence generation with controllable termination
//! - Utilities for corpus tokenization and file loading
//!
//! Only the high-level API is exposed publicly. Low-level components
//! are kept internal to ensure consistency and prevent misuse.

/// Core word-chain model and generation logic.
///
/// This module exposes the model, generator and report interfaces while
/// keeping the hash internals private.
pub mod model;

/// Corpus tokenization (whitespace splitting, punctuation classes).
pub mod parse;

/// I/O utilities (file loading, path helpers).
pub mod io;
