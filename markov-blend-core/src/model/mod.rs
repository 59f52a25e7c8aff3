//! Top-level module for the Markov chain system.
//!
//! The pieces compose linearly:
//! - Token pairs used as lookup keys (`Context`)
//! - Per-context successor lists (`Successors`)
//! - The shared transition map (`ChainModel`)
//! - Folding token sequences into a model (`builder`)
//! - Random walks over a model (`TextGenerator`)
//! - Multi-source orchestration (`Blender`)

/// Two-token lookup key.
pub mod context;

/// Ordered successor list of a single context.
///
/// Tracks every observed continuation, duplicates included, and supports
/// uniform random draws.
pub mod successors;

/// Mapping from contexts to their successor lists.
///
/// Supports create-if-absent appends and append-only merging.
pub mod chain_model;

/// Tokenization and folding of token sequences into a `ChainModel`.
pub mod builder;

/// Random-walk generation from a seed token.
pub mod generator;

/// Multi-source orchestration: seed pool, shared model, generation.
pub mod blender;
