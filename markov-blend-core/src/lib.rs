//! Markov-chain text blending library.
//!
//! This crate provides an order-2, word-level Markov chain system including:
//! - Token-pair transition models built from one or more source texts
//! - Append-only merging of several texts into one shared model
//! - Random-walk generation from a seed token with injectable randomness
//! - Source resolution, output delivery helpers and configuration
//!
//! Low-level I/O helpers are kept internal; hosts go through the
//! `SourceResolver` implementations instead.

/// Core chain model, builder, generator and blending policy.
pub mod model;

/// Source resolution collaborators (file system, in-memory).
pub mod source;

/// Output delivery helpers (joining, truncation).
pub mod delivery;

/// Blend configuration loaded from TOML.
pub mod config;

/// Error types shared by every component.
pub mod error;

/// I/O utilities (file loading, path helpers).
///
/// Not exposed
pub(crate) mod io;

pub use config::BlendConfig;
pub use error::{BlendError, ConfigError, ResolutionError, SeedError};
pub use model::blender::Blender;
pub use model::builder::{build, tokenize};
pub use model::chain_model::ChainModel;
pub use model::context::{Context, Token};
pub use model::generator::{TextGenerator, generate};
pub use model::successors::Successor;
pub use source::{FileResolver, MemoryResolver, SourceResolver};
