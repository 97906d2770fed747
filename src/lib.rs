//! # Topica
//!
//! An in-process topic-modeling engine for Rust: collapsed Gibbs sampling
//! (CGS) for Latent Dirichlet Allocation over pre-tokenized documents.
//!
//! ## Features
//!
//! - Pure Rust implementation
//! - Integer sufficient statistics only, never explicit distributions
//! - Deterministic: one seed, one topic trajectory
//! - Checked count invariants (underflow is an error, never wrapped)
//! - Smoothed document-topic and topic-word point estimates
//!
//! Tokenization, stopword filtering and lemmatization are the caller's
//! responsibility; the engine consumes documents as ordered sequences of
//! opaque token strings.

pub mod cli;
pub mod corpus;
pub mod error;
pub mod estimates;
pub mod model;
pub mod sampler;

pub mod prelude {}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
