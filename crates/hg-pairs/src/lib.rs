//! hg-pairs: training-pair generation for the embedding pipeline.
//!
//! Turns a finished [`hg_graph::Graph`] into a weighted set of positive
//! (edge) and negative (sampled non-edge) vertex pairs, batched for an
//! SGD-style consumer. Sampling is deterministic for a given seed.

pub mod config;
pub mod error;
pub mod generator;

pub use config::PairConfig;
pub use error::{PairError, PairResult};
pub use generator::{BinaryPairGenerator, VertexPair};
