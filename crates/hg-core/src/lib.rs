//! hg-core: stable foundation for hyperg.
//!
//! Contains:
//! - numeric (Real + tolerances + float helpers)
//! - embedding placeholders (Coordinates)
//! - error (shared error types)

pub mod error;
pub mod numeric;

// Re-exports: nice ergonomics for downstream crates
pub use error::{HgError, HgResult};
pub use numeric::*;
