//! sv-core: stable foundation for specval.
//!
//! Contains:
//! - numeric (Real + tolerances + float helpers + median)

pub mod numeric;

// Re-exports: nice ergonomics for downstream crates
pub use numeric::*;
