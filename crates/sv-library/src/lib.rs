//! sv-library: spectral-library access interface.
//!
//! Contains:
//! - source (the `SpectrumSource` capability trait)
//! - memory (deterministic in-memory library)
//! - error (library error types)

pub mod error;
pub mod memory;
pub mod source;

pub use error::{LibraryError, LibraryResult};
pub use memory::MemoryLibrary;
pub use source::SpectrumSource;
