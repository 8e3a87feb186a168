//! sv-emulator: trained-spectrum emulator interface.
//!
//! Contains:
//! - model (the `Emulator` capability trait)
//! - tabulated (in-memory reference implementation)
//! - error (emulator error types)

pub mod error;
pub mod model;
pub mod tabulated;

pub use error::{EmulatorError, EmulatorResult};
pub use model::Emulator;
pub use tabulated::TabulatedEmulator;
