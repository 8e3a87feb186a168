//! sv-validate: validation harness for trained spectrum emulators.
//!
//! Drives one full validation pass: reproduce the emulator's training
//! spectra, draw an independent held-out set from a spectral library,
//! predict both sets, and aggregate per-wavelength-bin median absolute
//! residuals.
//!
//! Contains:
//! - harness (orchestration + run options)
//! - residual (per-bin median aggregation)
//! - result (prediction records + residual profiles + result bundle)
//! - error (validation error types)

pub mod error;
pub mod harness;
pub mod result;

pub(crate) mod residual;

pub use error::{ValidateError, ValidateResult};
pub use harness::{ValidationHarness, ValidationOptions};
pub use result::{PredictionRecord, ResidualProfile, ValidationResult};
