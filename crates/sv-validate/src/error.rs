//! Validation harness errors.

use sv_emulator::EmulatorError;
use sv_library::LibraryError;
use sv_spectrum::SpectrumError;
use thiserror::Error;

/// Result type for validation runs.
pub type ValidateResult<T> = Result<T, ValidateError>;

/// Errors that can occur during a validation run.
///
/// Collaborator errors propagate unchanged: an out-of-domain label means
/// the draw bounds were built wrong, a lookup failure means the training
/// label set and the library are out of sync. Neither is recoverable here.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidateError {
    /// Run options the harness itself rejects (e.g. non-positive resolution).
    #[error("Invalid options: {what}")]
    InvalidOptions { what: &'static str },

    /// A spectrum's wavelength grid disagrees with the shared grid in
    /// length or sample positions. Residuals are computed index-wise, so
    /// this is fatal; the harness never resamples to reconcile.
    #[error(
        "Incompatible wavelength grid for {what} at record {index}: {actual} samples vs {expected} on the shared grid"
    )]
    IncompatibleGrid {
        what: &'static str,
        index: usize,
        expected: usize,
        actual: usize,
    },

    /// Propagated from the emulator.
    #[error("Emulator error: {0}")]
    Emulator(#[from] EmulatorError),

    /// Propagated from the spectral library.
    #[error("Library error: {0}")]
    Library(#[from] LibraryError),

    /// Malformed spectrum data.
    #[error("Spectrum error: {0}")]
    Spectrum(#[from] SpectrumError),
}
