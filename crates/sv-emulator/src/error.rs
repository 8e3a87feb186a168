//! Emulator errors.

use sv_spectrum::{LabelVector, SpectrumError};
use thiserror::Error;

/// Result type for emulator operations.
pub type EmulatorResult<T> = Result<T, EmulatorError>;

/// Errors that can occur during spectrum prediction.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EmulatorError {
    /// A label component lies outside the emulator's trained domain.
    #[error(
        "Labels out of trained domain: (logTeff={}, logg={}, [Fe/H]={}, [a/Fe]={})",
        labels.log_teff, labels.log_g, labels.fe_h, labels.alpha_fe
    )]
    OutOfDomain { labels: LabelVector },

    /// The emulator holds no usable trained state.
    #[error("Invalid trained state: {what}")]
    InvalidModel { what: &'static str },

    /// Malformed spectrum data inside the trained state.
    #[error("Spectrum error: {0}")]
    Spectrum(#[from] SpectrumError),
}
