//! Spectral library errors.

use sv_core::Real;
use sv_spectrum::{LabelVector, SpectrumError};
use thiserror::Error;

/// Result type for library operations.
pub type LibraryResult<T> = Result<T, LibraryError>;

/// Errors that can occur retrieving spectra from a library.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LibraryError {
    /// A requested label vector has no corresponding spectrum.
    #[error(
        "No spectrum for labels (logTeff={}, logg={}, [Fe/H]={}, [a/Fe]={})",
        labels.log_teff, labels.log_g, labels.fe_h, labels.alpha_fe
    )]
    Lookup { labels: LabelVector },

    /// The library cannot honor the requested sampling resolution.
    #[error("Unsupported resolution: requested {requested}, library holds {native}")]
    UnsupportedResolution { requested: Real, native: Real },

    /// The library itself was configured with an unusable resolution.
    #[error("Invalid resolution: {value}")]
    InvalidResolution { value: Real },

    /// Malformed spectrum data inside the library.
    #[error("Spectrum error: {0}")]
    Spectrum(#[from] SpectrumError),
}
