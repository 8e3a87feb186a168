//! Spectrum data model errors.

use thiserror::Error;

/// Result type for spectrum data construction.
pub type SpectrumResult<T> = Result<T, SpectrumError>;

/// Errors that can occur building spectrum data structures.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SpectrumError {
    /// Wavelength and flux sequence lengths disagree.
    #[error("Length mismatch: wavelength has {wavelength} samples, flux has {flux}")]
    LengthMismatch { wavelength: usize, flux: usize },

    /// Wavelength grid is not strictly increasing.
    #[error("Wavelength grid not strictly increasing at index {index}")]
    NotIncreasing { index: usize },

    /// Non-finite value where a finite one is required.
    #[error("Non-finite value for {what}")]
    NonFinite { what: &'static str },

    /// Trained domain has min > max or non-finite bounds in a dimension.
    #[error("Invalid label domain in dimension {dim}")]
    InvalidDomain { dim: usize },
}
