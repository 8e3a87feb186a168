//! sv-spectrum: domain data model for stellar spectra.
//!
//! Contains:
//! - labels (label vectors + trained domain bounds)
//! - grid (wavelength grids + sampling windows)
//! - spectrum (flux-on-grid pairs + labeled spectra)
//! - error (shared error types)

pub mod error;
pub mod grid;
pub mod labels;
pub mod spectrum;

pub use error::{SpectrumError, SpectrumResult};
pub use grid::{WaveRange, WavelengthGrid};
pub use labels::{DrawBounds, LabelDomain, LabelVector};
pub use spectrum::{LabeledSpectrum, Spectrum};
