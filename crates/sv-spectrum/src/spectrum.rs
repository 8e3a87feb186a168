//! Flux-on-grid spectra and labeled spectra.

use crate::error::{SpectrumError, SpectrumResult};
use crate::grid::{WaveRange, WavelengthGrid};
use crate::labels::LabelVector;
use serde::{Deserialize, Serialize};
use sv_core::Real;

/// A sampled spectrum: flux per wavelength bin.
///
/// `wavelength` and `flux` always have equal length; the constructor
/// enforces it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Spectrum {
    wavelength: WavelengthGrid,
    flux: Vec<Real>,
}

impl Spectrum {
    pub fn new(wavelength: WavelengthGrid, flux: Vec<Real>) -> SpectrumResult<Self> {
        if wavelength.len() != flux.len() {
            return Err(SpectrumError::LengthMismatch {
                wavelength: wavelength.len(),
                flux: flux.len(),
            });
        }
        Ok(Self { wavelength, flux })
    }

    /// Convenience constructor validating the grid in the same call.
    pub fn from_samples(wavelength: Vec<Real>, flux: Vec<Real>) -> SpectrumResult<Self> {
        Self::new(WavelengthGrid::new(wavelength)?, flux)
    }

    pub fn wavelength(&self) -> &WavelengthGrid {
        &self.wavelength
    }

    pub fn flux(&self) -> &[Real] {
        &self.flux
    }

    pub fn len(&self) -> usize {
        self.flux.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flux.is_empty()
    }

    pub fn into_parts(self) -> (WavelengthGrid, Vec<Real>) {
        (self.wavelength, self.flux)
    }

    /// Restrict the spectrum to samples inside `window`.
    ///
    /// Keeps (wavelength, flux) pairs whose wavelength satisfies
    /// `window.min <= w <= window.max`; infallible because filtering
    /// preserves both ordering and pairing.
    pub fn clipped_to(&self, window: WaveRange) -> Spectrum {
        let flux = self
            .wavelength
            .samples()
            .iter()
            .zip(self.flux.iter())
            .filter(|&(&w, _)| window.contains(w))
            .map(|(_, &f)| f)
            .collect();
        Spectrum {
            wavelength: self.wavelength.filtered(window),
            flux,
        }
    }
}

/// A truth spectrum together with the labels that produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabeledSpectrum {
    pub labels: LabelVector,
    pub spectrum: Spectrum,
}

impl LabeledSpectrum {
    pub fn new(labels: LabelVector, spectrum: Spectrum) -> Self {
        Self { labels, spectrum }
    }
}
