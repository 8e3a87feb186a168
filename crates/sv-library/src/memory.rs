//! Deterministic in-memory spectral library.

use crate::error::{LibraryError, LibraryResult};
use crate::source::SpectrumSource;
use sv_core::{Real, Tolerances, nearly_equal};
use sv_spectrum::{DrawBounds, LabelVector, LabeledSpectrum, WaveRange};

/// In-memory [`SpectrumSource`] holding spectra at one fixed resolution.
///
/// Entries are kept in insertion order and constrained draws scan that
/// order, so identical queries always return identical results. The library
/// does not rebin: a requested resolution other than the native one fails
/// exact selection and yields an empty constrained draw.
pub struct MemoryLibrary {
    resolution: Real,
    entries: Vec<LabeledSpectrum>,
}

impl MemoryLibrary {
    pub fn new(resolution: Real) -> LibraryResult<Self> {
        if resolution <= 0.0 || !resolution.is_finite() {
            return Err(LibraryError::InvalidResolution { value: resolution });
        }
        Ok(Self {
            resolution,
            entries: Vec::new(),
        })
    }

    pub fn insert(&mut self, entry: LabeledSpectrum) {
        self.entries.push(entry);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn resolution(&self) -> Real {
        self.resolution
    }

    fn supports(&self, resolution: Real) -> bool {
        nearly_equal(resolution, self.resolution, Tolerances::default())
    }
}

impl SpectrumSource for MemoryLibrary {
    fn select_exact(
        &self,
        labels: &[LabelVector],
        resolution: Real,
        window: WaveRange,
    ) -> LibraryResult<Vec<LabeledSpectrum>> {
        if !self.supports(resolution) {
            return Err(LibraryError::UnsupportedResolution {
                requested: resolution,
                native: self.resolution,
            });
        }
        labels
            .iter()
            .map(|requested| {
                let entry = self
                    .entries
                    .iter()
                    .find(|e| &e.labels == requested)
                    .ok_or(LibraryError::Lookup { labels: *requested })?;
                Ok(LabeledSpectrum::new(
                    entry.labels,
                    entry.spectrum.clipped_to(window),
                ))
            })
            .collect()
    }

    fn draw_constrained(
        &self,
        count: usize,
        resolution: Real,
        window: WaveRange,
        exclude: &[LabelVector],
        bounds: &DrawBounds,
    ) -> Vec<LabeledSpectrum> {
        if !self.supports(resolution) {
            return Vec::new();
        }
        self.entries
            .iter()
            .filter(|e| bounds.admits(&e.labels))
            .filter(|e| !exclude.iter().any(|x| x == &e.labels))
            .take(count)
            .map(|e| LabeledSpectrum::new(e.labels, e.spectrum.clipped_to(window)))
            .collect()
    }
}
