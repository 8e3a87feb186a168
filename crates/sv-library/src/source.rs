//! Spectrum source capability trait.

use crate::error::LibraryResult;
use sv_core::Real;
use sv_spectrum::{DrawBounds, LabelVector, LabeledSpectrum, WaveRange};

/// Trait for spectral-library access.
///
/// Two call modes: exact selection reproduces a known label set one-to-one
/// and order-preserved; constrained draws build an independent set inside
/// per-label bounds. Returned spectra are clipped to the requested window.
pub trait SpectrumSource {
    /// Return spectra matched one-to-one and order-preserved with `labels`.
    ///
    /// Fails with [`LibraryError::Lookup`](crate::LibraryError::Lookup)
    /// naming the first label vector that has no corresponding spectrum.
    fn select_exact(
        &self,
        labels: &[LabelVector],
        resolution: Real,
        window: WaveRange,
    ) -> LibraryResult<Vec<LabeledSpectrum>>;

    /// Draw up to `count` spectra inside `bounds`, excluding `exclude`.
    ///
    /// Best-effort: returns fewer than `count` when the library holds too
    /// few disjoint candidates. Bounds filter on linear Teff (see
    /// [`DrawBounds`]). Never an error.
    fn draw_constrained(
        &self,
        count: usize,
        resolution: Real,
        window: WaveRange,
        exclude: &[LabelVector],
        bounds: &DrawBounds,
    ) -> Vec<LabeledSpectrum>;
}
