//! Wavelength grids and sampling windows.

use crate::error::{SpectrumError, SpectrumResult};
use serde::{Deserialize, Serialize};
use sv_core::{Real, Tolerances, nearly_equal};

/// A strictly increasing sequence of wavelength samples.
///
/// The constructor enforces finiteness and strict monotonicity, so every
/// held grid is valid by construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WavelengthGrid(Vec<Real>);

impl WavelengthGrid {
    pub fn new(samples: Vec<Real>) -> SpectrumResult<Self> {
        for (index, pair) in samples.windows(2).enumerate() {
            if !(pair[0] < pair[1]) {
                return Err(SpectrumError::NotIncreasing { index: index + 1 });
            }
        }
        if samples.iter().any(|v| !v.is_finite()) {
            return Err(SpectrumError::NonFinite {
                what: "wavelength sample",
            });
        }
        Ok(Self(samples))
    }

    /// The empty grid (zero wavelength bins).
    pub fn empty() -> Self {
        Self(Vec::new())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn samples(&self) -> &[Real] {
        &self.0
    }

    /// Covered wavelength range, `None` for the empty grid.
    pub fn range(&self) -> Option<WaveRange> {
        match (self.0.first(), self.0.last()) {
            (Some(&min), Some(&max)) => Some(WaveRange { min, max }),
            _ => None,
        }
    }

    /// Whether two grids agree in length and in every sample position.
    pub fn matches(&self, other: &WavelengthGrid, tol: Tolerances) -> bool {
        self.0.len() == other.0.len()
            && self
                .0
                .iter()
                .zip(other.0.iter())
                .all(|(&a, &b)| nearly_equal(a, b, tol))
    }

    /// Build the sub-grid of samples inside `window`, preserving order.
    pub(crate) fn filtered(&self, window: WaveRange) -> Self {
        Self(
            self.0
                .iter()
                .copied()
                .filter(|&w| window.contains(w))
                .collect(),
        )
    }
}

/// Inclusive wavelength window `[min, max]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WaveRange {
    pub min: Real,
    pub max: Real,
}

impl WaveRange {
    pub fn new(min: Real, max: Real) -> SpectrumResult<Self> {
        if !min.is_finite() || !max.is_finite() {
            return Err(SpectrumError::NonFinite {
                what: "wavelength range",
            });
        }
        if min > max {
            return Err(SpectrumError::NotIncreasing { index: 1 });
        }
        Ok(Self { min, max })
    }

    pub fn contains(&self, wavelength: Real) -> bool {
        self.min <= wavelength && wavelength <= self.max
    }
}
