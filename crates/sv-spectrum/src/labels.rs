//! Stellar label vectors and trained-domain bounds.

use crate::error::{SpectrumError, SpectrumResult};
use serde::{Deserialize, Serialize};
use sv_core::Real;

/// The four physical labels identifying a stellar spectrum.
///
/// Temperature is stored log-scaled (`log10(Teff)`), matching the space the
/// emulator is trained in. `teff()` converts back to linear Kelvin for
/// collaborators that filter on linear temperature.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LabelVector {
    /// log10 effective temperature [log10 K]
    pub log_teff: Real,
    /// Surface gravity log g [cgs dex]
    pub log_g: Real,
    /// Metallicity [Fe/H] [dex]
    pub fe_h: Real,
    /// Alpha-element abundance [alpha/Fe] [dex]
    pub alpha_fe: Real,
}

impl LabelVector {
    pub fn new(log_teff: Real, log_g: Real, fe_h: Real, alpha_fe: Real) -> Self {
        Self {
            log_teff,
            log_g,
            fe_h,
            alpha_fe,
        }
    }

    /// Positional view in trained-domain dimension order.
    pub fn as_array(&self) -> [Real; 4] {
        [self.log_teff, self.log_g, self.fe_h, self.alpha_fe]
    }

    pub fn from_array(values: [Real; 4]) -> Self {
        Self {
            log_teff: values[0],
            log_g: values[1],
            fe_h: values[2],
            alpha_fe: values[3],
        }
    }

    /// Effective temperature in linear Kelvin.
    pub fn teff(&self) -> Real {
        10.0_f64.powf(self.log_teff)
    }
}

/// Per-dimension trained bounds of an emulator, log-scaled temperature.
///
/// Dimension order matches [`LabelVector::as_array`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelDomain {
    x_min: [Real; 4],
    x_max: [Real; 4],
}

impl LabelDomain {
    /// Create a domain, validating that bounds are finite and ordered.
    pub fn new(x_min: [Real; 4], x_max: [Real; 4]) -> SpectrumResult<Self> {
        for dim in 0..4 {
            if !x_min[dim].is_finite() || !x_max[dim].is_finite() || x_min[dim] > x_max[dim] {
                return Err(SpectrumError::InvalidDomain { dim });
            }
        }
        Ok(Self { x_min, x_max })
    }

    pub fn x_min(&self) -> &[Real; 4] {
        &self.x_min
    }

    pub fn x_max(&self) -> &[Real; 4] {
        &self.x_max
    }

    /// Component-wise containment check in the trained (log-Teff) space.
    pub fn contains(&self, labels: &LabelVector) -> bool {
        let values = labels.as_array();
        (0..4).all(|dim| self.x_min[dim] <= values[dim] && values[dim] <= self.x_max[dim])
    }

    /// Per-dimension span, used for normalized label distances.
    pub fn span(&self, dim: usize) -> Real {
        self.x_max[dim] - self.x_min[dim]
    }

    /// Draw bounds for spectrum sources, with temperature converted out of
    /// log scale (sources filter on linear Teff).
    pub fn draw_bounds(&self) -> DrawBounds {
        DrawBounds {
            teff: (10.0_f64.powf(self.x_min[0]), 10.0_f64.powf(self.x_max[0])),
            log_g: (self.x_min[1], self.x_max[1]),
            fe_h: (self.x_min[2], self.x_max[2]),
            alpha_fe: (self.x_min[3], self.x_max[3]),
        }
    }
}

/// Per-label `(min, max)` bounds for constrained draws, linear Teff.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DrawBounds {
    /// Effective temperature bounds [K]
    pub teff: (Real, Real),
    /// Surface gravity bounds [cgs dex]
    pub log_g: (Real, Real),
    /// Metallicity bounds [dex]
    pub fe_h: (Real, Real),
    /// Alpha abundance bounds [dex]
    pub alpha_fe: (Real, Real),
}

impl DrawBounds {
    /// Whether a label vector satisfies every per-label bound.
    pub fn admits(&self, labels: &LabelVector) -> bool {
        in_range(labels.teff(), self.teff)
            && in_range(labels.log_g, self.log_g)
            && in_range(labels.fe_h, self.fe_h)
            && in_range(labels.alpha_fe, self.alpha_fe)
    }
}

fn in_range(value: Real, (min, max): (Real, Real)) -> bool {
    min <= value && value <= max
}
