//! Validation result data types.

use serde::{Deserialize, Serialize};
use sv_core::Real;
use sv_spectrum::{LabelVector, WavelengthGrid};

/// One truth/prediction pair.
///
/// `index` is the position in the originating ordered truth collection; it
/// is the join key between truth and prediction and is derived from the
/// collection itself, never from a separately maintained counter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionRecord {
    pub index: usize,
    pub labels: LabelVector,
    pub truth_flux: Vec<Real>,
    pub predicted_flux: Vec<Real>,
}

/// Per-wavelength-bin median absolute residuals over one record set.
///
/// Empty (length 0) when the record set is empty; never NaN-filled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResidualProfile(Vec<Real>);

impl ResidualProfile {
    pub fn new(values: Vec<Real>) -> Self {
        Self(values)
    }

    pub fn empty() -> Self {
        Self(Vec::new())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn values(&self) -> &[Real] {
        &self.0
    }
}

/// Aggregate output of one validation run.
///
/// Immutable once returned; the harness writes nothing to disk, but the
/// bundle is serde-serializable so surrounding tooling can persist it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationResult {
    /// Shared wavelength grid all records are sampled on.
    pub wavelength: WavelengthGrid,
    /// Training labels, in the emulator's training order.
    pub training_labels: Vec<LabelVector>,
    /// Held-out labels, in draw order.
    pub test_labels: Vec<LabelVector>,
    pub training_records: Vec<PredictionRecord>,
    pub test_records: Vec<PredictionRecord>,
    pub training_residuals: ResidualProfile,
    pub test_residuals: ResidualProfile,
}
