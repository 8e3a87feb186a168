//! Per-wavelength-bin residual aggregation.

use crate::result::{PredictionRecord, ResidualProfile};
use sv_core::median;
use sv_spectrum::WavelengthGrid;

/// Median of `|truth - predicted|` across `records` at every bin of `grid`.
///
/// The median resists a handful of badly-fit spectra dominating the per-bin
/// error estimate. An empty record set yields an explicitly-empty profile
/// rather than a statistic over zero samples.
///
/// Crate-internal: the harness has already verified every record's flux
/// length against `grid` via its shared-grid check before calling this.
pub(crate) fn residual_profile(
    grid: &WavelengthGrid,
    records: &[PredictionRecord],
) -> ResidualProfile {
    if records.is_empty() {
        return ResidualProfile::empty();
    }
    let mut profile = Vec::with_capacity(grid.len());
    let mut scratch = Vec::with_capacity(records.len());
    for bin in 0..grid.len() {
        scratch.clear();
        scratch.extend(
            records
                .iter()
                .map(|r| (r.truth_flux[bin] - r.predicted_flux[bin]).abs()),
        );
        // records is non-empty here, so the median exists
        profile.push(median(&scratch).unwrap_or(0.0));
    }
    ResidualProfile::new(profile)
}
