//! Validation harness orchestration.

use crate::error::{ValidateError, ValidateResult};
use crate::residual::residual_profile;
use crate::result::{PredictionRecord, ValidationResult};
use rayon::prelude::*;
use sv_core::{Real, Tolerances};
use sv_emulator::Emulator;
use sv_library::SpectrumSource;
use sv_spectrum::{LabeledSpectrum, WaveRange, WavelengthGrid};
use tracing::{debug, info};

/// Options for a validation run.
///
/// `None` fields fall back to emulator metadata: `test_count` defaults to
/// the training-set cardinality so residual statistics are computed over
/// comparable sample sizes, `resolution` to the native training resolution.
#[derive(Clone, Copy, Debug, Default)]
pub struct ValidationOptions {
    /// Number of held-out test spectra to draw.
    pub test_count: Option<usize>,
    /// Spectral resolution for sampling.
    pub resolution: Option<Real>,
}

/// Drives one full validation pass against a trained emulator.
///
/// Stateless between runs; each [`run_validation`](Self::run_validation)
/// call is independent and the harness holds nothing but the emulator
/// handle and the cached sampling window.
pub struct ValidationHarness<'a> {
    emulator: &'a dyn Emulator,
    window: WaveRange,
}

impl<'a> ValidationHarness<'a> {
    /// Wrap an emulator, caching its trained wavelength range as the
    /// sampling window for all spectrum retrieval. The window is the single
    /// source of truth for the run's wavelength coverage, keeping truth and
    /// predicted spectra comparable sample-for-sample.
    pub fn new(emulator: &'a dyn Emulator) -> Self {
        let window = emulator.trained_wavelength_range();
        Self { emulator, window }
    }

    /// The cached sampling window.
    pub fn window(&self) -> WaveRange {
        self.window
    }

    /// Run one validation pass and assemble the result bundle.
    ///
    /// Fails fast on the first collaborator error or grid mismatch; no
    /// partial result is returned. A short test set (library holds fewer
    /// disjoint candidates than requested) is not an error.
    pub fn run_validation(
        &self,
        source: &dyn SpectrumSource,
        options: &ValidationOptions,
    ) -> ValidateResult<ValidationResult> {
        let resolution = options
            .resolution
            .unwrap_or_else(|| self.emulator.native_resolution());
        if resolution <= 0.0 || !resolution.is_finite() {
            return Err(ValidateError::InvalidOptions {
                what: "resolution must be positive and finite",
            });
        }
        let training_labels = self.emulator.training_label_set().to_vec();
        let test_count = options.test_count.unwrap_or(training_labels.len());
        info!(
            test_count,
            resolution,
            window_min = self.window.min,
            window_max = self.window.max,
            "starting validation run"
        );

        // Truth spectra for the training set, order preserved from the
        // emulator's training label order.
        let training = source.select_exact(&training_labels, resolution, self.window)?;
        debug!(count = training.len(), "retrieved training spectra");

        // Held-out set: disjoint from training, inside the trained domain.
        let bounds = self.emulator.trained_domain().draw_bounds();
        let test = source.draw_constrained(
            test_count,
            resolution,
            self.window,
            &training_labels,
            &bounds,
        );
        debug!(
            count = test.len(),
            requested = test_count,
            "retrieved test spectra"
        );

        // The shared grid every truth and predicted spectrum must match.
        let wavelength = training
            .first()
            .or_else(|| test.first())
            .map(|entry| entry.spectrum.wavelength().clone())
            .unwrap_or_else(WavelengthGrid::empty);

        let training_records = predict_set(self.emulator, &wavelength, &training, "training")?;
        let test_records = predict_set(self.emulator, &wavelength, &test, "test")?;

        let training_residuals = residual_profile(&wavelength, &training_records);
        let test_residuals = residual_profile(&wavelength, &test_records);
        info!(
            bins = wavelength.len(),
            training = training_records.len(),
            test = test_records.len(),
            "validation run complete"
        );

        Ok(ValidationResult {
            wavelength,
            training_labels,
            test_labels: test.iter().map(|entry| entry.labels).collect(),
            training_records,
            test_records,
            training_residuals,
            test_residuals,
        })
    }
}

/// Predict every truth spectrum in `truths` and join by enumeration index.
///
/// Each prediction is independent, so the loop runs data-parallel; the
/// indexed collect restores truth order, which keeps record `index`, labels
/// and truth flux aligned by construction.
fn predict_set(
    emulator: &dyn Emulator,
    shared: &WavelengthGrid,
    truths: &[LabeledSpectrum],
    what: &'static str,
) -> ValidateResult<Vec<PredictionRecord>> {
    truths
        .par_iter()
        .enumerate()
        .map(|(index, truth)| {
            ensure_grid(what, index, shared, truth.spectrum.wavelength())?;
            let predicted = emulator.predict(&truth.labels)?;
            ensure_grid(what, index, shared, predicted.wavelength())?;
            let (_, predicted_flux) = predicted.into_parts();
            Ok(PredictionRecord {
                index,
                labels: truth.labels,
                truth_flux: truth.spectrum.flux().to_vec(),
                predicted_flux,
            })
        })
        .collect()
}

fn ensure_grid(
    what: &'static str,
    index: usize,
    shared: &WavelengthGrid,
    actual: &WavelengthGrid,
) -> ValidateResult<()> {
    if actual.matches(shared, Tolerances::default()) {
        Ok(())
    } else {
        Err(ValidateError::IncompatibleGrid {
            what,
            index,
            expected: shared.len(),
            actual: actual.len(),
        })
    }
}
