//! Integration tests for the validation harness.

use sv_core::Real;
use sv_emulator::{Emulator, EmulatorError, EmulatorResult};
use sv_library::{LibraryError, MemoryLibrary};
use sv_spectrum::{LabelDomain, LabelVector, LabeledSpectrum, Spectrum, WaveRange, WavelengthGrid};
use sv_validate::{ValidateError, ValidationHarness, ValidationOptions};

const RESOLUTION: Real = 100.0;

fn grid() -> WavelengthGrid {
    WavelengthGrid::new(vec![4000.0, 7000.0]).unwrap()
}

fn domain() -> LabelDomain {
    LabelDomain::new([3.6, 0.0, -2.0, -0.2], [3.85, 5.5, 0.5, 0.6]).unwrap()
}

fn label_1() -> LabelVector {
    LabelVector::new(3.7, 4.4, 0.0, 0.0)
}

fn label_2() -> LabelVector {
    LabelVector::new(3.8, 4.5, -0.1, 0.1)
}

/// Deterministic mock: answers stored flux plus a per-label offset for
/// known labels, flat continuum for anything else in domain.
struct OffsetEmulator {
    entries: Vec<(LabelVector, Vec<Real>, Real)>,
    training: Vec<LabelVector>,
    domain: LabelDomain,
    grid: WavelengthGrid,
}

impl OffsetEmulator {
    fn new(entries: Vec<(LabelVector, Vec<Real>, Real)>) -> Self {
        let training = entries.iter().map(|(labels, _, _)| *labels).collect();
        Self {
            entries,
            training,
            domain: domain(),
            grid: grid(),
        }
    }

    fn with_domain(mut self, domain: LabelDomain) -> Self {
        self.domain = domain;
        self
    }
}

impl Emulator for OffsetEmulator {
    fn predict(&self, labels: &LabelVector) -> EmulatorResult<Spectrum> {
        if !self.domain.contains(labels) {
            return Err(EmulatorError::OutOfDomain { labels: *labels });
        }
        let flux = match self.entries.iter().find(|(stored, _, _)| stored == labels) {
            Some((_, truth, offset)) => truth.iter().map(|f| f + offset).collect(),
            None => vec![1.0; self.grid.len()],
        };
        Ok(Spectrum::new(self.grid.clone(), flux)?)
    }

    fn trained_wavelength_range(&self) -> WaveRange {
        self.grid.range().unwrap()
    }

    fn native_resolution(&self) -> Real {
        RESOLUTION
    }

    fn training_label_set(&self) -> &[LabelVector] {
        &self.training
    }

    fn trained_domain(&self) -> &LabelDomain {
        &self.domain
    }
}

/// Mock whose predictions drop the last wavelength sample.
struct TruncatingEmulator {
    inner: OffsetEmulator,
}

impl Emulator for TruncatingEmulator {
    fn predict(&self, labels: &LabelVector) -> EmulatorResult<Spectrum> {
        let (wavelength, flux) = self.inner.predict(labels)?.into_parts();
        let samples = wavelength.samples();
        let short = WavelengthGrid::new(samples[..samples.len() - 1].to_vec())?;
        let flux = flux[..short.len()].to_vec();
        Ok(Spectrum::new(short, flux)?)
    }

    fn trained_wavelength_range(&self) -> WaveRange {
        self.inner.trained_wavelength_range()
    }

    fn native_resolution(&self) -> Real {
        self.inner.native_resolution()
    }

    fn training_label_set(&self) -> &[LabelVector] {
        self.inner.training_label_set()
    }

    fn trained_domain(&self) -> &LabelDomain {
        self.inner.trained_domain()
    }
}

fn scenario_emulator() -> OffsetEmulator {
    OffsetEmulator::new(vec![
        (label_1(), vec![1.0, 1.0], 0.0),
        (label_2(), vec![0.9, 1.1], 0.05),
    ])
}

/// Library holding the two training spectra plus extra in-domain and
/// out-of-domain candidates.
fn scenario_library(extra_in_domain: usize) -> MemoryLibrary {
    let mut lib = MemoryLibrary::new(RESOLUTION).unwrap();
    lib.insert(LabeledSpectrum::new(
        label_1(),
        Spectrum::new(grid(), vec![1.0, 1.0]).unwrap(),
    ));
    lib.insert(LabeledSpectrum::new(
        label_2(),
        Spectrum::new(grid(), vec![0.9, 1.1]).unwrap(),
    ));
    for i in 0..extra_in_domain {
        let labels = LabelVector::new(3.62 + 0.01 * i as Real, 4.0, -0.5, 0.2);
        lib.insert(LabeledSpectrum::new(
            labels,
            Spectrum::new(grid(), vec![0.95, 1.05]).unwrap(),
        ));
    }
    // Hotter than the trained domain; constrained draws must skip it.
    lib.insert(LabeledSpectrum::new(
        LabelVector::new(4.1, 4.0, 0.0, 0.0),
        Spectrum::new(grid(), vec![1.0, 1.0]).unwrap(),
    ));
    lib
}

#[test]
fn training_records_match_training_order() {
    let emulator = scenario_emulator();
    let library = scenario_library(3);
    let harness = ValidationHarness::new(&emulator);
    assert_eq!(harness.window(), WaveRange::new(4000.0, 7000.0).unwrap());
    let result = harness
        .run_validation(&library, &ValidationOptions::default())
        .unwrap();

    assert_eq!(result.training_records.len(), 2);
    assert_eq!(result.training_labels, vec![label_1(), label_2()]);
    for (position, record) in result.training_records.iter().enumerate() {
        assert_eq!(record.index, position);
        assert_eq!(record.labels, result.training_labels[position]);
    }
}

#[test]
fn end_to_end_residuals_match_hand_computation() {
    let emulator = scenario_emulator();
    let library = scenario_library(0);
    let harness = ValidationHarness::new(&emulator);
    let result = harness
        .run_validation(&library, &ValidationOptions::default())
        .unwrap();

    // Per bin: residuals {0, 0.05} -> median 0.025.
    assert_eq!(result.training_residuals.len(), 2);
    for value in result.training_residuals.values() {
        assert!((value - 0.025).abs() < 1e-12);
    }

    // Record 0 predicted truth unchanged, record 1 truth + 0.05.
    assert_eq!(result.training_records[0].predicted_flux, vec![1.0, 1.0]);
    assert_eq!(result.training_records[0].truth_flux, vec![1.0, 1.0]);
    assert!((result.training_records[1].predicted_flux[0] - 0.95).abs() < 1e-12);
}

#[test]
fn test_set_is_disjoint_and_in_domain() {
    let emulator = scenario_emulator();
    let library = scenario_library(4);
    let harness = ValidationHarness::new(&emulator);
    let result = harness
        .run_validation(&library, &ValidationOptions::default())
        .unwrap();

    // Default test_count = training cardinality.
    assert_eq!(result.test_labels.len(), 2);
    for labels in &result.test_labels {
        assert!(!result.training_labels.contains(labels));
        assert!(emulator.trained_domain().contains(labels));
    }
}

#[test]
fn test_count_zero_yields_empty_profile() {
    let emulator = scenario_emulator();
    let library = scenario_library(3);
    let harness = ValidationHarness::new(&emulator);
    let result = harness
        .run_validation(
            &library,
            &ValidationOptions {
                test_count: Some(0),
                resolution: None,
            },
        )
        .unwrap();

    assert!(result.test_records.is_empty());
    assert!(result.test_labels.is_empty());
    assert_eq!(result.test_residuals.len(), 0);
    // Training side is unaffected.
    assert_eq!(result.training_residuals.len(), 2);
}

#[test]
fn short_test_set_is_not_an_error() {
    let emulator = scenario_emulator();
    let library = scenario_library(1);
    let harness = ValidationHarness::new(&emulator);
    let result = harness
        .run_validation(
            &library,
            &ValidationOptions {
                test_count: Some(50),
                resolution: None,
            },
        )
        .unwrap();

    assert_eq!(result.test_records.len(), 1);
    assert_eq!(result.test_residuals.len(), 2);
}

#[test]
fn identical_runs_are_identical() {
    let emulator = scenario_emulator();
    let library = scenario_library(3);
    let harness = ValidationHarness::new(&emulator);
    let options = ValidationOptions::default();
    let first = harness.run_validation(&library, &options).unwrap();
    let second = harness.run_validation(&library, &options).unwrap();
    assert_eq!(first, second);
}

#[test]
fn truncated_prediction_grid_fails_the_run() {
    let emulator = TruncatingEmulator {
        inner: scenario_emulator(),
    };
    let library = scenario_library(0);
    let harness = ValidationHarness::new(&emulator);
    let err = harness
        .run_validation(&library, &ValidationOptions::default())
        .unwrap_err();
    assert!(matches!(
        err,
        ValidateError::IncompatibleGrid {
            expected: 2,
            actual: 1,
            ..
        }
    ));
}

#[test]
fn out_of_domain_prediction_propagates_unchanged() {
    // Trained domain tops out below label 2's temperature, so predicting
    // the second training spectrum must fail and surface the emulator's
    // error as-is; the harness never catches or retries it.
    let emulator = scenario_emulator()
        .with_domain(LabelDomain::new([3.6, 0.0, -2.0, -0.2], [3.75, 5.5, 0.5, 0.6]).unwrap());
    let library = scenario_library(0);
    let harness = ValidationHarness::new(&emulator);
    let err = harness
        .run_validation(&library, &ValidationOptions::default())
        .unwrap_err();
    assert_eq!(
        err,
        ValidateError::Emulator(EmulatorError::OutOfDomain { labels: label_2() })
    );
}

#[test]
fn missing_training_spectrum_propagates_lookup_error() {
    let emulator = scenario_emulator();
    // Library without the second training spectrum.
    let mut library = MemoryLibrary::new(RESOLUTION).unwrap();
    library.insert(LabeledSpectrum::new(
        label_1(),
        Spectrum::new(grid(), vec![1.0, 1.0]).unwrap(),
    ));
    let harness = ValidationHarness::new(&emulator);
    let err = harness
        .run_validation(&library, &ValidationOptions::default())
        .unwrap_err();
    assert_eq!(
        err,
        ValidateError::Library(LibraryError::Lookup { labels: label_2() })
    );
}

#[test]
fn non_positive_resolution_is_rejected() {
    let emulator = scenario_emulator();
    let library = scenario_library(0);
    let harness = ValidationHarness::new(&emulator);
    let err = harness
        .run_validation(
            &library,
            &ValidationOptions {
                test_count: None,
                resolution: Some(0.0),
            },
        )
        .unwrap_err();
    assert!(matches!(err, ValidateError::InvalidOptions { .. }));
}

#[test]
fn result_round_trips_through_json() {
    let emulator = scenario_emulator();
    let library = scenario_library(2);
    let harness = ValidationHarness::new(&emulator);
    let result = harness
        .run_validation(&library, &ValidationOptions::default())
        .unwrap();

    let json = serde_json::to_string(&result).unwrap();
    let back: sv_validate::ValidationResult = serde_json::from_str(&json).unwrap();
    assert_eq!(back, result);
}
