//! Emulator capability trait.

use crate::error::EmulatorResult;
use sv_core::Real;
use sv_spectrum::{LabelDomain, LabelVector, Spectrum, WaveRange};

/// Trait for trained spectrum emulators.
///
/// Implementations must be thread-safe (Send + Sync) so validation can
/// evaluate predictions in parallel. Prediction is a pure function of the
/// label vector; metadata getters are cheap and stable for the lifetime of
/// the emulator.
pub trait Emulator: Send + Sync {
    /// Predict a spectrum at the emulator's native sampling.
    ///
    /// Fails with [`EmulatorError::OutOfDomain`](crate::EmulatorError::OutOfDomain)
    /// when a label component is outside the trained range; prediction
    /// quality close to the boundary is undefined but not an error.
    fn predict(&self, labels: &LabelVector) -> EmulatorResult<Spectrum>;

    /// Wavelength range covered by the trained model.
    fn trained_wavelength_range(&self) -> WaveRange;

    /// Native sampling resolution of the trained model.
    fn native_resolution(&self) -> Real;

    /// Labels of the spectra the model was trained on, in training order.
    fn training_label_set(&self) -> &[LabelVector];

    /// Per-dimension trained bounds (log-scaled temperature).
    fn trained_domain(&self) -> &LabelDomain;
}
