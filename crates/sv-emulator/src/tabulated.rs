//! In-memory tabulated emulator.
//!
//! A deterministic reference implementation of [`Emulator`] built from
//! stored (labels, spectrum) pairs. For a known label vector it answers the
//! stored spectrum; for an unseen in-domain vector it answers the spectrum
//! of the nearest stored labels in domain-normalized label space. Exists so
//! the validation harness can be exercised end-to-end without a trained
//! network file.

use crate::error::{EmulatorError, EmulatorResult};
use crate::model::Emulator;
use sv_core::Real;
use sv_spectrum::{LabelDomain, LabelVector, Spectrum, WaveRange};

#[derive(Debug)]
pub struct TabulatedEmulator {
    entries: Vec<(LabelVector, Spectrum)>,
    training_labels: Vec<LabelVector>,
    domain: LabelDomain,
    resolution: Real,
    range: WaveRange,
}

impl TabulatedEmulator {
    /// Build from stored pairs plus trained-domain metadata.
    ///
    /// All stored spectra must share one wavelength grid; the trained range
    /// is derived from it.
    pub fn new(
        entries: Vec<(LabelVector, Spectrum)>,
        domain: LabelDomain,
        resolution: Real,
    ) -> EmulatorResult<Self> {
        if resolution <= 0.0 || !resolution.is_finite() {
            return Err(EmulatorError::InvalidModel {
                what: "resolution must be positive and finite",
            });
        }
        let first = entries.first().ok_or(EmulatorError::InvalidModel {
            what: "no stored spectra",
        })?;
        let range = first
            .1
            .wavelength()
            .range()
            .ok_or(EmulatorError::InvalidModel {
                what: "stored spectra have empty grids",
            })?;
        if entries
            .iter()
            .any(|(_, s)| s.wavelength() != first.1.wavelength())
        {
            return Err(EmulatorError::InvalidModel {
                what: "stored spectra disagree on wavelength grid",
            });
        }
        let training_labels = entries.iter().map(|(labels, _)| *labels).collect();
        Ok(Self {
            entries,
            training_labels,
            domain,
            resolution,
            range,
        })
    }

    /// Squared distance in label space, each dimension normalized by the
    /// trained span so no single label dominates.
    fn normalized_distance_sq(&self, a: &LabelVector, b: &LabelVector) -> Real {
        let a = a.as_array();
        let b = b.as_array();
        (0..4)
            .map(|dim| {
                let span = self.domain.span(dim);
                let d = if span > 0.0 {
                    (a[dim] - b[dim]) / span
                } else {
                    a[dim] - b[dim]
                };
                d * d
            })
            .sum()
    }
}

impl Emulator for TabulatedEmulator {
    fn predict(&self, labels: &LabelVector) -> EmulatorResult<Spectrum> {
        if !self.domain.contains(labels) {
            return Err(EmulatorError::OutOfDomain { labels: *labels });
        }
        // Exact match first; ties in the nearest-neighbor fallback go to
        // the earliest stored entry.
        let mut best: Option<(Real, &Spectrum)> = None;
        for (stored, spectrum) in &self.entries {
            if stored == labels {
                return Ok(spectrum.clone());
            }
            let d = self.normalized_distance_sq(stored, labels);
            if best.is_none_or(|(best_d, _)| d < best_d) {
                best = Some((d, spectrum));
            }
        }
        match best {
            Some((_, spectrum)) => Ok(spectrum.clone()),
            None => Err(EmulatorError::InvalidModel {
                what: "no stored spectra",
            }),
        }
    }

    fn trained_wavelength_range(&self) -> WaveRange {
        self.range
    }

    fn native_resolution(&self) -> Real {
        self.resolution
    }

    fn training_label_set(&self) -> &[LabelVector] {
        &self.training_labels
    }

    fn trained_domain(&self) -> &LabelDomain {
        &self.domain
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn domain() -> LabelDomain {
        LabelDomain::new([3.6, 0.0, -2.0, -0.2], [3.8, 5.5, 0.5, 0.6]).unwrap()
    }

    fn spectrum(flux: Vec<Real>) -> Spectrum {
        Spectrum::from_samples(vec![4000.0, 7000.0], flux).unwrap()
    }

    fn emulator() -> TabulatedEmulator {
        TabulatedEmulator::new(
            vec![
                (LabelVector::new(3.7, 4.4, 0.0, 0.0), spectrum(vec![1.0, 1.0])),
                (
                    LabelVector::new(3.75, 4.5, -0.1, 0.1),
                    spectrum(vec![0.9, 1.1]),
                ),
            ],
            domain(),
            100.0,
        )
        .unwrap()
    }

    #[test]
    fn known_labels_return_stored_spectrum() {
        let em = emulator();
        let predicted = em.predict(&LabelVector::new(3.7, 4.4, 0.0, 0.0)).unwrap();
        assert_eq!(predicted.flux(), &[1.0, 1.0]);
    }

    #[test]
    fn unseen_labels_return_nearest_spectrum() {
        let em = emulator();
        let predicted = em.predict(&LabelVector::new(3.74, 4.5, -0.1, 0.1)).unwrap();
        assert_eq!(predicted.flux(), &[0.9, 1.1]);
    }

    #[test]
    fn out_of_domain_is_rejected() {
        let em = emulator();
        let labels = LabelVector::new(4.2, 4.4, 0.0, 0.0);
        assert_eq!(
            em.predict(&labels).unwrap_err(),
            EmulatorError::OutOfDomain { labels }
        );
    }

    #[test]
    fn metadata_reflects_stored_state() {
        let em = emulator();
        assert_eq!(
            em.trained_wavelength_range(),
            WaveRange::new(4000.0, 7000.0).unwrap()
        );
        assert_eq!(em.native_resolution(), 100.0);
        assert_eq!(em.training_label_set().len(), 2);
    }

    #[test]
    fn mismatched_grids_are_rejected_at_construction() {
        let other = Spectrum::from_samples(vec![4000.0, 6000.0, 7000.0], vec![1.0; 3]).unwrap();
        let err = TabulatedEmulator::new(
            vec![
                (LabelVector::new(3.7, 4.4, 0.0, 0.0), spectrum(vec![1.0, 1.0])),
                (LabelVector::new(3.75, 4.5, -0.1, 0.1), other),
            ],
            domain(),
            100.0,
        )
        .unwrap_err();
        assert!(matches!(err, EmulatorError::InvalidModel { .. }));
    }
}
