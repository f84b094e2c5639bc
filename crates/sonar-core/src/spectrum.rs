// ─────────────────────────────────────────────────────────────────────
// Sonar Echo Core — Frequency Spectrum
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Frequency sampling grid and transmit pulse spectrum.
//!
//! The grid is sized from the farthest ray so that the inverse transform
//! spans the full two-way travel time:
//!   T_max = 2 · max(r) / c,   Δf = 1 / T_max
//!   f ∈ [f0 − 2B, f0 + 2B],   n_freq = round(4B / Δf)
//!
//! Propagation constant K(f) = 2πf/c + iα with α = absorption · ln(10) / 20,
//! transmit spectrum S(f) = S0 · exp(−(f − f0)² π² / B²).

use ndarray::{Array1, ArrayView2};
use num_complex::Complex64;
use sonar_types::config::AcousticParams;
use sonar_types::error::{SonarError, SonarResult};
use std::f64::consts::{LN_10, PI};

/// Frequency-domain terms for one synthesis call.
#[derive(Debug, Clone)]
pub struct FrequencySpectrum {
    /// Two-way travel time to the farthest ray [s]
    pub max_round_trip: f64,
    pub n_freq: usize,
    /// Sample frequencies [Hz], endpoints inclusive
    pub frequencies: Array1<f64>,
    /// K(f) = k(f) + iα [1/m]
    pub propagation: Array1<Complex64>,
    /// S(f)
    pub transmit: Array1<f64>,
}

/// Amplitude attenuation [Np/m] from an absorption coefficient in dB/m.
pub fn attenuation_np_per_m(absorption_db_per_m: f64) -> f64 {
    absorption_db_per_m * LN_10 / 20.0
}

/// Gaussian transmit envelope at frequency `f`.
pub fn transmit_envelope(f: f64, acoustics: &AcousticParams) -> f64 {
    let df = f - acoustics.center_frequency;
    acoustics.source_level_scale * (-(df * df) * PI * PI / acoustics.bandwidth.powi(2)).exp()
}

impl FrequencySpectrum {
    /// Build the grid from the ranges of every ray.
    ///
    /// Fails when the farthest range gives a zero or non-finite sampling
    /// interval, when the grid would be empty, or when it would exceed
    /// `max_freq_samples`.
    pub fn from_ranges(
        ranges: &ArrayView2<'_, f64>,
        acoustics: &AcousticParams,
        max_freq_samples: usize,
    ) -> SonarResult<Self> {
        let max_range = ranges.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        Self::from_max_range(max_range, acoustics, max_freq_samples)
    }

    pub fn from_max_range(
        max_range: f64,
        acoustics: &AcousticParams,
        max_freq_samples: usize,
    ) -> SonarResult<Self> {
        let max_round_trip = 2.0 * max_range / acoustics.sound_speed;
        if !max_round_trip.is_finite() || max_round_trip <= 0.0 {
            return Err(SonarError::DegenerateInput(format!(
                "round-trip time must be finite and > 0, got {max_round_trip} (max range {max_range})"
            )));
        }
        let delta_f = 1.0 / max_round_trip;

        let f_min = acoustics.center_frequency - 2.0 * acoustics.bandwidth;
        let f_max = acoustics.center_frequency + 2.0 * acoustics.bandwidth;
        let n_float = ((f_max - f_min) / delta_f).round();
        if !n_float.is_finite() || n_float < 1.0 {
            return Err(SonarError::DegenerateInput(format!(
                "frequency sample count must be >= 1, got {n_float}"
            )));
        }
        if n_float > max_freq_samples as f64 {
            return Err(SonarError::DegenerateInput(format!(
                "frequency sample count {n_float} exceeds limit {max_freq_samples}"
            )));
        }
        let n_freq = n_float as usize;

        let frequencies = if n_freq == 1 {
            Array1::from_elem(1, f_min)
        } else {
            Array1::linspace(f_min, f_max, n_freq)
        };

        let alpha = attenuation_np_per_m(acoustics.absorption_db_per_m);
        let propagation =
            frequencies.mapv(|f| Complex64::new(2.0 * PI * f / acoustics.sound_speed, alpha));
        let transmit = frequencies.mapv(|f| transmit_envelope(f, acoustics));

        Ok(FrequencySpectrum {
            max_round_trip,
            n_freq,
            frequencies,
            propagation,
            transmit,
        })
    }

    /// Echo time axis, linspace(0, T_max, n_freq) [s].
    pub fn time_axis(&self) -> Array1<f64> {
        if self.n_freq == 1 {
            Array1::zeros(1)
        } else {
            Array1::linspace(0.0, self.max_round_trip, self.n_freq)
        }
    }
}
