// ─────────────────────────────────────────────────────────────────────
// Sonar Echo Core — Echo Simulator
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Multi-beam echo synthesis from ray-cast ranges and normals.
//!
//! Pipeline per call:
//! 1. Validate input shape (mismatch → all-zero response, warning)
//! 2. Reject non-finite / non-positive ranges and non-finite normals
//! 3. Size the frequency grid from the farthest ray
//! 4. Draw one scattering amplitude per ray
//! 5. Accumulate ray spectra per beam
//! 6. Inverse transform, keep the real part
//! 7. Sum-rebin into range buckets, [n_buckets, n_beams]

use ndarray::{ArrayView2, ArrayView3};
use rand::Rng;
use sonar_types::config::SonarConfig;
use sonar_types::error::{SonarError, SonarResult};
use sonar_types::state::{check_ray_shapes, EchoDiagnostics, EchoResponse};
use tracing::{debug, warn};

use crate::beam_pattern::BeamPattern;
use crate::echo::accumulate_beam_spectra;
use crate::geometry::RayGeometry;
use crate::scatter::ScatterAmplitudeSampler;
use crate::spectrum::FrequencySpectrum;
use crate::timeseries::{beam_time_series, bucketize_beams};

/// Point-scatter echo simulator for one sonar profile.
///
/// Holds only configuration-derived tables; every call starts from fresh
/// buffers, so one simulator can serve any number of frames.
#[derive(Debug, Clone)]
pub struct EchoSimulator {
    config: SonarConfig,
    geometry: RayGeometry,
    pattern: BeamPattern,
}

impl EchoSimulator {
    pub fn new(config: SonarConfig) -> SonarResult<Self> {
        config.validate()?;
        let geometry = RayGeometry::new(&config.beams)?;
        let pattern = BeamPattern::new(&geometry);
        Ok(EchoSimulator {
            config,
            geometry,
            pattern,
        })
    }

    pub fn config(&self) -> &SonarConfig {
        &self.config
    }

    pub fn geometry(&self) -> &RayGeometry {
        &self.geometry
    }

    pub fn beam_pattern(&self) -> &BeamPattern {
        &self.pattern
    }

    /// Bucketed echo power and incidence map for one frame of rays.
    ///
    /// A shape mismatch is recovered as an all-zero response; degenerate
    /// ranges are returned as `SonarError::DegenerateInput`.
    pub fn process_rays<R: Rng + ?Sized>(
        &self,
        ranges: ArrayView2<'_, f64>,
        normals: ArrayView3<'_, f64>,
        rng: &mut R,
    ) -> SonarResult<EchoResponse> {
        self.process_rays_with_diagnostics(ranges, normals, rng)
            .map(|(response, _)| response)
    }

    /// Like [`process_rays`](Self::process_rays), also returning the
    /// unbucketed series and time axis for plotting adapters. Diagnostics
    /// are `None` when the input shape was rejected.
    pub fn process_rays_with_diagnostics<R: Rng + ?Sized>(
        &self,
        ranges: ArrayView2<'_, f64>,
        normals: ArrayView3<'_, f64>,
        rng: &mut R,
    ) -> SonarResult<(EchoResponse, Option<EchoDiagnostics>)> {
        let beams = &self.config.beams;

        if let Err(err) = check_ray_shapes(beams, &ranges, &normals) {
            warn!("Rejecting ray frame, returning zero echo: {err}");
            return Ok((EchoResponse::zeros(beams), None));
        }
        validate_samples(&ranges, &normals)?;

        let spectrum = FrequencySpectrum::from_ranges(
            &ranges,
            &self.config.acoustics,
            self.config.max_freq_samples,
        )?;
        debug!(
            "Frequency grid: {} samples, round trip {:.6} s",
            spectrum.n_freq, spectrum.max_round_trip
        );

        let sampler = ScatterAmplitudeSampler::new(
            self.config.acoustics.reflectivity,
            &self.geometry,
            &self.pattern,
        );
        let field = sampler.sample_all(rng, beams, &ranges, &normals);
        if field.clamped > 0 {
            warn!(
                "{} of {} rays had non-unit normals; incidence clamped",
                field.clamped,
                ranges.len()
            );
        }

        let spectra = accumulate_beam_spectra(beams, &spectrum, &ranges, &field.amplitudes);
        let beam_series = beam_time_series(&spectra);
        let power = bucketize_beams(&beam_series, beams.n_buckets);

        let response = EchoResponse {
            power,
            incidences: field.incidences,
            clamped_incidences: field.clamped,
        };
        let diagnostics = EchoDiagnostics {
            n_freq: spectrum.n_freq,
            max_round_trip: spectrum.max_round_trip,
            times: spectrum.time_axis(),
            beam_series,
        };
        Ok((response, Some(diagnostics)))
    }
}

/// Ranges must be finite and > 0 (1/r² spreading), normals finite.
fn validate_samples(ranges: &ArrayView2<'_, f64>, normals: &ArrayView3<'_, f64>) -> SonarResult<()> {
    if let Some(((k, i), &r)) = ranges
        .indexed_iter()
        .find(|(_, r)| !r.is_finite() || **r <= 0.0)
    {
        return Err(SonarError::DegenerateInput(format!(
            "range at ray ({k}, {i}) must be finite and > 0, got {r}"
        )));
    }
    let used = normals.slice(ndarray::s![.., .., 0..3]);
    if let Some(((k, i, c), &n)) = used.indexed_iter().find(|(_, n)| !n.is_finite()) {
        return Err(SonarError::DegenerateInput(format!(
            "normal component {c} at ray ({k}, {i}) is not finite: {n}"
        )));
    }
    Ok(())
}
