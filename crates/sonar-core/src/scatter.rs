// ─────────────────────────────────────────────────────────────────────
// Sonar Echo Core — Scatter Amplitudes
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Random complex scattering amplitude per ray (point-scatter model).
//!
//!   a = (ξ_re + iξ_im)/√2 · √(μ cos²θ r² Δaz Δel) · D_az · D_el
//!
//! ξ_re, ξ_im are uniform on [0, 1). The model treats them as a stand-in for
//! circular complex Gaussian noise; the uniform draw is kept as-is.

use ndarray::{Array2, ArrayView2, ArrayView3};
use num_complex::Complex64;
use rand::Rng;
use sonar_types::config::BeamArrayConfig;
use tracing::debug;

use crate::beam_pattern::BeamPattern;
use crate::geometry::RayGeometry;
use crate::incidence::ray_incidence;

/// Amplitude and incidence of one ray.
#[derive(Debug, Clone, Copy)]
pub struct RayScatter {
    pub amplitude: Complex64,
    pub incidence: f64,
    pub clamped: bool,
}

/// Amplitudes and incidences for every ray of one call.
#[derive(Debug, Clone)]
pub struct ScatterField {
    /// [n_elevation_rays, n_azimuth_rays * n_beams]
    pub amplitudes: Array2<Complex64>,
    /// [n_elevation_rays, n_azimuth_rays * n_beams], radians
    pub incidences: Array2<f64>,
    pub clamped: usize,
}

/// Draws per-ray amplitudes from an injected random source.
pub struct ScatterAmplitudeSampler<'a> {
    reflectivity: f64,
    geometry: &'a RayGeometry,
    pattern: &'a BeamPattern,
}

impl<'a> ScatterAmplitudeSampler<'a> {
    pub fn new(reflectivity: f64, geometry: &'a RayGeometry, pattern: &'a BeamPattern) -> Self {
        ScatterAmplitudeSampler {
            reflectivity,
            geometry,
            pattern,
        }
    }

    /// Amplitude for elevation ray `k`, in-beam azimuth ray `r`.
    pub fn sample<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        k: usize,
        r: usize,
        range: f64,
        normal: [f64; 3],
    ) -> RayScatter {
        let xi_re: f64 = rng.gen();
        let xi_im: f64 = rng.gen();

        let inc = ray_incidence(
            self.geometry.azimuth_angles[r],
            self.geometry.elevation_angles[k],
            normal,
        );

        let cos_inc = inc.angle.cos();
        let footprint = self.reflectivity
            * cos_inc
            * cos_inc
            * range
            * range
            * self.geometry.azimuth_step
            * self.geometry.elevation_step;

        let amplitude = Complex64::new(xi_re, xi_im) / std::f64::consts::SQRT_2
            * footprint.sqrt()
            * self.pattern.gain(k, r);

        RayScatter {
            amplitude,
            incidence: inc.angle,
            clamped: inc.clamped,
        }
    }

    /// Sample every ray in row-major order (elevation, then overall azimuth),
    /// so a seeded `rng` reproduces the same field.
    pub fn sample_all<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        beams: &BeamArrayConfig,
        ranges: &ArrayView2<'_, f64>,
        normals: &ArrayView3<'_, f64>,
    ) -> ScatterField {
        let (rows, cols) = beams.ray_grid_shape();
        let mut amplitudes = Array2::zeros((rows, cols));
        let mut incidences = Array2::zeros((rows, cols));
        let mut clamped = 0usize;

        for k in 0..rows {
            for i in 0..cols {
                let r = beams.ray_in_beam(i);
                let normal = [normals[[k, i, 0]], normals[[k, i, 1]], normals[[k, i, 2]]];
                let s = self.sample(rng, k, r, ranges[[k, i]], normal);
                if s.clamped {
                    clamped += 1;
                    debug!(
                        "Clamped incidence at ray ({k}, {i}): normal {:?} is not unit length",
                        normal
                    );
                }
                amplitudes[[k, i]] = s.amplitude;
                incidences[[k, i]] = s.incidence;
            }
        }

        ScatterField {
            amplitudes,
            incidences,
            clamped,
        }
    }
}
