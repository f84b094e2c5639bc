//! Aperture directivity of the receive array.
//!
//! Rectangular-aperture approximation, one sinc² lobe per axis:
//!   D(θ) = |sinc(π · 0.884 / Δθ · sin θ)|²
//! where Δθ is the angular step between rays on that axis. The 0.884 factor
//! puts the −3 dB point of the lobe at the configured ray width.

use ndarray::Array1;
use sonar_math::special::unnormalized_sinc;
use sonar_types::constants::APERTURE_HALF_POWER_FACTOR;
use std::f64::consts::PI;

use crate::geometry::RayGeometry;

/// Single-axis directivity gain at `angle` for a ray spacing of `step`.
pub fn directivity(angle: f64, step: f64) -> f64 {
    unnormalized_sinc(PI * APERTURE_HALF_POWER_FACTOR / step * angle.sin()).powi(2)
}

/// Directivity per ray, tabulated once per geometry.
#[derive(Debug, Clone)]
pub struct BeamPattern {
    /// Gain per elevation ray
    pub elevation: Array1<f64>,
    /// Gain per in-beam azimuth ray
    pub azimuth: Array1<f64>,
}

impl BeamPattern {
    pub fn new(geometry: &RayGeometry) -> Self {
        BeamPattern {
            elevation: geometry
                .elevation_angles
                .mapv(|el| directivity(el, geometry.elevation_step)),
            azimuth: geometry
                .azimuth_angles
                .mapv(|az| directivity(az, geometry.azimuth_step)),
        }
    }

    /// Combined aperture gain of elevation ray `k` and in-beam azimuth ray `r`.
    pub fn gain(&self, k: usize, r: usize) -> f64 {
        self.azimuth[r] * self.elevation[k]
    }
}
