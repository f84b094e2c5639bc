// ─────────────────────────────────────────────────────────────────────
// Sonar Echo Core — Ray Geometry
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Per-ray sampling angles inside one beam.
//!
//! Rays are spread evenly across the beam footprint, endpoints inclusive:
//!   el_k = el_c + linspace(-w_el/2, w_el/2, n_el)
//!   az_r = az_c + linspace(-w_az/2, w_az/2, n_az)
//! with angular steps w/(n-1).

use ndarray::Array1;
use sonar_types::config::BeamArrayConfig;
use sonar_types::error::{SonarError, SonarResult};

/// Ray angles shared by every beam of the array.
#[derive(Debug, Clone)]
pub struct RayGeometry {
    /// Elevation angle per elevation ray [rad]
    pub elevation_angles: Array1<f64>,
    /// Azimuth angle per in-beam azimuth ray [rad]
    pub azimuth_angles: Array1<f64>,
    /// Angular spacing between elevation rays [rad]
    pub elevation_step: f64,
    /// Angular spacing between azimuth rays [rad]
    pub azimuth_step: f64,
}

impl RayGeometry {
    pub fn new(beams: &BeamArrayConfig) -> SonarResult<Self> {
        let elevation_angles = spread(
            "elevation",
            beams.elevation_angle,
            beams.elevation_width,
            beams.n_elevation_rays,
        )?;
        let azimuth_angles = spread(
            "azimuth",
            beams.azimuth_angle,
            beams.azimuth_width,
            beams.n_azimuth_rays,
        )?;

        Ok(RayGeometry {
            elevation_angles,
            azimuth_angles,
            elevation_step: beams.elevation_width / (beams.n_elevation_rays - 1) as f64,
            azimuth_step: beams.azimuth_width / (beams.n_azimuth_rays - 1) as f64,
        })
    }

    pub fn n_elevation_rays(&self) -> usize {
        self.elevation_angles.len()
    }

    pub fn n_azimuth_rays(&self) -> usize {
        self.azimuth_angles.len()
    }
}

fn spread(axis: &str, center: f64, width: f64, count: usize) -> SonarResult<Array1<f64>> {
    if count < 2 {
        return Err(SonarError::ConfigError(format!(
            "{axis} ray count must be >= 2, got {count}"
        )));
    }
    Ok(Array1::linspace(center - width / 2.0, center + width / 2.0, count))
}
