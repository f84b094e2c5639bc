// ─────────────────────────────────────────────────────────────────────
// Sonar Echo Core — State
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use ndarray::{Array1, Array2, Array3, ArrayView2, ArrayView3};

use crate::config::BeamArrayConfig;
use crate::error::{SonarError, SonarResult};

/// Per-ray geometry handed over by the ray caster.
///
/// `ranges` is [n_elevation_rays, n_azimuth_rays * n_beams] in metres,
/// `normals` is the same grid with >= 3 trailing components (x, y, z, ...)
/// in the target frame. Components past the third are ignored.
#[derive(Debug, Clone)]
pub struct RaySamples {
    pub ranges: Array2<f64>,
    pub normals: Array3<f64>,
}

impl RaySamples {
    pub fn new(ranges: Array2<f64>, normals: Array3<f64>) -> Self {
        RaySamples { ranges, normals }
    }

    /// Every ray at the same range, every surface with the same normal.
    pub fn uniform(beams: &BeamArrayConfig, range: f64, normal: [f64; 3]) -> Self {
        let (rows, cols) = beams.ray_grid_shape();
        let ranges = Array2::from_elem((rows, cols), range);
        let normals = Array3::from_shape_fn((rows, cols, 3), |(_, _, c)| normal[c]);
        RaySamples { ranges, normals }
    }

    /// Ranges increasing linearly across the azimuth columns, identical per row.
    pub fn range_ramp(beams: &BeamArrayConfig, near: f64, far: f64, normal: [f64; 3]) -> Self {
        let (rows, cols) = beams.ray_grid_shape();
        let ramp = Array1::linspace(near, far, cols);
        let ranges = Array2::from_shape_fn((rows, cols), |(_, i)| ramp[i]);
        let normals = Array3::from_shape_fn((rows, cols, 3), |(_, _, c)| normal[c]);
        RaySamples { ranges, normals }
    }

    pub fn ranges(&self) -> ArrayView2<'_, f64> {
        self.ranges.view()
    }

    pub fn normals(&self) -> ArrayView3<'_, f64> {
        self.normals.view()
    }
}

/// Check both input grids against the configured beam/ray layout.
pub fn check_ray_shapes(
    beams: &BeamArrayConfig,
    ranges: &ArrayView2<'_, f64>,
    normals: &ArrayView3<'_, f64>,
) -> SonarResult<()> {
    let (rows, cols) = beams.ray_grid_shape();
    if ranges.dim() != (rows, cols) {
        return Err(SonarError::ShapeMismatch {
            expected: vec![rows, cols],
            found: ranges.shape().to_vec(),
        });
    }
    let (n_rows, n_cols, n_comp) = normals.dim();
    if n_rows != rows || n_cols != cols || n_comp < 3 {
        return Err(SonarError::ShapeMismatch {
            expected: vec![rows, cols, 3],
            found: normals.shape().to_vec(),
        });
    }
    Ok(())
}

/// Result of one echo synthesis call.
#[derive(Debug, Clone)]
pub struct EchoResponse {
    /// Received power per range bucket and beam [n_buckets, n_beams].
    pub power: Array2<f64>,
    /// Incidence angle per ray [rad], same grid as the input ranges.
    pub incidences: Array2<f64>,
    /// Rays whose direction·normal product had to be clamped into [-1, 1].
    pub clamped_incidences: usize,
}

impl EchoResponse {
    /// All-zero response with the configured output shapes.
    pub fn zeros(beams: &BeamArrayConfig) -> Self {
        EchoResponse {
            power: Array2::zeros((beams.n_buckets, beams.n_beams)),
            incidences: Array2::zeros(beams.ray_grid_shape()),
            clamped_incidences: 0,
        }
    }

    pub fn n_beams(&self) -> usize {
        self.power.ncols()
    }

    pub fn n_buckets(&self) -> usize {
        self.power.nrows()
    }
}

/// Intermediate data for plotting adapters.
#[derive(Debug, Clone)]
pub struct EchoDiagnostics {
    /// Number of frequency (and time) samples.
    pub n_freq: usize,
    /// Two-way travel time to the farthest ray [s].
    pub max_round_trip: f64,
    /// Echo time axis, linspace(0, max_round_trip, n_freq) [s].
    pub times: Array1<f64>,
    /// Unbucketed real time series [n_beams, n_freq].
    pub beam_series: Array2<f64>,
}
