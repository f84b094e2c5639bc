// ─────────────────────────────────────────────────────────────────────
// Sonar Echo Core — Config
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::error::{SonarError, SonarResult};

/// Top-level sonar profile.
/// Maps 1:1 to the JSON files under `configs/`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SonarConfig {
    pub profile_name: String,
    #[serde(default)]
    pub beams: BeamArrayConfig,
    #[serde(default)]
    pub acoustics: AcousticParams,
    /// Upper bound on frequency samples per call; larger grids are rejected.
    #[serde(default = "default_max_freq_samples")]
    pub max_freq_samples: usize,
}

/// Beam layout and ray sampling of the transducer array.
///
/// Every beam shares the same centre angles; the beam index only decides
/// which spectrum a ray is summed into.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BeamArrayConfig {
    pub n_beams: usize,
    /// Beam centre elevation [rad]
    pub elevation_angle: f64,
    /// Beam centre azimuth [rad]
    pub azimuth_angle: f64,
    /// Full elevation width [rad]
    pub elevation_width: f64,
    /// Full azimuth width [rad]
    pub azimuth_width: f64,
    /// Rays per beam along elevation (>= 2)
    pub n_elevation_rays: usize,
    /// Rays per beam along azimuth (>= 2)
    pub n_azimuth_rays: usize,
    /// Output range bins per beam
    #[serde(default = "default_n_buckets")]
    pub n_buckets: usize,
}

/// Physical constants of the medium and the transmit pulse.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AcousticParams {
    /// [m/s]
    pub sound_speed: f64,
    /// Surface reflectivity μ
    pub reflectivity: f64,
    /// [dB/m]
    pub absorption_db_per_m: f64,
    /// [Hz]
    pub center_frequency: f64,
    /// [Hz]
    pub bandwidth: f64,
    /// Peak of the Gaussian transmit spectrum
    #[serde(default = "default_source_level_scale")]
    pub source_level_scale: f64,
}

fn default_max_freq_samples() -> usize {
    MAX_FREQ_SAMPLES
}
fn default_n_buckets() -> usize {
    N_BUCKETS
}
fn default_source_level_scale() -> f64 {
    SOURCE_LEVEL_SCALE
}

impl Default for BeamArrayConfig {
    fn default() -> Self {
        BeamArrayConfig {
            n_beams: N_BEAMS,
            elevation_angle: BEAM_ELEVATION_ANGLE,
            azimuth_angle: BEAM_AZIMUTH_ANGLE,
            elevation_width: BEAM_ELEVATION_WIDTH,
            azimuth_width: BEAM_AZIMUTH_WIDTH,
            n_elevation_rays: N_ELEVATION_RAYS,
            n_azimuth_rays: N_AZIMUTH_RAYS,
            n_buckets: default_n_buckets(),
        }
    }
}

impl Default for AcousticParams {
    fn default() -> Self {
        AcousticParams {
            sound_speed: SOUND_SPEED,
            reflectivity: SURFACE_REFLECTIVITY,
            absorption_db_per_m: ABSORPTION_DB_PER_M,
            center_frequency: CENTER_FREQUENCY,
            bandwidth: BANDWIDTH,
            source_level_scale: default_source_level_scale(),
        }
    }
}

impl Default for SonarConfig {
    fn default() -> Self {
        SonarConfig {
            profile_name: "BlueView-P900-45".to_string(),
            beams: BeamArrayConfig::default(),
            acoustics: AcousticParams::default(),
            max_freq_samples: default_max_freq_samples(),
        }
    }
}

impl BeamArrayConfig {
    /// Number of azimuth ray columns across all beams.
    pub fn total_azimuth_rays(&self) -> usize {
        self.n_azimuth_rays * self.n_beams
    }

    /// Expected `(rows, cols)` of the per-ray input grids.
    pub fn ray_grid_shape(&self) -> (usize, usize) {
        (self.n_elevation_rays, self.total_azimuth_rays())
    }

    /// Beam owning overall azimuth column `i`.
    pub fn beam_of(&self, i: usize) -> usize {
        i / self.n_azimuth_rays
    }

    /// In-beam azimuth ray index of overall azimuth column `i`.
    pub fn ray_in_beam(&self, i: usize) -> usize {
        i % self.n_azimuth_rays
    }

    pub fn validate(&self) -> SonarResult<()> {
        if self.n_beams == 0 {
            return Err(SonarError::ConfigError("n_beams must be >= 1".to_string()));
        }
        if self.n_buckets == 0 {
            return Err(SonarError::ConfigError(
                "n_buckets must be >= 1".to_string(),
            ));
        }
        if self.n_elevation_rays < 2 || self.n_azimuth_rays < 2 {
            return Err(SonarError::ConfigError(format!(
                "ray counts per axis must be >= 2, got elevation={} azimuth={}",
                self.n_elevation_rays, self.n_azimuth_rays
            )));
        }
        for (name, width) in [
            ("elevation_width", self.elevation_width),
            ("azimuth_width", self.azimuth_width),
        ] {
            if !width.is_finite() || width <= 0.0 {
                return Err(SonarError::ConfigError(format!(
                    "{name} must be finite and > 0, got {width}"
                )));
            }
        }
        if !self.elevation_angle.is_finite() || !self.azimuth_angle.is_finite() {
            return Err(SonarError::ConfigError(
                "beam centre angles must be finite".to_string(),
            ));
        }
        Ok(())
    }
}

impl AcousticParams {
    pub fn validate(&self) -> SonarResult<()> {
        let positive = [
            ("sound_speed", self.sound_speed),
            ("center_frequency", self.center_frequency),
            ("bandwidth", self.bandwidth),
            ("source_level_scale", self.source_level_scale),
        ];
        for (name, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(SonarError::ConfigError(format!(
                    "{name} must be finite and > 0, got {value}"
                )));
            }
        }
        let non_negative = [
            ("reflectivity", self.reflectivity),
            ("absorption_db_per_m", self.absorption_db_per_m),
        ];
        for (name, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(SonarError::ConfigError(format!(
                    "{name} must be finite and >= 0, got {value}"
                )));
            }
        }
        Ok(())
    }
}

impl SonarConfig {
    /// Load from JSON file.
    pub fn from_file(path: &str) -> SonarResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&contents)?;
        Ok(config)
    }

    pub fn validate(&self) -> SonarResult<()> {
        self.beams.validate()?;
        self.acoustics.validate()?;
        if self.max_freq_samples == 0 {
            return Err(SonarError::ConfigError(
                "max_freq_samples must be >= 1".to_string(),
            ));
        }
        Ok(())
    }
}
