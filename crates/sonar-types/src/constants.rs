// ─────────────────────────────────────────────────────────────────────
// Sonar Echo Core — Constants
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Default profile: BlueView P900-45 imaging sonar in sea water.

/// Speed of sound in water (m/s).
pub const SOUND_SPEED: f64 = 1500.0;

/// Surface reflectivity μ (dimensionless).
pub const SURFACE_REFLECTIVITY: f64 = 1e-3;

/// Absorption coefficient (dB/m).
pub const ABSORPTION_DB_PER_M: f64 = 0.0354;

/// Centre frequency (Hz).
pub const CENTER_FREQUENCY: f64 = 900e3;

/// Transmit bandwidth (Hz).
pub const BANDWIDTH: f64 = 29.5e4;

/// Amplitude scale of the Gaussian transmit spectrum.
pub const SOURCE_LEVEL_SCALE: f64 = 1e11;

/// Half-power aperture factor of a uniform line array (sinc² pattern).
pub const APERTURE_HALF_POWER_FACTOR: f64 = 0.884;

pub const N_BEAMS: usize = 16;
pub const N_ELEVATION_RAYS: usize = 4;
pub const N_AZIMUTH_RAYS: usize = 3;
pub const N_BUCKETS: usize = 300;

/// Beam centre elevation (rad), looking slightly down.
pub const BEAM_ELEVATION_ANGLE: f64 = 0.0175;

/// Beam centre azimuth (rad).
pub const BEAM_AZIMUTH_ANGLE: f64 = 0.0;

/// Beam angular widths (rad).
pub const BEAM_ELEVATION_WIDTH: f64 = 0.1;
pub const BEAM_AZIMUTH_WIDTH: f64 = 0.1;

/// Upper bound on the number of frequency samples per call.
pub const MAX_FREQ_SAMPLES: usize = 1 << 22;
