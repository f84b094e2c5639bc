//! Incidence angle between a ray and the surface it strikes.
//!
//! Sensor frame: x forward, y left, z up. The ray caster reports normals in
//! its own camera frame, remapped here as
//!   sensor x ←  target z,  sensor y ← −target x,  sensor z ← −target y.

use std::f64::consts::PI;

/// Incidence angle of one ray.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Incidence {
    /// π − arccos(direction · normal) [rad]
    pub angle: f64,
    /// The dot product fell outside [-1, 1] and was clamped.
    pub clamped: bool,
}

/// Unit ray direction for an azimuth/elevation pair (azimuth sign inverted).
pub fn ray_direction(azimuth: f64, elevation: f64) -> [f64; 3] {
    [
        (-azimuth).cos() * elevation.cos(),
        (-azimuth).sin() * elevation.cos(),
        elevation.sin(),
    ]
}

/// Target-frame normal expressed in the sensor frame.
pub fn sensor_frame_normal(normal: [f64; 3]) -> [f64; 3] {
    [normal[2], -normal[0], -normal[1]]
}

/// Incidence of a ray at `(azimuth, elevation)` on a surface with
/// target-frame `normal`.
///
/// Non-unit normals can push the dot product out of the arccos domain;
/// it is clamped and flagged instead of producing NaN.
pub fn ray_incidence(azimuth: f64, elevation: f64, normal: [f64; 3]) -> Incidence {
    let d = ray_direction(azimuth, elevation);
    let n = sensor_frame_normal(normal);
    let dot = d[0] * n[0] + d[1] * n[1] + d[2] * n[2];

    let clamped = !(-1.0..=1.0).contains(&dot);
    Incidence {
        angle: PI - dot.clamp(-1.0, 1.0).acos(),
        clamped,
    }
}
