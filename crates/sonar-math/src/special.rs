//! Special functions.

/// Unnormalized sinc: sin(t)/t, exactly 1.0 at t = 0.
pub fn unnormalized_sinc(t: f64) -> f64 {
    if t == 0.0 {
        1.0
    } else {
        t.sin() / t
    }
}
