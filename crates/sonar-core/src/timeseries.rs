//! Beam spectra → range-domain power series → range buckets.

use ndarray::Array2;
use num_complex::Complex64;
use sonar_math::fft::ifft_rows_real;
use sonar_math::rebin::bucketize_rows_transposed;

/// Inverse-transform each beam spectrum [n_beams, n_freq] into its
/// real time series [n_beams, n_freq].
///
/// Only the real component is kept; the imaginary part is dropped rather
/// than combined into a magnitude.
pub fn beam_time_series(spectra: &Array2<Complex64>) -> Array2<f64> {
    ifft_rows_real(spectra)
}

/// Sum-rebin each beam's series into `n_buckets` and return the
/// [n_buckets, n_beams] power matrix.
pub fn bucketize_beams(series: &Array2<f64>, n_buckets: usize) -> Array2<f64> {
    bucketize_rows_transposed(series, n_buckets)
}

/// Sound pressure level 20·log10(|p|) [dB re 1 unit] per sample.
/// Zero samples map to −∞.
pub fn sound_pressure_level(series: &Array2<f64>) -> Array2<f64> {
    series.mapv(|p| 20.0 * p.abs().log10())
}
