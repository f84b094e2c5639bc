//! Row-wise 1D FFT wrappers around rustfft.
//!
//! Convention matches numpy:
//! - Forward FFT (fft_rows): unnormalized
//! - Inverse FFT (ifft_rows_real): normalized by 1/n, real part kept

use ndarray::{Array2, Axis};
use num_complex::Complex64;
use rayon::prelude::*;
use rustfft::FftPlanner;

/// Forward FFT along each row. Matches `numpy.fft.fft(x, axis=1)`.
pub fn fft_rows(input: &Array2<Complex64>) -> Array2<Complex64> {
    let ncols = input.ncols();
    let mut data = input.as_standard_layout().into_owned();
    if ncols == 0 {
        return data;
    }
    let fft = FftPlanner::new().plan_fft_forward(ncols);

    data.axis_iter_mut(Axis(0))
        .into_par_iter()
        .for_each(|mut row| {
            let slice = row.as_slice_mut().expect("row must be contiguous");
            fft.process(slice);
        });
    data
}

/// Inverse FFT along each row, keeping only the real component.
/// Matches `numpy.fft.ifft(x, axis=1).real`.
///
/// The imaginary part is discarded, not folded into a magnitude.
pub fn ifft_rows_real(input: &Array2<Complex64>) -> Array2<f64> {
    let (nrows, ncols) = input.dim();
    if ncols == 0 {
        return Array2::zeros((nrows, 0));
    }
    let ifft = FftPlanner::new().plan_fft_inverse(ncols);
    let norm = 1.0 / ncols as f64;

    let mut data = input.as_standard_layout().into_owned();
    data.axis_iter_mut(Axis(0))
        .into_par_iter()
        .for_each(|mut row| {
            let slice = row.as_slice_mut().expect("row must be contiguous");
            ifft.process(slice);
        });

    data.mapv(|c| c.re * norm)
}
