//! Frequency-domain echo accumulation per beam.
//!
//!   P_b(f_m) = Σ_rays∈b  S(f_m) · a · exp(−i K(f_m) · 2r) / r²
//!
//! 1/r² is the two-way spreading loss, 2r the round-trip path. Each beam
//! owns one row of the output, so rows are filled in parallel without
//! sharing; within a row rays are summed in a fixed order.

use ndarray::{Array2, ArrayView2, Axis};
use num_complex::Complex64;
use rayon::prelude::*;
use sonar_types::config::BeamArrayConfig;

use crate::spectrum::FrequencySpectrum;

/// Sum every ray's contribution into a fresh [n_beams, n_freq] spectrum.
pub fn accumulate_beam_spectra(
    beams: &BeamArrayConfig,
    spectrum: &FrequencySpectrum,
    ranges: &ArrayView2<'_, f64>,
    amplitudes: &Array2<Complex64>,
) -> Array2<Complex64> {
    let mut out = Array2::zeros((beams.n_beams, spectrum.n_freq));
    let n_az = beams.n_azimuth_rays;
    let n_el = beams.n_elevation_rays;

    out.axis_iter_mut(Axis(0))
        .into_par_iter()
        .enumerate()
        .for_each(|(b, mut row)| {
            for k in 0..n_el {
                for r in 0..n_az {
                    let i = b * n_az + r;
                    let range = ranges[[k, i]];
                    let scaled = amplitudes[[k, i]] / (range * range);
                    add_ray(&mut row, spectrum, scaled, range);
                }
            }
        });

    out
}

fn add_ray(
    row: &mut ndarray::ArrayViewMut1<'_, Complex64>,
    spectrum: &FrequencySpectrum,
    scaled_amplitude: Complex64,
    range: f64,
) {
    let path = 2.0 * range;
    for ((p, &s), &k) in row
        .iter_mut()
        .zip(spectrum.transmit.iter())
        .zip(spectrum.propagation.iter())
    {
        *p += scaled_amplitude * s * (-Complex64::i() * k * path).exp();
    }
}
