//! Sum-preserving rebinning of fine time series into coarse range buckets.

use ndarray::{Array1, Array2, ArrayView1};

/// Bucket receiving sample `index` of an `n_samples` series.
///
/// `floor(index * n_buckets / n_samples)`; integer arithmetic keeps the
/// mapping exact for every length.
pub fn bucket_index(index: usize, n_samples: usize, n_buckets: usize) -> usize {
    index * n_buckets / n_samples
}

/// Sum every sample into its bucket. Buckets are not averaged and may
/// receive unequal sample counts; when `n_samples < n_buckets` trailing
/// buckets stay zero.
pub fn bucketize_sum(series: ArrayView1<'_, f64>, n_buckets: usize) -> Array1<f64> {
    let n = series.len();
    let mut buckets = Array1::zeros(n_buckets);
    if n_buckets == 0 {
        return buckets;
    }
    for (f, &v) in series.iter().enumerate() {
        buckets[bucket_index(f, n, n_buckets)] += v;
    }
    buckets
}

/// Rebin each row of `[n_rows, n_samples]` and return the transposed
/// `[n_buckets, n_rows]` matrix.
pub fn bucketize_rows_transposed(series: &Array2<f64>, n_buckets: usize) -> Array2<f64> {
    let mut out = Array2::zeros((n_buckets, series.nrows()));
    for (b, row) in series.rows().into_iter().enumerate() {
        out.column_mut(b).assign(&bucketize_sum(row, n_buckets));
    }
    out
}
