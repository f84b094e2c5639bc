// ─────────────────────────────────────────────────────────────────────
// Sonar Echo Core — End-to-end echo scenarios
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Whole-pipeline scenarios: determinism, degenerate input, echo timing,
//! sum preservation and over-binning.

use ndarray::{Array2, Array3};
use rand::rngs::StdRng;
use rand::SeedableRng;
use sonar_core::EchoSimulator;
use sonar_math::rebin::bucket_index;
use sonar_types::config::SonarConfig;
use sonar_types::error::SonarError;
use sonar_types::state::{EchoDiagnostics, EchoResponse, RaySamples};
use std::f64::consts::FRAC_PI_2;

/// Target −z maps onto the sensor's −x axis: surface faces the transducer.
const FACING: [f64; 3] = [0.0, 0.0, -1.0];

fn run(
    sim: &EchoSimulator,
    rays: &RaySamples,
    seed: u64,
) -> (EchoResponse, EchoDiagnostics) {
    let (resp, diag) = sim
        .process_rays_with_diagnostics(
            rays.ranges(),
            rays.normals(),
            &mut StdRng::seed_from_u64(seed),
        )
        .unwrap();
    (resp, diag.expect("valid input yields diagnostics"))
}

fn argmax_abs<'a>(values: impl Iterator<Item = &'a f64>) -> usize {
    values
        .enumerate()
        .fold((0, f64::NEG_INFINITY), |(bi, bv), (i, &v)| {
            if v.abs() > bv {
                (i, v.abs())
            } else {
                (bi, bv)
            }
        })
        .0
}

/// Sample index of an echo with round-trip delay `tau` on the circular time
/// axis of the inverse transform.
fn expected_sample(sim: &EchoSimulator, n_freq: usize, tau: f64) -> f64 {
    let df = 4.0 * sim.config().acoustics.bandwidth / (n_freq - 1) as f64;
    (n_freq as f64 * df * tau).rem_euclid(n_freq as f64)
}

fn circular_distance(a: f64, b: f64, n: usize) -> f64 {
    let d = (a - b).abs() % n as f64;
    d.min(n as f64 - d)
}

// ── Determinism ──────────────────────────────────────────────────────

#[test]
fn same_seed_same_output() {
    let sim = EchoSimulator::new(SonarConfig::default()).unwrap();
    let rays = RaySamples::range_ramp(&sim.config().beams, 0.5, 6.0, FACING);
    let (a, _) = run(&sim, &rays, 2026);
    let (b, _) = run(&sim, &rays, 2026);
    assert_eq!(a.power, b.power);
    assert_eq!(a.incidences, b.incidences);
}

#[test]
fn different_seed_different_power() {
    let sim = EchoSimulator::new(SonarConfig::default()).unwrap();
    let rays = RaySamples::range_ramp(&sim.config().beams, 0.5, 6.0, FACING);
    let (a, _) = run(&sim, &rays, 1);
    let (b, _) = run(&sim, &rays, 2);
    assert_ne!(a.power, b.power);
    // geometry is not random
    assert_eq!(a.incidences, b.incidences);
}

// ── Input handling ───────────────────────────────────────────────────

#[test]
fn wrong_shape_gives_zero_matrix() {
    let sim = EchoSimulator::new(SonarConfig::default()).unwrap();
    let ranges = Array2::from_elem((4, 45), 2.0);
    let normals = Array3::from_elem((4, 45, 4), 0.5);
    let resp = sim
        .process_rays(ranges.view(), normals.view(), &mut StdRng::seed_from_u64(0))
        .unwrap();
    assert_eq!(resp.power.dim(), (300, 16));
    assert!(resp.power.iter().all(|&v| v == 0.0));
}

#[test]
fn all_zero_ranges_fail() {
    let sim = EchoSimulator::new(SonarConfig::default()).unwrap();
    let rays = RaySamples::uniform(&sim.config().beams, 0.0, FACING);
    let err = sim
        .process_rays(rays.ranges(), rays.normals(), &mut StdRng::seed_from_u64(0))
        .unwrap_err();
    assert!(matches!(err, SonarError::DegenerateInput(_)));
}

#[test]
fn infinite_range_fails() {
    let sim = EchoSimulator::new(SonarConfig::default()).unwrap();
    let rays = RaySamples::uniform(&sim.config().beams, f64::INFINITY, FACING);
    let err = sim
        .process_rays(rays.ranges(), rays.normals(), &mut StdRng::seed_from_u64(0))
        .unwrap_err();
    assert!(matches!(err, SonarError::DegenerateInput(_)));
}

#[test]
fn oversized_grid_fails() {
    let mut config = SonarConfig::default();
    config.max_freq_samples = 2048;
    let sim = EchoSimulator::new(config).unwrap();
    let rays = RaySamples::uniform(&sim.config().beams, 3.0, FACING);
    assert!(matches!(
        sim.process_rays(rays.ranges(), rays.normals(), &mut StdRng::seed_from_u64(0)),
        Err(SonarError::DegenerateInput(_))
    ));
}

// ── Geometry ─────────────────────────────────────────────────────────

#[test]
fn boresight_ray_on_side_facing_normal() {
    // normal (1, 0, 0) lies along sensor −y, perpendicular to every ray
    // on the centre azimuth line.
    let sim = EchoSimulator::new(SonarConfig::default()).unwrap();
    let rays = RaySamples::uniform(&sim.config().beams, 2.0, [1.0, 0.0, 0.0]);
    let (resp, _) = run(&sim, &rays, 5);
    for k in 0..4 {
        for b in 0..16 {
            let centre = b * 3 + 1;
            assert!((resp.incidences[[k, centre]] - FRAC_PI_2).abs() < 1e-15);
        }
    }
}

#[test]
fn uniform_range_incidence_repeats_per_beam() {
    let sim = EchoSimulator::new(SonarConfig::default()).unwrap();
    let rays = RaySamples::uniform(&sim.config().beams, 3.0, FACING);
    let (resp, _) = run(&sim, &rays, 11);
    for k in 0..4 {
        for i in 0..48 {
            assert_eq!(resp.incidences[[k, i]], resp.incidences[[k, i % 3]]);
        }
    }
    // facing surface: incidence is the off-boresight angle of the ray
    assert!(resp.incidences.iter().all(|&v| (0.0..0.1).contains(&v)));
}

// ── Echo timing ──────────────────────────────────────────────────────

#[test]
fn uniform_range_echo_at_round_trip_delay() {
    let sim = EchoSimulator::new(SonarConfig::default()).unwrap();
    let d = 3.0;
    let rays = RaySamples::uniform(&sim.config().beams, d, FACING);
    let (resp, diag) = run(&sim, &rays, 17);
    assert_eq!(diag.n_freq, 4720);

    // Farthest ray sets the window: its echo wraps to the start of the axis.
    let tau = 2.0 * d / sim.config().acoustics.sound_speed;
    let n0 = expected_sample(&sim, diag.n_freq, tau);
    for b in 0..16 {
        let peak = argmax_abs(diag.beam_series.row(b).iter());
        assert!(
            circular_distance(peak as f64, n0, diag.n_freq) <= 1.0,
            "beam {b}: peak sample {peak}, expected {n0}"
        );
        let bucket = argmax_abs(resp.power.column(b).iter());
        assert!(
            bucket == 0 || bucket == 299,
            "beam {b}: dominant bucket {bucket}"
        );
    }
}

#[test]
fn near_target_echo_lands_in_expected_bucket() {
    let sim = EchoSimulator::new(SonarConfig::default()).unwrap();
    let near = 2.0;
    let mut rays = RaySamples::uniform(&sim.config().beams, near, FACING);
    // one far ray in the last beam stretches the time window to 4 m
    rays.ranges[[0, 47]] = 4.0;
    let (resp, diag) = run(&sim, &rays, 23);
    assert_eq!(diag.n_freq, 6293);

    let tau = 2.0 * near / sim.config().acoustics.sound_speed;
    let n0 = expected_sample(&sim, diag.n_freq, tau);
    let expected_bucket = bucket_index(n0.round() as usize, diag.n_freq, 300);
    assert_eq!(expected_bucket, 150);

    for b in 0..15 {
        let peak = argmax_abs(diag.beam_series.row(b).iter());
        assert!(
            (peak as f64 - n0).abs() <= 1.0,
            "beam {b}: peak sample {peak}, expected {n0}"
        );
        let bucket = argmax_abs(resp.power.column(b).iter());
        assert!(
            (bucket as i64 - expected_bucket as i64).abs() <= 1,
            "beam {b}: dominant bucket {bucket}, expected {expected_bucket}"
        );
    }
}

#[test]
fn time_axis_spans_round_trip() {
    let sim = EchoSimulator::new(SonarConfig::default()).unwrap();
    let rays = RaySamples::range_ramp(&sim.config().beams, 0.5, 6.0, FACING);
    let (_, diag) = run(&sim, &rays, 0);
    assert_eq!(diag.n_freq, 9440);
    assert_eq!(diag.times.len(), 9440);
    assert_eq!(diag.times[0], 0.0);
    assert!((diag.times[9439] - diag.max_round_trip).abs() < 1e-15);
    assert!((diag.max_round_trip - 0.008).abs() < 1e-15);
}

// ── Rebinning ────────────────────────────────────────────────────────

#[test]
fn buckets_preserve_beam_sum() {
    let sim = EchoSimulator::new(SonarConfig::default()).unwrap();
    let rays = RaySamples::range_ramp(&sim.config().beams, 0.5, 6.0, FACING);
    let (resp, diag) = run(&sim, &rays, 99);
    for b in 0..16 {
        let series = diag.beam_series.row(b);
        let total: f64 = series.sum();
        let scale: f64 = series.iter().map(|v| v.abs()).sum();
        let binned: f64 = resp.power.column(b).sum();
        assert!(
            (total - binned).abs() <= 1e-9 * scale.max(f64::MIN_POSITIVE),
            "beam {b}: {total} vs {binned}"
        );
    }
}

#[test]
fn over_binning_leaves_tail_zero() {
    let mut config = SonarConfig::default();
    config.beams.n_buckets = 10_000;
    let sim = EchoSimulator::new(config).unwrap();
    let rays = RaySamples::uniform(&sim.config().beams, 3.0, FACING);
    let (resp, diag) = run(&sim, &rays, 4);
    assert_eq!(diag.n_freq, 4720);
    assert_eq!(resp.power.dim(), (10_000, 16));

    let last = bucket_index(diag.n_freq - 1, diag.n_freq, 10_000);
    for b in 0..16 {
        for bucket in (last + 1)..10_000 {
            assert_eq!(resp.power[[bucket, b]], 0.0);
        }
        // one sample per populated bucket, copied verbatim
        for f in 0..diag.n_freq {
            let bucket = bucket_index(f, diag.n_freq, 10_000);
            assert_eq!(resp.power[[bucket, b]], diag.beam_series[[b, f]]);
        }
    }
}
