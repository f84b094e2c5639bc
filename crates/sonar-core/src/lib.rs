//! Multi-beam sonar echo synthesis.
//!
//! Point-scatter model: per-ray random amplitudes summed coherently in the
//! frequency domain, inverse-transformed per beam, rebinned into range
//! buckets.

pub mod beam_pattern;
pub mod echo;
pub mod geometry;
pub mod incidence;
pub mod scatter;
pub mod simulator;
pub mod spectrum;
pub mod timeseries;

pub use simulator::EchoSimulator;
