//! Mathematical primitives for Sonar Echo Core.

pub mod fft;
pub mod rebin;
pub mod special;
