//! Spectral masks applied in the frequency domain

pub mod analytic;

pub use analytic::{analytic_filter, bin_weights};
