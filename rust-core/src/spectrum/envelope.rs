//! Amplitude envelope of an analytic signal

use num_complex::Complex64;

use super::analytic::analytic_signal;
use super::interleave::deinterleave;
use crate::error::Result;

/// Instantaneous magnitude |z[n]| of each analytic-signal sample
pub fn envelope(analytic: &[Complex64]) -> Vec<f64> {
    analytic.iter().map(|c| c.norm()).collect()
}

/// Envelope of an interleaved analytic signal
///
/// # Arguments
/// * `analytic_signal` - Interleaved complex samples (length `2n`)
///
/// # Returns
/// `n` non-negative magnitudes
///
/// # Errors
/// `InvalidArgument` if the buffer has odd length
pub fn compute_signal_envelope(analytic_signal: &[f64]) -> Result<Vec<f64>> {
    let paired = deinterleave(analytic_signal)?;
    Ok(envelope(&paired))
}

/// Envelope straight from a real signal (transform then reduce)
pub fn signal_envelope(signal: &[f64]) -> Result<Vec<f64>> {
    Ok(envelope(&analytic_signal(signal)?))
}
