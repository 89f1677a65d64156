//! Conversion between paired complex values and the flat interleaved layout
//!
//! Element `k` lives at `re = flat[2k]`, `im = flat[2k + 1]`.

use num_complex::Complex64;

use crate::error::{HilbertError, Result};

/// Flatten complex samples into `[re0, im0, re1, im1, ...]`
pub fn interleave(samples: &[Complex64]) -> Vec<f64> {
    samples.iter().flat_map(|c| [c.re, c.im]).collect()
}

/// Pair up an interleaved buffer into complex samples
///
/// # Errors
/// `InvalidArgument` if `flat` has odd length
pub fn deinterleave(flat: &[f64]) -> Result<Vec<Complex64>> {
    if flat.len() % 2 != 0 {
        return Err(HilbertError::invalid(format!(
            "interleaved complex buffer must have even length, got {}",
            flat.len()
        )));
    }

    Ok(flat
        .chunks_exact(2)
        .map(|pair| Complex64::new(pair[0], pair[1]))
        .collect())
}
