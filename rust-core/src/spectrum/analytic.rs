//! Analytic signal via FFT
//!
//! Forward FFT of the real input, one-sided spectral mask, normalized
//! inverse FFT. The real part of the result reproduces the input and the
//! imaginary part is its Hilbert transform.

use num_complex::Complex64;

use super::fft::FftEngine;
use super::interleave::interleave;
use crate::error::{HilbertError, Result};
use crate::filters::analytic::bin_weights;

/// Hilbert transformer planned for a fixed signal length
///
/// Immutable after construction; every call allocates its own working
/// buffers, so one transformer can serve many threads.
#[derive(Debug, Clone)]
pub struct HilbertTransformer {
    len: usize,

    /// `None` for the zero-length transformer
    engine: Option<FftEngine>,

    /// One weight per frequency bin
    weights: Vec<f64>,
}

impl HilbertTransformer {
    /// Create a transformer for signals of `len` samples
    pub fn new(len: usize) -> Self {
        let engine = (len > 0).then(|| FftEngine::new(len));

        Self {
            len,
            engine,
            weights: bin_weights(len),
        }
    }

    /// Signal length this transformer was planned for
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Analytic signal of `signal`
    ///
    /// # Arguments
    /// * `signal` - Real input, exactly `len()` samples
    ///
    /// # Returns
    /// `len()` complex samples
    ///
    /// # Errors
    /// `InvalidArgument` if `signal.len() != len()`
    pub fn analytic_signal(&self, signal: &[f64]) -> Result<Vec<Complex64>> {
        if signal.len() != self.len {
            return Err(HilbertError::invalid(format!(
                "signal has {} samples, transformer expects {}",
                signal.len(),
                self.len
            )));
        }

        let engine = match &self.engine {
            Some(engine) => engine,
            None => return Ok(Vec::new()),
        };

        log::trace!("hilbert transform of {} samples", self.len);

        let mut spectrum = engine.forward_full(signal)?;

        for (bin, &w) in spectrum.iter_mut().zip(self.weights.iter()) {
            *bin *= w;
        }

        engine.inverse_normalized(&mut spectrum)?;

        Ok(spectrum)
    }

    /// Analytic signal in the interleaved layout (`2 * len()` values)
    pub fn hilbert_transform(&self, signal: &[f64]) -> Result<Vec<f64>> {
        Ok(interleave(&self.analytic_signal(signal)?))
    }
}

/// Analytic signal of a real sequence
///
/// Returns an empty vector for an empty signal.
pub fn analytic_signal(signal: &[f64]) -> Result<Vec<Complex64>> {
    HilbertTransformer::new(signal.len()).analytic_signal(signal)
}

/// Hilbert transform in the interleaved layout
///
/// `a[2k]` holds Re z[k] and `a[2k + 1]` holds Im z[k] for `0 <= k < n`.
///
/// # Errors
/// `InvalidArgument` if `signal` is `None`; nothing is computed in that case
pub fn compute_hilbert_transform(signal: Option<&[f64]>) -> Result<Vec<f64>> {
    let signal = signal.ok_or_else(|| HilbertError::invalid("input signal must not be null"))?;
    HilbertTransformer::new(signal.len()).hilbert_transform(signal)
}

/// Quadrature component: the imaginary part of the analytic signal
pub fn hilbert_component(signal: &[f64]) -> Result<Vec<f64>> {
    Ok(analytic_signal(signal)?.iter().map(|c| c.im).collect())
}
