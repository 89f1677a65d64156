//! FFT engine producing full two-sided spectra of real signals
//!
//! Forward transform uses realfft and mirrors the positive half into the
//! negative frequencies; inverse transform uses rustfft with 1/N scaling.

use num_complex::Complex64;
use realfft::{RealFftPlanner, RealToComplex};
use rustfft::{Fft, FftPlanner};
use std::sync::Arc;

use crate::error::{HilbertError, Result};

/// Planned forward/inverse transforms for a fixed length
#[derive(Clone)]
pub struct FftEngine {
    /// FFT size (number of samples, any N >= 1)
    fft_size: usize,

    /// Real-to-complex forward processor
    r2c: Arc<dyn RealToComplex<f64>>,

    /// Complex inverse processor
    ifft: Arc<dyn Fft<f64>>,
}

impl FftEngine {
    /// Create new FFT engine
    ///
    /// # Arguments
    /// * `fft_size` - FFT size (number of samples, must be non-zero)
    pub fn new(fft_size: usize) -> Self {
        debug_assert!(fft_size > 0, "FFT size must be non-zero");

        let mut real_planner = RealFftPlanner::<f64>::new();
        let r2c = real_planner.plan_fft_forward(fft_size);

        let mut planner = FftPlanner::new();
        let ifft = planner.plan_fft_inverse(fft_size);

        log::debug!("planned forward/inverse FFT of size {}", fft_size);

        Self { fft_size, r2c, ifft }
    }

    /// Full complex spectrum of a real signal (non-normalized)
    ///
    /// # Arguments
    /// * `signal` - Input signal, exactly `fft_size` samples
    ///
    /// # Returns
    /// `fft_size` bins X[0..N), negative frequencies filled by Hermitian symmetry
    pub fn forward_full(&self, signal: &[f64]) -> Result<Vec<Complex64>> {
        self.check_len(signal.len())?;

        let mut input = signal.to_vec();
        let mut half = self.r2c.make_output_vec();
        self.r2c
            .process(&mut input, &mut half)
            .map_err(|e| HilbertError::Fft(e.to_string()))?;

        let n = self.fft_size;
        let mut spectrum = vec![Complex64::new(0.0, 0.0); n];
        spectrum[..half.len()].copy_from_slice(&half);

        // X[N-k] = conj(X[k]) for real input
        for k in half.len()..n {
            spectrum[k] = spectrum[n - k].conj();
        }

        Ok(spectrum)
    }

    /// Inverse transform in place, scaled by 1/N so it undoes `forward_full`
    pub fn inverse_normalized(&self, spectrum: &mut [Complex64]) -> Result<()> {
        self.check_len(spectrum.len())?;

        self.ifft.process(spectrum);

        let scale = 1.0 / self.fft_size as f64;
        for c in spectrum.iter_mut() {
            *c *= scale;
        }

        Ok(())
    }

    /// Get FFT size
    pub fn fft_size(&self) -> usize {
        self.fft_size
    }

    fn check_len(&self, len: usize) -> Result<()> {
        if len != self.fft_size {
            return Err(HilbertError::invalid(format!(
                "buffer length {} does not match FFT size {}",
                len, self.fft_size
            )));
        }
        Ok(())
    }
}

impl std::fmt::Debug for FftEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FftEngine")
            .field("fft_size", &self.fft_size)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    /// Direct O(N^2) DFT for reference
    fn naive_dft(signal: &[f64]) -> Vec<Complex64> {
        let n = signal.len();
        (0..n)
            .map(|k| {
                signal
                    .iter()
                    .enumerate()
                    .map(|(t, &x)| {
                        let angle = -2.0 * PI * (k * t) as f64 / n as f64;
                        Complex64::new(x * angle.cos(), x * angle.sin())
                    })
                    .sum::<Complex64>()
            })
            .collect()
    }

    #[test]
    fn test_forward_matches_dft() {
        for n in [1, 2, 3, 4, 5, 8, 12, 17] {
            let signal: Vec<f64> = (0..n).map(|i| (i as f64 * 0.7).sin() + 0.3 * i as f64).collect();
            let engine = FftEngine::new(n);

            let fast = engine.forward_full(&signal).unwrap();
            let slow = naive_dft(&signal);

            assert_eq!(fast.len(), n);
            for (k, (a, b)) in fast.iter().zip(slow.iter()).enumerate() {
                assert!((a - b).norm() < 1e-9, "n = {}, bin {}: {} vs {}", n, k, a, b);
            }
        }
    }

    #[test]
    fn test_fft_dc_signal() {
        let engine = FftEngine::new(16);
        let spectrum = engine.forward_full(&[1.0; 16]).unwrap();

        // DC bin carries the sum, everything else vanishes
        assert!((spectrum[0].re - 16.0).abs() < 1e-10);
        for c in &spectrum[1..] {
            assert!(c.norm() < 1e-10);
        }
    }

    #[test]
    fn test_round_trip() {
        let n = 30;
        let signal: Vec<f64> = (0..n).map(|i| ((i * i) % 7) as f64 - 3.0).collect();
        let engine = FftEngine::new(n);

        let mut spectrum = engine.forward_full(&signal).unwrap();
        engine.inverse_normalized(&mut spectrum).unwrap();

        for (orig, c) in signal.iter().zip(spectrum.iter()) {
            assert!((orig - c.re).abs() < 1e-9);
            assert!(c.im.abs() < 1e-9);
        }
    }

    #[test]
    fn test_length_mismatch() {
        let engine = FftEngine::new(8);
        assert!(matches!(
            engine.forward_full(&[0.0; 4]),
            Err(HilbertError::InvalidArgument(_))
        ));

        let mut buf = vec![Complex64::new(0.0, 0.0); 3];
        assert!(matches!(
            engine.inverse_normalized(&mut buf),
            Err(HilbertError::InvalidArgument(_))
        ));
    }
}
