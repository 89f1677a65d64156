//! Analytic signal and envelope computation with FFT

pub mod fft;
pub mod analytic;
pub mod envelope;
pub mod interleave;

pub use fft::FftEngine;
pub use analytic::{analytic_signal, compute_hilbert_transform, hilbert_component, HilbertTransformer};
pub use envelope::{compute_signal_envelope, envelope, signal_envelope};
pub use interleave::{deinterleave, interleave};
