//! Hilbert Envelope - FFT-based Hilbert transform
//! 
//! Builds the analytic signal of a real sequence in the frequency domain
//! and reduces it to the instantaneous amplitude envelope.

// Suppress PyO3 non-local impl warnings (harmless macro-generated code)
#![cfg_attr(feature = "python", allow(non_local_definitions))]

pub mod error;
pub mod filters;
pub mod spectrum;
#[cfg(feature = "python")]
pub mod python_bindings;

pub use error::HilbertError;
pub use filters::analytic_filter;
pub use spectrum::{
    analytic_signal, compute_hilbert_transform, compute_signal_envelope, envelope,
    signal_envelope, HilbertTransformer,
};
