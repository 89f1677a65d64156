//! Error type shared by the transform, the envelope reducer and the bindings

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HilbertError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("FFT processing failed: {0}")]
    Fft(String),
}

impl HilbertError {
    /// Shorthand for an `InvalidArgument` with a static message
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        HilbertError::InvalidArgument(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, HilbertError>;
