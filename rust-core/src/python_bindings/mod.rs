//! PyO3 bindings for Python integration

use pyo3::exceptions::{PyRuntimeError, PyValueError};
use pyo3::prelude::*;

use crate::error::HilbertError;

mod hilbert_bindings;

impl From<HilbertError> for PyErr {
    fn from(err: HilbertError) -> Self {
        match err {
            HilbertError::InvalidArgument(_) => PyValueError::new_err(err.to_string()),
            HilbertError::Fft(_) => PyRuntimeError::new_err(err.to_string()),
        }
    }
}

/// Python module definition
#[pymodule]
fn hilbert_envelope(_py: Python, m: &PyModule) -> PyResult<()> {
    m.add_class::<hilbert_bindings::PyHilbertTransformer>()?;

    m.add_function(wrap_pyfunction!(hilbert_bindings::compute_hilbert_transform, m)?)?;
    m.add_function(wrap_pyfunction!(hilbert_bindings::compute_signal_envelope, m)?)?;
    m.add_function(wrap_pyfunction!(hilbert_bindings::analytic_filter, m)?)?;

    Ok(())
}
