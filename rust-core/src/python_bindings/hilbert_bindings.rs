//! Python bindings for the Hilbert transform and envelope

use numpy::{PyArray1, PyReadonlyArray1};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::filters;
use crate::spectrum::{self, HilbertTransformer};

fn contiguous<'a>(array: &'a PyReadonlyArray1<f64>) -> PyResult<&'a [f64]> {
    array
        .as_slice()
        .map_err(|e| PyValueError::new_err(e.to_string()))
}

/// Compute the Hilbert transform of a real signal
///
/// Args:
///     signal: Real input as numpy array (None raises ValueError)
///
/// Returns:
///     Interleaved analytic signal [re0, im0, re1, im1, ...]
#[pyfunction]
#[pyo3(signature = (signal))]
pub fn compute_hilbert_transform<'py>(
    py: Python<'py>,
    signal: Option<PyReadonlyArray1<f64>>,
) -> PyResult<&'py PyArray1<f64>> {
    let out = match &signal {
        Some(array) => spectrum::compute_hilbert_transform(Some(contiguous(array)?))?,
        None => spectrum::compute_hilbert_transform(None)?,
    };

    Ok(PyArray1::from_vec(py, out))
}

/// Compute the amplitude envelope of an interleaved analytic signal
///
/// Args:
///     analytic_signal: Interleaved complex samples (even length)
///
/// Returns:
///     Envelope as numpy array
#[pyfunction]
pub fn compute_signal_envelope<'py>(
    py: Python<'py>,
    analytic_signal: PyReadonlyArray1<f64>,
) -> PyResult<&'py PyArray1<f64>> {
    let env = spectrum::compute_signal_envelope(contiguous(&analytic_signal)?)?;
    Ok(PyArray1::from_vec(py, env))
}

/// Interleaved one-sided spectral mask for m bins
#[pyfunction]
pub fn analytic_filter<'py>(py: Python<'py>, m: usize) -> &'py PyArray1<f64> {
    PyArray1::from_vec(py, filters::analytic_filter(m))
}

/// Hilbert transformer planned for a fixed length
#[pyclass(name = "HilbertTransformer")]
pub struct PyHilbertTransformer {
    transformer: HilbertTransformer,
}

#[pymethods]
impl PyHilbertTransformer {
    /// Create a new transformer
    ///
    /// Args:
    ///     length: Number of samples per signal
    #[new]
    fn new(length: usize) -> Self {
        Self {
            transformer: HilbertTransformer::new(length),
        }
    }

    /// Interleaved analytic signal of `signal`
    fn transform<'py>(
        &self,
        py: Python<'py>,
        signal: PyReadonlyArray1<f64>,
    ) -> PyResult<&'py PyArray1<f64>> {
        let out = self.transformer.hilbert_transform(contiguous(&signal)?)?;
        Ok(PyArray1::from_vec(py, out))
    }

    /// Amplitude envelope of `signal`
    fn envelope<'py>(
        &self,
        py: Python<'py>,
        signal: PyReadonlyArray1<f64>,
    ) -> PyResult<&'py PyArray1<f64>> {
        let analytic = self.transformer.analytic_signal(contiguous(&signal)?)?;
        Ok(PyArray1::from_vec(py, spectrum::envelope(&analytic)))
    }

    /// Signal length
    fn __len__(&self) -> usize {
        self.transformer.len()
    }
}
