//! Python FFI bindings via PyO3.
//!
//! Exposes the wash-time controller to Python with the standard rule table.
//! For custom rule bases or shapes, use the Rust API directly.
//!
//! # Building the Python extension
//!
//! ```bash
//! pip install maturin
//! maturin develop --features python-ffi
//! ```
//!
//! # Usage
//!
//! ```python
//! from fuzzy_wash import WashController, wash_time
//!
//! print(wash_time(30.0, 10.0))          # ≈ 16.98
//!
//! controller = WashController(samples=1000, corrected_shapes=False)
//! print(controller.compute(80.0, 40.0))  # ≈ 47.65
//! print(controller.activations(80.0, 40.0))
//! # [('VST', 0.0), ('ST', 0.0), ('MT', 0.0), ('HT', 0.4), ('VHT', 0.6)]
//! ```

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::controller::{ControllerConfig, WashController};
use crate::error::FuzzyError;
use crate::terms::ShapeProfile;
use crate::vocabulary::{Degrees, LinguisticTerm};

fn to_py_err(err: FuzzyError) -> PyErr {
    PyValueError::new_err(err.to_string())
}

fn labelled<T: LinguisticTerm<N>, const N: usize>(degrees: &Degrees<T, N>) -> Vec<(&'static str, f64)> {
    degrees.iter().map(|(t, d)| (t.label(), d)).collect()
}

// ── WashController ───────────────────────────────────────────────────────────

/// Fuzzy wash-time controller.
///
/// Args:
///     samples:          defuzzifier sample count (default 1000, must be > 0)
///     corrected_shapes: use (75, 100, 100) for very-high dirt instead of the
///                       reference (751, 100, 100)
#[pyclass(name = "WashController", frozen)]
pub struct PyWashController {
    inner: WashController,
    config: ControllerConfig,
}

#[pymethods]
impl PyWashController {
    /// Create a controller.
    #[new]
    #[pyo3(signature = (samples=1000, corrected_shapes=false))]
    pub fn new(samples: usize, corrected_shapes: bool) -> PyResult<Self> {
        let config = ControllerConfig {
            samples,
            profile: if corrected_shapes { ShapeProfile::Corrected } else { ShapeProfile::Reference },
        };
        let inner = WashController::with_config(config).map_err(to_py_err)?;
        Ok(Self { inner, config })
    }

    /// Recommended wash time in minutes. Returns 0.0 when no rule fires.
    pub fn compute(&self, dirt: f64, grease: f64) -> f64 {
        self.inner.compute(dirt, grease)
    }

    /// Aggregated output activations as a list of (label, level).
    pub fn activations(&self, dirt: f64, grease: f64) -> Vec<(&'static str, f64)> {
        labelled(&self.inner.evaluate(dirt, grease).activations)
    }

    /// Dirt membership degrees as a list of (label, degree).
    pub fn dirt_degrees(&self, dirt: f64) -> Vec<(&'static str, f64)> {
        labelled(&self.inner.dirt_variable().fuzzify(dirt))
    }

    /// Grease membership degrees as a list of (label, degree).
    pub fn grease_degrees(&self, grease: f64) -> Vec<(&'static str, f64)> {
        labelled(&self.inner.grease_variable().fuzzify(grease))
    }

    /// Python repr string.
    pub fn __repr__(&self) -> String {
        format!(
            "WashController(samples={}, corrected_shapes={})",
            self.config.samples,
            if self.config.profile == ShapeProfile::Corrected { "True" } else { "False" },
        )
    }
}

// ── Free function ────────────────────────────────────────────────────────────

/// Wash time for (dirt, grease) with the default controller.
#[pyfunction]
pub fn wash_time(dirt: f64, grease: f64) -> f64 {
    crate::wash_time(dirt, grease)
}

// ── Module entry point ───────────────────────────────────────────────────────

/// Fuzzy wash-time controller Python bindings.
#[pymodule]
pub fn fuzzy_wash(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyWashController>()?;
    m.add_function(wrap_pyfunction!(wash_time, m)?)?;
    m.add("__version__", env!("CARGO_PKG_VERSION"))?;
    m.add("DEFAULT_SAMPLES", crate::defuzzify::DEFAULT_SAMPLES)?;
    Ok(())
}
