//! PyO3 wrapper for DrawEngine
//!
//! This module provides the Python interface to the Rust draw engine.

use pyo3::prelude::*;

use crate::engine::DrawEngine as RustDrawEngine;

/// Python wrapper for the Rust draw engine
///
/// The Python evolution loop holds exactly one of these per trial, seeds it
/// (or restores a checkpoint state) before any draws, and embeds
/// `get_state()` in its checkpoint files.
///
/// # Example (from Python)
///
/// ```python
/// from evolution_rng_core_rs import DrawEngine
///
/// engine = DrawEngine(seed=42)
/// p = engine.draw_double()
///
/// state = engine.get_state()     # goes into the checkpoint file
/// ...
/// resumed = DrawEngine()
/// resumed.set_state(state)       # continues the exact draw stream
/// ```
#[pyclass(name = "DrawEngine")]
pub struct PyDrawEngine {
    inner: RustDrawEngine,
}

#[pymethods]
impl PyDrawEngine {
    /// Create a new engine, seeded with `seed` or with the default seed
    #[new]
    #[pyo3(signature = (seed=None))]
    fn new(seed: Option<u32>) -> Self {
        let inner = match seed {
            Some(s) => RustDrawEngine::with_seed(s),
            None => RustDrawEngine::new(),
        };
        PyDrawEngine { inner }
    }

    /// Reinitialize the generator from `value`, discarding prior state
    fn seed(&mut self, value: u32) {
        self.inner.seed(value);
    }

    /// Next value from the continuous uniform distribution over [0.0, 1.0)
    fn draw_double(&mut self) -> f64 {
        self.inner.draw_double()
    }

    /// Next value from the discrete uniform distribution over [0, 2^31 - 1]
    fn draw_int(&mut self) -> i32 {
        self.inner.draw_int()
    }

    /// Next value from the discrete uniform distribution over [0, 255]
    fn draw_char_int(&mut self) -> u8 {
        self.inner.draw_char_int()
    }

    /// Next value from the discrete uniform distribution over [0, 4095]
    ///
    /// Power-of-two range; safe when individual bits are consumed.
    fn draw_bit_int(&mut self) -> u16 {
        self.inner.draw_bit_int()
    }

    /// Serialize the full generator state for checkpointing
    fn get_state(&self) -> String {
        self.inner.export_state()
    }

    /// Restore a previously exported generator state
    ///
    /// # Errors
    ///
    /// Raises ValueError if `state` is not a valid encoding; the prior
    /// state is left untouched. Resume code must treat this as fatal for
    /// the run.
    fn set_state(&mut self, state: &str) -> PyResult<()> {
        self.inner.import_state(state).map_err(|e| {
            PyErr::new::<pyo3::exceptions::PyValueError, _>(format!(
                "Failed to restore RNG state: {}",
                e
            ))
        })
    }
}
