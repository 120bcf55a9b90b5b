//! Evolution RNG Core - Rust Engine
//!
//! Deterministic, checkpointable random-number subsystem for the evolution
//! simulator. One seeded draw stream per trial, with byte-exact state
//! save/restore so a resumed trial is indistinguishable from one that never
//! stopped.
//!
//! # Architecture
//!
//! - **rng**: MT19937 generator core
//! - **engine**: the draw engine (seeding + the four derived distributions)
//! - **checkpoint**: lossless state codec for save/resume
//! - **ffi**: Python bindings (feature `pyo3`)
//!
//! # Critical Invariants
//!
//! 1. Same seed + same draw-call order → identical trial outcomes
//! 2. `import_state(export_state())` is the identity on all future draws
//! 3. A malformed checkpoint state fails loudly; it is never silently
//!    replaced with a fresh seed
//!
//! # Example
//! ```
//! use evolution_rng_core_rs::DrawEngine;
//!
//! let mut engine = DrawEngine::with_seed(42);
//! engine.draw_int();
//!
//! let state = engine.export_state();
//! let next = engine.draw_int();
//!
//! let mut resumed = DrawEngine::new();
//! resumed.import_state(&state).unwrap();
//! assert_eq!(resumed.draw_int(), next);
//! ```

// Module declarations
pub mod checkpoint;
pub mod engine;
pub mod rng;

// Re-exports for convenience
pub use checkpoint::{MalformedStateError, RngStateSnapshot, STATE_TOKENS};
pub use engine::{DrawEngine, DEFAULT_SEED};
pub use rng::{Mersenne, STATE_WORDS};

// FFI module (when feature enabled)
#[cfg(feature = "pyo3")]
pub mod ffi;

// PyO3 exports (when feature enabled)
#[cfg(feature = "pyo3")]
use pyo3::prelude::*;

#[cfg(feature = "pyo3")]
#[pymodule]
fn evolution_rng_core_rs(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<ffi::PyDrawEngine>()?;
    Ok(())
}
