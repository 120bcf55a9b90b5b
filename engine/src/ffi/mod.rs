//! PyO3 bindings
//!
//! The simulator's evolution loop runs in Python and drives the Rust engine
//! through this boundary. Kept minimal: scalars and the state string cross
//! it, nothing else.

pub mod engine;

pub use engine::PyDrawEngine;
