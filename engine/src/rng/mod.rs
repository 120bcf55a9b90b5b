//! Deterministic random number generation
//!
//! Implements the 32-bit Mersenne Twister (MT19937) used as the single
//! shared randomness source of the simulation.
//! CRITICAL: All randomness in a trial MUST flow through one
//! [`DrawEngine`](crate::engine::DrawEngine) owning one of these generators.

mod mersenne;

pub use mersenne::{Mersenne, STATE_WORDS};
