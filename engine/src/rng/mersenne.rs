//! MT19937 random number generator
//!
//! The standard 32-bit Mersenne Twister: 624 words of state plus a cursor
//! into the current output block. Implemented here rather than pulled from a
//! registry crate because the checkpoint codec needs lossless access to the
//! full internal state, which off-the-shelf generators do not expose.
//!
//! # Determinism
//!
//! Same seed → same sequence of outputs. This is CRITICAL for:
//! - Reproducing a trial from its command-line seed
//! - Resuming a trial from a checkpoint bit-for-bit
//! - Debugging (replay the exact draw sequence that led to a result)

/// Number of 32-bit words in the generator state.
pub const STATE_WORDS: usize = 624;

const M: usize = 397;
const MATRIX_A: u32 = 0x9908_b0df;
const UPPER_MASK: u32 = 0x8000_0000;
const LOWER_MASK: u32 = 0x7fff_ffff;
const INIT_MULTIPLIER: u32 = 1_812_433_253;

/// 32-bit Mersenne Twister (MT19937)
///
/// Produces tempered 32-bit outputs in blocks of 624; `cursor` tracks the
/// position in the current block, with `cursor == STATE_WORDS` meaning the
/// block is exhausted and the next output triggers a twist.
///
/// # Example
/// ```
/// use evolution_rng_core_rs::Mersenne;
///
/// let mut rng = Mersenne::new(5489);
/// assert_eq!(rng.next_u32(), 3499211612);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mersenne {
    words: [u32; STATE_WORDS],
    cursor: usize,
}

impl Mersenne {
    /// Create a generator deterministically initialized from `seed`
    ///
    /// Uses the standard MT19937 initialization recurrence
    /// (`words[i] = 1812433253 * (words[i-1] ^ (words[i-1] >> 30)) + i`).
    pub fn new(seed: u32) -> Self {
        let mut words = [0u32; STATE_WORDS];
        words[0] = seed;
        for i in 1..STATE_WORDS {
            let prev = words[i - 1];
            words[i] = INIT_MULTIPLIER
                .wrapping_mul(prev ^ (prev >> 30))
                .wrapping_add(i as u32);
        }
        Self {
            words,
            cursor: STATE_WORDS,
        }
    }

    /// Reinitialize from `seed`, discarding all prior state
    pub fn reseed(&mut self, seed: u32) {
        *self = Mersenne::new(seed);
    }

    /// Generate the next 32-bit output
    ///
    /// Advances the cursor and twists the state block every 624 outputs.
    pub fn next_u32(&mut self) -> u32 {
        if self.cursor >= STATE_WORDS {
            self.twist();
        }
        let mut y = self.words[self.cursor];
        self.cursor += 1;

        // Tempering
        y ^= y >> 11;
        y ^= (y << 7) & 0x9d2c_5680;
        y ^= (y << 15) & 0xefc6_0000;
        y ^= y >> 18;
        y
    }

    /// Regenerate the full state block in place
    fn twist(&mut self) {
        for i in 0..STATE_WORDS {
            let x = (self.words[i] & UPPER_MASK) | (self.words[(i + 1) % STATE_WORDS] & LOWER_MASK);
            let mut next = self.words[(i + M) % STATE_WORDS] ^ (x >> 1);
            if x & 1 != 0 {
                next ^= MATRIX_A;
            }
            self.words[i] = next;
        }
        self.cursor = 0;
    }

    /// State words, in order (for the checkpoint codec)
    pub(crate) fn words(&self) -> &[u32; STATE_WORDS] {
        &self.words
    }

    /// Cursor into the current output block, in `0..=STATE_WORDS`
    pub(crate) fn cursor(&self) -> usize {
        self.cursor
    }

    /// Reconstruct a generator from already-validated parts
    ///
    /// Callers must guarantee `cursor <= STATE_WORDS`; the checkpoint codec
    /// is the only constructor path that goes through here.
    pub(crate) fn from_parts(words: [u32; STATE_WORDS], cursor: usize) -> Self {
        debug_assert!(cursor <= STATE_WORDS);
        Self { words, cursor }
    }
}
