//! Checkpoint codec for generator state
//!
//! Serializes the full MT19937 state so a resumed trial continues the draw
//! stream bit-for-bit where the original left off.
//!
//! # Critical Invariants
//!
//! - **Lossless**: decode(encode(state)) reproduces the exact future draw
//!   sequence; no information is dropped and nothing is reseeded.
//! - **Atomic**: a malformed input is rejected without touching any live
//!   generator state.
//! - **Fail loud**: malformed input is an error surfaced to the resume
//!   path, never a silent fallback to a fresh seed (a silently reseeded
//!   run would be indistinguishable from a correctly resumed one).
//!
//! Two interchangeable forms are provided: the whitespace-separated decimal
//! text encoding stored as the RNG-state field of a checkpoint artifact
//! (624 state words followed by the block cursor, 625 tokens total), and
//! [`RngStateSnapshot`], a serde-friendly struct for callers that embed the
//! state in a structured checkpoint instead. The encoding is complete for
//! this generator; compatibility with other generators' encodings is not
//! claimed.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::rng::{Mersenne, STATE_WORDS};

/// Tokens in the text encoding: the state words plus the cursor.
pub const STATE_TOKENS: usize = STATE_WORDS + 1;

/// Rejection reasons for a serialized generator state
///
/// The only error in this crate. Raised by [`decode_state`] and by the
/// snapshot-to-generator conversion; fatal to the resume operation that
/// triggered it.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MalformedStateError {
    /// Wrong number of values for this generator's state shape
    #[error("expected {expected} state values, found {found}")]
    WrongTokenCount { expected: usize, found: usize },

    /// A value failed to parse as a 32-bit unsigned decimal integer
    #[error("state value at position {position} is not a 32-bit unsigned integer: '{token}'")]
    InvalidToken { position: usize, token: String },

    /// The block cursor exceeds the state length
    #[error("state cursor {cursor} out of range (0..={max})")]
    CursorOutOfRange { cursor: u64, max: usize },
}

// ============================================================================
// Structured Snapshot
// ============================================================================

/// Generator state as a structured value
///
/// This is the RNG-state field of a checkpoint artifact for callers that
/// persist checkpoints through serde rather than as raw strings. Field
/// order matches the text encoding: state words first, then the cursor.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RngStateSnapshot {
    /// The 624 state words, in order
    pub words: Vec<u32>,

    /// Cursor into the current output block (0..=624)
    pub cursor: usize,
}

impl From<&Mersenne> for RngStateSnapshot {
    fn from(rng: &Mersenne) -> Self {
        RngStateSnapshot {
            words: rng.words().to_vec(),
            cursor: rng.cursor(),
        }
    }
}

impl TryFrom<RngStateSnapshot> for Mersenne {
    type Error = MalformedStateError;

    fn try_from(snapshot: RngStateSnapshot) -> Result<Self, Self::Error> {
        if snapshot.words.len() != STATE_WORDS {
            return Err(MalformedStateError::WrongTokenCount {
                expected: STATE_WORDS,
                found: snapshot.words.len(),
            });
        }
        if snapshot.cursor > STATE_WORDS {
            return Err(MalformedStateError::CursorOutOfRange {
                cursor: snapshot.cursor as u64,
                max: STATE_WORDS,
            });
        }

        let mut words = [0u32; STATE_WORDS];
        words.copy_from_slice(&snapshot.words);
        Ok(Mersenne::from_parts(words, snapshot.cursor))
    }
}

// ============================================================================
// Text Codec
// ============================================================================

/// Encode the full generator state as whitespace-separated decimal values
///
/// Produces exactly [`STATE_TOKENS`] tokens: the 624 state words in order,
/// then the block cursor. Pure read; the generator is not advanced.
pub fn encode_state(rng: &Mersenne) -> String {
    let mut tokens: Vec<String> = rng.words().iter().map(|w| w.to_string()).collect();
    tokens.push(rng.cursor().to_string());
    tokens.join(" ")
}

/// Decode a generator from its text encoding
///
/// Strict parse: the token count, every word, and the cursor range are all
/// validated before a generator is constructed, so no partially-restored
/// state can escape.
///
/// # Errors
/// Returns [`MalformedStateError`] if the input has the wrong token count,
/// contains a token that is not a 32-bit unsigned decimal integer, or
/// carries a cursor outside `0..=624`.
pub fn decode_state(text: &str) -> Result<Mersenne, MalformedStateError> {
    let tokens: Vec<&str> = text.split_whitespace().collect();
    if tokens.len() != STATE_TOKENS {
        return Err(MalformedStateError::WrongTokenCount {
            expected: STATE_TOKENS,
            found: tokens.len(),
        });
    }

    let mut words = [0u32; STATE_WORDS];
    for (position, token) in tokens[..STATE_WORDS].iter().enumerate() {
        words[position] = token
            .parse()
            .map_err(|_| MalformedStateError::InvalidToken {
                position,
                token: (*token).to_string(),
            })?;
    }

    let cursor_token = tokens[STATE_WORDS];
    let cursor: u32 = cursor_token
        .parse()
        .map_err(|_| MalformedStateError::InvalidToken {
            position: STATE_WORDS,
            token: cursor_token.to_string(),
        })?;
    if cursor as usize > STATE_WORDS {
        return Err(MalformedStateError::CursorOutOfRange {
            cursor: cursor as u64,
            max: STATE_WORDS,
        });
    }

    Ok(Mersenne::from_parts(words, cursor as usize))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_token_count() {
        let rng = Mersenne::new(1729);
        let encoded = encode_state(&rng);
        assert_eq!(encoded.split_whitespace().count(), STATE_TOKENS);
    }

    #[test]
    fn test_decode_encode_identity() {
        let mut rng = Mersenne::new(77);
        for _ in 0..100 {
            rng.next_u32();
        }

        let decoded = decode_state(&encode_state(&rng)).expect("valid encoding must decode");
        assert_eq!(decoded, rng, "Decoded state should equal the original");
    }

    #[test]
    fn test_decode_rejects_wrong_token_count() {
        let err = decode_state("1 2 3").unwrap_err();
        assert_eq!(
            err,
            MalformedStateError::WrongTokenCount {
                expected: STATE_TOKENS,
                found: 3
            }
        );
    }

    #[test]
    fn test_decode_rejects_non_numeric_token() {
        let mut tokens = vec!["0".to_string(); STATE_TOKENS];
        tokens[10] = "banana".to_string();
        let err = decode_state(&tokens.join(" ")).unwrap_err();
        assert_eq!(
            err,
            MalformedStateError::InvalidToken {
                position: 10,
                token: "banana".to_string()
            }
        );
    }

    #[test]
    fn test_decode_rejects_cursor_out_of_range() {
        let rng = Mersenne::new(5);
        let mut tokens: Vec<String> = encode_state(&rng)
            .split_whitespace()
            .map(str::to_string)
            .collect();
        *tokens.last_mut().unwrap() = "9999".to_string();

        let err = decode_state(&tokens.join(" ")).unwrap_err();
        assert_eq!(
            err,
            MalformedStateError::CursorOutOfRange {
                cursor: 9999,
                max: STATE_WORDS
            }
        );
    }

    #[test]
    fn test_snapshot_round_trip() {
        let mut rng = Mersenne::new(31);
        for _ in 0..50 {
            rng.next_u32();
        }

        let snapshot = RngStateSnapshot::from(&rng);
        let restored = Mersenne::try_from(snapshot).expect("snapshot of a live generator is valid");
        assert_eq!(restored, rng);
    }

    #[test]
    fn test_snapshot_rejects_wrong_word_count() {
        let snapshot = RngStateSnapshot {
            words: vec![0; 10],
            cursor: 0,
        };
        let err = Mersenne::try_from(snapshot).unwrap_err();
        assert_eq!(
            err,
            MalformedStateError::WrongTokenCount {
                expected: STATE_WORDS,
                found: 10
            }
        );
    }
}
