//! Error types for the Threefry library.

use std::fmt;

/// Errors produced by the Threefry library.
///
/// Configuration errors are raised once, when a [`ThreefryConfig`] is built.
/// After that only seeding and textual state parsing can fail.
///
/// [`ThreefryConfig`]: crate::config::ThreefryConfig
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ThreefryError {
    /// Output width is not one of 8, 16, 32 or 64 bits.
    InvalidOutputWidth(u32),
    /// Key size is outside the valid range [0, 4] words.
    InvalidKeySize(usize),
    /// Counter size is outside the valid range [1, 4] words.
    InvalidCounterSize(usize),
    /// The seed source ran out before supplying every key word.
    InsufficientSeedData {
        /// Number of 64-bit words the key needs.
        required: usize,
        /// Number of words the source actually supplied.
        available: usize,
    },
    /// A textual engine state could not be parsed.
    MalformedState,
}

impl ThreefryError {
    /// Returns `true` for errors raised while validating a configuration.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            ThreefryError::InvalidOutputWidth(_)
                | ThreefryError::InvalidKeySize(_)
                | ThreefryError::InvalidCounterSize(_)
        )
    }
}

impl fmt::Display for ThreefryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ThreefryError::InvalidOutputWidth(bits) => {
                write!(f, "Output width must be 8, 16, 32 or 64 bits, got {}", bits)
            }
            ThreefryError::InvalidKeySize(size) => {
                write!(f, "Key size must be between 0 and 4 words, got {}", size)
            }
            ThreefryError::InvalidCounterSize(size) => {
                write!(f, "Counter size must be between 1 and 4 words, got {}", size)
            }
            ThreefryError::InsufficientSeedData {
                required,
                available,
            } => {
                write!(
                    f,
                    "Seed source supplied {} words but the key needs {}",
                    available, required
                )
            }
            ThreefryError::MalformedState => {
                write!(f, "Engine state text is malformed")
            }
        }
    }
}

impl std::error::Error for ThreefryError {}
