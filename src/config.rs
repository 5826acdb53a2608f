//! Engine configuration: output width, round count, key and counter sizes.
//!
//! The tuple is validated once in [`ThreefryConfig::new`]; every engine
//! operation afterwards can rely on it and is therefore infallible.

use crate::error::ThreefryError;

/// Maximum number of 64-bit key words.
pub const MAX_KEY_WORDS: usize = 4;

/// Maximum number of 64-bit counter words.
pub const MAX_COUNTER_WORDS: usize = 4;

/// Number of bits produced by one application of the mixing network.
pub const BLOCK_BITS: usize = 256;

/// Width of a single generated sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutputWidth {
    W8,
    W16,
    W32,
    W64,
}

impl OutputWidth {
    /// Maps a bit count to a width.
    ///
    /// # Errors
    /// Returns [`ThreefryError::InvalidOutputWidth`] for anything other than
    /// 8, 16, 32 or 64.
    pub fn from_bits(bits: u32) -> Result<Self, ThreefryError> {
        match bits {
            8 => Ok(OutputWidth::W8),
            16 => Ok(OutputWidth::W16),
            32 => Ok(OutputWidth::W32),
            64 => Ok(OutputWidth::W64),
            other => Err(ThreefryError::InvalidOutputWidth(other)),
        }
    }

    /// Number of bits in one sample.
    pub const fn bits(self) -> u32 {
        match self {
            OutputWidth::W8 => 8,
            OutputWidth::W16 => 16,
            OutputWidth::W32 => 32,
            OutputWidth::W64 => 64,
        }
    }

    /// Number of samples one 256-bit block yields.
    pub const fn samples_per_block(self) -> usize {
        BLOCK_BITS / self.bits() as usize
    }

    /// Largest value a sample can take, `2^bits - 1`.
    pub const fn max_value(self) -> u64 {
        u64::MAX >> (64 - self.bits())
    }
}

/// Validated parameter tuple of a Threefry engine.
///
/// # Examples
///
/// ```
/// use threefry::ThreefryConfig;
///
/// let config = ThreefryConfig::new(32, 20, 4, 4).unwrap();
/// assert_eq!(config.samples_per_block(), 8);
///
/// assert!(ThreefryConfig::new(24, 20, 4, 4).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ThreefryConfig {
    width: OutputWidth,
    rounds: usize,
    key_size: usize,
    counter_size: usize,
}

impl Default for ThreefryConfig {
    /// 32-bit samples, 20 rounds, full 256-bit key and counter.
    fn default() -> Self {
        Self::preset(OutputWidth::W32, 20, 4, 4)
    }
}

impl ThreefryConfig {
    /// Builds and validates a configuration.
    ///
    /// # Parameters
    /// - `width_bits`: Sample width, one of 8, 16, 32, 64.
    /// - `rounds`: Number of mixing rounds. Any value is accepted; 13 and 20
    ///   are the published variants, 72 matches full Threefish.
    /// - `key_size`: Number of 64-bit key words, 0 through 4.
    /// - `counter_size`: Number of 64-bit counter words, 1 through 4.
    ///
    /// # Errors
    /// Returns the matching configuration variant of [`ThreefryError`] for
    /// the first invalid parameter.
    pub fn new(
        width_bits: u32,
        rounds: usize,
        key_size: usize,
        counter_size: usize,
    ) -> Result<Self, ThreefryError> {
        let width = OutputWidth::from_bits(width_bits)?;
        if key_size > MAX_KEY_WORDS {
            return Err(ThreefryError::InvalidKeySize(key_size));
        }
        if !(1..=MAX_COUNTER_WORDS).contains(&counter_size) {
            return Err(ThreefryError::InvalidCounterSize(counter_size));
        }
        Ok(Self::preset(width, rounds, key_size, counter_size))
    }

    /// Internal constructor for parameter sets known to be valid.
    const fn preset(width: OutputWidth, rounds: usize, key_size: usize, counter_size: usize) -> Self {
        ThreefryConfig {
            width,
            rounds,
            key_size,
            counter_size,
        }
    }

    /// 32-bit samples, 13 rounds, 64-bit key, 2^67 cycle length.
    pub const fn threefry4x64_13() -> Self {
        Self::preset(OutputWidth::W32, 13, 1, 1)
    }

    /// 32-bit samples, 13 rounds, full 256-bit key and counter.
    pub const fn threefry4x64_13_slow() -> Self {
        Self::preset(OutputWidth::W32, 13, 4, 4)
    }

    /// 64-bit samples, 13 rounds, 64-bit key, 2^66 cycle length.
    pub const fn threefry4x64_13_64() -> Self {
        Self::preset(OutputWidth::W64, 13, 1, 1)
    }

    /// 32-bit samples, 20 rounds, 64-bit key, 2^67 cycle length.
    pub const fn threefry4x64_20() -> Self {
        Self::preset(OutputWidth::W32, 20, 1, 1)
    }

    /// 64-bit samples, 20 rounds, 64-bit key, 2^66 cycle length.
    pub const fn threefry4x64_20_64() -> Self {
        Self::preset(OutputWidth::W64, 20, 1, 1)
    }

    pub const fn width(&self) -> OutputWidth {
        self.width
    }

    pub const fn rounds(&self) -> usize {
        self.rounds
    }

    pub const fn key_size(&self) -> usize {
        self.key_size
    }

    pub const fn counter_size(&self) -> usize {
        self.counter_size
    }

    pub const fn samples_per_block(&self) -> usize {
        self.width.samples_per_block()
    }
}
