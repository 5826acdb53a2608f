//! Threefry: counter-based pseudorandom engine.
//!
//! Composes the key schedule, the block counter, the mixing network and the
//! sub-word extractor. The engine keeps one encrypted block and a cursor into
//! it; when the cursor runs off the end the counter is incremented and the
//! next block is encrypted.
//!
//! ```text
//! (Key, Counter) ──encrypt──▶ Block[4 x u64] ──extract(cursor)──▶ sample
//!       ▲                                             │
//!       └────────── increment when exhausted ◀────────┘
//! ```

use crate::config::ThreefryConfig;
use crate::counter::CounterState;
use crate::error::ThreefryError;
use crate::extract::extract;
use crate::key_schedule::KeySchedule;
use crate::mixing::{encrypt, BLOCK_WORDS};
use crate::seed_seq::SeedSequence;

/// Counter-based pseudorandom engine built on the Threefry-4x64 cipher.
///
/// The output at any position is a pure function of the key and the block
/// counter, so [`discard`](Self::discard) skips ahead in constant time and
/// cloning an engine yields an independent continuation of the same stream.
///
/// # Examples
///
/// ```
/// use threefry::{Threefry, ThreefryConfig};
///
/// let config = ThreefryConfig::new(64, 20, 4, 4).unwrap();
/// let mut rng = Threefry::new(config);
/// assert_eq!(rng.next_sample(), 0x09218ebde6c85537);
///
/// let mut ahead = rng.clone();
/// ahead.discard(10);
/// for _ in 0..10 {
///     rng.next_sample();
/// }
/// assert_eq!(rng, ahead);
/// ```
#[derive(Debug, Clone)]
pub struct Threefry {
    config: ThreefryConfig,
    key: KeySchedule,
    counter: CounterState,
    block: [u64; BLOCK_WORDS],
    cursor: usize,
}

impl Default for Threefry {
    fn default() -> Self {
        Self::new(ThreefryConfig::default())
    }
}

impl Threefry {
    /// Creates an engine seeded with 0.
    pub fn new(config: ThreefryConfig) -> Self {
        Self::with_seed(config, 0)
    }

    /// Creates an engine whose first key word is `value`.
    pub fn with_seed(config: ThreefryConfig, value: u64) -> Self {
        let mut engine = Threefry {
            config,
            key: KeySchedule::new(config.key_size()),
            counter: CounterState::new(config.counter_size()),
            block: [0; BLOCK_WORDS],
            cursor: 0,
        };
        engine.seed(value);
        engine
    }

    /// Creates an engine keyed from a seed sequence.
    ///
    /// # Errors
    /// Returns [`ThreefryError::InsufficientSeedData`] if the sequence
    /// supplies fewer words than the key holds.
    pub fn from_seed_seq<S>(config: ThreefryConfig, seq: &mut S) -> Result<Self, ThreefryError>
    where
        S: SeedSequence + ?Sized,
    {
        let mut engine = Self::new(config);
        engine.seed_seq(seq)?;
        Ok(engine)
    }

    /// Creates an engine keyed from the next `key_size` items of `iter`.
    ///
    /// # Errors
    /// Returns [`ThreefryError::InsufficientSeedData`] if the iterator ends
    /// early.
    pub fn from_iter_seed<I, T>(config: ThreefryConfig, iter: &mut I) -> Result<Self, ThreefryError>
    where
        I: Iterator<Item = T>,
        T: Into<u64>,
    {
        let mut engine = Self::new(config);
        engine.seed_from_iter(iter)?;
        Ok(engine)
    }

    /// Re-seeds with the default seed, 0.
    pub fn seed_default(&mut self) {
        self.seed(0);
    }

    /// Re-seeds: `value` becomes the first key word, the rest are zeroed,
    /// and the stream restarts at counter zero.
    pub fn seed(&mut self, value: u64) {
        self.key.seed(value);
        self.reset_after_key_change();
    }

    /// Re-seeds from a seed sequence, pulling exactly `key_size` words.
    ///
    /// # Errors
    /// Returns [`ThreefryError::InsufficientSeedData`] if the sequence
    /// supplies fewer words than required. The engine is left untouched.
    pub fn seed_seq<S>(&mut self, seq: &mut S) -> Result<(), ThreefryError>
    where
        S: SeedSequence + ?Sized,
    {
        let required = self.key.size();
        let words = seq.generate(required);
        if words.len() < required {
            return Err(ThreefryError::InsufficientSeedData {
                required,
                available: words.len(),
            });
        }
        self.key.set_key(&words);
        self.reset_after_key_change();
        Ok(())
    }

    /// Re-seeds from the next `key_size` items of `iter`.
    ///
    /// Exactly the consumed items are taken from the caller's iterator; it
    /// is left positioned right after them.
    ///
    /// # Errors
    /// Returns [`ThreefryError::InsufficientSeedData`] if the iterator ends
    /// early. The engine is left untouched.
    pub fn seed_from_iter<I, T>(&mut self, iter: &mut I) -> Result<(), ThreefryError>
    where
        I: Iterator<Item = T>,
        T: Into<u64>,
    {
        let required = self.key.size();
        let words: Vec<u64> = iter.by_ref().take(required).map(Into::into).collect();
        if words.len() < required {
            return Err(ThreefryError::InsufficientSeedData {
                required,
                available: words.len(),
            });
        }
        self.key.set_key(&words);
        self.reset_after_key_change();
        Ok(())
    }

    /// Replaces the key without moving the stream position.
    ///
    /// Missing words are zero; words past `key_size` are ignored.
    pub fn set_key(&mut self, words: &[u64]) {
        self.key.set_key(words);
        self.encrypt_counter();
    }

    /// Jumps directly to block `words`, sample `cursor`.
    ///
    /// `cursor` is reduced modulo the samples per block. Used to hand out
    /// disjoint regions of the counter space.
    pub fn set_counter(&mut self, words: &[u64], cursor: usize) {
        self.counter.set(words);
        self.cursor = cursor % self.samples_per_block();
        self.encrypt_counter();
    }

    /// Replaces key and position together.
    pub fn set_key_and_counter(&mut self, key: &[u64], counter: &[u64], cursor: usize) {
        self.key.set_key(key);
        self.set_counter(counter, cursor);
    }

    /// Returns the next sample, in `[min(), max()]`.
    pub fn next_sample(&mut self) -> u64 {
        let per_block = self.samples_per_block();
        if self.cursor < per_block {
            let value = extract(&self.block, self.config.width(), self.cursor);
            self.cursor += 1;
            return value;
        }

        self.counter.increment();
        self.encrypt_counter();
        self.cursor = 1;
        extract(&self.block, self.config.width(), 0)
    }

    /// Fills `dest` with successive samples.
    pub fn generate(&mut self, dest: &mut [u64]) {
        for slot in dest.iter_mut() {
            *slot = self.next_sample();
        }
    }

    /// Skips `n` samples without producing them.
    ///
    /// Leaves the engine in exactly the state `n` calls to
    /// [`next_sample`](Self::next_sample) would, including when the skip
    /// ends on a block boundary.
    pub fn discard(&mut self, n: u64) {
        let per_block = self.samples_per_block() as u128;
        let position = self.cursor as u128 + n as u128;
        if position <= per_block {
            self.cursor = position as usize;
            return;
        }

        // next_sample only moves to a new block when the cursor is
        // exhausted, so the cursor always ends in [1, per_block].
        let blocks = (position - 1) / per_block;
        self.cursor = ((position - 1) % per_block) as usize + 1;
        self.counter.advance(blocks as u64);
        self.encrypt_counter();
    }

    /// Smallest value [`next_sample`](Self::next_sample) can return.
    pub fn min(&self) -> u64 {
        0
    }

    /// Largest value [`next_sample`](Self::next_sample) can return,
    /// `2^W - 1` for the configured width.
    pub fn max(&self) -> u64 {
        self.config.width().max_value()
    }

    pub fn config(&self) -> &ThreefryConfig {
        &self.config
    }

    /// The active key words.
    pub fn key(&self) -> &[u64] {
        self.key.words()
    }

    /// The active counter words, least significant first.
    pub fn counter(&self) -> &[u64] {
        self.counter.words()
    }

    /// Index of the next sample within the current block.
    ///
    /// Equal to [`samples_per_block`](Self::samples_per_block) when the
    /// block is exhausted.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn samples_per_block(&self) -> usize {
        self.config.samples_per_block()
    }

    /// Restores the key, counter and cursor from raw parts.
    ///
    /// Callers must have validated `cursor <= samples_per_block`.
    pub(crate) fn restore(&mut self, key: &[u64], counter: &[u64], cursor: usize) {
        debug_assert!(cursor <= self.samples_per_block());
        self.key.set_key(key);
        self.counter.set(counter);
        self.cursor = cursor;
        self.encrypt_counter();
    }

    fn reset_after_key_change(&mut self) {
        self.counter.reset();
        self.cursor = 0;
        self.encrypt_counter();
    }

    fn encrypt_counter(&mut self) {
        self.block = encrypt(&self.counter.block(), &self.key, self.config.rounds());
    }
}

impl PartialEq for Threefry {
    /// Two engines are equal when they would produce the same infinite
    /// stream: same configuration, key, counter and cursor.
    fn eq(&self, other: &Self) -> bool {
        let equal = self.config == other.config
            && self.key == other.key
            && self.counter == other.counter
            && self.cursor == other.cursor;
        debug_assert!(!equal || self.block == other.block);
        equal
    }
}

impl Eq for Threefry {}
