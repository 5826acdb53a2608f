//! Multi-word block counter.
//!
//! The counter is an unsigned little-endian integer of 1 to 4 words. It
//! wraps silently to zero when it overflows its most significant configured
//! word, giving the engine its full period.

use crate::config::MAX_COUNTER_WORDS;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct CounterState {
    words: [u64; MAX_COUNTER_WORDS],
    size: usize,
}

impl CounterState {
    /// Creates a zero counter of `size` words.
    pub(crate) fn new(size: usize) -> Self {
        debug_assert!((1..=MAX_COUNTER_WORDS).contains(&size));
        CounterState {
            words: [0; MAX_COUNTER_WORDS],
            size,
        }
    }

    /// Assigns the counter; missing words are zero, extra words ignored.
    pub(crate) fn set(&mut self, words: &[u64]) {
        self.words = [0; MAX_COUNTER_WORDS];
        for (slot, &word) in self.words[..self.size].iter_mut().zip(words) {
            *slot = word;
        }
    }

    pub(crate) fn reset(&mut self) {
        self.words = [0; MAX_COUNTER_WORDS];
    }

    /// Adds one with carry propagation.
    pub(crate) fn increment(&mut self) {
        self.carry_from(0);
    }

    /// Adds `delta` to the counter.
    ///
    /// A 64-bit delta can overflow the low word at most once, so a single
    /// carry is rippled into the higher words.
    pub(crate) fn advance(&mut self, delta: u64) {
        let overflow = delta > u64::MAX - self.words[0];
        self.words[0] = self.words[0].wrapping_add(delta);
        if overflow {
            self.carry_from(1);
        }
    }

    /// Adds one starting at word `start`, wrapping past the top word.
    fn carry_from(&mut self, start: usize) {
        for word in self.words[..self.size].iter_mut().skip(start) {
            *word = word.wrapping_add(1);
            if *word != 0 {
                return;
            }
        }
    }

    /// The active counter words.
    pub(crate) fn words(&self) -> &[u64] {
        &self.words[..self.size]
    }

    /// The counter zero-padded to a full block.
    pub(crate) fn block(&self) -> [u64; MAX_COUNTER_WORDS] {
        self.words
    }
}
