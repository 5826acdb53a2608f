//! Key words and the derived parity word.
//!
//! Threefry extends its key with one extra word, the XOR of every key word
//! and a fixed constant. Subkeys are drawn from the five-word schedule
//! `[k0, k1, k2, k3, parity]` in rotation.

use crate::config::MAX_KEY_WORDS;

/// Constant folded into the parity word.
pub(crate) const PARITY_CONSTANT: u64 = 0x1BD1_1BDA_A9FC_1A22;

/// Number of words in the extended key schedule.
pub(crate) const SCHEDULE_WORDS: usize = MAX_KEY_WORDS + 1;

/// Key material of an engine.
///
/// Slots past the configured key size are always zero, so a reduced key
/// behaves exactly like a full key whose high words are zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct KeySchedule {
    words: [u64; MAX_KEY_WORDS],
    parity: u64,
    size: usize,
}

impl KeySchedule {
    /// Creates an all-zero key of `size` words.
    pub(crate) fn new(size: usize) -> Self {
        debug_assert!(size <= MAX_KEY_WORDS);
        KeySchedule {
            words: [0; MAX_KEY_WORDS],
            parity: PARITY_CONSTANT,
            size,
        }
    }

    /// Stores up to `size` words from `words` and recomputes the parity.
    ///
    /// Missing words are zero; words past the key size are ignored.
    pub(crate) fn set_key(&mut self, words: &[u64]) {
        self.words = [0; MAX_KEY_WORDS];
        for (slot, &word) in self.words[..self.size].iter_mut().zip(words) {
            *slot = word;
        }
        self.update_parity();
    }

    /// Places `value` in the first slot and zeroes the rest.
    pub(crate) fn seed(&mut self, value: u64) {
        self.set_key(&[value]);
    }

    fn update_parity(&mut self) {
        self.parity = self.words.iter().fold(PARITY_CONSTANT, |acc, &w| acc ^ w);
    }

    /// The active key words.
    pub(crate) fn words(&self) -> &[u64] {
        &self.words[..self.size]
    }

    pub(crate) fn size(&self) -> usize {
        self.size
    }

    /// The extended schedule `[k0, k1, k2, k3, parity]`.
    pub(crate) fn schedule(&self) -> [u64; SCHEDULE_WORDS] {
        let [k0, k1, k2, k3] = self.words;
        [k0, k1, k2, k3, self.parity]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_key_parity() {
        let ks = KeySchedule::new(4);
        assert_eq!(ks.schedule()[4], PARITY_CONSTANT);
        assert_eq!(ks.words(), &[0, 0, 0, 0]);
    }

    #[test]
    fn test_parity_tracks_key() {
        let mut ks = KeySchedule::new(4);
        ks.set_key(&[1, 2, 4, 8]);
        assert_eq!(ks.schedule()[4], PARITY_CONSTANT ^ 15);
        ks.set_key(&[1]);
        assert_eq!(ks.words(), &[1, 0, 0, 0]);
        assert_eq!(ks.schedule()[4], PARITY_CONSTANT ^ 1);
    }

    #[test]
    fn test_reduced_key_ignores_extra_words() {
        let mut ks = KeySchedule::new(2);
        ks.set_key(&[7, 9, 11, 13]);
        assert_eq!(ks.words(), &[7, 9]);
        assert_eq!(ks.schedule(), [7, 9, 0, 0, PARITY_CONSTANT ^ 7 ^ 9]);
    }

    #[test]
    fn test_empty_key() {
        let mut ks = KeySchedule::new(0);
        ks.seed(0xDEAD_BEEF);
        assert!(ks.words().is_empty());
        assert_eq!(ks.schedule(), [0, 0, 0, 0, PARITY_CONSTANT]);
    }

    #[test]
    fn test_seed_zero_fills() {
        let mut ks = KeySchedule::new(4);
        ks.set_key(&[5, 6, 7, 8]);
        ks.seed(3);
        assert_eq!(ks.words(), &[3, 0, 0, 0]);
        assert_eq!(ks.schedule()[4], PARITY_CONSTANT ^ 3);
    }
}
