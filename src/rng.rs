//! `rand_core` integration.
//!
//! Engines narrower than the requested integer concatenate successive
//! samples little-endian, so an 8-bit engine's `next_u64` equals the sample
//! a 64-bit engine with the same key would produce at that position.
//! Wider engines truncate a single sample.

use rand_core::{impls, Error, RngCore};

use crate::engine::Threefry;

impl Threefry {
    /// Concatenates samples into a `bits`-wide little-endian value.
    fn next_bits(&mut self, bits: u32) -> u64 {
        let width = self.config().width().bits();
        if width >= bits {
            return self.next_sample();
        }
        let mut value = 0u64;
        let mut shift = 0;
        while shift < bits {
            value |= self.next_sample() << shift;
            shift += width;
        }
        value
    }
}

impl RngCore for Threefry {
    fn next_u32(&mut self) -> u32 {
        self.next_bits(32) as u32
    }

    fn next_u64(&mut self) -> u64 {
        self.next_bits(64)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        impls::fill_bytes_via_next(self, dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}
