//! Sub-word extraction from an encrypted block.
//!
//! The block is read as the little-endian concatenation of its four words:
//! sample `n` of width `W` is bits `[n*W, n*W + W)`, taken from the low end
//! of each word first.

use crate::config::OutputWidth;
use crate::mixing::BLOCK_WORDS;

/// Returns sample `index` of `block` at the given width.
///
/// `index` must be below `width.samples_per_block()`.
#[inline]
pub(crate) fn extract(block: &[u64; BLOCK_WORDS], width: OutputWidth, index: usize) -> u64 {
    debug_assert!(index < width.samples_per_block());
    let bits = width.bits() as usize;
    let bit_offset = index * bits;
    let word = block[bit_offset / 64];
    (word >> (bit_offset % 64)) & width.max_value()
}
