//! The Threefry-4x64 mixing network.
//!
//! A 256-bit block (four `u64` words) is pushed through `rounds` rounds of
//! the add-rotate-xor primitive. Each round applies two mixes on fixed word
//! pairs, with rotation amounts taken from an eight-round table. A subkey is
//! added before the first round and after every fourth round.
//!
//! ```text
//!  even round:  mix(x0, x1)  mix(x2, x3)
//!  odd round:   mix(x0, x3)  mix(x2, x1)
//!  round % 4 == 3:  x[j] += ks[(s + j) % 5],  x3 += s
//! ```
//!
//! Output matches the Random123 `threefry4x64` known-answer vectors
//! bit for bit.

use crate::key_schedule::{KeySchedule, SCHEDULE_WORDS};

/// Words in one block.
pub(crate) const BLOCK_WORDS: usize = 4;

/// Rotation amounts for rounds `r % 8`, as (first pair, second pair).
const ROTATIONS: [[u32; 2]; 8] = [
    [14, 16],
    [52, 57],
    [23, 40],
    [5, 37],
    [25, 33],
    [46, 12],
    [58, 22],
    [32, 32],
];

/// Word pairs mixed on even and odd rounds.
const PAIRS: [[(usize, usize); 2]; 2] = [[(0, 1), (2, 3)], [(0, 3), (2, 1)]];

/// Rounds between two key injections.
const ROUNDS_PER_INJECTION: usize = 4;

/// The add-rotate-xor primitive: `a += b; b = rotl(b, rot) ^ a`.
///
/// Bijective in `(a, b)` for a fixed rotation.
#[inline(always)]
fn mix(x: &mut [u64; BLOCK_WORDS], a: usize, b: usize, rot: u32) {
    x[a] = x[a].wrapping_add(x[b]);
    x[b] = x[b].rotate_left(rot) ^ x[a];
}

/// Adds subkey `s` to every block word.
#[inline(always)]
fn inject_key(x: &mut [u64; BLOCK_WORDS], ks: &[u64; SCHEDULE_WORDS], s: usize) {
    for (j, word) in x.iter_mut().enumerate() {
        *word = word.wrapping_add(ks[(s + j) % SCHEDULE_WORDS]);
    }
    x[BLOCK_WORDS - 1] = x[BLOCK_WORDS - 1].wrapping_add(s as u64);
}

/// Encrypts a zero-padded counter block under `key`.
///
/// Pure function of its inputs. When `rounds` is not a multiple of four the
/// trailing rounds run without a following key injection.
pub(crate) fn encrypt(
    counter: &[u64; BLOCK_WORDS],
    key: &KeySchedule,
    rounds: usize,
) -> [u64; BLOCK_WORDS] {
    let ks = key.schedule();
    let mut x = *counter;
    inject_key(&mut x, &ks, 0);

    for round in 0..rounds {
        let [r0, r1] = ROTATIONS[round % ROTATIONS.len()];
        let [(a0, b0), (a1, b1)] = PAIRS[round % 2];
        mix(&mut x, a0, b0, r0);
        mix(&mut x, a1, b1, r1);

        if round % ROUNDS_PER_INJECTION == ROUNDS_PER_INJECTION - 1 {
            inject_key(&mut x, &ks, round / ROUNDS_PER_INJECTION + 1);
        }
    }
    x
}
