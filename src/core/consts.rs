//! Constants and types used in the implementation of the RC5-32/12/16 cipher. For further reference check the [RC5 paper] and the
//! [Naming][crate::core#naming] section in the module documentation.
//!
//! [RC5 paper]: https://www.grc.com/r&d/rc5.pdf

use cipher::consts::{U16, U8};
use generic_array::GenericArray;
use static_assertions::{assert_eq_size, const_assert_eq};

/// Magic constant `Odd((e - 2) * 2^32)`.
pub const P: u32 = 0xb7e15163;
/// Magic constant `Odd((phi - 1) * 2^32)`.
pub const Q: u32 = 0x9e3779b9;

pub const WORD_BITS: u32 = u32::BITS;
pub const WORD_BYTES: usize = 4;
pub const ROUNDS: usize = 12;
pub const KEY_SIZE: usize = 16;
pub const KEY_WORDS: usize = KEY_SIZE / WORD_BYTES;
pub const BLOCK_WORDS: usize = 2;
pub const BLOCK_SIZE: usize = BLOCK_WORDS * WORD_BYTES;
pub const KEY_SCHEDULE_SIZE: usize = 2 * (ROUNDS + 1);

/// Passes of key mixing over the larger of the two arrays.
pub const MIX_PASSES: usize = 3;

/// Rotation amounts are taken from the low bits of a word only.
pub const ROTATION_MASK: u32 = WORD_BITS - 1;

pub type Key = [u32; KEY_WORDS];
pub type Block = [u32; BLOCK_WORDS];
pub type KeySchedule = [u32; KEY_SCHEDULE_SIZE];

pub type KeyBytes = GenericArray<u8, U16>;
pub type BlockBytes = GenericArray<u8, U8>;

const_assert_eq!(KEY_SCHEDULE_SIZE, 26);
const_assert_eq!(KEY_WORDS, 4);
const_assert_eq!(WORD_BITS.count_ones(), 1);
assert_eq_size!(Key, [u8; KEY_SIZE]);
assert_eq_size!(Block, [u8; BLOCK_SIZE]);
assert_eq_size!(Key, KeyBytes);
assert_eq_size!(Block, BlockBytes);
