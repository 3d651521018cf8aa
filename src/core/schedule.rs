//! Key expansion, section 4.3 of the RC5 paper.
//!
//! The user key is already given as little-endian words, so the "convert the secret key
//! from bytes to words" step lives in [bytes][crate::core::bytes] instead.

use super::consts::{Key, KeySchedule, KEY_SCHEDULE_SIZE, KEY_WORDS, MIX_PASSES, P, Q};
use super::rotate::{rotate_left, rotation_amount};
use std::cmp::max;

/// Expands `key` into the 26-word round key table `S`.
///
/// The caller's key is only read; mixing works on a local copy of it.
pub fn expand_key_schedule(key: &Key) -> KeySchedule {
    let key_table = initialize_key_schedule();
    let mut key_as_words = *key;

    let key_table = mix_in(key_table, &mut key_as_words);

    #[cfg(feature = "zeroize")]
    cipher::zeroize::Zeroize::zeroize(&mut key_as_words);

    key_table
}

/// Fixed, key independent arithmetic progression `S[i] = P + i * Q` mod 2^32.
fn initialize_key_schedule() -> KeySchedule {
    let mut key_table = [0; KEY_SCHEDULE_SIZE];

    key_table[0] = P;
    for i in 1..key_table.len() {
        key_table[i] = key_table[i - 1].wrapping_add(Q);
    }

    key_table
}

fn mix_in(mut key_table: KeySchedule, key_as_words: &mut Key) -> KeySchedule {
    let (mut key_table_index, mut key_as_words_index) = (0, 0);
    let (mut a, mut b) = (0u32, 0u32);

    for _ in 0..MIX_PASSES * max(KEY_WORDS, KEY_SCHEDULE_SIZE) {
        key_table[key_table_index] = rotate_left(
            key_table[key_table_index].wrapping_add(a).wrapping_add(b),
            3,
        );
        a = key_table[key_table_index];

        let ab = a.wrapping_add(b);
        key_as_words[key_as_words_index] =
            rotate_left(key_as_words[key_as_words_index].wrapping_add(ab), rotation_amount(ab));
        b = key_as_words[key_as_words_index];

        key_table_index = (key_table_index + 1) % KEY_SCHEDULE_SIZE;
        key_as_words_index = (key_as_words_index + 1) % KEY_WORDS;
    }

    key_table
}
