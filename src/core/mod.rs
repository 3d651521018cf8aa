//! Core implementation of the RC5 paper, fixed to 32 bit words, 12 rounds and a 16 byte key.
//! In this section we discuss how the RC5 paper was implemented and what makes this
//! implementation correct, with regards to the paper. We also mention the differences where
//! they exist.
//!
//! ## Naming
//! In comparison to the paper the implementation uses a more natural naming convention.
//!
//! | RC5 paper | Implementation      |
//! |-----------|---------------------|
//! | w         | [WORD_BITS]         |
//! | u         | [WORD_BYTES]        |
//! | r         | [ROUNDS]            |
//! | b         | [KEY_SIZE]          |
//! | c         | [KEY_WORDS]         |
//! | t         | [KEY_SCHEDULE_SIZE] |
//! | K         | [KeyBytes]          |
//! | P         | [P]                 |
//! | Q         | [Q]                 |
//! | L         | [Key]               |
//! | S         | [KeySchedule]       |
//!
//! ## Primitive operations
//!
//! Operations as defined in the section 3 of the RC5 paper.
//!
//! 1. Two's complement addition and subtraction of words: [u32::wrapping_add], [u32::wrapping_sub].
//! 2. Bitwise exclusive or of words: [std::ops::BitXor::bitxor].
//! 3. Left/Right rotation of words: [rotate_left], [rotate_right]. The rotation amount is
//!    always reduced modulo 32 first, see [rotation_amount].
//!
//! ## Differences
//!
//! The paper mixes the key in place. Here the caller's [Key] is never written to;
//! [expand_key_schedule] mixes a private copy and drops it.

pub mod bytes;
pub mod consts;
pub mod rotate;
pub mod schedule;

pub use bytes::*;
pub use consts::*;
pub use rotate::*;
pub use schedule::*;

/// Encrypts `block` with an already expanded key table.
pub fn encrypt_words(block: Block, key: &KeySchedule) -> Block {
    let [mut a, mut b] = block;

    a = a.wrapping_add(key[0]);
    b = b.wrapping_add(key[1]);

    for i in 1..=ROUNDS {
        a = rotate_left(a ^ b, rotation_amount(b)).wrapping_add(key[2 * i]);
        b = rotate_left(b ^ a, rotation_amount(a)).wrapping_add(key[2 * i + 1]);
    }

    [a, b]
}

/// Decrypts `block` with an already expanded key table. Inverse of [encrypt_words].
pub fn decrypt_words(block: Block, key: &KeySchedule) -> Block {
    let [mut a, mut b] = block;

    for i in (1..=ROUNDS).rev() {
        b = rotate_right(b.wrapping_sub(key[2 * i + 1]), rotation_amount(a)) ^ a;
        a = rotate_right(a.wrapping_sub(key[2 * i]), rotation_amount(b)) ^ b;
    }

    b = b.wrapping_sub(key[1]);
    a = a.wrapping_sub(key[0]);

    [a, b]
}

/// Encrypts a single block under `key`, expanding the key table for this call only.
///
/// ```
/// let ciphertext = rc5::encrypt([0, 0], &[0, 0, 0, 0]);
/// assert_eq!(ciphertext, [0xEEDBA521, 0x6D8F4B15]);
/// ```
pub fn encrypt(block: Block, key: &Key) -> Block {
    encrypt_words(block, &expand_key_schedule(key))
}

/// Decrypts a single block under `key`, expanding the key table for this call only.
///
/// ```
/// let plaintext = rc5::decrypt([0xEEDBA521, 0x6D8F4B15], &[0, 0, 0, 0]);
/// assert_eq!(plaintext, [0, 0]);
/// ```
pub fn decrypt(block: Block, key: &Key) -> Block {
    decrypt_words(block, &expand_key_schedule(key))
}

/// In place variant of [encrypt].
pub fn encrypt_block(block: &mut Block, key: &Key) {
    *block = encrypt(*block, key);
}

/// In place variant of [decrypt].
pub fn decrypt_block(block: &mut Block, key: &Key) {
    *block = decrypt(*block, key);
}
