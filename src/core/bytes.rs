//! Little-endian conversion between byte strings and words, section 4.3 step 1 of the
//! RC5 paper. Word `i` occupies bytes `4i..4i + 4`.

use super::consts::{
    Block, BlockBytes, Key, KeyBytes, BLOCK_SIZE, KEY_SIZE, KEY_WORDS, WORD_BYTES,
};
use crate::Error;

fn word_at(bytes: &[u8], index: usize) -> u32 {
    let mut word = [0u8; WORD_BYTES];
    word.copy_from_slice(&bytes[index * WORD_BYTES..(index + 1) * WORD_BYTES]);
    u32::from_le_bytes(word)
}

pub fn key_from_bytes(key: &KeyBytes) -> Key {
    let mut key_as_words = [0; KEY_WORDS];
    for (i, word) in key_as_words.iter_mut().enumerate() {
        *word = word_at(key, i);
    }

    key_as_words
}

pub fn words_from_block(block: &BlockBytes) -> Block {
    [word_at(block, 0), word_at(block, 1)]
}

pub fn block_from_words(words: Block, out_block: &mut BlockBytes) {
    let (left, right) = out_block.split_at_mut(WORD_BYTES);

    left.copy_from_slice(&words[0].to_le_bytes());
    right.copy_from_slice(&words[1].to_le_bytes());
}

pub fn block_to_bytes(words: Block) -> [u8; BLOCK_SIZE] {
    let mut out = [0; BLOCK_SIZE];
    block_from_words(words, BlockBytes::from_mut_slice(&mut out));
    out
}

/// Reads a key from a byte slice, which must be exactly 16 bytes long.
pub fn key_from_slice(key: &[u8]) -> Result<Key, Error> {
    if key.len() != KEY_SIZE {
        log::debug!("rejecting {} byte key, expected {}", key.len(), KEY_SIZE);
        return Err(Error::InvalidKeyLength(key.len()));
    }

    Ok(key_from_bytes(KeyBytes::from_slice(key)))
}

/// Reads a block from a byte slice, which must be exactly 8 bytes long.
pub fn block_from_slice(block: &[u8]) -> Result<Block, Error> {
    if block.len() != BLOCK_SIZE {
        log::debug!("rejecting {} byte block, expected {}", block.len(), BLOCK_SIZE);
        return Err(Error::InvalidBlockLength(block.len()));
    }

    Ok(words_from_block(BlockBytes::from_slice(block)))
}
