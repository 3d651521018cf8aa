use std::fmt;

use cipher::consts::{U16, U8};

use crate::core::{
    block_from_words, decrypt_words, encrypt_words, expand_key_schedule, key_from_bytes,
    words_from_block, KeySchedule,
};
use cipher::{impl_simple_block_encdec, AlgorithmName, KeyInit};
use cipher::{inout::InOut, Block, BlockCipher, KeySizeUser};

/// RC5-32/12/16 behind the RustCrypto [cipher] traits.
///
/// The key table is expanded once in [KeyInit::new] and reused for every block.
///
/// ```
/// use hex_literal::hex;
/// use rc5::cipher::{generic_array::GenericArray, BlockDecrypt, BlockEncrypt, KeyInit};
/// use rc5::RC5_32_12_16;
///
/// let cipher = RC5_32_12_16::new(&GenericArray::from(hex!("000102030405060708090A0B0C0D0E0F")));
///
/// let mut block = GenericArray::from(hex!("0011223344556677"));
/// cipher.encrypt_block(&mut block);
/// assert_eq!(block[..], hex!("2DDC149BCF088B9E"));
///
/// cipher.decrypt_block(&mut block);
/// assert_eq!(block[..], hex!("0011223344556677"));
/// ```
#[allow(non_camel_case_types)]
#[derive(Clone)]
pub struct RC5_32_12_16 {
    key_table: KeySchedule,
}

impl RC5_32_12_16 {
    fn encrypt_inout(&self, mut block: InOut<'_, '_, Block<Self>>) {
        let words = encrypt_words(words_from_block(block.get_in()), &self.key_table);
        block_from_words(words, block.get_out());
    }

    fn decrypt_inout(&self, mut block: InOut<'_, '_, Block<Self>>) {
        let words = decrypt_words(words_from_block(block.get_in()), &self.key_table);
        block_from_words(words, block.get_out());
    }
}

impl BlockCipher for RC5_32_12_16 {}

impl KeySizeUser for RC5_32_12_16 {
    type KeySize = U16;
}

impl KeyInit for RC5_32_12_16 {
    fn new(key: &cipher::Key<Self>) -> Self {
        log::trace!("expanding RC5-32/12/16 key table");
        Self {
            key_table: expand_key_schedule(&key_from_bytes(key)),
        }
    }
}

impl AlgorithmName for RC5_32_12_16 {
    fn write_alg_name(f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("RC5-32/12/16")
    }
}

impl fmt::Debug for RC5_32_12_16 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("RC5-32/12/16 { ... }")
    }
}

impl_simple_block_encdec!(
    RC5_32_12_16, U8, cipher, block,
    encrypt: {
        cipher.encrypt_inout(block);
    }
    decrypt: {
        cipher.decrypt_inout(block);
    }
);

#[cfg(feature = "zeroize")]
impl cipher::zeroize::ZeroizeOnDrop for RC5_32_12_16 {}

#[cfg(feature = "zeroize")]
impl Drop for RC5_32_12_16 {
    fn drop(&mut self) {
        cipher::zeroize::Zeroize::zeroize(&mut self.key_table);
    }
}
