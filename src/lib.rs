//! Implementation of the RC5 block cipher with 32 bit words, 12 rounds and a 128 bit key
//! (RC5-32/12/16), as described in the [RC5 paper].
//!
//! Two interfaces are offered:
//!
//! * word level functions ([encrypt], [decrypt], [encrypt_block], [decrypt_block]) that take
//!   the key and block as little-endian `u32` words and expand the key table on every call,
//! * [RC5_32_12_16], implementing the RustCrypto [cipher] traits over bytes, which expands the
//!   key table once.
//!
//! ```
//! let key = [0x19465F91, 0x51B241BE, 0x01A55563, 0x91CEA910];
//!
//! let mut block = [0xEEDBA521, 0x6D8F4B15];
//! rc5::encrypt_block(&mut block, &key);
//! assert_eq!(block, [0xAC13C0F7, 0x52892B5B]);
//!
//! rc5::decrypt_block(&mut block, &key);
//! assert_eq!(block, [0xEEDBA521, 0x6D8F4B15]);
//! ```
//!
//! No modes of operation or padding are provided and the data dependent rotations are not
//! constant time.
//!
//! [RC5 paper]: https://www.grc.com/r&d/rc5.pdf
#![deny(unsafe_code)]
#![warn(rust_2018_idioms)]

pub use cipher;

mod block_cipher;
pub mod core;
mod error;

pub use crate::block_cipher::RC5_32_12_16;
pub use crate::core::*;
pub use crate::error::Error;
