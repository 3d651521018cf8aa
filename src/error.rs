/// The `Error` enum represents the inputs rejected when building words out of
/// caller supplied byte slices.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    #[error("invalid key length: `{0}` bytes; RC5-32/12/16 takes exactly 16")]
    InvalidKeyLength(usize),
    #[error("invalid block length: `{0}` bytes; RC5-32/12/16 blocks are exactly 8")]
    InvalidBlockLength(usize),
}
