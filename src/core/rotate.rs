//! Data-dependent word rotations, section 3 of the RC5 paper.
//!
//! Every amount is reduced to its low five bits before use, so any `u8` (and any
//! register value passed through [rotation_amount]) is a valid argument.

use super::consts::ROTATION_MASK;

/// Reduces a register value to a rotation amount in `0..32`.
#[inline]
pub fn rotation_amount(x: u32) -> u8 {
    // masked to five bits, always fits
    (x & ROTATION_MASK) as u8
}

/// Circular left rotation of `value` by `amount mod 32` bits.
#[inline]
pub fn rotate_left(value: u32, amount: u8) -> u32 {
    value.rotate_left(u32::from(amount) & ROTATION_MASK)
}

/// Circular right rotation of `value` by `amount mod 32` bits.
#[inline]
pub fn rotate_right(value: u32, amount: u8) -> u32 {
    value.rotate_right(u32::from(amount) & ROTATION_MASK)
}
