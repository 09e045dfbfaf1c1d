//! Unsigned LEB128 varints as used throughout multiformats.
//!
//! Each byte carries 7 value bits, least significant group first; the high
//! bit is set on every byte except the last. A `u64` never needs more than
//! [`MAX_VARINT_LEN`] bytes.

use crate::error::{CidError, Result};

/// Longest encoding of a `u64`.
pub const MAX_VARINT_LEN: usize = 10;

const CONTINUATION: u8 = 0x80;
const GROUP_MASK: u8 = 0x7f;

/// Decode a varint starting at `offset`.
///
/// Returns the value and the number of bytes consumed.
pub fn decode(bytes: &[u8], offset: usize) -> Result<(u64, usize)> {
    let mut value: u64 = 0;

    for i in 0..MAX_VARINT_LEN {
        let byte = *bytes
            .get(offset + i)
            .ok_or(CidError::TruncatedVarint { offset })?;

        // The tenth byte only has room for bit 63.
        if i == MAX_VARINT_LEN - 1 && byte > 0x01 {
            return Err(CidError::VarintOverflow { offset });
        }

        value |= u64::from(byte & GROUP_MASK) << (7 * i);

        if byte & CONTINUATION == 0 {
            if byte == 0 && i > 0 {
                return Err(CidError::VarintNotMinimal { offset });
            }
            return Ok((value, i + 1));
        }
    }

    Err(CidError::VarintOverflow { offset })
}

/// Encode `value` minimally.
pub fn encode(mut value: u64) -> Vec<u8> {
    let mut out = Vec::with_capacity(MAX_VARINT_LEN);
    while value >= u64::from(CONTINUATION) {
        out.push((value as u8 & GROUP_MASK) | CONTINUATION);
        value >>= 7;
    }
    out.push(value as u8);
    out
}

/// Number of bytes [`encode`] produces for `value`.
pub fn encoded_len(value: u64) -> usize {
    let bits = 64 - value.leading_zeros() as usize;
    bits.max(1).div_ceil(7)
}
