//! Multihash parsing: `<code varint><length varint><digest>`.

use crate::error::{CidError, Result};
use crate::types::Multihash;
use crate::varint;

/// Split a multihash into code, declared length and digest.
///
/// The digest must fill the rest of `bytes` exactly; a short or long tail is
/// a [`CidError::MultihashLengthMismatch`].
pub fn parse(bytes: &[u8]) -> Result<Multihash> {
    let (code, code_len) = varint::decode(bytes, 0)?;
    let (declared_len, len_len) = varint::decode(bytes, code_len)?;

    let prefix_len = code_len + len_len;
    // Varints are rejected unless minimal, so the header re-encodes exactly.
    debug_assert_eq!(
        varint::encoded_len(code) + varint::encoded_len(declared_len),
        prefix_len
    );
    let remaining = bytes.len() - prefix_len;

    if declared_len != remaining as u64 {
        return Err(CidError::MultihashLengthMismatch {
            declared: declared_len,
            prefix: prefix_len,
            remaining,
        });
    }

    Ok(Multihash {
        code,
        declared_len,
        prefix_len,
        bytes: bytes.to_vec(),
    })
}
