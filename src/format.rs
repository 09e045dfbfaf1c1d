//! Text renderings of multihash bytes.

use multibase::Base;

/// Lowercase hex, two characters per byte, no prefix.
pub fn to_hex(bytes: &[u8]) -> String {
    hex::encode(bytes)
}

/// Base58 with the Bitcoin alphabet, no multibase prefix.
pub fn to_base58(bytes: &[u8]) -> String {
    Base::Base58Btc.encode(bytes)
}
