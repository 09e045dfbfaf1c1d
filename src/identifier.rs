//! Splitting raw CID bytes into version, codec and multihash.

use crate::error::{CidError, Result};
use crate::registry::{DAG_PROTOBUF, SHA2_256, SHA2_256_LEN};
use crate::types::Version;
use crate::varint;
use tracing::trace;

/// Byte length of a legacy identifier: sha2-256 header plus 32 byte digest.
pub const LEGACY_BYTE_LEN: usize = 34;

/// The two binary layouts a CID can take.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CidForm<'a> {
    /// A bare sha2-256 multihash.
    Legacy { multihash: &'a [u8] },
    /// `<version><codec><multihash>`, version already checked to be 1.
    Current { codec: u64, multihash: &'a [u8] },
}

impl<'a> CidForm<'a> {
    pub fn version(&self) -> Version {
        match self {
            CidForm::Legacy { .. } => Version::V0,
            CidForm::Current { .. } => Version::V1,
        }
    }

    pub fn codec(&self) -> u64 {
        match self {
            CidForm::Legacy { .. } => DAG_PROTOBUF,
            CidForm::Current { codec, .. } => *codec,
        }
    }

    pub fn multihash(&self) -> &'a [u8] {
        match self {
            CidForm::Legacy { multihash } | CidForm::Current { multihash, .. } => *multihash,
        }
    }
}

fn is_legacy(bytes: &[u8]) -> bool {
    bytes.len() == LEGACY_BYTE_LEN
        && bytes[0] as u64 == SHA2_256
        && bytes[1] as u64 == SHA2_256_LEN
}

/// Classify `bytes` and delimit the embedded multihash.
///
/// The legacy check runs first, so a current-form buffer that happens to be
/// 34 bytes starting with `0x12 0x20` is read as legacy.
pub fn parse(bytes: &[u8]) -> Result<CidForm<'_>> {
    if bytes.is_empty() {
        return Err(CidError::EmptyInput);
    }

    if is_legacy(bytes) {
        trace!("legacy identifier");
        return Ok(CidForm::Legacy { multihash: bytes });
    }

    let (version, version_len) = varint::decode(bytes, 0)?;
    if version != Version::V1.as_u64() {
        return Err(CidError::UnsupportedVersion(version));
    }

    let mut offset = version_len;
    if offset >= bytes.len() {
        return Err(CidError::TruncatedIdentifier {
            field: "codec",
            offset,
        });
    }

    let (codec, codec_len) = varint::decode(bytes, offset)?;
    offset += codec_len;
    if offset >= bytes.len() {
        return Err(CidError::TruncatedIdentifier {
            field: "multihash",
            offset,
        });
    }

    trace!(codec, multihash_offset = offset, "current identifier");
    Ok(CidForm::Current {
        codec,
        multihash: &bytes[offset..],
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::RAW;

    #[test]
    fn test_legacy_form() -> Result<()> {
        let mut bytes = vec![0x12, 0x20];
        bytes.extend_from_slice(&[0x5a; 32]);

        let form = parse(&bytes)?;
        assert_eq!(form, CidForm::Legacy { multihash: &bytes });
        assert_eq!(form.version(), Version::V0);
        assert_eq!(form.codec(), DAG_PROTOBUF);
        Ok(())
    }

    #[test]
    fn test_current_form() -> Result<()> {
        let bytes = [0x01, 0x55, 0x12, 0x02, 0xaa, 0xbb];

        let form = parse(&bytes)?;
        assert_eq!(form.version(), Version::V1);
        assert_eq!(form.codec(), RAW);
        assert_eq!(form.multihash(), &[0x12, 0x02, 0xaa, 0xbb]);
        Ok(())
    }

    #[test]
    fn test_multibyte_codec() -> Result<()> {
        // 0x0129 dag-json
        let bytes = [0x01, 0xa9, 0x02, 0x00, 0x00];

        let form = parse(&bytes)?;
        assert_eq!(form.codec(), 0x0129);
        assert_eq!(form.multihash(), &[0x00, 0x00]);
        Ok(())
    }

    #[test]
    fn test_sha256_header_with_wrong_length_is_not_legacy() {
        // 0x12 read as a version.
        let bytes = [0x12, 0x20, 0x00];
        assert_eq!(parse(&bytes), Err(CidError::UnsupportedVersion(0x12)));
    }

    #[test]
    fn test_unsupported_versions() {
        assert_eq!(
            parse(&[0x00, 0x70, 0x00, 0x00]),
            Err(CidError::UnsupportedVersion(0))
        );
        assert_eq!(
            parse(&[0x02, 0x70, 0x00, 0x00]),
            Err(CidError::UnsupportedVersion(2))
        );
    }

    #[test]
    fn test_empty() {
        assert_eq!(parse(&[]), Err(CidError::EmptyInput));
    }

    #[test]
    fn test_truncation() {
        assert_eq!(parse(&[0x80]), Err(CidError::TruncatedVarint { offset: 0 }));
        assert_eq!(
            parse(&[0x01]),
            Err(CidError::TruncatedIdentifier {
                field: "codec",
                offset: 1
            })
        );
        assert_eq!(
            parse(&[0x01, 0x55]),
            Err(CidError::TruncatedIdentifier {
                field: "multihash",
                offset: 2
            })
        );
        assert_eq!(
            parse(&[0x01, 0xf1]),
            Err(CidError::TruncatedVarint { offset: 1 })
        );
    }
}
