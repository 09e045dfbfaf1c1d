//! Multibase text decoding.

use crate::error::{CidError, Result};
use multibase::Base;
use tracing::trace;

/// Length of a legacy (CIDv0) identifier in text form.
pub const LEGACY_TEXT_LEN: usize = 46;

/// Every legacy identifier starts with these characters (base58 of `0x12 0x20`).
pub const LEGACY_TEXT_PREFIX: &str = "Qm";

/// How an identifier's text is encoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextForm {
    /// Bare base58btc, no multibase prefix.
    Legacy,
    /// Multibase indicator followed by the payload.
    Multibase(Base),
}

impl TextForm {
    fn base(self) -> Base {
        match self {
            TextForm::Legacy => Base::Base58Btc,
            TextForm::Multibase(base) => base,
        }
    }
}

/// Work out how `text` is encoded without decoding the payload.
pub fn detect(text: &str) -> Result<TextForm> {
    if text.len() == LEGACY_TEXT_LEN && text.starts_with(LEGACY_TEXT_PREFIX) {
        return Ok(TextForm::Legacy);
    }

    let code = text.chars().next().ok_or(CidError::EmptyInput)?;
    Base::from_code(code)
        .map(TextForm::Multibase)
        .map_err(|_| CidError::UnknownMultibasePrefix(code))
}

/// Decode identifier text into its raw bytes.
pub fn decode(text: &str) -> Result<Vec<u8>> {
    let form = detect(text)?;
    let payload = match form {
        TextForm::Legacy => text,
        // The indicator is whatever `detect` matched, so one char wide.
        TextForm::Multibase(_) => {
            let width = text.chars().next().map_or(0, char::len_utf8);
            &text[width..]
        }
    };

    let base = form.base();
    trace!(?form, payload_len = payload.len(), "decoding multibase payload");

    base.decode(payload).map_err(|_| CidError::InvalidCharacter {
        base: format!("{:?}", base),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const LEGACY: &str = "QmXjkFQjnD8i8ntmwehoAHBfJEApETx8ebScyVzAHqgjpD";

    #[test]
    fn test_detect_legacy() -> Result<()> {
        assert_eq!(detect(LEGACY)?, TextForm::Legacy);
        Ok(())
    }

    #[test]
    fn test_legacy_decodes_whole_text() -> Result<()> {
        let bytes = decode(LEGACY)?;
        assert_eq!(bytes.len(), 34);
        assert_eq!(&bytes[..2], &[0x12, 0x20]);
        Ok(())
    }

    #[test]
    fn test_prefixed_forms() -> Result<()> {
        // 0x01 0x55 0x00 0x00: v1, raw, identity hash, empty digest
        assert_eq!(decode("f01550000")?, vec![0x01, 0x55, 0x00, 0x00]);
        assert_eq!(decode("F01550000")?, vec![0x01, 0x55, 0x00, 0x00]);
        assert_eq!(decode("bafkqaaa")?, vec![0x01, 0x55, 0x00, 0x00]);
        assert_eq!(
            detect("zb2rhe5P4gXftAwvA4eXQ5HJwsER2owDyS9sKaQRRVQPn93bA")?,
            TextForm::Multibase(Base::Base58Btc)
        );
        Ok(())
    }

    #[test]
    fn test_qm_of_wrong_length_is_not_legacy() {
        // 'Q' is not a multibase indicator.
        assert_eq!(
            decode("QmTooShort"),
            Err(CidError::UnknownMultibasePrefix('Q'))
        );
    }

    #[test]
    fn test_unknown_prefix() {
        assert_eq!(decode("!abc"), Err(CidError::UnknownMultibasePrefix('!')));
        assert_eq!(decode("éabc"), Err(CidError::UnknownMultibasePrefix('é')));
    }

    #[test]
    fn test_invalid_character() {
        assert!(matches!(
            decode("f01zz"),
            Err(CidError::InvalidCharacter { .. })
        ));
        // '0' is outside the base58 alphabet.
        let bad_legacy = format!("Qm{}", "0".repeat(LEGACY_TEXT_LEN - 2));
        assert!(matches!(
            decode(&bad_legacy),
            Err(CidError::InvalidCharacter { .. })
        ));
    }

    #[test]
    fn test_empty() {
        assert_eq!(decode(""), Err(CidError::EmptyInput));
    }
}
