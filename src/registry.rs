//! Code tables mapping multicodec numbers to symbolic names.
//!
//! Two tables are kept apart: content types (what the referenced block is)
//! and hash functions (how its multihash was computed). Both are filled once
//! and only read afterwards, so a registry can be shared freely between
//! threads.

use crate::error::{CidError, Result};
use once_cell::sync::Lazy;
use std::collections::HashMap;

pub const RAW: u64 = 0x55;
pub const DAG_PROTOBUF: u64 = 0x70;
pub const DAG_CBOR: u64 = 0x71;

pub const IDENTITY: u64 = 0x00;
pub const SHA2_256: u64 = 0x12;

/// Digest length of [`SHA2_256`].
pub const SHA2_256_LEN: u64 = 32;

const BLAKE2B_MIN: u64 = 0xb201;
const BLAKE2S_MIN: u64 = 0xb241;

const CODECS: &[(u64, &str)] = &[
    (RAW, "raw"),
    (DAG_PROTOBUF, "protobuf"),
    (DAG_CBOR, "cbor"),
    (0x72, "libp2p-key"),
    (0x78, "git-raw"),
    (0x85, "dag-jose"),
    (0x90, "eth-block"),
    (0x91, "eth-block-list"),
    (0x92, "eth-tx-trie"),
    (0x93, "eth-tx"),
    (0x94, "eth-tx-receipt-trie"),
    (0x95, "eth-tx-receipt"),
    (0x96, "eth-state-trie"),
    (0x97, "eth-account-snapshot"),
    (0x98, "eth-storage-trie"),
    (0xb0, "bitcoin-block"),
    (0xb1, "bitcoin-tx"),
    (0xc0, "zcash-block"),
    (0xc1, "zcash-tx"),
    (0xe0, "decred-block"),
    (0xe1, "decred-tx"),
    (0xf0, "dash-block"),
    (0xf1, "dash-tx"),
    (0x0129, "dag-json"),
    (0xf101, "fil-commitment-unsealed"),
    (0xf102, "fil-commitment-sealed"),
];

const HASH_FUNCTIONS: &[(u64, &str)] = &[
    (IDENTITY, "identity"),
    (0x11, "sha1"),
    (SHA2_256, "sha2-256"),
    (0x13, "sha2-512"),
    (0x14, "sha3-512"),
    (0x15, "sha3-384"),
    (0x16, "sha3-256"),
    (0x17, "sha3-224"),
    (0x18, "shake-128"),
    (0x19, "shake-256"),
    (0x1a, "keccak-224"),
    (0x1b, "keccak-256"),
    (0x1c, "keccak-384"),
    (0x1d, "keccak-512"),
    (0x1e, "blake3"),
    (0x22, "murmur3-x64-64"),
    (0x56, "dbl-sha2-256"),
    (0xd5, "md5"),
    (0x1012, "sha2-256-trunc254-padded"),
    (0x1013, "sha2-224"),
    (0x1014, "sha2-512-224"),
    (0x1015, "sha2-512-256"),
    (0x1100, "x11"),
    (0xb401, "poseidon-bls12_381-a2-fc1"),
];

/// One row of a code table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeTableEntry {
    pub code: u64,
    pub name: String,
}

impl CodeTableEntry {
    pub fn new(code: u64, name: impl Into<String>) -> Self {
        Self {
            code,
            name: name.into(),
        }
    }
}

impl From<(u64, &str)> for CodeTableEntry {
    fn from((code, name): (u64, &str)) -> Self {
        Self::new(code, name)
    }
}

#[derive(Debug, Clone, Default)]
struct CodeTable {
    by_code: HashMap<u64, String>,
    by_name: HashMap<String, u64>,
}

impl CodeTable {
    fn insert(&mut self, entry: CodeTableEntry) {
        if let Some(old) = self.by_code.insert(entry.code, entry.name.clone()) {
            self.by_name.remove(&old);
        }
        self.by_name.insert(entry.name, entry.code);
    }

    fn name(&self, code: u64) -> Option<&str> {
        self.by_code.get(&code).map(String::as_str)
    }

    fn code(&self, name: &str) -> Option<u64> {
        self.by_name.get(name).copied()
    }
}

static BUILTIN: Lazy<CodecRegistry> = Lazy::new(CodecRegistry::builtin);

/// Content-type and hash-function tables.
#[derive(Debug, Clone, Default)]
pub struct CodecRegistry {
    codecs: CodeTable,
    hash_functions: CodeTable,
}

impl CodecRegistry {
    /// Registry with no entries at all.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Registry holding the built-in tables.
    pub fn builtin() -> Self {
        let blake2b = (0..64u64).map(|i| {
            CodeTableEntry::new(BLAKE2B_MIN + i, format!("blake2b-{}", (i + 1) * 8))
        });
        let blake2s = (0..32u64).map(|i| {
            CodeTableEntry::new(BLAKE2S_MIN + i, format!("blake2s-{}", (i + 1) * 8))
        });

        Self::empty()
            .with_codecs(CODECS.iter().copied().map(CodeTableEntry::from))
            .with_hash_functions(HASH_FUNCTIONS.iter().copied().map(CodeTableEntry::from))
            .with_hash_functions(blake2b)
            .with_hash_functions(blake2s)
    }

    /// Process-wide built-in registry, built on first use.
    pub fn global() -> &'static CodecRegistry {
        &BUILTIN
    }

    /// Add content-type entries, replacing any with the same code.
    pub fn with_codecs<I>(mut self, entries: I) -> Self
    where
        I: IntoIterator<Item = CodeTableEntry>,
    {
        for entry in entries {
            self.codecs.insert(entry);
        }
        self
    }

    /// Add hash-function entries, replacing any with the same code.
    pub fn with_hash_functions<I>(mut self, entries: I) -> Self
    where
        I: IntoIterator<Item = CodeTableEntry>,
    {
        for entry in entries {
            self.hash_functions.insert(entry);
        }
        self
    }

    pub fn resolve_codec(&self, code: u64) -> Result<&str> {
        self.codecs
            .name(code)
            .ok_or(CidError::UnknownCodecCode(code))
    }

    pub fn resolve_hash_function(&self, code: u64) -> Result<&str> {
        self.hash_functions
            .name(code)
            .ok_or(CidError::UnknownHashFunctionCode(code))
    }

    pub fn codec_code(&self, name: &str) -> Option<u64> {
        self.codecs.code(name)
    }

    pub fn hash_function_code(&self, name: &str) -> Option<u64> {
        self.hash_functions.code(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_lookups() -> Result<()> {
        let registry = CodecRegistry::global();

        assert_eq!(registry.resolve_codec(RAW)?, "raw");
        assert_eq!(registry.resolve_codec(DAG_PROTOBUF)?, "protobuf");
        assert_eq!(registry.resolve_codec(0xf102)?, "fil-commitment-sealed");
        assert_eq!(registry.resolve_hash_function(SHA2_256)?, "sha2-256");
        assert_eq!(registry.resolve_hash_function(IDENTITY)?, "identity");
        Ok(())
    }

    #[test]
    fn test_blake2_families() -> Result<()> {
        let registry = CodecRegistry::builtin();

        assert_eq!(registry.resolve_hash_function(0xb201)?, "blake2b-8");
        assert_eq!(registry.resolve_hash_function(0xb220)?, "blake2b-256");
        assert_eq!(registry.resolve_hash_function(0xb240)?, "blake2b-512");
        assert_eq!(registry.resolve_hash_function(0xb241)?, "blake2s-8");
        assert_eq!(registry.resolve_hash_function(0xb260)?, "blake2s-256");
        assert!(registry.resolve_hash_function(0xb261).is_err());
        Ok(())
    }

    #[test]
    fn test_unknown_codes_are_errors() {
        let registry = CodecRegistry::global();

        assert_eq!(
            registry.resolve_codec(0x9999),
            Err(CidError::UnknownCodecCode(0x9999))
        );
        assert_eq!(
            registry.resolve_hash_function(0x9999),
            Err(CidError::UnknownHashFunctionCode(0x9999))
        );
    }

    #[test]
    fn test_tables_do_not_overlap() {
        let registry = CodecRegistry::global();

        // 0x55 is raw as a codec but means nothing as a hash function.
        assert!(registry.resolve_codec(RAW).is_ok());
        assert!(registry.resolve_hash_function(RAW).is_err());
        // 0x12 is sha2-256 as a hash function, nothing as a codec.
        assert!(registry.resolve_codec(SHA2_256).is_err());
    }

    #[test]
    fn test_extension_and_reverse_lookup() -> Result<()> {
        let registry = CodecRegistry::builtin()
            .with_codecs([CodeTableEntry::new(0x0200, "json")])
            .with_codecs([CodeTableEntry::new(RAW, "raw-bytes")]);

        assert_eq!(registry.resolve_codec(0x0200)?, "json");
        assert_eq!(registry.resolve_codec(RAW)?, "raw-bytes");
        assert_eq!(registry.codec_code("raw-bytes"), Some(RAW));
        assert_eq!(registry.codec_code("raw"), None);
        assert_eq!(registry.hash_function_code("sha2-256"), Some(SHA2_256));

        // The global registry is untouched.
        assert_eq!(CodecRegistry::global().resolve_codec(RAW)?, "raw");
        Ok(())
    }

    #[test]
    fn test_empty_registry() {
        let registry = CodecRegistry::empty();
        assert!(registry.resolve_codec(RAW).is_err());
    }
}
