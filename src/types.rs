use serde::Serialize;

/// CID version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "u64")]
pub enum Version {
    /// Bare sha2-256 multihash, implicitly dag-pb.
    V0,
    /// Explicit version, codec and multihash.
    V1,
}

impl Version {
    pub fn as_u64(self) -> u64 {
        match self {
            Version::V0 => 0,
            Version::V1 => 1,
        }
    }
}

impl From<Version> for u64 {
    fn from(version: Version) -> Self {
        version.as_u64()
    }
}

impl std::fmt::Display for Version {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_u64())
    }
}

/// A parsed multihash.
///
/// Holds the full encoding; the digest is the tail after the two header
/// varints and always exactly `declared_len` bytes long.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Multihash {
    pub(crate) code: u64,
    pub(crate) declared_len: u64,
    pub(crate) prefix_len: usize,
    pub(crate) bytes: Vec<u8>,
}

impl Multihash {
    /// Hash function code.
    pub fn code(&self) -> u64 {
        self.code
    }

    /// Digest length as declared in the header.
    pub fn declared_len(&self) -> u64 {
        self.declared_len
    }

    /// Bytes taken by the code and length varints.
    pub fn prefix_len(&self) -> usize {
        self.prefix_len
    }

    pub fn digest(&self) -> &[u8] {
        &self.bytes[self.prefix_len..]
    }

    /// Full encoding: code, length, digest.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }
}

/// A decoded Content Identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identifier {
    pub version: Version,
    pub codec: u64,
    pub multihash: Multihash,
}
