use thiserror::Error;

/// Every way a CID can fail to decode.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CidError {
    #[error("empty input")]
    EmptyInput,

    #[error("unknown multibase prefix {0:?}")]
    UnknownMultibasePrefix(char),

    #[error("invalid character for {base} encoding")]
    InvalidCharacter { base: String },

    #[error("varint truncated at byte {offset}")]
    TruncatedVarint { offset: usize },

    #[error("varint at byte {offset} exceeds 64 bits")]
    VarintOverflow { offset: usize },

    #[error("varint at byte {offset} is not minimally encoded")]
    VarintNotMinimal { offset: usize },

    #[error("unsupported CID version {0}")]
    UnsupportedVersion(u64),

    #[error("identifier truncated: expected {field} at byte {offset}")]
    TruncatedIdentifier { field: &'static str, offset: usize },

    #[error(
        "multihash length mismatch: declared {declared} digest bytes, \
         found {prefix} prefix + {remaining} remaining bytes"
    )]
    MultihashLengthMismatch {
        declared: u64,
        prefix: usize,
        remaining: usize,
    },

    #[error("unknown codec type {0}")]
    UnknownCodecCode(u64),

    #[error("unknown multihash type {0}")]
    UnknownHashFunctionCode(u64),
}

pub type Result<T> = std::result::Result<T, CidError>;

/// Pipeline stage an error was raised in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Multibase,
    Identifier,
    Prefix,
    Multihash,
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Stage::Multibase => write!(f, "decoding multibase"),
            Stage::Identifier => write!(f, "decoding CID"),
            Stage::Prefix => write!(f, "decoding CID prefix"),
            Stage::Multihash => write!(f, "decoding multihash"),
        }
    }
}

/// A [`CidError`] tagged with the stage that produced it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{stage} failed: {source}")]
pub struct InspectError {
    pub stage: Stage,
    #[source]
    pub source: CidError,
}

impl InspectError {
    pub fn kind(&self) -> &CidError {
        &self.source
    }
}

/// Attach a [`Stage`] to a stage-local result.
pub(crate) trait StageExt<T> {
    fn stage(self, stage: Stage) -> std::result::Result<T, InspectError>;
}

impl<T> StageExt<T> for Result<T> {
    fn stage(self, stage: Stage) -> std::result::Result<T, InspectError> {
        self.map_err(|source| InspectError { stage, source })
    }
}
