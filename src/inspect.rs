//! The full decode pipeline and its report.

use crate::base;
use crate::error::{InspectError, Stage, StageExt};
use crate::format::{to_base58, to_hex};
use crate::hash;
use crate::identifier;
use crate::registry::CodecRegistry;
use crate::resolve::resolve;
use crate::types::{Identifier, Version};
use serde::Serialize;
use tracing::debug;

/// Everything the decoder learned about one identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Inspection {
    pub version: Version,
    pub codec: String,
    pub codec_code: u64,
    pub hash_function: String,
    pub hash_function_code: u64,
    /// Bytes taken by the multihash code and length fields.
    pub prefix_len: usize,
    pub digest_len: usize,
    /// Base58btc of the full multihash.
    pub base58: String,
    /// Hex of the full multihash.
    pub hex: String,
}

impl Inspection {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl std::fmt::Display for Inspection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, " CID successfully parsed!")?;
        writeln!(f, "--------------------------")?;
        writeln!(f, "PREFIX | version: {}", self.version)?;
        writeln!(f, "PREFIX | codec: {}", self.codec)?;
        writeln!(f, "PREFIX | hash type: {}", self.hash_function)?;
        writeln!(
            f,
            "MHASH  | prefix: {} bytes, hash: {} bytes",
            self.prefix_len, self.digest_len
        )?;
        writeln!(f, "MHASH  | B58: {}", self.base58)?;
        write!(f, "MHASH  | HEX: {}", self.hex)
    }
}

/// Decodes identifiers against a borrowed registry.
#[derive(Debug, Clone, Copy)]
pub struct Inspector<'r> {
    registry: &'r CodecRegistry,
}

impl Default for Inspector<'static> {
    fn default() -> Self {
        Self::new(CodecRegistry::global())
    }
}

impl<'r> Inspector<'r> {
    pub fn new(registry: &'r CodecRegistry) -> Self {
        Self { registry }
    }

    /// Decode `text` into its structural parts without resolving names.
    pub fn decode(&self, text: &str) -> Result<Identifier, InspectError> {
        let bytes = base::decode(text).stage(Stage::Multibase)?;
        let form = identifier::parse(&bytes).stage(Stage::Identifier)?;
        let multihash = hash::parse(form.multihash()).stage(Stage::Multihash)?;

        debug!(
            version = %form.version(),
            codec = form.codec(),
            hash_code = multihash.code(),
            digest_len = multihash.declared_len(),
            "decoded identifier"
        );

        Ok(Identifier {
            version: form.version(),
            codec: form.codec(),
            multihash,
        })
    }

    /// Decode `text`, resolve its codes and render the multihash.
    pub fn inspect(&self, text: &str) -> Result<Inspection, InspectError> {
        let id = self.decode(text)?;
        let prefix = resolve(&id, self.registry).stage(Stage::Prefix)?;
        let mh = &id.multihash;

        Ok(Inspection {
            version: prefix.version,
            codec: prefix.codec.to_string(),
            codec_code: id.codec,
            hash_function: prefix.hash_function.to_string(),
            hash_function_code: mh.code(),
            prefix_len: mh.prefix_len(),
            digest_len: mh.digest().len(),
            base58: to_base58(mh.as_bytes()),
            hex: to_hex(mh.as_bytes()),
        })
    }
}

/// [`Inspector::inspect`] against the built-in registry.
pub fn inspect(text: &str) -> Result<Inspection, InspectError> {
    Inspector::default().inspect(text)
}

/// [`Inspector::decode`] against the built-in registry.
pub fn decode(text: &str) -> Result<Identifier, InspectError> {
    Inspector::default().decode(text)
}
