//! Turning numeric codes into registry names.

use crate::error::Result;
use crate::registry::CodecRegistry;
use crate::types::{Identifier, Version};

/// Symbolic view of an identifier's prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPrefix<'r> {
    pub version: Version,
    pub codec: &'r str,
    pub hash_function: &'r str,
    pub digest_len: u64,
}

/// Look up the codec and hash function of `id` in `registry`.
pub fn resolve<'r>(id: &Identifier, registry: &'r CodecRegistry) -> Result<ResolvedPrefix<'r>> {
    Ok(ResolvedPrefix {
        version: id.version,
        codec: registry.resolve_codec(id.codec)?,
        hash_function: registry.resolve_hash_function(id.multihash.code())?,
        digest_len: id.multihash.declared_len(),
    })
}
