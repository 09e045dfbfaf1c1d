//! # cid-inspect
//!
//! Decode Content Identifiers (CIDs) into their parts.
//!
//! A CID is text in some multibase encoding wrapping a binary layout of
//! varints: an optional version and content-type codec, followed by a
//! multihash (hash function code, digest length, digest). The legacy v0 form
//! is just a base58btc sha2-256 multihash.
//!
//! ## Features
//!
//! - **Both CID versions**: bare v0 multihashes and explicit v1 identifiers
//! - **Multibase**: every base known to the `multibase` crate, plus the
//!   prefix-less legacy form
//! - **Strict parsing**: minimal varints, exact digest lengths, no guessing
//! - **Extensible registry**: built-in codec and hash function tables that
//!   can be extended per decoder
//!
//! ## Quick Start
//!
//! ```
//! use cid_inspect::{inspect, Version};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let report = inspect("QmXjkFQjnD8i8ntmwehoAHBfJEApETx8ebScyVzAHqgjpD")?;
//!
//! assert_eq!(report.version, Version::V0);
//! assert_eq!(report.codec, "protobuf");
//! assert_eq!(report.hash_function, "sha2-256");
//! assert_eq!(report.digest_len, 32);
//! # Ok(())
//! # }
//! ```
//!
//! ## Custom codes
//!
//! ```
//! use cid_inspect::{CodecRegistry, CodeTableEntry, Inspector};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let registry = CodecRegistry::builtin()
//!     .with_codecs([CodeTableEntry::new(0x0300, "my-format")]);
//! let inspector = Inspector::new(&registry);
//!
//! // v1, codec 0x0300, identity hash of zero bytes
//! let report = inspector.inspect("f0180060000")?;
//! assert_eq!(report.codec, "my-format");
//! # Ok(())
//! # }
//! ```

pub mod base;
pub mod error;
pub mod format;
pub mod hash;
pub mod identifier;
pub mod inspect;
pub mod registry;
pub mod resolve;
pub mod types;
pub mod varint;

// Re-export commonly used items
pub use error::{CidError, InspectError, Result, Stage};
pub use identifier::CidForm;
pub use inspect::{decode, inspect, Inspection, Inspector};
pub use registry::{CodeTableEntry, CodecRegistry};
pub use resolve::{resolve, ResolvedPrefix};
pub use types::{Identifier, Multihash, Version};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
