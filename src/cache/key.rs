//! Cache Key Module
//!
//! Namespaces and one-way key derivation.

use std::fmt;

use serde::Serialize;
use sha2::{Digest, Sha256};

/// Byte placed between key parts. 0xFF never occurs in well-formed UTF-8,
/// so part boundaries cannot be forged by part contents.
const PART_SEPARATOR: u8 = 0xFF;

// == Namespace ==
/// Logical partition of the store; also selects the TTL class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Namespace {
    Comments,
    Metadata,
    Analysis,
}

impl Namespace {
    /// All namespaces, in reporting order.
    pub const ALL: [Namespace; 3] = [Namespace::Comments, Namespace::Metadata, Namespace::Analysis];

    /// Stable tag hashed as the first key part.
    pub fn as_str(&self) -> &'static str {
        match self {
            Namespace::Comments => "comments",
            Namespace::Metadata => "metadata",
            Namespace::Analysis => "analysis",
        }
    }
}

impl fmt::Display for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// == Cache Key ==
/// Hex-encoded SHA-256 digest identifying one cache entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey(String);

impl CacheKey {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// == Derive Key ==
/// Derives the key for `namespace` and its identifying `parts`.
///
/// Pure and deterministic: identical inputs give identical keys in any
/// process. Empty parts are significant, so `("v1", "")` and `("v1",)` are
/// different keys.
pub fn derive_key(namespace: Namespace, parts: &[&str]) -> CacheKey {
    let mut hasher = Sha256::new();
    hasher.update(namespace.as_str().as_bytes());
    for part in parts {
        hasher.update([PART_SEPARATOR]);
        hasher.update(part.as_bytes());
    }
    CacheKey(format!("{:x}", hasher.finalize()))
}
