//! Seed derivation for the deterministic source.

use std::path::{Path, PathBuf};

use sha1::{Digest, Sha1};
use zeroize::Zeroize;

const DIGEST_LEN: usize = 20;

/// SHA-1 digest of caller-supplied seed material.
#[derive(Clone, PartialEq, Eq)]
pub struct Seed([u8; DIGEST_LEN]);

impl Seed {
    /// Hash the full byte content of a seed source.
    pub fn derive(material: &[u8]) -> Self {
        Self::derive_parts(&[material])
    }

    /// Hash several byte runs as if concatenated.
    pub fn derive_parts(parts: &[&[u8]]) -> Self {
        let mut hasher = Sha1::new();
        for part in parts {
            hasher.update(part);
        }
        let mut digest = [0u8; DIGEST_LEN];
        digest.copy_from_slice(&hasher.finalize());
        Self(digest)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn to_hex(&self) -> String {
        self.0.iter().map(|b| format!("{b:02x}")).collect()
    }

    /// Expand to the 32-byte key the seedable generator takes.
    pub(crate) fn to_rng_seed(&self) -> [u8; 32] {
        let mut key = [0u8; 32];
        key[..DIGEST_LEN].copy_from_slice(&self.0);
        key
    }
}

impl std::fmt::Debug for Seed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Seed(..)")
    }
}

impl Drop for Seed {
    fn drop(&mut self) {
        self.0.zeroize();
    }
}

/// A `FILE[#EXTRA]` seed argument.
///
/// The file's bytes are hashed first, then the bytes of `EXTRA` if present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedSpec {
    pub path: PathBuf,
    pub extra: Option<String>,
}

impl SeedSpec {
    pub fn parse(arg: &str) -> Self {
        // An existing file wins, so paths that contain '#' still work.
        if Path::new(arg).exists() {
            return Self {
                path: PathBuf::from(arg),
                extra: None,
            };
        }
        match arg.rsplit_once('#') {
            Some((path, extra)) if !path.is_empty() => Self {
                path: PathBuf::from(path),
                extra: Some(extra.to_string()),
            },
            _ => Self {
                path: PathBuf::from(arg),
                extra: None,
            },
        }
    }

    /// Derive the seed from already-read file content.
    pub fn seed(&self, content: &[u8]) -> Seed {
        match &self.extra {
            Some(extra) => Seed::derive_parts(&[content, extra.as_bytes()]),
            None => Seed::derive(content),
        }
    }
}
