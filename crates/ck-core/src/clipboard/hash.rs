use std::fmt;

use super::ClipboardPayload;
use crate::ports::ContentHashPort;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HashAlgorithm {
    Blake3V1,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ContentHash {
    pub alg: HashAlgorithm,
    pub bytes: [u8; 32],
}

impl ContentHash {
    pub fn to_hex(&self) -> String {
        hex::encode(self.bytes)
    }
}

impl fmt::Display for ContentHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.alg {
            HashAlgorithm::Blake3V1 => write!(f, "blake3v1:{}", self.to_hex()),
        }
    }
}

/// Fingerprint a clipboard payload for duplicate detection.
///
/// Equal payloads of the same kind yield equal fingerprints. Text and image
/// fingerprints are never compared against each other.
pub fn fingerprint(
    payload: &ClipboardPayload,
    hasher: &dyn ContentHashPort,
) -> anyhow::Result<ContentHash> {
    hasher.hash_bytes(payload.hash_input())
}
