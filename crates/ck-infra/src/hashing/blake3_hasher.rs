use anyhow::Result;
use ck_core::{ports::ContentHashPort, ContentHash, HashAlgorithm};

#[derive(Debug, Default, Clone, Copy)]
pub struct Blake3Hasher;

impl ContentHashPort for Blake3Hasher {
    fn hash_bytes(&self, bytes: &[u8]) -> Result<ContentHash> {
        let hash = blake3::hash(bytes);
        Ok(ContentHash {
            alg: HashAlgorithm::Blake3V1,
            bytes: hash.into(),
        })
    }
}
