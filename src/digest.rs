use std::fmt;

use md5::{Digest, Md5};

/// Fingerprint of the bytes a palette was loaded from.
/// Empty for palettes that were built or copied in memory.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct ContentDigest(Vec<u8>);

impl ContentDigest {
    pub fn new(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for ContentDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in &self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

pub trait ContentHasher {
    fn digest(&self, data: &[u8]) -> ContentDigest;
}

/// 128-bit MD5, what palette resources have always been tagged with
#[derive(Debug, Clone, Copy, Default)]
pub struct Md5Hasher;

impl ContentHasher for Md5Hasher {
    fn digest(&self, data: &[u8]) -> ContentDigest {
        ContentDigest(Md5::digest(data).to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_md5_known_value() {
        let digest = Md5Hasher.digest(b"abc");
        assert_eq!(digest.as_bytes().len(), 16);
        assert_eq!(digest.to_string(), "900150983cd24fb0d6963f7d28e17f72");
    }

    #[test]
    fn test_default_digest_is_empty() {
        assert!(ContentDigest::default().is_empty());
        assert_eq!(ContentDigest::default().to_string(), "");
    }
}
