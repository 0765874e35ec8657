//! One digest function per supported primitive.
//!
//! Each function delegates to the RustCrypto implementation of the
//! primitive and returns the raw digest bytes.

use crate::HashResult;
use digest::Digest;

/// MD5 digest, 16 bytes.
pub(crate) fn md5(data: &[u8]) -> HashResult {
    HashResult::new(md5::Md5::digest(data).to_vec())
}

/// SHA-1 digest, 20 bytes.
pub(crate) fn sha1(data: &[u8]) -> HashResult {
    HashResult::new(sha1::Sha1::digest(data).to_vec())
}

/// SHA-256 digest, 32 bytes.
pub(crate) fn sha256(data: &[u8]) -> HashResult {
    HashResult::new(sha2::Sha256::digest(data).to_vec())
}

/// SHA-512 digest, 64 bytes.
pub(crate) fn sha512(data: &[u8]) -> HashResult {
    HashResult::new(sha2::Sha512::digest(data).to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digest_sizes() {
        assert_eq!(md5(b"").len(), 16);
        assert_eq!(sha1(b"").len(), 20);
        assert_eq!(sha256(b"").len(), 32);
        assert_eq!(sha512(b"").len(), 64);
    }
}
