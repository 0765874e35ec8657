//! Raw digest output with hex rendering.

/// Raw bytes of a computed digest.
///
/// The length is fixed by the algorithm that produced it (16 bytes for
/// MD5 up to 64 bytes for SHA-512) and the bytes never change after
/// construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HashResult {
    bytes: Vec<u8>,
}

impl HashResult {
    /// Wrap raw digest bytes.
    #[must_use]
    pub fn new(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }

    /// The raw digest bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Consume the result and return the bytes.
    #[must_use]
    pub fn to_vec(self) -> Vec<u8> {
        self.bytes
    }

    /// Lowercase hexadecimal rendering, two characters per byte.
    ///
    /// Rendering is byte-wise, so leading zero bytes are preserved: a
    /// digest starting with `0x00` renders as `"00…"` and the output
    /// length is always exactly twice the digest length.
    #[must_use]
    pub fn to_hex(&self) -> String {
        hex::encode(&self.bytes)
    }

    /// Digest length in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Whether the digest is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

impl From<Vec<u8>> for HashResult {
    fn from(bytes: Vec<u8>) -> Self {
        Self::new(bytes)
    }
}

impl From<HashResult> for Vec<u8> {
    fn from(result: HashResult) -> Self {
        result.bytes
    }
}

impl AsRef<[u8]> for HashResult {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

impl std::fmt::Display for HashResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}
