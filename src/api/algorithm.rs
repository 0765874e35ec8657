//! Algorithm selection and the text digest contract.

use std::fmt;
use std::str::FromStr;

use crate::api::digests;
use crate::{HashError, HashResult};

/// The supported digest algorithms.
///
/// The set is closed and each variant maps to exactly one statically
/// linked primitive, so selecting an algorithm cannot fail and neither
/// can computing a digest with it. `HashAlgorithm` is `Copy` and all
/// operations are pure, so values can be shared across threads freely.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HashAlgorithm {
    Md5,
    Sha1,
    Sha256,
    Sha512,
}

impl HashAlgorithm {
    /// All supported algorithms, in digest-size order.
    pub const ALL: [HashAlgorithm; 4] = [Self::Md5, Self::Sha1, Self::Sha256, Self::Sha512];

    /// Canonical algorithm name.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Md5 => "MD5",
            Self::Sha1 => "SHA-1",
            Self::Sha256 => "SHA-256",
            Self::Sha512 => "SHA-512",
        }
    }

    /// Digest length in bytes.
    #[must_use]
    pub fn digest_size(&self) -> usize {
        match self {
            Self::Md5 => 16,
            Self::Sha1 => 20,
            Self::Sha256 => 32,
            Self::Sha512 => 64,
        }
    }

    /// Digest raw bytes with this algorithm.
    #[must_use]
    pub fn hash(&self, data: &[u8]) -> HashResult {
        let result = match self {
            Self::Md5 => digests::md5(data),
            Self::Sha1 => digests::sha1(data),
            Self::Sha256 => digests::sha256(data),
            Self::Sha512 => digests::sha512(data),
        };
        tracing::trace!("computed {} digest ({} bytes)", self.name(), result.len());
        result
    }

    /// Digest `input` and render the result as lowercase hex.
    ///
    /// The input is hashed as its UTF-8 byte encoding; any text is
    /// valid, including the empty string. The output is always exactly
    /// `2 * digest_size()` characters: rendering is byte-wise, so
    /// leading zero bytes of the digest are kept.
    #[must_use]
    pub fn generate(&self, input: &str) -> String {
        self.hash(input.as_bytes()).to_hex()
    }
}

impl fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for HashAlgorithm {
    type Err = HashError;

    /// Accepts the canonical names (`"SHA-256"`) and their compact
    /// forms (`"sha256"`), case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "md5" => Ok(Self::Md5),
            "sha1" | "sha-1" => Ok(Self::Sha1),
            "sha256" | "sha-256" => Ok(Self::Sha256),
            "sha512" | "sha-512" => Ok(Self::Sha512),
            _ => Err(HashError::UnsupportedAlgorithm(s.to_string())),
        }
    }
}

/// Resolve `algorithm` by name and digest `input`.
///
/// This is the string-keyed form of [`HashAlgorithm::generate`]; an
/// unknown algorithm name is the only failure.
pub fn digest(algorithm: &str, input: &str) -> crate::Result<String> {
    let algorithm: HashAlgorithm = algorithm.parse()?;
    Ok(algorithm.generate(input))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_names_parse_back() {
        for algorithm in HashAlgorithm::ALL {
            assert_eq!(algorithm.name().parse::<HashAlgorithm>().unwrap(), algorithm);
        }
    }

    #[test]
    fn compact_names_parse() {
        assert_eq!("md5".parse::<HashAlgorithm>().unwrap(), HashAlgorithm::Md5);
        assert_eq!("SHA1".parse::<HashAlgorithm>().unwrap(), HashAlgorithm::Sha1);
        assert_eq!(
            "sha256".parse::<HashAlgorithm>().unwrap(),
            HashAlgorithm::Sha256
        );
        assert_eq!(
            "Sha-512".parse::<HashAlgorithm>().unwrap(),
            HashAlgorithm::Sha512
        );
    }

    #[test]
    fn unknown_name_is_rejected() {
        let err = "sha384".parse::<HashAlgorithm>().unwrap_err();
        assert!(matches!(err, HashError::UnsupportedAlgorithm(name) if name == "sha384"));
    }

    #[test]
    fn generate_length_matches_digest_size() {
        for algorithm in HashAlgorithm::ALL {
            assert_eq!(
                algorithm.generate("some text").len(),
                2 * algorithm.digest_size()
            );
        }
    }

    #[test]
    fn display_uses_canonical_name() {
        assert_eq!(HashAlgorithm::Sha256.to_string(), "SHA-256");
    }
}
