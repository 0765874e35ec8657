//! Digest selection API.
//!
//! Usage: `HashAlgorithm::Sha256.generate("some text")`, or resolve the
//! algorithm by name with [`digest`].

pub mod algorithm;
mod digests;

pub use algorithm::{digest, HashAlgorithm};
