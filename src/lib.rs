//! Fixed-algorithm text digests rendered as hexadecimal strings.
//!
//! This crate is a thin selection layer over the RustCrypto digest
//! crates: pick one of the four supported algorithms and get the
//! lowercase hex digest of a text input. There is no original hash
//! implementation here and the algorithm set is closed.
//!
//! ```
//! use hashgen::HashAlgorithm;
//!
//! let hex = HashAlgorithm::Sha256.generate("");
//! assert_eq!(
//!     hex,
//!     "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
//! );
//! ```
//!
//! Algorithms can also be resolved by name, which is the only fallible
//! path:
//!
//! ```
//! let hex = hashgen::digest("md5", "")?;
//! assert_eq!(hex, "d41d8cd98f00b204e9800998ecf8427e");
//! # Ok::<(), hashgen::HashError>(())
//! ```

#![forbid(unsafe_code)]

pub mod api;
pub mod error;
pub mod hash_result;

pub use api::{digest, HashAlgorithm};
pub use error::{HashError, Result};
pub use hash_result::HashResult;
