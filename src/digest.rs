// Generic hashing by algorithm name

use md5::Md5;
use sha1::Sha1;
use sha2::{Digest, Sha224, Sha256, Sha384, Sha512};
use sha3::{Sha3_224, Sha3_256, Sha3_384, Sha3_512};
use thiserror::Error;

/// Algorithm used when the caller does not name one
pub const DEFAULT_ALGORITHM: &str = "sha512";

/// Errors that can occur while hashing
#[derive(Error, Debug, PartialEq, Eq)]
pub enum DigestError {
    #[error("unsupported digest algorithm '{0}'")]
    UnsupportedAlgorithm(String),
}

/// Hash `value` with the named algorithm and return the lowercase hex
/// digest.
///
/// Names are matched case-insensitively; SHA-3 names accept both
/// `sha3_256` and `sha3-256` spellings.
pub fn hash_hex(value: &[u8], algorithm: &str) -> Result<String, DigestError> {
    let name = algorithm.to_ascii_lowercase().replace('-', "_");
    let digest = match name.as_str() {
        "md5" => hex::encode(Md5::digest(value)),
        "sha1" => hex::encode(Sha1::digest(value)),
        "sha224" => hex::encode(Sha224::digest(value)),
        "sha256" => hex::encode(Sha256::digest(value)),
        "sha384" => hex::encode(Sha384::digest(value)),
        "sha512" => hex::encode(Sha512::digest(value)),
        "sha3_224" => hex::encode(Sha3_224::digest(value)),
        "sha3_256" => hex::encode(Sha3_256::digest(value)),
        "sha3_384" => hex::encode(Sha3_384::digest(value)),
        "sha3_512" => hex::encode(Sha3_512::digest(value)),
        _ => return Err(DigestError::UnsupportedAlgorithm(algorithm.to_string())),
    };
    Ok(digest)
}
