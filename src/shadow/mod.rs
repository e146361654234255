// Crypt-style shadow hash construction

use thiserror::Error;

use crate::random::{self, StringSpec};

/// Length of a password generated when the caller omits the secret
pub const DEFAULT_SECRET_LENGTH: usize = 20;

/// The 64-character alphabet crypt(3) accepts in salts
const SALT_CHARS: &str = "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789./";

/// Cost parameter embedded in generated bcrypt setting strings
const BCRYPT_COST: u32 = 12;

/// Errors that can occur while building a shadow hash
#[derive(Error, Debug)]
pub enum ShadowError {
    #[error("unknown hash algorithm '{0}'")]
    UnknownAlgorithm(String),

    #[error("crypt failed: {0}")]
    Crypt(#[from] pwhash::error::Error),

    #[error(transparent)]
    Random(#[from] random::RandomError),
}

/// Hash schemes recognized in shadow files
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShadowAlgorithm {
    /// MD5-crypt, `$1$`
    Md5,
    /// bcrypt, `$2b$`
    Blowfish,
    /// SHA-256-crypt, `$5$`
    Sha256,
    /// SHA-512-crypt, `$6$`
    Sha512,
    /// Traditional DES crypt, two-character salt prefix
    Crypt,
}

impl Default for ShadowAlgorithm {
    fn default() -> Self {
        ShadowAlgorithm::Sha512
    }
}

impl ShadowAlgorithm {
    /// Parse an algorithm name, case-insensitively.
    pub fn from_name(name: &str) -> Result<Self, ShadowError> {
        match name.to_ascii_lowercase().as_str() {
            "md5" => Ok(ShadowAlgorithm::Md5),
            "blowfish" => Ok(ShadowAlgorithm::Blowfish),
            "sha256" => Ok(ShadowAlgorithm::Sha256),
            "sha512" => Ok(ShadowAlgorithm::Sha512),
            "crypt" => Ok(ShadowAlgorithm::Crypt),
            _ => Err(ShadowError::UnknownAlgorithm(name.to_string())),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ShadowAlgorithm::Md5 => "md5",
            ShadowAlgorithm::Blowfish => "blowfish",
            ShadowAlgorithm::Sha256 => "sha256",
            ShadowAlgorithm::Sha512 => "sha512",
            ShadowAlgorithm::Crypt => "crypt",
        }
    }

    /// Salt length the scheme expects
    pub fn salt_len(self) -> usize {
        match self {
            ShadowAlgorithm::Crypt => 2,
            ShadowAlgorithm::Md5 => 8,
            ShadowAlgorithm::Blowfish => 22,
            ShadowAlgorithm::Sha256 | ShadowAlgorithm::Sha512 => 16,
        }
    }

    /// Crypt(3) setting string for the given salt.
    fn setting(self, salt: &str) -> String {
        match self {
            ShadowAlgorithm::Crypt => salt.to_string(),
            ShadowAlgorithm::Md5 => format!("$1${salt}"),
            ShadowAlgorithm::Blowfish => format!("$2b${BCRYPT_COST:02}${salt}"),
            ShadowAlgorithm::Sha256 => format!("$5${salt}"),
            ShadowAlgorithm::Sha512 => format!("$6${salt}"),
        }
    }
}

/// Builds a crypt-formatted hash for a shadow file.
///
/// The hash is deterministic for a fixed `(algorithm, salt, secret)`
/// triple. An omitted salt is generated from the crypt alphabet at the
/// scheme's length; an omitted secret is generated with the
/// password-safe defaults at [`DEFAULT_SECRET_LENGTH`]. Both draws use
/// OS entropy.
#[derive(Debug, Clone, Default)]
pub struct ShadowHashBuilder {
    algorithm: ShadowAlgorithm,
    salt: Option<String>,
    secret: Option<String>,
}

impl ShadowHashBuilder {
    pub fn new(algorithm: ShadowAlgorithm) -> Self {
        ShadowHashBuilder {
            algorithm,
            salt: None,
            secret: None,
        }
    }

    pub fn salt(mut self, salt: impl Into<String>) -> Self {
        self.salt = Some(salt.into());
        self
    }

    pub fn secret(mut self, secret: impl Into<String>) -> Self {
        self.secret = Some(secret.into());
        self
    }

    /// Produce the formatted hash string.
    ///
    /// Failures from the crypt primitive (for instance a malformed
    /// caller-supplied salt) propagate as [`ShadowError::Crypt`].
    pub fn build(self) -> Result<String, ShadowError> {
        let salt = match self.salt {
            Some(salt) => salt,
            None => random::generate(
                self.algorithm.salt_len(),
                &StringSpec::from_chars(SALT_CHARS),
            )?,
        };
        let secret = match self.secret {
            Some(secret) => secret,
            None => random::generate(DEFAULT_SECRET_LENGTH, &StringSpec::default())?,
        };

        let setting = self.algorithm.setting(&salt);
        Ok(pwhash::unix::crypt(secret.as_str(), &setting)?)
    }
}

/// Generate a salted hash suitable for a shadow file.
///
/// Convenience wrapper over [`ShadowHashBuilder`] taking the algorithm
/// by name.
pub fn shadow_hash(
    salt: Option<&str>,
    secret: Option<&str>,
    algorithm: &str,
) -> Result<String, ShadowError> {
    let mut builder = ShadowHashBuilder::new(ShadowAlgorithm::from_name(algorithm)?);
    if let Some(salt) = salt {
        builder = builder.salt(salt);
    }
    if let Some(secret) = secret {
        builder = builder.secret(secret);
    }
    builder.build()
}
