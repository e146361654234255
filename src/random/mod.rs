// Secure random string generation

pub mod charset;
pub mod source;

use thiserror::Error;

use source::{OsSecureRandom, SecureRandom};

/// Errors that can occur while generating a random string
#[derive(Error, Debug, PartialEq, Eq)]
pub enum RandomError {
    #[error("empty character pool: no character class enabled and no explicit set given")]
    EmptyPool,
}

/// Character-selection configuration for [`generate`].
///
/// Precedence is `chars` > `printable` > individual class flags: an
/// explicit non-empty `chars` set replaces the class-based pool
/// entirely, and `printable` enables all five classes regardless of
/// the other flags.
#[derive(Debug, Clone)]
pub struct StringSpec {
    /// Explicit pool. Duplicate characters are preserved as given and
    /// weight selection toward themselves.
    pub chars: Option<String>,
    pub lowercase: bool,
    pub uppercase: bool,
    pub digits: bool,
    pub punctuation: bool,
    pub whitespace: bool,
    /// Enables all five classes, whitespace included. Off by default
    /// since whitespace in passwords trips up some systems.
    pub printable: bool,
}

impl Default for StringSpec {
    /// Password-safe profile: letters, digits and punctuation on,
    /// whitespace off.
    fn default() -> Self {
        StringSpec {
            chars: None,
            lowercase: true,
            uppercase: true,
            digits: true,
            punctuation: true,
            whitespace: false,
            printable: false,
        }
    }
}

impl StringSpec {
    /// Spec drawing only from an explicit character set.
    pub fn from_chars(chars: impl Into<String>) -> Self {
        StringSpec {
            chars: Some(chars.into()),
            ..StringSpec::default()
        }
    }
}

/// Generate a random string of exactly `length` characters drawn from
/// the pool described by `spec`, using OS entropy.
///
/// Each character is an independent uniform draw; `length` of zero
/// yields an empty string. Fails only when the configured pool is
/// empty.
pub fn generate(length: usize, spec: &StringSpec) -> Result<String, RandomError> {
    generate_with(&mut OsSecureRandom::new(), length, spec)
}

/// Like [`generate`], but drawing from a caller-supplied source.
pub fn generate_with<R: SecureRandom>(
    rng: &mut R,
    length: usize,
    spec: &StringSpec,
) -> Result<String, RandomError> {
    let pool = charset::build_pool(spec);
    if pool.is_empty() {
        return Err(RandomError::EmptyPool);
    }

    let mut out = String::with_capacity(length);
    for _ in 0..length {
        out.push(pool[rng.draw_uniform(pool.len())]);
    }
    Ok(out)
}
