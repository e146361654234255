// Character classes for pool construction
//
// Class contents match Python's `string` module constants so that
// generated strings are interchangeable with the classic shadow-file
// tooling built around them.

use super::StringSpec;

/// Lowercase ASCII letters
pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";

/// Uppercase ASCII letters
pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// ASCII digits
pub const DIGITS: &str = "0123456789";

/// ASCII punctuation
pub const PUNCTUATION: &str = "!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

/// ASCII whitespace: space, tab, LF, CR, VT, FF
pub const WHITESPACE: &str = " \t\n\r\x0b\x0c";

/// Build the candidate pool for a spec.
///
/// Precedence: an explicit `chars` set replaces everything (duplicates
/// preserved, so repeated characters are drawn more often); otherwise
/// `printable` forces all five classes on; otherwise the individual
/// flags are honored. Classes are concatenated in a fixed order:
/// lowercase, uppercase, digits, punctuation, whitespace.
pub fn build_pool(spec: &StringSpec) -> Vec<char> {
    if let Some(chars) = &spec.chars {
        if !chars.is_empty() {
            return chars.chars().collect();
        }
    }

    let mut pool = String::new();
    if spec.lowercase || spec.printable {
        pool.push_str(LOWERCASE);
    }
    if spec.uppercase || spec.printable {
        pool.push_str(UPPERCASE);
    }
    if spec.digits || spec.printable {
        pool.push_str(DIGITS);
    }
    if spec.punctuation || spec.printable {
        pool.push_str(PUNCTUATION);
    }
    if spec.whitespace || spec.printable {
        pool.push_str(WHITESPACE);
    }
    pool.chars().collect()
}
