// String transcoding

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use thiserror::Error;

/// Codec used when the caller does not name one
pub const DEFAULT_CODEC: &str = "base64";

/// Errors that can occur while transcoding
#[derive(Error, Debug, PartialEq, Eq)]
pub enum CodecError {
    #[error("unknown codec '{0}'")]
    UnknownCodec(String),

    #[error("input is not valid {codec}: {reason}")]
    Malformed { codec: &'static str, reason: String },
}

/// Encode bytes with the named codec.
///
/// Supported codecs: `base64` (standard alphabet, padded) and `hex`.
pub fn encode(value: &[u8], codec: &str) -> Result<String, CodecError> {
    match codec.to_ascii_lowercase().as_str() {
        "base64" => Ok(STANDARD.encode(value)),
        "hex" => Ok(hex::encode(value)),
        _ => Err(CodecError::UnknownCodec(codec.to_string())),
    }
}

/// Decode a string produced by [`encode`].
pub fn decode(value: &str, codec: &str) -> Result<Vec<u8>, CodecError> {
    match codec.to_ascii_lowercase().as_str() {
        "base64" => STANDARD.decode(value).map_err(|e| CodecError::Malformed {
            codec: "base64",
            reason: e.to_string(),
        }),
        "hex" => hex::decode(value).map_err(|e| CodecError::Malformed {
            codec: "hex",
            reason: e.to_string(),
        }),
        _ => Err(CodecError::UnknownCodec(codec.to_string())),
    }
}
