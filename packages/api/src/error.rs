//! Error types for the conversion layer
//!
//! The traversal engine is total and has no error type of its own;
//! every failure in this crate comes from serialization, transport
//! encoding, or signature verification.

/// Errors surfaced by the encode/decode conversions on [`crate::Map`].
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("JSON encode failed: {0}")]
    JsonEncode(#[source] serde_json::Error),
    #[error("JSON decode failed: {0}")]
    JsonDecode(#[source] serde_json::Error),
    #[error("Base64 decode failed: {0}")]
    Base64Decode(#[from] base64::DecodeError),
    #[error("decoded payload is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
    #[error("signature hex decode failed: {0}")]
    HexDecode(#[from] hex::FromHexError),
    #[error("query string decode failed: {0}")]
    QueryDecode(#[from] serde_urlencoded::de::Error),
    #[error("signed payload has no signature part")]
    SignatureMissing,
    #[error("signature verification failed")]
    SignatureMismatch,
}

/// Result alias for conversion operations.
pub type Result<T> = std::result::Result<T, Error>;
