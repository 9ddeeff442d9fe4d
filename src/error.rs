//! Custom error types for cipher-demo
//!
//! This module defines the error hierarchy for the library using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for cipher-demo operations
#[derive(Error, Debug)]
pub enum CipherError {
    /// The operating system random source could not be read
    #[error("Entropy source unavailable: {0}")]
    EntropySource(String),

    /// RSA key generation was asked for unsafe or unsupported parameters
    #[error("Key generation error: {0}")]
    KeyGeneration(String),

    /// Plaintext exceeds the OAEP capacity of the recipient key
    #[error("Plaintext too large: {len} bytes exceeds the {max}-byte OAEP limit")]
    PlaintextTooLarge { len: usize, max: usize },

    /// OAEP decryption failed
    ///
    /// Deliberately carries no detail about which check rejected the input.
    #[error("Decryption failed")]
    Decryption,

    /// An RSA key the OAEP primitive refused to work with
    #[error("Invalid key: {0}")]
    InvalidKey(String),

    /// Key or IV material of the wrong size
    #[error("Invalid {what} length: expected {expected} bytes, got {actual}")]
    InvalidLength {
        what: &'static str,
        expected: usize,
        actual: usize,
    },

    /// Textual input (hex or PEM) could not be decoded
    #[error("Invalid encoding: {0}")]
    InvalidEncoding(String),

    /// The CTR counter would wrap before the input was fully processed
    #[error("CTR keystream exhausted for this nonce")]
    KeystreamExhausted,

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),
}

impl CipherError {
    /// Create an invalid-length error for an AES key
    pub fn invalid_key_length(expected: usize, actual: usize) -> Self {
        Self::InvalidLength {
            what: "key",
            expected,
            actual,
        }
    }

    /// Create an invalid-length error for an IV / nonce
    pub fn invalid_iv_length(expected: usize, actual: usize) -> Self {
        Self::InvalidLength {
            what: "IV",
            expected,
            actual,
        }
    }

    /// Check if this is the generic decryption failure
    pub fn is_decryption(&self) -> bool {
        matches!(self, Self::Decryption)
    }

    /// Check if the caller can fix this by changing its input
    pub fn is_caller_error(&self) -> bool {
        matches!(
            self,
            Self::KeyGeneration(_)
                | Self::InvalidKey(_)
                | Self::PlaintextTooLarge { .. }
                | Self::InvalidLength { .. }
                | Self::InvalidEncoding(_)
        )
    }
}

impl From<std::io::Error> for CipherError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for CipherError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<hex::FromHexError> for CipherError {
    fn from(err: hex::FromHexError) -> Self {
        Self::InvalidEncoding(format!("hex: {}", err))
    }
}

/// Result type alias for cipher-demo operations
pub type CipherResult<T> = Result<T, CipherError>;
