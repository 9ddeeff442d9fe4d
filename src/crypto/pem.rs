//! Textual encoding of RSA public keys
//!
//! The DER SubjectPublicKeyInfo is base64 encoded, split into 64-character
//! lines and wrapped in `BEGIN/END PUBLIC KEY` markers. Private keys are
//! never serialized.

use rsa::pkcs8::{DecodePublicKey, EncodePublicKey, LineEnding};
use rsa::RsaPublicKey;

use crate::error::{CipherError, CipherResult};

/// Serialize a public key to PEM text with LF line endings
pub fn serialize_public_key(public_key: &RsaPublicKey) -> CipherResult<String> {
    public_key
        .to_public_key_pem(LineEnding::LF)
        .map_err(|e| CipherError::InvalidEncoding(format!("SubjectPublicKeyInfo: {}", e)))
}

/// Parse PEM text produced by [`serialize_public_key`] (or any SPKI RSA key)
pub fn parse_public_key(pem: &str) -> CipherResult<RsaPublicKey> {
    RsaPublicKey::from_public_key_pem(pem)
        .map_err(|e| CipherError::InvalidEncoding(format!("SubjectPublicKeyInfo: {}", e)))
}
