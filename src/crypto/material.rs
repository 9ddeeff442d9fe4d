//! Symmetric key material
//!
//! Holds AES-256 keys and 128-bit IVs / nonces. The bytes are wiped when the
//! value is dropped and are never printed through `Debug`.

use std::fmt;

use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::{CipherError, CipherResult};

/// Size of an AES-256 key in bytes
pub const KEY_SIZE: usize = 32;

/// Size of the CTR nonce / CFB IV in bytes (one AES block)
pub const IV_SIZE: usize = 16;

/// A 256-bit AES key
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct AesKey([u8; KEY_SIZE]);

impl AesKey {
    /// Wrap raw key bytes
    pub fn new(bytes: [u8; KEY_SIZE]) -> Self {
        Self(bytes)
    }

    /// Build a key from a slice, rejecting anything but 32 bytes
    pub fn from_slice(bytes: &[u8]) -> CipherResult<Self> {
        let key: [u8; KEY_SIZE] = bytes
            .try_into()
            .map_err(|_| CipherError::invalid_key_length(KEY_SIZE, bytes.len()))?;
        Ok(Self(key))
    }

    /// Get the key bytes
    pub fn as_bytes(&self) -> &[u8; KEY_SIZE] {
        &self.0
    }
}

impl fmt::Debug for AesKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AesKey([REDACTED {} bytes])", KEY_SIZE)
    }
}

/// A 128-bit IV (CFB) or initial counter block (CTR)
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct Iv([u8; IV_SIZE]);

impl Iv {
    /// Wrap raw IV bytes
    pub fn new(bytes: [u8; IV_SIZE]) -> Self {
        Self(bytes)
    }

    /// Build an IV from a slice, rejecting anything but 16 bytes
    pub fn from_slice(bytes: &[u8]) -> CipherResult<Self> {
        let iv: [u8; IV_SIZE] = bytes
            .try_into()
            .map_err(|_| CipherError::invalid_iv_length(IV_SIZE, bytes.len()))?;
        Ok(Self(iv))
    }

    /// Get the IV bytes
    pub fn as_bytes(&self) -> &[u8; IV_SIZE] {
        &self.0
    }
}

impl fmt::Debug for Iv {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Iv([REDACTED {} bytes])", IV_SIZE)
    }
}

/// Key and IV for one encrypt/decrypt pairing
///
/// Under CTR a (key, nonce) pair must never encrypt two different
/// plaintexts. Nothing here tracks usage; generate fresh material per message.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct SymmetricKeyMaterial {
    key: AesKey,
    iv: Iv,
}

impl SymmetricKeyMaterial {
    /// Combine caller-supplied key and IV bytes
    pub fn new(key: [u8; KEY_SIZE], iv: [u8; IV_SIZE]) -> Self {
        Self {
            key: AesKey::new(key),
            iv: Iv::new(iv),
        }
    }

    /// Build material from slices of exactly 32 and 16 bytes
    pub fn from_slices(key: &[u8], iv: &[u8]) -> CipherResult<Self> {
        Ok(Self {
            key: AesKey::from_slice(key)?,
            iv: Iv::from_slice(iv)?,
        })
    }

    /// Build material from hex strings (64 and 32 hex digits)
    pub fn from_hex(key_hex: &str, iv_hex: &str) -> CipherResult<Self> {
        let mut key = hex::decode(key_hex.trim())?;
        let mut iv = hex::decode(iv_hex.trim())?;
        let material = Self::from_slices(&key, &iv);
        key.zeroize();
        iv.zeroize();
        material
    }

    /// The AES-256 key
    pub fn key(&self) -> &AesKey {
        &self.key
    }

    /// The IV (CFB) / initial counter block (CTR)
    pub fn iv(&self) -> &Iv {
        &self.iv
    }

    /// The nonce; same bytes as [`Self::iv`], named for CTR callers
    pub fn nonce(&self) -> &Iv {
        &self.iv
    }
}

impl fmt::Debug for SymmetricKeyMaterial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SymmetricKeyMaterial")
            .field("key_len", &KEY_SIZE)
            .field("iv_len", &IV_SIZE)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_slices() {
        let material = SymmetricKeyMaterial::from_slices(&[7u8; 32], &[9u8; 16]).unwrap();
        assert_eq!(material.key().as_bytes(), &[7u8; 32]);
        assert_eq!(material.iv().as_bytes(), &[9u8; 16]);
        assert_eq!(material.nonce(), material.iv());
    }

    #[test]
    fn test_short_key_rejected() {
        let err = SymmetricKeyMaterial::from_slices(&[0u8; 16], &[0u8; 16]).unwrap_err();
        assert!(matches!(
            err,
            CipherError::InvalidLength {
                what: "key",
                expected: 32,
                actual: 16
            }
        ));
    }

    #[test]
    fn test_long_iv_rejected() {
        let err = SymmetricKeyMaterial::from_slices(&[0u8; 32], &[0u8; 17]).unwrap_err();
        assert!(matches!(
            err,
            CipherError::InvalidLength {
                what: "IV",
                expected: 16,
                actual: 17
            }
        ));
    }

    #[test]
    fn test_from_hex() {
        let key_hex = "00".repeat(32);
        let iv_hex = "ff".repeat(16);
        let material = SymmetricKeyMaterial::from_hex(&key_hex, &iv_hex).unwrap();
        assert_eq!(material.key().as_bytes(), &[0u8; 32]);
        assert_eq!(material.iv().as_bytes(), &[0xffu8; 16]);
    }

    #[test]
    fn test_from_hex_rejects_garbage() {
        let result = SymmetricKeyMaterial::from_hex("not hex", &"00".repeat(16));
        assert!(matches!(result, Err(CipherError::InvalidEncoding(_))));
    }

    #[test]
    fn test_debug_is_redacted() {
        let material = SymmetricKeyMaterial::new([0xab; 32], [0xcd; 16]);
        let debug = format!("{:?}", material);
        assert!(debug.contains("SymmetricKeyMaterial"));
        assert!(!debug.contains("abab"));
        assert!(!debug.contains("171"));

        let key_debug = format!("{:?}", material.key());
        assert!(key_debug.contains("REDACTED"));
    }

    #[test]
    fn test_zeroize_clears_bytes() {
        let mut key = AesKey::new([0x55; 32]);
        key.zeroize();
        assert_eq!(key.as_bytes(), &[0u8; 32]);
    }
}
