//! AES-256 in CTR and CFB modes
//!
//! Every call builds a fresh cipher instance from the key and IV it is
//! given, so no keystream position survives between calls.
//!
//! Neither mode authenticates the ciphertext. A flipped ciphertext bit flips
//! the matching plaintext bit (CTR) or garbles one block (CFB) without any
//! error being raised; deployments need a MAC or an AEAD mode on top.

use std::fmt;
use std::str::FromStr;

use aes::Aes256;
use cipher::generic_array::GenericArray;
use cipher::{AsyncStreamCipher, KeyIvInit, StreamCipher};
use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};
use serde::{Deserialize, Serialize};
use zeroize::Zeroize;

use crate::error::{CipherError, CipherResult};

use super::material::{AesKey, Iv, SymmetricKeyMaterial, IV_SIZE, KEY_SIZE};

/// CTR with a full 128-bit big-endian counter block
type Aes256Ctr = ctr::Ctr128BE<Aes256>;
type Aes256CfbEnc = cfb_mode::Encryptor<Aes256>;
type Aes256CfbDec = cfb_mode::Decryptor<Aes256>;

/// Block cipher mode of operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum CipherMode {
    /// Counter mode (default)
    #[default]
    Ctr,
    /// Full-block cipher feedback mode
    Cfb,
}

impl fmt::Display for CipherMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CipherMode::Ctr => write!(f, "CTR"),
            CipherMode::Cfb => write!(f, "CFB"),
        }
    }
}

impl FromStr for CipherMode {
    type Err = CipherError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ctr" => Ok(CipherMode::Ctr),
            "cfb" => Ok(CipherMode::Cfb),
            other => Err(CipherError::Config(format!(
                "Unknown cipher mode '{}' (expected ctr or cfb)",
                other
            ))),
        }
    }
}

/// Draw a fresh 32-byte key and 16-byte IV from the OS random source
pub fn generate_key_material() -> CipherResult<SymmetricKeyMaterial> {
    generate_key_material_with_rng(&mut OsRng)
}

/// Draw a fresh key and IV from the given random source
///
/// A source that fails is reported as `EntropySource`; no fallback
/// generator is substituted.
pub fn generate_key_material_with_rng<R>(rng: &mut R) -> CipherResult<SymmetricKeyMaterial>
where
    R: CryptoRng + RngCore,
{
    let mut key = [0u8; KEY_SIZE];
    let mut iv = [0u8; IV_SIZE];

    let filled = rng
        .try_fill_bytes(&mut key)
        .and_then(|()| rng.try_fill_bytes(&mut iv));
    if let Err(e) = filled {
        key.zeroize();
        iv.zeroize();
        return Err(CipherError::EntropySource(e.to_string()));
    }

    let material = SymmetricKeyMaterial::new(key, iv);
    key.zeroize();
    iv.zeroize();

    tracing::debug!(key_len = KEY_SIZE, iv_len = IV_SIZE, "generated symmetric key material");
    Ok(material)
}

/// Encrypt with AES-256-CTR
///
/// The nonce is the initial counter block. Output length equals input
/// length. The caller must never reuse a (key, nonce) pair for two
/// different plaintexts.
pub fn encrypt_ctr(key: &AesKey, nonce: &Iv, plaintext: &[u8]) -> CipherResult<Vec<u8>> {
    let mut buf = plaintext.to_vec();
    apply_ctr_keystream(key, nonce, &mut buf)?;
    tracing::trace!(len = buf.len(), "AES-256-CTR encrypt");
    Ok(buf)
}

/// Decrypt AES-256-CTR ciphertext
///
/// CTR is a keystream XOR, so this is the encryption path run again.
pub fn decrypt_ctr(key: &AesKey, nonce: &Iv, ciphertext: &[u8]) -> CipherResult<Vec<u8>> {
    let mut buf = ciphertext.to_vec();
    apply_ctr_keystream(key, nonce, &mut buf)?;
    tracing::trace!(len = buf.len(), "AES-256-CTR decrypt");
    Ok(buf)
}

fn apply_ctr_keystream(key: &AesKey, nonce: &Iv, buf: &mut [u8]) -> CipherResult<()> {
    let mut cipher = Aes256Ctr::new(
        GenericArray::from_slice(key.as_bytes()),
        GenericArray::from_slice(nonce.as_bytes()),
    );
    cipher
        .try_apply_keystream(buf)
        .map_err(|_| CipherError::KeystreamExhausted)
}

/// Encrypt with AES-256-CFB (128-bit feedback)
///
/// A trailing partial block is handled by truncating the last keystream
/// block, so no padding is added and output length equals input length.
/// Unlike CTR there is no counter to exhaust, so this cannot fail.
pub fn encrypt_cfb(key: &AesKey, iv: &Iv, plaintext: &[u8]) -> Vec<u8> {
    let mut buf = plaintext.to_vec();
    Aes256CfbEnc::new(
        GenericArray::from_slice(key.as_bytes()),
        GenericArray::from_slice(iv.as_bytes()),
    )
    .encrypt(&mut buf);
    tracing::trace!(len = buf.len(), "AES-256-CFB encrypt");
    buf
}

/// Decrypt AES-256-CFB ciphertext
///
/// Infallible for the same reason as [`encrypt_cfb`].
pub fn decrypt_cfb(key: &AesKey, iv: &Iv, ciphertext: &[u8]) -> Vec<u8> {
    let mut buf = ciphertext.to_vec();
    Aes256CfbDec::new(
        GenericArray::from_slice(key.as_bytes()),
        GenericArray::from_slice(iv.as_bytes()),
    )
    .decrypt(&mut buf);
    tracing::trace!(len = buf.len(), "AES-256-CFB decrypt");
    buf
}

/// Encrypt under the selected mode
pub fn encrypt_with_mode(
    mode: CipherMode,
    material: &SymmetricKeyMaterial,
    plaintext: &[u8],
) -> CipherResult<Vec<u8>> {
    tracing::debug!(%mode, len = plaintext.len(), "symmetric encrypt");
    match mode {
        CipherMode::Ctr => encrypt_ctr(material.key(), material.nonce(), plaintext),
        CipherMode::Cfb => Ok(encrypt_cfb(material.key(), material.iv(), plaintext)),
    }
}

/// Decrypt under the selected mode
pub fn decrypt_with_mode(
    mode: CipherMode,
    material: &SymmetricKeyMaterial,
    ciphertext: &[u8],
) -> CipherResult<Vec<u8>> {
    tracing::debug!(%mode, len = ciphertext.len(), "symmetric decrypt");
    match mode {
        CipherMode::Ctr => decrypt_ctr(material.key(), material.nonce(), ciphertext),
        CipherMode::Cfb => Ok(decrypt_cfb(material.key(), material.iv(), ciphertext)),
    }
}
