//! Cryptographic engines for cipher-demo
//!
//! Two independent engines, composed only by the demo runner:
//!
//! - `symmetric`: AES-256 key/IV generation and CTR / CFB encryption
//! - `asymmetric`: RSA key pairs and RSA-OAEP (SHA-256) encryption
//!
//! Every operation is a plain function over its inputs. Nothing keeps
//! cipher state between calls, so independent threads may call them freely
//! as long as each supplies its own key material.

pub mod asymmetric;
pub mod material;
pub mod pem;
pub mod symmetric;

#[cfg(test)]
mod test_support;

pub use asymmetric::{generate_key_pair, max_plaintext_len, RsaKeyPair};
pub use material::{AesKey, Iv, SymmetricKeyMaterial, IV_SIZE, KEY_SIZE};
pub use pem::{parse_public_key, serialize_public_key};
pub use symmetric::{
    decrypt_cfb, decrypt_ctr, decrypt_with_mode, encrypt_cfb, encrypt_ctr, encrypt_with_mode,
    generate_key_material, CipherMode,
};
