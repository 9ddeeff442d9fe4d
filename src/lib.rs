//! cipher-demo - AES-256 (CTR/CFB) and RSA-OAEP encryption demonstration core
//!
//! This library provides two independent engines that take every input
//! explicitly and return byte sequences, with no cipher objects or keys kept
//! alive between calls.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `crypto`: the symmetric and asymmetric engines, key material, PEM encoding
//! - `error`: Custom error types
//! - `config`: Configuration and path management
//! - `display`: Formatting of demo reports
//! - `cli`: Demo runner command handlers
//!
//! CTR and CFB provide confidentiality only. Nothing here detects a modified
//! ciphertext; layer a MAC or use an AEAD mode for real data.
//!
//! # Example
//!
//! ```rust,no_run
//! use cipher_demo::crypto::{self, asymmetric};
//!
//! let material = crypto::generate_key_material()?;
//! let ciphertext = crypto::encrypt_ctr(material.key(), material.nonce(), b"hello")?;
//! let plaintext = crypto::decrypt_ctr(material.key(), material.nonce(), &ciphertext)?;
//! assert_eq!(plaintext, b"hello");
//!
//! let pair = crypto::generate_key_pair(2048, 65537)?;
//! let sealed = asymmetric::encrypt(pair.public_key(), b"hello")?;
//! assert_eq!(asymmetric::decrypt(pair.private_key(), &sealed)?, b"hello");
//! # Ok::<(), cipher_demo::CipherError>(())
//! ```

pub mod cli;
pub mod config;
pub mod crypto;
pub mod display;
pub mod error;

pub use error::{CipherError, CipherResult};
