//! Symmetric demo command
//!
//! Generates (or accepts) key material, encrypts a message under CTR or CFB,
//! decrypts it again and prints the result.

use clap::Args;

use crate::config::Settings;
use crate::crypto::{
    decrypt_with_mode, encrypt_with_mode, generate_key_material, CipherMode, SymmetricKeyMaterial,
};
use crate::display::{format_symmetric_report, SymmetricReport};
use crate::error::{CipherError, CipherResult};

/// Arguments for the symmetric demo
#[derive(Args, Debug, Default)]
pub struct SymmetricArgs {
    /// Cipher mode (ctr or cfb); defaults to the configured mode
    #[arg(short, long)]
    pub mode: Option<CipherMode>,

    /// Message to encrypt; defaults to the configured message
    #[arg(short = 'M', long)]
    pub message: Option<String>,

    /// AES-256 key as 64 hex digits (requires --iv)
    #[arg(long, requires = "iv")]
    pub key: Option<String>,

    /// IV / nonce as 32 hex digits (requires --key)
    #[arg(long, requires = "key")]
    pub iv: Option<String>,
}

/// Run the symmetric demo and return the printed report
///
/// The boolean is the round-trip self-check.
pub fn run_symmetric_demo(settings: &Settings, args: &SymmetricArgs) -> CipherResult<(String, bool)> {
    let mode = args.mode.unwrap_or(settings.symmetric.default_mode);
    let message = args
        .message
        .as_deref()
        .unwrap_or(&settings.demo.symmetric_message);

    let material = match (&args.key, &args.iv) {
        (Some(key), Some(iv)) => SymmetricKeyMaterial::from_hex(key, iv)?,
        (None, None) => generate_key_material()?,
        _ => {
            return Err(CipherError::Config(
                "--key and --iv must be given together".to_string(),
            ))
        }
    };

    let plaintext = message.as_bytes();
    let ciphertext = encrypt_with_mode(mode, &material, plaintext)?;
    let decrypted = decrypt_with_mode(mode, &material, &ciphertext)?;

    let report = SymmetricReport {
        mode,
        material: &material,
        plaintext,
        ciphertext: &ciphertext,
        decrypted: &decrypted,
    };
    Ok((format_symmetric_report(&report), report.round_trip_ok()))
}

/// Handle the symmetric command
pub fn handle_symmetric_command(settings: &Settings, args: SymmetricArgs) -> CipherResult<bool> {
    let (output, ok) = run_symmetric_demo(settings, &args)?;
    println!("{}", output);
    Ok(ok)
}
