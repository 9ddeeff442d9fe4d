//! Asymmetric demo command
//!
//! Generates an RSA key pair, shows the PEM public key, and round-trips a
//! message through RSA-OAEP.

use clap::Args;

use crate::config::Settings;
use crate::crypto::{asymmetric, generate_key_pair, serialize_public_key};
use crate::display::{format_asymmetric_report, AsymmetricReport};
use crate::error::CipherResult;

/// Arguments for the asymmetric demo
#[derive(Args, Debug, Default)]
pub struct AsymmetricArgs {
    /// Modulus size in bits; defaults to the configured size
    #[arg(short, long)]
    pub bits: Option<usize>,

    /// Public exponent; defaults to the configured exponent
    #[arg(short, long)]
    pub exponent: Option<u64>,

    /// Message to encrypt; defaults to the configured message
    #[arg(short = 'M', long)]
    pub message: Option<String>,
}

/// Run the asymmetric demo and return the printed report
///
/// The boolean is the round-trip self-check.
pub fn run_asymmetric_demo(
    settings: &Settings,
    args: &AsymmetricArgs,
) -> CipherResult<(String, bool)> {
    let bits = args.bits.unwrap_or(settings.asymmetric.modulus_bits);
    let exponent = args.exponent.unwrap_or(settings.asymmetric.public_exponent);
    let message = args
        .message
        .as_deref()
        .unwrap_or(&settings.demo.asymmetric_message);

    let pair = generate_key_pair(bits, exponent)?;
    let pem = serialize_public_key(pair.public_key())?;

    let plaintext = message.as_bytes();
    let ciphertext = asymmetric::encrypt(pair.public_key(), plaintext)?;
    let decrypted = asymmetric::decrypt(pair.private_key(), &ciphertext)?;

    let report = AsymmetricReport {
        modulus_bits: pair.modulus_bits(),
        public_key_pem: &pem,
        plaintext,
        ciphertext: &ciphertext,
        decrypted: &decrypted,
    };
    Ok((format_asymmetric_report(&report), report.round_trip_ok()))
}

/// Handle the asymmetric command
pub fn handle_asymmetric_command(settings: &Settings, args: AsymmetricArgs) -> CipherResult<bool> {
    let (output, ok) = run_asymmetric_demo(settings, &args)?;
    println!("{}", output);
    Ok(ok)
}
