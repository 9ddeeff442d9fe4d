//! Asymmetric demo report formatting

use super::report::{format_field, format_hex, format_text, format_title, format_verdict};

/// Everything one RSA-OAEP encrypt/decrypt pairing produced
pub struct AsymmetricReport<'a> {
    pub modulus_bits: usize,
    pub public_key_pem: &'a str,
    pub plaintext: &'a [u8],
    pub ciphertext: &'a [u8],
    pub decrypted: &'a [u8],
}

impl AsymmetricReport<'_> {
    /// Whether decryption reproduced the original plaintext
    pub fn round_trip_ok(&self) -> bool {
        self.plaintext == self.decrypted
    }
}

/// Format an RSA-OAEP demo run
pub fn format_asymmetric_report(report: &AsymmetricReport<'_>) -> String {
    let mut output = format_title(&format!(
        "RSA-{} OAEP (SHA-256) Encryption",
        report.modulus_bits
    ));
    output.push('\n');
    output.push_str(&format!("Public Key (PEM):\n{}\n", report.public_key_pem));
    output.push_str(&format_field("Original Text", &format_text(report.plaintext)));
    output.push_str(&format_field(
        &format!("Encrypted Text ({} bytes)", report.ciphertext.len()),
        &format_hex(report.ciphertext),
    ));
    output.push_str(&format_field("Decrypted Text", &format_text(report.decrypted)));
    output.push_str(&format_verdict(report.round_trip_ok()));
    output
}
