//! Symmetric demo report formatting

use crate::crypto::{CipherMode, SymmetricKeyMaterial};

use super::report::{format_field, format_hex, format_text, format_title, format_verdict};

/// Everything one symmetric encrypt/decrypt pairing produced
pub struct SymmetricReport<'a> {
    pub mode: CipherMode,
    pub material: &'a SymmetricKeyMaterial,
    pub plaintext: &'a [u8],
    pub ciphertext: &'a [u8],
    pub decrypted: &'a [u8],
}

impl SymmetricReport<'_> {
    /// Whether decryption reproduced the original plaintext
    pub fn round_trip_ok(&self) -> bool {
        self.plaintext == self.decrypted
    }
}

/// Format a symmetric demo run
///
/// Prints the key and IV in hex; only use this with throwaway demo material.
pub fn format_symmetric_report(report: &SymmetricReport<'_>) -> String {
    let iv_label = match report.mode {
        CipherMode::Ctr => "IV (nonce)",
        CipherMode::Cfb => "IV",
    };

    let mut output = format_title(&format!("AES-256-{} Encryption", report.mode));
    output.push('\n');
    output.push_str(&format_field("Key", &format_hex(report.material.key().as_bytes())));
    output.push_str(&format_field(iv_label, &format_hex(report.material.iv().as_bytes())));
    output.push_str(&format_field("Original Text", &format_text(report.plaintext)));
    output.push_str(&format_field("Encrypted Text", &format_hex(report.ciphertext)));
    output.push_str(&format_field("Decrypted Text", &format_text(report.decrypted)));
    output.push_str(&format_verdict(report.round_trip_ok()));
    output
}
