//! Shared formatting helpers for demo reports

/// Render bytes as text, replacing invalid UTF-8 sequences
pub fn format_text(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}

/// Render bytes as lowercase hex, or a placeholder when empty
pub fn format_hex(bytes: &[u8]) -> String {
    if bytes.is_empty() {
        "(empty)".to_string()
    } else {
        hex::encode(bytes)
    }
}

/// Format a title with an underline of matching width
pub fn format_title(title: &str) -> String {
    format!("{}\n{}\n", title, "=".repeat(title.chars().count()))
}

/// Format a labelled line followed by a blank line
pub fn format_field(label: &str, value: &str) -> String {
    format!("{}: {}\n\n", label, value)
}

/// Format the round-trip self-check
pub fn format_verdict(matches: bool) -> String {
    if matches {
        "Round trip: OK (decrypted text matches the original)".to_string()
    } else {
        "Round trip: MISMATCH (decrypted text differs from the original)".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_hex() {
        assert_eq!(format_hex(&[0x00, 0xab, 0xff]), "00abff");
        assert_eq!(format_hex(&[]), "(empty)");
    }

    #[test]
    fn test_format_text_lossy() {
        assert_eq!(format_text(b"hello"), "hello");
        assert_eq!(format_text(&[0x68, 0xff, 0x69]), "h\u{fffd}i");
    }

    #[test]
    fn test_format_title() {
        assert_eq!(format_title("AES"), "AES\n===\n");
    }

    #[test]
    fn test_format_verdict() {
        assert!(format_verdict(true).contains("OK"));
        assert!(format_verdict(false).contains("MISMATCH"));
    }
}
