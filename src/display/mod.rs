//! Display formatting for terminal output
//!
//! Turns the results of a demo run into the text the runner prints:
//! key material and ciphertext in hex, the PEM public key, and a round-trip
//! verdict.

pub mod asymmetric;
pub mod report;
pub mod symmetric;

pub use asymmetric::{format_asymmetric_report, AsymmetricReport};
pub use symmetric::{format_symmetric_report, SymmetricReport};
