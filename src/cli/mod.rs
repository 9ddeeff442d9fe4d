//! CLI command handlers
//!
//! This module contains the demo runner commands, bridging the clap
//! argument parsing with the crypto engines and the display layer.

pub mod asymmetric;
pub mod symmetric;

pub use asymmetric::{handle_asymmetric_command, AsymmetricArgs};
pub use symmetric::{handle_symmetric_command, SymmetricArgs};
