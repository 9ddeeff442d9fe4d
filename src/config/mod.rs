//! Configuration module for cipher-demo
//!
//! This module provides configuration management including:
//! - XDG-compliant path resolution
//! - Settings persistence (cipher mode, RSA parameters, demo messages)

pub mod paths;
pub mod settings;

pub use paths::DemoPaths;
pub use settings::Settings;
