//! User settings for cipher-demo
//!
//! Holds the defaults the demo runner uses when no command-line override is
//! given: cipher mode, RSA parameters and the demonstration messages.

use serde::{Deserialize, Serialize};

use super::paths::DemoPaths;
use crate::crypto::asymmetric::{
    DEFAULT_MODULUS_BITS, DEFAULT_PUBLIC_EXPONENT, MAX_MODULUS_BITS, MIN_MODULUS_BITS,
};
use crate::crypto::CipherMode;
use crate::error::CipherError;

/// Symmetric engine defaults
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SymmetricSettings {
    /// Mode used when `--mode` is not given
    #[serde(default)]
    pub default_mode: CipherMode,
}

/// RSA key generation defaults
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AsymmetricSettings {
    /// Modulus size in bits
    #[serde(default = "default_modulus_bits")]
    pub modulus_bits: usize,

    /// Public exponent
    #[serde(default = "default_public_exponent")]
    pub public_exponent: u64,
}

impl Default for AsymmetricSettings {
    fn default() -> Self {
        Self {
            modulus_bits: default_modulus_bits(),
            public_exponent: default_public_exponent(),
        }
    }
}

/// Messages encrypted by the demo runner
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DemoSettings {
    #[serde(default = "default_symmetric_message")]
    pub symmetric_message: String,

    #[serde(default = "default_asymmetric_message")]
    pub asymmetric_message: String,
}

impl Default for DemoSettings {
    fn default() -> Self {
        Self {
            symmetric_message: default_symmetric_message(),
            asymmetric_message: default_asymmetric_message(),
        }
    }
}

/// User settings for cipher-demo
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    #[serde(default)]
    pub symmetric: SymmetricSettings,

    #[serde(default)]
    pub asymmetric: AsymmetricSettings,

    #[serde(default)]
    pub demo: DemoSettings,
}

fn default_schema_version() -> u32 {
    1
}

fn default_modulus_bits() -> usize {
    DEFAULT_MODULUS_BITS
}

fn default_public_exponent() -> u64 {
    DEFAULT_PUBLIC_EXPONENT
}

fn default_symmetric_message() -> String {
    "Hello, this is Blockchain homework 1!".to_string()
}

fn default_asymmetric_message() -> String {
    "Hello, this is a secret message!".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            symmetric: SymmetricSettings::default(),
            asymmetric: AsymmetricSettings::default(),
            demo: DemoSettings::default(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or fall back to defaults if the file doesn't exist
    ///
    /// Nothing is written here; callers that want the defaults on disk call
    /// [`Settings::save`].
    pub fn load_or_create(paths: &DemoPaths) -> Result<Self, CipherError> {
        let settings_path = paths.settings_file();

        if !settings_path.exists() {
            tracing::debug!(path = %settings_path.display(), "no settings file, using defaults");
            return Ok(Settings::default());
        }

        let contents = std::fs::read_to_string(&settings_path)
            .map_err(|e| CipherError::Io(format!("Failed to read settings file: {}", e)))?;

        let settings: Settings = serde_json::from_str(&contents)
            .map_err(|e| CipherError::Config(format!("Failed to parse settings file: {}", e)))?;

        settings.validate()?;
        tracing::debug!(path = %settings_path.display(), "loaded settings");
        Ok(settings)
    }

    /// Save settings to disk
    pub fn save(&self, paths: &DemoPaths) -> Result<(), CipherError> {
        self.validate()?;
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| CipherError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| CipherError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }

    /// Reject RSA parameters key generation would refuse anyway
    pub fn validate(&self) -> Result<(), CipherError> {
        let bits = self.asymmetric.modulus_bits;
        if !(MIN_MODULUS_BITS..=MAX_MODULUS_BITS).contains(&bits) {
            return Err(CipherError::Config(format!(
                "asymmetric.modulus_bits must be between {} and {}, got {}",
                MIN_MODULUS_BITS, MAX_MODULUS_BITS, bits
            )));
        }

        let exponent = self.asymmetric.public_exponent;
        if exponent < 3 || exponent % 2 == 0 {
            return Err(CipherError::Config(format!(
                "asymmetric.public_exponent must be odd and at least 3, got {}",
                exponent
            )));
        }

        Ok(())
    }
}
