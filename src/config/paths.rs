//! Path management for cipher-demo
//!
//! ## Path Resolution Order
//!
//! 1. `CIPHER_DEMO_CONFIG_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/cipher-demo` or `~/.config/cipher-demo`
//! 3. Windows: `%APPDATA%\cipher-demo`

use std::path::PathBuf;

use crate::error::CipherError;

/// Environment variable that overrides the config directory
pub const CONFIG_DIR_ENV: &str = "CIPHER_DEMO_CONFIG_DIR";

/// Manages the paths used by cipher-demo
#[derive(Debug, Clone)]
pub struct DemoPaths {
    /// Base directory for cipher-demo configuration
    base_dir: PathBuf,
}

impl DemoPaths {
    /// Resolve the config directory from the environment
    ///
    /// # Errors
    ///
    /// Returns an error if no home or APPDATA directory can be determined.
    pub fn new() -> Result<Self, CipherError> {
        Self::with_override(std::env::var(CONFIG_DIR_ENV).ok())
    }

    /// Resolve the config directory, preferring a non-empty override
    fn with_override(custom: Option<String>) -> Result<Self, CipherError> {
        let base_dir = match custom {
            Some(custom) if !custom.is_empty() => PathBuf::from(custom),
            _ => resolve_default_path()?,
        };

        Ok(Self { base_dir })
    }

    /// Create DemoPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory (~/.config/cipher-demo/ or equivalent)
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Ensure the base directory exists
    pub fn ensure_directories(&self) -> Result<(), CipherError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| CipherError::Io(format!("Failed to create config directory: {}", e)))
    }
}

/// Resolve the default config directory path based on platform
#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, CipherError> {
    let config_base = match std::env::var("XDG_CONFIG_HOME") {
        Ok(xdg) if !xdg.is_empty() => PathBuf::from(xdg),
        _ => {
            let home = std::env::var("HOME").map_err(|_| {
                CipherError::Config("Could not determine HOME directory".into())
            })?;
            PathBuf::from(home).join(".config")
        }
    };
    Ok(config_base.join("cipher-demo"))
}

/// Resolve the default config directory path based on platform
#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, CipherError> {
    let appdata = std::env::var("APPDATA")
        .map_err(|_| CipherError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("cipher-demo"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_custom_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = DemoPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.base_dir(), temp_dir.path());
        assert_eq!(paths.settings_file(), temp_dir.path().join("config.json"));
    }

    #[test]
    fn test_override_wins() {
        let temp_dir = TempDir::new().unwrap();
        let custom_path = temp_dir.path().to_str().unwrap().to_string();

        let paths = DemoPaths::with_override(Some(custom_path)).unwrap();

        assert_eq!(paths.base_dir(), temp_dir.path());
    }

    #[test]
    fn test_ensure_directories() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("a").join("b");
        let paths = DemoPaths::with_base_dir(nested.clone());

        paths.ensure_directories().unwrap();

        assert!(nested.is_dir());
    }
}
