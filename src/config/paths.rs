//! Path management for saku-cli
//!
//! Provides XDG-compliant path resolution for the preference file.
//!
//! ## Path Resolution Order
//!
//! 1. `SAKU_CLI_DATA_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/saku-cli` or `~/.config/saku-cli`
//! 3. Windows: `%APPDATA%\saku-cli`

use std::path::PathBuf;

use crate::error::SakuError;

/// Manages all paths used by saku-cli
#[derive(Debug, Clone)]
pub struct SakuPaths {
    /// Base directory for all saku-cli data
    base_dir: PathBuf,
}

impl SakuPaths {
    /// Create a new SakuPaths instance
    ///
    /// Path resolution:
    /// 1. `SAKU_CLI_DATA_DIR` env var (explicit override)
    /// 2. Unix: `$XDG_CONFIG_HOME/saku-cli` or `~/.config/saku-cli`
    /// 3. Windows: `%APPDATA%\saku-cli`
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, SakuError> {
        let base_dir = if let Ok(custom) = std::env::var("SAKU_CLI_DATA_DIR") {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create SakuPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory (~/.config/saku-cli/ or equivalent)
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to the preference file
    pub fn prefs_file(&self) -> PathBuf {
        self.base_dir.join("prefs.json")
    }

    /// Ensure the base directory exists
    pub fn ensure_directories(&self) -> Result<(), SakuError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| SakuError::Io(format!("Failed to create base directory: {}", e)))?;

        Ok(())
    }
}

/// Resolve the default data directory path based on platform
#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, SakuError> {
    // Unix (Linux/macOS): Use XDG_CONFIG_HOME if set, otherwise ~/.config
    let config_base = match std::env::var("XDG_CONFIG_HOME") {
        Ok(xdg) => PathBuf::from(xdg),
        Err(_) => {
            let home = std::env::var("HOME")
                .map_err(|_| SakuError::Config("Could not determine home directory".into()))?;
            PathBuf::from(home).join(".config")
        }
    };
    Ok(config_base.join("saku-cli"))
}

/// Resolve the default data directory path based on platform
#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, SakuError> {
    // Windows: Use APPDATA
    let appdata = std::env::var("APPDATA")
        .map_err(|_| SakuError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("saku-cli"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_with_base_dir() {
        let temp = TempDir::new().unwrap();
        let paths = SakuPaths::with_base_dir(temp.path().to_path_buf());

        assert_eq!(paths.base_dir(), &temp.path().to_path_buf());
        assert_eq!(paths.prefs_file(), temp.path().join("prefs.json"));
    }

    #[test]
    fn test_ensure_directories() {
        let temp = TempDir::new().unwrap();
        let base = temp.path().join("nested").join("saku");
        let paths = SakuPaths::with_base_dir(base.clone());

        paths.ensure_directories().unwrap();
        assert!(base.is_dir());
    }
}
