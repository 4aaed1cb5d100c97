//! Session configuration file I/O

use std::fs;
use std::path::PathBuf;

use crate::config::session as session_config;
use crate::error::ShellError;

use super::models::SessionConfig;

/// Handles reading and writing the session configuration file
pub struct SessionStore {
    config_path: PathBuf,
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionStore {
    /// Create a new store using the default config path (~/.coshell/config.json)
    pub fn new() -> Self {
        Self {
            config_path: Self::default_config_path(),
        }
    }

    /// Create a store with a custom config path (for testing or --config)
    pub fn with_path(path: PathBuf) -> Self {
        Self { config_path: path }
    }

    /// Get the default config file path
    fn default_config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(session_config::DIR_NAME)
            .join(session_config::FILE_NAME)
    }

    /// Load the session configuration from disk.
    /// Returns Default if file doesn't exist, errors on corrupt JSON.
    pub fn load(&self) -> Result<SessionConfig, ShellError> {
        if !self.config_path.exists() {
            return Ok(SessionConfig::default());
        }

        let content = fs::read_to_string(&self.config_path).map_err(|e| {
            ShellError::Config(format!(
                "Failed to read session config {}: {}",
                self.config_path.display(),
                e
            ))
        })?;

        serde_json::from_str(&content).map_err(|e| {
            ShellError::Config(format!(
                "Failed to parse session config {}: {}",
                self.config_path.display(),
                e
            ))
        })
    }

    /// Save the session configuration to disk.
    /// Uses atomic write (tmp file + rename) and creates parent dir if needed.
    pub fn save(&self, config: &SessionConfig) -> Result<(), ShellError> {
        // Create parent directory if missing
        if let Some(parent) = self.config_path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                ShellError::Config(format!(
                    "Failed to create config directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }

        let json = serde_json::to_string_pretty(config)
            .map_err(|e| ShellError::Config(format!("Failed to serialize session config: {}", e)))?;

        // Atomic write: write to tmp file, then rename
        let tmp_path = self.config_path.with_extension("json.tmp");
        fs::write(&tmp_path, &json).map_err(|e| {
            ShellError::Config(format!(
                "Failed to write temp config file {}: {}",
                tmp_path.display(),
                e
            ))
        })?;

        // Config holds credentials, keep it private to the owner
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let permissions = fs::Permissions::from_mode(0o600);
            fs::set_permissions(&tmp_path, permissions).map_err(|e| {
                ShellError::Config(format!("Failed to set permissions on config file: {}", e))
            })?;
        }

        fs::rename(&tmp_path, &self.config_path).map_err(|e| {
            ShellError::Config(format!(
                "Failed to rename temp config file to {}: {}",
                self.config_path.display(),
                e
            ))
        })?;

        Ok(())
    }
}
