//! Configuration file I/O operations

use std::ffi::OsString;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use fs2::FileExt;

use super::Config;

/// `path` with `suffix` appended to its file name
fn sibling(path: &Path, suffix: &str) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_else(|| OsString::from("data"));
    name.push(suffix);
    path.with_file_name(name)
}

/// Write a file atomically under an exclusive advisory lock.
///
/// The lock lives in a separate `<name>.lock` file so the rename cannot
/// invalidate it. Parent directories are created as needed.
pub(crate) fn write_atomic(path: &Path, content: &[u8]) -> std::io::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }

    let lock_file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(sibling(path, ".lock"))?;

    // Blocks until available; released when lock_file is dropped
    lock_file.lock_exclusive()?;

    let temp_path = sibling(path, ".tmp");
    let mut temp_file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(&temp_path)?;
    temp_file.write_all(content)?;
    temp_file.sync_all()?;

    std::fs::rename(&temp_path, path)
}

impl Config {
    /// Get the global config directory path (~/.careerpath/)
    pub fn global_config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".careerpath")
    }

    /// Get the global config file path (~/.careerpath/config.toml)
    pub fn global_config_path() -> PathBuf {
        Self::global_config_dir().join("config.toml")
    }

    /// Load configuration from a file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    /// Load global configuration from ~/.careerpath/config.toml
    ///
    /// A missing file is not an error: the built-in defaults apply.
    pub fn load() -> Result<Self> {
        Self::load_from(None)
    }

    /// Load from an explicit path, or the global config when `None`
    pub fn load_from(path: Option<&Path>) -> Result<Self> {
        let path = path
            .map(Path::to_path_buf)
            .unwrap_or_else(Self::global_config_path);

        if !path.exists() {
            tracing::debug!("No config at {}, using built-in defaults", path.display());
            return Ok(Self::default());
        }

        Self::from_file(&path)
    }

    /// Save configuration to a file with atomic write and file locking.
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self).with_context(|| "Failed to serialize config")?;

        write_atomic(path, content.as_bytes())
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }
}
