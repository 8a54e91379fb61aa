//! Config loading with an embedded fallback
//!
//! - If `CONFIG_FILE` is NOT set: use the embedded `config.yaml` (no filesystem access)
//! - If `CONFIG_FILE` IS set and the file exists: read it
//! - If `CONFIG_FILE` IS set but the file is missing: fall back to the embedded copy

use rust_embed::RustEmbed;
use std::borrow::Cow;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Embedded default config
#[derive(RustEmbed)]
#[folder = "."]
#[include = "config.yaml"]
struct EmbeddedConfig;

const CONFIG_NAME: &str = "config.yaml";

/// Report of init (extraction) operations
#[derive(Debug, Default)]
pub struct InitReport {
    pub written: Vec<String>,
    pub skipped: Vec<String>,
}

/// Asset loader with optional filesystem override
pub struct AssetLoader {
    /// External config file path (from CONFIG_FILE env var)
    config_file: Option<PathBuf>,
}

impl AssetLoader {
    /// Create a new asset loader
    ///
    /// `config_file` should be `Some` only if the env var was set.
    pub fn new(config_file: Option<PathBuf>) -> Self {
        Self { config_file }
    }

    /// Create a loader from the `CONFIG_FILE` environment variable
    pub fn from_env() -> Self {
        Self::new(std::env::var("CONFIG_FILE").ok().map(PathBuf::from))
    }

    /// The configured external path, if any
    pub fn config_path(&self) -> Option<&Path> {
        self.config_file.as_deref()
    }

    /// Read config bytes, preferring the external file
    pub fn read_config(&self) -> io::Result<Cow<'static, [u8]>> {
        if let Some(ref path) = self.config_file {
            if path.exists() {
                tracing::trace!(path = %path.display(), "Loading config from filesystem");
                return Ok(Cow::Owned(fs::read(path)?));
            }
            tracing::debug!(path = %path.display(), "Config file missing, using embedded");
        }

        Self::embedded_config()
    }

    /// Read config as a UTF-8 string
    pub fn read_config_string(&self) -> io::Result<String> {
        let bytes = self.read_config()?;
        String::from_utf8(bytes.into_owned())
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }

    /// The embedded default config
    pub fn embedded_config() -> io::Result<Cow<'static, [u8]>> {
        EmbeddedConfig::get(CONFIG_NAME)
            .map(|f| f.data)
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "Embedded config not found"))
    }

    /// Write the embedded config to the configured path (or `./config.yaml`)
    ///
    /// Existing files are left alone unless `force` is set.
    pub fn init(&self, force: bool) -> io::Result<InitReport> {
        let target = self
            .config_file
            .clone()
            .unwrap_or_else(|| PathBuf::from(CONFIG_NAME));
        let mut report = InitReport::default();
        let label = target.display().to_string();

        if target.exists() && !force {
            tracing::debug!(path = %label, "Config exists, skipping");
            report.skipped.push(label);
            return Ok(report);
        }

        if let Some(parent) = target.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(&target, Self::embedded_config()?)?;
        tracing::info!(path = %label, "Wrote config");
        report.written.push(label);

        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_embedded_config_present() {
        let loader = AssetLoader::new(None);
        let content = loader.read_config_string().unwrap();
        assert!(content.contains("white_threshold"));
    }

    #[test]
    fn test_external_config_preferred() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("custom.yaml");
        fs::write(&path, "analysis:\n  white_threshold: 200\n").unwrap();

        let loader = AssetLoader::new(Some(path));
        let content = loader.read_config_string().unwrap();
        assert!(content.contains("200"));
    }

    #[test]
    fn test_missing_external_falls_back() {
        let dir = TempDir::new().unwrap();
        let loader = AssetLoader::new(Some(dir.path().join("nope.yaml")));

        let content = loader.read_config_string().unwrap();
        assert!(content.contains("percentage_threshold"));
    }

    #[test]
    fn test_init_writes_then_skips() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.yaml");
        let loader = AssetLoader::new(Some(path.clone()));

        let report = loader.init(false).unwrap();
        assert_eq!(report.written.len(), 1);
        assert!(path.exists());

        let report = loader.init(false).unwrap();
        assert!(report.written.is_empty());
        assert_eq!(report.skipped.len(), 1);

        let report = loader.init(true).unwrap();
        assert_eq!(report.written.len(), 1);
    }
}
