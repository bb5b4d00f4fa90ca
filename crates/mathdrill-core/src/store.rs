//! Persistence of the last-used quiz configuration.
//!
//! One serialized [`QuizConfig`] lives under a fixed key. Loading never
//! fails: missing data yields `None`, malformed data is logged and ignored,
//! and the caller falls back to its defaults.

use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result};

use crate::model::QuizConfig;

/// Key the configuration is stored under.
pub const CONFIG_KEY: &str = "mentalMathConfig";

/// Somewhere to keep the last-used configuration.
pub trait ConfigStore: Send + Sync {
    /// The stored configuration, if there is a readable one.
    fn load(&self) -> Option<QuizConfig>;

    /// Overwrite the stored configuration.
    fn save(&self, config: &QuizConfig) -> Result<()>;

    /// Remove the stored configuration.
    fn clear(&self) -> Result<()>;

    /// The stored configuration, or `fallback` when nothing usable is stored.
    fn load_or(&self, fallback: QuizConfig) -> QuizConfig {
        self.load().unwrap_or(fallback)
    }
}

/// Stores the configuration as `mentalMathConfig.json` in a data directory.
#[derive(Debug, Clone)]
pub struct FileConfigStore {
    path: PathBuf,
}

impl FileConfigStore {
    pub fn new(data_dir: impl AsRef<Path>) -> Self {
        Self {
            path: data_dir.as_ref().join(format!("{CONFIG_KEY}.json")),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ConfigStore for FileConfigStore {
    fn load(&self) -> Option<QuizConfig> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return None,
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "cannot read stored config, using defaults");
                return None;
            }
        };
        match serde_json::from_str(&content) {
            Ok(config) => Some(config),
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "ignoring malformed stored config");
                None
            }
        }
    }

    fn save(&self, config: &QuizConfig) -> Result<()> {
        let json = serde_json::to_string_pretty(config).context("failed to serialize config")?;
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
        std::fs::write(&self.path, json)
            .with_context(|| format!("failed to write config to {}", self.path.display()))?;
        tracing::debug!(path = %self.path.display(), "saved config");
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e)
                .with_context(|| format!("failed to remove {}", self.path.display())),
        }
    }
}

/// In-memory store holding the serialized form, for tests and embedding.
#[derive(Debug, Default)]
pub struct MemoryConfigStore {
    raw: Mutex<Option<String>>,
}

impl MemoryConfigStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that already holds `raw` under the config key.
    pub fn with_raw(raw: impl Into<String>) -> Self {
        Self {
            raw: Mutex::new(Some(raw.into())),
        }
    }

    pub fn raw(&self) -> Option<String> {
        self.raw.lock().ok().and_then(|guard| guard.clone())
    }
}

impl ConfigStore for MemoryConfigStore {
    fn load(&self) -> Option<QuizConfig> {
        let raw = self.raw()?;
        serde_json::from_str(&raw)
            .map_err(|e| tracing::warn!(error = %e, "ignoring malformed stored config"))
            .ok()
    }

    fn save(&self, config: &QuizConfig) -> Result<()> {
        let json = serde_json::to_string(config).context("failed to serialize config")?;
        let mut guard = self
            .raw
            .lock()
            .map_err(|_| anyhow::anyhow!("config store lock poisoned"))?;
        *guard = Some(json);
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        let mut guard = self
            .raw
            .lock()
            .map_err(|_| anyhow::anyhow!("config store lock poisoned"))?;
        *guard = None;
        Ok(())
    }
}
