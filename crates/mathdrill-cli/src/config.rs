//! Application configuration (`mathdrill.toml`).

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use mathdrill_core::model::QuizConfig;
use mathdrill_core::store::{ConfigStore, FileConfigStore};

/// Environment variable that overrides `data_dir`.
pub const DATA_DIR_ENV: &str = "MATHDRILL_DATA_DIR";

/// Top-level mathdrill configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Directory holding the last-used quiz configuration.
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    /// Where finished quiz reports are saved, if anywhere.
    #[serde(default)]
    pub report_dir: Option<PathBuf>,
    /// Fixed RNG seed for reproducible quizzes.
    #[serde(default)]
    pub seed: Option<u64>,
    /// Quiz settings used until a configuration has been stored.
    #[serde(default)]
    pub defaults: QuizConfig,
}

fn default_data_dir() -> PathBuf {
    dirs_path().unwrap_or_else(|| PathBuf::from(".mathdrill"))
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            report_dir: None,
            seed: None,
            defaults: QuizConfig::default(),
        }
    }
}

impl AppConfig {
    pub fn config_store(&self) -> FileConfigStore {
        FileConfigStore::new(&self.data_dir)
    }

    /// The stored quiz configuration, falling back to `[defaults]`.
    pub fn quiz_config(&self, store: &dyn ConfigStore) -> QuizConfig {
        store.load_or(self.defaults.clone())
    }

    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(dir) = lookup(DATA_DIR_ENV).filter(|d| !d.is_empty()) {
            self.data_dir = PathBuf::from(dir);
        }
        self.data_dir = resolve_path(&self.data_dir);
        self.report_dir = self.report_dir.as_deref().map(resolve_path);
    }
}

/// Resolve environment variable references like `${VAR_NAME}` in a string.
fn resolve_env_vars(s: &str) -> String {
    let mut result = s.to_string();
    while let Some(start) = result.find("${") {
        if let Some(end) = result[start..].find('}') {
            let var_name = &result[start + 2..start + end];
            let value = std::env::var(var_name).unwrap_or_default();
            result = format!(
                "{}{}{}",
                &result[..start],
                value,
                &result[start + end + 1..]
            );
        } else {
            break;
        }
    }
    result
}

fn resolve_path(path: &Path) -> PathBuf {
    PathBuf::from(resolve_env_vars(&path.to_string_lossy()))
}

/// Load config from an explicit path, or search the default locations.
///
/// Search order:
/// 1. `mathdrill.toml` in the current directory
/// 2. `~/.config/mathdrill/config.toml`
///
/// `MATHDRILL_DATA_DIR` overrides `data_dir`.
pub fn load_config_from(path: Option<&Path>) -> Result<AppConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("mathdrill.toml");
        if local.exists() {
            Some(local)
        } else {
            dirs_path()
                .map(|home| home.join("config.toml"))
                .filter(|global| global.exists())
        }
    };

    let mut config = match config_path {
        Some(path) => {
            tracing::debug!(path = %path.display(), "loading config");
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            toml::from_str::<AppConfig>(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?
        }
        None => AppConfig::default(),
    };

    config.apply_overrides(|key| std::env::var(key).ok());
    Ok(config)
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("mathdrill"))
}
