//! Application configuration.
//!
//! Loaded from a JSON file when one is given on the command line or present
//! as `authdemo.json` in the working directory. Missing keys take defaults.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use color_eyre::eyre::WrapErr;
use serde::Deserialize;

pub const DEFAULT_CONFIG_FILE: &str = "authdemo.json";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Theme {
    #[default]
    Default,
    HighContrast,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// How long the success banner stays on the dashboard.
    pub banner_timeout_ms: u64,
    pub theme: Theme,
    /// Log destination. Nothing is logged when unset.
    pub log_file: Option<PathBuf>,
    /// Default tracing directive; `RUST_LOG` takes precedence.
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            banner_timeout_ms: 3000,
            theme: Theme::Default,
            log_file: None,
            log_level: "info".into(),
        }
    }
}

impl Config {
    pub fn load(path: &Path) -> color_eyre::Result<Self> {
        let raw = fs::read_to_string(path)
            .wrap_err_with(|| format!("reading config {}", path.display()))?;
        serde_json::from_str(&raw).wrap_err_with(|| format!("parsing config {}", path.display()))
    }

    /// Picks the config source: explicit path, else `authdemo.json` in `cwd`
    /// if it exists, else defaults.
    pub fn resolve(arg: Option<&Path>, cwd: &Path) -> color_eyre::Result<Self> {
        if let Some(path) = arg {
            return Self::load(path);
        }
        let candidate = cwd.join(DEFAULT_CONFIG_FILE);
        if candidate.is_file() {
            Self::load(&candidate)
        } else {
            Ok(Self::default())
        }
    }

    pub fn banner_timeout(&self) -> Duration {
        Duration::from_millis(self.banner_timeout_ms)
    }
}
