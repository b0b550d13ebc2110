use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use serde::Deserialize;

/// Settings schema loaded from `config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    /// Locale tag used when `--locale` is not given.
    #[serde(default = "default_locale")]
    pub locale: String,
    /// Directories or files searched for extra string tables.
    #[serde(default)]
    pub locale_dirs: Vec<PathBuf>,
    /// Use the shorter size format by default.
    #[serde(default)]
    pub short_sizes: bool,
    /// Also write logs to a daily-rotated file.
    #[serde(default)]
    pub log_to_file: bool,
}

fn default_locale() -> String {
    "en".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            locale: default_locale(),
            locale_dirs: Vec::new(),
            short_sizes: false,
            log_to_file: false,
        }
    }
}

impl Settings {
    /// Parse and validate settings TOML.
    pub fn from_toml_str(input: &str) -> Result<Self> {
        let settings: Self = toml::from_str(input).context("failed to parse settings TOML")?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load and validate settings from disk.
    ///
    /// Relative `locale_dirs` are resolved against the file's directory.
    pub fn from_path(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read settings at {}", path.display()))?;

        let mut settings = Self::from_toml_str(&raw)
            .with_context(|| format!("invalid settings at {}", path.display()))?;

        if let Some(base) = path.parent() {
            for dir in &mut settings.locale_dirs {
                if dir.is_relative() {
                    *dir = base.join(&*dir);
                }
            }
        }
        Ok(settings)
    }

    /// Load from an explicit path, or from [`default_path`] if it exists.
    ///
    /// An explicit path must exist. A missing default file yields defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::from_path(path);
        }
        match default_path() {
            Some(path) if path.is_file() => Self::from_path(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Validate required fields and semantic constraints.
    pub fn validate(&self) -> Result<()> {
        if self.locale.trim().is_empty() {
            bail!("locale must not be empty");
        }
        if self.locale.chars().any(char::is_whitespace) {
            bail!("locale {:?} must not contain whitespace", self.locale);
        }

        let mut seen = BTreeSet::new();
        for dir in &self.locale_dirs {
            if dir.as_os_str().is_empty() {
                bail!("locale_dirs entries must not be empty");
            }
            if !seen.insert(dir) {
                bail!("locale_dirs contains duplicate entry {:?}", dir);
            }
        }

        Ok(())
    }
}

/// Return the settings file path.
///
/// Precedence: `READABLE_CONFIG` env var > `<config dir>/readable/config.toml`.
pub fn default_path() -> Option<PathBuf> {
    if let Ok(path) = std::env::var("READABLE_CONFIG") {
        return Some(PathBuf::from(path));
    }
    dirs::config_dir().map(|dir| dir.join("readable").join("config.toml"))
}
