use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use serde::Deserialize;

use crate::api::DEFAULT_API_BASE;
use crate::batches::DEFAULT_MAX_STORIES;
use crate::cli::Cli;
use crate::theme::ThemeVariant;

const APP_SENTINEL: &str = "pico-hn";

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    #[serde(rename = "_app")]
    pub app: String,
    pub theme: Option<ThemeVariant>,
    pub max_stories: Option<usize>,
    pub api_base: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            app: APP_SENTINEL.to_string(),
            theme: None,
            max_stories: None,
            api_base: None,
        }
    }
}

impl Settings {
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings from {}", path.display()))?;

        let settings: Settings = toml::from_str(&content)
            .with_context(|| format!("Failed to parse settings from {}", path.display()))?;

        settings.validate()?;
        Ok(settings)
    }

    fn validate(&self) -> Result<()> {
        if self.app != APP_SENTINEL {
            bail!(
                "Settings file appears to belong to another application (expected _app = '{}', found '{}')",
                APP_SENTINEL,
                self.app
            );
        }
        Ok(())
    }
}

/// Effective session configuration. Fixed once the view starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub max_stories: usize,
    pub api_base: String,
    pub variant: ThemeVariant,
}

impl Config {
    /// Priority: command line > settings file > built-in defaults.
    pub fn resolve(cli: &Cli, settings: &Settings) -> Result<Self> {
        let max_stories = cli
            .max_stories
            .or(settings.max_stories)
            .unwrap_or(DEFAULT_MAX_STORIES);
        if max_stories == 0 {
            bail!("max_stories must be at least 1");
        }

        let api_base = cli
            .api_base
            .clone()
            .or_else(|| settings.api_base.clone())
            .unwrap_or_else(|| DEFAULT_API_BASE.to_string());

        let variant = if cli.dark {
            ThemeVariant::Dark
        } else if cli.light {
            ThemeVariant::Light
        } else {
            settings.theme.unwrap_or_default()
        };

        Ok(Self {
            max_stories,
            api_base,
            variant,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_stories: DEFAULT_MAX_STORIES,
            api_base: DEFAULT_API_BASE.to_string(),
            variant: ThemeVariant::default(),
        }
    }
}

pub fn config_dir(custom: Option<&PathBuf>) -> Option<PathBuf> {
    custom
        .cloned()
        .or_else(|| dirs::home_dir().map(|p| p.join(".config").join("pico-hn")))
}

pub fn settings_path(config_dir: &Path) -> PathBuf {
    config_dir.join("settings.toml")
}

pub fn log_path(config_dir: &Path) -> PathBuf {
    config_dir.join("pico-hn.log")
}
