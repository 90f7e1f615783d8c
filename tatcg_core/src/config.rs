//! Site configuration.
//!
//! Loaded from `Site.toml`. Every key is optional; anything left out keeps
//! the live site's behaviour.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::locale::{LocaleConfig, LocaleScheme};
use crate::navigation::DEFAULT_SCROLL_THRESHOLD;
use crate::submission::{SubmissionPolicy, UnreachableFallback};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse site config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Root configuration structure
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub contact: ContactConfig,
    pub locale: LocaleSettings,
    pub chrome: ChromeConfig,
}

/// What the contact form does when the endpoint cannot be reached.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FallbackMode {
    /// Pretend the submission went through after `fallback_delay_ms`.
    #[default]
    Simulate,
    /// Show the error banner.
    Surface,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactConfig {
    /// Path or URL the form POSTs to.
    pub endpoint: String,
    pub fallback: FallbackMode,
    pub fallback_delay_ms: u64,
    /// How long the success / error banner stays visible.
    pub status_reset_ms: u64,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            endpoint: "/api/contact".to_string(),
            fallback: FallbackMode::Simulate,
            fallback_delay_ms: 1200,
            status_reset_ms: 5000,
        }
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LocaleSettings {
    pub scheme: LocaleScheme,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChromeConfig {
    pub scroll_threshold_px: f64,
    pub testimonial_interval_ms: u64,
}

impl Default for ChromeConfig {
    fn default() -> Self {
        Self {
            scroll_threshold_px: DEFAULT_SCROLL_THRESHOLD,
            testimonial_interval_ms: 6000,
        }
    }
}

impl SiteConfig {
    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(raw)?)
    }

    pub fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&raw)
    }

    /// Like [`load_from_path`](Self::load_from_path), but a missing or broken
    /// file yields the defaults.
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }
        match Self::load_from_path(path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("Failed to load {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    pub fn submission_policy(&self) -> SubmissionPolicy {
        let fallback = match self.contact.fallback {
            FallbackMode::Simulate => UnreachableFallback::Simulate {
                latency: Duration::from_millis(self.contact.fallback_delay_ms),
            },
            FallbackMode::Surface => UnreachableFallback::Surface,
        };
        SubmissionPolicy {
            fallback,
            status_reset: Duration::from_millis(self.contact.status_reset_ms),
        }
    }

    pub fn locale_config(&self) -> LocaleConfig {
        self.locale.scheme.config()
    }

    pub fn testimonial_interval(&self) -> Duration {
        Duration::from_millis(self.chrome.testimonial_interval_ms)
    }
}
