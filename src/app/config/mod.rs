// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, loaded from a
//! `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - UI language
//! - `[video]` - Background video source, fallback URL and autoplay
//! - `[headline]` / `[ticker]` - Rotation cadence of each rotator
//! - `[site]` - Base URL that site-relative links resolve against
//!
//! Every field is optional; a missing field falls back to its default and a
//! missing file yields [`Config::default`].
//!
//! # Examples
//!
//! ```no_run
//! use iced_hero::app::config;
//!
//! let (config, _warning) = config::load();
//! let timings = config.headline.timings(iced_hero::rotator::RotatorTimings::headline());
//! assert!(timings.cycle() > timings.fade());
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::content::{BACKGROUND_VIDEO_FILE, FALLBACK_VIDEO_URL, SITE_BASE_URL};
use crate::error::{Error, Result};
use crate::rotator::RotatorTimings;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

/// Background video settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct VideoConfig {
    /// Local video file, tried first.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<PathBuf>,

    /// Remote video tried when the local file cannot be opened.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fallback_url: Option<String>,

    /// Start playing as soon as the video is loaded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub autoplay: Option<bool>,
}

impl VideoConfig {
    #[must_use]
    pub fn source(&self) -> PathBuf {
        self.source
            .clone()
            .unwrap_or_else(|| PathBuf::from(BACKGROUND_VIDEO_FILE))
    }

    #[must_use]
    pub fn fallback_url(&self) -> &str {
        self.fallback_url.as_deref().unwrap_or(FALLBACK_VIDEO_URL)
    }

    #[must_use]
    pub fn autoplay(&self) -> bool {
        self.autoplay.unwrap_or(DEFAULT_VIDEO_AUTOPLAY)
    }
}

/// Cadence of one rotator, in milliseconds.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct RotationConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cycle_ms: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fade_ms: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub settle_ms: Option<u64>,

    /// One-time delay before the first fade-in; `0` disables it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initial_reveal_ms: Option<u64>,
}

impl RotationConfig {
    /// Resolves the configured values on top of `base`, clamping them into
    /// their valid ranges.
    #[must_use]
    pub fn timings(&self, base: RotatorTimings) -> RotatorTimings {
        let millis = |duration: std::time::Duration| duration.as_millis() as u64;
        let initial_reveal = match self.initial_reveal_ms {
            Some(0) => None,
            Some(ms) => Some(ms),
            None => base.initial_reveal().map(millis),
        };

        RotatorTimings::from_millis(
            self.cycle_ms.unwrap_or_else(|| millis(base.cycle())),
            self.fade_ms.unwrap_or_else(|| millis(base.fade())),
            self.settle_ms.unwrap_or_else(|| millis(base.settle())),
            initial_reveal,
        )
    }
}

/// Site settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct SiteConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
}

impl SiteConfig {
    #[must_use]
    pub fn base_url(&self) -> &str {
        self.base_url.as_deref().unwrap_or(SITE_BASE_URL)
    }
}

// =============================================================================
// Main Config Struct
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub video: VideoConfig,

    #[serde(default)]
    pub headline: RotationConfig,

    #[serde(default)]
    pub ticker: RotationConfig,

    #[serde(default)]
    pub site: SiteConfig,
}

// =============================================================================
// Load / Save
// =============================================================================

fn config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

/// Loads the configuration from the default path.
///
/// Returns `(config, warning)`. When the file exists but cannot be read or
/// parsed, the defaults are returned together with the i18n key of a
/// warning to surface.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    let Some(path) = config_path_with_override(base_dir) else {
        return (Config::default(), None);
    };
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no config file, using defaults");
        return (Config::default(), None);
    }

    match load_from_path(&path) {
        Ok(config) => {
            tracing::debug!(path = %path.display(), "config loaded");
            (config, None)
        }
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "config unreadable, using defaults");
            (
                Config::default(),
                Some("notification-config-load-error".to_string()),
            )
        }
    }
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

/// Saves the configuration to a custom directory.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path, creating parent directories.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let config = Config {
            general: GeneralConfig {
                language: Some("fr".to_string()),
            },
            video: VideoConfig {
                source: Some(PathBuf::from("/srv/hero.mp4")),
                fallback_url: Some("https://example.com/hero.mp4".to_string()),
                autoplay: Some(false),
            },
            headline: RotationConfig {
                cycle_ms: Some(8_000),
                ..RotationConfig::default()
            },
            ticker: RotationConfig::default(),
            site: SiteConfig {
                base_url: Some("https://example.com".to_string()),
            },
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn load_from_path_invalid_toml_errors() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        match load_from_path(&config_path) {
            Err(Error::Config(_)) => {}
            other => panic!("expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn invalid_file_falls_back_to_defaults_with_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(CONFIG_FILE), "[ticker]\ncycle_ms = \"fast\"")
            .expect("failed to write config");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));

        assert_eq!(config, Config::default());
        assert_eq!(
            warning.as_deref(),
            Some("notification-config-load-error")
        );
    }

    #[test]
    fn missing_file_yields_defaults_without_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (config, warning) = load_with_override(Some(temp_dir.path().join("absent")));
        assert_eq!(config, Config::default());
        assert!(warning.is_none());
    }

    #[test]
    fn default_config_resolves_to_builtin_values() {
        let config = Config::default();
        assert_eq!(config.video.source(), PathBuf::from(BACKGROUND_VIDEO_FILE));
        assert_eq!(config.video.fallback_url(), FALLBACK_VIDEO_URL);
        assert!(config.video.autoplay());
        assert_eq!(config.site.base_url(), SITE_BASE_URL);
        assert_eq!(
            config.headline.timings(RotatorTimings::headline()),
            RotatorTimings::headline()
        );
        assert_eq!(
            config.ticker.timings(RotatorTimings::ticker()),
            RotatorTimings::ticker()
        );
    }

    #[test]
    fn partial_rotation_section_keeps_other_defaults() {
        let config: Config = toml::from_str("[ticker]\ncycle_ms = 7000\n").expect("valid toml");
        let timings = config.ticker.timings(RotatorTimings::ticker());

        assert_eq!(timings.cycle(), Duration::from_millis(7_000));
        assert_eq!(timings.fade(), Duration::from_millis(DEFAULT_FADE_MS));
        assert_eq!(timings.settle(), Duration::from_millis(DEFAULT_SETTLE_MS));
        assert_eq!(timings.initial_reveal(), None);
    }

    #[test]
    fn zero_initial_reveal_disables_it() {
        let rotation = RotationConfig {
            initial_reveal_ms: Some(0),
            ..RotationConfig::default()
        };
        assert_eq!(
            rotation.timings(RotatorTimings::headline()).initial_reveal(),
            None
        );
    }

    #[test]
    fn overlapping_cycle_is_stretched() {
        let rotation = RotationConfig {
            cycle_ms: Some(1_000),
            fade_ms: Some(3_000),
            settle_ms: Some(500),
            initial_reveal_ms: None,
        };
        let timings = rotation.timings(RotatorTimings::ticker());
        assert!(timings.cycle() > timings.fade() + timings.settle());
    }

    #[test]
    fn save_with_override_round_trips_through_load_with_override() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let base_dir = temp_dir.path().to_path_buf();
        let config = Config {
            general: GeneralConfig {
                language: Some("en-US".to_string()),
            },
            ..Config::default()
        };

        save_with_override(&config, Some(base_dir.clone())).expect("save should succeed");
        let (loaded, warning) = load_with_override(Some(base_dir));

        assert!(warning.is_none());
        assert_eq!(loaded.general.language.as_deref(), Some("en-US"));
    }
}
