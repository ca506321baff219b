//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.marquee/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::PathBuf;

use crate::core::gesture;
use crate::core::state::Slide;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct MarqueeConfig {
    #[serde(default)]
    pub carousel: CarouselConfig,
    #[serde(default)]
    pub slides: Vec<SlideEntry>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct CarouselConfig {
    pub autoplay_interval_ms: Option<u64>,
    pub swipe_threshold: Option<f32>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SlideEntry {
    pub title: String,
    pub body: Option<String>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_AUTOPLAY_INTERVAL_MS: u64 = 4000;

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub autoplay_interval_ms: u64,
    pub swipe_threshold: f32,
    pub slides: Vec<Slide>,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.marquee/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".marquee").join("config.toml"))
}

/// Load config from `~/.marquee/config.toml` (or an explicit override path).
///
/// If the default file doesn't exist, generates a commented-out default and
/// returns `MarqueeConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config(override_path: Option<&PathBuf>) -> Result<MarqueeConfig, ConfigError> {
    let path = match override_path.cloned().or_else(config_path) {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(MarqueeConfig::default());
        }
    };

    if !path.exists() {
        if override_path.is_some() {
            return Err(ConfigError::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("config file not found: {}", path.display()),
            )));
        }
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(MarqueeConfig::default());
    }

    let contents = fs::read_to_string(&path).map_err(ConfigError::Io)?;
    let config: MarqueeConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &PathBuf) {
    let default_content = r#"# Marquee Configuration
# All settings are optional — defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [carousel]
# autoplay_interval_ms = 4000   # Automatic advance period
# swipe_threshold = 50.0        # Horizontal cells of drag to register a swipe

# With no [[slides]] entries, a built-in sample deck is shown.

# [[slides]]
# title = "Getting started"
# body = "Drag horizontally to swipe, click a neighbor to navigate."

# [[slides]]
# title = "Second slide"
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
///
/// `cli_interval_ms` is from the `--interval-ms` flag (None = not specified).
pub fn resolve(config: &MarqueeConfig, cli_interval_ms: Option<u64>) -> ResolvedConfig {
    // Autoplay interval: CLI → env → config → default
    let autoplay_interval_ms = cli_interval_ms
        .or_else(|| {
            std::env::var("MARQUEE_INTERVAL_MS")
                .ok()
                .and_then(|v| v.parse().ok())
        })
        .or(config.carousel.autoplay_interval_ms)
        .unwrap_or(DEFAULT_AUTOPLAY_INTERVAL_MS);

    // Swipe threshold: env → config → default
    let swipe_threshold = std::env::var("MARQUEE_SWIPE_THRESHOLD")
        .ok()
        .and_then(|v| v.parse().ok())
        .or(config.carousel.swipe_threshold)
        .unwrap_or(gesture::SWIPE_THRESHOLD);

    let slides = if config.slides.is_empty() {
        sample_slides()
    } else {
        config
            .slides
            .iter()
            .map(|entry| Slide {
                title: entry.title.clone(),
                body: entry.body.clone().unwrap_or_default(),
            })
            .collect()
    };

    ResolvedConfig {
        autoplay_interval_ms,
        swipe_threshold,
        slides,
    }
}

/// Built-in deck shown when the config declares no slides.
fn sample_slides() -> Vec<Slide> {
    let entries = [
        (
            "Welcome to Marquee",
            "A multi-item carousel for your terminal. The center slide is \
             flanked by its neighbors; everything else stays hidden.",
        ),
        (
            "Navigate",
            "Click a neighbor slide or an indicator dot, press the arrow \
             keys, or drag horizontally to swipe.",
        ),
        (
            "Autoplay",
            "Slides advance on their own every few seconds. Any manual \
             navigation restarts the countdown.",
        ),
        (
            "Hover to pause",
            "Keep the pointer over the strip and autoplay waits until you \
             move away.",
        ),
        (
            "Configure",
            "Edit ~/.marquee/config.toml to bring your own slides, interval \
             and swipe threshold.",
        ),
    ];
    entries
        .iter()
        .map(|(title, body)| Slide {
            title: (*title).to_string(),
            body: (*body).to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_defaults() {
        let resolved = resolve(&MarqueeConfig::default(), None);
        assert_eq!(resolved.autoplay_interval_ms, DEFAULT_AUTOPLAY_INTERVAL_MS);
        assert_eq!(resolved.swipe_threshold, gesture::SWIPE_THRESHOLD);
        assert!(!resolved.slides.is_empty(), "sample deck fills in");
    }

    #[test]
    fn test_cli_interval_wins() {
        let config = MarqueeConfig {
            carousel: CarouselConfig {
                autoplay_interval_ms: Some(2000),
                swipe_threshold: None,
            },
            slides: Vec::new(),
        };
        let resolved = resolve(&config, Some(750));
        assert_eq!(resolved.autoplay_interval_ms, 750);
    }

    #[test]
    fn test_config_slides_parse() {
        let toml_str = r#"
            [carousel]
            autoplay_interval_ms = 1500

            [[slides]]
            title = "One"
            body = "first"

            [[slides]]
            title = "Two"
        "#;
        let config: MarqueeConfig = toml::from_str(toml_str).unwrap();
        let resolved = resolve(&config, None);
        assert_eq!(resolved.autoplay_interval_ms, 1500);
        assert_eq!(resolved.slides.len(), 2);
        assert_eq!(resolved.slides[0].title, "One");
        assert_eq!(resolved.slides[0].body, "first");
        assert_eq!(resolved.slides[1].body, "");
    }

    #[test]
    fn test_malformed_toml_is_a_parse_error() {
        let result: Result<MarqueeConfig, _> = toml::from_str("slides = 3");
        assert!(result.is_err());
    }
}
