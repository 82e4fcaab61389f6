//! Demo configuration
//!
//! Loaded from TOML at startup, falls back to defaults if no config file
//! exists or it cannot be parsed.

use legobrick_core::Brick;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::examples::Example;

/// Top-level demo configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    /// Console rendering options.
    pub output: OutputConfig,
    /// The brick collection used by the collection example.
    pub collection: CollectionConfig,
    /// Which examples a bare `run` executes, in order.
    pub examples: ExamplesConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Emoji decorations on headings and result lines.
    pub decorations: bool,
    /// Glyph repeated to draw the color tally bars.
    pub bar_glyph: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CollectionConfig {
    pub bricks: Vec<Brick>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExamplesConfig {
    pub enabled: Vec<Example>,
}

// ============================================================
// Defaults
// ============================================================

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            output: OutputConfig::default(),
            collection: CollectionConfig::default(),
            examples: ExamplesConfig::default(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { decorations: true, bar_glyph: "█".into() }
    }
}

impl Default for CollectionConfig {
    fn default() -> Self {
        Self {
            bricks: vec![
                Brick::new("red", 2, 4),
                Brick::new("blue", 2, 2),
                Brick::new("green", 1, 8),
                Brick::new("yellow", 4, 2),
                Brick::new("black", 1, 1),
            ],
        }
    }
}

impl Default for ExamplesConfig {
    fn default() -> Self {
        Self { enabled: Example::ALL.to_vec() }
    }
}

// ============================================================
// Loading
// ============================================================

impl DemoConfig {
    /// Load config from a TOML file, falling back to defaults.
    pub fn load(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match Self::from_toml(&content) {
                Ok(config) => {
                    tracing::info!("Loaded config from {}", path.display());
                    config
                }
                Err(e) => {
                    tracing::warn!("Failed to parse {}: {} (using defaults)", path.display(), e);
                    Self::default()
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::info!("No config at {} (using defaults)", path.display());
                Self::default()
            }
            Err(e) => {
                tracing::warn!("Failed to read {}: {} (using defaults)", path.display(), e);
                Self::default()
            }
        }
    }

    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Render the effective config as TOML (for generating a starter file).
    pub fn to_toml(&self) -> String {
        toml::to_string_pretty(self).unwrap_or_default()
    }
}
