//! Editor configuration.
//!
//! ## Learning: Serde for Serialization
//!
//! `#[derive(Deserialize)]` generates the TOML parsing code, and
//! `#[serde(default)]` fills any missing field from `Default::default()`,
//! so a config file only needs the settings it changes:
//!
//! ```toml
//! [line_numbers]
//! relative = true
//!
//! [colors]
//! cursor = "#ff8800"
//! ```

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Main editor configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Editor behaviour settings
    pub editor: EditorConfig,

    /// Cursor appearance
    pub cursor: CursorConfig,

    /// Colour scheme
    pub colors: ColorConfig,

    /// Line number gutter
    pub line_numbers: LineNumberConfig,

    /// Keyboard settings
    pub keyboard: KeyboardConfig,
}

impl Config {
    /// Loads config from the default location, falling back to defaults.
    pub fn load() -> Self {
        match Self::load_from_default_path() {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("Using default config: {}", e);
                Self::default()
            }
        }
    }

    /// Loads config from a file.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }

    /// Loads from the default config path, if the file exists.
    fn load_from_default_path() -> Result<Self, ConfigError> {
        let path = Self::default_path()?;
        if path.exists() {
            tracing::info!("Loading config from {}", path.display());
            Self::load_from(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Returns the default config file path.
    pub fn default_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
        Ok(config_dir.join("texed").join("config.toml"))
    }
}

/// Editor behaviour configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Font size in points
    pub font_size: f32,

    /// Lines scrolled per mouse wheel notch
    pub scroll_lines: usize,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            font_size: 24.0,
            scroll_lines: 3,
        }
    }
}

/// Cursor appearance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CursorConfig {
    /// Width of the beam cursor in pixels
    pub thickness: u32,
}

impl Default for CursorConfig {
    fn default() -> Self {
        Self { thickness: 2 }
    }
}

/// Colour scheme.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorConfig {
    pub background: Rgb,
    pub foreground: Rgb,
    pub cursor: Rgb,
    /// Used for line numbers away from the cursor row
    pub alt_foreground: Rgb,
    pub border: Rgb,
    /// Block cursor alpha is `1 / transparency`
    pub transparency: f32,
}

impl ColorConfig {
    /// Alpha of the filled block cursor, in `0.0..=1.0`.
    pub fn block_alpha(&self) -> f32 {
        if self.transparency <= 0.0 {
            1.0
        } else {
            (1.0 / self.transparency).clamp(0.0, 1.0)
        }
    }
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            background: Rgb::new(0x1e, 0x1e, 0x2e),
            foreground: Rgb::new(0xcd, 0xd6, 0xf4),
            cursor: Rgb::new(0xf5, 0xe0, 0xdc),
            alt_foreground: Rgb::new(0x6c, 0x70, 0x86),
            border: Rgb::new(0x89, 0xb4, 0xfa),
            transparency: 2.0,
        }
    }
}

/// Line number gutter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LineNumberConfig {
    /// Draw the gutter at all
    pub enabled: bool,

    /// Show the distance from the cursor row instead of the line number
    pub relative: bool,

    /// Number absolute lines from 0
    pub zero_indexing: bool,
}

impl Default for LineNumberConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            relative: false,
            zero_indexing: false,
        }
    }
}

/// Keyboard configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyboardConfig {
    /// Extra bindings: `"<mode> <key>" = "<command>"`
    pub bindings: BTreeMap<String, String>,
}

/// A colour written as `#RRGGBB` in the config file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parses `#RRGGBB` or `RRGGBB`; spaces are ignored.
    pub fn parse(s: &str) -> Result<Self, ConfigError> {
        let hex: String = s.chars().filter(|&c| c != ' ' && c != '#').collect();
        let invalid = || ConfigError::InvalidColor(s.to_string());

        if hex.len() != 6 || !hex.is_ascii() {
            return Err(invalid());
        }
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&hex[range], 16).map_err(|_| invalid())
        };

        Ok(Self {
            r: channel(0..2)?,
            g: channel(2..4)?,
            b: channel(4..6)?,
        })
    }
}

impl TryFrom<String> for Rgb {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Rgb::parse(&value)
    }
}

impl From<Rgb> for String {
    fn from(rgb: Rgb) -> Self {
        rgb.to_string()
    }
}

impl std::fmt::Display for Rgb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Config directory not found")]
    NoConfigDir,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid color {0:?}, expected #RRGGBB")]
    InvalidColor(String),
}
