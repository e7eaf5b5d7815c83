//! Tile style: canvas, colours, font and noise settings
//!
//! The built-in style is kept as an embedded TOML document and parsed on
//! demand, so the defaults read the same way a custom style file would.

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

/// Errors that can occur when loading or parsing a tile style
#[derive(Error, Debug)]
pub enum StyleError {
    #[error("Failed to read style file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse style TOML: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// Parameters of the grain filter applied to the background
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NoiseFilter {
    /// `baseFrequency` of the fractal turbulence
    pub base_frequency: f64,
    /// `numOctaves` of the fractal turbulence
    pub num_octaves: u32,
    /// Upper bound of the alpha transfer table
    pub max_alpha: f64,
}

/// Layout and colour constants shared by every tile
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TileStyle {
    pub width: u32,
    pub height: u32,
    pub background: String,
    pub text_color: String,
    /// CSS font stack, written verbatim into `font-family`
    pub font_family: String,
    pub font_size: u32,
    pub font_weight: u32,
    /// Fraction of the canvas width every label is stretched to
    pub text_length_ratio: f64,
    pub noise: NoiseFilter,
}

const DEFAULT_STYLE: &str = r##"
width = 578
height = 331
background = "#1f1f1f"
text_color = "#e8d9f1"
font_family = "'Montserrat', 'Arial', sans-serif"
font_size = 88
font_weight = 700
text_length_ratio = 0.82

[noise]
base_frequency = 0.9
num_octaves = 1
max_alpha = 0.12
"##;

impl TileStyle {
    /// Load a style from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, StyleError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Load a style from a TOML string
    pub fn from_str(content: &str) -> Result<Self, StyleError> {
        Ok(toml::from_str(content)?)
    }

    /// Horizontal extent every label is normalized to
    pub fn text_length(&self) -> f64 {
        f64::from(self.width) * self.text_length_ratio
    }

    /// Set the canvas size
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Set the background colour
    pub fn with_background(mut self, color: impl Into<String>) -> Self {
        self.background = color.into();
        self
    }

    /// Set the label colour
    pub fn with_text_color(mut self, color: impl Into<String>) -> Self {
        self.text_color = color.into();
        self
    }

    /// Set the font stack and size
    pub fn with_font(mut self, family: impl Into<String>, size: u32) -> Self {
        self.font_family = family.into();
        self.font_size = size;
        self
    }
}

impl Default for TileStyle {
    fn default() -> Self {
        Self::from_str(DEFAULT_STYLE).expect("Default style should be valid TOML")
    }
}
