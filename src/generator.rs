//! Writes one SVG tile per word into an output directory

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::GenerateError;
use crate::renderer::render_tile;
use crate::style::TileStyle;
use crate::words::WordMap;

/// Directory the binary writes into, relative to the working directory
pub const DEFAULT_OUTPUT_DIR: &str = "images";

/// Paths written by a generator run, in word order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationReport {
    pub written: Vec<PathBuf>,
}

impl GenerationReport {
    pub fn len(&self) -> usize {
        self.written.len()
    }

    pub fn is_empty(&self) -> bool {
        self.written.is_empty()
    }
}

/// Batch generator over a word map
#[derive(Debug, Clone)]
pub struct Generator {
    output_dir: PathBuf,
    style: TileStyle,
    words: WordMap,
}

impl Generator {
    /// Create a generator with the built-in style and words
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            style: TileStyle::default(),
            words: WordMap::builtin(),
        }
    }

    /// Set the tile style
    pub fn with_style(mut self, style: TileStyle) -> Self {
        self.style = style;
        self
    }

    /// Load the tile style from a TOML file
    pub fn with_style_file(self, path: &Path) -> Result<Self, GenerateError> {
        Ok(self.with_style(TileStyle::from_file(path)?))
    }

    /// Set the words to render
    pub fn with_words(mut self, words: WordMap) -> Self {
        self.words = words;
        self
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Ensure the output directory and write every tile
    ///
    /// Existing tiles are overwritten and unrelated files are left alone.
    /// The first I/O failure aborts the run; tiles written before it remain.
    pub fn run(&self) -> Result<GenerationReport, GenerateError> {
        fs::create_dir_all(&self.output_dir)
            .map_err(|e| GenerateError::create_dir(&self.output_dir, e))?;

        let mut report = GenerationReport::default();
        for entry in &self.words {
            let path = tile_path(&self.output_dir, &entry.key);
            let svg = render_tile(&entry.label, &self.style);
            fs::write(&path, svg).map_err(|e| GenerateError::write(&path, e))?;
            log::debug!("wrote {} ({})", path.display(), entry.label);
            report.written.push(path);
        }

        log::info!(
            "generated {} tile(s) in {}",
            report.len(),
            self.output_dir.display()
        );
        Ok(report)
    }
}

/// Location of the tile for `key`
pub fn tile_path(output_dir: &Path, key: &str) -> PathBuf {
    output_dir.join(format!("{}.svg", key))
}
