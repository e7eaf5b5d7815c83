//! Word Tiles - static SVG label tiles on a grainy background
//!
//! Each word in a fixed list becomes one SVG file named after its key. Every
//! tile shares the same canvas, colours and font, and the label is stretched
//! to a constant `textLength` so words of different lengths line up.
//!
//! # Example
//!
//! ```rust
//! use word_tiles::{render_tile, TileStyle};
//!
//! let svg = render_tile("ПРАВИЛА", &TileStyle::default());
//! assert!(svg.contains("<svg"));
//! assert!(svg.contains("ПРАВИЛА"));
//! ```

pub mod error;
pub mod generator;
pub mod renderer;
pub mod style;
pub mod words;

pub use error::GenerateError;
pub use generator::{tile_path, GenerationReport, Generator, DEFAULT_OUTPUT_DIR};
pub use renderer::{render_tile, TileBuilder};
pub use style::{NoiseFilter, StyleError, TileStyle};
pub use words::{validate_key, WordEntry, WordMap, WordMapError};

use std::path::Path;

/// Write the built-in tiles into `output_dir`
///
/// # Example
///
/// ```rust,no_run
/// let report = word_tiles::generate("images").unwrap();
/// assert_eq!(report.len(), 7);
/// ```
pub fn generate(output_dir: impl AsRef<Path>) -> Result<GenerationReport, GenerateError> {
    Generator::new(output_dir.as_ref()).run()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_builtin() {
        let dir = tempfile::tempdir().unwrap();
        let report = generate(dir.path()).unwrap();
        assert_eq!(report.len(), 7);
        for entry in &WordMap::builtin() {
            let svg = std::fs::read_to_string(tile_path(dir.path(), &entry.key)).unwrap();
            assert!(svg.contains(&entry.label));
        }
    }
}
