//! SVG renderer for word tiles
//!
//! This module turns a label and a `TileStyle` into a standalone SVG
//! document.

pub mod svg;

pub use svg::{render_tile, TileBuilder};
