//! Fontgen Core - backend-agnostic bitmap font atlas layout
//!
//! This crate measures glyph outlines, packs them into a fixed-size atlas
//! with a shelf heuristic, extracts kerning pairs and writes the BMFont text
//! descriptor. Font decoding and rasterization are provided through the
//! traits in [`traits`].

pub mod atlas;
pub mod bounds;
pub mod config;
pub mod constants;
pub mod descriptor;
pub mod dummy_font;
pub mod error;
pub mod kerning;
pub mod packer;
pub mod path;
pub mod traits;

// Re-export main types
pub use atlas::{generate, pack_glyphs, Atlas};
pub use bounds::{extract_bounds, Bounds, PaddedGlyphBound};
pub use config::{AtlasConfig, GlyphStyle, LineCap, LineJoin, Padding, PaddingMode, ShelfMode};
pub use descriptor::{serialize_descriptor, CharRow, FaceMeta, FontDescriptor};
pub use error::{FontgenError, FontgenResult};
pub use kerning::{build_kerning, KerningPair};
pub use packer::{Shelf, ShelfPacker};
pub use path::{GlyphOutline, Path, PathCommand};

// Re-export traits and types
pub use traits::*;
