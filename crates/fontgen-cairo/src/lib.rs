//! Fontgen Cairo - rasterizer backend for fontgen-core
//!
//! Implements [`fontgen_core::AtlasRenderer`] on a cairo image surface and
//! writes the result as PNG.

mod color;
mod error;
mod rasterizer;

pub use color::Rgba;
pub use error::{RasterError, RasterResult};
pub use rasterizer::{load_pattern, CairoRasterizer};
