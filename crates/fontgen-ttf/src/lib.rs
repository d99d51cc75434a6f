//! Fontgen TTF - font data provider for fontgen-core
//!
//! Decodes TrueType/OpenType files with `ttf-parser` and exposes glyph
//! outlines, names, vertical metrics and `kern` pairs through
//! [`fontgen_core::FontProvider`].

mod error;
mod font;
mod outline;

pub use error::{TtfError, TtfResult};
pub use font::{style_flags, TtfFont};
pub use outline::PathSink;
