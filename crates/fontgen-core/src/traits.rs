use crate::bounds::PaddedGlyphBound;
use crate::config::GlyphStyle;
use crate::error::FontgenResult;
use crate::path::GlyphOutline;

/// Face description taken from the font's name table
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FaceInfo {
    pub family: String,
    pub bold: bool,
    pub italic: bool,
}

/// Vertical metrics in font design units
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FontMetrics {
    pub ascender: f64,
    pub descender: f64,
    pub units_per_em: f64,
}

impl FontMetrics {
    /// Design units to pixels for a `size` pixel em
    ///
    /// Kerning amounts and advances are scaled against the full
    /// ascender-to-descender extent.
    pub fn unit_scale(&self, size: f64) -> f64 {
        let extent = self.ascender.abs() + self.descender.abs();
        if extent > 0.0 {
            size / extent
        } else {
            0.0
        }
    }
}

/// Font data provider: decodes a font and hands out resolved glyph data
pub trait FontProvider {
    fn face(&self) -> FaceInfo;
    fn metrics(&self) -> FontMetrics;
    /// One outline per character of `text`, in order, duplicates kept
    fn glyphs_for(&self, text: &str) -> FontgenResult<Vec<GlyphOutline>>;
    /// Raw kerning between two glyphs in design units, 0 when none
    fn kerning(&self, first: &GlyphOutline, second: &GlyphOutline) -> f64;
}

/// Rasterizer that draws packed glyphs onto its own pixel surface
pub trait AtlasRenderer {
    type Error: std::error::Error;

    fn render(
        &mut self,
        glyphs: &[PaddedGlyphBound],
        style: &GlyphStyle,
    ) -> Result<(), Self::Error>;
}

impl<P: FontProvider + ?Sized> FontProvider for &P {
    fn face(&self) -> FaceInfo {
        (**self).face()
    }

    fn metrics(&self) -> FontMetrics {
        (**self).metrics()
    }

    fn glyphs_for(&self, text: &str) -> FontgenResult<Vec<GlyphOutline>> {
        (**self).glyphs_for(text)
    }

    fn kerning(&self, first: &GlyphOutline, second: &GlyphOutline) -> f64 {
        (**self).kerning(first, second)
    }
}
