//! Extract → pack → kern → describe, for one atlas run

use tracing::{debug, info};

use crate::bounds::{extract_bounds, PaddedGlyphBound};
use crate::config::{AtlasConfig, Padding};
use crate::descriptor::{FaceMeta, FontDescriptor};
use crate::error::FontgenResult;
use crate::kerning::{build_kerning_with_metrics, KerningPair};
use crate::packer::{Shelf, ShelfPacker};
use crate::path::GlyphOutline;
use crate::traits::FontProvider;

/// A fully laid out atlas and its descriptor
#[derive(Clone, Debug, PartialEq)]
pub struct Atlas {
    pub width: u32,
    pub height: u32,
    /// Placed bounds in packing order (tallest first)
    pub glyphs: Vec<PaddedGlyphBound>,
    pub shelves: Vec<Shelf>,
    pub kernings: Vec<KerningPair>,
    pub descriptor: FontDescriptor,
}

impl Atlas {
    pub fn descriptor_text(&self) -> String {
        self.descriptor.to_text()
    }
}

/// Measure and pack `glyphs` with the legacy padding and shelf behaviour
pub fn pack_glyphs(
    glyphs: Vec<GlyphOutline>,
    width: u32,
    height: u32,
    padding: Padding,
    size: u32,
) -> FontgenResult<Vec<PaddedGlyphBound>> {
    pack_with(ShelfPacker::new(width, height, padding), glyphs, size).map(|(bounds, _)| bounds)
}

fn pack_with(
    packer: ShelfPacker,
    glyphs: Vec<GlyphOutline>,
    size: u32,
) -> FontgenResult<(Vec<PaddedGlyphBound>, Vec<Shelf>)> {
    let mut bounds = extract_bounds(glyphs, f64::from(size));
    let shelves = packer.pack(&mut bounds)?;
    Ok((bounds, shelves))
}

/// Run the whole layout for `config.glyphs` from `font`
///
/// Either every glyph is placed and described, or an error is returned.
pub fn generate<P: FontProvider + ?Sized>(font: &P, config: &AtlasConfig) -> FontgenResult<Atlas> {
    debug!(
        "Generating {}x{} atlas: size={}, {} glyphs",
        config.width,
        config.height,
        config.size,
        config.glyphs.chars().count()
    );

    let outlines = font.glyphs_for(&config.glyphs)?;
    let packer = ShelfPacker::new(config.width, config.height, config.padding)
        .with_padding_mode(config.padding_mode)
        .with_shelf_mode(config.shelf_mode);
    let (glyphs, shelves) = pack_with(packer, outlines, config.size)?;

    let metrics = font.metrics();
    let kernings = build_kerning_with_metrics(font, metrics, &glyphs, f64::from(config.size));
    let face = FaceMeta::from_config(config, &font.face());
    let descriptor = FontDescriptor::new(face, config, metrics, &glyphs, kernings.clone());

    info!(
        "Atlas laid out: {} glyphs on {} shelves, {} kerning pairs",
        glyphs.len(),
        shelves.len(),
        kernings.len()
    );

    Ok(Atlas {
        width: config.width,
        height: config.height,
        glyphs,
        shelves,
        kernings,
        descriptor,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dummy_font::{DummyFont, DummyGlyph};
    use crate::config::ShelfMode;
    use crate::error::FontgenError;

    fn font() -> DummyFont {
        DummyFont::new(800.0, -200.0, 1000.0)
            .with_glyph(DummyGlyph::new('a', 500.0, 400.0, 500.0))
            .with_glyph(DummyGlyph::new('b', 600.0, 500.0, 700.0))
            .with_glyph(DummyGlyph::empty(' ', 250.0).with_name("space"))
    }

    #[test]
    fn test_generate_two_glyphs() {
        let config = AtlasConfig::default().with_glyphs("ab").with_size(10).with_dimensions(64, 64);
        let atlas = generate(&font(), &config).unwrap();
        assert_eq!(atlas.glyphs.len(), 2);
        assert_eq!(atlas.glyphs[0].glyph.codepoint, 'b' as u32);
        assert_eq!(atlas.descriptor.chars.len(), 2);
        assert!(atlas.kernings.is_empty());
        let text = atlas.descriptor_text();
        assert!(text.contains("<chars count='2'>"));
        assert!(text.contains("<kernings count='0'>"));
    }

    #[test]
    fn test_generate_reports_fit_error() {
        let config = AtlasConfig::default().with_glyphs("abab").with_size(10).with_dimensions(8, 8);
        let err = generate(&font(), &config).unwrap_err();
        assert!(err.is_fit_error());
    }

    #[test]
    fn test_generate_propagates_missing_glyph() {
        let config = AtlasConfig::default().with_glyphs("az").with_size(10);
        let err = generate(&font(), &config).unwrap_err();
        assert!(matches!(err, FontgenError::GlyphExtraction { .. }));
    }

    #[test]
    fn test_space_gets_advance() {
        let config = AtlasConfig::default().with_glyphs("a ").with_size(10).with_dimensions(64, 64);
        let atlas = generate(&font(), &config).unwrap();
        let space = atlas.descriptor.chars.iter().find(|c| c.id == 32).unwrap();
        assert_eq!((space.width, space.height), (0, 0));
        assert_eq!(space.xadvance, 3);
    }

    #[test]
    fn test_generate_honours_shelf_mode() {
        let font = DummyFont::new(800.0, -200.0, 1000.0)
            .with_glyph(DummyGlyph::new('a', 800.0, 800.0, 600.0))
            .with_glyph(DummyGlyph::new('b', 800.0, 800.0, 500.0))
            .with_glyph(DummyGlyph::new('c', 800.0, 800.0, 400.0));
        // 8px wide glyphs in a 10px atlas, one per row
        let config =
            AtlasConfig::default().with_glyphs("abc").with_size(10).with_dimensions(10, 64);

        let legacy = generate(&font, &config).unwrap();
        let ys: Vec<i64> = legacy.descriptor.chars.iter().map(|c| c.y).collect();
        assert_eq!(ys, vec![0, 10, 10]);

        let corrected = generate(&font, &config.with_shelf_mode(ShelfMode::Corrected)).unwrap();
        let ys: Vec<i64> = corrected.descriptor.chars.iter().map(|c| c.y).collect();
        assert_eq!(ys, vec![0, 10, 19]);
    }

    #[test]
    fn test_pack_glyphs_entry_point() {
        let glyphs = font().glyphs_for("ab").unwrap();
        let placed = pack_glyphs(glyphs, 64, 64, Padding::uniform(1), 10).unwrap();
        assert_eq!(placed.len(), 2);
        assert!(placed.iter().all(|b| b.padding == Padding::uniform(1)));
    }
}
