//! Kerning pair extraction for the placed glyph set

use crate::bounds::PaddedGlyphBound;
use crate::descriptor::round_half_up;
use crate::traits::{FontMetrics, FontProvider};

/// Horizontal adjustment applied between two adjacent glyphs, in pixels
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KerningPair {
    pub first: u32,
    pub second: u32,
    pub amount: i64,
}

/// Every ordered pair of distinct placed glyphs with a non-zero amount
///
/// Glyph `i` is paired with the glyphs after it in list order, then with
/// the ones before it. Self pairs are skipped; repeated characters are not
/// deduplicated.
pub fn build_kerning<P: FontProvider + ?Sized>(
    font: &P,
    placed: &[PaddedGlyphBound],
    size: f64,
) -> Vec<KerningPair> {
    build_kerning_with_metrics(font, font.metrics(), placed, size)
}

pub fn build_kerning_with_metrics<P: FontProvider + ?Sized>(
    font: &P,
    metrics: FontMetrics,
    placed: &[PaddedGlyphBound],
    size: f64,
) -> Vec<KerningPair> {
    let scale = metrics.unit_scale(size);
    let count = placed.len();
    let mut pairs = Vec::new();

    for (i, first) in placed.iter().enumerate() {
        for offset in 1..count {
            let second = &placed[(i + offset) % count];
            let raw = font.kerning(&first.glyph, &second.glyph);
            let amount = round_half_up(raw * scale);
            if amount != 0 {
                pairs.push(KerningPair {
                    first: first.glyph.codepoint,
                    second: second.glyph.codepoint,
                    amount,
                });
            }
        }
    }

    tracing::debug!("Found {} kerning pairs among {} glyphs", pairs.len(), count);
    pairs
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bounds::extract_bounds;
    use crate::dummy_font::{DummyFont, DummyGlyph};

    fn font() -> DummyFont {
        DummyFont::new(800.0, -200.0, 1000.0)
            .with_glyph(DummyGlyph::new('A', 600.0, 700.0, 700.0))
            .with_glyph(DummyGlyph::new('V', 600.0, 700.0, 700.0))
            .with_glyph(DummyGlyph::new('o', 500.0, 400.0, 500.0))
            .with_kerning('A', 'V', -80.0)
            .with_kerning('V', 'A', -60.0)
            .with_kerning('V', 'o', 3.0)
    }

    fn placed(font: &DummyFont, text: &str) -> Vec<PaddedGlyphBound> {
        extract_bounds(font.glyphs_for(text).unwrap(), 10.0)
    }

    #[test]
    fn test_direction_sensitive_pairs() {
        let font = font();
        let pairs = build_kerning(&font, &placed(&font, "AV"), 10.0);
        assert_eq!(
            pairs,
            vec![
                KerningPair { first: 'A' as u32, second: 'V' as u32, amount: -1 },
                KerningPair { first: 'V' as u32, second: 'A' as u32, amount: -1 },
            ]
        );
    }

    #[test]
    fn test_rounded_zero_is_dropped() {
        let font = font();
        // 3 units * 0.01 rounds to 0
        let pairs = build_kerning(&font, &placed(&font, "Vo"), 10.0);
        assert!(pairs.is_empty());
    }

    #[test]
    fn test_rotation_order() {
        let font = font()
            .with_kerning('o', 'A', 200.0)
            .with_kerning('A', 'o', 100.0);
        let pairs = build_kerning(&font, &placed(&font, "AVo"), 10.0);
        let order: Vec<(char, char)> = pairs
            .iter()
            .map(|p| (char::from_u32(p.first).unwrap(), char::from_u32(p.second).unwrap()))
            .collect();
        assert_eq!(order, vec![('A', 'V'), ('A', 'o'), ('V', 'A'), ('o', 'A')]);
        assert!(pairs.iter().all(|p| p.amount != 0));
    }

    #[test]
    fn test_single_glyph_has_no_pairs() {
        let font = font();
        assert!(build_kerning(&font, &placed(&font, "A"), 10.0).is_empty());
        assert!(build_kerning(&font, &[], 10.0).is_empty());
    }

    #[test]
    fn test_zero_extent_metrics() {
        let font = font();
        let metrics = FontMetrics { ascender: 0.0, descender: 0.0, units_per_em: 1000.0 };
        assert!(build_kerning_with_metrics(&font, metrics, &placed(&font, "AV"), 10.0).is_empty());
    }
}
