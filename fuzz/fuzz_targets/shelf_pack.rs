#![no_main]
use libfuzzer_sys::fuzz_target;

use fontgen_core::{GlyphOutline, Padding, PaddedGlyphBound, Path, ShelfMode, ShelfPacker};

// Bytes 0..4: atlas size and padding, the low bit of the width picks the shelf
// mode; then one (width, height) byte pair per glyph
fuzz_target!(|data: &[u8]| {
    if data.len() < 4 {
        return;
    }
    let width = u32::from(data[0]);
    let height = u32::from(data[1]);
    let mode = if data[0] & 1 == 0 { ShelfMode::Legacy } else { ShelfMode::Corrected };
    let padding = Padding::new(
        u32::from(data[2] & 0x0f),
        u32::from(data[2] >> 4),
        u32::from(data[3] & 0x0f),
        u32::from(data[3] >> 4),
    );

    let mut bounds: Vec<PaddedGlyphBound> = data[4..]
        .chunks_exact(2)
        .take(256)
        .enumerate()
        .map(|(i, wh)| {
            let mut outline = Path::new();
            if wh[0] > 0 || wh[1] > 0 {
                let (w, h) = (f64::from(wh[0]), f64::from(wh[1]));
                outline.move_to(0.0, 0.0);
                outline.line_to(w, 0.0);
                outline.line_to(w, h);
                outline.line_to(0.0, h);
                outline.close();
            }
            let glyph = GlyphOutline {
                codepoint: 0x20 + i as u32,
                name: format!("g{i}"),
                advance_width: f64::from(wh[0]),
                glyph_index: i as u16 + 1,
                units_per_em: 64.0,
                outline,
            };
            PaddedGlyphBound::new(glyph, 64.0)
        })
        .collect();

    let packer = ShelfPacker::new(width, height, padding).with_shelf_mode(mode);
    match packer.pack(&mut bounds) {
        Ok(_) => {
            let (w, h) = (f64::from(width), f64::from(height));
            for (i, a) in bounds.iter().enumerate() {
                assert!(a.packed_x >= 0.0 && a.packed_y >= 0.0);
                assert!(a.packed_x + a.bounds.width <= w && a.packed_y + a.bounds.height <= h);
                // legacy shelves can start a row on top of a lone wrapping glyph
                if mode == ShelfMode::Legacy {
                    continue;
                }
                let fa = a.footprint();
                for b in &bounds[i + 1..] {
                    let fb = b.footprint();
                    let apart = fa.x + fa.width <= fb.x
                        || fb.x + fb.width <= fa.x
                        || fa.y + fa.height <= fb.y
                        || fb.y + fb.height <= fa.y;
                    assert!(apart, "overlap between {} and {}", a.glyph.name, b.glyph.name);
                }
            }
        }
        Err(err) => assert!(err.is_fit_error()),
    }
});
