use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use fontgen_core::bounds::extract_bounds;
use fontgen_core::dummy_font::{DummyFont, DummyGlyph};
use fontgen_core::{generate, AtlasConfig, FontProvider, Padding, ShelfPacker};

/// Glyph set with heights cycling through a few values
fn font(glyph_count: u32) -> (DummyFont, String) {
    let mut font = DummyFont::new(800.0, -200.0, 1000.0);
    let mut text = String::new();
    for (i, ch) in (0x4E00..0x4E00 + glyph_count).filter_map(char::from_u32).enumerate() {
        let height = 300.0 + (i % 7) as f64 * 100.0;
        let width = 200.0 + (i % 5) as f64 * 150.0;
        font = font.with_glyph(DummyGlyph::new(ch, width + 50.0, width, height));
        text.push(ch);
    }
    (font, text)
}

fn bench_shelf_pack(c: &mut Criterion) {
    let mut group = c.benchmark_group("shelf_pack");

    for count in [64u32, 512, 2048] {
        let (font, text) = font(count);
        let glyphs = font.glyphs_for(&text).unwrap_or_default();
        let bounds = extract_bounds(glyphs, 16.0);
        group.throughput(Throughput::Elements(u64::from(count)));
        group.bench_with_input(BenchmarkId::from_parameter(count), &bounds, |b, bounds| {
            b.iter(|| {
                let mut bounds = bounds.clone();
                let packer = ShelfPacker::new(4096, 4096, Padding::uniform(1));
                black_box(packer.pack(&mut bounds).is_ok())
            })
        });
    }

    group.finish();
}

fn bench_bounds(c: &mut Criterion) {
    let (font, text) = font(512);
    let glyphs = font.glyphs_for(&text).unwrap_or_default();
    c.bench_function("extract_bounds_512", |b| {
        b.iter(|| {
            let bounds = extract_bounds(black_box(glyphs.clone()), 32.0);
            black_box(bounds.len())
        })
    });
}

fn bench_generate(c: &mut Criterion) {
    let (font, text) = font(256);
    let config = AtlasConfig::default()
        .with_glyphs(&text)
        .with_size(16)
        .with_dimensions(2048, 2048);
    c.bench_function("generate_256", |b| {
        b.iter(|| black_box(generate(&font, &config).map(|atlas| atlas.descriptor_text().len())))
    });
}

criterion_group!(benches, bench_shelf_pack, bench_bounds, bench_generate);
criterion_main!(benches);
