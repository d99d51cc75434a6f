//! In-memory font provider for tests and headless runs
//!
//! Glyphs are plain rectangles sitting on the baseline, which keeps their
//! bounds and advances easy to predict.

use std::collections::HashMap;

use crate::error::{FontgenError, FontgenResult};
use crate::path::{GlyphOutline, Path};
use crate::traits::{FaceInfo, FontMetrics, FontProvider};

/// A rectangular glyph described in font units
#[derive(Clone, Debug, PartialEq)]
pub struct DummyGlyph {
    pub ch: char,
    pub name: String,
    pub advance_width: f64,
    pub width: f64,
    pub height: f64,
    /// Distance the rectangle extends below the baseline
    pub depth: f64,
}

impl DummyGlyph {
    pub fn new(ch: char, advance_width: f64, width: f64, height: f64) -> Self {
        Self {
            ch,
            name: ch.to_string(),
            advance_width,
            width,
            height,
            depth: 0.0,
        }
    }

    /// A glyph without outline, like a space
    pub fn empty(ch: char, advance_width: f64) -> Self {
        Self::new(ch, advance_width, 0.0, 0.0)
    }

    pub fn with_name(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }

    pub fn with_depth(mut self, depth: f64) -> Self {
        self.depth = depth;
        self
    }

    fn outline(&self) -> Path {
        let mut path = Path::new();
        if self.width == 0.0 && self.height == 0.0 {
            return path;
        }
        path.move_to(0.0, -self.depth);
        path.line_to(self.width, -self.depth);
        path.line_to(self.width, self.height - self.depth);
        path.line_to(0.0, self.height - self.depth);
        path.close();
        path
    }
}

/// Font provider backed by a fixed glyph table
#[derive(Clone, Debug)]
pub struct DummyFont {
    face: FaceInfo,
    metrics: FontMetrics,
    glyphs: Vec<DummyGlyph>,
    kerning: HashMap<(char, char), f64>,
}

impl DummyFont {
    pub fn new(ascender: f64, descender: f64, units_per_em: f64) -> Self {
        Self {
            face: FaceInfo {
                family: "Dummy".to_string(),
                bold: false,
                italic: false,
            },
            metrics: FontMetrics { ascender, descender, units_per_em },
            glyphs: Vec::new(),
            kerning: HashMap::new(),
        }
    }

    pub fn with_face(mut self, family: &str, bold: bool, italic: bool) -> Self {
        self.face = FaceInfo { family: family.to_string(), bold, italic };
        self
    }

    pub fn with_glyph(mut self, glyph: DummyGlyph) -> Self {
        self.glyphs.retain(|g| g.ch != glyph.ch);
        self.glyphs.push(glyph);
        self
    }

    pub fn with_kerning(mut self, first: char, second: char, amount: f64) -> Self {
        self.kerning.insert((first, second), amount);
        self
    }

    fn index_of(&self, ch: char) -> Option<usize> {
        self.glyphs.iter().position(|g| g.ch == ch)
    }
}

impl FontProvider for DummyFont {
    fn face(&self) -> FaceInfo {
        self.face.clone()
    }

    fn metrics(&self) -> FontMetrics {
        self.metrics
    }

    fn glyphs_for(&self, text: &str) -> FontgenResult<Vec<GlyphOutline>> {
        text.chars()
            .map(|ch| {
                let index = self.index_of(ch).ok_or_else(|| FontgenError::GlyphExtraction {
                    codepoint: ch as u32,
                    reason: "no outline in dummy font".to_string(),
                })?;
                let glyph = &self.glyphs[index];
                Ok(GlyphOutline {
                    codepoint: ch as u32,
                    name: glyph.name.clone(),
                    advance_width: glyph.advance_width,
                    glyph_index: u16::try_from(index + 1).unwrap_or(u16::MAX),
                    units_per_em: self.metrics.units_per_em,
                    outline: glyph.outline(),
                })
            })
            .collect()
    }

    fn kerning(&self, first: &GlyphOutline, second: &GlyphOutline) -> f64 {
        match (char::from_u32(first.codepoint), char::from_u32(second.codepoint)) {
            (Some(a), Some(b)) => self.kerning.get(&(a, b)).copied().unwrap_or(0.0),
            _ => 0.0,
        }
    }
}
