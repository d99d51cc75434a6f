//! Tight pixel-space bounds of glyph outlines

use crate::config::Padding;
use crate::constants::GLYPH_MARGIN;
use crate::path::{GlyphOutline, Path};

/// Axis-aligned rectangle in atlas pixel space (Y-down)
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Bounds {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    /// Extrema of the end points carried by `path`
    ///
    /// A path without any coordinate-bearing command (a space) measures as
    /// the zero rectangle.
    pub fn of_path(path: &Path) -> Self {
        let mut points = path.commands.iter().filter_map(|cmd| cmd.end_point());
        let Some((x0, y0)) = points.next() else {
            return Self::default();
        };
        let (mut min_x, mut max_x, mut min_y, mut max_y) = (x0, x0, y0, y0);
        for (x, y) in points {
            min_x = min_x.min(x);
            max_x = max_x.max(x);
            min_y = min_y.min(y);
            max_y = max_y.max(y);
        }
        Self::new(min_x, min_y, max_x - min_x, max_y - min_y)
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0.0 && self.height == 0.0
    }
}

/// A glyph's bounds as they travel through packing
///
/// Created by [`extract_bounds`] with zero padding; the packer inflates
/// `bounds` by `padding` and sets `packed_x`/`packed_y`.
#[derive(Clone, Debug, PartialEq)]
pub struct PaddedGlyphBound {
    pub glyph: GlyphOutline,
    /// Pixel em size the bounds were measured at
    pub size: f64,
    pub bounds: Bounds,
    pub padding: Padding,
    pub margin: f64,
    pub packed_x: f64,
    pub packed_y: f64,
}

impl PaddedGlyphBound {
    pub fn new(glyph: GlyphOutline, size: f64) -> Self {
        let bounds = Bounds::of_path(&glyph.path(0.0, 0.0, size));
        Self {
            glyph,
            size,
            bounds,
            padding: Padding::default(),
            margin: GLYPH_MARGIN,
            packed_x: 0.0,
            packed_y: 0.0,
        }
    }

    /// Footprint reserved in the atlas: padded bounds plus the trailing margin
    pub fn footprint(&self) -> Bounds {
        Bounds::new(
            self.packed_x,
            self.packed_y,
            self.bounds.width + 2.0 * self.margin,
            self.bounds.height + 2.0 * self.margin,
        )
    }

    /// Pen origin that draws the outline at its packed position
    pub fn pen_origin(&self) -> (f64, f64) {
        (self.packed_x - self.bounds.x, self.packed_y - self.bounds.y)
    }

    /// Outline commands positioned in the atlas
    pub fn atlas_path(&self) -> Path {
        let (x, y) = self.pen_origin();
        self.glyph.path(x, y, self.size)
    }
}

/// Measure every glyph at `size`, preserving input order
pub fn extract_bounds(glyphs: Vec<GlyphOutline>, size: f64) -> Vec<PaddedGlyphBound> {
    glyphs
        .into_iter()
        .map(|glyph| PaddedGlyphBound::new(glyph, size))
        .collect()
}
