//! Greedy shelf packing of glyph bounds into a fixed-size atlas
//!
//! Bounds are inflated by padding, sorted tallest first (stable), then laid
//! out left to right in rows. A glyph that does not fit the remaining width
//! opens a new row below the tallest footprint of the current one. Whether
//! that glyph counts toward its new row's height depends on [`ShelfMode`].

use std::cmp::Ordering;

use tracing::{debug, trace};

use crate::bounds::PaddedGlyphBound;
use crate::config::{Padding, PaddingMode, ShelfMode};
use crate::error::{FontgenError, FontgenResult};

/// One row of the packed layout
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Shelf {
    pub y: f64,
    /// Tallest footprint (padded height plus both margins) counted for this
    /// row; under [`ShelfMode::Legacy`] the wrapping glyph is not counted
    pub line_height: f64,
    pub glyph_count: usize,
}

/// Shelf packer for a single atlas page
#[derive(Clone, Copy, Debug)]
pub struct ShelfPacker {
    width: u32,
    height: u32,
    padding: Padding,
    padding_mode: PaddingMode,
    shelf_mode: ShelfMode,
}

impl ShelfPacker {
    pub fn new(width: u32, height: u32, padding: Padding) -> Self {
        Self {
            width,
            height,
            padding,
            padding_mode: PaddingMode::default(),
            shelf_mode: ShelfMode::default(),
        }
    }

    pub fn with_padding_mode(mut self, mode: PaddingMode) -> Self {
        self.padding_mode = mode;
        self
    }

    pub fn with_shelf_mode(mut self, mode: ShelfMode) -> Self {
        self.shelf_mode = mode;
        self
    }

    /// Pad, sort and place `bounds` in place, returning the rows used
    ///
    /// Fails on the first glyph whose padded rectangle leaves the atlas.
    pub fn pack(&self, bounds: &mut [PaddedGlyphBound]) -> FontgenResult<Vec<Shelf>> {
        for bound in bounds.iter_mut() {
            self.apply_padding(bound);
        }

        bounds.sort_by(|a, b| {
            b.bounds
                .height
                .partial_cmp(&a.bounds.height)
                .unwrap_or(Ordering::Equal)
        });

        let atlas_width = f64::from(self.width);
        let atlas_height = f64::from(self.height);
        let mut shelves: Vec<Shelf> = Vec::new();
        let mut x = 0.0;
        let mut y = 0.0;
        let mut line_height: f64 = 0.0;

        for bound in bounds.iter_mut() {
            let width = bound.bounds.width;
            let height = bound.bounds.height;
            let gutter = 2.0 * bound.margin;

            let wraps = x + width > atlas_width;
            if wraps {
                x = 0.0;
                y += line_height;
                line_height = 0.0;
            }
            if wraps || shelves.is_empty() {
                trace!("Opening shelf {} at y={}", shelves.len(), y);
                shelves.push(Shelf { y, line_height: 0.0, glyph_count: 0 });
            }

            bound.packed_x = x;
            bound.packed_y = y;
            x += width + gutter;
            if !wraps || self.shelf_mode == ShelfMode::Corrected {
                line_height = line_height.max(height + gutter);
            }

            if let Some(shelf) = shelves.last_mut() {
                shelf.line_height = line_height;
                shelf.glyph_count += 1;
            }

            if bound.packed_x + width > atlas_width || bound.packed_y + height > atlas_height {
                return Err(FontgenError::CannotFit {
                    glyph: bound.glyph.codepoint,
                    x: bound.packed_x,
                    y: bound.packed_y,
                    width,
                    height,
                    atlas_width: self.width,
                    atlas_height: self.height,
                });
            }
        }

        debug!(
            "Packed {} glyphs into {} shelves, {}px of {}px used",
            bounds.len(),
            shelves.len(),
            y + line_height,
            self.height
        );
        Ok(shelves)
    }

    fn apply_padding(&self, bound: &mut PaddedGlyphBound) {
        let padding = self.padding;
        let vertical = match self.padding_mode {
            PaddingMode::Legacy => padding.right,
            PaddingMode::Corrected => padding.top,
        };
        bound.padding = padding;
        bound.bounds.x -= f64::from(padding.left);
        bound.bounds.y -= f64::from(vertical);
        bound.bounds.width += f64::from(padding.left) + f64::from(padding.right);
        bound.bounds.height += f64::from(padding.top) + f64::from(padding.bottom);
    }
}
