// src/config.rs
use crate::constants::{
    DEFAULT_FACE_NAME, DEFAULT_FILL, DEFAULT_GLYPHS, DEFAULT_HEIGHT, DEFAULT_PAGE_FILE,
    DEFAULT_SIZE, DEFAULT_WIDTH,
};

/// Per-side padding added around every glyph's tight bounds, in pixels
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Padding {
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
    pub left: u32,
}

impl Padding {
    pub fn new(top: u32, right: u32, bottom: u32, left: u32) -> Self {
        Self { top, right, bottom, left }
    }

    pub fn uniform(value: u32) -> Self {
        Self::new(value, value, value, value)
    }

    /// Descriptor form: `top,right,bottom,left`
    pub fn to_descriptor(&self) -> String {
        format!("{},{},{},{}", self.top, self.right, self.bottom, self.left)
    }
}

/// How the vertical origin of a glyph is shifted by padding
///
/// Existing consumers of the descriptor expect the `Legacy` shift, which
/// subtracts the *right* padding from `y`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PaddingMode {
    /// `y -= padding.right`
    #[default]
    Legacy,
    /// `y -= padding.top`
    Corrected,
}

/// Line height a shelf starts with when a glyph wraps onto it
///
/// `Legacy` reproduces the layout existing descriptors were generated with:
/// the wrapping glyph does not count toward its shelf's line height, so a
/// shelf holding only that glyph adds nothing to the next shelf's `y`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ShelfMode {
    #[default]
    Legacy,
    /// The wrapping glyph seeds the new shelf's line height
    Corrected,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LineCap {
    Butt,
    #[default]
    Round,
    Square,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LineJoin {
    Miter,
    #[default]
    Round,
    Bevel,
}

/// Appearance of rasterized glyphs. Only renderers read this.
#[derive(Clone, Debug, PartialEq)]
pub struct GlyphStyle {
    pub fill: Option<String>,
    pub stroke: Option<String>,
    pub line_width: Option<f64>,
    pub line_cap: LineCap,
    pub line_join: LineJoin,
    pub line_dash: Option<Vec<f64>>,
    pub shadow_color: Option<String>,
    pub shadow_blur: f64,
    pub shadow_offset_x: f64,
    pub shadow_offset_y: f64,
    /// Image repeated across glyph interiors instead of the fill colour
    pub pattern: Option<String>,
}

impl Default for GlyphStyle {
    fn default() -> Self {
        Self {
            fill: Some(DEFAULT_FILL.to_string()),
            stroke: None,
            line_width: None,
            line_cap: LineCap::default(),
            line_join: LineJoin::default(),
            line_dash: None,
            shadow_color: None,
            shadow_blur: 0.0,
            shadow_offset_x: 0.0,
            shadow_offset_y: 0.0,
            pattern: None,
        }
    }
}

/// Packing and description parameters for one atlas run
#[derive(Clone, Debug, PartialEq)]
pub struct AtlasConfig {
    /// Characters to pack, in order; duplicates are kept
    pub glyphs: String,
    /// Face name written to the descriptor
    pub name: String,
    /// Pixel em size
    pub size: u32,
    pub width: u32,
    pub height: u32,
    pub padding: Padding,
    pub padding_mode: PaddingMode,
    pub shelf_mode: ShelfMode,
    pub letter_spacing: i32,
    pub line_spacing: i32,
    /// File name the descriptor's page entry points at
    pub page_file: String,
    pub style: GlyphStyle,
}

impl Default for AtlasConfig {
    fn default() -> Self {
        Self {
            glyphs: DEFAULT_GLYPHS.to_string(),
            name: DEFAULT_FACE_NAME.to_string(),
            size: DEFAULT_SIZE,
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            padding: Padding::default(),
            padding_mode: PaddingMode::default(),
            shelf_mode: ShelfMode::default(),
            letter_spacing: 0,
            line_spacing: 0,
            page_file: DEFAULT_PAGE_FILE.to_string(),
            style: GlyphStyle::default(),
        }
    }
}

impl AtlasConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_glyphs(mut self, glyphs: &str) -> Self {
        self.glyphs = glyphs.to_string();
        self
    }

    pub fn with_name(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }

    pub fn with_size(mut self, size: u32) -> Self {
        self.size = size;
        self
    }

    pub fn with_dimensions(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_padding(mut self, padding: Padding) -> Self {
        self.padding = padding;
        self
    }

    pub fn with_padding_mode(mut self, mode: PaddingMode) -> Self {
        self.padding_mode = mode;
        self
    }

    pub fn with_shelf_mode(mut self, mode: ShelfMode) -> Self {
        self.shelf_mode = mode;
        self
    }

    pub fn with_letter_spacing(mut self, spacing: i32) -> Self {
        self.letter_spacing = spacing;
        self
    }

    pub fn with_line_spacing(mut self, spacing: i32) -> Self {
        self.line_spacing = spacing;
        self
    }

    pub fn with_page_file(mut self, file: &str) -> Self {
        self.page_file = file.to_string();
        self
    }

    pub fn with_style(mut self, style: GlyphStyle) -> Self {
        self.style = style;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_tool() {
        let config = AtlasConfig::default();
        assert_eq!(config.size, 72);
        assert_eq!((config.width, config.height), (256, 256));
        assert_eq!(config.padding, Padding::default());
        assert_eq!(config.padding_mode, PaddingMode::Legacy);
        assert_eq!(config.shelf_mode, ShelfMode::Legacy);
        assert_eq!(config.page_file, "font.png");
        assert_eq!(config.style.fill.as_deref(), Some("black"));
    }

    #[test]
    fn test_builder_leaves_default_untouched() {
        let base = AtlasConfig::default();
        let custom = base.clone().with_size(10).with_dimensions(64, 32).with_glyphs("ab");
        assert_eq!(custom.size, 10);
        assert_eq!(custom.width, 64);
        assert_eq!(custom.height, 32);
        assert_eq!(base, AtlasConfig::default());
    }

    #[test]
    fn test_padding_descriptor_order() {
        assert_eq!(Padding::new(1, 2, 3, 4).to_descriptor(), "1,2,3,4");
        assert_eq!(Padding::uniform(0).to_descriptor(), "0,0,0,0");
    }
}
