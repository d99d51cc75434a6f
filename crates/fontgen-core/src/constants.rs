// src/constants.rs

// Packing constants
/// Gutter kept free on the trailing edges of every packed glyph
pub const GLYPH_MARGIN: f64 = 2.0;

// Descriptor constants
pub const PAGE_ID: u32 = 0;
pub const PAGE_COUNT: u32 = 1;
/// Glyph data lives in all four channels
pub const CHANNEL_ALL: u32 = 15;
pub const STRETCH_H: u32 = 100;

// Default atlas configuration
pub const DEFAULT_FACE_NAME: &str = "font";
pub const DEFAULT_PAGE_FILE: &str = "font.png";
pub const DEFAULT_SIZE: u32 = 72;
pub const DEFAULT_WIDTH: u32 = 256;
pub const DEFAULT_HEIGHT: u32 = 256;
pub const DEFAULT_FILL: &str = "black";

pub const DEFAULT_GLYPHS: &str = " $лвRCHF¥Kčkr€£nt₪₹Lzłleiบาท₤₺,.-1234567890+:∞%abcdfghjmopqsuvwxyABDEGIJMNOPQSTUVWXYZ!№;?*()_=/|'@#^&{}[]\" ";
