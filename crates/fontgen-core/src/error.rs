// src/error.rs
use thiserror::Error;

/// Errors raised while laying out an atlas or describing it
///
/// Every variant terminates the current run; no partial descriptor is
/// ever produced.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FontgenError {
    // Packing Errors
    #[error("can not fit bounds: glyph {glyph} at ({x}, {y}) size {width}x{height} exceeds {atlas_width}x{atlas_height} atlas")]
    CannotFit {
        glyph: u32,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        atlas_width: u32,
        atlas_height: u32,
    },

    // Font Data Errors
    #[error("Glyph extraction failed for U+{codepoint:04X}: {reason}")]
    GlyphExtraction { codepoint: u32, reason: String },

    #[error("Font provider error: {0}")]
    Provider(String),
}

impl FontgenError {
    /// True for the packing failure a caller may retry with a larger atlas
    pub fn is_fit_error(&self) -> bool {
        matches!(self, FontgenError::CannotFit { .. })
    }
}

pub type FontgenResult<T> = Result<T, FontgenError>;
