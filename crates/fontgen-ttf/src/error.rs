// src/error.rs
use std::path::PathBuf;

use fontgen_core::FontgenError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TtfError {
    #[error("font does not exist: {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Font parsing failed: {0}")]
    Parse(#[from] ttf_parser::FaceParsingError),

    #[error("Font has no glyphs")]
    NoGlyphs,
}

impl From<TtfError> for FontgenError {
    fn from(err: TtfError) -> Self {
        FontgenError::Provider(err.to_string())
    }
}

pub type TtfResult<T> = Result<T, TtfError>;
