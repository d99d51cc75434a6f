// src/error.rs
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RasterError {
    #[error("Cairo error: {0}")]
    Cairo(#[from] cairo::Error),

    #[error("PNG error: {0}")]
    Png(#[from] cairo::IoError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid colour: {0}")]
    InvalidColor(String),

    #[error("Atlas size {width}x{height} is not drawable")]
    InvalidSize { width: u32, height: u32 },
}

pub type RasterResult<T> = Result<T, RasterError>;
