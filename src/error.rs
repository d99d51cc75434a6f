// src/error.rs
use std::path::PathBuf;

use fontgen_cairo::RasterError;
use fontgen_core::FontgenError;
use fontgen_ttf::TtfError;
use thiserror::Error;

pub const EXIT_FAILURE: i32 = 1;
pub const CANNOT_READ_CONFIG_FILE: i32 = 1;
pub const CANNOT_PARSE_CONFIG_FILE: i32 = 2;
pub const CANNOT_READ_FONT_FILE: i32 = 3;
pub const CANNOT_FIT_BOUNDS: i32 = 4;

#[derive(Error, Debug)]
pub enum AppError {
    // Configuration Errors
    #[error("config does not exist: {path}")]
    ConfigNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("can not parse config {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid configuration: {field} = {value}")]
    ConfigurationError { field: String, value: String },

    // Font Errors
    #[error("font does not exist: no font file given")]
    NoFont,

    #[error(transparent)]
    Font(#[from] TtfError),

    // Layout and Output Errors
    #[error(transparent)]
    Layout(#[from] FontgenError),

    #[error("Render error: {0}")]
    Render(#[from] RasterError),

    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl AppError {
    /// Process exit status reported by the command line tool
    pub fn exit_code(&self) -> i32 {
        match self {
            AppError::ConfigNotFound { .. } => CANNOT_READ_CONFIG_FILE,
            AppError::ConfigParse { .. } => CANNOT_PARSE_CONFIG_FILE,
            AppError::NoFont | AppError::Font(TtfError::Read { .. }) => CANNOT_READ_FONT_FILE,
            AppError::Layout(err) if err.is_fit_error() => CANNOT_FIT_BOUNDS,
            _ => EXIT_FAILURE,
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;
