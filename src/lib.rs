//! Fontgen - bitmap font generator
//!
//! This crate ties the workspace together:
//! - `fontgen-ttf` decodes the font
//! - `fontgen-core` lays out the atlas and writes the descriptor
//! - `fontgen-cairo` rasterizes the atlas to PNG
//!
//! plus the layered JSON/command line configuration of the `fontgen` tool.

pub mod cli;
pub mod config;
pub mod error;

use std::path::Path;

use fontgen_cairo::CairoRasterizer;
use fontgen_core::{generate, AtlasRenderer, FontProvider};
use fontgen_ttf::TtfFont;
use tracing::info;

// Re-export main types for convenience
pub use cli::Cli;
pub use config::{ConfigFile, RunConfig};
pub use error::{AppError, AppResult};
pub use fontgen_core::{
    Atlas, AtlasConfig, FontDescriptor, FontgenError, Padding, PaddingMode, ShelfMode,
};

/// Merge defaults, the optional config file and the command line
pub fn load_config(cli: &Cli) -> AppResult<ConfigFile> {
    let file = match &cli.config {
        Some(path) => ConfigFile::load(path)?,
        None => ConfigFile::default(),
    };
    Ok(ConfigFile::defaults().merge(file).merge(cli.overrides()))
}

/// Open the configured font and produce both output files
pub fn run(config: &RunConfig) -> AppResult<Atlas> {
    let path = config.font.as_deref().ok_or(AppError::NoFont)?;
    let font = TtfFont::open(path)?;
    run_with_font(&font, config)
}

/// Lay out, rasterize and write the atlas for an already loaded font
///
/// The PNG is written before the descriptor; nothing is written when
/// layout fails.
pub fn run_with_font<P: FontProvider + ?Sized>(font: &P, config: &RunConfig) -> AppResult<Atlas> {
    let atlas = generate(font, &config.atlas)?;

    let mut rasterizer = CairoRasterizer::new(config.atlas.width, config.atlas.height)?;
    rasterizer.render(&atlas.glyphs, &config.atlas.style)?;

    rasterizer.write_png(&config.png)?;
    write_text(&config.fnt, &atlas.descriptor_text())?;

    info!(
        "Wrote {} and {}",
        config.png.display(),
        config.fnt.display()
    );
    Ok(atlas)
}

fn write_text(path: &Path, text: &str) -> AppResult<()> {
    std::fs::write(path, text).map_err(|source| AppError::Write {
        path: path.to_path_buf(),
        source,
    })
}
