// src/config.rs
//! Layered run configuration: defaults, then a JSON file, then the command line

use std::path::{Path, PathBuf};

use fontgen_core::constants::{
    DEFAULT_FACE_NAME, DEFAULT_FILL, DEFAULT_GLYPHS, DEFAULT_HEIGHT, DEFAULT_PAGE_FILE,
    DEFAULT_SIZE, DEFAULT_WIDTH,
};
use fontgen_core::{
    AtlasConfig, GlyphStyle, LineCap, LineJoin, Padding, PaddingMode, ShelfMode,
};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};

pub const DEFAULT_FNT: &str = "font.fnt";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaddingFile {
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
    pub left: u32,
}

impl From<PaddingFile> for Padding {
    fn from(p: PaddingFile) -> Self {
        Padding::new(p.top, p.right, p.bottom, p.left)
    }
}

/// Every setting the tool understands, all optional so layers can be merged
///
/// Keys are camelCase, matching existing JSON configs. Unknown keys are
/// ignored and `null` means "not set".
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ConfigFile {
    pub font: Option<PathBuf>,
    pub glyphs: Option<String>,
    pub png: Option<PathBuf>,
    pub fnt: Option<PathBuf>,
    pub name: Option<String>,
    pub size: Option<u32>,
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub padding: Option<PaddingFile>,
    pub corrected_padding: Option<bool>,
    pub corrected_shelves: Option<bool>,
    pub letter_spacing: Option<i32>,
    pub line_spacing: Option<i32>,
    pub fill: Option<String>,
    pub stroke_style: Option<String>,
    pub line_width: Option<f64>,
    pub line_cap: Option<String>,
    pub line_join: Option<String>,
    pub line_dash: Option<Vec<f64>>,
    pub shadow_color: Option<String>,
    pub shadow_blur: Option<f64>,
    pub shadow_offset_x: Option<f64>,
    pub shadow_offset_y: Option<f64>,
    pub pattern: Option<PathBuf>,
}

macro_rules! overlay {
    ($base:ident, $top:ident, $($field:ident),+ $(,)?) => {
        $( if $top.$field.is_some() { $base.$field = $top.$field; } )+
    };
}

impl ConfigFile {
    /// The tool's built-in settings
    pub fn defaults() -> Self {
        Self {
            font: None,
            glyphs: Some(DEFAULT_GLYPHS.to_string()),
            png: Some(PathBuf::from(DEFAULT_PAGE_FILE)),
            fnt: Some(PathBuf::from(DEFAULT_FNT)),
            name: Some(DEFAULT_FACE_NAME.to_string()),
            size: Some(DEFAULT_SIZE),
            width: Some(DEFAULT_WIDTH),
            height: Some(DEFAULT_HEIGHT),
            padding: Some(PaddingFile::default()),
            corrected_padding: Some(false),
            corrected_shelves: Some(false),
            letter_spacing: Some(0),
            line_spacing: Some(0),
            fill: Some(DEFAULT_FILL.to_string()),
            stroke_style: None,
            line_width: None,
            line_cap: Some("round".to_string()),
            line_join: Some("round".to_string()),
            line_dash: None,
            shadow_color: None,
            shadow_blur: None,
            shadow_offset_x: None,
            shadow_offset_y: None,
            pattern: None,
        }
    }

    pub fn load(path: &Path) -> AppResult<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| AppError::ConfigNotFound {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&text).map_err(|source| AppError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    /// `self` overlaid with every field `top` sets
    pub fn merge(self, top: ConfigFile) -> Self {
        let mut base = self;
        overlay!(
            base, top,
            font, glyphs, png, fnt, name, size, width, height, padding,
            corrected_padding, corrected_shelves, letter_spacing, line_spacing, fill, stroke_style,
            line_width, line_cap, line_join, line_dash, shadow_color, shadow_blur,
            shadow_offset_x, shadow_offset_y, pattern,
        );
        base
    }

    pub fn to_json(&self) -> AppResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Resolve into the immutable settings of one run
    pub fn resolve(self) -> AppResult<RunConfig> {
        let base = Self::defaults().merge(self);
        let png = base.png.unwrap_or_else(|| PathBuf::from(DEFAULT_PAGE_FILE));
        let page_file = png
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or(DEFAULT_PAGE_FILE)
            .to_string();

        let style = GlyphStyle {
            fill: base.fill,
            stroke: base.stroke_style,
            line_width: base.line_width,
            line_cap: parse_line_cap(base.line_cap.as_deref())?,
            line_join: parse_line_join(base.line_join.as_deref())?,
            line_dash: base.line_dash,
            shadow_color: base.shadow_color,
            shadow_blur: base.shadow_blur.unwrap_or(0.0),
            shadow_offset_x: base.shadow_offset_x.unwrap_or(0.0),
            shadow_offset_y: base.shadow_offset_y.unwrap_or(0.0),
            pattern: base
                .pattern
                .as_ref()
                .map(|p| p.to_string_lossy().into_owned()),
        };

        let padding_mode = if base.corrected_padding.unwrap_or(false) {
            PaddingMode::Corrected
        } else {
            PaddingMode::Legacy
        };

        let shelf_mode = if base.corrected_shelves.unwrap_or(false) {
            ShelfMode::Corrected
        } else {
            ShelfMode::Legacy
        };

        let atlas = AtlasConfig::default()
            .with_glyphs(base.glyphs.as_deref().unwrap_or(DEFAULT_GLYPHS))
            .with_name(base.name.as_deref().unwrap_or(DEFAULT_FACE_NAME))
            .with_size(base.size.unwrap_or(DEFAULT_SIZE))
            .with_dimensions(
                base.width.unwrap_or(DEFAULT_WIDTH),
                base.height.unwrap_or(DEFAULT_HEIGHT),
            )
            .with_padding(base.padding.unwrap_or_default().into())
            .with_padding_mode(padding_mode)
            .with_shelf_mode(shelf_mode)
            .with_letter_spacing(base.letter_spacing.unwrap_or(0))
            .with_line_spacing(base.line_spacing.unwrap_or(0))
            .with_page_file(&page_file)
            .with_style(style);

        if atlas.width == 0 || atlas.height == 0 {
            return Err(AppError::ConfigurationError {
                field: "width/height".to_string(),
                value: format!("{}x{}", atlas.width, atlas.height),
            });
        }

        Ok(RunConfig {
            font: base.font,
            png,
            fnt: base.fnt.unwrap_or_else(|| PathBuf::from(DEFAULT_FNT)),
            atlas,
        })
    }
}

/// Fully resolved settings: where to read and write, and how to lay out
#[derive(Clone, Debug, PartialEq)]
pub struct RunConfig {
    pub font: Option<PathBuf>,
    pub png: PathBuf,
    pub fnt: PathBuf,
    pub atlas: AtlasConfig,
}

fn parse_line_cap(value: Option<&str>) -> AppResult<LineCap> {
    match value {
        None => Ok(LineCap::default()),
        Some("butt") => Ok(LineCap::Butt),
        Some("round") => Ok(LineCap::Round),
        Some("square") => Ok(LineCap::Square),
        Some(other) => Err(AppError::ConfigurationError {
            field: "lineCap".to_string(),
            value: other.to_string(),
        }),
    }
}

fn parse_line_join(value: Option<&str>) -> AppResult<LineJoin> {
    match value {
        None => Ok(LineJoin::default()),
        Some("miter") => Ok(LineJoin::Miter),
        Some("round") => Ok(LineJoin::Round),
        Some("bevel") => Ok(LineJoin::Bevel),
        Some(other) => Err(AppError::ConfigurationError {
            field: "lineJoin".to_string(),
            value: other.to_string(),
        }),
    }
}

/// Parse `T,R,B,L`, or a single value used on every side
pub fn parse_padding(value: &str) -> Result<PaddingFile, String> {
    let sides: Vec<u32> = value
        .split(',')
        .map(|s| s.trim().parse::<u32>().map_err(|e| format!("{s:?}: {e}")))
        .collect::<Result<_, _>>()?;
    match sides.as_slice() {
        [all] => Ok(PaddingFile { top: *all, right: *all, bottom: *all, left: *all }),
        [top, right, bottom, left] => Ok(PaddingFile {
            top: *top,
            right: *right,
            bottom: *bottom,
            left: *left,
        }),
        _ => Err(format!("expected 1 or 4 comma separated values, got {}", sides.len())),
    }
}
