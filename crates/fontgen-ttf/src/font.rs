//! TrueType/OpenType font provider

use std::path::Path as FsPath;

use fontgen_core::{
    FaceInfo, FontMetrics, FontProvider, FontgenError, FontgenResult, GlyphOutline, Path,
};
use tracing::{debug, warn};
use ttf_parser::{name_id, Face, GlyphId};

use crate::error::{TtfError, TtfResult};
use crate::outline::PathSink;

const FALLBACK_FAMILY: &str = "font";
const NOTDEF: GlyphId = GlyphId(0);

/// A font file held in memory, decoded with `ttf-parser`
///
/// The face is re-parsed per query; parsing only reads the table
/// directory.
pub struct TtfFont {
    data: Vec<u8>,
    index: u32,
    face: FaceInfo,
    metrics: FontMetrics,
}

impl TtfFont {
    pub fn open<P: AsRef<FsPath>>(path: P) -> TtfResult<Self> {
        let path = path.as_ref();
        let data = std::fs::read(path).map_err(|source| TtfError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_bytes(data, 0)
    }

    pub fn from_bytes(data: Vec<u8>, index: u32) -> TtfResult<Self> {
        let (face, metrics) = {
            let parsed = Face::parse(&data, index)?;
            if parsed.number_of_glyphs() == 0 {
                return Err(TtfError::NoGlyphs);
            }
            (face_info(&parsed), font_metrics(&parsed))
        };
        debug!(
            "Loaded font '{}' (bold={}, italic={}), {} units per em",
            face.family, face.bold, face.italic, metrics.units_per_em
        );
        Ok(Self { data, index, face, metrics })
    }

    fn parse(&self) -> FontgenResult<Face<'_>> {
        Face::parse(&self.data, self.index)
            .map_err(|err| FontgenError::Provider(TtfError::Parse(err).to_string()))
    }
}

impl FontProvider for TtfFont {
    fn face(&self) -> FaceInfo {
        self.face.clone()
    }

    fn metrics(&self) -> FontMetrics {
        self.metrics
    }

    fn glyphs_for(&self, text: &str) -> FontgenResult<Vec<GlyphOutline>> {
        let face = self.parse()?;
        text.chars().map(|ch| glyph_outline(&face, ch)).collect()
    }

    fn kerning(&self, first: &GlyphOutline, second: &GlyphOutline) -> f64 {
        let Ok(face) = self.parse() else {
            return 0.0;
        };
        let Some(kern) = face.tables().kern else {
            return 0.0;
        };
        let (left, right) = (GlyphId(first.glyph_index), GlyphId(second.glyph_index));
        kern.subtables
            .into_iter()
            .filter(|subtable| subtable.horizontal && !subtable.variable)
            .find_map(|subtable| subtable.glyphs_kerning(left, right))
            .map_or(0.0, f64::from)
    }
}

fn glyph_outline(face: &Face<'_>, ch: char) -> FontgenResult<GlyphOutline> {
    let id = face.glyph_index(ch).unwrap_or_else(|| {
        warn!("Character {:?} is missing from the font, using .notdef", ch);
        NOTDEF
    });
    if id.0 >= face.number_of_glyphs() {
        return Err(FontgenError::GlyphExtraction {
            codepoint: ch as u32,
            reason: format!("glyph index {} out of range", id.0),
        });
    }

    // outline-less glyphs (space) leave the path empty
    let mut outline = Path::new();
    face.outline_glyph(id, &mut PathSink::new(&mut outline));

    Ok(GlyphOutline {
        codepoint: ch as u32,
        name: face
            .glyph_name(id)
            .map_or_else(|| ch.to_string(), str::to_string),
        advance_width: face.glyph_hor_advance(id).map_or(0.0, f64::from),
        glyph_index: id.0,
        units_per_em: f64::from(face.units_per_em()),
        outline,
    })
}

fn face_info(face: &Face<'_>) -> FaceInfo {
    let family = english_name(face, name_id::TYPOGRAPHIC_FAMILY)
        .or_else(|| english_name(face, name_id::FAMILY))
        .unwrap_or_else(|| FALLBACK_FAMILY.to_string());
    let subfamily = english_name(face, name_id::TYPOGRAPHIC_SUBFAMILY)
        .or_else(|| english_name(face, name_id::SUBFAMILY));

    let (bold, italic) = match subfamily {
        Some(subfamily) => style_flags(&subfamily),
        None => (face.is_bold(), face.is_italic()),
    };
    FaceInfo { family, bold, italic }
}

fn english_name(face: &Face<'_>, id: u16) -> Option<String> {
    face.names()
        .into_iter()
        .filter(|name| name.name_id == id && name.is_unicode())
        .find_map(|name| name.to_string())
}

fn font_metrics(face: &Face<'_>) -> FontMetrics {
    FontMetrics {
        ascender: f64::from(face.ascender()),
        descender: f64::from(face.descender()),
        units_per_em: f64::from(face.units_per_em()),
    }
}

/// Bold/italic as spelled in a sub-family name like "Bold Italic"
pub fn style_flags(subfamily: &str) -> (bool, bool) {
    let lower = subfamily.to_lowercase();
    (lower.contains("bold"), lower.contains("italic"))
}
