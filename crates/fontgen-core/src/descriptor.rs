//! BMFont text descriptor for a packed atlas
//!
//! The layout of the output is fixed: consumers parse it by field name and
//! order, and all numbers are plain rounded integers.

use std::fmt::{self, Write as _};

use crate::bounds::PaddedGlyphBound;
use crate::config::{AtlasConfig, Padding};
use crate::constants::{CHANNEL_ALL, PAGE_COUNT, PAGE_ID, STRETCH_H};
use crate::kerning::KerningPair;
use crate::traits::{FaceInfo, FontMetrics};

/// Round half up, `floor(v + 0.5)`
pub fn round_half_up(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}

/// Face attributes written to the `info` element
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FaceMeta {
    pub name: String,
    pub size: u32,
    pub bold: bool,
    pub italic: bool,
}

impl FaceMeta {
    /// Descriptor face: the configured name with the font's style flags
    pub fn from_config(config: &AtlasConfig, face: &FaceInfo) -> Self {
        Self {
            name: config.name.clone(),
            size: config.size,
            bold: face.bold,
            italic: face.italic,
        }
    }
}

/// Metrics of one packed glyph
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CharRow {
    pub id: u32,
    pub letter: String,
    pub x: i64,
    pub y: i64,
    pub xoffset: i64,
    pub yoffset: i64,
    pub width: i64,
    pub height: i64,
    pub xadvance: i64,
    pub page: u32,
    pub chnl: u32,
}

impl CharRow {
    pub fn new(bound: &PaddedGlyphBound, scale: f64, letter_spacing: i32) -> Self {
        let advance = scale * bound.glyph.advance_width
            + f64::from(bound.padding.right)
            + f64::from(letter_spacing);
        Self {
            id: bound.glyph.codepoint,
            letter: bound.glyph.name.clone(),
            x: round_half_up(bound.packed_x),
            y: round_half_up(bound.packed_y),
            xoffset: round_half_up(bound.bounds.x),
            yoffset: round_half_up(bound.bounds.y),
            width: round_half_up(bound.bounds.width),
            height: round_half_up(bound.bounds.height),
            xadvance: round_half_up(advance),
            page: PAGE_ID,
            chnl: CHANNEL_ALL,
        }
    }
}

/// The finished descriptor of a single-page atlas
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FontDescriptor {
    pub face: FaceMeta,
    pub padding: Padding,
    pub base: i64,
    pub scale_w: u32,
    pub scale_h: u32,
    pub line_height: i64,
    pub page_file: String,
    pub chars: Vec<CharRow>,
    pub kernings: Vec<KerningPair>,
}

impl FontDescriptor {
    pub fn new(
        face: FaceMeta,
        config: &AtlasConfig,
        metrics: FontMetrics,
        placed: &[PaddedGlyphBound],
        kernings: Vec<KerningPair>,
    ) -> Self {
        let scale = metrics.unit_scale(f64::from(config.size));
        let chars: Vec<CharRow> = placed
            .iter()
            .map(|bound| CharRow::new(bound, scale, config.letter_spacing))
            .collect();
        let base = placed
            .iter()
            .map(|bound| bound.bounds.y)
            .reduce(f64::min)
            .map(|min_y| -round_half_up(min_y))
            .unwrap_or(0);

        Self {
            face,
            padding: config.padding,
            base,
            scale_w: config.width,
            scale_h: config.height,
            line_height: i64::from(config.size) + i64::from(config.line_spacing),
            page_file: config.page_file.clone(),
            chars,
            kernings,
        }
    }

    pub fn to_text(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for FontDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let face = &self.face;
        writeln!(f, "<font>")?;
        writeln!(f, "    <info face='{}' ", escape(&face.name))?;
        writeln!(f, "          size='{}' ", face.size)?;
        writeln!(f, "          bold='{}' ", u8::from(face.bold))?;
        writeln!(f, "          italic='{}' ", u8::from(face.italic))?;
        writeln!(f, "          padding='{}' ", self.padding.to_descriptor())?;
        writeln!(
            f,
            "          charset='' unicode='' stretchH='{}' smooth='1' aa='1' spacing='0,0' outline='0'/>",
            STRETCH_H
        )?;
        writeln!(f, "    <common base='{}' ", self.base)?;
        writeln!(f, "            scaleW='{}' ", self.scale_w)?;
        writeln!(f, "            scaleH='{}' ", self.scale_h)?;
        writeln!(f, "            lineHeight='{}' ", self.line_height)?;
        writeln!(f, "            pages='{}' packed='0'/>", PAGE_COUNT)?;
        writeln!(f, "    <pages>")?;
        writeln!(f, "        <page id='{}' file='{}'/>", PAGE_ID, escape(&self.page_file))?;
        writeln!(f, "    </pages>")?;

        writeln!(f, "    <chars count='{}'>", self.chars.len())?;
        for row in &self.chars {
            let attrs = [
                ("id", row.id.to_string()),
                ("letter", escape(&row.letter)),
                ("x", row.x.to_string()),
                ("y", row.y.to_string()),
                ("xoffset", row.xoffset.to_string()),
                ("yoffset", row.yoffset.to_string()),
                ("width", row.width.to_string()),
                ("height", row.height.to_string()),
                ("xadvance", row.xadvance.to_string()),
                ("page", row.page.to_string()),
                ("chnl", row.chnl.to_string()),
            ];
            writeln!(f, "        <char {}/>", attributes(&attrs))?;
        }
        writeln!(f, "    </chars>")?;

        writeln!(f, "    <kernings count='{}'>", self.kernings.len())?;
        for pair in &self.kernings {
            let attrs = [
                ("first", pair.first.to_string()),
                ("second", pair.second.to_string()),
                ("amount", pair.amount.to_string()),
            ];
            writeln!(f, "        <kerning {}/>", attributes(&attrs))?;
        }
        writeln!(f, "    </kernings>")?;
        write!(f, "</font>")
    }
}

/// Serialize the descriptor of an already packed atlas
pub fn serialize_descriptor(
    face: FaceMeta,
    config: &AtlasConfig,
    metrics: FontMetrics,
    placed: &[PaddedGlyphBound],
    kernings: Vec<KerningPair>,
) -> String {
    FontDescriptor::new(face, config, metrics, placed, kernings).to_text()
}

// Each attribute is followed by a single space
fn attributes(attrs: &[(&str, String)]) -> String {
    let mut out = String::new();
    for (name, value) in attrs {
        let _ = write!(out, "{}='{}' ", name, value);
    }
    out
}

fn escape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '\'' => out.push_str("&apos;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}
