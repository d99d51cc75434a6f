//! Cairo rasterizer for packed atlases

use std::fs::File;
use std::path::Path as FsPath;

use cairo::{Context, Extend, Format, ImageSurface, SurfacePattern};
use fontgen_core::{
    AtlasRenderer, GlyphStyle, LineCap, LineJoin, PaddedGlyphBound, Path, PathCommand,
};
use tracing::debug;

use crate::color::Rgba;
use crate::error::{RasterError, RasterResult};

const DEFAULT_LINE_WIDTH: f64 = 1.0;

/// Draws glyph outlines onto an ARGB32 surface the size of the atlas
pub struct CairoRasterizer {
    surface: ImageSurface,
    pattern: Option<ImageSurface>,
}

impl CairoRasterizer {
    pub fn new(width: u32, height: u32) -> RasterResult<Self> {
        let invalid = || RasterError::InvalidSize { width, height };
        let w = i32::try_from(width).map_err(|_| invalid())?;
        let h = i32::try_from(height).map_err(|_| invalid())?;
        if w == 0 || h == 0 {
            return Err(invalid());
        }
        Ok(Self {
            surface: ImageSurface::create(Format::ARgb32, w, h)?,
            pattern: None,
        })
    }

    /// Fill glyph interiors with a repeating image instead of a colour
    ///
    /// Takes precedence over the pattern file named by [`GlyphStyle::pattern`].
    pub fn with_pattern(mut self, pattern: ImageSurface) -> Self {
        self.pattern = Some(pattern);
        self
    }

    pub fn surface_mut(&mut self) -> &mut ImageSurface {
        &mut self.surface
    }

    pub fn write_png<P: AsRef<FsPath>>(&self, path: P) -> RasterResult<()> {
        self.surface.flush();
        let mut file = File::create(path)?;
        self.surface.write_to_png(&mut file)?;
        Ok(())
    }

    fn draw(&self, glyphs: &[PaddedGlyphBound], style: &GlyphStyle) -> RasterResult<()> {
        let ctx = Context::new(&self.surface)?;

        if let Some(shadow) = &style.shadow_color {
            if style.shadow_blur > 0.0 {
                debug!(
                    "Shadow blur {} is not supported, drawing a sharp shadow",
                    style.shadow_blur
                );
            }
            let color = Rgba::parse(shadow)?;
            ctx.set_source_rgba(color.r, color.g, color.b, color.a);
            for glyph in glyphs {
                ctx.new_path();
                trace_path(&ctx, &glyph.atlas_path(), style.shadow_offset_x, style.shadow_offset_y);
                ctx.fill()?;
            }
        }

        let fill = style.fill.as_deref().map(Rgba::parse).transpose()?;
        let stroke = style.stroke.as_deref().map(Rgba::parse).transpose()?;
        let loaded = match (&self.pattern, &style.pattern) {
            (None, Some(path)) => Some(load_pattern(path)?),
            _ => None,
        };
        let pattern = self.pattern.as_ref().or(loaded.as_ref()).map(|image| {
            let pattern = SurfacePattern::create(image);
            pattern.set_extend(Extend::Repeat);
            pattern
        });

        for glyph in glyphs {
            ctx.new_path();
            trace_path(&ctx, &glyph.atlas_path(), 0.0, 0.0);

            if let Some(pattern) = &pattern {
                ctx.set_source(pattern)?;
                ctx.fill_preserve()?;
            } else if let Some(color) = fill {
                ctx.set_source_rgba(color.r, color.g, color.b, color.a);
                ctx.fill_preserve()?;
            }

            if let Some(color) = stroke {
                ctx.set_source_rgba(color.r, color.g, color.b, color.a);
                ctx.set_line_width(style.line_width.unwrap_or(DEFAULT_LINE_WIDTH));
                ctx.set_line_cap(line_cap(style.line_cap));
                ctx.set_line_join(line_join(style.line_join));
                ctx.set_dash(style.line_dash.as_deref().unwrap_or(&[]), 0.0);
                ctx.stroke_preserve()?;
            }
        }
        ctx.new_path();
        Ok(())
    }
}

impl AtlasRenderer for CairoRasterizer {
    type Error = RasterError;

    fn render(&mut self, glyphs: &[PaddedGlyphBound], style: &GlyphStyle) -> RasterResult<()> {
        debug!("Rasterizing {} glyphs", glyphs.len());
        self.draw(glyphs, style)
    }
}

/// Load a PNG used as fill pattern
pub fn load_pattern<P: AsRef<FsPath>>(path: P) -> RasterResult<ImageSurface> {
    let mut file = File::open(path)?;
    Ok(ImageSurface::create_from_png(&mut file)?)
}

/// Append `path` to the context, quadratic segments raised to cubic
fn trace_path(ctx: &Context, path: &Path, dx: f64, dy: f64) {
    let mut current = (0.0, 0.0);
    let mut start = (0.0, 0.0);
    for command in &path.commands {
        match *command {
            PathCommand::MoveTo { x, y } => {
                ctx.move_to(x + dx, y + dy);
                current = (x, y);
                start = current;
            }
            PathCommand::LineTo { x, y } => {
                ctx.line_to(x + dx, y + dy);
                current = (x, y);
            }
            PathCommand::QuadTo { x1, y1, x, y } => {
                let (x0, y0) = current;
                let c1 = (x0 + 2.0 / 3.0 * (x1 - x0), y0 + 2.0 / 3.0 * (y1 - y0));
                let c2 = (x + 2.0 / 3.0 * (x1 - x), y + 2.0 / 3.0 * (y1 - y));
                ctx.curve_to(c1.0 + dx, c1.1 + dy, c2.0 + dx, c2.1 + dy, x + dx, y + dy);
                current = (x, y);
            }
            PathCommand::CurveTo { x1, y1, x2, y2, x, y } => {
                ctx.curve_to(x1 + dx, y1 + dy, x2 + dx, y2 + dy, x + dx, y + dy);
                current = (x, y);
            }
            PathCommand::Close => {
                ctx.close_path();
                current = start;
            }
        }
    }
}

fn line_cap(cap: LineCap) -> cairo::LineCap {
    match cap {
        LineCap::Butt => cairo::LineCap::Butt,
        LineCap::Round => cairo::LineCap::Round,
        LineCap::Square => cairo::LineCap::Square,
    }
}

fn line_join(join: LineJoin) -> cairo::LineJoin {
    match join {
        LineJoin::Miter => cairo::LineJoin::Miter,
        LineJoin::Round => cairo::LineJoin::Round,
        LineJoin::Bevel => cairo::LineJoin::Bevel,
    }
}
