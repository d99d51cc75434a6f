//! Glyph outlines and the path commands they produce
//!
//! Outlines are stored in font design units with Y pointing up, the way
//! fonts define them. [`GlyphOutline::path`] scales them to pixels and flips
//! them to Y-down atlas space.

/// One drawing command of a glyph path
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PathCommand {
    MoveTo { x: f64, y: f64 },
    LineTo { x: f64, y: f64 },
    /// Quadratic Bezier (TrueType outlines)
    QuadTo { x1: f64, y1: f64, x: f64, y: f64 },
    /// Cubic Bezier (CFF outlines)
    CurveTo { x1: f64, y1: f64, x2: f64, y2: f64, x: f64, y: f64 },
    Close,
}

impl PathCommand {
    /// The end point this command carries, if any
    ///
    /// Control points are not reported; bounds are measured on end points
    /// only.
    pub fn end_point(&self) -> Option<(f64, f64)> {
        match *self {
            PathCommand::MoveTo { x, y }
            | PathCommand::LineTo { x, y }
            | PathCommand::QuadTo { x, y, .. }
            | PathCommand::CurveTo { x, y, .. } => Some((x, y)),
            PathCommand::Close => None,
        }
    }

    /// Apply `(x, y) -> (dx + x * sx, dy + y * sy)` to every coordinate
    fn transform(&self, dx: f64, dy: f64, sx: f64, sy: f64) -> Self {
        let tx = |x: f64| dx + x * sx;
        let ty = |y: f64| dy + y * sy;
        match *self {
            PathCommand::MoveTo { x, y } => PathCommand::MoveTo { x: tx(x), y: ty(y) },
            PathCommand::LineTo { x, y } => PathCommand::LineTo { x: tx(x), y: ty(y) },
            PathCommand::QuadTo { x1, y1, x, y } => PathCommand::QuadTo {
                x1: tx(x1),
                y1: ty(y1),
                x: tx(x),
                y: ty(y),
            },
            PathCommand::CurveTo { x1, y1, x2, y2, x, y } => PathCommand::CurveTo {
                x1: tx(x1),
                y1: ty(y1),
                x2: tx(x2),
                y2: ty(y2),
                x: tx(x),
                y: ty(y),
            },
            PathCommand::Close => PathCommand::Close,
        }
    }
}

/// An ordered list of path commands
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Path {
    pub commands: Vec<PathCommand>,
}

impl Path {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn move_to(&mut self, x: f64, y: f64) {
        self.commands.push(PathCommand::MoveTo { x, y });
    }

    pub fn line_to(&mut self, x: f64, y: f64) {
        self.commands.push(PathCommand::LineTo { x, y });
    }

    pub fn quad_to(&mut self, x1: f64, y1: f64, x: f64, y: f64) {
        self.commands.push(PathCommand::QuadTo { x1, y1, x, y });
    }

    pub fn curve_to(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, x: f64, y: f64) {
        self.commands.push(PathCommand::CurveTo { x1, y1, x2, y2, x, y });
    }

    pub fn close(&mut self) {
        self.commands.push(PathCommand::Close);
    }
}

/// A single character's outline as handed over by a font provider
#[derive(Clone, Debug, PartialEq)]
pub struct GlyphOutline {
    /// Codepoint written as the descriptor `id`
    pub codepoint: u32,
    /// Display name written as the descriptor `letter`
    pub name: String,
    /// Advance width in font units
    pub advance_width: f64,
    /// Provider-specific glyph index, used for kerning lookups
    pub glyph_index: u16,
    pub units_per_em: f64,
    /// Outline in font units, Y-up
    pub outline: Path,
}

impl GlyphOutline {
    /// Path commands with the pen at `(x, y)` for a `size` pixel em
    pub fn path(&self, x: f64, y: f64, size: f64) -> Path {
        let scale = if self.units_per_em > 0.0 {
            size / self.units_per_em
        } else {
            0.0
        };
        Path {
            commands: self
                .outline
                .commands
                .iter()
                .map(|cmd| cmd.transform(x, y, scale, -scale))
                .collect(),
        }
    }
}
